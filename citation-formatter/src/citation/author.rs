//! Author name rendering
//!
//! Names arrive as `"LastName FirstName [Middle...]"`. The first token is the
//! family name and every following token is a given name.

/// A raw author name split into family and given names
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AuthorName<'a> {
    pub family: &'a str,
    pub given: Vec<&'a str>,
}

impl<'a> AuthorName<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let mut tokens = raw.split_whitespace();
        let family = tokens.next().unwrap_or("");
        Self {
            family,
            given: tokens.collect(),
        }
    }

    /// First letter of the first given name, as written
    fn first_initial(&self) -> Option<char> {
        self.given.first().and_then(|given| given.chars().next())
    }
}

/// `"Family I."` for GOST
pub(crate) fn gost_name(raw: &str) -> String {
    let name = AuthorName::parse(raw);
    match name.first_initial() {
        Some(initial) => format!("{} {initial}.", name.family),
        None => name.family.to_string(),
    }
}

/// `"Family, I."` for APA
pub(crate) fn apa_name(raw: &str) -> String {
    let name = AuthorName::parse(raw);
    match name.first_initial() {
        Some(initial) => format!("{}, {initial}.", name.family),
        None => name.family.to_string(),
    }
}

/// `"Family FM"` for Vancouver: uppercase initials of every given name
pub(crate) fn vancouver_name(raw: &str) -> String {
    let name = AuthorName::parse(raw);
    let initials: String = name
        .given
        .iter()
        .filter_map(|given| given.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        name.family.to_string()
    } else {
        format!("{} {initials}", name.family)
    }
}
