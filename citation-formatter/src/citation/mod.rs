//! Citation styles for article records
//!
//! This module renders a single [`Article`] as a reference-list entry in one
//! of the supported academic styles:
//!
//! - **GOST** - Russian national standard ГОСТ Р 7.0.5-2008
//! - **APA** - American Psychological Association, 7th edition conventions
//! - **Vancouver** - biomedical style with `year;volume(issue):pages` locus

mod apa;
mod author;
mod gost;
mod punctuation;
mod vancouver;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CitationError;
use crate::models::Article;

pub use apa::format_apa;
pub use gost::format_gost;
pub use vancouver::format_vancouver;

/// Supported citation styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationStyle {
    /// ГОСТ Р 7.0.5-2008
    #[default]
    Gost,
    /// APA 7th edition
    Apa,
    /// Vancouver (ICMJE / NLM)
    Vancouver,
}

impl CitationStyle {
    /// Every supported style, in display order
    pub const ALL: [CitationStyle; 3] = [Self::Gost, Self::Apa, Self::Vancouver];

    /// Lowercase identifier of the style
    pub fn name(self) -> &'static str {
        match self {
            Self::Gost => "gost",
            Self::Apa => "apa",
            Self::Vancouver => "vancouver",
        }
    }

    /// Resolve a style identifier, falling back to GOST for anything unknown
    ///
    /// Matching is case-sensitive: `"APA"` resolves to GOST.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            debug!(style = name, "Unknown citation style, falling back to gost");
            Self::Gost
        })
    }

    /// Render an article in this style
    pub fn format(self, article: &Article) -> String {
        match self {
            Self::Gost => format_gost(article),
            Self::Apa => format_apa(article),
            Self::Vancouver => format_vancouver(article),
        }
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CitationStyle {
    type Err = CitationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gost" => Ok(Self::Gost),
            "apa" => Ok(Self::Apa),
            "vancouver" => Ok(Self::Vancouver),
            other => Err(CitationError::UnknownStyle {
                name: other.to_string(),
            }),
        }
    }
}

impl From<&str> for CitationStyle {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<&String> for CitationStyle {
    fn from(name: &String) -> Self {
        Self::from_name(name)
    }
}

impl From<Option<&str>> for CitationStyle {
    fn from(name: Option<&str>) -> Self {
        name.map(Self::from_name).unwrap_or_default()
    }
}

/// Format an article in the requested style
///
/// Unknown style identifiers silently use GOST.
pub fn format_citation(article: &Article, style: impl Into<CitationStyle>) -> String {
    style.into().format(article)
}

/// Trait for rendering articles as formatted citations
pub trait CitationFormat {
    /// Render the article per ГОСТ Р 7.0.5-2008
    fn to_gost(&self) -> String;

    /// Render the article per APA 7th edition
    fn to_apa(&self) -> String;

    /// Render the article in Vancouver style
    fn to_vancouver(&self) -> String;

    /// Render the article in the requested style
    fn to_citation(&self, style: CitationStyle) -> String;
}

impl CitationFormat for Article {
    fn to_gost(&self) -> String {
        format_gost(self)
    }

    fn to_apa(&self) -> String {
        format_apa(self)
    }

    fn to_vancouver(&self) -> String {
        format_vancouver(self)
    }

    fn to_citation(&self, style: CitationStyle) -> String {
        style.format(self)
    }
}
