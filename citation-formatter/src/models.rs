//! Article records consumed by the citation formatters

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A scientific article as supplied by the caller
///
/// Only `title_en` is required. Every other field is optional and its
/// citation segment is skipped when absent. `title_ru` and `pmid` are carried
/// for callers that display them but no citation style renders them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Article {
    /// Primary (English) title
    pub title_en: String,
    /// Alternate (Russian) title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_ru: Option<String>,
    /// Author names in `"LastName FirstName [Middle]"` form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    /// Pre-formatted page range, e.g. `"125-140"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmid: Option<String>,
}

impl Article {
    /// Create an article with only a title
    pub fn new(title_en: impl Into<String>) -> Self {
        Self {
            title_en: title_en.into(),
            ..Self::default()
        }
    }

    /// Decode a single article record from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_title_ru(mut self, title: impl Into<String>) -> Self {
        self.title_ru = Some(title.into());
        self
    }

    /// Set the author list
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = Some(authors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_journal(mut self, journal: impl Into<String>) -> Self {
        self.journal = Some(journal.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = Some(volume.into());
        self
    }

    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issue = Some(issue.into());
        self
    }

    pub fn with_pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = Some(pages.into());
        self
    }

    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    pub fn with_pmid(mut self, pmid: impl Into<String>) -> Self {
        self.pmid = Some(pmid.into());
        self
    }

    /// Author names that carry at least one non-whitespace character
    pub(crate) fn author_names(&self) -> Vec<&str> {
        self.authors
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
            .collect()
    }
}

/// Decode article records from JSON
///
/// Accepts either an array of records or a single record object.
pub fn articles_from_json(json: &str) -> Result<Vec<Article>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<Article>),
        One(Box<Article>),
    }

    let articles = match serde_json::from_str::<OneOrMany>(json)? {
        OneOrMany::Many(articles) => articles,
        OneOrMany::One(article) => vec![*article],
    };
    Ok(articles)
}
