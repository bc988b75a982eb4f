//! Numbered reference lists
//!
//! A bibliography renders every article in one style and prefixes each entry
//! with its 1-based position: `"1. Smith J. Title."`.

use tracing::debug;

use crate::citation::CitationStyle;
use crate::models::Article;

/// Configuration options for bibliography rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibliographyConfig {
    /// Style applied to every entry
    pub style: CitationStyle,
    /// Separator placed between entries by [`BibliographyFormatter::render`]
    pub separator: String,
}

impl Default for BibliographyConfig {
    fn default() -> Self {
        Self {
            style: CitationStyle::Gost,
            separator: "\n".to_string(),
        }
    }
}

/// Reference list renderer
#[derive(Debug, Clone, Default)]
pub struct BibliographyFormatter {
    config: BibliographyConfig,
}

impl BibliographyFormatter {
    /// Create a formatter for the given style with default configuration
    pub fn new(style: impl Into<CitationStyle>) -> Self {
        Self::default().with_style(style)
    }

    /// Create a formatter with custom configuration
    pub fn with_config(config: BibliographyConfig) -> Self {
        Self { config }
    }

    /// Set the citation style
    pub fn with_style(mut self, style: impl Into<CitationStyle>) -> Self {
        self.config.style = style.into();
        self
    }

    /// Set the separator used when rendering a single text block
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn config(&self) -> &BibliographyConfig {
        &self.config
    }

    /// Numbered entries, one per article, in input order
    pub fn format(&self, articles: &[Article]) -> Vec<String> {
        debug!(
            entries = articles.len(),
            style = %self.config.style,
            "Formatting bibliography"
        );

        articles
            .iter()
            .enumerate()
            .map(|(index, article)| {
                format!("{}. {}", index + 1, self.config.style.format(article))
            })
            .collect()
    }

    /// Numbered entries joined by the configured separator
    pub fn render(&self, articles: &[Article]) -> String {
        self.format(articles).join(&self.config.separator)
    }
}

/// Format a numbered reference list in one style
///
/// Unknown style identifiers silently use GOST. An empty slice yields an
/// empty list.
pub fn format_bibliography(articles: &[Article], style: impl Into<CitationStyle>) -> Vec<String> {
    BibliographyFormatter::new(style).format(articles)
}

/// Format a numbered reference list as newline-separated text
pub fn bibliography_to_text(articles: &[Article], style: impl Into<CitationStyle>) -> String {
    BibliographyFormatter::new(style).render(articles)
}
