#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Citation Formatter
//!
//! Bibliographic citation formatting for scientific articles.
//!
//! This crate turns plain article records into reference-list strings:
//!
//! - **Citation Styles**: GOST (ГОСТ Р 7.0.5-2008), APA and Vancouver
//! - **Bibliographies**: numbered reference lists in a single style
//!
//! Every formatting function is pure: the same article and style always
//! produce the same string.
//!
//! ```
//! use citation_formatter::{Article, format_citation};
//!
//! let article = Article::new("Effect of Metformin")
//!     .with_authors(["Smith John"])
//!     .with_year(2024);
//!
//! assert_eq!(format_citation(&article, "apa"), "Smith, J. (2024). Effect of Metformin.");
//! ```

pub mod bibliography;
pub mod citation;
pub mod error;
pub mod models;

// Re-export main types for convenience
pub use bibliography::{
    BibliographyConfig, BibliographyFormatter, bibliography_to_text, format_bibliography,
};
pub use citation::{
    CitationFormat, CitationStyle, format_apa, format_citation, format_gost, format_vancouver,
};
pub use error::{CitationError, Result};
pub use models::{Article, articles_from_json};
