use crate::citation::author::vancouver_name;
use crate::citation::punctuation::{close_sentence, join_sentences, truncate};
use crate::models::Article;

/// Authors listed before `et al` takes over
const MAX_AUTHORS: usize = 6;

/// Format an article in Vancouver style
///
/// `Smith J, Johnson M. Title. Journal. 2024;15(3):125-140. doi:10.1/x`
pub fn format_vancouver(article: &Article) -> String {
    let mut segments = Vec::new();

    let names = article.author_names();
    if !names.is_empty() {
        let (shown, truncated) = truncate(&names, MAX_AUTHORS);
        let mut authors = shown
            .iter()
            .map(|name| vancouver_name(name))
            .collect::<Vec<_>>()
            .join(", ");
        if truncated {
            authors.push_str(", et al");
        }
        segments.push(authors);
    }

    segments.push(article.title_en.clone());

    if let Some(ref journal) = article.journal {
        segments.push(journal.clone());
    }

    let source_locus = locus(article);
    match article.year {
        Some(year) => segments.push(format!("{year}{source_locus}")),
        // Without a date the locus hangs off the preceding element
        None if !source_locus.is_empty() => {
            if let Some(last) = segments.last_mut() {
                last.push_str(&source_locus);
            }
        }
        None => {}
    }

    let mut citation = close_sentence(join_sentences(&segments));

    if let Some(ref doi) = article.doi {
        citation.push_str(&format!(" doi:{doi}"));
    }

    citation
}

/// `;volume(issue):pages`, with `;` and `(` only when volume or issue exist
fn locus(article: &Article) -> String {
    let mut locus = String::new();

    if article.volume.is_some() || article.issue.is_some() {
        locus.push(';');
        if let Some(ref volume) = article.volume {
            locus.push_str(volume);
        }
        if let Some(ref issue) = article.issue {
            locus.push_str(&format!("({issue})"));
        }
    }
    if let Some(ref pages) = article.pages {
        locus.push(':');
        locus.push_str(pages);
    }

    locus
}
