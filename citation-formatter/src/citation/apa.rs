use crate::citation::author::apa_name;
use crate::citation::punctuation::{close_sentence, join_sentences, join_with_ampersand};
use crate::models::Article;

const DOI_RESOLVER: &str = "https://doi.org/";

/// Format an article per APA 7th edition
///
/// `Smith, J., Johnson, M., & Williams, R. (2024). Title. Journal, 15(3), 125-140. https://doi.org/10.1/x`
pub fn format_apa(article: &Article) -> String {
    let mut segments = Vec::new();

    // Author and date element
    let names: Vec<String> = article.author_names().into_iter().map(apa_name).collect();
    let mut lead = join_with_ampersand(&names);
    if let Some(year) = article.year {
        if !lead.is_empty() {
            lead.push(' ');
        }
        lead.push_str(&format!("({year})"));
    }
    segments.push(lead);

    segments.push(article.title_en.clone());

    // Source element: journal, volume(issue), pages
    let locus = match (&article.volume, &article.issue) {
        (Some(volume), Some(issue)) => Some(format!("{volume}({issue})")),
        (Some(volume), None) => Some(volume.clone()),
        _ => None,
    };
    let source: Vec<&str> = [
        article.journal.as_deref(),
        locus.as_deref(),
        article.pages.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    segments.push(source.join(", "));

    let mut citation = close_sentence(join_sentences(&segments));

    if let Some(ref doi) = article.doi {
        citation.push_str(&format!(" {DOI_RESOLVER}{doi}"));
    }

    citation
}
