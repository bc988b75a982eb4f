use crate::citation::author::gost_name;
use crate::citation::punctuation::{ensure_trailing_period, truncate};
use crate::models::Article;

/// Authors listed before `et al.` takes over
const MAX_AUTHORS: usize = 3;

/// Format an article per ГОСТ Р 7.0.5-2008
///
/// `Smith J., Johnson M., Williams R. Title // Journal 2024 Vol. 15 No. 3 P. 125-140 DOI: 10.1/x.`
pub fn format_gost(article: &Article) -> String {
    let mut citation = String::new();

    let names = article.author_names();
    if !names.is_empty() {
        let (shown, truncated) = truncate(&names, MAX_AUTHORS);
        let rendered: Vec<String> = shown.iter().map(|name| gost_name(name)).collect();
        citation.push_str(&rendered.join(", "));
        if truncated {
            citation.push_str(" et al.");
        }
        citation.push(' ');
    }

    citation.push_str(&article.title_en);

    if let Some(ref journal) = article.journal {
        citation.push_str(&format!(" // {journal}"));
    }
    if let Some(year) = article.year {
        citation.push_str(&format!(" {year}"));
    }
    if let Some(ref volume) = article.volume {
        citation.push_str(&format!(" Vol. {volume}"));
    }
    if let Some(ref issue) = article.issue {
        citation.push_str(&format!(" No. {issue}"));
    }
    if let Some(ref pages) = article.pages {
        citation.push_str(&format!(" P. {pages}"));
    }
    if let Some(ref doi) = article.doi {
        citation.push_str(&format!(" DOI: {doi}"));
    }

    ensure_trailing_period(citation)
}
