//! Style-level behaviour of the GOST, APA and Vancouver formatters

use rstest::*;

use citation_formatter::{
    Article, CitationFormat, CitationStyle, format_apa, format_citation, format_gost,
    format_vancouver,
};

mod common;
use common::{FAMILY_NAMES, article_with_authors, metformin_article};

#[fixture]
fn article() -> Article {
    metformin_article()
}

#[rstest]
fn test_gost_worked_example(article: Article) {
    let citation = format_gost(&article);

    assert!(citation.contains("Smith J."));
    assert!(citation.contains("// Journal of Clinical Investigation"));
    assert!(citation.contains("Vol. 15"));
    assert!(citation.contains("No. 3"));
    assert!(citation.contains("P. 125-140"));
    assert!(citation.contains("DOI: 10.1234/jci.2024.001"));
    assert!(citation.ends_with('.'));

    insta::assert_snapshot!(citation, @"Smith J., Johnson M., Williams R. Effect of Metformin on Glucose Metabolism // Journal of Clinical Investigation 2024 Vol. 15 No. 3 P. 125-140 DOI: 10.1234/jci.2024.001.");
}

#[rstest]
fn test_apa_worked_example(article: Article) {
    let citation = format_apa(&article);

    assert!(citation.contains("Smith, J., Johnson, M., & Williams, R."));
    assert!(citation.contains("https://doi.org/10.1234/jci.2024.001"));

    insta::assert_snapshot!(citation, @"Smith, J., Johnson, M., & Williams, R. (2024). Effect of Metformin on Glucose Metabolism. Journal of Clinical Investigation, 15(3), 125-140. https://doi.org/10.1234/jci.2024.001");
}

#[rstest]
fn test_vancouver_worked_example(article: Article) {
    let citation = format_vancouver(&article);

    assert!(citation.contains("Smith J"));
    assert!(citation.contains(";15(3):125-140"));
    assert!(citation.contains("doi:10.1234/jci.2024.001"));

    insta::assert_snapshot!(citation, @"Smith J, Johnson M, Williams R. Effect of Metformin on Glucose Metabolism. Journal of Clinical Investigation. 2024;15(3):125-140. doi:10.1234/jci.2024.001");
}

#[rstest]
#[case("Effect of Metformin...")]
#[case("A Study of Everything")]
#[case("Заголовок статьи")]
fn test_title_only_gost(#[case] title: &str) {
    let article = Article::new(title);
    let expected = if title.ends_with('.') {
        title.to_string()
    } else {
        format!("{title}.")
    };

    assert_eq!(format_gost(&article), expected);
    assert_eq!(format_citation(&article, "gost"), expected);
}

#[rstest]
#[case(4)]
#[case(5)]
#[case(8)]
fn test_gost_truncates_after_three_authors(#[case] count: usize) {
    let citation = format_gost(&article_with_authors(count));

    assert!(citation.contains("et al."));
    for family in &FAMILY_NAMES[..3] {
        assert!(citation.contains(family), "missing {family} in {citation}");
    }
    for family in &FAMILY_NAMES[3..count] {
        assert!(!citation.contains(family), "unexpected {family} in {citation}");
    }
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn test_gost_lists_up_to_three_authors(#[case] count: usize) {
    let citation = format_gost(&article_with_authors(count));
    assert!(!citation.contains("et al."));
    for family in &FAMILY_NAMES[..count] {
        assert!(citation.contains(family));
    }
}

#[test]
fn test_apa_single_author_has_no_ampersand() {
    assert!(!format_apa(&article_with_authors(1)).contains('&'));
}

#[test]
fn test_apa_two_authors() {
    let citation = format_apa(&article_with_authors(2));
    assert_eq!(citation.matches('&').count(), 1);
    assert!(citation.starts_with("Anderson, A. & Baker, A. (2020)."));
    assert!(!citation.contains(", &"));
}

#[rstest]
#[case(3, "Clark")]
#[case(5, "Evans")]
#[case(8, "Hughes")]
fn test_apa_serial_comma(#[case] count: usize, #[case] last_family: &str) {
    let citation = format_apa(&article_with_authors(count));
    assert!(
        citation.contains(&format!(", & {last_family}, A.")),
        "no serial comma in {citation}"
    );
    assert_eq!(citation.matches('&').count(), 1);
}

#[rstest]
#[case(7)]
#[case(8)]
fn test_vancouver_truncates_after_six_authors(#[case] count: usize) {
    let citation = format_vancouver(&article_with_authors(count));

    assert!(citation.contains("et al"));
    assert!(citation.contains("Foster A, et al."));
    for family in &FAMILY_NAMES[6..count] {
        assert!(!citation.contains(family), "unexpected {family} in {citation}");
    }
}

#[test]
fn test_vancouver_six_authors_are_all_listed() {
    let citation = format_vancouver(&article_with_authors(6));
    assert!(!citation.contains("et al"));
    assert!(citation.starts_with("Anderson A, Baker A, Clark A, Davis A, Evans A, Foster A. "));
}

#[rstest]
#[case(Article::new("Plain title"))]
#[case(Article::new("With pages").with_year(2020).with_pages("10-20"))]
#[case(Article::new("With journal").with_journal("BMJ").with_doi("10.1136/bmj.1"))]
#[case(article_with_authors(8))]
fn test_vancouver_without_volume_or_issue_has_no_locus_brackets(#[case] article: Article) {
    let citation = format_vancouver(&article);
    assert!(!citation.contains(';'), "semicolon in {citation}");
    assert!(!citation.contains('('), "parenthesis in {citation}");
}

#[rstest]
fn test_unknown_style_falls_back_to_gost(
    article: Article,
    #[values("unknown-value", "", "APA", "harvard", "Gost")] style: &str,
) {
    assert_eq!(
        format_citation(&article, style),
        format_citation(&article, "gost")
    );
}

#[rstest]
fn test_formatting_is_deterministic(
    article: Article,
    #[values(CitationStyle::Gost, CitationStyle::Apa, CitationStyle::Vancouver)] style: CitationStyle,
) {
    let first = article.to_citation(style);
    let second = article.clone().to_citation(style);
    assert_eq!(first, second);
    assert_eq!(first, format_citation(&article, style.name()));
}

#[rstest]
fn test_missing_optional_fields_never_double_punctuation(
    #[values(CitationStyle::Gost, CitationStyle::Apa, CitationStyle::Vancouver)] style: CitationStyle,
) {
    let sparse = [
        Article::new("Title"),
        Article::new("Title").with_journal("Cell"),
        Article::new("Title").with_year(2020),
        Article::new("Title").with_authors(["Smith John"]),
        Article::new("Title").with_volume("3").with_pages("1-2"),
        Article::new("Title").with_authors(Vec::<String>::new()).with_doi("10.1/x"),
    ];

    for article in &sparse {
        let citation = style.format(article);
        assert!(!citation.is_empty());
        assert!(!citation.contains(".."), "{style}: {citation}");
        assert!(!citation.contains("  "), "{style}: {citation}");
        assert!(!citation.contains(" ."), "{style}: {citation}");
        assert!(!citation.starts_with([' ', ',', '.']), "{style}: {citation}");
    }
}

#[test]
fn test_unrendered_fields_do_not_change_output() {
    let base = metformin_article();
    let extended = base.clone().with_title_ru("Заголовок").with_pmid("38000001");

    for style in CitationStyle::ALL {
        assert_eq!(style.format(&base), style.format(&extended));
    }
}
