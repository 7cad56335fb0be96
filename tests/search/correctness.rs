//! End-to-end query correctness over the docs fixture.

use crate::common::docs_index;
use ydoc_search::search;

#[test]
fn finds_section_by_latin_term() {
    let index = docs_index();
    let results = search(&index, "jedis", 10);
    assert!(!results.is_empty());
    // Both the module list section and the reference page mention jedis.
    let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
    assert!(urls.contains(&"/docs/module.html#buession-redis"));
    assert!(urls.contains(&"/docs/redis.html"));
}

#[test]
fn unknown_term_returns_empty() {
    assert!(search(&docs_index(), "mongodb", 10).is_empty());
}

#[test]
fn empty_and_punctuation_queries_return_empty() {
    let index = docs_index();
    assert!(search(&index, "", 10).is_empty());
    assert!(search(&index, "   ", 10).is_empty());
    assert!(search(&index, "！？。、", 10).is_empty());
}

#[test]
fn every_url_round_trips_from_corpus() {
    let index = docs_index();
    let corpus_urls: Vec<String> = {
        let corpus = crate::common::docs_corpus();
        corpus
            .categories
            .iter()
            .flat_map(|c| &c.pages)
            .flat_map(|p| {
                std::iter::once(p.url.clone()).chain(p.children.iter().map(|s| s.url.clone()))
            })
            .collect()
    };

    for query in ["jedis", "封装", "redis", "国际化", "isp"] {
        for result in search(&index, query, 20) {
            assert!(
                corpus_urls.contains(&result.url),
                "result url '{}' was not in the corpus",
                result.url
            );
        }
    }
}

#[test]
fn section_breadcrumbs_name_category_and_page() {
    let index = docs_index();
    let results = search(&index, "国际化", 10);
    assert_eq!(results.len(), 1);
    let r = &results[0];
    assert_eq!(r.url, "/docs/redis.html#展示层");
    assert_eq!(r.breadcrumb.category, "参考手册");
    assert_eq!(r.breadcrumb.page.as_deref(), Some("buession-redis"));
}

#[test]
fn snippet_highlights_match_in_section_body() {
    let index = docs_index();
    let results = search(&index, "okhttp3", 10);
    assert_eq!(results.len(), 1);
    let r = &results[0];
    assert!(r.snippet.contains("okhttp3"));
    assert!(!r.snippet_ranges.is_empty());

    let chars: Vec<char> = r.snippet.chars().collect();
    let range = r.snippet_ranges[0];
    let span: String = chars[range.start..range.start + range.len].iter().collect();
    assert_eq!(span, "okhttp3");
}
