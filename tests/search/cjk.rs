//! Mixed Chinese/Latin behavior: the reason the bigram tokenizer exists.

use crate::common::docs_index;
use ydoc_search::{search, tokenize};

#[test]
fn inner_substring_of_cjk_run_matches() {
    // "操作类" never appears after a word boundary - it is an inner slice
    // of continuous Chinese prose. Bigram indexing must still find it.
    let results = search(&docs_index(), "操作", 10);
    assert!(!results.is_empty());

    let results = search(&docs_index(), "操作类", 10);
    assert!(!results.is_empty());
}

#[test]
fn mixed_script_query_matches_both_sides() {
    let results = search(&docs_index(), "redis 操作", 10);
    assert!(!results.is_empty());
    assert!(results
        .iter()
        .any(|r| r.url == "/docs/redis.html" || r.url == "/docs/module.html#buession-redis"));
}

#[test]
fn latin_case_and_cjk_coexist_in_one_query() {
    let lower = search(&docs_index(), "jedis 实现", 10);
    let upper = search(&docs_index(), "JEDIS 实现", 10);
    assert_eq!(lower, upper);
}

#[test]
fn single_ideograph_query_matches_single_char_runs() {
    // "对 apache httpcomponents、okhttp3 进行封装" has the lone run "对".
    let tokens = tokenize("对 apache 进行封装");
    assert!(tokens.iter().any(|t| t.term == "对"));

    let results = search(&docs_index(), "对", 10);
    assert!(!results.is_empty());
}

#[test]
fn cjk_snippet_ranges_cover_merged_bigrams() {
    let results = search(&docs_index(), "响应头", 10);
    assert_eq!(results.len(), 1);
    let r = &results[0];
    let chars: Vec<char> = r.snippet.chars().collect();
    assert!(!r.snippet_ranges.is_empty());
    let range = r.snippet_ranges[0];
    let span: String = chars[range.start..range.start + range.len].iter().collect();
    assert!(span.contains("响应头"));
}
