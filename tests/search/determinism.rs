//! Output order must not depend on hash-map iteration or rebuilds.

use crate::common::{docs_corpus, docs_index};
use ydoc_search::{build_index, search};

#[test]
fn repeated_queries_identical() {
    let index = docs_index();
    for query in ["jedis", "封装", "redis 操作", "isp"] {
        let first = search(&index, query, 20);
        for _ in 0..5 {
            assert_eq!(search(&index, query, 20), first, "query '{}'", query);
        }
    }
}

#[test]
fn rebuilt_index_identical_results() {
    let corpus = docs_corpus();
    let a = build_index(&corpus);
    let b = build_index(&corpus);
    for query in ["jedis", "封装", "操作类", "okhttp3", "响应头"] {
        assert_eq!(
            search(&a, query, 20),
            search(&b, query, 20),
            "query '{}' differs between builds",
            query
        );
    }
}

#[test]
fn scores_exposed_are_descending() {
    let results = search(&docs_index(), "封装", 20);
    assert!(results.len() >= 2, "fixture should have several 封装 docs");
    for window in results.windows(2) {
        assert!(window[0].score >= window[1].score);
    }
}
