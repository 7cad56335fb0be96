//! Ranking order: field weights, IDF, tie-breaks.

use ydoc_search::testing::corpus_from_pages;
use ydoc_search::{build_index, search_hits};

#[test]
fn title_hit_strictly_above_body_hit() {
    // Same term once in one candidate's title, once in another's body only.
    let index = build_index(&corpus_from_pages(&[
        ("其它页面", "连接池 的正文说明", "/body.html"),
        ("连接池", "别的正文", "/title.html"),
    ]));
    let hits = search_hits(&index, "连接池", 10);
    assert_eq!(hits.len(), 2);
    assert_eq!(index.docs[hits[0].doc_id].url, "/title.html");
    assert!(hits[0].score > hits[1].score, "strictly higher, not tied");
}

#[test]
fn repeated_occurrences_raise_score() {
    let index = build_index(&corpus_from_pages(&[
        ("a", "redis once", "/a.html"),
        ("b", "redis redis redis", "/b.html"),
    ]));
    let hits = search_hits(&index, "redis", 10);
    assert_eq!(index.docs[hits[0].doc_id].url, "/b.html");
}

#[test]
fn rare_term_outweighs_common_term() {
    // "封装" is in every document; "geoip" in one. A doc matching only the
    // rare term must outrank docs matching only the common one.
    let index = build_index(&corpus_from_pages(&[
        ("a", "通用 封装", "/a.html"),
        ("b", "二次 封装", "/b.html"),
        ("c", "geoip 查询", "/c.html"),
        ("d", "再次 封装", "/d.html"),
    ]));
    let hits = search_hits(&index, "geoip 封装", 10);
    assert_eq!(index.docs[hits[0].doc_id].url, "/c.html");
}

#[test]
fn equal_scores_resolve_by_corpus_order() {
    let index = build_index(&corpus_from_pages(&[
        ("连接池", "相同正文", "/one.html"),
        ("连接池", "相同正文", "/two.html"),
        ("连接池", "相同正文", "/three.html"),
    ]));
    let hits = search_hits(&index, "连接池", 10);
    let urls: Vec<&str> = hits
        .iter()
        .map(|h| index.docs[h.doc_id].url.as_str())
        .collect();
    assert_eq!(urls, vec!["/one.html", "/two.html", "/three.html"]);
}

#[test]
fn limit_keeps_top_scored() {
    let index = build_index(&corpus_from_pages(&[
        ("redis", "redis redis", "/best.html"),
        ("other", "redis", "/mid.html"),
        ("misc", "redis 提及一次而已", "/also.html"),
    ]));
    let hits = search_hits(&index, "redis", 1);
    assert_eq!(hits.len(), 1);
    assert_eq!(index.docs[hits[0].doc_id].url, "/best.html");
}
