// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result presentation: ranked ids back into something a human can read.
//!
//! Maps each hit to `{url, title, breadcrumb, snippet, ranges}`. The snippet
//! is a bounded codepoint window around the first body match, with matched
//! terms reported as offset spans *within the snippet* rather than embedded
//! markup - the renderer decides whether that becomes `<mark>`, ANSI bold,
//! or nothing. Everything here counts codepoints, never bytes, because the
//! corpus is mostly CJK text where the two disagree on every character.

use crate::search::query_terms;
use crate::tokenize::tokenize;
use crate::types::{DisplayResult, HighlightRange, Hit, SearchIndex};
use std::collections::HashSet;

/// Total snippet width, in codepoints.
pub const SNIPPET_WINDOW: usize = 80;

/// Map ranked hits back to display results.
///
/// `terms` are the query terms the hits were ranked with (see
/// [`crate::search::query_terms`]); they drive snippet anchoring and
/// highlighting. Hits pointing at unknown doc ids are dropped.
pub fn present(index: &SearchIndex, hits: &[Hit], terms: &[String]) -> Vec<DisplayResult> {
    let term_set: HashSet<&str> = terms.iter().map(String::as_str).collect();

    hits.iter()
        .filter_map(|hit| {
            let doc = index.doc(hit.doc_id)?;
            let (snippet, snippet_ranges) = extract_snippet(&doc.body, &term_set);
            Some(DisplayResult {
                url: doc.url.clone(),
                title: doc.title.clone(),
                breadcrumb: doc.breadcrumb.clone(),
                snippet,
                snippet_ranges,
                score: hit.score,
            })
        })
        .collect()
}

/// Convenience for the single-call query API: rank, then present.
pub fn search_display(index: &SearchIndex, query: &str, limit: usize) -> Vec<DisplayResult> {
    let hits = crate::search::search(index, query, limit);
    present(index, &hits, &query_terms(query))
}

/// Extract a snippet window from a body and the highlight spans inside it.
///
/// Anchored on the first body token matching a query term; a title-only
/// match (no body token matches) falls back to a plain prefix with no
/// highlights. Empty body yields an empty snippet.
fn extract_snippet(body: &str, term_set: &HashSet<&str>) -> (String, Vec<HighlightRange>) {
    let chars: Vec<char> = body.chars().collect();
    if chars.is_empty() {
        return (String::new(), Vec::new());
    }

    let tokens = tokenize(body);
    let matched: Vec<(usize, usize)> = tokens
        .iter()
        .filter(|t| term_set.contains(t.term.as_str()))
        .map(|t| (t.offset, t.term.chars().count()))
        .collect();

    let Some(&(anchor, anchor_len)) = matched.first() else {
        // Title-only match: truncated body prefix, nothing to highlight.
        let end = chars.len().min(SNIPPET_WINDOW);
        return (chars[..end].iter().collect(), Vec::new());
    };

    // Center the window on the first match, then clamp to the text. Near the
    // end of the body the start slides back so the window stays full.
    let half = SNIPPET_WINDOW.saturating_sub(anchor_len) / 2;
    let mut start = anchor.saturating_sub(half);
    let end = chars.len().min(start + SNIPPET_WINDOW);
    start = end.saturating_sub(SNIPPET_WINDOW);

    let snippet: String = chars[start..end].iter().collect();

    // Every match inside the window gets a span, rebased to the snippet.
    // CJK bigram matches overlap ("操作" and "作类" for query "操作类"),
    // so adjacent/overlapping spans are merged into maximal runs.
    let mut ranges: Vec<HighlightRange> = Vec::new();
    for (offset, len) in matched {
        if offset < start || offset + len > end {
            continue;
        }
        ranges.push(HighlightRange {
            start: offset - start,
            len,
        });
    }
    (snippet, merge_ranges(ranges))
}

/// Merge overlapping or touching spans into maximal runs.
fn merge_ranges(mut ranges: Vec<HighlightRange>) -> Vec<HighlightRange> {
    ranges.sort_by_key(|r| (r.start, r.len));
    let mut merged: Vec<HighlightRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.start + last.len => {
                let end = (last.start + last.len).max(range.start + range.len);
                last.len = end - last.start;
            }
            _ => merged.push(range),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build;
    use crate::testing::corpus_from_pages;

    fn display(corpus_pages: &[(&str, &str, &str)], query: &str) -> Vec<DisplayResult> {
        let index = build(&corpus_from_pages(corpus_pages));
        search_display(&index, query, 10)
    }

    #[test]
    fn test_snippet_contains_match_with_range() {
        let results = display(
            &[("page", "Redis 操作类，基于 jedis 实现", "/r.html")],
            "jedis",
        );
        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert!(r.snippet.contains("jedis"));
        assert_eq!(r.snippet_ranges.len(), 1);
        let chars: Vec<char> = r.snippet.chars().collect();
        let span: String = chars[r.snippet_ranges[0].start..]
            .iter()
            .take(r.snippet_ranges[0].len)
            .collect();
        assert_eq!(span, "jedis");
    }

    #[test]
    fn test_snippet_window_bounded() {
        let long_body = "填充 ".repeat(100) + "jedis" + &" 填充".repeat(100);
        let results = display(&[("page", long_body.as_str(), "/r.html")], "jedis");
        let r = &results[0];
        assert!(r.snippet.chars().count() <= SNIPPET_WINDOW);
        assert!(r.snippet.contains("jedis"));
    }

    #[test]
    fn test_title_only_match_falls_back_to_prefix() {
        let results = display(
            &[("jedis", "一段与查询词无关的正文内容", "/t.html")],
            "jedis",
        );
        let r = &results[0];
        assert!(r.snippet.starts_with("一段"));
        assert!(r.snippet_ranges.is_empty());
    }

    #[test]
    fn test_empty_body_empty_snippet() {
        let results = display(&[("jedis", "", "/t.html")], "jedis");
        assert_eq!(results[0].snippet, "");
        assert!(results[0].snippet_ranges.is_empty());
    }

    #[test]
    fn test_overlapping_cjk_ranges_merged() {
        let results = display(
            &[("page", "支持 Redis 操作类管理", "/r.html")],
            "操作类",
        );
        let r = &results[0];
        // "操作类" matches via the full run and both bigrams; the spans
        // must come back as one merged range covering the whole run.
        assert_eq!(r.snippet_ranges.len(), 1);
        let range = r.snippet_ranges[0];
        let chars: Vec<char> = r.snippet.chars().collect();
        let span: String = chars[range.start..range.start + range.len].iter().collect();
        assert_eq!(span, "操作类");
    }

    #[test]
    fn test_url_round_trip_integrity() {
        let results = display(
            &[
                ("buession-redis", "Redis 操作类，基于 jedis 实现", "/docs/redis.html"),
                ("buession-core", "基础工具 jedis 兼容", "/docs/core.html"),
            ],
            "jedis",
        );
        let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
        for url in urls {
            assert!(url == "/docs/redis.html" || url == "/docs/core.html");
        }
    }

    #[test]
    fn test_unknown_doc_ids_dropped() {
        let index = build(&corpus_from_pages(&[("a", "b", "/a.html")]));
        let bogus = [Hit { doc_id: 99, score: 1.0 }];
        assert!(present(&index, &bogus, &["b".to_string()]).is_empty());
    }
}
