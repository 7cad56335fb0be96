// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation: where the rubber meets the road.
//!
//! The query is tokenized with the exact same tokenizer the index was built
//! with, so query/index term symmetry is free. Matching is OR-semantics: any
//! matched term qualifies a document, and scores simply accumulate across
//! terms. Strict AND would feel wrong in a docs sidebar - a user typing a
//! second word should broaden toward relevance, not drop to zero results.
//!
//! Ranking is `Σ term_freq × field_weight × idf` (see `scoring`), sorted by
//! score descending with corpus ordinal as the tie-break, so output order is
//! fully deterministic.

use crate::scoring::{field_weight, idf};
use crate::tokenize::tokenize;
use crate::types::{Hit, SearchIndex};
use std::collections::HashMap;

/// Parse a query string into distinct index terms, first-seen order.
///
/// A repeated query word must not double-count its postings, so duplicates
/// are dropped here rather than in the scoring loop.
pub fn query_terms(query: &str) -> Vec<String> {
    let mut terms = Vec::new();
    for token in tokenize(query) {
        if !terms.contains(&token.term) {
            terms.push(token.term);
        }
    }
    terms
}

/// Search the index, returning at most `limit` ranked hits.
///
/// An empty query - or one that tokenizes to nothing, like pure punctuation -
/// returns an empty result set, not all documents.
pub fn search(index: &SearchIndex, query: &str, limit: usize) -> Vec<Hit> {
    let terms = query_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut scores: HashMap<usize, f64> = HashMap::new();
    for term in &terms {
        let Some(list) = index.terms.get(term) else {
            continue;
        };
        let term_idf = idf(index.total_docs, list.doc_freq);
        for posting in &list.postings {
            *scores.entry(posting.doc_id).or_insert(0.0) +=
                posting.term_freq as f64 * field_weight(posting.field) * term_idf;
        }
    }

    let mut hits: Vec<Hit> = scores
        .into_iter()
        .map(|(doc_id, score)| Hit { doc_id, score })
        .collect();

    // Sort by score (desc) → ordinal (asc). Ordinal equals doc id by the
    // DOC_IDS_DENSE invariant, which makes the tie-break a plain id compare.
    hits.sort_by(|a, b| match b.score.partial_cmp(&a.score) {
        Some(std::cmp::Ordering::Equal) | None => a.doc_id.cmp(&b.doc_id),
        Some(ordering) => ordering,
    });

    hits.truncate(limit);
    hits
}
