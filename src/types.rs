// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! These types define how documents, postings, and results fit together.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Document**: `docs[doc_id].id == doc_id` - documents are stored dense,
//!   in build order, so `ordinal` doubles as the deterministic tie-break key.
//! - **PostingList**: `doc_freq` equals the number of unique doc ids in
//!   `postings`; at most one posting per (doc, field) pair, `term_freq >= 1`.
//! - **SearchIndex**: `field_lengths.len() == docs.len() == total_docs`.
//!
//! Off-by-one here means garbage rankings, so `check_well_formed` exists for
//! tests and debug builds.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which part of a document a term occurrence came from.
///
/// Title matches outrank body matches. The weight gap lives in
/// `scoring::field_weight`, not here - the derived `Ord` is only for
/// deterministic posting order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Body,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Body => "body",
        }
    }
}

/// Where a document sits in the docs tree: its category, and for section
/// documents the parent page's title as well.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumb {
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

/// The unit actually indexed and returned to the user.
///
/// One Document per page with non-empty title or content, one per section.
/// `url` is the identity - stored exactly as the corpus supplied it, anchor
/// fragment included, and never rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: usize,
    pub url: String,
    pub title: String,
    pub body: String,
    pub breadcrumb: Breadcrumb,
    /// Position in the source walk. Equal to `id` by construction; kept as
    /// its own field because ranking reads it as the tie-break key.
    pub ordinal: usize,
}

/// One term's presence in one field of one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    pub doc_id: usize,
    pub field: Field,
    pub term_freq: usize,
}

/// All occurrences of a single term across the corpus.
///
/// Postings are sorted by (doc_id, field). The `doc_freq` is cached because
/// IDF needs it on every query and counting unique doc ids repeatedly adds up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingList {
    pub postings: Vec<Posting>,
    /// Number of unique documents containing this term.
    pub doc_freq: usize,
}

/// Token counts per field, recorded at build time for one document.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldLengths {
    pub title: usize,
    pub body: usize,
}

/// The complete search index: postings map, per-document lengths, and the
/// original document records for presentation.
///
/// Built once from a [`crate::corpus::SearchCorpus`], immutable afterwards.
/// The query engine only reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndex {
    pub docs: Vec<Document>,
    pub terms: HashMap<String, PostingList>,
    pub field_lengths: Vec<FieldLengths>,
    pub total_docs: usize,
}

impl SearchIndex {
    /// Look up a document by id.
    #[inline]
    pub fn doc(&self, doc_id: usize) -> Option<&Document> {
        self.docs.get(doc_id)
    }

    /// Number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Total number of postings across all terms.
    pub fn posting_count(&self) -> usize {
        self.terms.values().map(|pl| pl.postings.len()).sum()
    }
}

/// A ranked match: document id plus relevance score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub doc_id: usize,
    pub score: f64,
}

/// A highlight span inside a snippet, in codepoints.
///
/// Offset spans rather than embedded markup - the renderer decides what
/// `<mark>` looks like.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HighlightRange {
    pub start: usize,
    pub len: usize,
}

/// What users see when they get a search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayResult {
    pub url: String,
    pub title: String,
    pub breadcrumb: Breadcrumb,
    pub snippet: String,
    pub snippet_ranges: Vec<HighlightRange>,
    pub score: f64,
}

/// Check the index invariants hold (debug assertion).
#[cfg(any(debug_assertions, test))]
pub fn check_well_formed(index: &SearchIndex) -> bool {
    if index.total_docs != index.docs.len() || index.field_lengths.len() != index.docs.len() {
        return false;
    }

    for (i, doc) in index.docs.iter().enumerate() {
        if doc.id != i || doc.ordinal != i || doc.url.is_empty() {
            return false;
        }
    }

    for list in index.terms.values() {
        if list.postings.is_empty() {
            return false;
        }
        for w in list.postings.windows(2) {
            if (w[0].doc_id, w[0].field) >= (w[1].doc_id, w[1].field) {
                return false;
            }
        }
        let mut doc_ids: Vec<usize> = list.postings.iter().map(|p| p.doc_id).collect();
        doc_ids.dedup();
        if list.doc_freq != doc_ids.len() {
            return false;
        }
        for p in &list.postings {
            if p.doc_id >= index.docs.len() || p.term_freq == 0 {
                return false;
            }
        }
    }

    true
}
