// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring functions for search results.
//!
//! A matched term contributes `term_freq × field_weight × idf`; a document's
//! score is the sum over its matched terms. All three factors are
//! deterministic functions of the index, so equal inputs always rank
//! identically - order never depends on hash-map iteration.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## FIELD_WEIGHT_ORDERING
//! `TITLE_WEIGHT > BODY_WEIGHT` - a term hit in a title must outrank the
//! same single hit in a body, all else equal. The weights are fixed design
//! constants, not tuned parameters.
//!
//! ## IDF_MONOTONICITY
//! `idf` strictly decreases as document frequency grows: terms found
//! everywhere ("的", "the", "封装") contribute less than rare ones.

use crate::types::Field;

/// Weight of a title-field match.
pub const TITLE_WEIGHT: f64 = 3.0;

/// Weight of a body-field match.
pub const BODY_WEIGHT: f64 = 1.0;

/// Get the weight for a field.
#[inline]
pub fn field_weight(field: Field) -> f64 {
    // INVARIANT: FIELD_WEIGHT_ORDERING
    match field {
        Field::Title => TITLE_WEIGHT,
        Field::Body => BODY_WEIGHT,
    }
}

/// Inverse document frequency: `ln(1 + total_docs / doc_freq)`.
///
/// The `1 +` keeps the value strictly positive even for a term present in
/// every document, so a match never scores zero outright.
#[inline]
pub fn idf(total_docs: usize, doc_freq: usize) -> f64 {
    if doc_freq == 0 {
        return 0.0;
    }
    (1.0 + total_docs as f64 / doc_freq as f64).ln()
}
