// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for corpus loading and querying.
//!
//! The policy split matters more than the types: data-quality problems in
//! the corpus (malformed entries, duplicate urls) are *skip* policies, not
//! errors - the docs pipeline generates that JSON and one bad anchor must
//! not take down search for the whole site. Errors here are reserved for
//! the cases a caller can actually act on.

use std::fmt;

/// Failure to load a corpus from JSON.
#[derive(Debug)]
pub enum CorpusError {
    /// Reading the corpus file failed.
    Io(std::io::Error),
    /// The payload is not parseable JSON at all.
    Json(serde_json::Error),
    /// The payload parsed, but the top level is not an object of categories.
    NotAnObject,
    /// A multi-version file was loaded with a version key it doesn't contain.
    UnknownVersion { version: String },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::Io(e) => write!(f, "failed to read corpus: {}", e),
            CorpusError::Json(e) => write!(f, "corpus is not valid JSON: {}", e),
            CorpusError::NotAnObject => {
                write!(f, "corpus top level must be an object mapping categories to pages")
            }
            CorpusError::UnknownVersion { version } => {
                write!(f, "corpus has no version '{}'", version)
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::Io(e) => Some(e),
            CorpusError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CorpusError {
    fn from(e: std::io::Error) -> Self {
        CorpusError::Io(e)
    }
}

impl From<serde_json::Error> for CorpusError {
    fn from(e: serde_json::Error) -> Self {
        CorpusError::Json(e)
    }
}

/// Failure to run a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A query was issued before any index was loaded. Callers must await
    /// `load` completion; this fails fast instead of returning a misleading
    /// empty result set.
    NotReady,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NotReady => write!(f, "no index loaded yet"),
        }
    }
}

impl std::error::Error for SearchError {}
