//! Full-text search over pre-built ydoc documentation indexes.
//!
//! Documentation sites built with ydoc ship a static, hierarchical search
//! index (category → pages → section anchors) as JSON. This crate is the
//! consumption side: it turns that artifact into live, incremental, ranked
//! search with section-level deep links, in a browser host or a CLI.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌────────────┐     ┌────────────┐     ┌────────────┐
//! │ corpus.rs  │────▶│  index.rs  │────▶│ search.rs  │────▶│ present.rs │
//! │ (SearchCor-│     │ (build,    │     │ (ranked    │     │ (snippets, │
//! │ pus loader)│     │  postings) │     │  hits)     │     │ highlights)│
//! └────────────┘     └────────────┘     └────────────┘     └────────────┘
//!        │                  │                  │                  │
//!        ▼                  ▼                  ▼                  ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          session.rs                                  │
//! │   (per-keystroke generation counter, last-issued query wins)         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The tokenizer (`tokenize.rs`) is the sole integration seam between build
//! and query time: CJK runs index as overlapping bigrams plus the full run,
//! Latin/digit runs lowercase and split on non-alphanumeric boundaries. A
//! dictionary segmenter could be dropped in there without touching any
//! other component.
//!
//! # Usage
//!
//! ```
//! use ydoc_search::{build_index, search, SearchCorpus};
//!
//! let corpus = SearchCorpus::parse(r#"{
//!     "参考手册": [
//!         {"title": "buession-redis",
//!          "content": "Redis 操作类，基于 jedis 实现",
//!          "url": "/docs/redis.html",
//!          "children": []}
//!     ]
//! }"#).unwrap();
//!
//! let index = build_index(&corpus);
//! let results = search(&index, "jedis", 10);
//! assert_eq!(results[0].url, "/docs/redis.html");
//! ```

// Module declarations
mod corpus;
mod error;
mod index;
mod present;
mod scoring;
mod search;
mod session;
pub mod testing;
mod tokenize;
mod types;

// Re-exports for public API
pub use corpus::{Category, CorpusFile, PageEntry, SearchCorpus, SectionEntry};
pub use error::{CorpusError, SearchError};
pub use index::build as build_index;
pub use present::{present, search_display as search, SNIPPET_WINDOW};
pub use scoring::{field_weight, idf, BODY_WEIGHT, TITLE_WEIGHT};
pub use search::{query_terms, search as search_hits};
pub use session::{QueryState, QueryTicket, SearchSession};
pub use tokenize::{is_cjk, normalize_term, tokenize, Token};
pub use types::{
    Breadcrumb, DisplayResult, Document, Field, FieldLengths, HighlightRange, Hit, Posting,
    PostingList, SearchIndex,
};

#[cfg(any(debug_assertions, test))]
pub use types::check_well_formed;
