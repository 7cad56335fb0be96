//! Inverted index construction.
//!
//! Runs once at load time, walking the corpus in source order and flattening
//! the category → page → section tree into dense documents plus a term →
//! postings map. Build order is load-bearing: document ids double as the
//! ranking tie-break, so the walk must be deterministic.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **DOC_IDS_DENSE**: `docs[i].id == i`, ids assigned in walk order
//! 2. **POSTING_LIST_SORTED**: each posting list is sorted by (doc_id, field)
//! 3. **DOC_FREQ_CORRECT**: doc_freq equals count of unique doc_ids
//! 4. **URL_FIRST_WINS**: a duplicate url is skipped, never re-indexed
//!
//! With the `parallel` feature the tokenization map phase fans out over
//! rayon; the reduce phase merges per-document maps in doc-id order, so the
//! result is identical to the sequential build.

use crate::corpus::SearchCorpus;
use crate::tokenize::tokenize;
use crate::types::{
    Breadcrumb, Document, Field, FieldLengths, Posting, PostingList, SearchIndex,
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// Build a search index from a corpus.
pub fn build(corpus: &SearchCorpus) -> SearchIndex {
    let docs = collect_documents(corpus);
    let per_doc = tokenize_documents(&docs);

    let mut terms: HashMap<String, Vec<Posting>> = HashMap::new();
    let mut field_lengths = Vec::with_capacity(docs.len());

    // REDUCE PHASE: merge per-document term maps in doc-id order, so every
    // posting list comes out sorted by (doc_id, field) without a later sort.
    for (doc_id, (doc_terms, lengths)) in per_doc.into_iter().enumerate() {
        field_lengths.push(lengths);
        for (term, (title_tf, body_tf)) in doc_terms {
            let postings = terms.entry(term).or_default();
            if title_tf > 0 {
                postings.push(Posting {
                    doc_id,
                    field: Field::Title,
                    term_freq: title_tf,
                });
            }
            if body_tf > 0 {
                postings.push(Posting {
                    doc_id,
                    field: Field::Body,
                    term_freq: body_tf,
                });
            }
        }
    }

    let terms = terms
        .into_iter()
        .map(|(term, postings)| {
            let doc_freq = count_unique_docs(&postings);
            (term, PostingList { postings, doc_freq })
        })
        .collect();

    SearchIndex {
        total_docs: docs.len(),
        field_lengths,
        terms,
        docs,
    }
}

/// Flatten the corpus tree into documents, in walk order.
///
/// A page becomes a document only if it has a non-empty title or content
/// (the buession trees are full of empty page shells whose sections carry
/// all the text). Every surviving section becomes its own document with a
/// `{category, page title}` breadcrumb and its anchor url stored as-is.
fn collect_documents(corpus: &SearchCorpus) -> Vec<Document> {
    let mut docs = Vec::new();
    let mut seen_urls: HashSet<&str> = HashSet::new();

    for category in &corpus.categories {
        for page in &category.pages {
            if (!page.title.is_empty() || !page.content.is_empty())
                && !page.url.is_empty()
                && seen_urls.insert(&page.url)
            {
                let id = docs.len();
                docs.push(Document {
                    id,
                    url: page.url.clone(),
                    title: page.title.clone(),
                    body: page.content.clone(),
                    breadcrumb: Breadcrumb {
                        category: category.name.clone(),
                        page: None,
                    },
                    ordinal: id,
                });
            }

            for section in &page.children {
                if section.url.is_empty() || !seen_urls.insert(&section.url) {
                    continue;
                }
                let id = docs.len();
                docs.push(Document {
                    id,
                    url: section.url.clone(),
                    title: section.title.clone(),
                    body: section.content.clone(),
                    breadcrumb: Breadcrumb {
                        category: category.name.clone(),
                        page: if page.title.is_empty() {
                            None
                        } else {
                            Some(page.title.clone())
                        },
                    },
                    ordinal: id,
                });
            }
        }
    }

    docs
}

/// Per-term (title_tf, body_tf) for one document, plus its field lengths.
type DocTerms = (HashMap<String, (usize, usize)>, FieldLengths);

/// MAP PHASE: tokenize every document's fields independently.
#[cfg(feature = "parallel")]
fn tokenize_documents(docs: &[Document]) -> Vec<DocTerms> {
    docs.par_iter().map(tokenize_document).collect()
}

/// Sequential fallback when the `parallel` feature is off.
#[cfg(not(feature = "parallel"))]
fn tokenize_documents(docs: &[Document]) -> Vec<DocTerms> {
    docs.iter().map(tokenize_document).collect()
}

fn tokenize_document(doc: &Document) -> DocTerms {
    let mut doc_terms: HashMap<String, (usize, usize)> = HashMap::new();

    let title_tokens = tokenize(&doc.title);
    let body_tokens = tokenize(&doc.body);
    let lengths = FieldLengths {
        title: title_tokens.len(),
        body: body_tokens.len(),
    };

    for token in title_tokens {
        doc_terms.entry(token.term).or_default().0 += 1;
    }
    for token in body_tokens {
        doc_terms.entry(token.term).or_default().1 += 1;
    }

    (doc_terms, lengths)
}

/// Count unique doc ids in a posting list already sorted by doc_id.
fn count_unique_docs(postings: &[Posting]) -> usize {
    let mut count = 0;
    let mut last = None;
    for posting in postings {
        if last != Some(posting.doc_id) {
            count += 1;
            last = Some(posting.doc_id);
        }
    }
    count
}
