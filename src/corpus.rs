// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The corpus: what the docs build pipeline hands us.
//!
//! The input artifact is a JSON object mapping category names to page lists,
//! usually shipped as a JS assignment (`window.ydoc_plugin_search_json =
//! {...};`) so the site can load it with a plain script tag. Both forms are
//! accepted here.
//!
//! Two things about this data deserve suspicion:
//!
//! - **Order is meaningful.** Category and page order is the ranking
//!   tie-break and the stable default ordering, which is why serde_json runs
//!   with `preserve_order` - a sorted map would silently reshuffle results.
//! - **It is generated, not authored.** Individual entries can be malformed
//!   (missing url, wrong field type). Those are skipped per-entry; one bad
//!   anchor must not take down search for the rest of the site.
//!
//! Docs sites ship one near-identical tree per version (2.0 ... 3.0). Those
//! stay independent corpora selected by a version key - urls are only unique
//! *within* a version.

use crate::error::CorpusError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// An anchor/subsection within a page.
///
/// `url` is the full deep link (`page.url` + `#` + fragment), stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionEntry {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
}

/// One documentation page and its section anchors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub url: String,
    #[serde(default, deserialize_with = "lenient_sections")]
    pub children: Vec<SectionEntry>,
}

/// A top-level category and its pages, in source order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub pages: Vec<PageEntry>,
}

/// The full hierarchical set of documentation entries to be indexed.
///
/// Loaded once per docs version, immutable thereafter.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SearchCorpus {
    pub categories: Vec<Category>,
}

impl SearchCorpus {
    /// Parse a corpus from raw JSON or the `window.… = {...};` wrapped form.
    pub fn parse(text: &str) -> Result<Self, CorpusError> {
        let value: Value = serde_json::from_str(strip_js_wrapper(text))?;
        Self::from_value(&value)
    }

    /// Build a corpus from an already-parsed JSON value.
    ///
    /// Categories whose value is not an array are dropped, as are pages and
    /// sections that fail per-entry validation (silent-skip policy).
    pub fn from_value(value: &Value) -> Result<Self, CorpusError> {
        let object = value.as_object().ok_or(CorpusError::NotAnObject)?;
        let categories = object
            .iter()
            .filter_map(|(name, pages)| {
                let pages = pages.as_array()?;
                Some(Category {
                    name: name.clone(),
                    pages: lenient_pages(pages),
                })
            })
            .collect();
        Ok(SearchCorpus { categories })
    }

    /// Total number of pages across all categories.
    pub fn page_count(&self) -> usize {
        self.categories.iter().map(|c| c.pages.len()).sum()
    }

    /// Total number of section anchors across all pages.
    pub fn section_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| &c.pages)
            .map(|p| p.children.len())
            .sum()
    }
}

/// A corpus file as found on disk: either one corpus, or a map of version
/// key to corpus (the docs repo keeps one tree per released version).
#[derive(Debug, Clone)]
pub enum CorpusFile {
    Single(SearchCorpus),
    Versioned(Vec<(String, SearchCorpus)>),
}

impl CorpusFile {
    /// Parse a corpus file, detecting the version layout structurally:
    /// category values are arrays of pages; version values are objects
    /// (corpora). A file whose top-level values are all objects is treated
    /// as versioned.
    pub fn parse(text: &str) -> Result<Self, CorpusError> {
        let value: Value = serde_json::from_str(strip_js_wrapper(text))?;
        let object = value.as_object().ok_or(CorpusError::NotAnObject)?;

        let versioned = !object.is_empty() && object.values().all(Value::is_object);
        if versioned {
            let mut versions = Vec::with_capacity(object.len());
            for (key, sub) in object {
                versions.push((key.clone(), SearchCorpus::from_value(sub)?));
            }
            Ok(CorpusFile::Versioned(versions))
        } else {
            Ok(CorpusFile::Single(SearchCorpus::from_value(&value)?))
        }
    }

    /// Read and parse a corpus file from disk.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Pick one corpus out of the file.
    ///
    /// With no version key, a single-corpus file yields its corpus and a
    /// versioned file yields the last (newest) version. An explicit key must
    /// exist; asking a single-corpus file for a version is an error.
    pub fn select(self, version: Option<&str>) -> Result<SearchCorpus, CorpusError> {
        match (self, version) {
            (CorpusFile::Single(corpus), None) => Ok(corpus),
            (CorpusFile::Single(_), Some(v)) => Err(CorpusError::UnknownVersion {
                version: v.to_string(),
            }),
            (CorpusFile::Versioned(versions), None) => versions
                .into_iter()
                .next_back()
                .map(|(_, corpus)| corpus)
                .ok_or(CorpusError::NotAnObject),
            (CorpusFile::Versioned(versions), Some(v)) => versions
                .into_iter()
                .find(|(key, _)| key == v)
                .map(|(_, corpus)| corpus)
                .ok_or_else(|| CorpusError::UnknownVersion {
                    version: v.to_string(),
                }),
        }
    }

    /// Version keys present in the file, in source order.
    pub fn versions(&self) -> Vec<&str> {
        match self {
            CorpusFile::Single(_) => Vec::new(),
            CorpusFile::Versioned(versions) => {
                versions.iter().map(|(key, _)| key.as_str()).collect()
            }
        }
    }
}

/// Strip the `window.ydoc_plugin_search_json = {...};` assignment wrapper.
///
/// Raw JSON passes through untouched. Anything else is sliced between the
/// first `{` and the last `}` and left for the JSON parser to judge.
fn strip_js_wrapper(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.starts_with('{') {
        return trimmed;
    }
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

/// Parse page entries one by one, dropping the malformed ones.
fn lenient_pages(pages: &[Value]) -> Vec<PageEntry> {
    pages
        .iter()
        .filter_map(|raw| serde_json::from_value::<PageEntry>(raw.clone()).ok())
        .filter(|page| !page.url.is_empty())
        .collect()
}

/// Per-entry lenient deserialization for `children`.
///
/// A section needs a non-empty title (it is both the display line and the
/// indexable heading) and a non-empty url; entries failing that are dropped
/// without poisoning the parent page.
fn lenient_sections<'de, D>(deserializer: D) -> Result<Vec<SectionEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Value> = Vec::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| serde_json::from_value::<SectionEntry>(value).ok())
        .filter(|section| !section.url.is_empty() && !section.title.is_empty())
        .collect())
}
