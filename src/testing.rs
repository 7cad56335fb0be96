// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so every test file isn't hand-rolling
//! its own corpus JSON.

#![doc(hidden)]

use crate::corpus::{Category, PageEntry, SearchCorpus, SectionEntry};

/// A small bilingual corpus shaped like the real buession docs tree:
/// empty page shells, section anchors carrying the text, two categories.
pub fn sample_corpus() -> SearchCorpus {
    SearchCorpus {
        categories: vec![
            Category {
                name: "快速上手".to_string(),
                pages: vec![PageEntry {
                    title: String::new(),
                    content: String::new(),
                    url: "/docs/intro.html".to_string(),
                    children: vec![SectionEntry {
                        title: "框架是什么".to_string(),
                        url: "/docs/intro.html#框架是什么".to_string(),
                        content: "常用功能的封装，简化框架切换带来的成本".to_string(),
                    }],
                }],
            },
            Category {
                name: "参考手册".to_string(),
                pages: vec![
                    PageEntry {
                        title: "buession-redis".to_string(),
                        content: "Redis 操作类，基于 jedis 实现".to_string(),
                        url: "/docs/redis.html".to_string(),
                        children: vec![SectionEntry {
                            title: "展示层".to_string(),
                            url: "/docs/redis.html#展示层".to_string(),
                            content: "响应头、响应体封装".to_string(),
                        }],
                    },
                    PageEntry {
                        title: "buession-httpclient".to_string(),
                        content: "对 okhttp3 进行封装".to_string(),
                        url: "/docs/httpclient.html".to_string(),
                        children: vec![],
                    },
                ],
            },
        ],
    }
}

/// Build a one-category corpus from `(title, content, url)` triples.
pub fn corpus_from_pages(pages: &[(&str, &str, &str)]) -> SearchCorpus {
    SearchCorpus {
        categories: vec![Category {
            name: "docs".to_string(),
            pages: pages
                .iter()
                .map(|(title, content, url)| PageEntry {
                    title: (*title).to_string(),
                    content: (*content).to_string(),
                    url: (*url).to_string(),
                    children: vec![],
                })
                .collect(),
        }],
    }
}

/// Serialize a corpus back to the JSON shape the docs pipeline emits.
pub fn corpus_to_json(corpus: &SearchCorpus) -> String {
    let mut object = serde_json::Map::new();
    for category in &corpus.categories {
        let pages = serde_json::to_value(&category.pages).expect("pages serialize");
        object.insert(category.name.clone(), pages);
    }
    serde_json::Value::Object(object).to_string()
}
