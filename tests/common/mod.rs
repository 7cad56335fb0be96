//! Shared test utilities and fixtures.

#![allow(dead_code)]

use ydoc_search::{build_index, SearchCorpus, SearchIndex};

/// A corpus cut down from the real buession docs search_json: empty page
/// shells with section anchors, plus pages carrying their own content.
pub const DOCS_JSON: &str = r#"{
    "快速上手": [
        {
            "title": "",
            "content": "",
            "url": "/docs/intro.html",
            "children": [
                {
                    "title": "Buession Framework 框架是什么？",
                    "url": "/docs/intro.html#框架是什么",
                    "content": "它是基于作者在日常工作中遇到的常见需求二次封装，简化框架切换带来的成本"
                }
            ]
        },
        {
            "title": "",
            "content": "",
            "url": "/docs/module.html",
            "children": [
                {
                    "title": "buession-redis",
                    "url": "/docs/module.html#buession-redis",
                    "content": "Redis 操作类，基于 jedis 实现，屏蔽了不同技术细节"
                },
                {
                    "title": "buession-httpclient",
                    "url": "/docs/module.html#buession-httpclient",
                    "content": "对 apache httpcomponents、okhttp3 进行封装"
                }
            ]
        }
    ],
    "参考手册": [
        {
            "title": "buession-redis",
            "content": "Redis 操作类，基于 jedis 实现",
            "url": "/docs/redis.html",
            "children": [
                {
                    "title": "展示层",
                    "url": "/docs/redis.html#展示层",
                    "content": "响应头、响应体封装，国际化处理"
                }
            ]
        },
        {
            "title": "buession-geoip",
            "content": "根据 IP 地址获取所属 ISP、所属国家、所属城市",
            "url": "/docs/geoip.html",
            "children": []
        }
    ]
}"#;

pub fn docs_corpus() -> SearchCorpus {
    SearchCorpus::parse(DOCS_JSON).expect("fixture corpus parses")
}

pub fn docs_index() -> SearchIndex {
    build_index(&docs_corpus())
}

/// The same tree duplicated under two version keys, the way the docs repo
/// ships 2.0 ... 3.0 side by side.
pub fn versioned_json() -> String {
    format!(r#"{{"2.2": {j}, "3.0": {j}}}"#, j = DOCS_JSON)
}

/// The script-tag form the site actually loads.
pub fn js_wrapped_json() -> String {
    format!("window.ydoc_plugin_search_json = {};\n", DOCS_JSON)
}
