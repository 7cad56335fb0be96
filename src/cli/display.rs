// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the ydoc-search CLI.
//!
//! Matched snippet spans render bold yellow, breadcrumbs dim, urls cyan.
//! Colors are plain 16-color ANSI and switch off for pipelines: `NO_COLOR`
//! wins, then TTY detection. Highlight splicing works in codepoints because
//! the snippet ranges do.

use ydoc_search::{DisplayResult, HighlightRange, SearchIndex};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const CYAN: &str = "\x1b[36m";
pub const YELLOW: &str = "\x1b[33m";

/// Check if colors should be used (TTY detection).
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn paint(color: &str, text: &str, colored: bool) -> String {
    if colored {
        format!("{}{}{}", color, text, RESET)
    } else {
        text.to_string()
    }
}

/// Render ranked results for the terminal.
pub fn render_results(query: &str, results: &[DisplayResult], colored: bool) -> String {
    if results.is_empty() {
        return format!("no results for '{}'\n", query);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{} result{} for '{}'\n\n",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        query
    ));

    for (rank, result) in results.iter().enumerate() {
        let title = if result.title.is_empty() {
            result.url.as_str()
        } else {
            result.title.as_str()
        };
        out.push_str(&format!(
            "{:>3}. {}  {}\n",
            rank + 1,
            paint(BOLD, title, colored),
            paint(DIM, &breadcrumb_line(result), colored),
        ));
        out.push_str(&format!("     {}\n", paint(CYAN, &result.url, colored)));
        if !result.snippet.is_empty() {
            out.push_str(&format!(
                "     {}\n",
                highlight(&result.snippet, &result.snippet_ranges, colored)
            ));
        }
        out.push('\n');
    }

    out
}

/// "category › page" or just "category".
fn breadcrumb_line(result: &DisplayResult) -> String {
    match &result.breadcrumb.page {
        Some(page) => format!("{} › {}", result.breadcrumb.category, page),
        None => result.breadcrumb.category.clone(),
    }
}

/// Splice highlight escapes into a snippet at codepoint ranges.
fn highlight(snippet: &str, ranges: &[HighlightRange], colored: bool) -> String {
    if !colored || ranges.is_empty() {
        return snippet.to_string();
    }

    let chars: Vec<char> = snippet.chars().collect();
    let mut out = String::new();
    let mut cursor = 0;
    for range in ranges {
        let start = range.start.min(chars.len());
        let end = (range.start + range.len).min(chars.len());
        if start < cursor || start >= end {
            continue;
        }
        out.extend(&chars[cursor..start]);
        out.push_str(BOLD);
        out.push_str(YELLOW);
        out.extend(&chars[start..end]);
        out.push_str(RESET);
        cursor = end;
    }
    out.extend(&chars[cursor..]);
    out
}

/// Render `inspect` statistics.
pub fn render_inspect(
    versions: &[&str],
    categories: usize,
    pages: usize,
    sections: usize,
    index: &SearchIndex,
) -> String {
    let mut out = String::new();
    if !versions.is_empty() {
        out.push_str(&format!("versions:   {}\n", versions.join(", ")));
    }
    out.push_str(&format!("categories: {}\n", categories));
    out.push_str(&format!("pages:      {}\n", pages));
    out.push_str(&format!("sections:   {}\n", sections));
    out.push_str(&format!("documents:  {}\n", index.total_docs));
    out.push_str(&format!("terms:      {}\n", index.term_count()));
    out.push_str(&format!("postings:   {}\n", index.posting_count()));
    out
}
