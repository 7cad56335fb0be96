// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the ydoc-search command-line interface.
//!
//! Two subcommands: `search` to run a query against a corpus file, and
//! `inspect` to examine what a corpus file contains. The corpus file is the
//! artifact the docs pipeline ships - raw JSON or the
//! `window.ydoc_plugin_search_json = {...};` script form, optionally with
//! one corpus per docs version.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ydoc-search",
    about = "Full-text search over ydoc documentation index files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus file and display ranked results
    Search {
        /// Path to the search index JSON (or search_json.js) file
        file: PathBuf,

        /// Search query (mixed Chinese/Latin supported)
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Docs version key to search, for multi-version files.
        /// Defaults to the newest version present.
        #[arg(short = 'V', long)]
        version: Option<String>,

        /// Emit results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Inspect a corpus file: versions, categories, document and term counts
    Inspect {
        /// Path to the search index JSON (or search_json.js) file
        file: PathBuf,

        /// Docs version key to inspect, for multi-version files
        #[arg(short = 'V', long)]
        version: Option<String>,
    },
}
