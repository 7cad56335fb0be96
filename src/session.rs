// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incremental search session: per-keystroke query state.
//!
//! Search-as-you-type means queries are issued faster than they settle, and
//! results can complete out of order. The rule that keeps the UI honest is
//! simple: **the last-issued query always wins**. Every `begin` bumps a
//! monotonically increasing generation counter; a completion may only commit
//! its results if no newer generation has been issued, and the committed
//! generation itself only moves forward. A stale completion arriving late is
//! discarded - it can never overwrite a newer settled state.
//!
//! Cancellation is cooperative. Query evaluation is cheap (terms × postings),
//! so nothing interrupts a running computation; it just checks
//! `is_cancelled` before committing. In a single-threaded event loop the
//! counter comparison is all that is needed; the compare-and-set on the
//! committed generation makes the same discipline hold under threads.
//!
//! State machine per keystroke:
//!
//! ```text
//! Idle ──begin──▶ Pending ──commit──▶ Settled
//!                    │
//!                 (newer begin)
//!                    ▼
//!                Cancelled
//! ```

use crate::corpus::SearchCorpus;
use crate::error::SearchError;
use crate::index::build;
use crate::present::search_display;
use crate::types::{DisplayResult, SearchIndex};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Lifecycle of one issued query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    /// No query issued since the session (or current index) started.
    Idle,
    /// Issued, not yet settled or superseded.
    Pending,
    /// Results committed and currently displayed.
    Settled,
    /// Superseded by a newer query before settling.
    Cancelled,
}

/// Handle for one issued query. Plain data - hold it, pass it to a worker,
/// check it, commit with it. A newer `begin` invalidates it implicitly.
#[derive(Debug, Clone)]
pub struct QueryTicket {
    generation: u64,
    query: String,
}

impl QueryTicket {
    /// The generation this ticket was issued at.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The query text this ticket was issued for.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// A search session over one loaded index.
///
/// Holds the only mutable state in the whole engine: the generation counters
/// and the currently-displayed results cell. The index itself is immutable
/// once installed; a docs-version switch installs a fresh one.
pub struct SearchSession {
    index: RwLock<Option<Arc<SearchIndex>>>,
    /// Highest generation handed out by `begin`.
    issued: AtomicU64,
    /// Generation whose results are currently displayed. Monotonic.
    committed: AtomicU64,
    /// No query has been issued at or below this generation (reset marker
    /// advanced by `install`), so the session reports Idle there.
    baseline: AtomicU64,
    displayed: RwLock<Vec<DisplayResult>>,
}

impl SearchSession {
    /// Create a session with no index. Queries fail with `NotReady` until
    /// [`SearchSession::load`] or [`SearchSession::install`] is called.
    pub fn new() -> Self {
        SearchSession {
            index: RwLock::new(None),
            issued: AtomicU64::new(0),
            committed: AtomicU64::new(0),
            baseline: AtomicU64::new(0),
            displayed: RwLock::new(Vec::new()),
        }
    }

    /// Build an index from a corpus and install it.
    pub fn load(&self, corpus: &SearchCorpus) {
        self.install(build(corpus));
    }

    /// Install an already-built index, e.g. after a version switch.
    ///
    /// Outstanding tickets are cancelled and the displayed results cleared;
    /// generations stay monotonic so a stale completion from the previous
    /// index can never commit into the new one.
    pub fn install(&self, index: SearchIndex) {
        let mut slot = self.index.write();
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.committed.store(generation, Ordering::SeqCst);
        self.baseline.store(generation, Ordering::SeqCst);
        self.displayed.write().clear();
        *slot = Some(Arc::new(index));
    }

    /// Whether an index has been installed.
    pub fn is_ready(&self) -> bool {
        self.index.read().is_some()
    }

    /// The installed index, if any.
    pub fn index(&self) -> Option<Arc<SearchIndex>> {
        self.index.read().clone()
    }

    /// Issue a new query, implicitly cancelling any pending older one.
    pub fn begin(&self, query: &str) -> QueryTicket {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        QueryTicket {
            generation,
            query: query.to_string(),
        }
    }

    /// Cooperative cancellation check: has a newer query been issued?
    pub fn is_cancelled(&self, ticket: &QueryTicket) -> bool {
        ticket.generation < self.issued.load(Ordering::SeqCst)
    }

    /// Evaluate a ticket's query against the installed index.
    ///
    /// Pure with respect to session state - nothing is displayed until
    /// [`SearchSession::commit`].
    pub fn evaluate(
        &self,
        ticket: &QueryTicket,
        limit: usize,
    ) -> Result<Vec<DisplayResult>, SearchError> {
        let index = self.index().ok_or(SearchError::NotReady)?;
        Ok(search_display(&index, &ticket.query, limit))
    }

    /// Commit a completed query's results to the displayed cell.
    ///
    /// Returns `true` if the results are now displayed. A ticket that was
    /// superseded, or whose generation is not newer than the committed one,
    /// is rejected - this is the ordering guarantee that makes out-of-order
    /// completion safe.
    pub fn commit(&self, ticket: &QueryTicket, results: Vec<DisplayResult>) -> bool {
        if self.is_cancelled(ticket) {
            return false;
        }

        // The write lock serializes committers; the compare-and-set keeps
        // the committed generation monotonic even so.
        let mut displayed = self.displayed.write();
        let advanced = self.committed.fetch_update(
            Ordering::SeqCst,
            Ordering::SeqCst,
            |current| (current < ticket.generation).then_some(ticket.generation),
        );
        if advanced.is_err() {
            return false;
        }
        *displayed = results;
        true
    }

    /// Issue, evaluate, and commit in one call - the synchronous path used
    /// by the CLI, where no keystroke can arrive mid-query.
    pub fn query(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<DisplayResult>, SearchError> {
        let ticket = self.begin(query);
        let results = self.evaluate(&ticket, limit)?;
        self.commit(&ticket, results.clone());
        Ok(results)
    }

    /// The currently-displayed results.
    pub fn displayed(&self) -> Vec<DisplayResult> {
        self.displayed.read().clone()
    }

    /// State of the newest issued query.
    pub fn state(&self) -> QueryState {
        let issued = self.issued.load(Ordering::SeqCst);
        if issued <= self.baseline.load(Ordering::SeqCst) {
            QueryState::Idle
        } else if self.committed.load(Ordering::SeqCst) >= issued {
            QueryState::Settled
        } else {
            QueryState::Pending
        }
    }

    /// State of one specific ticket.
    pub fn ticket_state(&self, ticket: &QueryTicket) -> QueryState {
        if self.committed.load(Ordering::SeqCst) == ticket.generation {
            QueryState::Settled
        } else if self.is_cancelled(ticket) {
            QueryState::Cancelled
        } else {
            QueryState::Pending
        }
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}
