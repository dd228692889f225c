//! Batch submission tracking.
//!
//! This processor has no separate consensus/commit phase — [`apply`]
//! either lands immediately or fails immediately — so `COMMITTED` and
//! `INVALID` are the only statuses a batch ever actually reaches.
//! `PENDING`/`UNKNOWN` are kept in the status enum because they are part
//! of the external contract the CLI's poller is written against; an
//! out-of-process deployment with a real queue would use them.

use std::collections::HashMap;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Terminal or transient status of a submitted batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BatchStatus {
    /// Submitted but not yet processed.
    Pending,
    /// Applied to the ledger.
    Committed,
    /// Rejected by a validation rule.
    Invalid,
    /// No record of this batch id.
    Unknown,
}

/// In-memory batch id -> status table.
#[derive(Debug, Default)]
pub struct BatchTracker {
    statuses: Mutex<HashMap<String, BatchStatus>>,
}

impl BatchTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a batch's terminal status.
    pub fn record(&self, batch_id: String, status: BatchStatus) {
        self.statuses.lock().insert(batch_id, status);
    }

    /// Look up a batch's status, defaulting to [`BatchStatus::Unknown`].
    #[must_use]
    pub fn status(&self, batch_id: &str) -> BatchStatus {
        self.statuses
            .lock()
            .get(batch_id)
            .copied()
            .unwrap_or(BatchStatus::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_batch_reports_unknown() {
        let tracker = BatchTracker::new();
        assert_eq!(tracker.status("no-such-id"), BatchStatus::Unknown);
    }

    #[test]
    fn recorded_batch_reports_its_status() {
        let tracker = BatchTracker::new();
        tracker.record("abc".into(), BatchStatus::Committed);
        assert_eq!(tracker.status("abc"), BatchStatus::Committed);
    }
}
