//! In-memory [`StateStore`] used by tests and local (non-networked) CLI
//! runs. Not a deployment target for the real state-store RPC boundary.

use std::collections::HashMap;

use ledger_types::LedgerError;
use parking_lot::Mutex;

use crate::ports::outbound::StateStore;

/// A `HashMap`-backed state store guarded by a single `Mutex`.
///
/// Writes via [`StateStore::set_many`] take the lock once and apply every
/// entry before releasing it, giving the atomicity a single transaction
/// requires.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStateStore {
    /// Create a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// List every stored address with the given prefix, for read-side
    /// collaborators that list by any proper prefix of a derived address.
    #[must_use]
    pub fn list_prefix(&self, prefix: &str) -> Vec<(String, Vec<u8>)> {
        let entries = self.entries.lock();
        entries
            .iter()
            .filter(|(addr, _)| addr.starts_with(prefix))
            .map(|(addr, bytes)| (addr.clone(), bytes.clone()))
            .collect()
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, address: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.entries.lock().get(address).cloned())
    }

    fn set_many(&self, entries: Vec<(String, Vec<u8>)>) -> Result<(), LedgerError> {
        let mut guard = self.entries.lock();
        for (address, bytes) in entries {
            guard.insert(address, bytes);
        }
        Ok(())
    }
}
