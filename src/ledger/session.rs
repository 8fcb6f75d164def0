use std::path::Path;

use tracing::info;

use crate::ledger::entry::{CostEntry, EntryId};
use crate::ledger::error::LedgerResult;
use crate::ledger::store::LedgerStore;
use crate::ledger::table::CostTable;

/// Session façade over the cost table and its persistence.
///
/// Owns the current in-memory table and the backing store. Every mutation
/// is applied to a scratch copy, persisted, and only then committed, so a
/// failed save leaves the in-memory table equal to the last successfully
/// persisted state and the caller sees the error.
#[derive(Debug)]
pub struct CostLedger {
    store: LedgerStore,
    table: CostTable,
}

impl CostLedger {
    /// Open a ledger against the given table file, loading the persisted
    /// state (or an empty table if none exists yet).
    pub fn open(path: impl AsRef<Path>) -> LedgerResult<Self> {
        let store = LedgerStore::new(path.as_ref());
        let table = store.load()?;
        Ok(Self { store, table })
    }

    /// Build a ledger from parts. The table is taken as-is, without an
    /// initial save.
    pub fn new(store: LedgerStore, table: CostTable) -> Self {
        Self { store, table }
    }

    /// The current in-memory table.
    pub fn table(&self) -> &CostTable {
        &self.table
    }

    /// Discard the in-memory table and re-read persisted state.
    pub fn reload(&mut self) -> LedgerResult<()> {
        self.table = self.store.load()?;
        Ok(())
    }

    /// Append an entry and persist. Returns the id assigned to the new row.
    pub fn add(&mut self, entry: CostEntry) -> LedgerResult<EntryId> {
        let resource = entry.resource.clone();
        let id = self.commit(|table| table.add(entry))?;
        info!(%resource, "added cost entry");
        Ok(id)
    }

    /// Replace the row at `index` and persist.
    pub fn update(&mut self, index: usize, entry: CostEntry) -> LedgerResult<()> {
        self.commit(|table| table.update(index, entry))?;
        info!(index, "updated cost entry");
        Ok(())
    }

    /// Remove the row at `index` and persist. Positions after `index` shift
    /// left by one.
    pub fn delete(&mut self, index: usize) -> LedgerResult<CostEntry> {
        let removed = self.commit(|table| table.delete(index))?;
        info!(index, resource = %removed.resource, "deleted cost entry");
        Ok(removed)
    }

    /// Replace the row addressed by `id` and persist.
    pub fn update_by_id(&mut self, id: EntryId, entry: CostEntry) -> LedgerResult<()> {
        self.commit(|table| table.update_by_id(id, entry))?;
        info!(%id, "updated cost entry");
        Ok(())
    }

    /// Remove the row addressed by `id` and persist.
    pub fn delete_by_id(&mut self, id: EntryId) -> LedgerResult<CostEntry> {
        let removed = self.commit(|table| table.delete_by_id(id))?;
        info!(%id, resource = %removed.resource, "deleted cost entry");
        Ok(removed)
    }

    /// Apply a mutation to a scratch copy, persist it, then commit it as the
    /// current table. On any failure the current table is left untouched.
    fn commit<T>(
        &mut self,
        mutate: impl FnOnce(&mut CostTable) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        let mut scratch = self.table.clone();
        let value = mutate(&mut scratch)?;
        self.store.save(&scratch)?;
        self.table = scratch;
        Ok(value)
    }
}
