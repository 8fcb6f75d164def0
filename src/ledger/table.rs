use crate::ledger::entry::{CostEntry, EntryId};
use crate::ledger::error::{LedgerError, LedgerResult};

/// One positioned row: a stable id plus the entry data.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: EntryId,
    pub entry: CostEntry,
}

/// Ordered sequence of cost entries.
///
/// Insertion order is preserved and positions are meaningful: positional
/// `update`/`delete` keep the classic semantics (a delete shifts later rows
/// left by one, invalidating any position held across it). The id-based
/// variants sidestep that by addressing rows through their [`EntryId`].
#[derive(Debug, Clone, Default)]
pub struct CostTable {
    rows: Vec<TableRow>,
}

impl CostTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from plain entries, assigning each a fresh id.
    /// Entries are not re-validated; callers own that at the input boundary.
    pub fn from_entries(entries: impl IntoIterator<Item = CostEntry>) -> Self {
        Self {
            rows: entries
                .into_iter()
                .map(|entry| TableRow {
                    id: EntryId::new(),
                    entry,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in table order.
    pub fn rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter()
    }

    /// Iterate entries in table order.
    pub fn entries(&self) -> impl Iterator<Item = &CostEntry> {
        self.rows.iter().map(|row| &row.entry)
    }

    pub fn get(&self, index: usize) -> Option<&TableRow> {
        self.rows.get(index)
    }

    /// Current position of a row, if it is still in the table.
    pub fn index_of(&self, id: EntryId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    /// Append a validated entry, returning the id assigned to it.
    /// Duplicate resource names are permitted; lookups resolve to the
    /// lowest index.
    pub fn add(&mut self, entry: CostEntry) -> LedgerResult<EntryId> {
        entry.validate()?;
        let id = EntryId::new();
        self.rows.push(TableRow { id, entry });
        Ok(id)
    }

    /// Replace the row at `index` in place. The row keeps its id.
    pub fn update(&mut self, index: usize, entry: CostEntry) -> LedgerResult<()> {
        entry.validate()?;
        let len = self.len();
        match self.rows.get_mut(index) {
            Some(row) => {
                row.entry = entry;
                Ok(())
            }
            None => Err(LedgerError::Index { index, len }),
        }
    }

    /// Remove the row at `index`, shifting subsequent rows left by one.
    pub fn delete(&mut self, index: usize) -> LedgerResult<CostEntry> {
        if index >= self.len() {
            return Err(LedgerError::Index {
                index,
                len: self.len(),
            });
        }
        Ok(self.rows.remove(index).entry)
    }

    /// Replace the row addressed by `id`.
    pub fn update_by_id(&mut self, id: EntryId, entry: CostEntry) -> LedgerResult<()> {
        let index = self.index_of(id).ok_or(LedgerError::UnknownId(id))?;
        self.update(index, entry)
    }

    /// Remove the row addressed by `id`.
    pub fn delete_by_id(&mut self, id: EntryId) -> LedgerResult<CostEntry> {
        let index = self.index_of(id).ok_or(LedgerError::UnknownId(id))?;
        self.delete(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::entry::Category;

    fn entry(resource: &str) -> CostEntry {
        CostEntry::new(resource, Category::Talent, 10.0, 20.0)
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut table = CostTable::new();
        table.add(entry("A")).expect("add A");
        table.add(entry("B")).expect("add B");

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1).expect("row 1").entry.resource, "B");
    }

    #[test]
    fn test_add_rejects_empty_resource() {
        let mut table = CostTable::new();
        let err = table.add(entry("")).expect_err("empty resource");
        assert!(matches!(err, LedgerError::Validation(_)));
        assert!(table.is_empty());
    }

    #[test]
    fn test_add_permits_duplicate_resources() {
        let mut table = CostTable::new();
        table.add(entry("Talent")).expect("first");
        table.add(entry("Talent")).expect("duplicate");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_update_out_of_bounds() {
        let mut table = CostTable::from_entries([entry("A")]);
        let err = table.update(1, entry("B")).expect_err("out of bounds");
        assert!(matches!(err, LedgerError::Index { index: 1, len: 1 }));
        assert_eq!(table.get(0).expect("row 0").entry.resource, "A");
    }

    #[test]
    fn test_update_keeps_row_id() {
        let mut table = CostTable::new();
        let id = table.add(entry("A")).expect("add");
        table.update(0, entry("B")).expect("update");

        let row = table.get(0).expect("row 0");
        assert_eq!(row.id, id);
        assert_eq!(row.entry.resource, "B");
    }

    #[test]
    fn test_delete_out_of_bounds() {
        let mut table = CostTable::from_entries([entry("A")]);
        let err = table.delete(5).expect_err("out of bounds");
        assert!(matches!(err, LedgerError::Index { index: 5, len: 1 }));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_delete_reindexes_subsequent_rows() {
        let mut table = CostTable::from_entries([entry("A"), entry("B"), entry("C")]);
        let removed = table.delete(1).expect("delete");

        assert_eq!(removed.resource, "B");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0).expect("row 0").entry.resource, "A");
        assert_eq!(table.get(1).expect("row 1").entry.resource, "C");
    }

    #[test]
    fn test_id_survives_reindexing() {
        let mut table = CostTable::new();
        table.add(entry("A")).expect("add A");
        table.add(entry("B")).expect("add B");
        let id_c = table.add(entry("C")).expect("add C");

        table.delete(0).expect("delete A");
        assert_eq!(table.index_of(id_c), Some(1));
        table
            .update_by_id(id_c, entry("C2"))
            .expect("update by id after reindex");
        assert_eq!(table.get(1).expect("row 1").entry.resource, "C2");
    }

    #[test]
    fn test_delete_by_id_unknown() {
        let mut table = CostTable::from_entries([entry("A")]);
        let err = table
            .delete_by_id(EntryId::new())
            .expect_err("unknown id");
        assert!(matches!(err, LedgerError::UnknownId(_)));
        assert_eq!(table.len(), 1);
    }
}
