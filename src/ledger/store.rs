use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ledger::entry::CostEntry;
use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::table::CostTable;

/// Persisted column headers, in schema order.
pub const CSV_HEADERS: [&str; 4] = ["Resource", "Category", "Internal Cost", "Billing Price"];

/// Cost table persistence backed by a single CSV file.
///
/// Every save is a full replace: the table is written to a sibling temp file
/// and renamed over the target, so a reader never observes a partial write.
/// Two sessions writing the same path race last-writer-wins; the store is
/// built for a single operator at a time.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store persisting to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the persisted table file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted table. A missing file is not an error: it yields
    /// an empty table with the fixed schema.
    pub fn load(&self) -> LedgerResult<CostTable> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no persisted table, starting empty");
                return Ok(CostTable::new());
            }
            Err(err) => return Err(LedgerError::Io(err)),
        };

        let mut reader = csv::Reader::from_reader(file);
        let mut entries = Vec::new();
        for result in reader.deserialize::<CostEntry>() {
            entries.push(result?);
        }

        debug!(path = %self.path.display(), rows = entries.len(), "loaded table");
        Ok(CostTable::from_entries(entries))
    }

    /// Overwrite the persisted table with `table`, atomically from the
    /// perspective of any subsequent load.
    pub fn save(&self, table: &CostTable) -> LedgerResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        let file = fs::File::create(&temp_path)?;
        // Automatic headers are disabled: the header row is written
        // explicitly, once, so an empty table still persists the schema and
        // the first serialized row does not emit a second header.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer.write_record(CSV_HEADERS)?;
        for entry in table.entries() {
            writer.serialize(entry)?;
        }
        writer.flush()?;

        let file = writer
            .into_inner()
            .map_err(|err| LedgerError::Io(err.into_error()))?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;

        debug!(path = %self.path.display(), rows = table.len(), "saved table");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cost_data.csv".to_string());
        self.path.with_file_name(format!("{}.tmp", file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::ledger::entry::Category;

    fn sample_table() -> CostTable {
        CostTable::from_entries([
            CostEntry::new("SME", Category::CourseCreation, 100.0, 150.0),
            CostEntry::new("Studio Hire", Category::Studio, 200.0, 300.0),
            CostEntry::new("Voice Actor", Category::Talent, 80.5, 120.75),
        ])
    }

    #[test]
    fn test_load_missing_file_returns_empty_table() {
        let temp_dir = TempDir::new().expect("temp dir");
        let store = LedgerStore::new(temp_dir.path().join("cost_data.csv"));

        let table = store.load().expect("load");
        assert!(table.is_empty());
    }

    #[test]
    fn test_save_load_roundtrip_preserves_rows() {
        let temp_dir = TempDir::new().expect("temp dir");
        let store = LedgerStore::new(temp_dir.path().join("cost_data.csv"));
        let table = sample_table();

        store.save(&table).expect("save");
        let loaded = store.load().expect("load");

        let original: Vec<_> = table.entries().cloned().collect();
        let reloaded: Vec<_> = loaded.entries().cloned().collect();
        assert_eq!(original, reloaded);
    }

    #[test]
    fn test_save_writes_exact_header() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("cost_data.csv");
        let store = LedgerStore::new(&path);

        store.save(&sample_table()).expect("save");
        let content = fs::read_to_string(&path).expect("read file");

        let header = content.lines().next().expect("header line");
        assert_eq!(header, "Resource,Category,Internal Cost,Billing Price");
        assert!(content.lines().nth(1).expect("first row").starts_with("SME,Course Creation,"));
    }

    #[test]
    fn test_save_writes_header_exactly_once() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("cost_data.csv");
        let store = LedgerStore::new(&path);

        store.save(&sample_table()).expect("save");
        let content = fs::read_to_string(&path).expect("read file");

        let header_lines = content
            .lines()
            .filter(|line| *line == "Resource,Category,Internal Cost,Billing Price")
            .count();
        assert_eq!(header_lines, 1);
        assert_eq!(content.lines().count(), 1 + sample_table().len());
        assert!(content.lines().nth(1).expect("first row").starts_with("SME,"));
    }

    #[test]
    fn test_save_empty_table_keeps_schema() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("cost_data.csv");
        let store = LedgerStore::new(&path);

        store.save(&CostTable::new()).expect("save");
        let content = fs::read_to_string(&path).expect("read file");
        assert_eq!(content.trim_end(), "Resource,Category,Internal Cost,Billing Price");

        let loaded = store.load().expect("load");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().expect("temp dir");
        let store = LedgerStore::new(temp_dir.path().join("cost_data.csv"));

        store.save(&sample_table()).expect("save");
        let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
            .expect("read dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "temp files left: {:?}", leftovers);
    }

    #[test]
    fn test_load_malformed_category_is_persistence_error() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("cost_data.csv");
        fs::write(
            &path,
            "Resource,Category,Internal Cost,Billing Price\nSME,Catering,100,150\n",
        )
        .expect("write file");

        let store = LedgerStore::new(&path);
        let err = store.load().expect_err("malformed category");
        assert!(matches!(err, LedgerError::Csv(_)));
    }

    #[test]
    fn test_save_overwrites_previous_state() {
        let temp_dir = TempDir::new().expect("temp dir");
        let store = LedgerStore::new(temp_dir.path().join("cost_data.csv"));

        store.save(&sample_table()).expect("first save");
        let smaller = CostTable::from_entries([CostEntry::new(
            "Animator",
            Category::Animation,
            5.0,
            9.0,
        )]);
        store.save(&smaller).expect("second save");

        let loaded = store.load().expect("load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(0).expect("row 0").entry.resource, "Animator");
    }
}
