//! Cost table storage module.

pub mod entry;
pub mod error;
pub mod session;
pub mod store;
pub mod table;

pub use entry::{Category, CostEntry, EntryId};
pub use error::{LedgerError, LedgerResult};
pub use session::CostLedger;
pub use store::LedgerStore;
pub use table::{CostTable, TableRow};
