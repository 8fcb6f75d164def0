//! Cost price-list management.
//!
//! The crate is organized around three concerns:
//! - [`ledger`]: the cost table itself — row types, validated mutation,
//!   CSV persistence, and the [`ledger::CostLedger`] session façade that
//!   keeps the in-memory table consistent with durable storage.
//! - [`estimate`]: computations over the table — a single live estimate
//!   for one resource selection, and the full internal-cost breakdown
//!   driven by the nine named unit-count slots.
//! - [`export`]: assembly of the downloadable spreadsheet artifact and
//!   its deterministic filename.

pub mod estimate;
pub mod export;
pub mod ledger;
