//! Estimate and breakdown computations over the cost table.
//!
//! Two independent calculations:
//! - **Live estimate**: one resource under one category, times a quantity,
//!   priced at the billing rate ([`estimate`]).
//! - **Internal-cost breakdown**: every distinct resource in the table,
//!   with units resolved from the nine named slots ([`breakdown`]).

pub mod breakdown;
pub mod estimator;
pub mod slots;

pub use breakdown::{breakdown, BreakdownRow};
pub use estimator::{estimate, Estimate};
pub use slots::{UnitSlots, SLOT_NAMES};
