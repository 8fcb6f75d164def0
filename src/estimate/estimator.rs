use serde::{Deserialize, Serialize};

use crate::ledger::{Category, CostTable};

/// A single live pricing computation: one resource under one category,
/// priced at its billing rate for a given quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub resource: String,
    pub category: Category,
    /// Units or hours requested.
    pub units: u64,
    /// Billing rate per unit of the selected resource.
    pub billing_rate: f64,
    /// `billing_rate * units`.
    pub total: f64,
}

/// Compute the live estimate for `resource` under `category`.
///
/// The first matching row (lowest table index) wins when resource names
/// repeat. Returns `None` when no row matches — the "no estimate" state,
/// which the caller must be able to represent.
pub fn estimate(
    table: &CostTable,
    category: Category,
    resource: &str,
    units: u64,
) -> Option<Estimate> {
    let entry = table
        .entries()
        .find(|entry| entry.category == category && entry.resource == resource)?;

    let total = entry.billing_price * units as f64;
    Some(Estimate {
        resource: entry.resource.clone(),
        category,
        units,
        billing_rate: entry.billing_price,
        total,
    })
}
