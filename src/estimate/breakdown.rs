use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::estimate::slots::UnitSlots;
use crate::ledger::{Category, CostTable};

/// One resource's computed internal-cost line in the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub resource: String,
    /// Internal cost rate per unit.
    pub internal_cost: f64,
    /// Units resolved from the slot inputs.
    pub units: u64,
    /// `internal_cost * units`.
    pub total_internal: f64,
    pub billing_price: f64,
}

/// Compute the internal-cost breakdown across the whole table.
///
/// Resources are considered once each, by name, in first-occurrence order;
/// when a name repeats, the first row's rates and category decide. Units
/// resolve by category, first rule that applies:
/// 1. Course Creation, resource named like a slot: that slot's count.
/// 2. Studio, resource named exactly "Studio Hire": the Studio Hire count.
/// 3. Talent: the Talent count, whatever the resource is called.
/// 4. Animation: the Animation count, whatever the resource is called.
/// 5. Anything else is excluded — a Studio resource that is not
///    "Studio Hire" produces no row at all.
pub fn breakdown(table: &CostTable, slots: &UnitSlots) -> Vec<BreakdownRow> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut rows = Vec::new();

    for entry in table.entries() {
        if !seen.insert(entry.resource.as_str()) {
            continue;
        }

        let units = match entry.category {
            Category::CourseCreation => match slots.course_creation_units(&entry.resource) {
                Some(units) => units,
                None => continue,
            },
            Category::Studio if entry.resource == "Studio Hire" => slots.studio_hire,
            Category::Studio => continue,
            Category::Talent => slots.talent,
            Category::Animation => slots.animation,
        };

        rows.push(BreakdownRow {
            resource: entry.resource.clone(),
            internal_cost: entry.internal_cost,
            units,
            total_internal: entry.internal_cost * units as f64,
            billing_price: entry.billing_price,
        });
    }

    rows
}
