use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ledger::error::LedgerError;

/// Resource category. Closed set; the serialized spellings double as the
/// persisted CSV values and the CLI input names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Course Creation")]
    CourseCreation,
    Studio,
    Talent,
    Animation,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::CourseCreation,
        Category::Studio,
        Category::Talent,
        Category::Animation,
    ];

    /// Human-readable name, identical to the persisted spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CourseCreation => "Course Creation",
            Category::Studio => "Studio",
            Category::Talent => "Talent",
            Category::Animation => "Animation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', '_'], " ").to_lowercase();
        match normalized.as_str() {
            "course creation" => Ok(Category::CourseCreation),
            "studio" => Ok(Category::Studio),
            "talent" => Ok(Category::Talent),
            "animation" => Ok(Category::Animation),
            _ => Err(LedgerError::Validation(format!(
                "unknown category '{}' (expected one of: Course Creation, Studio, Talent, Animation)",
                s
            ))),
        }
    }
}

/// One row of the price list. Field order matches the persisted schema
/// exactly: `Resource, Category, Internal Cost, Billing Price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    /// Display name; acts as the lookup key within a category.
    #[serde(rename = "Resource")]
    pub resource: String,
    #[serde(rename = "Category")]
    pub category: Category,
    /// Cost rate per unit, non-negative.
    #[serde(rename = "Internal Cost")]
    pub internal_cost: f64,
    /// Client-facing rate per unit, non-negative.
    #[serde(rename = "Billing Price")]
    pub billing_price: f64,
}

impl CostEntry {
    pub fn new(
        resource: impl Into<String>,
        category: Category,
        internal_cost: f64,
        billing_price: f64,
    ) -> Self {
        Self {
            resource: resource.into(),
            category,
            internal_cost,
            billing_price,
        }
    }

    /// Check the entry against the table invariants.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.resource.trim().is_empty() {
            return Err(LedgerError::Validation(
                "resource name must not be empty".to_string(),
            ));
        }
        if !self.internal_cost.is_finite() || self.internal_cost < 0.0 {
            return Err(LedgerError::Validation(format!(
                "internal cost must be a non-negative number, got {}",
                self.internal_cost
            )));
        }
        if !self.billing_price.is_finite() || self.billing_price < 0.0 {
            return Err(LedgerError::Validation(format!(
                "billing price must be a non-negative number, got {}",
                self.billing_price
            )));
        }
        Ok(())
    }
}

/// Stable identifier assigned when a row enters the table.
///
/// Never persisted: the durable schema is exactly the four entry fields, so
/// ids are regenerated on load. They exist so a session can address a row
/// without holding a position that a delete may have invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EntryId {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| LedgerError::Validation(format!("'{}' is not a valid row id", s)))
    }
}
