use crate::estimate::{BreakdownRow, Estimate};

/// Name of the breakdown sheet, always present in an export.
pub const BREAKDOWN_SHEET_NAME: &str = "Cost Breakdown";

/// Name of the estimate sheet, present only when an estimate was computed.
pub const ESTIMATE_SHEET_NAME: &str = "Live Estimate";

/// Breakdown sheet column titles, in order.
pub const BREAKDOWN_COLUMNS: [&str; 5] = [
    "Resource",
    "Internal Cost",
    "Units / Hours",
    "Total Internal Cost",
    "Billing Price",
];

/// Estimate sheet column titles, in order.
pub const ESTIMATE_COLUMNS: [&str; 5] = [
    "Resource",
    "Category",
    "Units",
    "Billing Rate",
    "Total Estimated Cost",
];

/// One spreadsheet cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

/// A named sheet: column titles followed by data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

/// Assemble the export sheets from computed results. The breakdown sheet is
/// always first; the estimate sheet follows only when an estimate exists.
pub fn export_sheets(breakdown: &[BreakdownRow], estimate: Option<&Estimate>) -> Vec<Sheet> {
    let mut sheets = vec![breakdown_sheet(breakdown)];
    if let Some(estimate) = estimate {
        sheets.push(estimate_sheet(estimate));
    }
    sheets
}

fn breakdown_sheet(rows: &[BreakdownRow]) -> Sheet {
    Sheet {
        name: BREAKDOWN_SHEET_NAME.to_string(),
        columns: BREAKDOWN_COLUMNS.to_vec(),
        rows: rows
            .iter()
            .map(|row| {
                vec![
                    Cell::Text(row.resource.clone()),
                    Cell::Number(row.internal_cost),
                    Cell::Number(row.units as f64),
                    Cell::Number(row.total_internal),
                    Cell::Number(row.billing_price),
                ]
            })
            .collect(),
    }
}

fn estimate_sheet(estimate: &Estimate) -> Sheet {
    Sheet {
        name: ESTIMATE_SHEET_NAME.to_string(),
        columns: ESTIMATE_COLUMNS.to_vec(),
        rows: vec![vec![
            Cell::Text(estimate.resource.clone()),
            Cell::Text(estimate.category.to_string()),
            Cell::Number(estimate.units as f64),
            Cell::Number(estimate.billing_rate),
            Cell::Number(estimate.total),
        ]],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Category;

    fn breakdown_rows() -> Vec<BreakdownRow> {
        vec![BreakdownRow {
            resource: "SME".to_string(),
            internal_cost: 100.0,
            units: 3,
            total_internal: 300.0,
            billing_price: 150.0,
        }]
    }

    #[test]
    fn test_breakdown_sheet_always_present() {
        let sheets = export_sheets(&breakdown_rows(), None);
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].name, BREAKDOWN_SHEET_NAME);
        assert_eq!(sheets[0].columns, BREAKDOWN_COLUMNS.to_vec());
        assert_eq!(sheets[0].rows.len(), 1);
        assert_eq!(sheets[0].rows[0][0], Cell::Text("SME".to_string()));
        assert_eq!(sheets[0].rows[0][3], Cell::Number(300.0));
    }

    #[test]
    fn test_estimate_sheet_only_when_estimate_exists() {
        let estimate = Estimate {
            resource: "Voice Actor".to_string(),
            category: Category::Talent,
            units: 2,
            billing_rate: 120.0,
            total: 240.0,
        };

        let sheets = export_sheets(&breakdown_rows(), Some(&estimate));
        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[1].name, ESTIMATE_SHEET_NAME);
        assert_eq!(sheets[1].columns, ESTIMATE_COLUMNS.to_vec());
        assert_eq!(sheets[1].rows[0][1], Cell::Text("Talent".to_string()));
        assert_eq!(sheets[1].rows[0][4], Cell::Number(240.0));
    }

    #[test]
    fn test_empty_breakdown_still_yields_headed_sheet() {
        let sheets = export_sheets(&[], None);
        assert_eq!(sheets[0].columns.len(), 5);
        assert!(sheets[0].rows.is_empty());
    }
}
