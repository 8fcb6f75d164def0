use chrono::NaiveDate;

/// Build the suggested download filename:
/// `{client}_{project}_estimate_{YYYY-MM-DD}.xlsx`, with spaces in the
/// client and project names replaced by underscores. The caller supplies
/// the date so one export stays internally consistent.
pub fn export_filename(client: &str, project: &str, date: NaiveDate) -> String {
    format!(
        "{}_{}_estimate_{}.xlsx",
        client.replace(' ', "_"),
        project.replace(' ', "_"),
        date.format("%Y-%m-%d"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_is_deterministic() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("date");
        assert_eq!(
            export_filename("Acme Co", "Q3 Plan", date),
            "Acme_Co_Q3_Plan_estimate_2024-06-01.xlsx"
        );
    }

    #[test]
    fn test_names_without_spaces_pass_through() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).expect("date");
        assert_eq!(
            export_filename("Client", "Project", date),
            "Client_Project_estimate_2025-01-15.xlsx"
        );
    }
}
