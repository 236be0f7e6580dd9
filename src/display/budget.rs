//! Budget display formatting
//!
//! Formats budgets and prorated breakdowns for terminal output.

use crate::config::Settings;
use crate::models::Budget;
use crate::services::Contribution;

/// Format a list of budgets as a table
pub fn format_budget_list(budgets: &[Budget], settings: &Settings) -> String {
    if budgets.is_empty() {
        return "No budgets found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<16}  {:>4}  {:>14}  {:>14}\n",
        "Month", "", "Days", "Amount", "Daily"
    ));
    output.push_str(&format!(
        "{:-<8}  {:-<16}  {:->4}  {:->14}  {:->14}\n",
        "", "", "", "", ""
    ));

    for budget in budgets {
        output.push_str(&format!(
            "{:<8}  {:<16}  {:>4}  {:>14}  {:>14}\n",
            budget.year_month().to_string(),
            budget.year_month().label(),
            budget.days(),
            settings.format_amount(budget.amount()),
            settings.format_amount(budget.daily_amount()),
        ));
    }

    let total = budgets.iter().fold(0.0, |acc, b| acc + b.amount());
    output.push_str(&format!(
        "{:<8}  {:<16}  {:>4}  {:>14}\n",
        "Total",
        "",
        "",
        settings.format_amount(total)
    ));

    output
}

/// Format the per-budget contributions to a total
pub fn format_breakdown(contributions: &[Contribution], settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:>7}  {:>14}  {:>14}\n",
        "Month", "Overlap", "Daily", "Amount"
    ));
    output.push_str(&format!("{:-<8}  {:->7}  {:->14}  {:->14}\n", "", "", "", ""));

    for c in contributions.iter().filter(|c| c.overlap_days > 0) {
        output.push_str(&format!(
            "{:<8}  {:>7}  {:>14}  {:>14}\n",
            c.year_month.to_string(),
            c.overlap_days,
            settings.format_amount(c.daily_amount),
            settings.format_amount(c.amount),
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Accounting;
    use crate::storage::InMemoryBudgetRepo;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_budget_list(&[], &Settings::default()),
            "No budgets found."
        );
    }

    #[test]
    fn test_budget_list() {
        let budgets = vec![Budget::new("200004", 300.0).unwrap()];
        let output = format_budget_list(&budgets, &Settings::default());

        assert!(output.contains("200004"));
        assert!(output.contains("April 2000"));
        assert!(output.contains("300.00"));
        assert!(output.contains("10.00"));
    }

    #[test]
    fn test_breakdown_skips_untouched_months() {
        let accounting = Accounting::new(InMemoryBudgetRepo::new(vec![
            Budget::new("200001", 31.0).unwrap(),
            Budget::new("200004", 300.0).unwrap(),
        ]));
        let parts = accounting
            .contributions(
                NaiveDate::from_ymd_opt(2000, 3, 30).unwrap(),
                NaiveDate::from_ymd_opt(2000, 4, 2).unwrap(),
            )
            .unwrap();

        let output = format_breakdown(&parts, &Settings::default());
        assert!(!output.contains("200001"));
        assert!(output.contains("200004"));
        assert!(output.contains("20.00"));
    }
}
