//! Total CLI command
//!
//! Prints the prorated budget total for a date range.

use crate::config::settings::Settings;
use crate::display::format_breakdown;
use crate::error::ProrataResult;
use crate::models::period::parse_date;
use crate::services::{sum_contributions, Accounting};
use crate::storage::BudgetRepo;

/// Handle the total command
pub fn handle_total_command<R: BudgetRepo>(
    repo: R,
    settings: &Settings,
    start: &str,
    end: &str,
    breakdown: bool,
) -> ProrataResult<()> {
    let start = parse_date(start, &settings.date_format)?;
    let end = parse_date(end, &settings.date_format)?;

    let accounting = Accounting::new(repo);

    let total = if breakdown {
        let contributions = accounting.contributions(start, end)?;
        print!("{}", format_breakdown(&contributions, settings));
        println!();
        sum_contributions(&contributions)
    } else {
        accounting.total_amount(start, end)?
    };
    println!("{}", settings.format_amount(total));

    Ok(())
}
