//! Display formatting for terminal output

pub mod budget;

pub use budget::{format_breakdown, format_budget_list};
