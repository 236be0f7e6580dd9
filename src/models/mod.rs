//! Core data models for prorata-cli
//!
//! Monthly budgets, the calendar months that identify them, and the inclusive
//! date periods used to prorate them.

pub mod budget;
pub mod period;
pub mod year_month;

pub use budget::Budget;
pub use period::Period;
pub use year_month::YearMonth;
