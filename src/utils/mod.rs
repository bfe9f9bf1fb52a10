//! Utility modules shared across the list machinery and the terminal UI.
//!
//! - [`datetime`] - Date parsing for filters, export stamps and human-readable cells

pub mod datetime;
