//! Constants used throughout the application
//!
//! This module centralizes notification titles, UI text, and configuration bounds.

// Notification titles
pub const TITLE_RECORD_CREATED: &str = "✅ Record created";
pub const TITLE_RECORD_UPDATED: &str = "✅ Record updated";
pub const TITLE_RECORD_DELETED: &str = "✅ Record deleted";
pub const TITLE_EXPORT_READY: &str = "✅ Export ready";
pub const TITLE_ACTION_FAILED: &str = "❌ Action failed";
pub const TITLE_EXPORT_FAILED: &str = "❌ Export failed";
pub const TITLE_LOAD_FAILED: &str = "❌ Failed to load records";
pub const TITLE_SAMPLE_DATA: &str = "ℹ Showing sample data";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const EMPTY_LIST: &str = "No records match the current filters. Press 'c' to clear them.";
pub const LOADING_LIST: &str = "Loading records...";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc' or 'L' to close";
pub const STATUS_SHORTCUTS: &str = "/: search • f: filter • c: clear • n/p: page • Space: select • e/E: export • ?: help • q: quit";

// Configuration bounds
/// Smallest allowed page size
pub const PAGE_SIZE_MIN: usize = 1;
/// Largest allowed page size
pub const PAGE_SIZE_MAX: usize = 500;
/// Default rows per page
pub const PAGE_SIZE_DEFAULT: usize = 20;
/// Longest allowed search debounce in milliseconds
pub const DEBOUNCE_MAX_MS: u64 = 2000;
/// Notification timeout bounds in milliseconds
pub const NOTIFICATION_TIMEOUT_MIN_MS: u64 = 500;
pub const NOTIFICATION_TIMEOUT_MAX_MS: u64 = 60_000;

// UI Layout Constants
/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 26;
/// Lines kept in the in-memory log buffer
pub const LOG_BUFFER_LINES: usize = 500;
