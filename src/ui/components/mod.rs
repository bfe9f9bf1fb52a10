//! Reusable UI components

pub mod dialogs;
pub mod filter_bar;
pub mod footer;
pub mod help_panel;
pub mod log_viewer;
pub mod record_table;
pub mod sidebar;
pub mod status_bar;
pub mod toasts;

pub use dialogs::DeleteConfirmationDialog;
pub use filter_bar::FilterBar;
pub use footer::Footer;
pub use help_panel::HelpPanel;
pub use log_viewer::LogViewer;
pub use record_table::RecordTable;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use toasts::Toasts;
