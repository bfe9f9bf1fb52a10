//! opsdesk - terminal console for business operations admin pages
//!
//! Every page (audit logs, roles, integrations, onboarding, accounts,
//! escalations, ...) is the same list machinery configured with a different
//! schema: search and field filters, pagination, bulk CSV/JSON export and
//! optimistic local edits with notifications.
//!
//! # Modules
//!
//! * [`filter`] - Search and field filters over a page's rows
//! * [`paginator`] - Page slicing and navigation
//! * [`export`] - Bulk CSV/JSON export
//! * [`mutation`] - Optimistic create/update/delete/toggle
//! * [`notification`] - Notification lifecycle
//! * [`view`] - One page's state tying the above together
//! * [`domains`] - Per-page record types, schemas and sample data
//! * [`ui`] - Terminal user interface

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Per-page record types, schemas and sample data
pub mod domains;

pub mod export;
pub mod filter;

/// Logging setup and in-memory log buffer
pub mod logger;

pub mod mutation;
pub mod notification;
pub mod paginator;
pub mod record;
pub mod schema;
pub mod selection;
pub mod source;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

pub mod view;

pub use record::{FieldValue, Record, RecordId, Rows};
pub use schema::ListSchema;
pub use view::ListView;
