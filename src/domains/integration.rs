//! Third-party integrations.

use crate::record::{Record, RecordId};
use crate::schema::{Column, FilterSpec, ListSchema};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const CATEGORIES: &[&str] = &["crm", "payments", "communication", "analytics", "storage"];
pub const STATUSES: &[&str] = &["connected", "disconnected", "error"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    pub id: String,
    pub name: String,
    pub category: String,
    pub status: String,
    pub enabled: bool,
    pub last_sync: Option<String>,
    pub api_calls: u64,
}

impl Record for Integration {
    fn id(&self) -> RecordId {
        RecordId::Text(self.id.clone())
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Integration name is required".to_string());
        }
        Ok(())
    }
}

static SCHEMA: Lazy<Arc<ListSchema>> = Lazy::new(|| {
    Arc::new(ListSchema {
        domain: "integrations",
        title: "Integrations",
        columns: vec![
            Column::new("name", "Name", 18),
            Column::new("category", "Category", 14),
            Column::new("status", "Status", 13),
            Column::new("enabled", "Enabled", 8),
            Column::new("last_sync", "Last sync", 20),
            Column::new("api_calls", "API calls", 10),
        ],
        searchable: vec!["name", "category"],
        filters: vec![
            FilterSpec::equals("category", "Category", CATEGORIES),
            FilterSpec::equals("status", "Status", STATUSES),
        ],
        sort: None,
    })
});

pub fn schema() -> Arc<ListSchema> {
    SCHEMA.clone()
}

fn integration(id: &str, name: &str, category: &str, status: &str, last_sync: Option<&str>, api_calls: u64) -> Integration {
    Integration {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        status: status.to_string(),
        enabled: status == "connected",
        last_sync: last_sync.map(str::to_string),
        api_calls,
    }
}

pub fn seed() -> Vec<Integration> {
    vec![
        integration("salesforce", "Salesforce", "crm", "connected", Some("2024-01-31T09:12:00Z"), 18_420),
        integration("hubspot", "HubSpot", "crm", "disconnected", None, 0),
        integration("stripe", "Stripe", "payments", "connected", Some("2024-01-31T10:02:00Z"), 52_310),
        integration("slack", "Slack", "communication", "connected", Some("2024-01-31T10:15:00Z"), 7_904),
        integration("twilio", "Twilio", "communication", "error", Some("2024-01-29T22:40:00Z"), 1_208),
        integration("segment", "Segment", "analytics", "connected", Some("2024-01-30T18:00:00Z"), 96_551),
        integration("s3", "Amazon S3", "storage", "connected", Some("2024-01-31T00:00:00Z"), 3_377),
        integration("gdrive", "Google Drive", "storage", "disconnected", None, 0),
    ]
}
