//! Notification routing rules.

use crate::record::{Record, RecordId};
use crate::schema::{Column, FilterSpec, ListSchema};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const CHANNELS: &[&str] = &["email", "slack", "sms", "in_app"];
pub const FREQUENCIES: &[&str] = &["instant", "daily", "weekly"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRule {
    pub id: i64,
    pub event: String,
    pub channel: String,
    pub recipients: Vec<String>,
    pub frequency: String,
    pub enabled: bool,
}

impl Record for NotificationRule {
    fn id(&self) -> RecordId {
        RecordId::Number(self.id)
    }

    fn validate(&self) -> Result<(), String> {
        if self.event.trim().is_empty() {
            return Err("Event is required".to_string());
        }
        if self.recipients.is_empty() {
            return Err("At least one recipient is required".to_string());
        }
        Ok(())
    }
}

static SCHEMA: Lazy<Arc<ListSchema>> = Lazy::new(|| {
    Arc::new(ListSchema {
        domain: "notifications",
        title: "Notification Rules",
        columns: vec![
            Column::new("event", "Event", 26),
            Column::new("channel", "Channel", 9),
            Column::new("recipients", "Recipients", 36),
            Column::new("frequency", "Frequency", 10),
            Column::new("enabled", "Enabled", 8),
        ],
        searchable: vec!["event", "recipients"],
        filters: vec![
            FilterSpec::equals("channel", "Channel", CHANNELS),
            FilterSpec::equals("frequency", "Frequency", FREQUENCIES),
        ],
        sort: None,
    })
});

pub fn schema() -> Arc<ListSchema> {
    SCHEMA.clone()
}

fn rule(id: i64, event: &str, channel: &str, recipients: &[&str], frequency: &str, enabled: bool) -> NotificationRule {
    NotificationRule {
        id,
        event: event.to_string(),
        channel: channel.to_string(),
        recipients: recipients.iter().map(|r| r.to_string()).collect(),
        frequency: frequency.to_string(),
        enabled,
    }
}

pub fn seed() -> Vec<NotificationRule> {
    vec![
        rule(1, "Failed login burst", "email", &["security@company.com"], "instant", true),
        rule(2, "Ticket escalated", "slack", &["#support-leads"], "instant", true),
        rule(3, "Invoice overdue", "email", &["billing@company.com", "finance@company.com"], "daily", true),
        rule(4, "New candidate applied", "in_app", &["recruiting"], "instant", false),
        rule(5, "Weekly compliance digest", "email", &["compliance@company.com"], "weekly", true),
        rule(6, "Integration error", "sms", &["+1-555-0100"], "instant", true),
        rule(7, "Review cycle reminder", "in_app", &["managers"], "weekly", false),
    ]
}
