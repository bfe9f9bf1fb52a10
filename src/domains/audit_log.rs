//! Security audit trail.

use crate::record::{FieldValue, Record, RecordId};
use crate::schema::{Column, FilterSpec, ListSchema};
use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const ACTIONS: &[&str] = &["login", "logout", "create", "update", "delete", "export", "permission_change"];
pub const STATUSES: &[&str] = &["success", "failure"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: String,
    pub timestamp: String,
    pub user: String,
    pub action: String,
    pub resource: String,
    pub ip_address: String,
    pub status: String,
    pub details: String,
}

impl Record for AuditLog {
    fn id(&self) -> RecordId {
        RecordId::Text(self.id.clone())
    }

    // Hot path for search-as-you-type over the largest page.
    fn field(&self, name: &str) -> Option<FieldValue> {
        let text = match name {
            "id" => &self.id,
            "timestamp" => &self.timestamp,
            "user" => &self.user,
            "action" => &self.action,
            "resource" => &self.resource,
            "ip_address" => &self.ip_address,
            "status" => &self.status,
            "details" => &self.details,
            _ => return None,
        };
        Some(FieldValue::Text(text.clone()))
    }

    fn validate(&self) -> Result<(), String> {
        if self.user.trim().is_empty() {
            return Err("User is required".to_string());
        }
        if self.action.trim().is_empty() {
            return Err("Action is required".to_string());
        }
        Ok(())
    }
}

static SCHEMA: Lazy<Arc<ListSchema>> = Lazy::new(|| {
    Arc::new(ListSchema {
        domain: "audit-logs",
        title: "Audit Logs",
        columns: vec![
            Column::new("timestamp", "Time", 18),
            Column::new("user", "User", 22),
            Column::new("action", "Action", 16),
            Column::new("resource", "Resource", 20),
            Column::new("status", "Status", 9),
            Column::new("ip_address", "IP", 15),
        ],
        searchable: vec!["user", "action", "resource", "details", "ip_address"],
        filters: vec![
            FilterSpec::equals("action", "Action", ACTIONS),
            FilterSpec::equals("status", "Status", STATUSES),
            FilterSpec::date_range("date", "Date", "timestamp"),
        ],
        sort: None,
    })
});

pub fn schema() -> Arc<ListSchema> {
    SCHEMA.clone()
}

const USERS: &[&str] = &[
    "admin@company.com",
    "j.smith@company.com",
    "m.garcia@company.com",
    "security@company.com",
    "a.chen@company.com",
];

const RESOURCES: &[&str] = &[
    "User Management",
    "Billing Settings",
    "Role: Support Agent",
    "Integration: Salesforce",
    "Audit Export",
    "API Keys",
    "Customer Records",
];

/// 45 entries spread over January 2024, newest first.
pub fn seed() -> Vec<AuditLog> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap_or_default();

    (0..45)
        .map(|i: usize| {
            let day = start - Duration::days((i / 2) as i64);
            let hour = 8 + (i * 5) % 10;
            let minute = (i * 17) % 60;
            let action = ACTIONS[i % ACTIONS.len()];
            let status = if i % 9 == 4 { "failure" } else { "success" };

            AuditLog {
                id: format!("log-{:03}", i + 1),
                timestamp: format!("{}T{:02}:{:02}:00Z", day, hour, minute),
                user: USERS[i % USERS.len()].to_string(),
                action: action.to_string(),
                resource: RESOURCES[(i * 3) % RESOURCES.len()].to_string(),
                ip_address: format!("192.168.{}.{}", 1 + i % 4, 10 + (i * 7) % 200),
                status: status.to_string(),
                details: if status == "failure" {
                    format!("{} denied: insufficient permissions", action)
                } else {
                    format!("{} completed", action)
                },
            }
        })
        .collect()
}
