//! Roles and their permission sets.

use crate::record::{Record, RecordId};
use crate::schema::{Column, FilterSpec, ListSchema};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const PERMISSIONS: &[&str] = &[
    "users.read",
    "users.write",
    "billing.read",
    "billing.write",
    "tickets.read",
    "tickets.write",
    "reports.export",
    "settings.admin",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
    pub user_count: u32,
    pub is_system: bool,
    pub active: bool,
}

impl Record for Role {
    fn id(&self) -> RecordId {
        RecordId::Number(self.id)
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Role name is required".to_string());
        }
        if self.permissions.is_empty() {
            return Err("A role needs at least one permission".to_string());
        }
        Ok(())
    }
}

static SCHEMA: Lazy<Arc<ListSchema>> = Lazy::new(|| {
    Arc::new(ListSchema {
        domain: "roles",
        title: "Roles & Permissions",
        columns: vec![
            Column::new("name", "Role", 18),
            Column::new("description", "Description", 34),
            Column::new("user_count", "Users", 6),
            Column::new("permissions", "Permissions", 34),
            Column::new("active", "Active", 7),
        ],
        searchable: vec!["name", "description"],
        filters: vec![
            FilterSpec::contains("permission", "Permission", "permissions", PERMISSIONS),
            FilterSpec::equals("active", "Active", &["true", "false"]),
        ],
        sort: None,
    })
});

pub fn schema() -> Arc<ListSchema> {
    SCHEMA.clone()
}

fn role(id: i64, name: &str, description: &str, permissions: &[&str], user_count: u32, is_system: bool) -> Role {
    Role {
        id,
        name: name.to_string(),
        description: description.to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
        user_count,
        is_system,
        active: true,
    }
}

pub fn seed() -> Vec<Role> {
    let mut roles = vec![
        role(1, "Administrator", "Full access to every module", PERMISSIONS, 3, true),
        role(
            2,
            "Support Agent",
            "Handles customer tickets",
            &["tickets.read", "tickets.write", "users.read"],
            24,
            true,
        ),
        role(3, "Billing Manager", "Manages invoices and plans", &["billing.read", "billing.write"], 4, false),
        role(4, "Auditor", "Read-only compliance access", &["users.read", "billing.read", "reports.export"], 2, false),
        role(5, "Sales Rep", "Works accounts and forecasts", &["users.read", "reports.export"], 15, false),
        role(6, "HR Partner", "Onboarding and reviews", &["users.read", "users.write"], 5, false),
        role(7, "Contractor", "Temporary ticket access", &["tickets.read"], 6, false),
    ];
    if let Some(contractor) = roles.last_mut() {
        contractor.active = false;
    }
    roles
}
