//! Support ticket escalations.

use crate::record::{Record, RecordId};
use crate::schema::{Column, FilterSpec, ListSchema};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const PRIORITIES: &[&str] = &["low", "medium", "high", "urgent"];
pub const STATUSES: &[&str] = &["open", "investigating", "waiting_on_customer", "resolved"];
pub const ASSIGNEES: &[&str] = &["Alex Kim", "Jordan Lee", "Sam Taylor", "Unassigned"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Escalation {
    pub id: String,
    pub ticket_id: String,
    pub subject: String,
    pub customer: String,
    pub priority: String,
    pub status: String,
    pub assignee: String,
    pub created_at: String,
    pub sla_breached: bool,
}

impl Record for Escalation {
    fn id(&self) -> RecordId {
        RecordId::Text(self.id.clone())
    }

    fn validate(&self) -> Result<(), String> {
        if self.subject.trim().is_empty() {
            return Err("Subject is required".to_string());
        }
        if !PRIORITIES.contains(&self.priority.as_str()) {
            return Err(format!("Unknown priority '{}'", self.priority));
        }
        Ok(())
    }
}

static SCHEMA: Lazy<Arc<ListSchema>> = Lazy::new(|| {
    Arc::new(ListSchema {
        domain: "escalations",
        title: "Escalations",
        columns: vec![
            Column::new("id", "Escalation", 10),
            Column::new("ticket_id", "Ticket", 9),
            Column::new("subject", "Subject", 30),
            Column::new("customer", "Customer", 16),
            Column::new("priority", "Priority", 8),
            Column::new("status", "Status", 14),
            Column::new("assignee", "Assignee", 12),
            Column::new("created_at", "Created", 16),
            Column::new("sla_breached", "SLA breach", 10),
        ],
        searchable: vec!["id", "ticket_id", "subject", "customer"],
        filters: vec![
            FilterSpec::equals("priority", "Priority", PRIORITIES),
            FilterSpec::equals("status", "Status", STATUSES),
            FilterSpec::equals("assignee", "Assignee", ASSIGNEES),
            FilterSpec::date_range("created", "Created", "created_at"),
        ],
        sort: None,
    })
});

pub fn schema() -> Arc<ListSchema> {
    SCHEMA.clone()
}

#[allow(clippy::too_many_arguments)]
fn escalation(
    id: &str,
    ticket_id: &str,
    subject: &str,
    customer: &str,
    priority: &str,
    status: &str,
    assignee: &str,
    created_at: &str,
    sla_breached: bool,
) -> Escalation {
    Escalation {
        id: id.to_string(),
        ticket_id: ticket_id.to_string(),
        subject: subject.to_string(),
        customer: customer.to_string(),
        priority: priority.to_string(),
        status: status.to_string(),
        assignee: assignee.to_string(),
        created_at: created_at.to_string(),
        sla_breached,
    }
}

pub fn seed() -> Vec<Escalation> {
    vec![
        escalation("ESC-201", "T-4411", "Checkout fails for EU cards", "Northwind Traders", "urgent", "investigating", "Alex Kim", "2024-01-22T08:15:00Z", true),
        escalation("ESC-202", "T-4420", "Data export missing columns", "Initech", "medium", "open", "Jordan Lee", "2024-01-22T10:40:00Z", false),
        escalation("ESC-203", "T-4398", "SSO login loop", "Globex", "high", "waiting_on_customer", "Sam Taylor", "2024-01-20T16:05:00Z", false),
        escalation("ESC-204", "T-4377", "Invoice totals incorrect", "Hooli", "high", "resolved", "Alex Kim", "2024-01-18T09:30:00Z", true),
        escalation("ESC-205", "T-4431", "Webhook retries flooding endpoint", "Umbrella Health", "urgent", "open", "Unassigned", "2024-01-23T07:50:00Z", false),
        escalation("ESC-206", "T-4359", "Slow dashboard load", "Stark Logistics", "low", "resolved", "Jordan Lee", "2024-01-15T13:20:00Z", false),
    ]
}
