//! Support agent time tracking.

use crate::record::{Record, RecordId};
use crate::schema::{Column, FilterSpec, ListSchema};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const AGENTS: &[&str] = &["Alex Kim", "Jordan Lee", "Sam Taylor"];
pub const ACTIVITIES: &[&str] = &["troubleshooting", "call", "documentation", "follow_up"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: i64,
    pub agent: String,
    pub ticket_id: String,
    pub activity: String,
    pub date: String,
    pub hours: f64,
    pub billable: bool,
    pub notes: String,
}

impl Record for TimeEntry {
    fn id(&self) -> RecordId {
        RecordId::Number(self.id)
    }

    fn validate(&self) -> Result<(), String> {
        if self.agent.trim().is_empty() {
            return Err("Agent is required".to_string());
        }
        if !(self.hours > 0.0 && self.hours <= 24.0) {
            return Err("Hours must be between 0 and 24".to_string());
        }
        Ok(())
    }
}

static SCHEMA: Lazy<Arc<ListSchema>> = Lazy::new(|| {
    Arc::new(ListSchema {
        domain: "time-tracking",
        title: "Time Tracking",
        columns: vec![
            Column::new("date", "Date", 11),
            Column::new("agent", "Agent", 12),
            Column::new("ticket_id", "Ticket", 9),
            Column::new("activity", "Activity", 15),
            Column::new("hours", "Hours", 6),
            Column::new("billable", "Billable", 8),
            Column::new("notes", "Notes", 30),
        ],
        searchable: vec!["agent", "ticket_id", "notes"],
        filters: vec![
            FilterSpec::equals("agent", "Agent", AGENTS),
            FilterSpec::equals("activity", "Activity", ACTIVITIES),
            FilterSpec::date_range("date", "Date", "date"),
        ],
        sort: None,
    })
});

pub fn schema() -> Arc<ListSchema> {
    SCHEMA.clone()
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: i64,
    agent: &str,
    ticket_id: &str,
    activity: &str,
    date: &str,
    hours: f64,
    billable: bool,
    notes: &str,
) -> TimeEntry {
    TimeEntry {
        id,
        agent: agent.to_string(),
        ticket_id: ticket_id.to_string(),
        activity: activity.to_string(),
        date: date.to_string(),
        hours,
        billable,
        notes: notes.to_string(),
    }
}

pub fn seed() -> Vec<TimeEntry> {
    vec![
        entry(1, "Alex Kim", "T-4411", "troubleshooting", "2024-01-22", 2.5, true, "Reproduced card decline"),
        entry(2, "Alex Kim", "T-4377", "call", "2024-01-19", 1.0, true, "Walked customer through credit note"),
        entry(3, "Jordan Lee", "T-4420", "documentation", "2024-01-22", 0.5, false, "Updated export FAQ"),
        entry(4, "Jordan Lee", "T-4359", "follow_up", "2024-01-16", 0.25, false, "Confirmed fix with customer"),
        entry(5, "Sam Taylor", "T-4398", "troubleshooting", "2024-01-20", 3.0, true, "IdP metadata mismatch"),
        entry(6, "Sam Taylor", "T-4398", "call", "2024-01-21", 1.5, true, "Screen share with IT admin"),
        entry(7, "Alex Kim", "T-4431", "troubleshooting", "2024-01-23", 1.75, true, "Rate limited webhook deliveries"),
    ]
}
