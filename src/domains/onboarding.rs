//! HR onboarding checklist items.

use crate::record::{Record, RecordId};
use crate::schema::{Column, FilterSpec, ListSchema};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const CATEGORIES: &[&str] = &["it", "hr", "facilities", "training"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingTask {
    pub id: i64,
    pub employee: String,
    pub task: String,
    pub category: String,
    pub assignee: String,
    pub due_date: String,
    pub completed: bool,
}

impl Record for OnboardingTask {
    fn id(&self) -> RecordId {
        RecordId::Number(self.id)
    }

    fn validate(&self) -> Result<(), String> {
        if self.employee.trim().is_empty() || self.task.trim().is_empty() {
            return Err("Employee and task are required".to_string());
        }
        Ok(())
    }
}

static SCHEMA: Lazy<Arc<ListSchema>> = Lazy::new(|| {
    Arc::new(ListSchema {
        domain: "onboarding",
        title: "Onboarding",
        columns: vec![
            Column::new("employee", "Employee", 16),
            Column::new("task", "Task", 32),
            Column::new("category", "Category", 11),
            Column::new("assignee", "Assignee", 14),
            Column::new("due_date", "Due", 11),
            Column::new("completed", "Done", 6),
        ],
        searchable: vec!["employee", "task", "assignee"],
        filters: vec![
            FilterSpec::equals("category", "Category", CATEGORIES),
            FilterSpec::equals("assignee", "Assignee", &["IT Desk", "People Ops", "Office Manager", "Team Lead"]),
            FilterSpec::date_range("due", "Due", "due_date"),
        ],
        sort: None,
    })
});

pub fn schema() -> Arc<ListSchema> {
    SCHEMA.clone()
}

fn task(id: i64, employee: &str, task: &str, category: &str, assignee: &str, due_date: &str, completed: bool) -> OnboardingTask {
    OnboardingTask {
        id,
        employee: employee.to_string(),
        task: task.to_string(),
        category: category.to_string(),
        assignee: assignee.to_string(),
        due_date: due_date.to_string(),
        completed,
    }
}

pub fn seed() -> Vec<OnboardingTask> {
    vec![
        task(1, "Priya Patel", "Provision laptop", "it", "IT Desk", "2024-02-01", true),
        task(2, "Priya Patel", "Sign employment contract", "hr", "People Ops", "2024-01-29", true),
        task(3, "Priya Patel", "Security awareness training", "training", "Team Lead", "2024-02-05", false),
        task(4, "Tomás Silva", "Create SSO account", "it", "IT Desk", "2024-02-03", false),
        task(5, "Tomás Silva", "Assign desk and badge", "facilities", "Office Manager", "2024-02-02", false),
        task(6, "Tomás Silva", "Benefits enrollment", "hr", "People Ops", "2024-02-09", false),
        task(7, "Lena Müller", "Product walkthrough", "training", "Team Lead", "2024-02-12", false),
        task(8, "Lena Müller", "Provision laptop", "it", "IT Desk", "2024-02-08", false),
    ]
}
