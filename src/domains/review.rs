//! Performance reviews.

use crate::record::{Record, RecordId};
use crate::schema::{Column, FilterSpec, ListSchema};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEPARTMENTS: &[&str] = &["Engineering", "Sales", "Support", "People"];
pub const PERIODS: &[&str] = &["2023-H2", "2024-H1"];
pub const STATUSES: &[&str] = &["draft", "submitted", "acknowledged"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReview {
    pub id: i64,
    pub employee: String,
    pub reviewer: String,
    pub department: String,
    pub period: String,
    pub rating: u8,
    pub status: String,
    pub goals_met: bool,
}

impl Record for PerformanceReview {
    fn id(&self) -> RecordId {
        RecordId::Number(self.id)
    }

    fn validate(&self) -> Result<(), String> {
        if self.employee.trim().is_empty() || self.reviewer.trim().is_empty() {
            return Err("Employee and reviewer are required".to_string());
        }
        if !(1..=5).contains(&self.rating) {
            return Err("Rating must be between 1 and 5".to_string());
        }
        Ok(())
    }
}

static SCHEMA: Lazy<Arc<ListSchema>> = Lazy::new(|| {
    Arc::new(ListSchema {
        domain: "reviews",
        title: "Performance Reviews",
        columns: vec![
            Column::new("employee", "Employee", 16),
            Column::new("reviewer", "Reviewer", 16),
            Column::new("department", "Department", 12),
            Column::new("period", "Period", 8),
            Column::new("rating", "Rating", 7),
            Column::new("status", "Status", 13),
            Column::new("goals_met", "Goals met", 9),
        ],
        searchable: vec!["employee", "reviewer"],
        filters: vec![
            FilterSpec::equals("department", "Department", DEPARTMENTS),
            FilterSpec::equals("period", "Period", PERIODS),
            FilterSpec::equals("status", "Status", STATUSES),
        ],
        sort: None,
    })
});

pub fn schema() -> Arc<ListSchema> {
    SCHEMA.clone()
}

#[allow(clippy::too_many_arguments)]
fn review(
    id: i64,
    employee: &str,
    reviewer: &str,
    department: &str,
    period: &str,
    rating: u8,
    status: &str,
    goals_met: bool,
) -> PerformanceReview {
    PerformanceReview {
        id,
        employee: employee.to_string(),
        reviewer: reviewer.to_string(),
        department: department.to_string(),
        period: period.to_string(),
        rating,
        status: status.to_string(),
        goals_met,
    }
}

pub fn seed() -> Vec<PerformanceReview> {
    vec![
        review(1, "Sam Rivera", "Kim Tanaka", "Engineering", "2023-H2", 4, "acknowledged", true),
        review(2, "Noah Fischer", "Kim Tanaka", "Engineering", "2023-H2", 3, "submitted", false),
        review(3, "Olivia Brown", "Raj Mehta", "Sales", "2023-H2", 5, "acknowledged", true),
        review(4, "Liam Walsh", "Raj Mehta", "Sales", "2024-H1", 3, "draft", false),
        review(5, "Mia Rossi", "Jo Evans", "Support", "2023-H2", 4, "submitted", true),
        review(6, "Ethan Park", "Jo Evans", "Support", "2024-H1", 2, "draft", false),
        review(7, "Zoe Adams", "Kim Tanaka", "People", "2024-H1", 4, "draft", true),
    ]
}
