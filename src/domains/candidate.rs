//! Recruitment pipeline candidates, ordered by pipeline stage.

use crate::record::{Record, RecordId};
use crate::schema::{Column, FilterSpec, ListSchema, SortSpec};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Pipeline stages in display order.
pub const STAGES: &[&str] = &["applied", "screening", "interview", "offer", "hired", "rejected"];
pub const SOURCES: &[&str] = &["referral", "linkedin", "careers_page", "agency"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub position: String,
    pub stage: String,
    pub source: String,
    pub applied_date: String,
    pub rating: f64,
}

impl Record for Candidate {
    fn id(&self) -> RecordId {
        RecordId::Number(self.id)
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Candidate name is required".to_string());
        }
        if !self.email.contains('@') {
            return Err("A valid email is required".to_string());
        }
        if !STAGES.contains(&self.stage.as_str()) {
            return Err(format!("Unknown stage '{}'", self.stage));
        }
        Ok(())
    }
}

static SCHEMA: Lazy<Arc<ListSchema>> = Lazy::new(|| {
    Arc::new(ListSchema {
        domain: "recruitment",
        title: "Recruitment",
        columns: vec![
            Column::new("name", "Candidate", 18),
            Column::new("position", "Position", 22),
            Column::new("stage", "Stage", 11),
            Column::new("source", "Source", 13),
            Column::new("applied_date", "Applied", 11),
            Column::new("rating", "Rating", 7),
        ],
        searchable: vec!["name", "email", "position"],
        filters: vec![
            FilterSpec::equals("stage", "Stage", STAGES),
            FilterSpec::equals(
                "position",
                "Position",
                &["Backend Engineer", "Product Designer", "Account Executive", "Support Specialist"],
            ),
            FilterSpec::equals("source", "Source", SOURCES),
        ],
        sort: Some(SortSpec {
            field: "stage",
            order: STAGES.to_vec(),
        }),
    })
});

pub fn schema() -> Arc<ListSchema> {
    SCHEMA.clone()
}

#[allow(clippy::too_many_arguments)]
fn candidate(
    id: i64,
    name: &str,
    email: &str,
    position: &str,
    stage: &str,
    source: &str,
    applied_date: &str,
    rating: f64,
) -> Candidate {
    Candidate {
        id,
        name: name.to_string(),
        email: email.to_string(),
        position: position.to_string(),
        stage: stage.to_string(),
        source: source.to_string(),
        applied_date: applied_date.to_string(),
        rating,
    }
}

pub fn seed() -> Vec<Candidate> {
    vec![
        candidate(1, "Ana Costa", "ana.costa@mail.com", "Backend Engineer", "interview", "referral", "2024-01-08", 4.5),
        candidate(2, "Ben Okafor", "ben.okafor@mail.com", "Product Designer", "applied", "careers_page", "2024-01-22", 0.0),
        candidate(3, "Chloe Martin", "chloe@mail.com", "Account Executive", "offer", "linkedin", "2023-12-18", 4.8),
        candidate(4, "Dev Sharma", "dev.sharma@mail.com", "Backend Engineer", "screening", "agency", "2024-01-15", 3.5),
        candidate(5, "Eva Novak", "eva.novak@mail.com", "Support Specialist", "hired", "referral", "2023-12-01", 4.2),
        candidate(6, "Felix Braun", "felix@mail.com", "Backend Engineer", "rejected", "linkedin", "2024-01-02", 2.0),
        candidate(7, "Grace Lee", "grace.lee@mail.com", "Product Designer", "interview", "linkedin", "2024-01-11", 4.0),
        candidate(8, "Hugo Dubois", "hugo@mail.com", "Support Specialist", "applied", "careers_page", "2024-01-27", 0.0),
    ]
}
