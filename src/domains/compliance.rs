//! Security and compliance controls.

use crate::record::{Record, RecordId};
use crate::schema::{Column, FilterSpec, ListSchema};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const FRAMEWORKS: &[&str] = &["SOC 2", "ISO 27001", "GDPR", "HIPAA"];
pub const STATUSES: &[&str] = &["compliant", "at_risk", "non_compliant"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceControl {
    pub id: String,
    pub framework: String,
    pub title: String,
    pub owner: String,
    pub status: String,
    pub last_reviewed: String,
    pub automated: bool,
}

impl Record for ComplianceControl {
    fn id(&self) -> RecordId {
        RecordId::Text(self.id.clone())
    }

    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Control title is required".to_string());
        }
        if self.owner.trim().is_empty() {
            return Err("Control owner is required".to_string());
        }
        Ok(())
    }
}

static SCHEMA: Lazy<Arc<ListSchema>> = Lazy::new(|| {
    Arc::new(ListSchema {
        domain: "compliance",
        title: "Security & Compliance",
        columns: vec![
            Column::new("id", "Control", 12),
            Column::new("framework", "Framework", 10),
            Column::new("title", "Title", 34),
            Column::new("owner", "Owner", 14),
            Column::new("status", "Status", 14),
            Column::new("last_reviewed", "Reviewed", 11),
        ],
        searchable: vec!["id", "title", "owner"],
        filters: vec![
            FilterSpec::equals("framework", "Framework", FRAMEWORKS),
            FilterSpec::equals("status", "Status", STATUSES),
            FilterSpec::date_range("reviewed", "Reviewed", "last_reviewed"),
        ],
        sort: None,
    })
});

pub fn schema() -> Arc<ListSchema> {
    SCHEMA.clone()
}

fn control(id: &str, framework: &str, title: &str, owner: &str, status: &str, last_reviewed: &str, automated: bool) -> ComplianceControl {
    ComplianceControl {
        id: id.to_string(),
        framework: framework.to_string(),
        title: title.to_string(),
        owner: owner.to_string(),
        status: status.to_string(),
        last_reviewed: last_reviewed.to_string(),
        automated,
    }
}

pub fn seed() -> Vec<ComplianceControl> {
    vec![
        control("CC6.1", "SOC 2", "Logical access restricted to authorized users", "IT", "compliant", "2024-01-10", true),
        control("CC7.2", "SOC 2", "Security events are monitored", "Security", "at_risk", "2023-12-02", true),
        control("A.8.2", "ISO 27001", "Information classification", "Legal", "compliant", "2023-11-20", false),
        control("A.12.3", "ISO 27001", "Backups tested quarterly", "IT", "non_compliant", "2023-09-14", false),
        control("Art.30", "GDPR", "Records of processing activities", "DPO", "compliant", "2024-01-05", false),
        control("Art.33", "GDPR", "Breach notification within 72 hours", "Security", "at_risk", "2023-10-30", false),
        control("164.312", "HIPAA", "Audit controls on PHI systems", "Security", "compliant", "2024-01-18", true),
    ]
}
