//! Customer accounts and revenue forecast.

use crate::record::{Record, RecordId};
use crate::schema::{Column, FilterSpec, ListSchema};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const TIERS: &[&str] = &["enterprise", "mid_market", "smb"];
pub const STATUSES: &[&str] = &["active", "churn_risk", "churned", "prospect"];
pub const FORECAST: &[&str] = &["commit", "best_case", "pipeline", "omitted"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub owner: String,
    pub tier: String,
    pub arr: u64,
    pub status: String,
    pub forecast_category: String,
    pub close_date: String,
}

impl Record for Account {
    fn id(&self) -> RecordId {
        RecordId::Text(self.id.clone())
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Account name is required".to_string());
        }
        if self.owner.trim().is_empty() {
            return Err("Account owner is required".to_string());
        }
        Ok(())
    }
}

static SCHEMA: Lazy<Arc<ListSchema>> = Lazy::new(|| {
    Arc::new(ListSchema {
        domain: "accounts",
        title: "Accounts & Forecast",
        columns: vec![
            Column::new("id", "Account", 9),
            Column::new("name", "Name", 20),
            Column::new("industry", "Industry", 12),
            Column::new("owner", "Owner", 14),
            Column::new("tier", "Tier", 11),
            Column::new("arr", "ARR", 10),
            Column::new("forecast_category", "Forecast", 10),
            Column::new("close_date", "Close", 11),
        ],
        searchable: vec!["id", "name", "owner", "industry"],
        filters: vec![
            FilterSpec::equals("tier", "Tier", TIERS),
            FilterSpec::equals("status", "Status", STATUSES),
            FilterSpec::equals("forecast_category", "Forecast", FORECAST),
            FilterSpec::date_range("close", "Close date", "close_date"),
        ],
        sort: None,
    })
});

pub fn schema() -> Arc<ListSchema> {
    SCHEMA.clone()
}

#[allow(clippy::too_many_arguments)]
fn account(
    id: &str,
    name: &str,
    industry: &str,
    owner: &str,
    tier: &str,
    arr: u64,
    status: &str,
    forecast_category: &str,
    close_date: &str,
) -> Account {
    Account {
        id: id.to_string(),
        name: name.to_string(),
        industry: industry.to_string(),
        owner: owner.to_string(),
        tier: tier.to_string(),
        arr,
        status: status.to_string(),
        forecast_category: forecast_category.to_string(),
        close_date: close_date.to_string(),
    }
}

pub fn seed() -> Vec<Account> {
    vec![
        account("ACC-1001", "Northwind Traders", "Retail", "Maya Chen", "enterprise", 240_000, "active", "commit", "2024-03-31"),
        account("ACC-1002", "Globex", "Manufacturing", "Tom Hale", "enterprise", 410_000, "churn_risk", "best_case", "2024-02-28"),
        account("ACC-1003", "Initech", "Software", "Maya Chen", "mid_market", 85_000, "active", "commit", "2024-04-15"),
        account("ACC-1004", "Umbrella Health", "Healthcare", "Rita Gomez", "enterprise", 320_000, "prospect", "pipeline", "2024-06-30"),
        account("ACC-1005", "Hooli", "Software", "Tom Hale", "mid_market", 120_000, "active", "best_case", "2024-03-15"),
        account("ACC-1006", "Vandelay Imports", "Logistics", "Rita Gomez", "smb", 18_000, "churned", "omitted", "2024-01-31"),
        account("ACC-1007", "Stark Logistics", "Logistics", "Maya Chen", "smb", 32_000, "prospect", "pipeline", "2024-05-20"),
    ]
}
