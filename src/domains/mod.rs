//! Admin pages: one record type, schema and seed list per page.

pub mod account;
pub mod audit_log;
pub mod candidate;
pub mod compliance;
pub mod escalation;
pub mod integration;
pub mod notification_rule;
pub mod onboarding;
pub mod review;
pub mod role;
pub mod time_entry;

pub use account::Account;
pub use audit_log::AuditLog;
pub use candidate::Candidate;
pub use compliance::ComplianceControl;
pub use escalation::Escalation;
pub use integration::Integration;
pub use notification_rule::NotificationRule;
pub use onboarding::OnboardingTask;
pub use review::PerformanceReview;
pub use role::Role;
pub use time_entry::TimeEntry;

use crate::schema::ListSchema;
use std::sync::Arc;

/// Every page the dashboard offers, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    AuditLogs,
    Roles,
    Integrations,
    NotificationRules,
    Compliance,
    Onboarding,
    Recruitment,
    Reviews,
    Accounts,
    Escalations,
    TimeTracking,
}

impl Domain {
    pub const ALL: [Domain; 11] = [
        Domain::AuditLogs,
        Domain::Roles,
        Domain::Integrations,
        Domain::NotificationRules,
        Domain::Compliance,
        Domain::Onboarding,
        Domain::Recruitment,
        Domain::Reviews,
        Domain::Accounts,
        Domain::Escalations,
        Domain::TimeTracking,
    ];

    pub fn schema(self) -> Arc<ListSchema> {
        match self {
            Domain::AuditLogs => audit_log::schema(),
            Domain::Roles => role::schema(),
            Domain::Integrations => integration::schema(),
            Domain::NotificationRules => notification_rule::schema(),
            Domain::Compliance => compliance::schema(),
            Domain::Onboarding => onboarding::schema(),
            Domain::Recruitment => candidate::schema(),
            Domain::Reviews => review::schema(),
            Domain::Accounts => account::schema(),
            Domain::Escalations => escalation::schema(),
            Domain::TimeTracking => time_entry::schema(),
        }
    }

    /// Machine name used in config, export file names and data file names.
    pub fn slug(self) -> &'static str {
        self.schema().domain
    }

    pub fn title(self) -> &'static str {
        self.schema().title
    }

    /// Sidebar group heading.
    pub fn section(self) -> &'static str {
        match self {
            Domain::AuditLogs | Domain::Roles | Domain::Integrations | Domain::NotificationRules | Domain::Compliance => {
                "Admin"
            }
            Domain::Onboarding | Domain::Recruitment | Domain::Reviews => "HR",
            Domain::Accounts => "Sales",
            Domain::Escalations | Domain::TimeTracking => "Support",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Domain> {
        Domain::ALL.into_iter().find(|domain| domain.slug() == slug)
    }

    pub fn index(self) -> usize {
        Domain::ALL.iter().position(|d| *d == self).unwrap_or(0)
    }
}
