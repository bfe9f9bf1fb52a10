use opsdesk::domains::{
    account, audit_log, candidate, compliance, escalation, integration, notification_rule, onboarding, review, role,
    time_entry, Domain,
};
use opsdesk::record::Record;
use opsdesk::schema::{FilterKind, ListSchema};
use std::collections::HashSet;
use std::sync::Arc;

/// Seed ids are unique, every seed row validates and every schema key names a real field.
fn check_domain<R: Record>(schema: Arc<ListSchema>, seed: Vec<R>) {
    assert!(!seed.is_empty(), "{} has no seed rows", schema.domain);

    let ids: HashSet<_> = seed.iter().map(|r| r.id()).collect();
    assert_eq!(ids.len(), seed.len(), "{} has duplicate ids", schema.domain);

    for record in &seed {
        assert_eq!(record.validate(), Ok(()), "{} {}", schema.domain, record.id());
    }

    let sample = &seed[0];
    let mut fields: Vec<&str> = Vec::new();
    fields.extend(schema.columns.iter().map(|c| c.key));
    fields.extend(schema.searchable.iter().copied());
    fields.extend(schema.filters.iter().map(|f| f.kind.field()));
    if let Some(sort) = &schema.sort {
        fields.push(sort.field);
    }
    for field in fields {
        assert!(sample.field(field).is_some(), "{} has no field {}", schema.domain, field);
    }

    for spec in &schema.filters {
        if let FilterKind::Equals { field, options } = &spec.kind {
            for record in &seed {
                let value = record.field(field).map(|v| v.display()).unwrap_or_default();
                assert!(
                    options.contains(&value.as_str()),
                    "{} {} has unlisted {} '{}'",
                    schema.domain,
                    record.id(),
                    field,
                    value
                );
            }
        }
    }
}

#[test]
fn test_every_domain_is_consistent() {
    check_domain(audit_log::schema(), audit_log::seed());
    check_domain(role::schema(), role::seed());
    check_domain(integration::schema(), integration::seed());
    check_domain(notification_rule::schema(), notification_rule::seed());
    check_domain(compliance::schema(), compliance::seed());
    check_domain(onboarding::schema(), onboarding::seed());
    check_domain(candidate::schema(), candidate::seed());
    check_domain(review::schema(), review::seed());
    check_domain(account::schema(), account::seed());
    check_domain(escalation::schema(), escalation::seed());
    check_domain(time_entry::schema(), time_entry::seed());
}

#[test]
fn test_slugs_round_trip() {
    let mut seen = HashSet::new();
    for domain in Domain::ALL {
        assert!(seen.insert(domain.slug()));
        assert_eq!(Domain::from_slug(domain.slug()), Some(domain));
        assert_eq!(Domain::ALL[domain.index()], domain);
        assert!(!domain.title().is_empty());
    }
    assert_eq!(Domain::from_slug("payroll"), None);
}

#[test]
fn test_sections_group_in_sidebar_order() {
    let sections: Vec<&str> = Domain::ALL.iter().map(|d| d.section()).collect();
    let mut deduped = sections.clone();
    deduped.dedup();
    assert_eq!(deduped, vec!["Admin", "HR", "Sales", "Support"]);
    assert_eq!(Domain::Accounts.section(), "Sales");
}

#[test]
fn test_audit_seed_size() {
    assert_eq!(audit_log::seed().len(), 45);
    assert_eq!(Domain::AuditLogs.slug(), "audit-logs");
    assert_eq!(Domain::TimeTracking.slug(), "time-tracking");
}

#[test]
fn test_candidate_validation() {
    let mut candidate = candidate::seed().remove(0);
    candidate.email = "no-at-sign".to_string();
    assert!(candidate.validate().is_err());

    let mut candidate = candidate::seed().remove(0);
    candidate.stage = "daydreaming".to_string();
    assert!(candidate.validate().is_err());
}

#[test]
fn test_time_entry_hours_bounds() {
    let mut entry = time_entry::seed().remove(0);
    entry.hours = 0.0;
    assert!(entry.validate().is_err());
    entry.hours = 24.5;
    assert!(entry.validate().is_err());
    entry.hours = 7.5;
    assert!(entry.validate().is_ok());
}
