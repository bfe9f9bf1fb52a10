use chrono::NaiveDate;
use opsdesk::domains::{integration, role, Integration, Role};
use opsdesk::export::{export_file_name, BulkExporter, ExportError, ExportFormat};
use std::sync::Arc;

fn rows<R>(records: Vec<R>) -> Vec<Arc<R>> {
    records.into_iter().map(Arc::new).collect()
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

#[test]
fn test_json_export_round_trips() {
    let records = role::seed();
    let exporter = BulkExporter::new("roles");

    let json = exporter.to_json(&rows(records.clone())).unwrap();
    let parsed: Vec<Role> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, records);
    // Pretty-printed with two-space indentation
    assert!(json.starts_with("[\n  {\n    \"id\": 1,"));
}

#[test]
fn test_csv_has_header_and_one_line_per_record() {
    let records = rows(integration::seed());
    let csv = BulkExporter::new("integrations").to_csv(&records).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), records.len() + 1);
    assert_eq!(lines[0], "id,name,category,status,enabled,last_sync,api_calls");
    let width = lines[0].split(',').count();
    for line in &lines[1..] {
        assert_eq!(line.split(',').count(), width, "{}", line);
    }
    assert_eq!(lines[1], "salesforce,Salesforce,crm,connected,true,2024-01-31T09:12:00Z,18420");
    // Missing optional values become empty cells
    assert_eq!(lines[2], "hubspot,HubSpot,crm,disconnected,false,,0");
    assert!(!csv.ends_with('\n'));
}

#[test]
fn test_csv_list_fields_joined_with_semicolons() {
    let records = rows(role::seed());
    let csv = BulkExporter::new("roles").to_csv(&records).unwrap();
    let line = csv.lines().nth(2).unwrap();
    assert_eq!(
        line,
        "2,Support Agent,Handles customer tickets,tickets.read; tickets.write; users.read,24,true,true"
    );
}

#[test]
fn test_csv_embedded_commas_unquoted_by_default() {
    let mut record = integration::seed().remove(0);
    record.name = "Salesforce, EU".to_string();
    let records = rows(vec![record]);

    let plain = BulkExporter::new("integrations").to_csv(&records).unwrap();
    let lines: Vec<&str> = plain.lines().collect();
    assert_eq!(lines[1].split(',').count(), lines[0].split(',').count() + 1);

    let quoted = BulkExporter::new("integrations")
        .with_quoting(true)
        .to_csv(&records)
        .unwrap();
    assert!(quoted.contains(",\"Salesforce, EU\",crm,"));
}

#[test]
fn test_quoting_escapes_double_quotes() {
    let mut record = integration::seed().remove(0);
    record.name = "The \"big\" CRM".to_string();
    let csv = BulkExporter::new("integrations")
        .with_quoting(true)
        .to_csv(&rows(vec![record]))
        .unwrap();
    assert!(csv.contains("\"The \"\"big\"\" CRM\""));
}

#[test]
fn test_empty_export_is_an_error() {
    let exporter = BulkExporter::new("integrations");
    let empty: Vec<Arc<Integration>> = Vec::new();

    assert!(matches!(exporter.to_csv(&empty), Err(ExportError::NoRecords)));
    assert!(matches!(
        exporter.export(&empty, ExportFormat::Json, date()),
        Err(ExportError::NoRecords)
    ));
}

#[test]
fn test_file_name_and_mime_type() {
    assert_eq!(export_file_name("audit-logs", date(), ExportFormat::Csv), "audit-logs-2024-01-15.csv");

    let file = BulkExporter::new("roles")
        .export(&rows(role::seed()), ExportFormat::Json, date())
        .unwrap();
    assert_eq!(file.file_name, "roles-2024-01-15.json");
    assert_eq!(file.mime_type(), "application/json");
    assert_eq!(ExportFormat::Csv.mime_type(), "text/csv");
}

#[test]
fn test_save_writes_file() {
    let dir = std::env::temp_dir().join(format!("opsdesk_export_{}", std::process::id()));
    let file = BulkExporter::new("integrations")
        .export(&rows(integration::seed()), ExportFormat::Csv, date())
        .unwrap();

    let path = file.save(&dir).unwrap();
    assert_eq!(path, dir.join("integrations-2024-01-15.csv"));
    let content = std::fs::read(&path).unwrap();
    assert_eq!(content, file.content);

    let _ = std::fs::remove_dir_all(&dir);
}
