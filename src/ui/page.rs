//! Type-erased admin pages.
//!
//! Each page is a [`ListView`] over its own record type. The app only sees the
//! [`Page`] trait, which exposes the list operations and a rendered
//! [`TableSnapshot`] of the current page.

use crate::domains::Domain;
use crate::export::ExportFormat;
use crate::filter::FilterValue;
use crate::notification::NotificationCenter;
use crate::record::{FieldValue, Record, RecordId};
use crate::schema::{FilterKind, ListSchema};
use crate::source::{load_records, DataSource, LoadOutcome, SourceError};
use crate::utils::datetime::{format_human_datetime, parse_record_date};
use crate::view::{ListView, LoadTicket};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSnapshot {
    pub id: RecordId,
    pub cells: Vec<String>,
    pub selected: bool,
}

/// Everything the table and footer need to draw the current page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableSnapshot {
    pub headers: Vec<(&'static str, u16)>,
    pub rows: Vec<RowSnapshot>,
    pub cursor: usize,
    pub page: usize,
    pub total_pages: usize,
    pub first_index: usize,
    pub last_index: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub selected_count: usize,
}

/// Filter slot shown in the filter bar.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChip {
    pub label: &'static str,
    pub value: String,
    pub active: bool,
}

#[async_trait]
pub trait Page: Send {
    fn domain(&self) -> Domain;
    fn schema(&self) -> &ListSchema;
    fn is_loading(&self) -> bool;

    /// Spawn the page's initial load.
    fn start_load(&mut self);
    /// Apply the load if it has finished. Returns true when rows changed.
    async fn poll_load(&mut self, notifier: &mut NotificationCenter) -> bool;
    /// Wait for the in-flight load, if any, and apply it.
    async fn settle(&mut self, notifier: &mut NotificationCenter) -> bool;
    fn unmount(&mut self);

    fn search(&self) -> &str;
    fn set_search(&mut self, term: &str);
    /// Advance filter slot `slot` to its next option, wrapping back to "all".
    fn cycle_filter(&mut self, slot: usize);
    fn clear_filters(&mut self);
    fn filter_chips(&self) -> Vec<FilterChip>;

    fn next_row(&mut self);
    fn previous_row(&mut self);
    fn next_page(&mut self) -> bool;
    fn previous_page(&mut self) -> bool;
    fn first_page(&mut self) -> bool;
    fn last_page(&mut self) -> bool;

    fn toggle_select(&mut self) -> bool;
    fn select_page(&mut self);

    fn current_id(&self) -> Option<RecordId>;
    /// Flip the first boolean column of the row under the cursor.
    fn toggle_current(&mut self, notifier: &mut NotificationCenter) -> bool;
    fn delete(&mut self, id: RecordId, notifier: &mut NotificationCenter) -> bool;
    fn duplicate_current(&mut self, notifier: &mut NotificationCenter) -> bool;
    fn export(
        &mut self,
        format: ExportFormat,
        dir: &Path,
        date: NaiveDate,
        notifier: &mut NotificationCenter,
    ) -> Option<PathBuf>;

    fn snapshot(&self, today: NaiveDate) -> TableSnapshot;
}

pub struct ListPage<R: Record> {
    domain: Domain,
    view: ListView<R>,
    source: Arc<dyn DataSource<R>>,
    fallback: Option<Vec<R>>,
    load: Option<(LoadTicket, JoinHandle<LoadOutcome<R>>)>,
    cursor: usize,
}

impl<R: Record> ListPage<R> {
    pub fn new(domain: Domain, view: ListView<R>, source: Arc<dyn DataSource<R>>) -> Self {
        Self {
            domain,
            view,
            source,
            fallback: None,
            load: None,
            cursor: 0,
        }
    }

    /// Rows shown when the load fails.
    pub fn with_fallback(mut self, records: Vec<R>) -> Self {
        self.fallback = Some(records);
        self
    }

    pub fn view(&self) -> &ListView<R> {
        &self.view
    }

    fn page_len(&self) -> usize {
        self.view.page().items.len()
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.page_len().saturating_sub(1));
    }

    fn current(&self) -> Option<&Arc<R>> {
        self.view.page().items.get(self.cursor)
    }

    async fn apply_load(&mut self, ticket: LoadTicket, handle: JoinHandle<LoadOutcome<R>>, notifier: &mut NotificationCenter) -> bool {
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(e) => LoadOutcome::Failed(SourceError::Unavailable(format!("load task failed: {}", e))),
        };
        self.cursor = 0;
        self.view.finish_load(ticket, outcome, notifier)
    }

    /// Options a filter slot cycles through, "all" first.
    fn filter_options(&self, kind: &FilterKind) -> Vec<FilterValue> {
        let mut options = vec![FilterValue::Any];
        match kind {
            FilterKind::Equals { options: values, .. } | FilterKind::Contains { options: values, .. } => {
                options.extend(values.iter().map(|v| FilterValue::Equals(v.to_string())));
            }
            FilterKind::DateRange { field } => {
                options.extend(month_ranges(self.view.rows(), field));
            }
        }
        options
    }
}

/// One date range per calendar month present in `field`, newest first.
fn month_ranges<R: Record>(rows: &[Arc<R>], field: &str) -> Vec<FilterValue> {
    let months: BTreeSet<(i32, u32)> = rows
        .iter()
        .filter_map(|r| r.field(field))
        .filter_map(|value| parse_record_date(&value.display()))
        .map(|date| (date.year(), date.month()))
        .collect();

    months
        .into_iter()
        .rev()
        .filter_map(|(year, month)| {
            let start = NaiveDate::from_ymd_opt(year, month, 1)?;
            let next = if month == 12 {
                NaiveDate::from_ymd_opt(year + 1, 1, 1)?
            } else {
                NaiveDate::from_ymd_opt(year, month + 1, 1)?
            };
            Some(FilterValue::range(Some(start), next.pred_opt()))
        })
        .collect()
}

fn cell(value: Option<FieldValue>, today: NaiveDate) -> String {
    match value {
        Some(FieldValue::Bool(true)) => "✓".to_string(),
        Some(FieldValue::Bool(false)) => "·".to_string(),
        Some(FieldValue::Text(text)) => format_human_datetime(&text, today),
        Some(other) => other.display(),
        None => String::new(),
    }
}

#[async_trait]
impl<R: Record> Page for ListPage<R> {
    fn domain(&self) -> Domain {
        self.domain
    }

    fn schema(&self) -> &ListSchema {
        self.view.schema()
    }

    fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    fn start_load(&mut self) {
        if let Some((_, previous)) = self.load.take() {
            previous.abort();
        }
        let ticket = self.view.begin_load();
        let source = self.source.clone();
        let fallback = self.fallback.clone();
        log::debug!("Loading {} from {}", self.domain.slug(), source.name());
        let handle = tokio::spawn(async move { load_records(source.as_ref(), fallback).await });
        self.load = Some((ticket, handle));
    }

    async fn poll_load(&mut self, notifier: &mut NotificationCenter) -> bool {
        let finished = matches!(&self.load, Some((_, handle)) if handle.is_finished());
        if !finished {
            return false;
        }
        match self.load.take() {
            Some((ticket, handle)) => self.apply_load(ticket, handle, notifier).await,
            None => false,
        }
    }

    async fn settle(&mut self, notifier: &mut NotificationCenter) -> bool {
        match self.load.take() {
            Some((ticket, handle)) => self.apply_load(ticket, handle, notifier).await,
            None => false,
        }
    }

    fn unmount(&mut self) {
        if let Some((_, handle)) = self.load.take() {
            handle.abort();
        }
        self.view.unmount();
        self.cursor = 0;
    }

    fn search(&self) -> &str {
        &self.view.filters().search
    }

    fn set_search(&mut self, term: &str) {
        self.view.set_search(term);
        self.cursor = 0;
    }

    fn cycle_filter(&mut self, slot: usize) {
        let Some(spec) = self.view.schema().filters.get(slot).cloned() else {
            return;
        };
        let options = self.filter_options(&spec.kind);
        let current = self.view.filters().get(spec.key).cloned().unwrap_or_default();
        let next = options
            .iter()
            .position(|option| *option == current)
            .map(|i| (i + 1) % options.len())
            .unwrap_or(0);
        self.view.set_filter(spec.key, options[next].clone());
        self.cursor = 0;
    }

    fn clear_filters(&mut self) {
        self.view.clear_filters();
        self.cursor = 0;
    }

    fn filter_chips(&self) -> Vec<FilterChip> {
        self.view
            .schema()
            .filters
            .iter()
            .map(|spec| {
                let value = self.view.filters().get(spec.key);
                FilterChip {
                    label: spec.label,
                    value: value.map(|v| v.label()).unwrap_or_else(|| FilterValue::Any.label()),
                    active: value.is_some_and(|v| v.is_active()),
                }
            })
            .collect()
    }

    fn next_row(&mut self) {
        if self.cursor + 1 < self.page_len() {
            self.cursor += 1;
        }
    }

    fn previous_row(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn next_page(&mut self) -> bool {
        let moved = self.view.next_page();
        if moved {
            self.cursor = 0;
        }
        moved
    }

    fn previous_page(&mut self) -> bool {
        let moved = self.view.previous_page();
        if moved {
            self.cursor = 0;
        }
        moved
    }

    fn first_page(&mut self) -> bool {
        let moved = self.view.go_to_page(1);
        if moved {
            self.cursor = 0;
        }
        moved
    }

    fn last_page(&mut self) -> bool {
        let moved = self.view.last_page();
        if moved {
            self.cursor = 0;
        }
        moved
    }

    fn toggle_select(&mut self) -> bool {
        match self.current_id() {
            Some(id) => self.view.toggle_selection(&id),
            None => false,
        }
    }

    fn select_page(&mut self) {
        self.view.select_page();
    }

    fn current_id(&self) -> Option<RecordId> {
        self.current().map(|r| r.id())
    }

    fn toggle_current(&mut self, notifier: &mut NotificationCenter) -> bool {
        let Some(record) = self.current().cloned() else {
            return false;
        };
        let field = self
            .view
            .schema()
            .columns
            .iter()
            .find(|column| record.field(column.key).and_then(|v| v.as_bool()).is_some())
            .map(|column| column.key);

        match field {
            Some(field) => self.view.toggle(record.id(), field, notifier),
            None => false,
        }
    }

    fn delete(&mut self, id: RecordId, notifier: &mut NotificationCenter) -> bool {
        let removed = self.view.remove(id, notifier);
        self.clamp_cursor();
        removed
    }

    fn duplicate_current(&mut self, notifier: &mut NotificationCenter) -> bool {
        match self.current_id() {
            Some(id) => self.view.duplicate(&id, notifier),
            None => false,
        }
    }

    fn export(
        &mut self,
        format: ExportFormat,
        dir: &Path,
        date: NaiveDate,
        notifier: &mut NotificationCenter,
    ) -> Option<PathBuf> {
        self.view.export_to(dir, format, date, notifier)
    }

    fn snapshot(&self, today: NaiveDate) -> TableSnapshot {
        let schema = self.view.schema();
        let page = self.view.page();
        let selection = self.view.selection();

        let rows = page
            .items
            .iter()
            .map(|record| {
                let id = record.id();
                RowSnapshot {
                    cells: schema
                        .columns
                        .iter()
                        .map(|column| cell(record.field(column.key), today))
                        .collect(),
                    selected: selection.contains(&id),
                    id,
                }
            })
            .collect();

        TableSnapshot {
            headers: schema.columns.iter().map(|c| (c.label, c.width)).collect(),
            rows,
            cursor: self.cursor,
            page: page.page,
            total_pages: page.total_pages,
            first_index: page.first_index(),
            last_index: page.last_index(),
            filtered_count: page.total_items,
            total_count: self.view.remote_total().unwrap_or(self.view.rows().len()),
            selected_count: selection.len(),
        }
    }
}
