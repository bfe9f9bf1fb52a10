//! One admin list page: rows, filters, pagination, selection, export and local edits.
//!
//! [`ListView`] owns the page's in-memory rows and keeps every derived view in step
//! with them. Changing the search term or a filter recomputes the filtered list,
//! returns to page 1 and drops selected rows that are no longer visible. Mutations
//! replace the rows immediately and report through the page's [`Notifier`].

use crate::constants::{
    TITLE_ACTION_FAILED, TITLE_EXPORT_FAILED, TITLE_EXPORT_READY, TITLE_LOAD_FAILED, TITLE_RECORD_CREATED,
    TITLE_RECORD_DELETED, TITLE_RECORD_UPDATED, TITLE_SAMPLE_DATA,
};
use crate::export::{BulkExporter, ExportError, ExportFile, ExportFormat};
use crate::filter::{FilterState, FilterValue, ListFilterController};
use crate::mutation::{duplicate, fresh_id, Command, MutationError, OptimisticMutator, Patch};
use crate::notification::{NotificationKind, Notifier};
use crate::paginator::{PageView, Paginator};
use crate::record::{Record, RecordId, Rows};
use crate::schema::ListSchema;
use crate::selection::Selection;
use crate::source::LoadOutcome;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Identifies the mount a load was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

pub struct ListView<R: Record> {
    controller: ListFilterController,
    exporter: BulkExporter,
    rows: Rows<R>,
    filtered: Rows<R>,
    filters: FilterState,
    paginator: Paginator,
    selection: Selection,
    mutator: OptimisticMutator<R>,
    loading: bool,
    generation: u64,
    remote_total: Option<usize>,
}

impl<R: Record> ListView<R> {
    pub fn new(schema: Arc<ListSchema>, page_size: usize) -> Self {
        let exporter = BulkExporter::new(schema.domain);
        Self {
            controller: ListFilterController::new(schema),
            exporter,
            rows: Vec::new(),
            filtered: Vec::new(),
            filters: FilterState::default(),
            paginator: Paginator::new(page_size),
            selection: Selection::new(),
            mutator: OptimisticMutator::new(),
            loading: false,
            generation: 0,
            remote_total: None,
        }
    }

    pub fn with_rows(mut self, rows: Vec<R>) -> Self {
        self.replace_rows(rows);
        self
    }

    pub fn with_quoting(mut self, quote_fields: bool) -> Self {
        self.exporter = self.exporter.with_quoting(quote_fields);
        self
    }

    pub fn schema(&self) -> &ListSchema {
        self.controller.schema()
    }

    pub fn rows(&self) -> &[Arc<R>] {
        &self.rows
    }

    pub fn filtered(&self) -> &[Arc<R>] {
        &self.filtered
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn mutator(&self) -> &OptimisticMutator<R> {
        &self.mutator
    }

    pub fn mutator_mut(&mut self) -> &mut OptimisticMutator<R> {
        &mut self.mutator
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Server-side total reported by the last load, if any.
    pub fn remote_total(&self) -> Option<usize> {
        self.remote_total
    }

    pub fn record(&self, id: &RecordId) -> Option<&Arc<R>> {
        self.rows.iter().find(|r| r.id() == *id)
    }

    pub fn page(&self) -> PageView<'_, Arc<R>> {
        self.paginator.view(&self.filtered)
    }

    // ---- filtering -------------------------------------------------------

    pub fn set_search(&mut self, term: &str) {
        if self.filters.search == term {
            return;
        }
        self.filters.search = term.to_string();
        self.filters_changed();
    }

    pub fn set_filter(&mut self, key: &str, value: FilterValue) {
        self.filters.set(key, value);
        self.filters_changed();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.filters_changed();
    }

    fn filters_changed(&mut self) {
        self.refresh();
        self.paginator.reset();
        self.selection.retain(&self.filtered);
    }

    fn refresh(&mut self) {
        self.filtered = self.controller.apply(&self.rows, &self.filters);
    }

    // ---- pagination ------------------------------------------------------

    pub fn next_page(&mut self) -> bool {
        self.paginator.next(self.filtered.len())
    }

    pub fn previous_page(&mut self) -> bool {
        self.paginator.previous(self.filtered.len())
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.paginator.go_to(page, self.filtered.len())
    }

    pub fn last_page(&mut self) -> bool {
        self.paginator.last(self.filtered.len())
    }

    // ---- selection -------------------------------------------------------

    /// Flip selection of a visible row. Rows filtered out cannot be selected.
    pub fn toggle_selection(&mut self, id: &RecordId) -> bool {
        if !self.filtered.iter().any(|r| r.id() == *id) {
            return false;
        }
        self.selection.toggle(id.clone())
    }

    /// Select every row on the current page.
    pub fn select_page(&mut self) {
        let page: Vec<Arc<R>> = self.page().items.to_vec();
        self.selection.select_all(&page);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ---- loading ---------------------------------------------------------

    /// Start a load. Any load already in flight becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Apply a finished load. Stale tickets (page unmounted or reloaded since) are ignored.
    pub fn finish_load(&mut self, ticket: LoadTicket, outcome: LoadOutcome<R>, notifier: &mut dyn Notifier) -> bool {
        if ticket.generation != self.generation {
            log::debug!("Ignoring stale load for {}", self.schema().domain);
            return false;
        }
        self.loading = false;

        match outcome {
            LoadOutcome::Loaded { records, total } => {
                self.remote_total = total;
                self.replace_rows(records);
            }
            LoadOutcome::Fallback { records, error } => {
                notifier.notify(
                    NotificationKind::Info,
                    TITLE_SAMPLE_DATA,
                    &format!("{} could not be loaded ({}); showing sample data", self.schema().title, error),
                );
                self.remote_total = None;
                self.replace_rows(records);
            }
            LoadOutcome::Failed(error) => {
                notifier.notify(NotificationKind::Error, TITLE_LOAD_FAILED, &error.to_string());
                self.remote_total = None;
                self.replace_rows(Vec::new());
            }
        }
        true
    }

    /// Drop the rows and command log and invalidate any load still in flight.
    pub fn unmount(&mut self) {
        self.generation += 1;
        self.loading = false;
        self.remote_total = None;
        let dropped = self.mutator.drain().len();
        if dropped > 0 {
            log::debug!("Dropped {} pending commands for {}", dropped, self.schema().domain);
        }
        self.replace_rows(Vec::new());
    }

    /// Install a fresh row set. Rows repeating an earlier id are dropped.
    fn replace_rows(&mut self, records: Vec<R>) {
        let mut seen = HashSet::new();
        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            let id = record.id();
            if seen.insert(id.clone()) {
                rows.push(Arc::new(record));
            } else {
                log::warn!("Dropping duplicate {} row {}", self.schema().domain, id);
            }
        }
        self.rows = rows;
        self.refresh();
        self.paginator.reset();
        self.selection.clear();
    }

    // ---- export ----------------------------------------------------------

    /// Rows a bulk action applies to: the selection, or every filtered row.
    pub fn export_scope(&self) -> Rows<R> {
        if self.selection.is_empty() {
            self.filtered.clone()
        } else {
            self.selection.records(&self.filtered)
        }
    }

    /// Serialize the export scope. Failures are reported, never propagated.
    pub fn export(&mut self, format: ExportFormat, date: NaiveDate, notifier: &mut dyn Notifier) -> Option<ExportFile> {
        let scope = self.export_scope();
        match self.exporter.export(&scope, format, date) {
            Ok(file) => Some(file),
            Err(e) => {
                self.report_export_error(&e, notifier);
                None
            }
        }
    }

    /// Serialize the export scope and save it into `dir`. The selection is cleared
    /// only once the file is written.
    pub fn export_to(
        &mut self,
        dir: &Path,
        format: ExportFormat,
        date: NaiveDate,
        notifier: &mut dyn Notifier,
    ) -> Option<PathBuf> {
        let count = self.export_scope().len();
        let file = self.export(format, date, notifier)?;
        match file.save(dir) {
            Ok(path) => {
                self.selection.clear();
                notifier.notify(
                    NotificationKind::Success,
                    TITLE_EXPORT_READY,
                    &format!("{} records saved to {}", count, path.display()),
                );
                Some(path)
            }
            Err(e) => {
                self.report_export_error(&e, notifier);
                None
            }
        }
    }

    fn report_export_error(&self, error: &ExportError, notifier: &mut dyn Notifier) {
        log::error!("Export of {} failed: {}", self.schema().domain, error);
        notifier.notify(NotificationKind::Error, TITLE_EXPORT_FAILED, &error.to_string());
    }

    // ---- mutations -------------------------------------------------------

    pub fn create(&mut self, record: R, notifier: &mut dyn Notifier) -> bool {
        self.mutate(Command::Create(record), notifier)
    }

    pub fn update(&mut self, id: RecordId, patch: Patch, notifier: &mut dyn Notifier) -> bool {
        self.mutate(Command::Update { id, patch }, notifier)
    }

    pub fn remove(&mut self, id: RecordId, notifier: &mut dyn Notifier) -> bool {
        self.mutate(Command::Delete(id), notifier)
    }

    pub fn toggle(&mut self, id: RecordId, field: &str, notifier: &mut dyn Notifier) -> bool {
        self.mutate(
            Command::Toggle {
                id,
                field: field.to_string(),
            },
            notifier,
        )
    }

    /// Create a copy of an existing row under a fresh identifier.
    pub fn duplicate(&mut self, id: &RecordId, notifier: &mut dyn Notifier) -> bool {
        let copy = match self.record(id) {
            Some(record) => duplicate::<R>(record, &fresh_id(&self.rows)),
            None => Err(MutationError::NotFound(id.clone())),
        };
        match copy {
            Ok(record) => self.create(record, notifier),
            Err(e) => {
                notifier.notify(NotificationKind::Error, TITLE_ACTION_FAILED, &e.to_string());
                false
            }
        }
    }

    fn mutate(&mut self, command: Command<R>, notifier: &mut dyn Notifier) -> bool {
        let title = match &command {
            Command::Create(_) => TITLE_RECORD_CREATED,
            Command::Delete(_) => TITLE_RECORD_DELETED,
            Command::Update { .. } | Command::Toggle { .. } => TITLE_RECORD_UPDATED,
        };
        let message = format!("{} {} {}", self.schema().title, command.target(), command.verb());

        match self.mutator.dispatch(&self.rows, command) {
            Ok(next) => {
                self.rows = next;
                self.refresh();
                self.paginator.clamp(self.filtered.len());
                self.selection.retain(&self.filtered);
                notifier.notify(NotificationKind::Success, title, &message);
                true
            }
            Err(e) => {
                notifier.notify(NotificationKind::Error, TITLE_ACTION_FAILED, &e.to_string());
                false
            }
        }
    }
}
