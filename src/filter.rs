//! Client-side list filtering.
//!
//! [`ListFilterController`] derives the filtered list from the raw rows, a free-text
//! search term and a set of field constraints. Constraints are AND-composed; a key
//! set to "all" (or left empty) drops out of the chain. The derivation is a pure
//! function of its inputs and keeps the input order unless the page's schema names
//! a stage order.

use crate::record::{FieldValue, Record, Rows};
use crate::schema::{FilterKind, ListSchema, SortSpec};
use crate::utils::datetime::{date_in_range, parse_record_date};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Sentinel option meaning "no constraint for this key".
pub const ALL: &str = "all";

/// Currently selected value for one filter key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterValue {
    #[default]
    Any,
    Equals(String),
    DateRange {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl FilterValue {
    /// Build from a select-box value. Empty and "all" mean no constraint.
    pub fn from_selection(value: &str) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            FilterValue::Any
        } else {
            FilterValue::Equals(value.to_string())
        }
    }

    pub fn range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        FilterValue::DateRange { start, end }
    }

    pub fn is_active(&self) -> bool {
        match self {
            FilterValue::Any => false,
            FilterValue::Equals(value) => !value.is_empty(),
            FilterValue::DateRange { start, end } => start.is_some() || end.is_some(),
        }
    }

    /// Label for filter chips, e.g. `active` or `2024-01-01..2024-01-31`.
    pub fn label(&self) -> String {
        match self {
            FilterValue::Any => ALL.to_string(),
            FilterValue::Equals(value) => value.clone(),
            FilterValue::DateRange { start, end } => {
                let fmt = |d: &Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();
                format!("{}..{}", fmt(start), fmt(end))
            }
        }
    }
}

/// Search term plus every active field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search: String,
    values: BTreeMap<String, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: &str) -> Self {
        self.search = term.to_string();
        self
    }

    pub fn with(mut self, key: &str, value: FilterValue) -> Self {
        self.set(key, value);
        self
    }

    /// Set a constraint. Inactive values remove the key.
    pub fn set(&mut self, key: &str, value: FilterValue) {
        if value.is_active() {
            self.values.insert(key.to_string(), value);
        } else {
            self.values.remove(key);
        }
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    /// Active constraints in key order.
    pub fn active(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.values.clear();
    }
}

/// Derives the filtered list for one page.
#[derive(Debug, Clone)]
pub struct ListFilterController {
    schema: Arc<ListSchema>,
}

impl ListFilterController {
    pub fn new(schema: Arc<ListSchema>) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &ListSchema {
        &self.schema
    }

    /// Rows satisfying the search term and every active constraint.
    pub fn apply<R: Record>(&self, records: &[Arc<R>], state: &FilterState) -> Rows<R> {
        let mut filtered: Rows<R> = records
            .iter()
            .filter(|record| self.matches::<R>(record, state))
            .cloned()
            .collect();

        if let Some(sort) = &self.schema.sort {
            sort_rows(&mut filtered, sort);
        }
        filtered
    }

    pub fn matches<R: Record>(&self, record: &R, state: &FilterState) -> bool {
        self.matches_search(record, &state.search)
            && state
                .active()
                .all(|(key, value)| self.matches_constraint(record, key, value))
    }

    fn matches_search<R: Record>(&self, record: &R, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.schema.searchable.iter().any(|field| {
            record
                .field(field)
                .map(|value| value.display().to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
    }

    fn matches_constraint<R: Record>(&self, record: &R, key: &str, value: &FilterValue) -> bool {
        let spec = self.schema.filter(key);
        let field = spec.map(|s| s.kind.field()).unwrap_or(key);
        let contains = matches!(spec.map(|s| &s.kind), Some(FilterKind::Contains { .. }));

        match value {
            FilterValue::Any => true,
            FilterValue::Equals(expected) => match record.field(field) {
                Some(FieldValue::List(items)) if contains => items.iter().any(|item| item == expected),
                Some(actual) => actual.display() == *expected,
                None => false,
            },
            FilterValue::DateRange { start, end } => record
                .field(field)
                .and_then(|actual| parse_record_date(&actual.display()))
                .map(|date| date_in_range(date, *start, *end))
                .unwrap_or(false),
        }
    }
}

/// Stable sort by stage rank. Ties keep their input order.
pub fn sort_rows<R: Record>(rows: &mut Rows<R>, sort: &SortSpec) {
    let rank = |record: &Arc<R>| {
        record
            .field(sort.field)
            .and_then(|value| sort.order.iter().position(|stage| *stage == value.display()))
            .unwrap_or(sort.order.len())
    };
    rows.sort_by_key(rank);
}

/// Delays applying a search term until typing pauses.
///
/// A zero delay applies every keystroke immediately.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Record a new term. Returns it right away when debouncing is off.
    pub fn push(&mut self, term: &str, now: Instant) -> Option<String> {
        if self.delay.is_zero() {
            self.pending = None;
            return Some(term.to_string());
        }
        self.pending = Some((term.to_string(), now + self.delay));
        None
    }

    /// Release the pending term once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => self.pending.take().map(|(term, _)| term),
            _ => None,
        }
    }

    /// Release the pending term regardless of the deadline.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(term, _)| term)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
