//! Per-page list configuration.
//!
//! Every admin page is the same list controller instantiated with a different
//! schema: which columns to show, which fields free-text search looks at, which
//! filters the page offers and how the list is ordered.

/// A table column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    /// Relative width used by the table renderer
    pub width: u16,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str, width: u16) -> Self {
        Self { key, label, width }
    }
}

/// How a filter key constrains a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterKind {
    /// Field value must equal the selected option
    Equals { field: &'static str, options: Vec<&'static str> },
    /// List field must contain the selected option
    Contains { field: &'static str, options: Vec<&'static str> },
    /// Field date must fall within the selected bounds (inclusive)
    DateRange { field: &'static str },
}

impl FilterKind {
    pub fn field(&self) -> &'static str {
        match self {
            FilterKind::Equals { field, .. } | FilterKind::Contains { field, .. } | FilterKind::DateRange { field } => {
                field
            }
        }
    }

    /// Selectable options, empty for date ranges.
    pub fn options(&self) -> &[&'static str] {
        match self {
            FilterKind::Equals { options, .. } | FilterKind::Contains { options, .. } => options,
            FilterKind::DateRange { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterSpec {
    pub fn equals(key: &'static str, label: &'static str, options: &[&'static str]) -> Self {
        Self {
            key,
            label,
            kind: FilterKind::Equals {
                field: key,
                options: options.to_vec(),
            },
        }
    }

    pub fn contains(key: &'static str, label: &'static str, field: &'static str, options: &[&'static str]) -> Self {
        Self {
            key,
            label,
            kind: FilterKind::Contains {
                field,
                options: options.to_vec(),
            },
        }
    }

    pub fn date_range(key: &'static str, label: &'static str, field: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FilterKind::DateRange { field },
        }
    }
}

/// Ordering applied after filtering: rows are ranked by the position of `field`'s
/// value in `order` (pipeline stages). Values not listed rank last.
#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub field: &'static str,
    pub order: Vec<&'static str>,
}

/// Everything a page needs to configure the shared list machinery.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSchema {
    /// Short machine name, used for export file names and config (`audit-logs`)
    pub domain: &'static str,
    pub title: &'static str,
    pub columns: Vec<Column>,
    pub searchable: Vec<&'static str>,
    pub filters: Vec<FilterSpec>,
    pub sort: Option<SortSpec>,
}

impl ListSchema {
    pub fn filter(&self, key: &str) -> Option<&FilterSpec> {
        self.filters.iter().find(|spec| spec.key == key)
    }
}
