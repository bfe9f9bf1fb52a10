//! Optimistic, local list mutations.
//!
//! Mutations are tagged commands applied by a pure reducer that returns a new list.
//! Untouched rows are carried over as the same `Arc`, so consumers can tell exactly
//! what changed. Nothing is confirmed against a server and nothing is rolled back;
//! the mutator only keeps the log of applied commands so a later sync layer can
//! replay or reconcile them.

use crate::record::{to_fields, Record, RecordId, Rows};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

/// Shallow JSON patch merged over a record's serialized fields.
pub type Patch = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum Command<R> {
    Create(R),
    Update { id: RecordId, patch: Patch },
    Delete(RecordId),
    Toggle { id: RecordId, field: String },
}

impl<R: Record> Command<R> {
    /// Identifier of the record the command targets.
    pub fn target(&self) -> RecordId {
        match self {
            Command::Create(record) => record.id(),
            Command::Update { id, .. } | Command::Delete(id) | Command::Toggle { id, .. } => id.clone(),
        }
    }

    /// Short verb for notifications and logs.
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Create(_) => "created",
            Command::Update { .. } => "updated",
            Command::Delete(_) => "deleted",
            Command::Toggle { .. } => "toggled",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    #[error("A record with id {0} already exists")]
    DuplicateId(RecordId),

    #[error("No record with id {0}")]
    NotFound(RecordId),

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Field '{0}' is not a boolean")]
    NotBoolean(String),

    #[error("The record id cannot be changed")]
    IdChanged,

    #[error("Record is not an object")]
    NotAnObject,

    #[error("Invalid patch: {0}")]
    Patch(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}

/// Apply one command, producing the next list.
pub fn apply<R: Record>(rows: &[Arc<R>], command: &Command<R>) -> Result<Rows<R>, MutationError> {
    match command {
        Command::Create(record) => {
            let id = record.id();
            if rows.iter().any(|r| r.id() == id) {
                return Err(MutationError::DuplicateId(id));
            }
            record.validate().map_err(MutationError::Validation)?;

            let mut next = rows.to_vec();
            next.push(Arc::new(record.clone()));
            Ok(next)
        }
        Command::Update { id, patch } => {
            let index = position(rows, id)?;
            let mut fields = fields_of(&*rows[index])?;
            for (key, value) in patch {
                if !fields.contains_key(key) {
                    return Err(MutationError::UnknownField(key.clone()));
                }
                fields.insert(key.clone(), value.clone());
            }

            let updated: R = serde_json::from_value(Value::Object(fields))?;
            if updated.id() != *id {
                return Err(MutationError::IdChanged);
            }
            updated.validate().map_err(MutationError::Validation)?;
            Ok(replace(rows, index, updated))
        }
        Command::Delete(id) => {
            position(rows, id)?;
            Ok(rows.iter().filter(|r| r.id() != *id).cloned().collect())
        }
        Command::Toggle { id, field } => {
            let index = position(rows, id)?;
            let mut fields = fields_of(&*rows[index])?;
            match fields.get_mut(field.as_str()) {
                Some(Value::Bool(flag)) => *flag = !*flag,
                Some(_) => return Err(MutationError::NotBoolean(field.clone())),
                None => return Err(MutationError::UnknownField(field.clone())),
            }

            let toggled: R = serde_json::from_value(Value::Object(fields))?;
            Ok(replace(rows, index, toggled))
        }
    }
}

fn position<R: Record>(rows: &[Arc<R>], id: &RecordId) -> Result<usize, MutationError> {
    rows.iter()
        .position(|r| r.id() == *id)
        .ok_or_else(|| MutationError::NotFound(id.clone()))
}

fn fields_of<R: Record>(record: &R) -> Result<Map<String, Value>, MutationError> {
    to_fields(record).ok_or(MutationError::NotAnObject)
}

fn replace<R: Record>(rows: &[Arc<R>], index: usize, record: R) -> Rows<R> {
    let mut next = rows.to_vec();
    next[index] = Arc::new(record);
    next
}

/// Identifier for a new row: next integer for numeric ids, a UUID otherwise or
/// once the integer range is exhausted.
pub fn fresh_id<R: Record>(rows: &[Arc<R>]) -> RecordId {
    let numeric_max = rows
        .iter()
        .map(|r| r.id())
        .filter_map(|id| match id {
            RecordId::Number(n) => Some(n),
            RecordId::Text(_) => None,
        })
        .max();

    match (numeric_max, rows.is_empty()) {
        (Some(max), _) => max
            .checked_add(1)
            .map(RecordId::Number)
            .unwrap_or_else(|| RecordId::Text(Uuid::new_v4().to_string())),
        (None, true) => RecordId::Number(1),
        (None, false) => RecordId::Text(Uuid::new_v4().to_string()),
    }
}

/// Copy of `record` carrying a different identifier.
pub fn duplicate<R: Record>(record: &R, id: &RecordId) -> Result<R, MutationError> {
    let mut fields = fields_of(record)?;
    fields.insert(R::ID_FIELD.to_string(), id.to_json());
    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// An applied command and when it was applied.
#[derive(Debug, Clone)]
pub struct CommandEntry<R> {
    pub command: Command<R>,
    pub applied_at: DateTime<Utc>,
}

/// Applies commands to a page's rows and keeps the log of what was applied.
#[derive(Debug, Clone)]
pub struct OptimisticMutator<R> {
    log: Vec<CommandEntry<R>>,
}

impl<R: Record> Default for OptimisticMutator<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> OptimisticMutator<R> {
    pub fn new() -> Self {
        Self { log: Vec::new() }
    }

    pub fn dispatch(&mut self, rows: &[Arc<R>], command: Command<R>) -> Result<Rows<R>, MutationError> {
        match apply(rows, &command) {
            Ok(next) => {
                log::debug!("Applied {} on record {}", command.verb(), command.target());
                self.log.push(CommandEntry {
                    command,
                    applied_at: Utc::now(),
                });
                Ok(next)
            }
            Err(e) => {
                log::warn!("Rejected mutation on record {}: {}", command.target(), e);
                Err(e)
            }
        }
    }

    pub fn create(&mut self, rows: &[Arc<R>], record: R) -> Result<Rows<R>, MutationError> {
        self.dispatch(rows, Command::Create(record))
    }

    pub fn update(&mut self, rows: &[Arc<R>], id: RecordId, patch: Patch) -> Result<Rows<R>, MutationError> {
        self.dispatch(rows, Command::Update { id, patch })
    }

    pub fn remove(&mut self, rows: &[Arc<R>], id: RecordId) -> Result<Rows<R>, MutationError> {
        self.dispatch(rows, Command::Delete(id))
    }

    pub fn toggle(&mut self, rows: &[Arc<R>], id: RecordId, field: &str) -> Result<Rows<R>, MutationError> {
        self.dispatch(
            rows,
            Command::Toggle {
                id,
                field: field.to_string(),
            },
        )
    }

    /// Commands applied since the last drain, oldest first.
    pub fn pending(&self) -> &[CommandEntry<R>] {
        &self.log
    }

    pub fn drain(&mut self) -> Vec<CommandEntry<R>> {
        std::mem::take(&mut self.log)
    }
}
