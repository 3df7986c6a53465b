//! Domain model for the in-memory todo demo.
//!
//! A `Todo` record owns three attributes (identifier, title, status). The
//! store keeps records in insertion order and is the sole owner of record
//! state; HTTP concerns live in the `todo-api` crate.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub mod resource;
pub mod store;

pub use resource::Serializable;
pub use store::TodoStore;

/// Unique record identifier (random UUID, immutable after creation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Completion state of a record. Toggle is the only mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Outstanding,
    Completed,
}

impl Status {
    pub fn toggled(self) -> Self {
        match self {
            Status::Outstanding => Status::Completed,
            Status::Completed => Status::Outstanding,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Outstanding => "Outstanding",
            Status::Completed => "Completed",
        }
    }
}

/// The todo record. `identifier` and `title` are fixed at creation; only
/// `status` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    identifier: TodoId,
    title: String,
    status: Status,
}

impl Todo {
    /// Creates a record with a fresh identifier.
    pub fn new(title: impl Into<String>, status: Status) -> Self {
        Self::with_identifier(TodoId::new(), title, status)
    }

    /// Creates a record with a caller-supplied identifier (seed data, tests).
    pub fn with_identifier(identifier: TodoId, title: impl Into<String>, status: Status) -> Self {
        Self {
            identifier,
            title: title.into(),
            status,
        }
    }

    pub fn identifier(&self) -> &TodoId {
        &self.identifier
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns a copy of this record with the status flipped.
    pub fn toggled(&self) -> Self {
        Self {
            identifier: self.identifier.clone(),
            title: self.title.clone(),
            status: self.status.toggled(),
        }
    }
}

impl Serializable for Todo {
    fn attributes(&self) -> serde_json::Map<String, Value> {
        let mut map = serde_json::Map::new();
        map.insert(
            "identifier".to_string(),
            Value::String(self.identifier.as_str().to_string()),
        );
        map.insert("title".to_string(), Value::String(self.title.clone()));
        map.insert(
            "status".to_string(),
            Value::String(self.status.as_str().to_string()),
        );
        map
    }
}
