//! Domain entity representing a single todo item.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier of a [`Todo`].
///
/// Serialized as the hyphenated UUID string in every backend and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Generates a fresh random (v4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TodoId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

/// A todo item as stored and returned by the API.
///
/// ```json
/// { "id": "3f1c...", "title": "Buy milk", "isComplete": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub is_complete: bool,
}

impl Todo {
    pub fn new(id: TodoId, title: String, is_complete: bool) -> Self {
        Self {
            id,
            title,
            is_complete,
        }
    }
}

/// Input data for creating a new todo.
///
/// `id` is honoured when the client supplied one; otherwise the store
/// assigns a fresh [`TodoId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub id: Option<TodoId>,
    pub title: String,
    pub is_complete: bool,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            is_complete: false,
        }
    }

    /// Materializes the record, generating an id if none was supplied.
    pub fn into_todo(self) -> Todo {
        Todo {
            id: self.id.unwrap_or_default(),
            title: self.title,
            is_complete: self.is_complete,
        }
    }
}

/// Completion filter applied by list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Complete,
    Incomplete,
}

impl TodoFilter {
    /// Required value of `is_complete`, or `None` when every todo matches.
    pub fn is_complete(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Complete => Some(true),
            Self::Incomplete => Some(false),
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        self.is_complete()
            .is_none_or(|wanted| todo.is_complete == wanted)
    }
}
