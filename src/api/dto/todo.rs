//! DTOs for the todo endpoints.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::entities::{NewTodo, TodoId};

/// Request body for `POST /api/todos` and `PUT /api/todos/{id}`.
///
/// ```json
/// { "title": "Buy milk", "isComplete": false }
/// ```
///
/// `id` is only honoured on create, and only when it is a UUID; anything else
/// gets a generated id. `isComplete` defaults to `false`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TodoRequest {
    #[serde(default)]
    pub id: Option<String>,

    #[validate(
        required(message = "The Title field is required."),
        custom(function = "not_blank", message = "The Title field is required.")
    )]
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub is_complete: bool,
}

impl TodoRequest {
    /// Converts a validated request into creation input.
    pub fn into_new_todo(self) -> NewTodo {
        NewTodo {
            id: self.id.and_then(|raw| raw.parse::<TodoId>().ok()),
            title: self.title.unwrap_or_default(),
            is_complete: self.is_complete,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> TodoRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let request = parse(json!({ "title": "Buy milk" }));
        assert!(request.validate().is_ok());

        let new_todo = request.into_new_todo();
        assert_eq!(new_todo.title, "Buy milk");
        assert!(!new_todo.is_complete);
        assert!(new_todo.id.is_none());
    }

    #[test]
    fn test_missing_title_is_invalid() {
        let errors = parse(json!({ "isComplete": true })).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_null_title_is_invalid() {
        let errors = parse(json!({ "title": null })).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_blank_title_is_invalid() {
        let errors = parse(json!({ "title": "   " })).validate().unwrap_err();
        let field_errors = errors.field_errors();
        assert_eq!(field_errors.len(), 1);
        assert_eq!(field_errors["title"].len(), 1);
    }

    #[test]
    fn test_non_uuid_client_id_is_dropped() {
        let request = parse(json!({ "id": "abc", "title": "x" }));
        assert!(request.validate().is_ok());
        assert!(request.into_new_todo().id.is_none());
    }

    #[test]
    fn test_client_id_is_kept() {
        let request = parse(json!({
            "id": "0b5f1c2e-8a51-4c43-9d0e-6b1b3f9c2a10",
            "title": "x",
            "isComplete": true
        }));
        assert!(request.validate().is_ok());

        let new_todo = request.into_new_todo();
        assert_eq!(
            new_todo.id.map(|id| id.to_string()).as_deref(),
            Some("0b5f1c2e-8a51-4c43-9d0e-6b1b3f9c2a10")
        );
        assert!(new_todo.is_complete);
    }
}
