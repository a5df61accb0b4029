//! Problem-details body returned for validation failures.

use serde::Serialize;
use std::collections::BTreeMap;

/// Validation problem details.
///
/// ```json
/// {
///   "type": null,
///   "title": "One or more validation errors occurred.",
///   "status": null,
///   "detail": null,
///   "instance": null,
///   "errors": { "title": ["The Title field is required."] }
/// }
/// ```
///
/// Optional members stay `null` unless the caller sets them; the HTTP status
/// of the response is always 400 regardless of `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationProblem {
    #[serde(rename = "type")]
    pub problem_type: Option<String>,
    pub title: String,
    pub status: Option<u16>,
    pub detail: Option<String>,
    pub instance: Option<String>,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationProblem {
    pub const DEFAULT_TITLE: &'static str = "One or more validation errors occurred.";

    pub fn new(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            problem_type: None,
            title: Self::DEFAULT_TITLE.to_string(),
            status: None,
            detail: None,
            instance: None,
            errors,
        }
    }

    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), vec![message.into()]);
        Self::new(errors)
    }

    /// Overrides the title. Blank titles keep the default.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.trim().is_empty() {
            self.title = title;
        }
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    pub fn with_type(mut self, problem_type: impl Into<String>) -> Self {
        self.problem_type = Some(problem_type.into());
        self
    }
}
