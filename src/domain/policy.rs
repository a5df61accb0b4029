//! Deployment-level switches for behaviour that differs between deployments.
//!
//! Two historical deployments of this API disagree on how `PUT /todos/{id}`
//! treats an unknown id and on whether `DELETE /todos/delete-all` is
//! available. Both behaviours are kept and selected through configuration.

use std::fmt;
use std::str::FromStr;

/// Response to `PUT /todos/{id}` when no todo has that id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PutMissing {
    /// Answer 404 Not Found.
    #[default]
    NotFound,
    /// Answer 204 No Content even though nothing was written.
    NoContent,
}

/// Availability of the bulk delete route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteAllMode {
    #[default]
    Enabled,
    /// The route exists but fails with a "not implemented" server error.
    Unimplemented,
}

/// Behaviour switches consulted by [`crate::application::services::TodoService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoPolicy {
    pub put_missing: PutMissing,
    pub delete_all: DeleteAllMode,
}

impl FromStr for PutMissing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not-found" | "404" => Ok(Self::NotFound),
            "no-content" | "204" => Ok(Self::NoContent),
            other => Err(format!(
                "expected 'not-found' or 'no-content', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for PutMissing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("not-found"),
            Self::NoContent => f.write_str("no-content"),
        }
    }
}

impl FromStr for DeleteAllMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enabled" => Ok(Self::Enabled),
            "unimplemented" | "disabled" => Ok(Self::Unimplemented),
            other => Err(format!(
                "expected 'enabled' or 'unimplemented', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for DeleteAllMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled => f.write_str("enabled"),
            Self::Unimplemented => f.write_str("unimplemented"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_put_missing() {
        assert_eq!("not-found".parse(), Ok(PutMissing::NotFound));
        assert_eq!("NO-CONTENT".parse(), Ok(PutMissing::NoContent));
        assert_eq!("204".parse(), Ok(PutMissing::NoContent));
        assert!("maybe".parse::<PutMissing>().is_err());
    }

    #[test]
    fn test_parse_delete_all_mode() {
        assert_eq!("enabled".parse(), Ok(DeleteAllMode::Enabled));
        assert_eq!("unimplemented".parse(), Ok(DeleteAllMode::Unimplemented));
        assert!("sometimes".parse::<DeleteAllMode>().is_err());
    }

    #[test]
    fn test_default_policy() {
        let policy = TodoPolicy::default();
        assert_eq!(policy.put_missing, PutMissing::NotFound);
        assert_eq!(policy.delete_all, DeleteAllMode::Enabled);
    }
}
