//! Static route registry.
//!
//! Every API route is declared once here with a stable name and a path
//! template. The router mounts the templates directly, and
//! [`RouteRegistry::resolve`] turns a route name plus parameter values back
//! into a URL for `Location` headers.
//!
//! ```rust,ignore
//! let registry = RouteRegistry::new("api");
//! let url = registry.resolve(TODO_FIND.name, &[("id", "0b5f...")]);
//! assert_eq!(url.as_deref(), Some("/api/todos/0b5f..."));
//! ```

use std::collections::HashMap;

/// A named API route, relative to the API prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub name: &'static str,
    pub method: &'static str,
    /// Axum-compatible path template, e.g. `/todos/{id}`.
    pub template: &'static str,
}

pub const HELLO_TEXT: RouteDef = RouteDef {
    name: "hello-text",
    method: "GET",
    template: "/text",
};
pub const HELLO_JSON: RouteDef = RouteDef {
    name: "hello-json",
    method: "GET",
    template: "/hello",
};
pub const TODO_LIST: RouteDef = RouteDef {
    name: "todo-list",
    method: "GET",
    template: "/todos",
};
pub const TODO_FIND: RouteDef = RouteDef {
    name: "todo-find",
    method: "GET",
    template: "/todos/{id}",
};
pub const TODO_LIST_COMPLETE: RouteDef = RouteDef {
    name: "todo-list-complete",
    method: "GET",
    template: "/todos/complete",
};
pub const TODO_LIST_INCOMPLETE: RouteDef = RouteDef {
    name: "todo-list-incomplete",
    method: "GET",
    template: "/todos/incomplete",
};
pub const TODO_POST: RouteDef = RouteDef {
    name: "todo-post",
    method: "POST",
    template: "/todos",
};
pub const TODO_PUT: RouteDef = RouteDef {
    name: "todo-put",
    method: "PUT",
    template: "/todos/{id}",
};
pub const TODO_MARK_COMPLETE: RouteDef = RouteDef {
    name: "todo-mark-complete",
    method: "PUT",
    template: "/todos/{id}/mark-complete",
};
pub const TODO_MARK_INCOMPLETE: RouteDef = RouteDef {
    name: "todo-mark-incomplete",
    method: "PUT",
    template: "/todos/{id}/mark-incomplete",
};
pub const TODO_DELETE: RouteDef = RouteDef {
    name: "todo-delete",
    method: "DELETE",
    template: "/todos/{id}",
};
pub const TODO_DELETE_ALL: RouteDef = RouteDef {
    name: "todo-delete-all",
    method: "DELETE",
    template: "/todos/delete-all",
};

/// Every route served under the API prefix.
pub const ROUTES: [RouteDef; 12] = [
    HELLO_TEXT,
    HELLO_JSON,
    TODO_LIST,
    TODO_FIND,
    TODO_LIST_COMPLETE,
    TODO_LIST_INCOMPLETE,
    TODO_POST,
    TODO_PUT,
    TODO_MARK_COMPLETE,
    TODO_MARK_INCOMPLETE,
    TODO_DELETE,
    TODO_DELETE_ALL,
];

/// One path segment of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    /// Parameter name, without braces or constraint.
    Param(&'static str),
}

/// Splits a template such as `/todos/{id}/mark-complete` into segments.
///
/// A parameter may carry a constraint suffix (`{id:guid}`); only the name is kept.
pub fn parse_template(template: &'static str) -> Vec<Segment> {
    template
        .split('/')
        .filter(|part| !part.is_empty())
        .map(|part| match part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
            Some(inner) => Segment::Param(inner.split(':').next().unwrap_or(inner)),
            None => Segment::Literal(part),
        })
        .collect()
}

/// Route name → parsed segments, plus the API prefix they live under.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    prefix: String,
    routes: HashMap<&'static str, Vec<Segment>>,
}

impl RouteRegistry {
    /// Builds the registry for [`ROUTES`] mounted under `prefix` (e.g. `api`).
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_routes(prefix, &ROUTES)
    }

    fn with_routes(prefix: impl Into<String>, routes: &[RouteDef]) -> Self {
        let prefix = prefix.into().trim_matches('/').to_string();
        let routes = routes
            .iter()
            .map(|route| (route.name, parse_template(route.template)))
            .collect();

        Self { prefix, routes }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Builds the absolute path of route `name` with `params` substituted.
    ///
    /// Literal segments are copied verbatim; a parameter with no matching
    /// value produces an empty segment. Returns `None` for an unknown name.
    pub fn resolve(&self, name: &str, params: &[(&str, &str)]) -> Option<String> {
        let segments = self.routes.get(name)?;

        let mut bits: Vec<&str> = Vec::with_capacity(segments.len() + 2);
        bits.push("");
        if !self.prefix.is_empty() {
            bits.push(&self.prefix);
        }

        for segment in segments {
            match segment {
                Segment::Literal(text) => bits.push(text),
                Segment::Param(param) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| key == param)
                        .map(|(_, value)| *value)
                        .unwrap_or("");
                    bits.push(value);
                }
            }
        }

        Some(bits.join("/"))
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::new("api")
    }
}
