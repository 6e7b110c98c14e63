#![deny(missing_docs)]

//! # Route Registry
//!
//! Manages the (path, method) keyspace of a [`Document`].
//!
//! Route metadata lives only in the operation stored under `paths`. The lookup
//! by [`UniqueRoute`] (`route_index`, `route_summary`) is derived from it on
//! demand, so there is no second map to keep in sync.

use crate::config::TagPolicy;
use crate::error::{AppError, AppResult};
use crate::oas::models::{Document, Operation, Tag};
use crate::oas::types::HttpMethod;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// The (path, method) handle returned by [`Document::add_route`].
///
/// Every later builder call addresses its operation through this handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UniqueRoute {
    path: String,
    method: HttpMethod,
}

impl UniqueRoute {
    /// Creates a handle. Registration is what makes it resolvable.
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path: path.into(),
            method,
        }
    }

    /// The path template.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The HTTP method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The derived operation identifier, `method + "_" + path`.
    pub fn operation_id(&self) -> String {
        format!("{}_{}", self.method, self.path)
    }
}

impl fmt::Display for UniqueRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Tag and description of a registered route, as read from its operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    /// Tags on the operation.
    pub tags: Vec<String>,
    /// Operation description.
    pub description: String,
}

impl From<&Operation> for RouteSummary {
    fn from(op: &Operation) -> Self {
        Self {
            tags: op.tags.clone(),
            description: op.description.clone(),
        }
    }
}

impl Document {
    /// Appends a document-level tag. Duplicate names are not checked.
    pub fn add_tag(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.tags.push(Tag::new(name, description));
    }

    /// Appends several document-level tags.
    pub fn add_tags(&mut self, tags: impl IntoIterator<Item = Tag>) {
        self.tags.extend(tags);
    }

    /// Registers (or re-registers) the operation for `path` and `method`.
    ///
    /// Fails with `MissingRequiredField` if `path` or `method` is empty and with
    /// `UnknownMethod` if `method` is not an OpenAPI operation method; nothing is
    /// mutated in either case.
    ///
    /// Re-registering overwrites the description and summary, recomputes the
    /// operation id and merges the tag according to the configured [`TagPolicy`].
    pub fn add_route(
        &mut self,
        path: &str,
        method: &str,
        tag: &str,
        description: &str,
        summary: &str,
    ) -> AppResult<UniqueRoute> {
        if path.is_empty() || method.is_empty() {
            return Err(AppError::MissingRequiredField(
                "path and method cannot be empty".into(),
            ));
        }
        let method: HttpMethod = method.parse()?;
        let tag = if tag.is_empty() {
            self.config.default_tag.clone()
        } else {
            tag.to_string()
        };

        let route = UniqueRoute::new(path, method);
        let tag_policy = self.config.tag_policy;

        let op = self
            .paths
            .entry(route.path.clone())
            .or_default()
            .entry(route.method)
            .or_default();

        op.description = description.to_string();
        op.summary = summary.to_string();
        op.operation_id = route.operation_id();
        match tag_policy {
            TagPolicy::Deduplicate if op.tags.contains(&tag) => {}
            _ => op.tags.push(tag),
        }

        debug!(route = %route, tags = ?op.tags, "registered route");
        Ok(route)
    }

    /// True when the route has been registered.
    pub fn contains_route(&self, route: &UniqueRoute) -> bool {
        self.operation(route).is_some()
    }

    /// The operation registered for `route`.
    pub fn operation(&self, route: &UniqueRoute) -> Option<&Operation> {
        self.paths
            .get(&route.path)
            .and_then(|item| item.get(&route.method))
    }

    /// Mutable access to a registered operation, or `ReferenceNotFound`.
    pub(crate) fn operation_mut(&mut self, route: &UniqueRoute) -> AppResult<&mut Operation> {
        self.paths
            .get_mut(&route.path)
            .and_then(|item| item.get_mut(&route.method))
            .ok_or_else(|| AppError::ReferenceNotFound(route.clone()))
    }

    /// Tag and description of a registered route.
    pub fn route_summary(&self, route: &UniqueRoute) -> Option<RouteSummary> {
        self.operation(route).map(RouteSummary::from)
    }

    /// Every registered route with its tag and description.
    pub fn route_index(&self) -> BTreeMap<UniqueRoute, RouteSummary> {
        self.paths
            .iter()
            .flat_map(|(path, item)| {
                item.iter().map(move |(method, op)| {
                    (UniqueRoute::new(path.clone(), *method), RouteSummary::from(op))
                })
            })
            .collect()
    }
}
