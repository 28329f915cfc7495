//! # Queries
//!
//! The access being looked up: an API group, a resource and an optional verb.

use serde::Serialize;
use thiserror::Error;

/// Errors raised while building a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The resource is required and was empty.
    #[error("resource must not be empty")]
    EmptyResource,
}

/// A lookup of (API group, resource, verb).
///
/// - `api_group` defaults to `""`, the core group. It is never a wildcard.
/// - `resource` is always non-empty.
/// - `verb` defaults to `""`, meaning any verb.
///
/// # Example
///
/// ```
/// use rolefinder_rbac::query::Query;
///
/// let query = Query::new("deployments").unwrap().with_api_group("apps");
/// assert_eq!(query.api_group(), "apps");
/// assert!(query.matches_any_verb());
///
/// assert!(Query::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    api_group: String,
    resource: String,
    verb: String,
}

impl Query {
    /// Create a query for a resource in the core group, any verb.
    pub fn new(resource: impl Into<String>) -> Result<Self, QueryError> {
        let resource = resource.into();
        if resource.is_empty() {
            return Err(QueryError::EmptyResource);
        }

        Ok(Self {
            api_group: String::new(),
            resource,
            verb: String::new(),
        })
    }

    /// Set the API group.
    pub fn with_api_group(mut self, api_group: impl Into<String>) -> Self {
        self.api_group = api_group.into();
        self
    }

    /// Set the verb. An empty verb matches any verb.
    pub fn with_verb(mut self, verb: impl Into<String>) -> Self {
        self.verb = verb.into();
        self
    }

    pub fn api_group(&self) -> &str {
        &self.api_group
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// True when the verb check is skipped.
    pub fn matches_any_verb(&self) -> bool {
        self.verb.is_empty()
    }
}
