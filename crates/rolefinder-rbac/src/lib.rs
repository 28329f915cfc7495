//! # Role Finder RBAC
//!
//! This crate models Kubernetes ClusterRole rules and answers one question:
//! does a role grant access to a given resource?
//!
//! ## Overview
//!
//! The rolefinder-rbac crate handles:
//! - **Rules**: API groups + resources + verbs granted together
//! - **Roles**: A named, ordered list of rules
//! - **Queries**: The (API group, resource, verb) being looked up
//! - **Matching**: Deciding whether any rule of a role covers a query
//!
//! ## Matching
//!
//! ```text
//! Role grants Query  <=>  exists Rule in Role where
//!     apiGroups contains "*" or query.api_group
//!     resources contains "*" or query.resource
//!     query.verb is empty, or verbs contains query.verb
//! ```
//!
//! The empty API group is the core group, not a wildcard. Verbs have no
//! wildcard shortcut: `"*"` in `verbs` only matches a query for the verb `"*"`.
//!
//! ## Usage
//!
//! ```rust
//! use rolefinder_rbac::{matching_role_names, Query, Role, Rule};
//!
//! let roles = vec![
//!     Role::new("pod-reader", vec![Rule::new(["*"], ["pods"], ["get"])]),
//!     Role::new("apps-admin", vec![Rule::new(["apps"], ["*"], Vec::<String>::new())]),
//! ];
//!
//! let query = Query::new("pods").unwrap().with_verb("get");
//! assert_eq!(matching_role_names(&roles, &query), vec!["pod-reader".to_string()]);
//! ```

pub mod matcher;
pub mod query;
pub mod rules;

// Re-export main types for convenience
pub use matcher::matching_role_names;
pub use query::{Query, QueryError};
pub use rules::{Role, Rule, WILDCARD};
