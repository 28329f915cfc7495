//! # Rules and Roles
//!
//! The read-only snapshot of a ClusterRole: its name and the rules it grants.

use serde::{Deserialize, Serialize};

/// Set member that matches any API group or resource.
pub const WILDCARD: &str = "*";

/// A single grant within a role.
///
/// A rule permits every combination of its API groups, resources and verbs.
///
/// # Example
///
/// ```
/// use rolefinder_rbac::rules::Rule;
///
/// let rule = Rule::new(["apps"], ["deployments", "replicasets"], ["get", "list"]);
/// assert!(rule.has_resource("deployments"));
/// assert!(!rule.has_resource("pods"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// API groups this rule applies to. `""` is the core group.
    #[serde(default)]
    pub api_groups: Vec<String>,
    /// Resource types this rule applies to.
    #[serde(default)]
    pub resources: Vec<String>,
    /// Verbs permitted on the resources.
    #[serde(default)]
    pub verbs: Vec<String>,
}

impl Rule {
    /// Create a rule from its three sets.
    pub fn new<G, R, V>(api_groups: G, resources: R, verbs: V) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            api_groups: api_groups.into_iter().map(Into::into).collect(),
            resources: resources.into_iter().map(Into::into).collect(),
            verbs: verbs.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if the rule covers an API group, either literally or via `"*"`.
    ///
    /// The empty string is a concrete value (the core group), so it only
    /// matches a rule that lists `""` or `"*"`.
    pub fn has_api_group(&self, api_group: &str) -> bool {
        self.api_groups
            .iter()
            .any(|g| g == WILDCARD || g == api_group)
    }

    /// Check if the rule covers a resource, either literally or via `"*"`.
    pub fn has_resource(&self, resource: &str) -> bool {
        self.resources
            .iter()
            .any(|r| r == WILDCARD || r == resource)
    }

    /// Check if the rule lists a verb.
    ///
    /// No wildcard handling: `"*"` is only equal to `"*"`.
    pub fn has_verb(&self, verb: &str) -> bool {
        self.verbs.iter().any(|v| v == verb)
    }
}

/// A cluster-scoped role: a name plus an ordered list of rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    /// The role name (`metadata.name`).
    pub name: String,
    /// Rules in declaration order.
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl Role {
    /// Create a role.
    ///
    /// # Example
    ///
    /// ```
    /// use rolefinder_rbac::rules::{Role, Rule};
    ///
    /// let role = Role::new("view", vec![Rule::new([""], ["pods"], ["get"])]);
    /// assert_eq!(role.name, "view");
    /// assert_eq!(role.rules.len(), 1);
    /// ```
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// Check if the role has no rules at all.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
