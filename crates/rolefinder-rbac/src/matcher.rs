//! # Matcher
//!
//! Decides whether a role grants a query. A role grants a query if any one of
//! its rules covers the API group, the resource and (unless the query leaves it
//! empty) the verb.

use tracing::trace;

use crate::query::Query;
use crate::rules::{Role, Rule};

impl Rule {
    /// Check if this rule alone grants the query.
    pub fn grants(&self, query: &Query) -> bool {
        self.has_api_group(query.api_group())
            && self.has_resource(query.resource())
            && (query.matches_any_verb() || self.has_verb(query.verb()))
    }
}

impl Role {
    /// Check if any rule of the role grants the query.
    ///
    /// Stops at the first granting rule. A role with no rules grants nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use rolefinder_rbac::{Query, Role, Rule};
    ///
    /// let role = Role::new("deployer", vec![Rule::new(["apps"], ["deployments"], ["create"])]);
    ///
    /// let create = Query::new("deployments").unwrap().with_api_group("apps").with_verb("create");
    /// assert!(role.matches(&create));
    ///
    /// let delete = create.clone().with_verb("delete");
    /// assert!(!role.matches(&delete));
    /// ```
    pub fn matches(&self, query: &Query) -> bool {
        let granted = self.rules.iter().any(|rule| rule.grants(query));
        trace!(
            role = %self.name,
            api_group = query.api_group(),
            resource = query.resource(),
            verb = query.verb(),
            granted,
            "evaluated role"
        );
        granted
    }
}

/// Names of the roles that grant the query, in input order.
pub fn matching_role_names(roles: &[Role], query: &Query) -> Vec<String> {
    roles
        .iter()
        .filter(|role| role.matches(query))
        .map(|role| role.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_verbs() -> Vec<String> {
        Vec::new()
    }

    fn sample_roles() -> Vec<Role> {
        vec![
            Role::new("role-a", vec![Rule::new(["*"], ["pods"], ["get"])]),
            Role::new("role-b", vec![Rule::new(["apps"], ["*"], no_verbs())]),
            Role::new("role-c", vec![]),
        ]
    }

    #[test]
    fn test_empty_role_never_matches() {
        let role = Role::new("empty", vec![]);
        for query in [
            Query::new("pods").unwrap(),
            Query::new("*").unwrap().with_api_group("*"),
            Query::new("deployments").unwrap().with_api_group("apps").with_verb("get"),
        ] {
            assert!(!role.matches(&query));
        }
    }

    #[test]
    fn test_core_group_requires_literal_or_wildcard() {
        let query = Query::new("pods").unwrap();

        let core = Role::new("core", vec![Rule::new([""], ["pods"], ["list"])]);
        let wildcard = Role::new("any", vec![Rule::new(["*"], ["*"], ["list"])]);
        let apps = Role::new("apps", vec![Rule::new(["apps"], ["pods"], ["list"])]);

        assert!(core.matches(&query));
        assert!(wildcard.matches(&query));
        assert!(!apps.matches(&query));
    }

    #[test]
    fn test_verb_must_be_listed_literally() {
        let query = Query::new("deployments")
            .unwrap()
            .with_api_group("apps")
            .with_verb("get");

        let star_verbs = Role::new("star", vec![Rule::new(["apps"], ["deployments"], ["*"])]);
        let get_verb = Role::new("get", vec![Rule::new(["apps"], ["deployments"], ["list", "get"])]);

        assert!(!star_verbs.matches(&query));
        assert!(get_verb.matches(&query));
    }

    #[test]
    fn test_empty_verb_skips_verb_check() {
        let role = Role::new("no-verbs", vec![Rule::new(["apps"], ["deployments"], no_verbs())]);
        let query = Query::new("deployments").unwrap().with_api_group("apps");
        assert!(role.matches(&query));
    }

    #[test]
    fn test_wildcard_resource_matches_any_resource() {
        let role = Role::new("all", vec![Rule::new(["batch"], ["*"], ["get"])]);
        for resource in ["jobs", "cronjobs", "jobs/status", "x"] {
            let query = Query::new(resource).unwrap().with_api_group("batch");
            assert!(role.matches(&query), "resource {resource} should match");
        }
    }

    #[test]
    fn test_dimensions_must_hold_in_same_rule() {
        // apps/deployments from one rule and the verb from another is not a grant
        let role = Role::new(
            "split",
            vec![
                Rule::new(["apps"], ["deployments"], ["list"]),
                Rule::new([""], ["pods"], ["delete"]),
            ],
        );
        let query = Query::new("deployments")
            .unwrap()
            .with_api_group("apps")
            .with_verb("delete");
        assert!(!role.matches(&query));
    }

    #[test]
    fn test_any_rule_can_grant() {
        let role = Role::new(
            "multi",
            vec![
                Rule::new(["batch"], ["jobs"], ["get"]),
                Rule::new([""], ["configmaps"], ["get", "watch"]),
            ],
        );
        let query = Query::new("configmaps").unwrap().with_verb("watch");
        assert!(role.matches(&query));
    }

    #[test]
    fn test_end_to_end_selection() {
        let roles = sample_roles();

        let pods = Query::new("pods").unwrap().with_verb("get");
        assert_eq!(matching_role_names(&roles, &pods), vec!["role-a"]);

        let deployments = Query::new("deployments").unwrap().with_api_group("apps");
        assert_eq!(matching_role_names(&roles, &deployments), vec!["role-b"]);

        let jobs = Query::new("jobs").unwrap().with_api_group("batch");
        assert!(matching_role_names(&roles, &jobs).is_empty());
    }

    #[test]
    fn test_matching_preserves_input_order() {
        let roles = vec![
            Role::new("zeta", vec![Rule::new(["*"], ["*"], ["get"])]),
            Role::new("alpha", vec![Rule::new([""], ["pods"], ["get"])]),
        ];
        let query = Query::new("pods").unwrap();
        assert_eq!(matching_role_names(&roles, &query), vec!["zeta", "alpha"]);
    }
}
