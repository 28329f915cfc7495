//! Lookup configuration.
//!
//! Command line flags plus the environment-derived kubeconfig default. The
//! flag names follow `kubectl` conventions (`--apiGroup` is camel case).

use clap::Parser;
use rolefinder_rbac::{Query, QueryError};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Find the ClusterRoles that grant access to a resource.
#[derive(Debug, Clone, Default, Parser, Serialize)]
#[command(name = "kube-role-finder", version, about, long_about = None)]
pub struct FinderConfig {
    /// (optional) absolute path to the kubeconfig file [default: $HOME/.kube/config]
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// (optional) apiGroup, default is ""
    #[arg(long = "apiGroup", value_name = "GROUP", default_value = "")]
    pub api_group: String,

    /// resource
    #[arg(long, default_value = "")]
    pub resource: String,

    /// (optional) verb, default match all
    #[arg(long, default_value = "")]
    pub verb: String,

    /// (optional) output width in columns, default is the terminal width
    #[arg(long, value_name = "COLUMNS", value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,
}

/// How to reach the cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterAccess {
    /// Read credentials from a kubeconfig file.
    Kubeconfig(PathBuf),
    /// Use the pod's service account.
    InCluster,
}

impl FinderConfig {
    /// True when no resource was given and usage should be printed instead.
    pub fn wants_usage(&self) -> bool {
        self.resource.is_empty()
    }

    /// Build the query from the flags.
    pub fn query(&self) -> Result<Query, QueryError> {
        Ok(Query::new(self.resource.clone())?
            .with_api_group(self.api_group.clone())
            .with_verb(self.verb.clone()))
    }

    /// Resolve how to reach the cluster.
    ///
    /// An explicit `--kubeconfig` wins, then `<home>/.kube/config`. With
    /// neither (or an explicitly empty path) the in-cluster configuration is used.
    pub fn cluster_access(&self) -> Result<ClusterAccess, ConfigError> {
        let path = match &self.kubeconfig {
            Some(path) => Some(path.clone()),
            None => default_kubeconfig_path(),
        };

        match path {
            Some(path) if !path.as_os_str().is_empty() => {
                if !path.exists() {
                    return Err(ConfigError::KubeconfigNotFound(path));
                }
                Ok(ClusterAccess::Kubeconfig(path))
            }
            _ => Ok(ClusterAccess::InCluster),
        }
    }
}

/// `<home>/.kube/config`, where home is `HOME` or, failing that, `USERPROFILE`.
pub fn default_kubeconfig_path() -> Option<PathBuf> {
    home_dir(|key| std::env::var(key).ok()).map(|home| kubeconfig_in(&home))
}

fn kubeconfig_in(home: &Path) -> PathBuf {
    home.join(".kube").join("config")
}

fn home_dir<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    ["HOME", "USERPROFILE"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(args: &[&str]) -> FinderConfig {
        let mut argv = vec!["kube-role-finder"];
        argv.extend_from_slice(args);
        FinderConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_flag_defaults() {
        let config = parse(&[]);
        assert!(config.kubeconfig.is_none());
        assert_eq!(config.api_group, "");
        assert_eq!(config.resource, "");
        assert_eq!(config.verb, "");
        assert!(config.width.is_none());
        assert!(config.wants_usage());
    }

    #[test]
    fn test_flags_parse() {
        let config = parse(&[
            "--kubeconfig",
            "/etc/kube/admin.conf",
            "--apiGroup",
            "apps",
            "--resource",
            "deployments",
            "--verb",
            "get",
            "--width",
            "120",
        ]);
        assert_eq!(config.kubeconfig, Some(PathBuf::from("/etc/kube/admin.conf")));
        assert_eq!(config.width, Some(120));
        assert!(!config.wants_usage());

        let query = config.query().unwrap();
        assert_eq!(query.api_group(), "apps");
        assert_eq!(query.resource(), "deployments");
        assert_eq!(query.verb(), "get");
    }

    #[test]
    fn test_zero_width_rejected() {
        let result = FinderConfig::try_parse_from(["kube-role-finder", "--width", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_query_without_resource_fails() {
        assert_eq!(parse(&[]).query(), Err(QueryError::EmptyResource));
    }

    #[test]
    fn test_home_dir_prefers_home() {
        let env: HashMap<&str, &str> = [("HOME", "/home/ops"), ("USERPROFILE", "C:\\Users\\ops")]
            .into_iter()
            .collect();
        let home = home_dir(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(home, Some(PathBuf::from("/home/ops")));
    }

    #[test]
    fn test_home_dir_falls_back_to_userprofile() {
        let env: HashMap<&str, &str> = [("HOME", ""), ("USERPROFILE", "C:\\Users\\ops")]
            .into_iter()
            .collect();
        let home = home_dir(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(home, Some(PathBuf::from("C:\\Users\\ops")));

        assert_eq!(home_dir(|_| None), None);
    }

    #[test]
    fn test_kubeconfig_location() {
        assert_eq!(
            kubeconfig_in(Path::new("/home/ops")),
            PathBuf::from("/home/ops/.kube/config")
        );
    }

    #[test]
    fn test_explicit_kubeconfig_must_exist() {
        let config = FinderConfig {
            kubeconfig: Some(PathBuf::from("/definitely/not/here/config")),
            ..Default::default()
        };
        assert!(matches!(
            config.cluster_access(),
            Err(ConfigError::KubeconfigNotFound(_))
        ));
    }

    #[test]
    fn test_existing_kubeconfig_is_used() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = FinderConfig {
            kubeconfig: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(
            config.cluster_access().unwrap(),
            ClusterAccess::Kubeconfig(file.path().to_path_buf())
        );
    }

    #[test]
    fn test_empty_kubeconfig_means_in_cluster() {
        let config = FinderConfig {
            kubeconfig: Some(PathBuf::new()),
            ..Default::default()
        };
        assert_eq!(config.cluster_access().unwrap(), ClusterAccess::InCluster);
    }

    #[test]
    fn test_resource_is_passed_through_unchanged() {
        let config = parse(&["--resource", " pods"]);
        assert!(!config.wants_usage());
        assert_eq!(config.query().unwrap().resource(), " pods");

        let config = parse(&["--resource", "  "]);
        assert!(!config.wants_usage());
        assert_eq!(config.query().unwrap().resource(), "  ");
    }
}
