//! # Kube Role Finder
//!
//! Finds the ClusterRoles in a Kubernetes cluster that grant access to a
//! resource, optionally narrowed to an API group and a verb.
//!
//! ## Overview
//!
//! The rolefinder-cli crate handles:
//! - **Configuration**: Command line flags and the kubeconfig location
//! - **Cluster**: Listing ClusterRoles through the Kubernetes API
//! - **Pipeline**: Matching roles and rendering the report
//!
//! ## Usage
//!
//! ```bash
//! # Which ClusterRoles can read pods?
//! kube-role-finder --resource pods --verb get
//!
//! # Which ClusterRoles touch deployments in the apps group?
//! kube-role-finder --apiGroup apps --resource deployments
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use rolefinder_cli::{run, ClusterAccess, KubeRoleSource};
//! use rolefinder_output::SttyProbe;
//! use rolefinder_rbac::Query;
//! use std::path::PathBuf;
//!
//! async fn lookup() -> rolefinder_cli::FinderResult<()> {
//!     let access = ClusterAccess::Kubeconfig(PathBuf::from("/home/ops/.kube/config"));
//!     let source = KubeRoleSource::connect(&access).await?;
//!     let query = Query::new("secrets")?.with_verb("get");
//!
//!     print!("{}", run(&source, &SttyProbe::new(), &query).await?);
//!     Ok(())
//! }
//! ```

pub mod cluster;
pub mod config;
pub mod error;
pub mod run;

// Re-export main types
pub use cluster::{role_from_cluster_role, KubeRoleSource, RoleSource, StaticRoleSource};
pub use config::{default_kubeconfig_path, ClusterAccess, FinderConfig};
pub use error::{ConfigError, FinderError, FinderResult, SourceError};
pub use run::{find_roles, run};
