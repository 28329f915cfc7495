//! Error types for role lookups
//!
//! This module defines the errors that can occur while configuring the tool,
//! talking to the cluster, and building the query.

use rolefinder_rbac::QueryError;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The kubeconfig file does not exist.
    #[error("kubeconfig not found: {}", .0.display())]
    KubeconfigNotFound(PathBuf),
}

/// Errors from the cluster collaborator.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The kubeconfig could not be read or resolved to a cluster.
    #[error("failed to load kubeconfig {}: {message}", .path.display())]
    Kubeconfig {
        /// Kubeconfig path.
        path: PathBuf,
        /// Underlying error.
        message: String,
    },

    /// In-cluster service account configuration is unavailable.
    #[error("failed to load in-cluster configuration: {0}")]
    InCluster(String),

    /// The client could not be built from the configuration.
    #[error("failed to create cluster client: {0}")]
    Client(#[source] kube::Error),

    /// The ClusterRole list request failed.
    #[error("failed to list cluster roles: {0}")]
    Listing(#[source] kube::Error),
}

/// Top level error for a lookup.
#[derive(Debug, Error)]
pub enum FinderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Result type for lookups.
pub type FinderResult<T> = Result<T, FinderError>;
