//! Cluster access.
//!
//! [`RoleSource`] is the seam between the lookup and the cluster:
//! [`KubeRoleSource`] lists ClusterRoles from a real API server, and
//! [`StaticRoleSource`] serves a fixed set of roles.

use async_trait::async_trait;
use k8s_openapi::api::rbac::v1::{ClusterRole, PolicyRule};
use kube::api::{Api, ListParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use rolefinder_rbac::{Role, Rule};
use tracing::{debug, info, instrument};

use crate::config::ClusterAccess;
use crate::error::SourceError;

/// Something that can list every ClusterRole in a cluster.
#[async_trait]
pub trait RoleSource: Send + Sync {
    /// Fetch a snapshot of all ClusterRoles.
    async fn list_cluster_roles(&self) -> Result<Vec<Role>, SourceError>;
}

/// Lists ClusterRoles through the Kubernetes API.
#[derive(Clone)]
pub struct KubeRoleSource {
    /// Kubernetes client instance.
    client: Client,
}

impl KubeRoleSource {
    /// Wrap an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from a resolved configuration.
    pub fn from_config(config: Config) -> Result<Self, SourceError> {
        debug!(cluster_url = %config.cluster_url, "creating cluster client");
        let client = Client::try_from(config).map_err(SourceError::Client)?;
        Ok(Self::new(client))
    }

    /// Load credentials and connect.
    ///
    /// Uses the current context of the kubeconfig, or the service account when
    /// running in a pod.
    #[instrument(skip(access))]
    pub async fn connect(access: &ClusterAccess) -> Result<Self, SourceError> {
        let config = match access {
            ClusterAccess::Kubeconfig(path) => {
                info!(path = %path.display(), "loading kubeconfig");
                let kubeconfig_error = |e: kube::config::KubeconfigError| SourceError::Kubeconfig {
                    path: path.clone(),
                    message: e.to_string(),
                };
                let kubeconfig = Kubeconfig::read_from(path).map_err(kubeconfig_error)?;
                Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                    .await
                    .map_err(kubeconfig_error)?
            }
            ClusterAccess::InCluster => {
                info!("loading in-cluster configuration");
                Config::incluster().map_err(|e| SourceError::InCluster(e.to_string()))?
            }
        };

        Self::from_config(config)
    }
}

#[async_trait]
impl RoleSource for KubeRoleSource {
    #[instrument(skip(self))]
    async fn list_cluster_roles(&self) -> Result<Vec<Role>, SourceError> {
        let api: Api<ClusterRole> = Api::all(self.client.clone());
        let list = api
            .list(&ListParams::default())
            .await
            .map_err(SourceError::Listing)?;

        debug!(count = list.items.len(), "listed cluster roles");
        Ok(list.items.iter().map(role_from_cluster_role).collect())
    }
}

/// A fixed set of roles, for offline use and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticRoleSource {
    roles: Vec<Role>,
}

impl StaticRoleSource {
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles }
    }
}

#[async_trait]
impl RoleSource for StaticRoleSource {
    async fn list_cluster_roles(&self) -> Result<Vec<Role>, SourceError> {
        Ok(self.roles.clone())
    }
}

/// Convert an API object into the matcher's model.
///
/// Missing names and sets become empty. Non-resource URLs and resource names
/// play no part in matching and are dropped.
pub fn role_from_cluster_role(cluster_role: &ClusterRole) -> Role {
    let rules = cluster_role
        .rules
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(rule_from_policy_rule)
        .collect();

    Role::new(cluster_role.metadata.name.clone().unwrap_or_default(), rules)
}

fn rule_from_policy_rule(rule: &PolicyRule) -> Rule {
    Rule {
        api_groups: rule.api_groups.clone().unwrap_or_default(),
        resources: rule.resources.clone().unwrap_or_default(),
        verbs: rule.verbs.clone(),
    }
}
