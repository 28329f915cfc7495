//! The lookup pipeline: list roles, keep the ones that match, render.

use rolefinder_output::{Report, TerminalInfo};
use rolefinder_rbac::{matching_role_names, Query};
use tracing::{info, instrument};

use crate::cluster::RoleSource;
use crate::error::FinderResult;

/// Names of the ClusterRoles from `source` that grant `query`.
///
/// A failed listing is an error, never an empty result.
#[instrument(skip(source), fields(resource = query.resource()))]
pub async fn find_roles<S>(source: &S, query: &Query) -> FinderResult<Vec<String>>
where
    S: RoleSource + ?Sized,
{
    let roles = source.list_cluster_roles().await?;
    let names = matching_role_names(&roles, query);
    info!(total = roles.len(), matched = names.len(), "matched cluster roles");
    Ok(names)
}

/// Run a lookup and return the text to print.
pub async fn run<S, T>(source: &S, terminal: &T, query: &Query) -> FinderResult<String>
where
    S: RoleSource + ?Sized,
    T: TerminalInfo + ?Sized,
{
    let names = find_roles(source, query).await?;
    // Only probe the terminal when there is something to lay out
    let width = if names.is_empty() {
        0
    } else {
        terminal.size().columns()
    };
    Ok(Report::new(query.resource(), &names).render(width))
}
