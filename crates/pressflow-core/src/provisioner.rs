//! Resolve/provision orchestrator
//!
//! Walks a resource definition's requirements in declared order,
//! accumulating fulfilled values, then hands the map to the
//! definition's provision call. Resolution delegates to the
//! definition; resolve-or-provision catches exactly one outcome —
//! `NoResourcesFound` — and substitutes a provisioning flow for it.
//! Every other error unwinds to the command boundary untouched.

use pressflow_api::{Resource, ResourceKind};
use tracing::debug;

use crate::context::Context;
use crate::definition;
use crate::error::{CoreError, Result};
use crate::requirement::Fulfilled;

/// Create a resource of the given kind
///
/// Requirement walk: for each declared requirement, a value seeded by
/// the caller in `pre_fulfilled` wins; otherwise the requirement is
/// fulfilled against the context and the values accumulated so far.
pub async fn provision(
    ctx: &Context<'_>,
    kind: ResourceKind,
    pre_fulfilled: Fulfilled,
) -> Result<Resource> {
    let definition = definition::provisionable(kind).ok_or(CoreError::NotProvisionable(kind))?;

    let mut fulfilled = Fulfilled::new();
    for (name, requirement) in definition.requirements() {
        let value = match pre_fulfilled.get(name) {
            Some(value) => value.clone(),
            None => requirement.fulfill(ctx, &fulfilled).await?,
        };
        debug!(kind = %kind, requirement = name, "requirement fulfilled");
        fulfilled.insert(name, value);
    }

    definition.provision(ctx.api, &fulfilled).await
}

/// Look up an existing resource of the given kind
pub async fn resolve(
    ctx: &Context<'_>,
    kind: ResourceKind,
    question: &str,
    identifier: Option<&str>,
) -> Result<Resource> {
    let definition = definition::resolvable(kind).ok_or(CoreError::NotResolvable(kind))?;
    definition.resolve(ctx, question, identifier).await
}

/// Look up a resource, provisioning one when none exist yet
///
/// Acquisition runs resolution first; only the "zero candidates"
/// outcome falls through to provisioning, carrying the caller's
/// pre-seeded constraints. A resolution that found candidates but
/// failed for another reason (not found, ambiguous) stays a failure.
pub async fn resolve_or_provision(
    ctx: &Context<'_>,
    kind: ResourceKind,
    question: &str,
    identifier: Option<&str>,
    pre_fulfilled: Fulfilled,
) -> Result<Resource> {
    match resolve(ctx, kind, question, identifier).await {
        Err(CoreError::NoResourcesFound { kind, .. }) => {
            debug!(kind = %kind, "no existing resources, provisioning instead");
            ctx.output
                .info(&format!("Your team has no {} yet, let's create one.", kind));
            provision(ctx, kind, pre_fulfilled).await
        }
        outcome => outcome,
    }
}
