//! Generic operation dispatcher
//!
//! Build → invoke → project, once per invocation. Every registered operation
//! goes through this single path; the descriptor in the context decides the
//! route, the request shape and the default projection.

use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::builder::build_request;
use super::context::InvocationContext;
use super::invoker::{invoke, ServiceClient};
use super::projector::{project, Selector};
use super::Outcome;
use crate::error::Result;

/// Run one invocation.
///
/// `select` is the raw `--select` value; `None` uses the operation's default
/// field. The context is consumed: it belongs to this invocation only.
pub async fn dispatch<C: ServiceClient>(
    client: &C,
    ctx: InvocationContext<'_>,
    select: Option<&str>,
    cancel: &CancellationToken,
) -> Result<Outcome<Value>> {
    let descriptor = ctx.descriptor();

    if let Some(advisory) = descriptor.deprecated {
        warn!("{} is deprecated: {}", descriptor.name, advisory);
    }

    let selector = match select {
        Some(raw) => Selector::parse(raw)?,
        None => Selector::default_for(descriptor),
    };
    selector.validate(descriptor)?;

    let request = build_request(&ctx)?;

    let response = match invoke(client, &request, cancel).await? {
        Outcome::Completed(response) => response,
        Outcome::Cancelled => return Ok(Outcome::Cancelled),
    };

    debug!("Projecting {} response with {:?}", descriptor.name, selector);
    project(&ctx, &selector, response).map(Outcome::Completed)
}
