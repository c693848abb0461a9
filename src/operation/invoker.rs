//! Service invoker
//!
//! Sends one [`PreparedRequest`] through a [`ServiceClient`], exactly once.
//! Failures are classified so the caller can tell a network problem (with
//! the endpoint that was tried) from a fault returned by the service.

use std::future::Future;
use std::io;

use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::builder::PreparedRequest;
use super::Outcome;
use crate::aws::http::ServiceFault;
use crate::error::{Error, Result};

/// A configured client able to send prepared requests.
///
/// Implementations report remote faults as a [`ServiceFault`] inside the
/// returned `anyhow::Error` so the invoker can pass them through verbatim.
pub trait ServiceClient: Send + Sync {
    /// Endpoint requests are sent to, used in transport error messages
    fn endpoint(&self) -> String;

    /// Send the request and return the decoded JSON response
    fn send(&self, request: &PreparedRequest) -> impl Future<Output = anyhow::Result<Value>> + Send;
}

/// Issue a single call, honouring `cancel` while it is in flight
pub async fn invoke<C: ServiceClient>(
    client: &C,
    request: &PreparedRequest,
    cancel: &CancellationToken,
) -> Result<Outcome<Value>> {
    if cancel.is_cancelled() {
        debug!("Cancelled before sending {}", request.operation);
        return Ok(Outcome::Cancelled);
    }

    debug!(
        "Invoking {} ({} {})",
        request.operation,
        request.method.as_str(),
        request.path
    );

    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!("Cancelled in-flight {}", request.operation);
            return Ok(Outcome::Cancelled);
        }
        result = client.send(request) => result,
    };

    match result {
        Ok(response) => Ok(Outcome::Completed(response)),
        Err(err) => Err(classify_failure(err, client.endpoint())),
    }
}

/// Map a client failure onto the error taxonomy
fn classify_failure(err: anyhow::Error, endpoint: String) -> Error {
    let err = match err.downcast::<ServiceFault>() {
        Ok(fault) => return Error::Service(fault),
        Err(err) => err,
    };

    if is_network_failure(&err) {
        warn!("Network failure reaching {}: {:#}", endpoint, err);
        Error::Transport {
            endpoint,
            source: err,
        }
    } else {
        Error::Client(err)
    }
}

/// Whether any cause in the chain is a name-resolution, connect or timeout failure
pub(crate) fn is_network_failure(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        if let Some(e) = cause.downcast_ref::<reqwest::Error>() {
            if e.is_connect() || e.is_timeout() {
                return true;
            }
        }
        if let Some(e) = cause.downcast_ref::<io::Error>() {
            if matches!(
                e.kind(),
                io::ErrorKind::ConnectionRefused
                    | io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::NotConnected
                    | io::ErrorKind::AddrNotAvailable
                    | io::ErrorKind::TimedOut
            ) {
                return true;
            }
        }
        let msg = cause.to_string().to_lowercase();
        msg.contains("dns error")
            || msg.contains("failed to lookup address")
            || msg.contains("name or service not known")
            || msg.contains("no such host")
    })
}
