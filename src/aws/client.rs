//! AWS Client setup
//!
//! Resolves profile, region and credentials into a ready-to-use
//! [`AwsHttpClient`].

use anyhow::Result;
use std::env;
use tracing::debug;

use super::credentials::{get_profile_region, load_credentials};
use super::http::AwsHttpClient;
use crate::error::Error;

/// Region used when nothing else is configured
pub const FALLBACK_REGION: &str = "us-east-1";

/// Container for the configured AWS HTTP client
pub struct AwsClients {
    pub http: AwsHttpClient,
    pub region: String,
    pub profile: String,
}

impl AwsClients {
    /// Create the client for a profile, resolving the region if not given.
    /// Credential loading reads files, so it runs on a blocking thread.
    pub async fn new(
        profile: &str,
        region: Option<&str>,
        endpoint_url: Option<String>,
    ) -> Result<Self> {
        let profile_str = profile.to_string();
        let explicit_region = region.map(|r| r.to_string());

        let (credentials, region) = tokio::task::spawn_blocking(move || {
            let credentials = load_credentials(&profile_str)?;
            let region = resolve_region(explicit_region.as_deref(), &profile_str);
            anyhow::Ok((credentials, region))
        })
        .await??;

        debug!("Using profile '{}' in region {}", profile, region);
        let http = AwsHttpClient::new(credentials, &region, endpoint_url);

        Ok(Self {
            http,
            region,
            profile: profile.to_string(),
        })
    }
}

/// Region precedence: explicit (flag or AWS_REGION), AWS_DEFAULT_REGION,
/// the profile's `region`, then [`FALLBACK_REGION`]
pub fn resolve_region(explicit: Option<&str>, profile: &str) -> String {
    pick_region(
        explicit,
        env::var("AWS_DEFAULT_REGION").ok().as_deref(),
        || get_profile_region(profile),
    )
}

fn pick_region(
    explicit: Option<&str>,
    default_env: Option<&str>,
    profile_region: impl FnOnce() -> Option<String>,
) -> String {
    explicit
        .or(default_env)
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .map(|r| r.to_string())
        .or_else(profile_region)
        .unwrap_or_else(|| FALLBACK_REGION.to_string())
}

/// Short hint for common AWS failures, shown below the error message
pub fn error_hint(err: &Error) -> Option<&'static str> {
    match err {
        Error::Service(fault) => match fault.code.as_str() {
            "InvalidClientTokenId" | "SignatureDoesNotMatch" | "UnrecognizedClientException" => {
                Some("Invalid credentials - run 'aws configure'")
            }
            "ExpiredToken" | "ExpiredTokenException" => {
                Some("Credentials expired - refresh or reconfigure")
            }
            "AccessDenied" | "AccessDeniedException" | "ForbiddenException" => {
                Some("Access denied - check IAM permissions")
            }
            "ThrottledClientException" | "ThrottlingException" => {
                Some("Request throttled - try again later")
            }
            _ => None,
        },
        Error::Transport { .. } => Some("Connection failed - check network, region and --endpoint-url"),
        _ => None,
    }
}
