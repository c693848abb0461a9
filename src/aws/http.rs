//! Lightweight AWS HTTP Client with SigV4 signing
//!
//! Speaks the REST-JSON protocol used by the Chime SDK Voice API directly
//! over reqwest instead of pulling in the service SDK.

use anyhow::{anyhow, Result};
use aws_sigv4::http_request::{sign, SignableBody, SignableRequest, SigningSettings};
use aws_sigv4::sign::v4::SigningParams;
use aws_smithy_runtime_api::client::identity::Identity;
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::SystemTime;
use thiserror::Error;
use tracing::{debug, trace, warn};

use super::credentials::Credentials;
use crate::operation::{PreparedRequest, ServiceClient};

const EUSC_PREFIX: &str = "eusc-";

/// Mask sensitive credential values for logging
fn mask_credential(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

/// AWS Service definition
#[derive(Debug, Clone)]
pub struct ServiceDefinition {
    /// Service signing name
    pub signing_name: &'static str,
    /// Service endpoint prefix
    pub endpoint_prefix: &'static str,
}

/// Amazon Chime SDK Voice
pub const CHIME_SDK_VOICE: ServiceDefinition = ServiceDefinition {
    signing_name: "chime",
    endpoint_prefix: "voice-chime",
};

/// A fault returned by the service, kept exactly as AWS reported it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code} (HTTP {status}): {message}")]
pub struct ServiceFault {
    pub status: u16,
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "Code", alias = "code", alias = "__type")]
    code: Option<String>,
    #[serde(rename = "Message", alias = "message")]
    message: Option<String>,
}

/// Build a [`ServiceFault`] from an error response.
///
/// The `x-amzn-ErrorType` header wins over the body code; both may carry a
/// suffix (`Code:uri`) or a namespace (`ns#Code`) that is stripped.
pub fn parse_service_fault(
    status: u16,
    error_type: Option<&str>,
    request_id: Option<String>,
    body: &str,
) -> ServiceFault {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

    let code = error_type
        .or(parsed.code.as_deref())
        .map(sanitize_error_code)
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| format!("Http{}", status));

    let message = parsed.message.unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            format!("request failed with status {}", status)
        } else {
            trimmed.chars().take(500).collect()
        }
    });

    ServiceFault {
        status,
        code,
        message,
        request_id,
    }
}

fn sanitize_error_code(raw: &str) -> String {
    let code = raw.split(':').next().unwrap_or(raw);
    let code = code.rsplit('#').next().unwrap_or(code);
    code.trim().to_string()
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

/// AWS HTTP Client
pub struct AwsHttpClient {
    http_client: Client,
    credentials: Credentials,
    region: String,
    endpoint_url: Option<String>,
    service: ServiceDefinition,
}

impl AwsHttpClient {
    /// Create a new AWS HTTP client
    pub fn new(credentials: Credentials, region: &str, endpoint_url: Option<String>) -> Self {
        debug!(
            "Creating AWS HTTP client for region: {}, access_key: {}, endpoint_url: {:?}",
            region,
            mask_credential(&credentials.access_key_id),
            endpoint_url
        );
        Self {
            http_client: Client::new(),
            credentials,
            region: region.to_string(),
            endpoint_url: endpoint_url.map(|url| url.trim_end_matches('/').to_string()),
            service: CHIME_SDK_VOICE,
        }
    }

    /// Get the endpoint URL for the service
    pub fn get_endpoint(&self) -> String {
        // A custom endpoint applies as-is (LocalStack, VPC endpoints, tests)
        if let Some(ref endpoint) = self.endpoint_url {
            return endpoint.clone();
        }

        format!(
            "https://{}.{}.{}",
            self.service.endpoint_prefix,
            self.region,
            Self::endpoint_domain(&self.region)
        )
    }

    /// Determine the endpoint domain for a region (standard vs. sovereign)
    fn endpoint_domain(region: &str) -> &'static str {
        if region.starts_with(EUSC_PREFIX) {
            "amazonaws.eu"
        } else {
            "amazonaws.com"
        }
    }

    /// Make a REST-JSON request and return the raw response body
    pub async fn rest_json_request(
        &self,
        method: &str,
        path: &str,
        query: &[(String, String)],
        body: Option<&str>,
    ) -> Result<String> {
        debug!(
            "REST-JSON request: service={}, method={}, path={}",
            self.service.signing_name, method, path
        );
        trace!("REST-JSON query: {:?}", query);
        trace!("REST-JSON body: {:?}", body);

        let endpoint = self.get_endpoint();
        let mut url = url::Url::parse(&format!("{}{}", endpoint, path))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        debug!("URL: {}", url);

        let mut headers = Vec::new();
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }

        self.signed_request(method, url, body.unwrap_or(""), headers)
            .await
    }

    /// Make a signed request
    async fn signed_request(
        &self,
        method: &str,
        url: url::Url,
        body: &str,
        extra_headers: Vec<(String, String)>,
    ) -> Result<String> {
        let host = url.host_str().ok_or_else(|| anyhow!("Invalid URL: {}", url))?;
        let host = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };
        let path_and_query = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };

        let mut headers = vec![("host".to_string(), host)];
        headers.extend(extra_headers.iter().cloned());

        // Create identity for signing
        let creds = aws_credential_types::Credentials::new(
            &self.credentials.access_key_id,
            &self.credentials.secret_access_key,
            self.credentials.session_token.clone(),
            None,
            "voicectl",
        );
        let identity: Identity = creds.into();

        let signing_params = SigningParams::builder()
            .identity(&identity)
            .region(&self.region)
            .name(self.service.signing_name)
            .time(SystemTime::now())
            .settings(SigningSettings::default())
            .build()?
            .into();

        let signable_request = SignableRequest::new(
            method,
            &path_and_query,
            headers.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            SignableBody::Bytes(body.as_bytes()),
        )?;

        let (signing_instructions, _signature) =
            sign(signable_request, &signing_params)?.into_parts();

        let mut request = match method {
            "GET" => self.http_client.get(url.clone()),
            "POST" => self.http_client.post(url.clone()),
            "PUT" => self.http_client.put(url.clone()),
            "DELETE" => self.http_client.delete(url.clone()),
            _ => return Err(anyhow!("Unsupported HTTP method: {}", method)),
        };

        for (name, value) in signing_instructions.headers() {
            request = request.header(name.to_string(), value.to_string());
        }

        for (k, v) in &extra_headers {
            request = request.header(k, v);
        }

        if !body.is_empty() {
            request = request.body(body.to_string());
        }

        trace!("Sending {} request to {}", method, url);
        let response = request.send().await?;
        let status = response.status();
        let error_type = header_str(response.headers(), "x-amzn-errortype");
        let request_id = header_str(response.headers(), "x-amzn-requestid");
        let text = response.text().await?;

        debug!("Response status: {}", status);
        trace!(
            "Response body (first 2000 chars): {}",
            text.chars().take(2000).collect::<String>()
        );

        if !status.is_success() {
            warn!(
                "AWS request failed: status={}, body={}",
                status,
                text.chars().take(500).collect::<String>()
            );
            return Err(parse_service_fault(
                status.as_u16(),
                error_type.as_deref(),
                request_id,
                &text,
            )
            .into());
        }

        Ok(text)
    }
}

impl ServiceClient for AwsHttpClient {
    fn endpoint(&self) -> String {
        self.get_endpoint()
    }

    async fn send(&self, request: &PreparedRequest) -> Result<Value> {
        let body = request
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let text = self
            .rest_json_request(
                request.method.as_str(),
                &request.path,
                &request.query,
                body.as_deref(),
            )
            .await?;

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| {
            anyhow!(
                "Invalid JSON in {} response: {}",
                request.operation,
                e
            )
        })
    }
}
