use crate::error::{ApiError, ConfigError};
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("usda-client/", env!("CARGO_PKG_VERSION"));

/// Public authority shared by every Data.gov hosted API.
pub const DEFAULT_BASE_URL: &str = "http://api.nal.usda.gov";

/// Logical API operations, keyed to their URI path suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UriAction {
    List,
    Report,
    Search,
    Nutrients,
}

impl UriAction {
    /// Path suffix appended to the service's URI part.
    pub fn path_suffix(self) -> &'static str {
        match self {
            UriAction::List => "list",
            UriAction::Report => "reports",
            UriAction::Search => "search",
            UriAction::Nutrients => "nutrients",
        }
    }
}

/// Client for one Data.gov hosted service.
///
/// Holds the immutable per-service configuration (path segment, API key,
/// response-format flag) and a shared HTTP client. Cheap to clone; all
/// configuration is read-only after construction.
#[derive(Debug, Clone)]
pub struct DataGovClient {
    client: Client,
    base_url: String,
    uri_part: String,
    key: String,
    use_format: bool,
}

impl DataGovClient {
    /// Create a client for a service hosted at the public authority.
    pub fn new(uri_part: &str, key: &str) -> crate::Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, uri_part, key)
    }

    /// Create a client against a custom authority (tests, mirrors).
    pub fn with_base_url(base_url: &str, uri_part: &str, key: &str) -> crate::Result<Self> {
        if key.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_key".to_string(),
                reason: "API key cannot be empty".to_string(),
            }
            .into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Http {
                status: 0,
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(DataGovClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            uri_part: uri_part.trim_matches('/').to_string(),
            key: key.to_string(),
            use_format: true,
        })
    }

    /// Drop the explicit `format=json` query parameter from requests.
    pub fn without_format(mut self) -> Self {
        self.use_format = false;
        self
    }

    pub fn uri_part(&self) -> &str {
        &self.uri_part
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn use_format(&self) -> bool {
        self.use_format
    }

    /// Compose the target URI for an action. Pure, no I/O.
    pub fn build_uri(&self, action: UriAction) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            self.uri_part,
            action.path_suffix()
        )
    }

    /// Build the URI for `action`, attach the API key and format parameters,
    /// and execute a single GET. The decoded body is returned unchanged;
    /// whatever the request layer raises propagates as-is.
    pub async fn run_request<T>(
        &self,
        action: UriAction,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.build_uri(action);

        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 2);
        query.push(("api_key", self.key.as_str()));
        if self.use_format {
            query.push(("format", "json"));
        }
        query.extend_from_slice(params);

        api_request(&self.client, &url, &query).await
    }
}

/// Perform one GET against `url` and decode the JSON body.
///
/// Exactly one network call per invocation; no retries, no caching.
/// Non-success responses go through [`classify_status_error`]; a success
/// response whose body fails to decode is a defect and surfaces as
/// [`ApiError::Decode`].
pub async fn api_request<T>(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    debug!("GET {}", url);

    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| ApiError::Http {
            status: 0,
            message: format!("Request failed: {}", e),
        })?;

    let status = response.status();
    debug!("{} responded {}", url, status);

    if status.is_success() {
        response.json::<T>().await.map_err(|e| ApiError::Decode {
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let error = classify_status_error(status, &body);
        warn!("{} failed: {}", url, error);
        Err(error)
    }
}

/// Map a non-success response to an error kind.
///
/// Checks run in order: parameter errors on 400 bodies, then the named
/// Data.gov error codes, then any other `error` object, and finally the
/// raw status for bodies with no recognized shape. Pure; independent of
/// the transport layer.
pub fn classify_status_error(status: StatusCode, body: &str) -> ApiError {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if status == StatusCode::BAD_REQUEST {
            if let Some(message) = value
                .pointer("/errors/error/0/message")
                .and_then(Value::as_str)
            {
                let parameter = value
                    .pointer("/errors/error/0/parameter")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                return ApiError::Parameter {
                    parameter,
                    message: message.to_string(),
                };
            }
        }

        if let Some(error) = value.get("error") {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string();
            match error.get("code").and_then(Value::as_str) {
                Some("OVER_RATE_LIMIT") => return ApiError::RateLimitExceeded { message },
                Some("API_KEY_INVALID") => return ApiError::InvalidApiKey { message },
                Some(code) => {
                    return ApiError::Api {
                        code: code.to_string(),
                        message,
                    };
                }
                None => {}
            }
        }
    }

    ApiError::Http {
        status: status.as_u16(),
        message: body.to_string(),
    }
}
