use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
}

/// Errors surfaced by the request path. Classification of API error bodies
/// happens once, at the response boundary; callers receive exactly one of
/// these kinds.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The service rejected a request parameter value.
    #[error("Invalid parameter value: {message}")]
    Parameter {
        parameter: Option<String>,
        message: String,
    },
    #[error("API rate limit exceeded: {message}")]
    RateLimitExceeded { message: String },
    #[error("Invalid API key: {message}")]
    InvalidApiKey { message: String },
    /// Any other named error reported by the service.
    #[error("{code}: {message}")]
    Api { code: String, message: String },
    /// Unclassified HTTP or network failure. Network-level failures that
    /// never produced a response carry status 0.
    #[error("HTTP error: {status} {message}")]
    Http { status: u16, message: String },
    /// A success response whose body could not be decoded.
    #[error("Failed to decode response: {message}")]
    Decode { message: String },
}

impl ApiError {
    /// HTTP status attached to an unclassified failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    Parse { message: String },
    #[error("Configuration serialize error: {message}")]
    Serialize { message: String },
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("No API key configured")]
    MissingApiKey,
    #[error("Configuration directory not found")]
    DirNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let api_err = ApiError::Parameter {
            parameter: Some("name".to_string()),
            message: "something".to_string(),
        };
        assert_eq!(
            format!("{}", api_err),
            "Invalid parameter value: something"
        );

        let api_err = ApiError::RateLimitExceeded {
            message: "API rate limit exceeded".to_string(),
        };
        assert_eq!(
            format!("{}", api_err),
            "API rate limit exceeded: API rate limit exceeded"
        );

        let api_err = ApiError::Http {
            status: 500,
            message: "oh no".to_string(),
        };
        assert!(matches!(api_err, ApiError::Http { status: 500, .. }));
        assert_eq!(format!("{}", api_err), "HTTP error: 500 oh no");
    }

    #[test]
    fn test_named_api_error_display_is_code_colon_message() {
        let api_err = ApiError::Api {
            code: "CODE".to_string(),
            message: "message".to_string(),
        };
        assert_eq!(format!("{}", api_err), "CODE: message");
    }

    #[test]
    fn test_api_error_status() {
        let api_err = ApiError::Http {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert_eq!(api_err.status(), Some(502));

        let api_err = ApiError::InvalidApiKey {
            message: "nope".to_string(),
        };
        assert_eq!(api_err.status(), None);
    }

    #[test]
    fn test_config_error_display() {
        let config_err = ConfigError::InvalidValue {
            field: "api_key".to_string(),
            reason: "cannot be empty".to_string(),
        };
        assert_eq!(
            format!("{}", config_err),
            "Invalid configuration value for 'api_key': cannot be empty"
        );

        assert_eq!(
            format!("{}", ConfigError::MissingApiKey),
            "No API key configured"
        );
    }

    #[test]
    fn test_app_error_wraps_api_error() {
        let app_err = AppError::from(ApiError::Api {
            code: "CODE".to_string(),
            message: "message".to_string(),
        });
        assert_eq!(format!("{}", app_err), "ApiError: CODE: message");
        assert!(matches!(app_err, AppError::Api(ApiError::Api { .. })));
    }

    #[test]
    fn test_app_error_wraps_config_error() {
        let app_err = AppError::from(ConfigError::MissingApiKey);
        assert_eq!(format!("{}", app_err), "ConfigError: No API key configured");
        assert!(matches!(app_err, AppError::Config(_)));
    }
}
