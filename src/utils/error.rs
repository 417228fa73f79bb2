use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlphaStreamError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("HTTP {status} from {url}: {}", summarize(.messages, .body))]
    HttpStatusError {
        status: u16,
        url: String,
        messages: Vec<String>,
        body: String,
    },

    #[error("Request rejected by service: {}", .messages.join("; "))]
    RequestRejected { messages: Vec<String> },

    #[error("Invalid request field '{field}': {reason}")]
    InvalidRequestError { field: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

fn summarize(messages: &[String], body: &str) -> String {
    if !messages.is_empty() {
        return messages.join("; ");
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "<empty body>".to_string()
    } else if trimmed.chars().count() > 200 {
        format!("{}...", trimmed.chars().take(200).collect::<String>())
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Remote,
    Data,
    Request,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlphaStreamError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) => ErrorCategory::Network,
            Self::HttpStatusError { .. } | Self::RequestRejected { .. } => ErrorCategory::Remote,
            Self::SerializationError(_) => ErrorCategory::Data,
            Self::InvalidRequestError { .. } => ErrorCategory::Request,
            Self::UrlError(_)
            | Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::RequestRejected { .. } => ErrorSeverity::Low,
            Self::ApiError(_) => ErrorSeverity::Medium,
            Self::HttpStatusError { status, .. } if *status >= 500 || *status == 429 => {
                ErrorSeverity::Medium
            }
            Self::HttpStatusError { .. }
            | Self::SerializationError(_)
            | Self::InvalidRequestError { .. } => ErrorSeverity::High,
            Self::UrlError(_)
            | Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 暫時性錯誤（連線失敗、逾時、429、5xx）可以重試
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ApiError(e) => e.is_timeout() || e.is_connect(),
            Self::HttpStatusError { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) => "Check network connectivity and the configured base URL, then retry",
            Self::HttpStatusError { status: 401 | 403, .. } => {
                "Verify the client id and API token"
            }
            Self::HttpStatusError { status: 404, .. } => {
                "Check that the alpha or author id exists"
            }
            Self::HttpStatusError { status, .. } if *status >= 500 || *status == 429 => {
                "The service is busy or unavailable, retry later"
            }
            Self::HttpStatusError { .. } => "Review the request parameters",
            Self::RequestRejected { .. } => "Read the service messages and adjust the request",
            Self::SerializationError(_) => {
                "The service returned an unexpected payload, check the base URL and API version"
            }
            Self::InvalidRequestError { .. } => "Fix the request field named in the error",
            Self::UrlError(_) => "Use an absolute http(s) base URL",
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => "Review the configuration file and flags",
            Self::MissingConfigError { .. } => {
                "Provide the value via flag, config file, or environment variable"
            }
            Self::IoError(_) => "Check file paths and permissions",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(_) => format!("Could not reach AlphaStream: {}", self),
            Self::HttpStatusError { status, .. } => {
                format!("AlphaStream answered with HTTP {}: {}", status, self)
            }
            Self::RequestRejected { messages } => {
                format!("AlphaStream declined the request: {}", messages.join("; "))
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AlphaStreamError>;
