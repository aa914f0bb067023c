//! Error types for the Haven client.

use std::fmt;
use thiserror::Error;

/// Result type alias for Haven operations.
pub type HavenResult<T> = Result<T, HavenError>;

/// Error kinds for categorizing Haven errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HavenErrorKind {
    // Configuration errors
    /// Invalid base URL.
    InvalidBaseUrl,
    /// Invalid configuration.
    InvalidConfiguration,
    /// Credentials are required but missing.
    MissingCredentials,

    // Authentication errors
    /// Bad credentials (401).
    BadCredentials,
    /// Access forbidden (403).
    Forbidden,

    // Request errors
    /// Request validation failed (400).
    ValidationError,
    /// Invalid parameter.
    InvalidParameter,
    /// Resource not found (404), or an expected record was absent.
    NotFound,
    /// Resource conflict (409).
    Conflict,
    /// The call completed but its envelope reported failure.
    RequestFailed,

    // Network errors
    /// Connection failed.
    ConnectionFailed,
    /// Request timeout.
    Timeout,

    // Server errors
    /// Internal server error (500).
    InternalError,
    /// Service unavailable (502, 503).
    ServiceUnavailable,

    // Response errors
    /// Failed to deserialize response.
    DeserializationError,

    // Local errors
    /// Local file system failure.
    Io,

    /// Wraps one or more inner errors.
    Aggregate,

    // Generic
    /// Unknown error.
    Unknown,
}

impl fmt::Display for HavenErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBaseUrl => write!(f, "invalid_base_url"),
            Self::InvalidConfiguration => write!(f, "invalid_configuration"),
            Self::MissingCredentials => write!(f, "missing_credentials"),
            Self::BadCredentials => write!(f, "bad_credentials"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::ValidationError => write!(f, "validation_error"),
            Self::InvalidParameter => write!(f, "invalid_parameter"),
            Self::NotFound => write!(f, "not_found"),
            Self::Conflict => write!(f, "conflict"),
            Self::RequestFailed => write!(f, "request_failed"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::InternalError => write!(f, "internal_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::DeserializationError => write!(f, "deserialization_error"),
            Self::Io => write!(f, "io"),
            Self::Aggregate => write!(f, "aggregate"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Haven API error with detailed information.
#[derive(Error, Debug)]
pub struct HavenError {
    /// Error kind.
    kind: HavenErrorKind,
    /// Error message.
    message: String,
    /// HTTP status code.
    status_code: Option<u16>,
    /// Inner errors of an aggregate.
    inner: Vec<HavenError>,
    /// Underlying cause.
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for HavenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(code) = self.status_code {
            write!(f, " (HTTP {})", code)?;
        }
        Ok(())
    }
}

impl HavenError {
    /// Creates a new Haven error.
    pub fn new(kind: HavenErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            inner: Vec::new(),
            cause: None,
        }
    }

    /// Sets the HTTP status code.
    pub fn with_status(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Sets the underlying cause.
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Gets the error kind.
    pub fn kind(&self) -> &HavenErrorKind {
        &self.kind
    }

    /// Gets the error message without the kind prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the HTTP status code.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Gets the inner errors of an aggregate.
    pub fn inner(&self) -> &[HavenError] {
        &self.inner
    }

    /// Returns true if this error wraps other errors.
    pub fn is_aggregate(&self) -> bool {
        self.kind == HavenErrorKind::Aggregate
    }

    /// Returns the first leaf error, descending through aggregates.
    ///
    /// An aggregate without inner errors is its own leaf.
    pub fn first_non_aggregate(&self) -> &HavenError {
        if self.is_aggregate() {
            if let Some(first) = self.inner.first() {
                return first.first_non_aggregate();
            }
        }
        self
    }

    /// Creates an error from an HTTP status code and server message.
    pub fn from_response(status: u16, message: String) -> Self {
        Self::new(Self::kind_from_status(status), message).with_status(status)
    }

    /// Maps HTTP status code to error kind.
    fn kind_from_status(status: u16) -> HavenErrorKind {
        match status {
            400 | 422 => HavenErrorKind::ValidationError,
            401 => HavenErrorKind::BadCredentials,
            403 => HavenErrorKind::Forbidden,
            404 => HavenErrorKind::NotFound,
            409 => HavenErrorKind::Conflict,
            500 => HavenErrorKind::InternalError,
            502 | 503 => HavenErrorKind::ServiceUnavailable,
            _ => HavenErrorKind::Unknown,
        }
    }

    // Convenience constructors

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(HavenErrorKind::InvalidConfiguration, message)
    }

    /// Creates a not found error for a record the sample expected to exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(HavenErrorKind::NotFound, message)
    }

    /// Creates an error for an envelope that reported failure.
    pub fn request_failed(message: impl Into<String>) -> Self {
        Self::new(HavenErrorKind::RequestFailed, message)
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(HavenErrorKind::Timeout, message)
    }

    /// Creates a deserialization error.
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::new(HavenErrorKind::DeserializationError, message)
    }

    /// Creates an aggregate error wrapping `inner`.
    pub fn aggregate(message: impl Into<String>, inner: Vec<HavenError>) -> Self {
        let mut error = Self::new(HavenErrorKind::Aggregate, message);
        error.inner = inner;
        error
    }
}

impl From<std::io::Error> for HavenError {
    fn from(err: std::io::Error) -> Self {
        HavenError::new(HavenErrorKind::Io, err.to_string()).with_cause(err)
    }
}

impl From<reqwest::Error> for HavenError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            HavenErrorKind::Timeout
        } else if err.is_connect() {
            HavenErrorKind::ConnectionFailed
        } else if err.is_decode() {
            HavenErrorKind::DeserializationError
        } else {
            HavenErrorKind::Unknown
        };
        let status = err.status().map(|s| s.as_u16());
        let mut error = HavenError::new(kind, format!("Request failed: {}", err));
        if let Some(code) = status {
            error = error.with_status(code);
        }
        error.with_cause(err)
    }
}
