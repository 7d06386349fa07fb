//! Structured errors for clients of the drink services
//!
//! Lookups never fail: absent matches are values, not errors. `CopoError`
//! only describes problems at the boundaries (bad arguments, catalog loading).

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const CATALOG_LOAD: &str = "CATALOG_LOAD";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Request answered with a degraded result
    Warning,
    /// Request rejected
    Error,
    /// Service cannot start or continue
    Fatal,
}

/// Structured error handed back to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopoError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Severity level
    pub severity: Severity,
}

impl CopoError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn invalid_argument(arg: &str, details: impl Into<String>) -> Self {
        Self::new(
            codes::INVALID_ARGUMENT,
            format!("Invalid argument '{}': {}", arg, details.into()),
        )
    }

    pub fn missing_argument(arg: &str) -> Self {
        Self::new(codes::INVALID_ARGUMENT, format!("Missing argument '{}'", arg))
            .with_suggestion(format!("Provide '{}' in the tool arguments", arg))
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::new(codes::NOT_FOUND, format!("Not found: {}", what.into()))
    }

    pub fn catalog_load(details: impl Into<String>) -> Self {
        Self::new(codes::CATALOG_LOAD, format!("Catalog load failed: {}", details.into()))
            .with_suggestion("Check COPO_CATALOG_PATH points to a JSON array of drinks")
            .with_severity(Severity::Fatal)
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for CopoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for CopoError {}

impl From<crate::CatalogError> for CopoError {
    fn from(err: crate::CatalogError) -> Self {
        Self::catalog_load(err.to_string())
    }
}
