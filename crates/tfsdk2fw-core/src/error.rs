//! Error types for the tfsdk2fw core library
//!
//! Fatal migration failures and loader failures are modelled here with
//! thiserror. Recoverable problems (constructs that cannot be represented in
//! the target schema) are not errors; they are reported as advisories through
//! [`crate::migration::Diagnostic`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for tfsdk2fw operations
#[derive(Error, Debug)]
pub enum Error {
    /// A property kind, or an aggregate element, that has no target representation.
    /// `path` is the dotted property path from the resource root.
    #[error("{path} is of unsupported type: {detail}")]
    UnsupportedType { path: String, detail: String },

    /// The requested resource or data source is not in the registry document
    #[error("{kind} type {type_name} not found")]
    ResourceNotFound { kind: SchemaKind, type_name: String },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing errors
    #[error("YAML error: {message}")]
    Yaml {
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build an `UnsupportedType` error for a property path
    pub fn unsupported_type(path: &[&str], detail: impl Into<String>) -> Self {
        Error::UnsupportedType {
            path: path.join("."),
            detail: detail.into(),
        }
    }

    /// Dotted property path of the failing property, if this error carries one
    pub fn property_path(&self) -> Option<&str> {
        match self {
            Error::UnsupportedType { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Whether a schema is generated for a managed resource or a data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    /// Managed resource with create/read/update/delete
    Resource,
    /// Read-only data source
    DataSource,
}

/// Severity levels for advisories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Informational, no action required
    Info,
    /// Warning, should be reviewed before the generated code is used
    Warning,
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaKind::Resource => write!(f, "resource"),
            SchemaKind::DataSource => write!(f, "data source"),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_display() {
        let err = Error::unsupported_type(&["foo", "bar"], "object");
        assert_eq!(err.to_string(), "foo.bar is of unsupported type: object");
        assert_eq!(err.property_path(), Some("foo.bar"));
    }

    #[test]
    fn test_resource_not_found_display() {
        let err = Error::ResourceNotFound {
            kind: SchemaKind::DataSource,
            type_name: "aws_sqs_queue".to_string(),
        };
        assert_eq!(err.to_string(), "data source type aws_sqs_queue not found");
        assert_eq!(err.property_path(), None);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
