//! Unified error model.
//!
//! One variant per public error code. Every failure a `parse` call can
//! surface is terminal: no partial `ParsedBuild` ever accompanies an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum BuildError {
    /// Input is not valid transport-alphabet text (empty, stray characters,
    /// or undecodable base64).
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Both inflate framings rejected the payload, or it inflated to nothing.
    #[error("decompression failed: {0}")]
    DecompressionFailed(String),

    /// The payload is not well-formed markup, or lacks the required root.
    #[error("malformed structure: {0}")]
    MalformedStructure(String),

    /// The declared export version is absent or below the supported minimum.
    #[error("unsupported version: {0}")]
    UnsupportedVersion(String),

    /// A request envelope omitted a field the operation cannot run without.
    #[error("missing required field: {0}")]
    MissingRequiredField(String),
}

impl BuildError {
    /// Stable machine-readable code for the API envelope.
    pub fn code(&self) -> &'static str {
        match self {
            BuildError::InvalidEncoding(_) => "InvalidEncoding",
            BuildError::DecompressionFailed(_) => "DecompressionFailed",
            BuildError::MalformedStructure(_) => "MalformedStructure",
            BuildError::UnsupportedVersion(_) => "UnsupportedVersion",
            BuildError::MissingRequiredField(_) => "MissingRequiredField",
        }
    }

    fn message(&self) -> &str {
        match self {
            BuildError::InvalidEncoding(m)
            | BuildError::DecompressionFailed(m)
            | BuildError::MalformedStructure(m)
            | BuildError::UnsupportedVersion(m)
            | BuildError::MissingRequiredField(m) => m,
        }
    }

    /// Structured body for the `{code, message, details}` wire shape.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code().to_string(),
            message: self.message().to_string(),
            details: None,
        }
    }
}

/// Wire shape of a failed operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(BuildError::InvalidEncoding("x".into()).code(), "InvalidEncoding");
        assert_eq!(
            BuildError::DecompressionFailed("x".into()).code(),
            "DecompressionFailed"
        );
        assert_eq!(
            BuildError::UnsupportedVersion("x".into()).code(),
            "UnsupportedVersion"
        );
    }

    #[test]
    fn body_carries_message() {
        let body = BuildError::MalformedStructure("unexpected end of tag".into()).body();
        assert_eq!(body.code, "MalformedStructure");
        assert_eq!(body.message, "unexpected end of tag");
        assert!(body.details.is_none());
    }
}
