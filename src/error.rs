//! Error types for the résumé PDF library.
//!
//! This module defines every error that can surface while loading font
//! metrics, typesetting, or writing a PDF document.

use crate::object::ObjectRef;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while producing a PDF.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error from the output sink or a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No metrics are registered under the requested font name
    #[error("Could not find font metrics for font {0:?}")]
    FontNotFound(String),

    /// Malformed AFM metrics data
    #[error("Error parsing AFM line {line}: {reason}")]
    MetricsParse {
        /// 1-based line number inside the AFM data
        line: usize,
        /// Reason for the parse failure
        reason: String,
    },

    /// Degenerate typesetting parameters
    #[error("Invalid layout parameters: {0}")]
    InvalidLayout(String),

    /// A reference points past the end of the document's object list
    #[error("Dangling reference: {0}")]
    DanglingReference(ObjectRef),

    /// Structurally invalid document (empty, missing root, ...)
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// JSON decoding error for résumé input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A de-obfuscated field is not valid UTF-8
    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_not_found_error() {
        let err = Error::FontNotFound("Garamond".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Garamond"));
    }

    #[test]
    fn test_metrics_parse_error() {
        let err = Error::MetricsParse {
            line: 12,
            reason: "missing WX field".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("12"));
        assert!(msg.contains("missing WX field"));
    }

    #[test]
    fn test_dangling_reference_error() {
        let err = Error::DanglingReference(ObjectRef::new(10));
        let msg = format!("{}", err);
        assert!(msg.contains("10 0 R"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
