//! Error types for questionnaire generation.
//!
//! Only conditions the generator cannot degrade around are errors. A template
//! that lacks an anchor phrase is not an error: the section is skipped and the
//! skip is recorded in the [`GenerationReport`](crate::sections::GenerationReport).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Stable error codes, one per failure family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    /// Template file missing or not a readable workbook
    TemplateUnreadable = 1001,
    /// Template has no worksheet with the requested name
    SheetNotFound = 1002,
    /// Template geometry does not fit the locale layout
    StructuralMismatch = 1003,
    /// Photo or signature could not be decoded
    ImageUnreadable = 1004,
    /// Output workbook could not be serialized
    WriteFailed = 1005,
    /// Plain filesystem failure
    IoError = 1006,
    /// Candidate input could not be parsed
    InvalidInput = 1007,
}

impl ErrorCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Only filesystem hiccups are worth retrying; layout failures are deterministic.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCode::IoError | ErrorCode::WriteFailed)
    }

    pub fn category(&self) -> &'static str {
        match self {
            ErrorCode::TemplateUnreadable | ErrorCode::SheetNotFound => "template_error",
            ErrorCode::StructuralMismatch => "layout_error",
            ErrorCode::ImageUnreadable => "media_error",
            ErrorCode::WriteFailed | ErrorCode::IoError => "io_error",
            ErrorCode::InvalidInput => "input_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

#[derive(Debug, Error)]
pub enum QuestionnaireError {
    #[error("failed to read template {path:?}: {message}")]
    TemplateRead { path: PathBuf, message: String },

    #[error("template has no worksheet {0:?}")]
    SheetNotFound(String),

    #[error("template layout incompatible: {0}")]
    Structural(String),

    #[error("failed to read image {path:?}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write questionnaire {path:?}: {message}")]
    Write { path: PathBuf, message: String },

    #[error("invalid candidate input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl QuestionnaireError {
    pub fn code(&self) -> ErrorCode {
        match self {
            QuestionnaireError::TemplateRead { .. } => ErrorCode::TemplateUnreadable,
            QuestionnaireError::SheetNotFound(_) => ErrorCode::SheetNotFound,
            QuestionnaireError::Structural(_) => ErrorCode::StructuralMismatch,
            QuestionnaireError::Image { .. } => ErrorCode::ImageUnreadable,
            QuestionnaireError::Write { .. } => ErrorCode::WriteFailed,
            QuestionnaireError::InvalidInput(_) => ErrorCode::InvalidInput,
            QuestionnaireError::Io(_) => ErrorCode::IoError,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.code().is_retryable()
    }
}

pub type Result<T, E = QuestionnaireError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_codes() {
        let err = QuestionnaireError::Structural("column 14 beyond width 9".into());
        assert_eq!(err.code(), ErrorCode::StructuralMismatch);
        assert_eq!(err.code().category(), "layout_error");
        assert!(!err.is_retryable());

        let io = QuestionnaireError::from(std::io::Error::other("disk full"));
        assert_eq!(io.code().category(), "io_error");
        assert!(io.is_retryable());
    }

    #[test]
    fn display_includes_code_number() {
        assert_eq!(ErrorCode::SheetNotFound.to_string(), "SheetNotFound(1002)");
    }
}
