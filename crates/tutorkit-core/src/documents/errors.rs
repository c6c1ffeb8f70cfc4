use crate::documents::types::DocumentFormat;
use crate::errors::TutorkitError;
use crate::schema::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to read document '{path}': {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },

    #[error(
        "Unsupported document format for '{path}'. Supported extensions: .json, .toml, .yaml, .yml, .md, .mdx"
    )]
    UnsupportedFormat { path: String },

    #[error("Failed to parse {format} document: {message}")]
    ParseError {
        format: DocumentFormat,
        message: String,
    },

    #[error("No front matter found: the document must start with a '---' fenced block")]
    MissingFrontMatter,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl TutorkitError for DocumentError {
    fn error_code(&self) -> &'static str {
        match self {
            DocumentError::IoError { .. } => "DOCUMENT_IO_ERROR",
            DocumentError::UnsupportedFormat { .. } => "DOCUMENT_UNSUPPORTED_FORMAT",
            DocumentError::ParseError { .. } => "DOCUMENT_PARSE_ERROR",
            DocumentError::MissingFrontMatter => "DOCUMENT_MISSING_FRONT_MATTER",
            DocumentError::Invalid(_) => "DOCUMENT_INVALID",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, DocumentError::IoError { .. })
    }
}

impl DocumentError {
    /// Validation issues, if the document parsed but failed validation.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            DocumentError::Invalid(error) => Some(error),
            _ => None,
        }
    }
}
