use std::path::PathBuf;
use thiserror::Error;

/// Core error type for sitekit operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read template at {path}: {source}")]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template error: {message}")]
    TemplateSyntax { message: String },

    #[error("Invalid copy pattern {pattern}: {source}")]
    CopyGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl Error {
    #[must_use]
    pub fn template_syntax(message: impl Into<String>) -> Self {
        Self::TemplateSyntax {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for CLI JSON output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO_ERROR",
            Self::ConfigRead { .. } => "CONFIG_READ_ERROR",
            Self::ConfigParse { .. } => "CONFIG_PARSE_ERROR",
            Self::TemplateLoad { .. } => "TEMPLATE_LOAD_ERROR",
            Self::TemplateSyntax { .. } => "TEMPLATE_SYNTAX_ERROR",
            Self::CopyGlob { .. } => "COPY_GLOB_ERROR",
        }
    }
}
