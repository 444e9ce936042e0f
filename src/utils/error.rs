use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Index {index} is out of range for {len} items")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("Invalid period label: '{label}'")]
    InvalidPeriod { label: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SiteError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 呼叫端傳入錯誤索引，可恢復
            SiteError::IndexOutOfRange { .. } => ErrorSeverity::Low,
            SiteError::InvalidPeriod { .. } | SiteError::SerializationError(_) => {
                ErrorSeverity::Medium
            }
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SiteError::InvalidConfiguration { .. } | SiteError::IoError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::InvalidConfiguration { .. } => {
                "Make sure the gallery range or photos.json yields at least one month"
            }
            SiteError::IndexOutOfRange { .. } => "Jump to an index between 0 and the item count",
            SiteError::InvalidPeriod { .. } => {
                "Use labels like 'September 2024' or 'Sep 2024'"
            }
            SiteError::IoError(_) => "Check that the data directory exists and is readable",
            SiteError::SerializationError(_) => "Check that the JSON data files are well formed",
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. } => "Review the site configuration file",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::IoError(e) => format!("Could not read site data: {}", e),
            SiteError::SerializationError(e) => format!("Site data is not valid JSON: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
