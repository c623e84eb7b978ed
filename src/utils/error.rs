use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Unknown service tier: {value}")]
    InvalidTier { value: String },

    #[error("Unknown frequency: {value}")]
    InvalidFrequency { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
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

impl QuoteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuoteError::InvalidTier { .. } | QuoteError::InvalidFrequency { .. } => {
                ErrorCategory::Input
            }
            QuoteError::TomlError(_)
            | QuoteError::ConfigValidationError { .. }
            | QuoteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            QuoteError::IoError(_)
            | QuoteError::SerializationError(_)
            | QuoteError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // a bad tier or frequency id would mis-price a booking
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuoteError::InvalidTier { value } => {
                format!("'{}' is not a service we offer", value)
            }
            QuoteError::InvalidFrequency { value } => {
                format!("'{}' is not a supported cleaning frequency", value)
            }
            QuoteError::IoError(e) => format!("Could not read or write a file: {}", e),
            QuoteError::TomlError(_) => "The configuration file could not be loaded".to_string(),
            QuoteError::ConfigValidationError { field, .. }
            | QuoteError::InvalidConfigValueError { field, .. } => {
                format!("The configuration value '{}' is not valid", field)
            }
            QuoteError::SerializationError(_) | QuoteError::CsvError(_) => {
                "Failed to format the output".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            QuoteError::InvalidTier { .. } => {
                "Use one of: standard, standard-plus, deep, move".to_string()
            }
            QuoteError::InvalidFrequency { .. } => {
                "Use one of: one-time, weekly, bi-weekly, monthly".to_string()
            }
            QuoteError::IoError(_) => "Check that the path exists and is readable".to_string(),
            QuoteError::TomlError(_) => "Make sure the file exists and is valid TOML".to_string(),
            QuoteError::ConfigValidationError { .. } | QuoteError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the configuration file".to_string()
            }
            QuoteError::SerializationError(_) | QuoteError::CsvError(_) => {
                "Re-run with --verbose and report the problem".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
