use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Io,
    Configuration,
}

impl ToolkitError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::Argument,
            Self::IoError(_) => ErrorCategory::Io,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, ToolkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_displays_bare_message() {
        let err = ToolkitError::invalid_argument("Negative number not allowed");
        assert_eq!(err.to_string(), "Negative number not allowed");
        assert!(err.is_invalid_argument());
        assert_eq!(err.category(), ErrorCategory::Argument);
    }

    #[test]
    fn test_config_errors_share_category() {
        let parse = ToolkitError::ConfigError {
            message: "TOML parsing error".to_string(),
        };
        let invalid = ToolkitError::InvalidConfigValueError {
            field: "ratings.min_rating".to_string(),
            value: "NaN".to_string(),
            reason: "Value must be a finite number".to_string(),
        };
        assert_eq!(parse.category(), ErrorCategory::Configuration);
        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert!(!invalid.is_invalid_argument());
    }
}
