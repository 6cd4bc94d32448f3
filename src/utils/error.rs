use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Driving mode '{name}' is defined more than once")]
    DuplicateModeError { name: String },

    #[error("{subject} cannot {capability}")]
    UnsupportedCapability { subject: String, capability: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Contract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SolidError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SolidError::IoError(_) | SolidError::SerializationError(_) => ErrorCategory::Io,
            SolidError::TomlError(_)
            | SolidError::ConfigError { .. }
            | SolidError::ConfigValidationError { .. }
            | SolidError::InvalidConfigValueError { .. }
            | SolidError::MissingConfigError { .. }
            | SolidError::DuplicateModeError { .. } => ErrorCategory::Configuration,
            SolidError::UnsupportedCapability { .. } => ErrorCategory::Contract,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Contract => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SolidError::IoError(_) => "Check that the file exists and is readable",
            SolidError::SerializationError(_) => "Report the vehicle state that failed to render",
            SolidError::TomlError(_) => "Fix the TOML syntax in the mode file",
            SolidError::ConfigError { .. } | SolidError::ConfigValidationError { .. } => {
                "Review the mode file against the documented format"
            }
            SolidError::InvalidConfigValueError { .. } => {
                "Use non-empty names and non-negative power and suspension values"
            }
            SolidError::MissingConfigError { .. } => "Add the missing field to the mode file",
            SolidError::DuplicateModeError { .. } => "Give every [[modes]] entry a unique name",
            SolidError::UnsupportedCapability { .. } => {
                "Only pass types that support the operation (split the trait)"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SolidError::IoError(e) => format!("Could not read a file: {}", e),
            SolidError::TomlError(_) => "The mode file is not valid TOML".to_string(),
            SolidError::DuplicateModeError { name } => {
                format!("The mode '{}' is configured twice", name)
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;
