use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Invalid phone number format: {value}")]
    InvalidPhoneFormat { value: String },

    #[error("Invalid birthday format: {value}")]
    InvalidBirthdayFormat { value: String },

    #[error("Contact name cannot be empty")]
    InvalidName,

    #[error("Contact not found: {name}")]
    ContactNotFound { name: String },

    #[error("Phone {phone} not found for contact {name}")]
    PhoneNotFound { name: String, phone: String },

    #[error("Wrong number of arguments for '{command}'")]
    InvalidArgumentCount { command: String, usage: String },

    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AssistantError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Lookup,
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

impl AssistantError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPhoneFormat { .. }
            | Self::InvalidBirthdayFormat { .. }
            | Self::InvalidName => ErrorCategory::Validation,
            Self::ContactNotFound { .. } | Self::PhoneNotFound { .. } => ErrorCategory::Lookup,
            Self::InvalidArgumentCount { .. } | Self::UnknownCommand { .. } => {
                ErrorCategory::Input
            }
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    /// Interactive input errors are recoverable and never end a session.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup | ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Mistakes in a typed command, answered by the reply text alone.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Validation | ErrorCategory::Lookup | ErrorCategory::Input
        )
    }

    /// The fixed message shown to the user in place of the raw error.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidPhoneFormat { .. } => {
                "Invalid phone number format. Use 10 digits.".to_string()
            }
            Self::InvalidBirthdayFormat { .. } => {
                "Invalid birthday format. Use DD.MM.YYYY".to_string()
            }
            Self::InvalidName => "Enter user name.".to_string(),
            Self::ContactNotFound { .. } => "Contact not found.".to_string(),
            Self::PhoneNotFound { phone, .. } => format!("Phone number {phone} not found."),
            Self::InvalidArgumentCount { usage, .. } => {
                format!("Invalid command. Usage: {usage}")
            }
            Self::UnknownCommand { .. } => "Invalid command.".to_string(),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{field}': {message}")
            }
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("Configuration value '{value}' for '{field}' is invalid: {reason}")
            }
            Self::IoError(e) => format!("Input/output failure: {e}"),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidPhoneFormat { .. } => "Enter exactly 10 digits without separators",
            Self::InvalidBirthdayFormat { .. } => "Enter a real date as DD.MM.YYYY, e.g. 05.11.1990",
            Self::InvalidName => "Provide a non-empty contact name",
            Self::ContactNotFound { .. } => "Check the name with 'all' or add the contact first",
            Self::PhoneNotFound { .. } => "Check the stored numbers with 'phone [name]'",
            Self::InvalidArgumentCount { .. } => "Type 'help' to see every command and its arguments",
            Self::UnknownCommand { .. } => "Type 'help' to see the list of available commands",
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the command line flag and restart"
            }
            Self::IoError(_) => "Check that the terminal input and output are available",
        }
    }
}
