use thiserror::Error;

/// Input problems that abort an operation before any state changes.
///
/// The display text is what the notice surface shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a profile name")]
    EmptyProfileName,
    #[error("Profile already exists")]
    DuplicateProfile(String),
    #[error("Please select a profile first")]
    NoActiveProfile,
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Amount must be greater than 0")]
    NonPositiveAmount,
}

/// Error type that captures every failure the tracker can surface.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    /// Returns the validation failure, if this error is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            TrackerError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}
