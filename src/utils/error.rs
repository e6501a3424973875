use thiserror::Error;

/// Which side of an appointment could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingParty {
    Patient,
    Doctor,
    Both,
}

impl std::fmt::Display for MissingParty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingParty::Patient => write!(f, "patient"),
            MissingParty::Doctor => write!(f, "doctor"),
            MissingParty::Both => write!(f, "patient and doctor"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Either patient or doctor not found ({missing} missing; patient: '{patient}', doctor: '{doctor}')")]
    NotFound {
        missing: MissingParty,
        patient: String,
        doctor: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Registry lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RegistryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::NotFound { .. } => ErrorCategory::Lookup,
            RegistryError::SerializationError(_) | RegistryError::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RegistryError::NotFound { .. } => ErrorSeverity::Medium,
            RegistryError::SerializationError(_) => ErrorSeverity::High,
            RegistryError::LockPoisoned => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RegistryError::NotFound { missing, .. } => {
                format!("Register the {} before booking the appointment", missing)
            }
            RegistryError::SerializationError(_) => "Retry with --format text".to_string(),
            RegistryError::LockPoisoned => {
                "A writer panicked while holding the registry; restart the process".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistryError::NotFound { .. } => "Either patient or doctor not found!".to_string(),
            RegistryError::SerializationError(e) => format!("Could not render report: {}", e),
            RegistryError::LockPoisoned => "Internal registry error".to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
