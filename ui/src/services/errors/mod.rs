use thiserror::Error;

/// Why `submit` refused to produce a submission.
///
/// The login button is disabled in both cases, so this never reaches the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("Login form is incomplete or targets a banned instance")]
    Invalid,

    #[error("A login request is already in flight")]
    InFlight,
}

/// Failures reported by the authenticator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Login rejected by {instance}: {message}")]
    Rejected { instance: String, message: String },

    #[error("Could not reach {instance}: {message}")]
    Unreachable { instance: String, message: String },

    #[error("No authentication backend is configured for {instance}")]
    Unavailable { instance: String },
}

impl AuthError {
    pub fn instance(&self) -> &str {
        match self {
            AuthError::Rejected { instance, .. }
            | AuthError::Unreachable { instance, .. }
            | AuthError::Unavailable { instance } => instance,
        }
    }
}

/// Stored configuration could not be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Configuration storage unavailable: {reason}")]
    StorageUnavailable { reason: String },

    #[error("Malformed configuration under {key}: {reason}")]
    Malformed { key: String, reason: String },

    #[error("Configuration error: {field} = {value}")]
    InvalidValue { field: String, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages() {
        let error = AuthError::Rejected {
            instance: "lemmy.ml".to_string(),
            message: "incorrect_login".to_string(),
        };
        assert_eq!(error.to_string(), "Login rejected by lemmy.ml: incorrect_login");
        assert_eq!(error.instance(), "lemmy.ml");

        let error = AuthError::Unavailable { instance: "beehaw.org".to_string() };
        assert_eq!(error.instance(), "beehaw.org");
    }

    #[test]
    fn test_submit_blocked_display() {
        assert_eq!(
            SubmitBlocked::InFlight.to_string(),
            "A login request is already in flight"
        );
    }
}
