//! Error types for the signup flow

/// Errors shown to the visitor. `Display` is the alert text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SignupError {
    #[error("Please enter your email address")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidFormat,

    /// Every dispatch failure collapses into this one message
    #[error("Failed to sign up. Please try again later.")]
    DispatchFailed,
}

/// Why a dispatch did not go through. Logged, never shown.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DispatchError {
    #[error("EmailJS is not configured (public key, service id or template id missing)")]
    NotConfigured,

    #[error("EmailJS rejected the request with status {status}")]
    Rejected { status: u16 },

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Failed to reach EmailJS: {0}")]
    Transport(String),

    #[error("Email dispatch is only available in the browser")]
    Unavailable,
}

impl From<DispatchError> for SignupError {
    fn from(_: DispatchError) -> Self {
        SignupError::DispatchFailed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_error_messages() {
        assert_eq!(
            SignupError::MissingEmail.to_string(),
            "Please enter your email address"
        );
        assert_eq!(
            SignupError::InvalidFormat.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            SignupError::DispatchFailed.to_string(),
            "Failed to sign up. Please try again later."
        );
    }

    #[test]
    fn test_dispatch_errors_collapse_to_one_message() {
        let errors = [
            DispatchError::NotConfigured,
            DispatchError::Rejected { status: 400 },
            DispatchError::Transport("connection refused".to_string()),
            DispatchError::Unavailable,
        ];

        for error in errors {
            assert_eq!(SignupError::from(error), SignupError::DispatchFailed);
        }
    }

    #[test]
    fn test_dispatch_error_keeps_detail_for_logs() {
        let error = DispatchError::Rejected { status: 412 };
        assert!(error.to_string().contains("412"));
    }
}
