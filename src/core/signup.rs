//! Signup form state machine
//!
//! ```text
//! Idle --submit(valid)--> Loading --success--> Submitted
//! Idle --submit(valid)--> Loading --failure--> Idle (with error)
//! Idle --submit(invalid)--> Idle (with error)
//! ```
//!
//! `Submitted` is terminal for the page session.

use leptos::logging::error;

use super::validation::validate_email;
use super::{DispatchError, SignupError};

pub const SUCCESS_MESSAGE: &str = "Thanks for signing up! We'll notify you when we launch.";

/// Lifecycle of a signup attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupStatus {
    #[default]
    Idle,
    /// A dispatch is in flight
    Loading,
    Submitted,
}

/// Form state for one page session
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignupAttempt {
    email: String,
    status: SignupStatus,
    error: Option<SignupError>,
}

impl SignupAttempt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> SignupStatus {
        self.status
    }

    pub fn error(&self) -> Option<&SignupError> {
        self.error.as_ref()
    }

    /// Alert text for the current error, if any
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn is_loading(&self) -> bool {
        self.status == SignupStatus::Loading
    }

    pub fn is_submitted(&self) -> bool {
        self.status == SignupStatus::Submitted
    }

    /// Update the input. Ignored unless the form is idle.
    pub fn set_email(&mut self, value: impl Into<String>) {
        if self.status == SignupStatus::Idle {
            self.email = value.into();
        }
    }

    /// Handle a submit click.
    ///
    /// Returns the address to dispatch when the form moved to `Loading`.
    /// Returns `None` when validation failed (the error is recorded) or when the
    /// form is not idle, so a second click while loading does nothing.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.status != SignupStatus::Idle {
            return None;
        }

        if let Err(err) = validate_email(&self.email) {
            self.error = Some(err);
            return None;
        }

        self.error = None;
        self.status = SignupStatus::Loading;
        Some(self.email.clone())
    }

    /// Apply the dispatch outcome. Does nothing unless a dispatch is in flight.
    pub fn finish(&mut self, outcome: Result<(), DispatchError>) {
        if self.status != SignupStatus::Loading {
            return;
        }

        match outcome {
            Ok(()) => {
                self.status = SignupStatus::Submitted;
                self.error = None;
                self.email.clear();
            }
            Err(err) => {
                error!("EmailJS error: {}", err);
                self.status = SignupStatus::Idle;
                self.error = Some(err.into());
            }
        }
    }
}
