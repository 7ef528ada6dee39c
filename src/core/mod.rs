//! Signup domain: validation, form state and dispatch to the email service

pub mod config;
pub mod dispatch;
mod error;
pub mod signup;
pub mod validation;

pub use config::EmailJsConfig;
pub use dispatch::{EmailDispatcher, EmailJsDispatcher, SignupPayload, dispatch_signup};
pub use error::{DispatchError, SignupError};
pub use signup::{SUCCESS_MESSAGE, SignupAttempt, SignupStatus};
pub use validation::validate_email;
