//! Signup dispatch to EmailJS
//!
//! One POST per signup, no retry. The only status that counts as accepted is 200;
//! anything else, including other 2xx codes, is treated as a failure.

use serde::Serialize;

use super::DispatchError;
use super::config::EmailJsConfig;

/// The status EmailJS answers with when it accepted the email
pub const ACCEPTED_STATUS: u16 = 200;

/// Template parameters for the signup notification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupPayload {
    pub user_email: String,
    pub signup_time: String,
    pub source: String,
}

impl SignupPayload {
    pub fn new(
        user_email: impl Into<String>,
        signup_time: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            user_email: user_email.into(),
            signup_time: signup_time.into(),
            source: source.into(),
        }
    }
}

/// Body of the EmailJS send endpoint
#[derive(Debug, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// EmailJS calls the public key `user_id`
    pub user_id: &'a str,
    pub template_params: &'a SignupPayload,
}

impl<'a> EmailJsRequest<'a> {
    pub fn new(config: &'a EmailJsConfig, payload: &'a SignupPayload) -> Result<Self, DispatchError> {
        let credentials = config.credentials().ok_or(DispatchError::NotConfigured)?;

        Ok(Self {
            service_id: credentials.service_id,
            template_id: credentials.template_id,
            user_id: credentials.public_key,
            template_params: payload,
        })
    }
}

/// Something that can deliver a signup notification.
///
/// Returns the raw HTTP status; `dispatch_signup` decides what it means.
#[allow(async_fn_in_trait)]
pub trait EmailDispatcher {
    async fn send(&self, payload: &SignupPayload) -> Result<u16, DispatchError>;
}

/// Send a signup and map the response status to an outcome.
pub async fn dispatch_signup<D: EmailDispatcher>(
    dispatcher: &D,
    payload: &SignupPayload,
) -> Result<(), DispatchError> {
    match dispatcher.send(payload).await? {
        ACCEPTED_STATUS => Ok(()),
        status => Err(DispatchError::Rejected { status }),
    }
}

/// EmailJS REST client used by the hydrated page
#[derive(Debug, Clone)]
pub struct EmailJsDispatcher {
    config: EmailJsConfig,
}

impl EmailJsDispatcher {
    pub fn new(config: EmailJsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmailJsConfig {
        &self.config
    }

    /// Signup payload with the configured `source` label
    pub fn payload(&self, email: impl Into<String>, signup_time: impl Into<String>) -> SignupPayload {
        SignupPayload::new(email, signup_time, self.config.source.clone())
    }
}

#[cfg(not(feature = "ssr"))]
impl EmailDispatcher for EmailJsDispatcher {
    async fn send(&self, payload: &SignupPayload) -> Result<u16, DispatchError> {
        use gloo_net::http::Request;

        let request = EmailJsRequest::new(&self.config, payload)?;
        let body =
            serde_json::to_string(&request).map_err(|e| DispatchError::Encode(e.to_string()))?;

        let response = Request::post(&self.config.api_url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| DispatchError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;

        Ok(response.status())
    }
}

#[cfg(feature = "ssr")]
impl EmailDispatcher for EmailJsDispatcher {
    async fn send(&self, _payload: &SignupPayload) -> Result<u16, DispatchError> {
        Err(DispatchError::Unavailable)
    }
}
