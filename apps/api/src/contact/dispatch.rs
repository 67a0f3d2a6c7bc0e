//! Email dispatch — the only place that talks to the mail relay.
//!
//! The controller depends on the `EmailDispatcher` trait; `AppState` carries
//! an `Arc<dyn EmailDispatcher>` so handlers never know which backend runs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::EmailJsCredentials;
use crate::contact::form::ContactFormState;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("email dispatch is not configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("relay rejected the message (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// The fixed parameter set handed to the mail template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub company: String,
    pub position: String,
    pub inquiry_type: String,
    pub message: String,
    pub to_name: String,
    pub reply_to: String,
}

impl TemplateParams {
    /// Builds template parameters from a validated form. Blank optional
    /// fields are sent as "Not specified".
    pub fn from_form(form: &ContactFormState, to_name: &str) -> Self {
        Self {
            from_name: form.full_name.clone(),
            from_email: form.email.clone(),
            company: or_not_specified(&form.company),
            position: or_not_specified(&form.position),
            inquiry_type: form.inquiry_type.clone(),
            message: form.message.clone(),
            to_name: to_name.to_string(),
            reply_to: form.email.clone(),
        }
    }
}

fn or_not_specified(value: &str) -> String {
    if value.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        value.to_string()
    }
}

#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    async fn send(&self, params: &TemplateParams) -> Result<(), DispatchError>;
}

#[derive(Debug, Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// EmailJS REST client. Sends once; a failed send is reported to the
/// caller and never retried here.
#[derive(Clone)]
pub struct EmailJsClient {
    client: Client,
    api_url: String,
    credentials: Option<EmailJsCredentials>,
}

impl EmailJsClient {
    pub fn new(api_url: String, credentials: Option<EmailJsCredentials>) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_url,
            credentials,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }
}

#[async_trait]
impl EmailDispatcher for EmailJsClient {
    async fn send(&self, params: &TemplateParams) -> Result<(), DispatchError> {
        let credentials = self.credentials.as_ref().ok_or(DispatchError::NotConfigured)?;

        let body = EmailJsRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: params,
        };

        let response = self.client.post(&self.api_url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DispatchError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        debug!("EmailJS accepted message from {}", params.from_email);
        Ok(())
    }
}
