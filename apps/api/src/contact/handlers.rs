//! Axum route handlers for the contact form relay.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::contact::controller::{ContactFormController, SubmissionState, SubmissionStatus};
use crate::contact::form::{ContactFormState, INQUIRY_TYPES};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: SubmissionStatus,
    pub submission_id: Uuid,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct InquiryTypeOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// POST /api/contact
///
/// Runs one submission through a fresh controller. Validation failures come
/// back as 400 with per-field messages; relay failures as 502. The controller
/// (and its banner timer) is dropped when the request ends.
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactFormState>,
) -> Result<Json<ContactResponse>, AppError> {
    let submission_id = Uuid::new_v4();
    info!("Contact submission {submission_id} received");

    let mut controller = ContactFormController::new(&state.profile.name);
    controller.fill(form);

    let status = controller.submit(state.mailer.as_ref()).await?;

    match (status, controller.state()) {
        (SubmissionStatus::Success, _) => Ok(Json(ContactResponse {
            status,
            submission_id,
            sent_at: Utc::now(),
        })),
        (_, SubmissionState::Error(reason)) => Err(AppError::Dispatch(reason)),
        (_, other) => Err(AppError::Internal(anyhow::anyhow!(
            "submission {submission_id} ended in unexpected state {other:?}"
        ))),
    }
}

/// GET /api/contact/inquiry-types
pub async fn handle_inquiry_types() -> Json<Vec<InquiryTypeOption>> {
    Json(
        INQUIRY_TYPES
            .iter()
            .map(|&(value, label)| InquiryTypeOption { value, label })
            .collect(),
    )
}
