#![allow(dead_code)]

//! Contact form controller — field state, validation, and the submission
//! lifecycle `Idle → Submitting → Success | Error → Idle`.
//!
//! State is published through a `watch` channel so the banner timer and any
//! view reading `subscribe()` share one source of truth. The banner timer is
//! owned by the controller and aborted when it is dropped.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::contact::dispatch::{DispatchError, EmailDispatcher, TemplateParams};
use crate::contact::form::{ContactFormState, Field, ValidationErrors};
use crate::contact::validation::validate_form;
use crate::timer::TimerGuard;

/// How long a success or error banner stays visible.
pub const BANNER_DURATION: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    /// Carries the dispatch failure reason for logging and API responses.
    Error(String),
}

/// The banner shown to the user, derived from `SubmissionState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    None,
    Success,
    Error,
}

impl SubmissionState {
    pub fn status(&self) -> SubmissionStatus {
        match self {
            SubmissionState::Idle | SubmissionState::Submitting => SubmissionStatus::None,
            SubmissionState::Success => SubmissionStatus::Success,
            SubmissionState::Error(_) => SubmissionStatus::Error,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(ValidationErrors),

    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

pub struct ContactFormController {
    form: ContactFormState,
    errors: ValidationErrors,
    state: Arc<watch::Sender<SubmissionState>>,
    banner_timer: Option<TimerGuard>,
    to_name: String,
}

impl ContactFormController {
    /// `to_name` is the recipient name placed in every dispatched message.
    pub fn new(to_name: impl Into<String>) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            form: ContactFormState::default(),
            errors: ValidationErrors::new(),
            state: Arc::new(state),
            banner_timer: None,
            to_name: to_name.into(),
        }
    }

    pub fn form(&self) -> &ContactFormState {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.borrow().status()
    }

    /// False while a submission is in flight; views disable the submit control.
    pub fn can_submit(&self) -> bool {
        *self.state.borrow() != SubmissionState::Submitting
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Updates one field. Any error on that field is dropped immediately,
    /// whether or not the new value would pass.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.remove(&field);
    }

    /// Replaces every field at once, clearing errors for each one.
    pub fn fill(&mut self, form: ContactFormState) {
        self.form = form;
        self.errors.clear();
    }

    /// Validates and moves to `Submitting`, returning the parameters to dispatch.
    ///
    /// On validation failure the state is left untouched and the per-field
    /// errors are stored and returned. Any visible banner is dismissed once
    /// the new submission starts.
    pub fn begin_submit(&mut self) -> Result<TemplateParams, SubmitError> {
        if !self.can_submit() {
            return Err(SubmitError::AlreadySubmitting);
        }

        let errors = validate_form(&self.form);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }

        self.errors.clear();
        self.banner_timer = None;
        self.state.send_replace(SubmissionState::Submitting);

        Ok(TemplateParams::from_form(&self.form, &self.to_name))
    }

    /// Applies the dispatch outcome of the in-flight submission and arms the
    /// banner timer. Ignored when nothing is in flight.
    pub fn finish_submit(&mut self, outcome: Result<(), DispatchError>) -> SubmissionStatus {
        if self.can_submit() {
            return self.status();
        }

        let next = match outcome {
            Ok(()) => {
                self.form = ContactFormState::default();
                self.errors.clear();
                SubmissionState::Success
            }
            Err(e) => SubmissionState::Error(e.to_string()),
        };
        self.state.send_replace(next);

        let state = Arc::clone(&self.state);
        self.banner_timer = Some(TimerGuard::after(BANNER_DURATION, move || {
            state.send_if_modified(|s| match s {
                SubmissionState::Success | SubmissionState::Error(_) => {
                    *s = SubmissionState::Idle;
                    true
                }
                _ => false,
            });
        }));

        self.status()
    }

    /// Full submission: validate, dispatch once, and record the outcome.
    pub async fn submit(
        &mut self,
        dispatcher: &dyn EmailDispatcher,
    ) -> Result<SubmissionStatus, SubmitError> {
        let params = self.begin_submit()?;

        let outcome = dispatcher.send(&params).await;
        match &outcome {
            Ok(()) => info!(
                "Contact message sent (inquiry_type={})",
                params.inquiry_type
            ),
            Err(e) => warn!("Contact message dispatch failed: {e}"),
        }

        Ok(self.finish_submit(outcome))
    }
}
