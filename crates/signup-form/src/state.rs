// File: src/state.rs
// Purpose: Form state container - record, errors, touched flags, submission phase

use crate::submit::{SubmitOutcome, SubmitStart, Submitter};
use signup_types::{ErrorSet, FieldId, FieldValue, FormError, FormVariant, Record, TouchedSet};
use signup_validation::{has_errors, validate_field, validate_form};
use tracing::{debug, info, warn};

/// Submission phase of a form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// One mounted registration form.
///
/// Errors are computed eagerly but only shown for touched fields
/// ([`FormState::visible_error`]).
#[derive(Debug, Clone)]
pub struct FormState {
    initial: Record,
    record: Record,
    errors: ErrorSet,
    touched: TouchedSet,
    /// Record handed to the submitter; `Some` exactly while submitting.
    in_flight: Option<Record>,
    last_failure: Option<String>,
}

impl FormState {
    pub fn new(variant: FormVariant) -> Self {
        let record = Record::new(variant);
        Self {
            initial: record.clone(),
            record,
            errors: ErrorSet::new(),
            touched: TouchedSet::new(),
            in_flight: None,
            last_failure: None,
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.record.variant()
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight.is_some() {
            Phase::Submitting
        } else {
            Phase::Idle
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase() == Phase::Submitting
    }

    /// Whether the user has changed anything since the form was mounted
    pub fn is_dirty(&self) -> bool {
        self.record != self.initial
    }

    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(field)
    }

    /// The field's error, but only once the field has been touched
    pub fn visible_error(&self, field: FieldId) -> Option<&str> {
        if self.touched.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Whether the "check each field" summary should be shown
    pub fn show_summary(&self) -> bool {
        has_errors(&self.errors) && self.touched.any()
    }

    /// Reason of the most recent failed submit, until the next attempt
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    /// Field Change: store the value and re-validate that field only,
    /// against the updated record.
    pub fn change(&mut self, field: FieldId, value: FieldValue) -> Result<(), FormError> {
        self.record.set(field, value.clone())?;
        let error = validate_field(field, &value, Some(&self.record));
        self.errors.set(field, error);
        Ok(())
    }

    /// Field Blur: the field's error may now be shown.
    pub fn blur(&mut self, field: FieldId) {
        self.touched.touch(field);
    }

    /// First half of Submit Attempt.
    ///
    /// Re-validates everything and touches every field. Enters
    /// [`Phase::Submitting`] only when validation passes.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if let Some(record) = &self.in_flight {
            debug!(email = record.email(), "submit ignored, already submitting");
            return SubmitStart::Busy;
        }

        self.errors = validate_form(&self.record);
        self.touched.touch_all(self.record.variant().fields());
        self.last_failure = None;

        if has_errors(&self.errors) {
            debug!(errors = self.errors.len(), "submit blocked by validation");
            return SubmitStart::Invalid;
        }

        self.in_flight = Some(self.record.clone());
        SubmitStart::Ready(self.record.clone())
    }

    /// Second half of Submit Attempt: record the submitter's result and
    /// return to [`Phase::Idle`]. Input is kept either way.
    pub fn finish_submit(&mut self, result: anyhow::Result<()>) -> SubmitOutcome {
        let Some(record) = self.in_flight.take() else {
            return SubmitOutcome::Busy;
        };

        match result {
            Ok(()) => {
                info!(email = record.email(), "registration submitted");
                SubmitOutcome::Submitted(record)
            }
            Err(err) => {
                let reason = format!("{:#}", err);
                warn!(error = %reason, "form submission failed, keeping input for retry");
                self.last_failure = Some(reason.clone());
                SubmitOutcome::Failed(reason)
            }
        }
    }

    /// Submit Attempt: validate everything and, if clean, hand the record to
    /// `submitter` and await it.
    pub async fn submit(&mut self, submitter: &dyn Submitter) -> SubmitOutcome {
        match self.begin_submit() {
            SubmitStart::Invalid => SubmitOutcome::Invalid,
            SubmitStart::Busy => SubmitOutcome::Busy,
            SubmitStart::Ready(record) => {
                debug!(submitter = submitter.name(), "awaiting submitter");
                let result = submitter.submit(&record).await;
                self.finish_submit(result)
            }
        }
    }
}
