//! The external side of a submit attempt

use anyhow::Result;
use async_trait::async_trait;
use signup_types::Record;

/// Receives a validated record.
///
/// The form does not care what happens here beyond success or failure. A
/// failure is logged by the form and the user may retry.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, record: &Record) -> Result<()>;

    /// Name used in logs
    fn name(&self) -> &'static str {
        "submitter"
    }
}

/// First half of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Validation failed; every field is now touched.
    Invalid,
    /// A submit is already in flight.
    Busy,
    /// Validation passed; hand this record to the submitter.
    Ready(Record),
}

/// How a submit attempt concluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    Busy,
    /// The submitter accepted this record.
    Submitted(Record),
    /// The submitter failed with this reason; input is kept.
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}
