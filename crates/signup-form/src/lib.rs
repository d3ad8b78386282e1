//! Signup Form
//!
//! [`FormState`] owns one form instance: the record, its errors, touched flags
//! and the submission phase. It changes only through [`FormState::change`],
//! [`FormState::blur`] and a submit attempt. The external side of a submit is
//! the [`Submitter`] trait; where to go afterwards is [`navigation`].

pub mod navigation;
pub mod state;
pub mod submit;

pub use navigation::{confirmation_location, ConfirmationParams, CONFIRM_PATH, REGISTER_PATH};
pub use state::{FormState, Phase};
pub use submit::{SubmitOutcome, SubmitStart, Submitter};

pub use signup_types::{ErrorSet, FieldId, FieldValue, FormError, FormVariant, Record, TouchedSet};
