//! maud views. Pages return full documents; fragments are swapped in by htmx.

pub mod confirm;
pub mod error;
pub mod home;
pub mod layout;
pub mod register;
