//! User-facing error messages, one per rule

pub const FIRST_NAME_REQUIRED: &str = "Please enter your first name";
pub const FIRST_NAME_TOO_SHORT: &str = "First name must be at least 1 character";
pub const LAST_NAME_REQUIRED: &str = "Please enter your last name";
pub const LAST_NAME_TOO_SHORT: &str = "Last name must be at least 1 character";

pub const EMAIL_REQUIRED: &str = "Please enter your email address";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";

pub const PASSWORD_REQUIRED: &str = "Please enter a password";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORD_WEAK: &str =
    "Password must contain an uppercase letter, a lowercase letter and a digit";

pub const CONFIRM_PASSWORD_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

pub const GENDER_REQUIRED: &str = "Please select a gender";
pub const GENDER_UNKNOWN: &str = "Please select one of the listed genders";

pub const PREFECTURE_REQUIRED: &str = "Please select a prefecture";
pub const PREFECTURE_UNKNOWN: &str = "Please select one of the listed prefectures";

pub const HOBBIES_REQUIRED: &str = "Please select at least one hobby";
pub const HOBBIES_UNKNOWN: &str = "Please select hobbies from the list";
