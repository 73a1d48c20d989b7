//! Domain value objects and types.
//!
//! Value objects for the registration fields that carry rules of their own:
//! the shared email predicate, gender options, passwords, the phone input
//! mask, and birth date display.

pub mod birth_date;
pub mod email;
pub mod errors;
pub mod gender;
pub mod password;
pub mod phone;

pub use birth_date::{birth_date_label, format_birth_date, BIRTH_DATE_PLACEHOLDER};
pub use email::{email_is_valid, EmailAddress};
pub use errors::ValidationError;
pub use gender::Gender;
pub use password::{Password, MIN_PASSWORD_LENGTH};
pub use phone::{apply_phone_mask, phone_digits, phone_is_complete, PHONE_MASK};
