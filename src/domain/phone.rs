//! Phone input mask.
//!
//! The phone field is a masked text input: digits typed by the user are laid
//! into the `(99) 99999-9999` template as they arrive. The validation contract
//! trusts the mask and does not re-check the resulting shape.

/// Template applied to the phone input. `9` marks a digit slot.
pub const PHONE_MASK: &str = "(99) 99999-9999";

/// Character shown in digit slots that have not been filled yet.
pub const MASK_PLACEHOLDER: char = '_';

const DIGIT_SLOT: char = '9';

/// Number of digit slots in [`PHONE_MASK`].
pub fn phone_slot_count() -> usize {
    PHONE_MASK.chars().filter(|c| *c == DIGIT_SLOT).count()
}

/// Lay the digits of `raw` into the phone mask.
///
/// Non-digit characters are dropped, extra digits beyond the last slot are
/// ignored, and unfilled slots show [`MASK_PLACEHOLDER`]. Input without any
/// digit yields an empty string, matching an untouched input.
///
/// Applying the mask to an already masked value returns it unchanged.
///
/// # Example
///
/// ```
/// use registration_form::domain::apply_phone_mask;
///
/// assert_eq!(apply_phone_mask("11987654321"), "(11) 98765-4321");
/// assert_eq!(apply_phone_mask("119"), "(11) 9____-____");
/// assert_eq!(apply_phone_mask(""), "");
/// ```
pub fn apply_phone_mask(raw: &str) -> String {
    let mut digits = raw.chars().filter(|c| c.is_ascii_digit()).peekable();
    if digits.peek().is_none() {
        return String::new();
    }

    PHONE_MASK
        .chars()
        .map(|c| {
            if c == DIGIT_SLOT {
                digits.next().unwrap_or(MASK_PLACEHOLDER)
            } else {
                c
            }
        })
        .collect()
}

/// Get the phone number with only digits (no formatting).
pub fn phone_digits(masked: &str) -> String {
    masked.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Whether `masked` is a fully filled mask value.
pub fn phone_is_complete(masked: &str) -> bool {
    phone_digits(masked).len() == phone_slot_count() && apply_phone_mask(masked) == masked
}
