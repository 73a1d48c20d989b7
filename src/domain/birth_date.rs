//! Birth date display for the date picker trigger.

use chrono::NaiveDate;

/// Format used to show a picked birth date.
pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

/// Text shown on the picker trigger while no date is picked.
pub const BIRTH_DATE_PLACEHOLDER: &str = "dd/mm/aaaa";

/// Format a birth date as `dd/MM/yyyy`.
pub fn format_birth_date(date: NaiveDate) -> String {
    date.format(BIRTH_DATE_FORMAT).to_string()
}

/// Label for the date picker trigger button.
pub fn birth_date_label(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format_birth_date(date),
        None => BIRTH_DATE_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_birth_date_pads_day_and_month() {
        let date = NaiveDate::from_ymd_opt(1990, 3, 7).unwrap();
        assert_eq!(format_birth_date(date), "07/03/1990");
    }

    #[test]
    fn test_birth_date_label() {
        let date = NaiveDate::from_ymd_opt(2001, 12, 25).unwrap();
        assert_eq!(birth_date_label(Some(date)), "25/12/2001");
        assert_eq!(birth_date_label(None), "dd/mm/aaaa");
    }
}
