// src/util/time.rs
use chrono::{DateTime, Datelike, Local, TimeZone};

use crate::constants::ENEX_TIMESTAMP_FORMAT;
use crate::domain::DomainError;

/// Render a Keep microsecond timestamp in ENEX form (`YYYYMMDDTHHMMSSZ`).
///
/// The value is rendered in the local timezone even though the suffix reads `Z`;
/// downstream importers have always seen local wall-clock time here.
pub fn format_usec_timestamp(usec: i64) -> Result<String, DomainError> {
    let seconds = usec / 1_000_000;
    let local = DateTime::from_timestamp(seconds, 0)
        .map(|utc| utc.with_timezone(&Local))
        .filter(|dt| (0..=9999).contains(&dt.year()))
        .ok_or(DomainError::TimestampOutOfRange(usec))?;

    Ok(format_enex_date(&local))
}

pub fn format_enex_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format(ENEX_TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1582955199253000)]
    #[case(1700000000999999)]
    fn given_usec_timestamp_when_formatting_then_has_fixed_shape(#[case] usec: i64) {
        let formatted = format_usec_timestamp(usec).unwrap();

        assert_eq!(formatted.len(), 16);
        assert_eq!(formatted.as_bytes()[8], b'T');
        assert_eq!(formatted.as_bytes()[15], b'Z');
        assert!(NaiveDateTime::parse_from_str(&formatted, ENEX_TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn given_usec_timestamp_when_formatting_then_renders_local_time() {
        let expected = Local
            .timestamp_opt(1582955199, 0)
            .single()
            .unwrap()
            .format(ENEX_TIMESTAMP_FORMAT)
            .to_string();

        assert_eq!(format_usec_timestamp(1582955199253000).unwrap(), expected);
    }

    #[test]
    fn given_sub_second_remainder_when_formatting_then_truncates() {
        assert_eq!(
            format_usec_timestamp(1582955199999999).unwrap(),
            format_usec_timestamp(1582955199000000).unwrap()
        );
    }

    #[test]
    fn given_same_input_when_formatting_twice_then_is_deterministic() {
        assert_eq!(
            format_usec_timestamp(1600000000000000).unwrap(),
            format_usec_timestamp(1600000000000000).unwrap()
        );
    }

    #[test]
    fn given_absurd_timestamp_when_formatting_then_returns_error() {
        let result = format_usec_timestamp(i64::MAX);

        assert!(matches!(result, Err(DomainError::TimestampOutOfRange(i64::MAX))));
    }
}
