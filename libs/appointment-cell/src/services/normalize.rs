//! Canonical forms for appointment dates and clock times.
//!
//! Normalization is plain string surgery: at most one leading `'0'` is
//! dropped and nothing is checked against a calendar. Every path that stores
//! or looks up a slot must go through these two functions so that stored and
//! queried keys always agree.

use crate::models::{Meridiem, NormalizedTime, TimeFormatError};

/// Drops one leading `'0'` from the whole date string, whichever field it
/// belongs to: `"01/11/2999"` becomes `"1/11/2999"`, `"1/01/2000"` is
/// untouched.
pub fn normalize_date(raw_date: &str) -> String {
    raw_date.strip_prefix('0').unwrap_or(raw_date).to_string()
}

/// Parses `H:MMAM`, `H:MMPM` or the same with one zero-padded hour digit.
///
/// The leading zero is dropped whenever the second character is not `':'`:
/// `"08:15AM"` becomes `"8:15AM"` and `"00:15AM"` becomes `"0:15AM"`, which
/// still carries hour 0. Range checks belong to the validation rules.
pub fn normalize_time(raw_time: &str) -> Result<NormalizedTime, TimeFormatError> {
    let canonical = strip_hour_padding(raw_time);

    let fail = |reason: &'static str| TimeFormatError {
        raw: raw_time.to_string(),
        reason,
    };

    let (hour_part, rest) = canonical
        .split_once(':')
        .ok_or_else(|| fail("missing ':' between hour and minutes"))?;

    let (minute_part, meridiem) = if let Some(minutes) = rest.strip_suffix("AM") {
        (minutes, Meridiem::Am)
    } else if let Some(minutes) = rest.strip_suffix("PM") {
        (minutes, Meridiem::Pm)
    } else {
        return Err(fail("missing AM/PM suffix"));
    };

    let hour = parse_digits(hour_part).ok_or_else(|| fail("hour is not a number"))?;
    let minute = parse_minutes(minute_part).ok_or_else(|| fail("minutes are not a two digit number"))?;

    Ok(NormalizedTime {
        hour,
        minute,
        meridiem,
        canonical: canonical.to_string(),
    })
}

fn strip_hour_padding(raw_time: &str) -> &str {
    let mut chars = raw_time.chars();
    match (chars.next(), chars.next()) {
        (Some('0'), Some(second)) if second != ':' => &raw_time[1..],
        _ => raw_time,
    }
}

fn parse_digits(part: &str) -> Option<i32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

// Negative minutes and minutes of 100 or more parse so that they reach the
// interval rule. Anything that could read as 0..=99 must be exactly two
// digits, which keeps one stored spelling per slot.
fn parse_minutes(part: &str) -> Option<i32> {
    if let Some(digits) = part.strip_prefix('-') {
        return parse_digits(digits).filter(|value| *value > 0).map(|value| -value);
    }

    match part.len() {
        2 => parse_digits(part),
        n if n > 2 && !part.starts_with('0') => parse_digits(part),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_leading_zero_from_date() {
        assert_eq!(normalize_date("01/11/2999"), "1/11/2999");
        assert_eq!(normalize_date("1/11/2000"), "1/11/2000");
        assert_eq!(normalize_date("1/01/2000"), "1/01/2000");
        assert_eq!(normalize_date("001/11/2000"), "01/11/2000");
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn strips_padded_hour() {
        let time = normalize_time("08:00AM").unwrap();
        assert_eq!(time.canonical, "8:00AM");
        assert_eq!((time.hour, time.minute, time.meridiem), (8, 0, Meridiem::Am));
    }

    #[test]
    fn keeps_unpadded_times() {
        let time = normalize_time("10:45PM").unwrap();
        assert_eq!(time.canonical, "10:45PM");
        assert_eq!((time.hour, time.minute, time.meridiem), (10, 45, Meridiem::Pm));
    }

    #[test]
    fn double_zero_hour_loses_one_zero() {
        let time = normalize_time("00:15AM").unwrap();
        assert_eq!(time.canonical, "0:15AM");
        assert_eq!(time.hour, 0);
    }

    #[test]
    fn zero_hour_without_padding_is_left_alone() {
        let time = normalize_time("0:30AM").unwrap();
        assert_eq!(time.canonical, "0:30AM");
        assert_eq!(time.hour, 0);
    }

    #[test]
    fn out_of_range_values_still_parse() {
        assert_eq!(normalize_time("08:60AM").unwrap().minute, 60);
        assert_eq!(normalize_time("13:00PM").unwrap().hour, 13);
    }

    #[test]
    fn negative_minutes_parse() {
        let time = normalize_time("08:-10AM").unwrap();
        assert_eq!(time.canonical, "8:-10AM");
        assert_eq!(time.minute, -10);

        assert_eq!(normalize_time("8:-5AM").unwrap().minute, -5);
        assert_eq!(normalize_time("8:-100AM").unwrap().minute, -100);
    }

    #[test]
    fn minutes_of_a_hundred_or_more_parse() {
        assert_eq!(normalize_time("8:100AM").unwrap().minute, 100);
        assert_eq!(normalize_time("08:120PM").unwrap().minute, 120);
    }

    #[test]
    fn rejects_unparseable_input() {
        for raw in ["", "8", "800AM", "8:00", "8:00am", "ab:00AM", "8:xxAM", "8:5AM", "8:000AM", "8:015AM", "8:-AM", "8:-xAM", "8:-0AM", "8:-00AM", "+8:00AM", ":00AM"] {
            let err = normalize_time(raw).unwrap_err();
            assert_eq!(err.raw, raw);
        }
    }
}
