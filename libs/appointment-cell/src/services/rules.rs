use tracing::debug;

use crate::models::{AppointmentError, AppointmentKind, AppointmentValidationRules, NormalizedTime};

impl AppointmentValidationRules {
    /// Applies the booking rules in a fixed order and reports only the first
    /// failure: kind, then hour range, then minute interval.
    pub fn validate(
        &self,
        kind: &str,
        time: &NormalizedTime,
    ) -> Result<AppointmentKind, AppointmentError> {
        let kind: AppointmentKind = kind.parse().map_err(|_| AppointmentError::InvalidKind)?;

        if time.hour < self.min_hour || time.hour > self.max_hour {
            debug!("Hour {} outside {}..={}", time.hour, self.min_hour, self.max_hour);
            return Err(AppointmentError::InvalidHour);
        }

        if !self.is_on_interval(time.minute) {
            debug!("Minute {} not on a {} minute interval", time.minute, self.minute_interval);
            return Err(AppointmentError::InvalidMinuteInterval);
        }

        Ok(kind)
    }

    fn is_on_interval(&self, minute: i32) -> bool {
        (0..60).contains(&minute) && minute % self.minute_interval == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Meridiem;
    use assert_matches::assert_matches;

    fn time(hour: i32, minute: i32) -> NormalizedTime {
        NormalizedTime {
            hour,
            minute,
            meridiem: Meridiem::Am,
            canonical: format!("{}:{:02}AM", hour, minute),
        }
    }

    #[test]
    fn accepts_both_kinds() {
        let rules = AppointmentValidationRules::default();
        assert_eq!(rules.validate("New Patient", &time(8, 0)).unwrap(), AppointmentKind::NewPatient);
        assert_eq!(rules.validate("Follow-up", &time(12, 45)).unwrap(), AppointmentKind::FollowUp);
    }

    #[test]
    fn rejects_unknown_kind() {
        let rules = AppointmentValidationRules::default();
        for kind in ["Invalid", "", "new patient", "Follow-Up", "Followup"] {
            assert_matches!(rules.validate(kind, &time(8, 0)), Err(AppointmentError::InvalidKind));
        }
    }

    #[test]
    fn hour_must_be_on_twelve_hour_clock() {
        let rules = AppointmentValidationRules::default();
        for hour in 1..=12 {
            assert!(rules.validate("New Patient", &time(hour, 30)).is_ok(), "hour {}", hour);
        }
        for hour in [0, 13, 23, 99] {
            assert_matches!(rules.validate("New Patient", &time(hour, 30)), Err(AppointmentError::InvalidHour));
        }
    }

    #[test]
    fn minutes_must_be_quarter_hours() {
        let rules = AppointmentValidationRules::default();
        for minute in 0..60 {
            let result = rules.validate("Follow-up", &time(9, minute));
            if minute % 15 == 0 {
                assert!(result.is_ok(), "minute {}", minute);
            } else {
                assert_matches!(result, Err(AppointmentError::InvalidMinuteInterval));
            }
        }
        for minute in [-10, -15, 60, 75, 90] {
            assert_matches!(
                rules.validate("Follow-up", &time(9, minute)),
                Err(AppointmentError::InvalidMinuteInterval)
            );
        }
    }

    #[test]
    fn first_failure_wins() {
        let rules = AppointmentValidationRules::default();
        assert_matches!(rules.validate("Invalid", &time(0, 7)), Err(AppointmentError::InvalidKind));
        assert_matches!(rules.validate("New Patient", &time(13, 7)), Err(AppointmentError::InvalidHour));
    }
}
