//! The medicine reminder builder.
//!
//! Builds the external calendar event URL for a "take your medicine"
//! reminder: the current calendar date combined with the requested time
//! of day, a fixed ten-minute window, and compact UTC timestamps in the
//! `dates` query parameter. Whether the calendar page succeeds is not
//! observed; the reminder is fire-and-forget.

use std::str::FromStr;

use chrono::{DateTime, Duration, TimeZone, Utc};
use meds_types::{NonEmptyText, TimeOfDay};

use crate::constants::{CALENDAR_RENDER_URL, REMINDER_DETAILS, REMINDER_DURATION_MINUTES};
use crate::{PrescriptionError, PrescriptionResult};

/// Compact UTC timestamp format used by the calendar template URL.
const COMPACT_UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// A validated reminder request derived from the two form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequest {
    medicine: NonEmptyText,
    time: TimeOfDay,
}

impl ReminderRequest {
    /// Parses the two reminder form fields.
    ///
    /// Both fields are required. Returns
    /// `PrescriptionError::IncompleteReminderFields` when either is
    /// blank, and `PrescriptionError::InvalidTime` when the time is not
    /// a valid `HH:MM`.
    pub fn parse(medicine: &str, time: &str) -> PrescriptionResult<Self> {
        if medicine.trim().is_empty() || time.trim().is_empty() {
            return Err(PrescriptionError::IncompleteReminderFields);
        }

        Ok(Self {
            medicine: NonEmptyText::new(medicine)?,
            time: TimeOfDay::from_str(time)?,
        })
    }

    pub fn medicine(&self) -> &NonEmptyText {
        &self.medicine
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Event title shown in the calendar.
    pub fn title(&self) -> String {
        format!("Take {}", self.medicine)
    }

    /// Builds the external calendar event URL for this reminder.
    ///
    /// The start instant combines `now`'s calendar date with the
    /// requested time of day, seconds zeroed; the end instant is
    /// exactly ten minutes later. `now` is injected by the caller so
    /// the date maths stays deterministic under test.
    pub fn event_url(&self, now: DateTime<Utc>) -> String {
        let start_naive = now
            .date_naive()
            .and_hms_opt(u32::from(self.time.hour()), u32::from(self.time.minute()), 0)
            .expect("time of day is range-checked");
        let start = Utc.from_utc_datetime(&start_naive);
        let end = start + Duration::minutes(REMINDER_DURATION_MINUTES);

        format!(
            "{}?action=TEMPLATE&text={}&details={}&dates={}/{}",
            CALENDAR_RENDER_URL,
            urlencoding::encode(&self.title()),
            urlencoding::encode(REMINDER_DETAILS),
            start.format(COMPACT_UTC_FORMAT),
            end.format(COMPACT_UTC_FORMAT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 23, 9, 41, 27).unwrap()
    }

    #[test]
    fn test_parse_requires_both_fields() {
        assert!(matches!(
            ReminderRequest::parse("", "14:30"),
            Err(PrescriptionError::IncompleteReminderFields)
        ));
        assert!(matches!(
            ReminderRequest::parse("Metformin", "  "),
            Err(PrescriptionError::IncompleteReminderFields)
        ));

        let err = ReminderRequest::parse("", "").unwrap_err();
        assert_eq!(err.to_string(), "incomplete reminder fields");
    }

    #[test]
    fn test_parse_rejects_malformed_time() {
        assert!(matches!(
            ReminderRequest::parse("Metformin", "half past two"),
            Err(PrescriptionError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_event_url_date_maths() {
        let request = ReminderRequest::parse("Metformin", "14:30").unwrap();
        let url = request.event_url(fixed_now());

        // Start has seconds truncated to zero; end is start plus exactly
        // ten minutes.
        assert!(url.contains("&dates=20260223T143000Z/20260223T144000Z"));
    }

    #[test]
    fn test_event_url_crosses_midnight() {
        let request = ReminderRequest::parse("Metformin", "23:55").unwrap();
        let url = request.event_url(fixed_now());

        assert!(url.contains("&dates=20260223T235500Z/20260224T000500Z"));
    }

    #[test]
    fn test_event_url_encodes_title() {
        let request = ReminderRequest::parse("Metformin 500mg", "08:00").unwrap();
        let url = request.event_url(fixed_now());

        assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE"));
        assert!(url.contains("&text=Take%20Metformin%20500mg"));
        assert!(url.contains("&details=Medicine%20reminder"));
    }
}
