//! Attendance model.
//!
//! One record is expected per (employee, date), though the store does not
//! enforce it. Worked hours and the meal-allowance flag are derived once,
//! at creation time, from the check-in/check-out pair.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Attendance status for a single day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Present for the full day. Only these days count as worked.
    Present,
    /// Absent.
    Absent,
    /// Arrived late.
    Late,
    /// Left before the end of the day.
    EarlyLeave,
}

/// A single day's attendance for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique id of the record.
    pub id: i64,
    /// The employee this record belongs to.
    pub employee_id: i64,
    /// The calendar date of the attendance.
    pub date: NaiveDate,
    /// Check-in time, if recorded.
    pub check_in: Option<NaiveDateTime>,
    /// Check-out time, if recorded.
    pub check_out: Option<NaiveDateTime>,
    /// Attendance status for the day.
    pub status: AttendanceStatus,
    /// Hours between check-in and check-out, rounded to 2 decimals.
    /// `None` when either timestamp is missing.
    pub hours_worked: Option<Decimal>,
    /// True iff more than 8 hours were worked, fixed at creation time.
    pub meal_allowance: bool,
}

impl AttendanceRecord {
    /// Creates a record, deriving `hours_worked` and `meal_allowance` from
    /// the check-in/check-out pair.
    ///
    /// Hours are `(check_out - check_in)` expressed in hours and rounded to
    /// 2 decimal places; the meal allowance applies when the unrounded
    /// duration exceeds 8 hours. With either timestamp missing, hours stay
    /// `None` and no meal allowance is granted.
    pub fn new(
        id: i64,
        employee_id: i64,
        date: NaiveDate,
        check_in: Option<NaiveDateTime>,
        check_out: Option<NaiveDateTime>,
        status: AttendanceStatus,
    ) -> Self {
        let (hours_worked, meal_allowance) = match (check_in, check_out) {
            (Some(start), Some(end)) => {
                let seconds = (end - start).num_seconds();
                let hours = Decimal::from(seconds) / Decimal::from(3600);
                (Some(hours.round_dp(2)), hours > Decimal::from(8))
            }
            _ => (None, false),
        };

        Self {
            id,
            employee_id,
            date,
            check_in,
            check_out,
            status,
            hours_worked,
            meal_allowance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    #[test]
    fn test_hours_derived_from_check_times() {
        let record = AttendanceRecord::new(
            1,
            10,
            date("2026-01-05"),
            Some(dt("2026-01-05 08:00:00")),
            Some(dt("2026-01-05 16:30:00")),
            AttendanceStatus::Present,
        );
        assert_eq!(record.hours_worked, Some(dec("8.50")));
        assert!(record.meal_allowance);
    }

    #[test]
    fn test_exactly_eight_hours_gets_no_meal_allowance() {
        let record = AttendanceRecord::new(
            1,
            10,
            date("2026-01-05"),
            Some(dt("2026-01-05 08:00:00")),
            Some(dt("2026-01-05 16:00:00")),
            AttendanceStatus::Present,
        );
        assert_eq!(record.hours_worked, Some(dec("8.00")));
        assert!(!record.meal_allowance);
    }

    #[test]
    fn test_hours_rounded_to_two_decimals() {
        // 7h 50m = 7.8333... hours
        let record = AttendanceRecord::new(
            1,
            10,
            date("2026-01-05"),
            Some(dt("2026-01-05 08:00:00")),
            Some(dt("2026-01-05 15:50:00")),
            AttendanceStatus::Present,
        );
        assert_eq!(record.hours_worked, Some(dec("7.83")));
    }

    #[test]
    fn test_missing_check_out_leaves_hours_empty() {
        let record = AttendanceRecord::new(
            1,
            10,
            date("2026-01-05"),
            Some(dt("2026-01-05 08:00:00")),
            None,
            AttendanceStatus::Present,
        );
        assert_eq!(record.hours_worked, None);
        assert!(!record.meal_allowance);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::EarlyLeave).unwrap(),
            "\"early_leave\""
        );
    }
}
