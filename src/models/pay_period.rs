//! Pay period model and lifecycle status.
//!
//! A pay period is a named date range over which payroll is computed and
//! eventually locked. Its status is monotonic: once `Final`, neither the
//! period nor its payroll records may change again.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::store::DateRange;

/// Lifecycle status of a pay period (and of its payroll records).
///
/// Transitions only move forward: `Draft` → `Validated` → `Final`, with
/// `Draft` → `Final` also permitted (a period may be locked without a
/// prior processing run). No transition returns to an earlier state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    /// Freshly created, no payroll computed yet.
    Draft,
    /// Payroll records generated and awaiting finalization.
    Validated,
    /// Locked. Terminal state.
    Final,
}

impl PeriodStatus {
    /// Returns true once the period has reached its terminal state.
    pub fn is_final(self) -> bool {
        self == PeriodStatus::Final
    }
}

/// A named date range over which payroll is computed.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayPeriod, PeriodStatus};
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     id: 1,
///     name: "Week 1 Jan 2026".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
///     status: PeriodStatus::Draft,
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 7).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Unique id of the pay period.
    pub id: i64,
    /// Human-readable period name (e.g., "Week 1 Jan 2026").
    pub name: String,
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// Current lifecycle status.
    pub status: PeriodStatus,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The period's bounds as a validated [`DateRange`].
    pub fn date_range(&self) -> EngineResult<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_period(status: PeriodStatus) -> PayPeriod {
        PayPeriod {
            id: 1,
            name: "Week 1 Jan 2026".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
            status,
        }
    }

    #[test]
    fn test_contains_date_within_period() {
        let period = create_period(PeriodStatus::Draft);
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 7).unwrap()));
    }

    #[test]
    fn test_contains_date_on_bounds() {
        let period = create_period(PeriodStatus::Draft);
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
    }

    #[test]
    fn test_contains_date_outside_period() {
        let period = create_period(PeriodStatus::Draft);
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 4).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()));
    }

    #[test]
    fn test_date_range_covers_the_period() {
        let period = create_period(PeriodStatus::Draft);
        let range = period.date_range().unwrap();
        assert_eq!(range.start(), period.start_date);
        assert_eq!(range.end(), period.end_date);
    }

    #[test]
    fn test_status_ordering_is_monotonic() {
        assert!(PeriodStatus::Draft < PeriodStatus::Validated);
        assert!(PeriodStatus::Validated < PeriodStatus::Final);
    }

    #[test]
    fn test_only_final_is_final() {
        assert!(!PeriodStatus::Draft.is_final());
        assert!(!PeriodStatus::Validated.is_final());
        assert!(PeriodStatus::Final.is_final());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PeriodStatus::Validated).unwrap(),
            "\"validated\""
        );
        assert_eq!(
            serde_json::from_str::<PeriodStatus>("\"final\"").unwrap(),
            PeriodStatus::Final
        );
    }

    #[test]
    fn test_serialize_pay_period() {
        let period = create_period(PeriodStatus::Draft);
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start_date\":\"2026-01-05\""));
        assert!(json.contains("\"status\":\"draft\""));
    }
}
