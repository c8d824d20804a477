//! Attendance report.
//!
//! Per-date and per-employee status counts, plus the average hours worked
//! across `Present` records in the range.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::EngineResult;
use crate::models::AttendanceStatus;
use crate::store::{AttendanceFilter, DateRange};

use super::{ReportEngine, safe_average};

/// Status counts for one date.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AttendanceDaySummary {
    /// The attendance date.
    pub date: NaiveDate,
    /// Records with `Present` status.
    pub present: u64,
    /// Records with `Absent` status.
    pub absent: u64,
    /// Records with `Late` status.
    pub late: u64,
    /// All records on the date, regardless of status.
    pub total: u64,
}

/// Day counts by status for one employee over the range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeAttendanceSummary {
    /// The employee's id.
    pub employee_id: i64,
    /// The employee's display name, when known.
    pub employee_name: Option<String>,
    /// The employee's stable code, when known.
    pub employee_code: Option<String>,
    /// Days with `Present` status.
    pub present_days: u64,
    /// Days with `Absent` status.
    pub absent_days: u64,
    /// Days with `Late` status.
    pub late_days: u64,
    /// All recorded days.
    pub total_days: u64,
}

/// The attendance report payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceReport {
    /// Per-date counts, date-ascending.
    pub by_date: Vec<AttendanceDaySummary>,
    /// Per-employee counts, most present days first.
    pub by_employee: Vec<EmployeeAttendanceSummary>,
    /// Mean of `hours_worked` across `Present` records that carry hours;
    /// zero when there are none.
    pub avg_hours_worked: Decimal,
}

impl ReportEngine {
    /// Computes the attendance report for the range.
    pub async fn attendance_report(&self, range: DateRange) -> EngineResult<AttendanceReport> {
        let filter = AttendanceFilter {
            employee_id: None,
            range,
        };
        let (records, labels) = tokio::join!(self.store().attendance(filter), self.employee_labels());
        let (records, labels) = (records?, labels?);

        let mut by_date: BTreeMap<NaiveDate, AttendanceDaySummary> = BTreeMap::new();
        let mut by_employee: BTreeMap<i64, (u64, u64, u64, u64)> = BTreeMap::new();
        let mut hours_total = Decimal::ZERO;
        let mut hours_count: u64 = 0;

        for record in &records {
            let day = by_date.entry(record.date).or_insert(AttendanceDaySummary {
                date: record.date,
                ..AttendanceDaySummary::default()
            });
            let employee = by_employee.entry(record.employee_id).or_insert((0, 0, 0, 0));

            day.total += 1;
            employee.3 += 1;
            match record.status {
                AttendanceStatus::Present => {
                    day.present += 1;
                    employee.0 += 1;
                    if let Some(hours) = record.hours_worked {
                        hours_total += hours;
                        hours_count += 1;
                    }
                }
                AttendanceStatus::Absent => {
                    day.absent += 1;
                    employee.1 += 1;
                }
                AttendanceStatus::Late => {
                    day.late += 1;
                    employee.2 += 1;
                }
                AttendanceStatus::EarlyLeave => {}
            }
        }

        let by_date = by_date.into_values().collect();
        let mut by_employee: Vec<EmployeeAttendanceSummary> = by_employee
            .into_iter()
            .map(
                |(employee_id, (present_days, absent_days, late_days, total_days))| {
                    let label = labels.get(&employee_id);
                    EmployeeAttendanceSummary {
                        employee_id,
                        employee_name: label.map(|(name, _)| name.clone()),
                        employee_code: label.map(|(_, code)| code.clone()),
                        present_days,
                        absent_days,
                        late_days,
                        total_days,
                    }
                },
            )
            .collect();
        by_employee.sort_by(|a, b| b.present_days.cmp(&a.present_days));

        Ok(AttendanceReport {
            by_date,
            by_employee,
            avg_hours_worked: safe_average(hours_total, hours_count),
        })
    }
}
