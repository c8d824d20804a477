//! Attendance-based wage calculation for daily workers.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{AttendanceRecord, AttendanceStatus, Employee};

/// The result of a daily-worker wage calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyWageResult {
    /// Number of attendance records with `Present` status.
    pub days_worked: u32,
    /// Number of attendance records flagged with a meal allowance.
    pub meal_days: u32,
    /// The rate applied per worked day, if the employee has one.
    pub daily_rate: Option<Decimal>,
    /// `days_worked × daily_rate` (zero when the rate is absent).
    pub daily_salary: Decimal,
    /// `meal_days × meal_allowance_per_day`.
    pub meal_allowance: Decimal,
    /// Daily salary plus meal allowance.
    pub gross_salary: Decimal,
    /// Equal to gross: no deduction logic applies.
    pub net_salary: Decimal,
}

/// Derives a daily worker's pay from attendance records.
///
/// Only `Present` days count as worked. The meal-allowance day count is
/// independent of status: any record flagged at creation time contributes.
/// A daily worker without a rate earns a zero base salary, and zero
/// attendance records yield an all-zero result.
///
/// # Arguments
///
/// * `employee` - The daily worker being paid
/// * `records` - Attendance records already scoped to the pay period
/// * `meal_allowance_per_day` - Fixed amount per meal-allowance day
pub fn calculate_daily_wage(
    employee: &Employee,
    records: &[AttendanceRecord],
    meal_allowance_per_day: Decimal,
) -> DailyWageResult {
    let days_worked = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Present)
        .count() as u32;
    let meal_days = records.iter().filter(|r| r.meal_allowance).count() as u32;

    let daily_rate = employee.daily_rate;
    let daily_salary = daily_rate.unwrap_or(Decimal::ZERO) * Decimal::from(days_worked);
    let meal_allowance = meal_allowance_per_day * Decimal::from(meal_days);
    let gross_salary = daily_salary + meal_allowance;

    DailyWageResult {
        days_worked,
        meal_days,
        daily_rate,
        daily_salary,
        meal_allowance,
        gross_salary,
        net_salary: gross_salary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmploymentType;
    use chrono::NaiveDate;

    const MEAL_ALLOWANCE: Decimal = Decimal::from_parts(25_000, 0, 0, false, 0);

    fn daily_employee(rate: Option<i64>) -> Employee {
        Employee {
            id: 1,
            code: "EMP-001".to_string(),
            name: "Budi Santoso".to_string(),
            employment_type: EmploymentType::Daily,
            daily_rate: rate.map(Decimal::from),
            is_active: true,
        }
    }

    fn record(day: u32, status: AttendanceStatus, meal: bool) -> AttendanceRecord {
        AttendanceRecord {
            id: day as i64,
            employee_id: 1,
            date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            check_in: None,
            check_out: None,
            status,
            hours_worked: None,
            meal_allowance: meal,
        }
    }

    /// Twenty present days, five with meal allowance, at a rate of 80 000.
    #[test]
    fn test_twenty_present_days_with_five_meal_days() {
        let employee = daily_employee(Some(80_000));
        let records: Vec<AttendanceRecord> = (1..=20)
            .map(|day| record(day, AttendanceStatus::Present, day <= 5))
            .collect();

        let result = calculate_daily_wage(&employee, &records, MEAL_ALLOWANCE);

        assert_eq!(result.days_worked, 20);
        assert_eq!(result.meal_days, 5);
        assert_eq!(result.daily_salary, Decimal::from(1_600_000));
        assert_eq!(result.meal_allowance, Decimal::from(125_000));
        assert_eq!(result.gross_salary, Decimal::from(1_725_000));
        assert_eq!(result.net_salary, Decimal::from(1_725_000));
    }

    #[test]
    fn test_only_present_days_count_as_worked() {
        let employee = daily_employee(Some(80_000));
        let records = vec![
            record(1, AttendanceStatus::Present, false),
            record(2, AttendanceStatus::Absent, false),
            record(3, AttendanceStatus::Late, false),
            record(4, AttendanceStatus::EarlyLeave, false),
        ];

        let result = calculate_daily_wage(&employee, &records, MEAL_ALLOWANCE);

        assert_eq!(result.days_worked, 1);
        assert_eq!(result.daily_salary, Decimal::from(80_000));
    }

    #[test]
    fn test_meal_days_counted_regardless_of_status() {
        let employee = daily_employee(Some(80_000));
        let records = vec![
            record(1, AttendanceStatus::Present, true),
            record(2, AttendanceStatus::Late, true),
        ];

        let result = calculate_daily_wage(&employee, &records, MEAL_ALLOWANCE);

        assert_eq!(result.meal_days, 2);
        assert_eq!(result.meal_allowance, Decimal::from(50_000));
    }

    #[test]
    fn test_missing_rate_yields_zero_base_salary() {
        let employee = daily_employee(None);
        let records = vec![record(1, AttendanceStatus::Present, true)];

        let result = calculate_daily_wage(&employee, &records, MEAL_ALLOWANCE);

        assert_eq!(result.daily_salary, Decimal::ZERO);
        // The meal allowance still applies.
        assert_eq!(result.gross_salary, Decimal::from(25_000));
    }

    #[test]
    fn test_zero_records_yield_zero_result() {
        let employee = daily_employee(Some(80_000));
        let result = calculate_daily_wage(&employee, &[], MEAL_ALLOWANCE);

        assert_eq!(result.days_worked, 0);
        assert_eq!(result.meal_days, 0);
        assert_eq!(result.gross_salary, Decimal::ZERO);
        assert_eq!(result.net_salary, Decimal::ZERO);
    }
}
