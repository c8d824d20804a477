//! Payroll record assembly.
//!
//! Builders turn a wage calculation result into the record persisted by
//! the store. Freshly built records always carry `Validated` status and
//! zeroed bonuses/deductions; finalization happens later as a bulk update
//! scoped to the period.

use rust_decimal::Decimal;

use crate::models::{Employee, PayPeriod, PayrollRecord, PeriodStatus};

use super::{ContractWageResult, DailyWageResult};

/// Builds the payroll record for a daily worker.
pub fn build_daily_record(
    period: &PayPeriod,
    employee: &Employee,
    wage: &DailyWageResult,
) -> PayrollRecord {
    PayrollRecord {
        pay_period_id: period.id,
        employee_id: employee.id,
        employment_type: employee.employment_type,
        days_worked: Some(wage.days_worked),
        daily_rate: wage.daily_rate,
        daily_salary: Some(wage.daily_salary),
        total_production: None,
        contract_salary: None,
        meal_allowance: wage.meal_allowance,
        bonuses: Decimal::ZERO,
        deductions: Decimal::ZERO,
        gross_salary: wage.gross_salary,
        net_salary: wage.net_salary,
        status: PeriodStatus::Validated,
        processed_at: None,
    }
}

/// Builds the payroll record for a contract worker.
///
/// Only the aggregate production and salary are persisted; the per-type
/// breakdown stays on the [`ContractWageResult`] for the caller's
/// response payload.
pub fn build_contract_record(
    period: &PayPeriod,
    employee: &Employee,
    wage: &ContractWageResult,
) -> PayrollRecord {
    PayrollRecord {
        pay_period_id: period.id,
        employee_id: employee.id,
        employment_type: employee.employment_type,
        days_worked: None,
        daily_rate: None,
        daily_salary: None,
        total_production: Some(wage.total_production),
        contract_salary: Some(wage.contract_salary),
        meal_allowance: Decimal::ZERO,
        bonuses: Decimal::ZERO,
        deductions: Decimal::ZERO,
        gross_salary: wage.gross_salary,
        net_salary: wage.net_salary,
        status: PeriodStatus::Validated,
        processed_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmploymentType;
    use crate::payroll::{calculate_contract_wage, calculate_daily_wage};
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn period() -> PayPeriod {
        PayPeriod {
            id: 7,
            name: "Week 2 Jan 2026".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
            status: PeriodStatus::Draft,
        }
    }

    fn employee(employment_type: EmploymentType) -> Employee {
        Employee {
            id: 3,
            code: "EMP-003".to_string(),
            name: "Siti Rahma".to_string(),
            employment_type,
            daily_rate: Some(Decimal::from(80_000)),
            is_active: true,
        }
    }

    #[test]
    fn test_daily_record_is_validated_with_zeroed_adjustments() {
        let employee = employee(EmploymentType::Daily);
        let wage = calculate_daily_wage(&employee, &[], Decimal::from(25_000));
        let record = build_daily_record(&period(), &employee, &wage);

        assert_eq!(record.pay_period_id, 7);
        assert_eq!(record.employee_id, 3);
        assert_eq!(record.status, PeriodStatus::Validated);
        assert_eq!(record.bonuses, Decimal::ZERO);
        assert_eq!(record.deductions, Decimal::ZERO);
        assert_eq!(record.days_worked, Some(0));
        assert_eq!(record.total_production, None);
        assert_eq!(record.processed_at, None);
    }

    #[test]
    fn test_contract_record_carries_aggregate_only() {
        let employee = employee(EmploymentType::Contract);
        let wage = calculate_contract_wage(&[], &HashMap::new());
        let record = build_contract_record(&period(), &employee, &wage);

        assert_eq!(record.total_production, Some(Decimal::ZERO));
        assert_eq!(record.contract_salary, Some(Decimal::ZERO));
        assert_eq!(record.days_worked, None);
        assert_eq!(record.daily_salary, None);
        assert_eq!(record.meal_allowance, Decimal::ZERO);
        assert_eq!(record.status, PeriodStatus::Validated);
    }
}
