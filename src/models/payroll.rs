//! Payroll record model.
//!
//! Exactly one record exists per (pay_period_id, employee_id) after a
//! successful processing run; that pair is the upsert key at the store.
//! All amounts are non-negative.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmploymentType, PeriodStatus};

/// The computed pay for one employee in one pay period.
///
/// Daily workers populate `days_worked`/`daily_rate`/`daily_salary`;
/// contract workers populate `total_production`/`contract_salary`. The
/// `bonuses` and `deductions` fields are carried for schema parity but are
/// never read by either wage calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// The pay period this record belongs to.
    pub pay_period_id: i64,
    /// The employee being paid.
    pub employee_id: i64,
    /// Employment type at computation time.
    pub employment_type: EmploymentType,
    /// Days with `Present` status in the period (daily workers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_worked: Option<u32>,
    /// The daily rate used (daily workers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<Decimal>,
    /// `days_worked × daily_rate` (daily workers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_salary: Option<Decimal>,
    /// Total quantity produced across all job types (contract workers),
    /// including types that had no active rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_production: Option<Decimal>,
    /// Sum of `quantity × rate` over rated job types (contract workers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_salary: Option<Decimal>,
    /// Meal allowance amount for the period.
    pub meal_allowance: Decimal,
    /// Modeled but unused by computation; always zero.
    pub bonuses: Decimal,
    /// Modeled but unused by computation; always zero.
    pub deductions: Decimal,
    /// Gross salary for the period.
    pub gross_salary: Decimal,
    /// Net salary for the period.
    pub net_salary: Decimal,
    /// Lifecycle status; mirrors the pay period's once finalized.
    pub status: PeriodStatus,
    /// Set when the record is finalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
}
