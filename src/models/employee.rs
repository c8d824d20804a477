//! Employee model.
//!
//! Employees are owned by HR and read-only to this engine: the lifecycle
//! manager selects active employees and dispatches each to a wage
//! calculator based on employment type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an employee is paid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Paid per attended day, plus a conditional meal allowance.
    Daily,
    /// Paid per unit of production at a job-type-specific rate.
    Contract,
}

/// An employee record as seen by the payroll core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique id of the employee.
    pub id: i64,
    /// Stable employee code (e.g., "EMP-007").
    pub code: String,
    /// Display name.
    pub name: String,
    /// How this employee is paid.
    pub employment_type: EmploymentType,
    /// Rate per attended day. Only meaningful for daily workers; a daily
    /// worker without a rate earns a zero base salary.
    pub daily_rate: Option<Decimal>,
    /// Inactive employees are skipped by payroll processing.
    pub is_active: bool,
}
