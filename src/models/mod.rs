//! Core data models for the payroll engine.
//!
//! This module contains all the domain records used throughout the engine.

mod attendance;
mod employee;
mod intake;
mod pay_period;
mod payroll;
mod production;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::{Employee, EmploymentType};
pub use intake::{Distributor, IntakeRecord, QualityGrade, SortingRecord};
pub use pay_period::{PayPeriod, PeriodStatus};
pub use payroll::PayrollRecord;
pub use production::{JobRate, ProductionRecord};
