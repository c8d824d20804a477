//! Payroll computation.
//!
//! This module contains the pay-period lifecycle manager, the two wage
//! calculators (attendance-based for daily workers, production-based for
//! contract workers), and the payroll record builder.

mod builder;
mod contract;
mod daily;
mod lifecycle;

pub use builder::{build_contract_record, build_daily_record};
pub use contract::{ContractLine, ContractWageResult, calculate_contract_wage};
pub use daily::{DailyWageResult, calculate_daily_wage};
pub use lifecycle::{FinalizeOutcome, PayrollProcessor, ProcessOutcome, ProcessedEmployee};
