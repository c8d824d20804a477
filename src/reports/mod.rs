//! Read-only reporting aggregation.
//!
//! The [`ReportEngine`] rolls several operational tables up into
//! cross-cutting metrics for an arbitrary date range. It never mutates
//! anything; each report issues its independent reads concurrently and
//! merges them in application code. Every ratio here is zero-guarded: a
//! zero denominator yields zero, never an error or NaN.

mod attendance;
mod payroll;
mod production;
mod rmp;
mod summary;
mod variance;

pub use attendance::{AttendanceDaySummary, AttendanceReport, EmployeeAttendanceSummary};
pub use payroll::{
    EmploymentTypePayrollSummary, PayrollReport, PeriodPayrollSummary, TopEarner,
};
pub use production::{EmployeeProductionTotal, ProductionReport, ProductionTrendPoint, TypeTotal};
pub use rmp::{DistributorTotal, IntakeDateTotal, RmpReport, SortingDateTotal};
pub use summary::OverallSummary;
pub use variance::{VarianceReport, VarianceRow};

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::store::DataStore;

/// Computes aggregate reports over the operational tables.
pub struct ReportEngine {
    store: Arc<dyn DataStore>,
    config: EngineConfig,
}

impl ReportEngine {
    /// Creates a report engine over the given store and configuration.
    pub fn new(store: Arc<dyn DataStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub(crate) fn store(&self) -> &dyn DataStore {
        self.store.as_ref()
    }

    pub(crate) fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Employee display names and codes keyed by id, for report labels.
    pub(crate) async fn employee_labels(&self) -> EngineResult<HashMap<i64, (String, String)>> {
        let employees = self.store.employees().await?;
        Ok(employees
            .into_iter()
            .map(|e| (e.id, (e.name, e.code)))
            .collect())
    }
}

/// `part / whole × 100`, or zero when `whole` is zero. Normalized so the
/// serialized form carries no trailing zeros.
pub(crate) fn ratio_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        (part / whole * Decimal::from(100)).normalize()
    }
}

/// `total / count`, or zero when `count` is zero. Normalized like
/// [`ratio_percent`].
pub(crate) fn safe_average(total: Decimal, count: u64) -> Decimal {
    if count == 0 {
        Decimal::ZERO
    } else {
        (total / Decimal::from(count)).normalize()
    }
}
