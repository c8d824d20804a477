//! The data-access collaborator.
//!
//! The engine core never issues queries of its own; it composes the typed
//! operations of the [`DataStore`] trait — single-record lookup,
//! range-filtered lists over typed filter structs, and a handful of
//! payroll mutations. Grouping and aggregation happen in the engine over
//! the ordered rows these operations return, which keeps the report logic
//! independent of the storage technology.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, Distributor, Employee, IntakeRecord, JobRate, PayPeriod, PayrollRecord,
    PeriodStatus, ProductionRecord, SortingRecord,
};

/// An inclusive date range.
///
/// Construction validates the ordering, so a `DateRange` in hand is always
/// well-formed.
///
/// # Example
///
/// ```
/// use payroll_engine::store::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// ).unwrap();
/// assert!(range.contains(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end` with a `Validation` error.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::validation(format!(
                "start_date {} is after end_date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// The inclusive start of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The inclusive end of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks if a date falls within the range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Filter for attendance lookups.
#[derive(Debug, Clone, Copy)]
pub struct AttendanceFilter {
    /// Restrict to one employee, or all when `None`.
    pub employee_id: Option<i64>,
    /// The date range to cover.
    pub range: DateRange,
}

/// Filter for production lookups.
#[derive(Debug, Clone, Copy)]
pub struct ProductionFilter {
    /// Restrict to one employee, or all when `None`.
    pub employee_id: Option<i64>,
    /// The date range to cover.
    pub range: DateRange,
}

/// Filter for payroll record lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayrollFilter {
    /// Restrict to one pay period, or all when `None`.
    pub pay_period_id: Option<i64>,
}

/// Typed data access over the entities of the system.
///
/// List operations return ordered sequences: attendance and production
/// rows come back date-ascending, pay periods newest-first. Implementors
/// surface infrastructure failures as [`EngineError::Unexpected`].
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Looks up one pay period by id.
    async fn pay_period(&self, id: i64) -> EngineResult<Option<PayPeriod>>;

    /// Lists pay periods whose bounds fall entirely inside `range`,
    /// newest first.
    async fn pay_periods_within(&self, range: DateRange) -> EngineResult<Vec<PayPeriod>>;

    /// Sets the status of a pay period. Fails `NotFound` if absent.
    async fn set_pay_period_status(&self, id: i64, status: PeriodStatus) -> EngineResult<()>;

    /// Lists every employee.
    async fn employees(&self) -> EngineResult<Vec<Employee>>;

    /// Lists active employees only.
    async fn active_employees(&self) -> EngineResult<Vec<Employee>>;

    /// Lists attendance records matching the filter, date-ascending.
    async fn attendance(&self, filter: AttendanceFilter) -> EngineResult<Vec<AttendanceRecord>>;

    /// Lists production records matching the filter, date-ascending.
    async fn production(&self, filter: ProductionFilter) -> EngineResult<Vec<ProductionRecord>>;

    /// Lists intake records in the range, date-ascending.
    async fn intakes(&self, range: DateRange) -> EngineResult<Vec<IntakeRecord>>;

    /// Lists sorting records in the range, date-ascending.
    async fn sorting(&self, range: DateRange) -> EngineResult<Vec<SortingRecord>>;

    /// Lists every distributor.
    async fn distributors(&self) -> EngineResult<Vec<Distributor>>;

    /// Finds the active rate for a job type. When several are active the
    /// pick is deterministic: the lowest id wins.
    async fn active_job_rate(&self, job_type: &str) -> EngineResult<Option<JobRate>>;

    /// Lists payroll records matching the filter.
    async fn payroll_records(&self, filter: PayrollFilter) -> EngineResult<Vec<PayrollRecord>>;

    /// Inserts or replaces the record keyed on
    /// (pay_period_id, employee_id). This key is what makes re-processing
    /// a period overwrite instead of duplicate.
    async fn upsert_payroll_record(&self, record: PayrollRecord) -> EngineResult<()>;

    /// Bulk-moves every record of the period to `Final`, stamping
    /// `processed_at`. Returns the number of records touched.
    async fn finalize_payroll_records(
        &self,
        pay_period_id: i64,
        at: DateTime<Utc>,
    ) -> EngineResult<u64>;
}
