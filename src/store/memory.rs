//! In-memory [`DataStore`] implementation.
//!
//! Backs the test suite, the benchmarks, and any deployment that does not
//! need durable storage. All state lives behind a single async `RwLock`;
//! the payroll upsert key (pay_period_id, employee_id) is enforced here.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, Distributor, Employee, IntakeRecord, JobRate, PayPeriod, PayrollRecord,
    PeriodStatus, ProductionRecord, SortingRecord,
};

use super::{AttendanceFilter, DataStore, DateRange, PayrollFilter, ProductionFilter};

#[derive(Default)]
struct Inner {
    pay_periods: HashMap<i64, PayPeriod>,
    employees: Vec<Employee>,
    attendance: Vec<AttendanceRecord>,
    production: Vec<ProductionRecord>,
    intakes: Vec<IntakeRecord>,
    sorting: Vec<SortingRecord>,
    distributors: Vec<Distributor>,
    job_rates: Vec<JobRate>,
    payroll: Vec<PayrollRecord>,
}

/// An in-memory store with seeding helpers.
///
/// # Example
///
/// ```
/// use payroll_engine::store::MemoryStore;
///
/// let store = MemoryStore::new();
/// ```
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a pay period.
    pub async fn add_pay_period(&self, period: PayPeriod) {
        self.inner.write().await.pay_periods.insert(period.id, period);
    }

    /// Seeds an employee.
    pub async fn add_employee(&self, employee: Employee) {
        self.inner.write().await.employees.push(employee);
    }

    /// Seeds an attendance record.
    pub async fn add_attendance(&self, record: AttendanceRecord) {
        self.inner.write().await.attendance.push(record);
    }

    /// Seeds a production record.
    pub async fn add_production(&self, record: ProductionRecord) {
        self.inner.write().await.production.push(record);
    }

    /// Seeds an intake record.
    pub async fn add_intake(&self, record: IntakeRecord) {
        self.inner.write().await.intakes.push(record);
    }

    /// Seeds a sorting record.
    pub async fn add_sorting(&self, record: SortingRecord) {
        self.inner.write().await.sorting.push(record);
    }

    /// Seeds a distributor.
    pub async fn add_distributor(&self, distributor: Distributor) {
        self.inner.write().await.distributors.push(distributor);
    }

    /// Seeds a job rate.
    pub async fn add_job_rate(&self, rate: JobRate) {
        self.inner.write().await.job_rates.push(rate);
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn pay_period(&self, id: i64) -> EngineResult<Option<PayPeriod>> {
        Ok(self.inner.read().await.pay_periods.get(&id).cloned())
    }

    async fn pay_periods_within(&self, range: DateRange) -> EngineResult<Vec<PayPeriod>> {
        let inner = self.inner.read().await;
        let mut periods: Vec<PayPeriod> = inner
            .pay_periods
            .values()
            .filter(|p| p.start_date >= range.start() && p.end_date <= range.end())
            .cloned()
            .collect();
        periods.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(periods)
    }

    async fn set_pay_period_status(&self, id: i64, status: PeriodStatus) -> EngineResult<()> {
        let mut inner = self.inner.write().await;
        match inner.pay_periods.get_mut(&id) {
            Some(period) => {
                period.status = status;
                Ok(())
            }
            None => Err(EngineError::NotFound {
                entity: "pay period".to_string(),
                id,
            }),
        }
    }

    async fn employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.inner.read().await.employees.clone())
    }

    async fn active_employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self
            .inner
            .read()
            .await
            .employees
            .iter()
            .filter(|e| e.is_active)
            .cloned()
            .collect())
    }

    async fn attendance(&self, filter: AttendanceFilter) -> EngineResult<Vec<AttendanceRecord>> {
        let inner = self.inner.read().await;
        let mut records: Vec<AttendanceRecord> = inner
            .attendance
            .iter()
            .filter(|r| filter.range.contains(r.date))
            .filter(|r| filter.employee_id.is_none_or(|id| r.employee_id == id))
            .cloned()
            .collect();
        records.sort_by_key(|r| r.date);
        Ok(records)
    }

    async fn production(&self, filter: ProductionFilter) -> EngineResult<Vec<ProductionRecord>> {
        let inner = self.inner.read().await;
        let mut records: Vec<ProductionRecord> = inner
            .production
            .iter()
            .filter(|r| filter.range.contains(r.date))
            .filter(|r| filter.employee_id.is_none_or(|id| r.employee_id == id))
            .cloned()
            .collect();
        records.sort_by_key(|r| r.date);
        Ok(records)
    }

    async fn intakes(&self, range: DateRange) -> EngineResult<Vec<IntakeRecord>> {
        let inner = self.inner.read().await;
        let mut records: Vec<IntakeRecord> = inner
            .intakes
            .iter()
            .filter(|r| range.contains(r.date))
            .cloned()
            .collect();
        records.sort_by_key(|r| r.date);
        Ok(records)
    }

    async fn sorting(&self, range: DateRange) -> EngineResult<Vec<SortingRecord>> {
        let inner = self.inner.read().await;
        let mut records: Vec<SortingRecord> = inner
            .sorting
            .iter()
            .filter(|r| range.contains(r.date))
            .cloned()
            .collect();
        records.sort_by_key(|r| r.date);
        Ok(records)
    }

    async fn distributors(&self) -> EngineResult<Vec<Distributor>> {
        Ok(self.inner.read().await.distributors.clone())
    }

    async fn active_job_rate(&self, job_type: &str) -> EngineResult<Option<JobRate>> {
        let inner = self.inner.read().await;
        Ok(inner
            .job_rates
            .iter()
            .filter(|r| r.is_active && r.job_type == job_type)
            .min_by_key(|r| r.id)
            .cloned())
    }

    async fn payroll_records(&self, filter: PayrollFilter) -> EngineResult<Vec<PayrollRecord>> {
        let inner = self.inner.read().await;
        Ok(inner
            .payroll
            .iter()
            .filter(|r| filter.pay_period_id.is_none_or(|id| r.pay_period_id == id))
            .cloned()
            .collect())
    }

    async fn upsert_payroll_record(&self, record: PayrollRecord) -> EngineResult<()> {
        let mut inner = self.inner.write().await;
        let existing = inner
            .payroll
            .iter_mut()
            .find(|r| r.pay_period_id == record.pay_period_id && r.employee_id == record.employee_id);
        match existing {
            Some(slot) => *slot = record,
            None => inner.payroll.push(record),
        }
        Ok(())
    }

    async fn finalize_payroll_records(
        &self,
        pay_period_id: i64,
        at: DateTime<Utc>,
    ) -> EngineResult<u64> {
        let mut inner = self.inner.write().await;
        let mut touched = 0;
        for record in inner
            .payroll
            .iter_mut()
            .filter(|r| r.pay_period_id == pay_period_id)
        {
            record.status = PeriodStatus::Final;
            record.processed_at = Some(at);
            touched += 1;
        }
        Ok(touched)
    }
}
