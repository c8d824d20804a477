//! Pay-period lifecycle management.
//!
//! [`PayrollProcessor`] owns the draft → validated → final state machine
//! and orchestrates per-employee wage computation. Writes for the same
//! period are serialized through a per-period mutex, since the per-employee
//! write loop is not naturally idempotent on its own; the store's upsert
//! key (pay_period_id, employee_id) handles re-runs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::info;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmploymentType, JobRate, PayPeriod, PayrollRecord, PeriodStatus};
use crate::store::{AttendanceFilter, DataStore, DateRange, ProductionFilter};

use super::{
    ContractLine, build_contract_record, build_daily_record, calculate_contract_wage,
    calculate_daily_wage,
};

/// One employee's outcome within a processing run.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedEmployee {
    /// The employee's id.
    pub employee_id: i64,
    /// The employee's stable code.
    pub employee_code: String,
    /// The record that was upserted.
    pub record: PayrollRecord,
    /// Per-type salary breakdown, present for contract workers. The
    /// persisted record only keeps the aggregate; this is the audit view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_lines: Option<Vec<ContractLine>>,
}

/// The outcome of a processing run.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
    /// The pay period after the run (status `Validated`).
    pub pay_period: PayPeriod,
    /// One entry per active employee.
    pub employees: Vec<ProcessedEmployee>,
}

/// The outcome of finalization.
#[derive(Debug, Clone, Serialize)]
pub struct FinalizeOutcome {
    /// The pay period after finalization (status `Final`).
    pub pay_period: PayPeriod,
    /// Number of payroll records moved to `Final`.
    pub records_finalized: u64,
    /// The timestamp stamped onto every finalized record.
    pub processed_at: DateTime<Utc>,
}

/// Orchestrates payroll processing and finalization for pay periods.
pub struct PayrollProcessor {
    store: Arc<dyn DataStore>,
    config: EngineConfig,
    period_locks: StdMutex<HashMap<i64, Arc<Mutex<()>>>>,
}

impl PayrollProcessor {
    /// Creates a processor over the given store and configuration.
    pub fn new(store: Arc<dyn DataStore>, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            period_locks: StdMutex::new(HashMap::new()),
        }
    }

    fn period_lock(&self, pay_period_id: i64) -> EngineResult<Arc<Mutex<()>>> {
        let mut locks = self
            .period_locks
            .lock()
            .map_err(|_| EngineError::unexpected("period lock registry poisoned"))?;
        Ok(locks.entry(pay_period_id).or_default().clone())
    }

    async fn load_period(&self, pay_period_id: i64) -> EngineResult<PayPeriod> {
        self.store
            .pay_period(pay_period_id)
            .await?
            .ok_or(EngineError::NotFound {
                entity: "pay period".to_string(),
                id: pay_period_id,
            })
    }

    /// Computes and upserts one payroll record per active employee, then
    /// moves the period to `Validated`.
    ///
    /// Fails `NotFound` when the period does not exist and `Conflict` when
    /// it is already `Final`. Re-processing a `Validated` period overwrites
    /// its records instead of duplicating them.
    pub async fn process(&self, pay_period_id: i64) -> EngineResult<ProcessOutcome> {
        let lock = self.period_lock(pay_period_id)?;
        let _guard = lock.lock().await;

        let mut period = self.load_period(pay_period_id).await?;
        if period.status.is_final() {
            return Err(EngineError::conflict(format!(
                "pay period {} is final and immutable",
                pay_period_id
            )));
        }

        let range = period.date_range()?;
        let employees = self.store.active_employees().await?;
        info!(
            pay_period_id,
            employees = employees.len(),
            "Processing payroll"
        );

        let mut processed = Vec::with_capacity(employees.len());
        for employee in &employees {
            let entry = match employee.employment_type {
                EmploymentType::Daily => self.process_daily(&period, employee, range).await?,
                EmploymentType::Contract => self.process_contract(&period, employee, range).await?,
            };
            processed.push(entry);
        }

        self.store
            .set_pay_period_status(pay_period_id, PeriodStatus::Validated)
            .await?;
        period.status = PeriodStatus::Validated;

        info!(
            pay_period_id,
            records = processed.len(),
            "Payroll processed"
        );

        Ok(ProcessOutcome {
            pay_period: period,
            employees: processed,
        })
    }

    async fn process_daily(
        &self,
        period: &PayPeriod,
        employee: &Employee,
        range: DateRange,
    ) -> EngineResult<ProcessedEmployee> {
        let records = self
            .store
            .attendance(AttendanceFilter {
                employee_id: Some(employee.id),
                range,
            })
            .await?;

        let wage = calculate_daily_wage(employee, &records, self.config.meal_allowance_per_day);
        let record = build_daily_record(period, employee, &wage);
        self.store.upsert_payroll_record(record.clone()).await?;

        Ok(ProcessedEmployee {
            employee_id: employee.id,
            employee_code: employee.code.clone(),
            record,
            contract_lines: None,
        })
    }

    async fn process_contract(
        &self,
        period: &PayPeriod,
        employee: &Employee,
        range: DateRange,
    ) -> EngineResult<ProcessedEmployee> {
        let records = self
            .store
            .production(ProductionFilter {
                employee_id: Some(employee.id),
                range,
            })
            .await?;

        let mut rates: HashMap<String, JobRate> = HashMap::new();
        for record in &records {
            if rates.contains_key(&record.production_type) {
                continue;
            }
            if let Some(rate) = self.store.active_job_rate(&record.production_type).await? {
                rates.insert(record.production_type.clone(), rate);
            }
        }

        let wage = calculate_contract_wage(&records, &rates);
        let record = build_contract_record(period, employee, &wage);
        self.store.upsert_payroll_record(record.clone()).await?;

        Ok(ProcessedEmployee {
            employee_id: employee.id,
            employee_code: employee.code.clone(),
            record,
            contract_lines: Some(wage.lines),
        })
    }

    /// Locks the period and bulk-finalizes its payroll records.
    ///
    /// Any non-final period may be finalized, including a `Draft` one that
    /// was never processed. A second finalize is a `Conflict` and leaves
    /// the stored state untouched.
    pub async fn finalize(&self, pay_period_id: i64) -> EngineResult<FinalizeOutcome> {
        let lock = self.period_lock(pay_period_id)?;
        let _guard = lock.lock().await;

        let mut period = self.load_period(pay_period_id).await?;
        if period.status.is_final() {
            return Err(EngineError::conflict(format!(
                "pay period {} is already final",
                pay_period_id
            )));
        }

        let processed_at = Utc::now();
        self.store
            .set_pay_period_status(pay_period_id, PeriodStatus::Final)
            .await?;
        let records_finalized = self
            .store
            .finalize_payroll_records(pay_period_id, processed_at)
            .await?;
        period.status = PeriodStatus::Final;

        info!(pay_period_id, records_finalized, "Payroll finalized");

        Ok(FinalizeOutcome {
            pay_period: period,
            records_finalized,
            processed_at,
        })
    }
}
