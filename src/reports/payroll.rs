//! Payroll report.
//!
//! Covers pay periods that fall entirely inside the requested range:
//! per-period totals, totals split by employment type, and the top
//! earners by net salary.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::EngineResult;
use crate::models::{EmploymentType, PeriodStatus};
use crate::store::{DateRange, PayrollFilter};

use super::{ReportEngine, safe_average};

/// Payroll totals for one pay period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodPayrollSummary {
    /// The pay period's id.
    pub pay_period_id: i64,
    /// The pay period's name.
    pub period_name: String,
    /// The pay period's lifecycle status.
    pub status: PeriodStatus,
    /// Number of payroll records in the period.
    pub employee_count: u64,
    /// Summed gross salary.
    pub total_gross: Decimal,
    /// Summed net salary.
    pub total_net: Decimal,
}

/// Payroll totals for one employment type across all covered periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmploymentTypePayrollSummary {
    /// The employment type.
    pub employment_type: EmploymentType,
    /// Number of payroll records of this type.
    pub record_count: u64,
    /// Summed net salary.
    pub total_net: Decimal,
    /// Mean net salary per record; zero when there are none.
    pub avg_net: Decimal,
}

/// One row of the top-earner table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopEarner {
    /// The employee's id.
    pub employee_id: i64,
    /// The employee's display name, when known.
    pub employee_name: Option<String>,
    /// The employee's stable code, when known.
    pub employee_code: Option<String>,
    /// Summed net salary across the covered periods.
    pub total_net: Decimal,
}

/// The payroll report payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollReport {
    /// Per-period totals, newest period first.
    pub by_period: Vec<PeriodPayrollSummary>,
    /// Totals split by employment type.
    pub by_employment_type: Vec<EmploymentTypePayrollSummary>,
    /// Highest net earners, largest first. Length is bounded by
    /// configuration.
    pub top_earners: Vec<TopEarner>,
}

impl ReportEngine {
    /// Computes the payroll report for the range.
    ///
    /// Only pay periods whose bounds fall entirely inside the range
    /// contribute; a period that merely overlaps the range is excluded.
    pub async fn payroll_report(&self, range: DateRange) -> EngineResult<PayrollReport> {
        let (periods, records, labels) = tokio::join!(
            self.store().pay_periods_within(range),
            self.store().payroll_records(PayrollFilter::default()),
            self.employee_labels(),
        );
        let (periods, records, labels) = (periods?, records?, labels?);

        let covered: HashSet<i64> = periods.iter().map(|p| p.id).collect();
        let records: Vec<_> = records
            .into_iter()
            .filter(|r| covered.contains(&r.pay_period_id))
            .collect();

        let by_period = periods
            .iter()
            .map(|period| {
                let mut summary = PeriodPayrollSummary {
                    pay_period_id: period.id,
                    period_name: period.name.clone(),
                    status: period.status,
                    employee_count: 0,
                    total_gross: Decimal::ZERO,
                    total_net: Decimal::ZERO,
                };
                for record in records.iter().filter(|r| r.pay_period_id == period.id) {
                    summary.employee_count += 1;
                    summary.total_gross += record.gross_salary;
                    summary.total_net += record.net_salary;
                }
                summary
            })
            .collect();

        let mut by_type: BTreeMap<EmploymentType, (u64, Decimal)> = BTreeMap::new();
        let mut by_earner: BTreeMap<i64, Decimal> = BTreeMap::new();
        for record in &records {
            let slot = by_type
                .entry(record.employment_type)
                .or_insert((0, Decimal::ZERO));
            slot.0 += 1;
            slot.1 += record.net_salary;
            *by_earner.entry(record.employee_id).or_insert(Decimal::ZERO) += record.net_salary;
        }

        let by_employment_type = by_type
            .into_iter()
            .map(
                |(employment_type, (record_count, total_net))| EmploymentTypePayrollSummary {
                    employment_type,
                    record_count,
                    total_net,
                    avg_net: safe_average(total_net, record_count),
                },
            )
            .collect();

        let mut top_earners: Vec<TopEarner> = by_earner
            .into_iter()
            .map(|(employee_id, total_net)| {
                let label = labels.get(&employee_id);
                TopEarner {
                    employee_id,
                    employee_name: label.map(|(name, _)| name.clone()),
                    employee_code: label.map(|(_, code)| code.clone()),
                    total_net,
                }
            })
            .collect();
        top_earners.sort_by(|a, b| b.total_net.cmp(&a.total_net));
        top_earners.truncate(self.config().top_earner_limit);

        Ok(PayrollReport {
            by_period,
            by_employment_type,
            top_earners,
        })
    }
}
