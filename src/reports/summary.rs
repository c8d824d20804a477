//! Overall operations summary.
//!
//! One cross-cutting payload combining intake, production, attendance and
//! payroll totals for the range, with two derived zero-guarded metrics.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::EngineResult;
use crate::models::AttendanceStatus;
use crate::store::{AttendanceFilter, DateRange, PayrollFilter, ProductionFilter};

use super::{ReportEngine, ratio_percent, safe_average};

/// The overall summary payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallSummary {
    /// Summed intake weight over the range.
    pub total_intake_weight: Decimal,
    /// Summed production quantity over the range.
    pub total_production_quantity: Decimal,
    /// Attendance records with `Present` status over the range.
    pub total_present_days: u64,
    /// Summed net payroll across pay periods fully inside the range.
    pub total_net_payroll: Decimal,
    /// Distinct employees with a payroll record in those periods.
    pub employees_paid: u64,
    /// `production / intake × 100`; zero when no intake was recorded.
    pub production_efficiency: Decimal,
    /// `total_net_payroll / employees_paid`; zero when nobody was paid.
    pub avg_payroll_per_employee: Decimal,
}

impl ReportEngine {
    /// Computes the overall summary for the range.
    pub async fn overall_summary(&self, range: DateRange) -> EngineResult<OverallSummary> {
        let attendance_filter = AttendanceFilter {
            employee_id: None,
            range,
        };
        let production_filter = ProductionFilter {
            employee_id: None,
            range,
        };
        let (intakes, production, attendance, periods, records) = tokio::join!(
            self.store().intakes(range),
            self.store().production(production_filter),
            self.store().attendance(attendance_filter),
            self.store().pay_periods_within(range),
            self.store().payroll_records(PayrollFilter::default()),
        );
        let (intakes, production, attendance, periods, records) =
            (intakes?, production?, attendance?, periods?, records?);

        let total_intake_weight: Decimal = intakes.iter().map(|i| i.weight).sum();
        let total_production_quantity: Decimal = production.iter().map(|p| p.quantity).sum();
        let total_present_days = attendance
            .iter()
            .filter(|a| a.status == AttendanceStatus::Present)
            .count() as u64;

        let covered: HashSet<i64> = periods.iter().map(|p| p.id).collect();
        let mut total_net_payroll = Decimal::ZERO;
        let mut paid: HashSet<i64> = HashSet::new();
        for record in records
            .iter()
            .filter(|r| covered.contains(&r.pay_period_id))
        {
            total_net_payroll += record.net_salary;
            paid.insert(record.employee_id);
        }
        let employees_paid = paid.len() as u64;

        Ok(OverallSummary {
            total_intake_weight,
            total_production_quantity,
            total_present_days,
            total_net_payroll,
            employees_paid,
            production_efficiency: ratio_percent(total_production_quantity, total_intake_weight),
            avg_payroll_per_employee: safe_average(total_net_payroll, employees_paid),
        })
    }
}
