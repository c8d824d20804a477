//! Intake-versus-production variance report.
//!
//! Lines up intake weight against production quantity per date and reports
//! the gap. A date appearing on only one side still gets a row, with the
//! missing side counted as zero.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::EngineResult;
use crate::store::{DateRange, ProductionFilter};

use super::{ReportEngine, ratio_percent};

/// Intake against production for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarianceRow {
    /// The date.
    pub date: NaiveDate,
    /// Summed intake weight on the date.
    pub intake_weight: Decimal,
    /// Summed production quantity on the date.
    pub production_quantity: Decimal,
    /// `intake_weight − production_quantity`. Negative when production
    /// outran intake.
    pub variance: Decimal,
    /// Variance as a percentage of intake; zero when intake is zero.
    pub variance_percent: Decimal,
}

/// The variance report payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarianceReport {
    /// Per-date rows, date-ascending, covering the union of dates seen on
    /// either side.
    pub rows: Vec<VarianceRow>,
    /// Summed intake weight over the range.
    pub total_intake: Decimal,
    /// Summed production quantity over the range.
    pub total_production: Decimal,
    /// `total_intake − total_production`.
    pub total_variance: Decimal,
    /// Total variance as a percentage of total intake; zero when no intake
    /// was recorded.
    pub total_variance_percent: Decimal,
}

impl ReportEngine {
    /// Computes the variance report for the range.
    pub async fn variance_report(&self, range: DateRange) -> EngineResult<VarianceReport> {
        let production_filter = ProductionFilter {
            employee_id: None,
            range,
        };
        let (intakes, production) = tokio::join!(
            self.store().intakes(range),
            self.store().production(production_filter),
        );
        let (intakes, production) = (intakes?, production?);

        let mut by_date: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
        for intake in &intakes {
            by_date
                .entry(intake.date)
                .or_insert((Decimal::ZERO, Decimal::ZERO))
                .0 += intake.weight;
        }
        for record in &production {
            by_date
                .entry(record.date)
                .or_insert((Decimal::ZERO, Decimal::ZERO))
                .1 += record.quantity;
        }

        let mut total_intake = Decimal::ZERO;
        let mut total_production = Decimal::ZERO;
        let rows = by_date
            .into_iter()
            .map(|(date, (intake_weight, production_quantity))| {
                total_intake += intake_weight;
                total_production += production_quantity;
                let variance = intake_weight - production_quantity;
                VarianceRow {
                    date,
                    intake_weight,
                    production_quantity,
                    variance,
                    variance_percent: ratio_percent(variance, intake_weight),
                }
            })
            .collect();

        let total_variance = total_intake - total_production;
        Ok(VarianceReport {
            rows,
            total_intake,
            total_production,
            total_variance,
            total_variance_percent: ratio_percent(total_variance, total_intake),
        })
    }
}
