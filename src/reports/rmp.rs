//! Raw-material intake report.
//!
//! Rolls intake weights up by date and by distributor, and sorting
//! outcomes (good/bad weight) by date.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::error::EngineResult;
use crate::store::DateRange;

use super::ReportEngine;

/// Intake totals for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntakeDateTotal {
    /// The intake date.
    pub date: NaiveDate,
    /// Summed weight delivered on that date.
    pub total_weight: Decimal,
    /// Number of intake records.
    pub count: u64,
}

/// Intake totals for one distributor over the range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributorTotal {
    /// The distributor's name, when the intake named one.
    pub distributor: Option<String>,
    /// Summed weight delivered by this distributor.
    pub total_weight: Decimal,
    /// Number of intake records.
    pub count: u64,
}

/// Sorting totals for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortingDateTotal {
    /// The sorting date.
    pub date: NaiveDate,
    /// Summed usable weight.
    pub good_weight: Decimal,
    /// Summed rejected weight.
    pub bad_weight: Decimal,
}

/// The raw-material intake report payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RmpReport {
    /// Intake totals by date, newest first.
    pub intake_by_date: Vec<IntakeDateTotal>,
    /// Intake totals by distributor, heaviest first.
    pub intake_by_distributor: Vec<DistributorTotal>,
    /// Sorting totals by date, newest first.
    pub sorting_by_date: Vec<SortingDateTotal>,
}

impl ReportEngine {
    /// Computes the raw-material intake report for the range.
    pub async fn rmp_report(&self, range: DateRange) -> EngineResult<RmpReport> {
        let (intakes, sorting, distributors) = tokio::join!(
            self.store().intakes(range),
            self.store().sorting(range),
            self.store().distributors(),
        );
        let (intakes, sorting, distributors) = (intakes?, sorting?, distributors?);
        debug!(
            intakes = intakes.len(),
            sorting = sorting.len(),
            "Aggregating intake report"
        );

        let mut by_date: BTreeMap<NaiveDate, (Decimal, u64)> = BTreeMap::new();
        let mut by_distributor: BTreeMap<Option<i64>, (Decimal, u64)> = BTreeMap::new();
        for intake in &intakes {
            let slot = by_date.entry(intake.date).or_insert((Decimal::ZERO, 0));
            slot.0 += intake.weight;
            slot.1 += 1;
            let slot = by_distributor
                .entry(intake.distributor_id)
                .or_insert((Decimal::ZERO, 0));
            slot.0 += intake.weight;
            slot.1 += 1;
        }

        let intake_by_date = by_date
            .into_iter()
            .rev()
            .map(|(date, (total_weight, count))| IntakeDateTotal {
                date,
                total_weight,
                count,
            })
            .collect();

        let names: std::collections::HashMap<i64, String> = distributors
            .into_iter()
            .map(|d| (d.id, d.name))
            .collect();
        let mut intake_by_distributor: Vec<DistributorTotal> = by_distributor
            .into_iter()
            .map(|(id, (total_weight, count))| DistributorTotal {
                distributor: id.and_then(|id| names.get(&id).cloned()),
                total_weight,
                count,
            })
            .collect();
        intake_by_distributor.sort_by(|a, b| b.total_weight.cmp(&a.total_weight));

        let mut sorted_by_date: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
        for record in &sorting {
            let slot = sorted_by_date
                .entry(record.date)
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            slot.0 += record.good_weight;
            slot.1 += record.bad_weight;
        }
        let sorting_by_date = sorted_by_date
            .into_iter()
            .rev()
            .map(|(date, (good_weight, bad_weight))| SortingDateTotal {
                date,
                good_weight,
                bad_weight,
            })
            .collect();

        Ok(RmpReport {
            intake_by_date,
            intake_by_distributor,
            sorting_by_date,
        })
    }
}
