//! Production report.
//!
//! Rolls production quantities up by job type, by employee, and into a
//! date-ordered trend series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::EngineResult;
use crate::store::{DateRange, ProductionFilter};

use super::ReportEngine;

/// Production totals for one job type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeTotal {
    /// The job type.
    pub production_type: String,
    /// Summed quantity for the type.
    pub total_quantity: Decimal,
    /// Number of production records.
    pub count: u64,
}

/// Production totals for one employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeProductionTotal {
    /// The employee's id.
    pub employee_id: i64,
    /// The employee's display name, when known.
    pub employee_name: Option<String>,
    /// The employee's stable code, when known.
    pub employee_code: Option<String>,
    /// Summed quantity for the employee.
    pub total_quantity: Decimal,
    /// Number of production records.
    pub count: u64,
}

/// Production totals for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionTrendPoint {
    /// The production date.
    pub date: NaiveDate,
    /// Summed quantity on that date.
    pub total_quantity: Decimal,
    /// Number of production records.
    pub count: u64,
}

/// The production report payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionReport {
    /// Totals by job type, largest first.
    pub by_type: Vec<TypeTotal>,
    /// Totals by employee, largest first.
    pub by_employee: Vec<EmployeeProductionTotal>,
    /// Date-ascending trend series.
    pub trend: Vec<ProductionTrendPoint>,
}

impl ReportEngine {
    /// Computes the production report for the range.
    pub async fn production_report(&self, range: DateRange) -> EngineResult<ProductionReport> {
        let filter = ProductionFilter {
            employee_id: None,
            range,
        };
        let (records, labels) = tokio::join!(self.store().production(filter), self.employee_labels());
        let (records, labels) = (records?, labels?);

        let mut by_type: BTreeMap<&str, (Decimal, u64)> = BTreeMap::new();
        let mut by_employee: BTreeMap<i64, (Decimal, u64)> = BTreeMap::new();
        let mut trend: BTreeMap<NaiveDate, (Decimal, u64)> = BTreeMap::new();
        for record in &records {
            for slot in [
                by_type
                    .entry(record.production_type.as_str())
                    .or_insert((Decimal::ZERO, 0)),
                by_employee
                    .entry(record.employee_id)
                    .or_insert((Decimal::ZERO, 0)),
                trend.entry(record.date).or_insert((Decimal::ZERO, 0)),
            ] {
                slot.0 += record.quantity;
                slot.1 += 1;
            }
        }

        let mut by_type: Vec<TypeTotal> = by_type
            .into_iter()
            .map(|(production_type, (total_quantity, count))| TypeTotal {
                production_type: production_type.to_string(),
                total_quantity,
                count,
            })
            .collect();
        by_type.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));

        let mut by_employee: Vec<EmployeeProductionTotal> = by_employee
            .into_iter()
            .map(|(employee_id, (total_quantity, count))| {
                let label = labels.get(&employee_id);
                EmployeeProductionTotal {
                    employee_id,
                    employee_name: label.map(|(name, _)| name.clone()),
                    employee_code: label.map(|(_, code)| code.clone()),
                    total_quantity,
                    count,
                }
            })
            .collect();
        by_employee.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));

        let trend = trend
            .into_iter()
            .map(|(date, (total_quantity, count))| ProductionTrendPoint {
                date,
                total_quantity,
                count,
            })
            .collect();

        Ok(ProductionReport {
            by_type,
            by_employee,
            trend,
        })
    }
}
