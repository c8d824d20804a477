//! Production-based wage calculation for contract workers.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{JobRate, ProductionRecord};

/// One job type's contribution to a contract worker's pay.
///
/// A line whose `rate_per_unit` is `None` had no active job rate: its
/// quantity still counts toward `total_production` but contributes nothing
/// to the salary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractLine {
    /// The job type.
    pub production_type: String,
    /// Total quantity produced for this type in the period.
    pub quantity: Decimal,
    /// The active rate applied, when one existed.
    pub rate_per_unit: Option<Decimal>,
    /// `quantity × rate_per_unit`, or zero without a rate.
    pub amount: Decimal,
}

/// The result of a contract-worker wage calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractWageResult {
    /// Quantity summed over every job type, rated or not.
    pub total_production: Decimal,
    /// Sum of the line amounts.
    pub contract_salary: Decimal,
    /// Per-type breakdown, ordered by job type.
    pub lines: Vec<ContractLine>,
    /// Equal to the contract salary.
    pub gross_salary: Decimal,
    /// Equal to gross: no deduction logic applies.
    pub net_salary: Decimal,
}

/// Derives a contract worker's pay from production records and job rates.
///
/// Quantities are grouped by production type and each group is priced by
/// its active rate from `rates`. Types missing from `rates` are kept in
/// the totals and the breakdown but dropped from the salary.
///
/// # Arguments
///
/// * `records` - Production records already scoped to the pay period
/// * `rates` - Active job rate per type, keyed by job-type string
pub fn calculate_contract_wage(
    records: &[ProductionRecord],
    rates: &HashMap<String, JobRate>,
) -> ContractWageResult {
    // BTreeMap keeps the breakdown ordered by job type.
    let mut by_type: BTreeMap<&str, Decimal> = BTreeMap::new();
    for record in records {
        *by_type
            .entry(record.production_type.as_str())
            .or_insert(Decimal::ZERO) += record.quantity;
    }

    let mut total_production = Decimal::ZERO;
    let mut contract_salary = Decimal::ZERO;
    let mut lines = Vec::with_capacity(by_type.len());

    for (production_type, quantity) in by_type {
        total_production += quantity;

        let rate_per_unit = rates.get(production_type).map(|r| r.rate_per_unit);
        let amount = rate_per_unit.map_or(Decimal::ZERO, |rate| quantity * rate);
        contract_salary += amount;

        lines.push(ContractLine {
            production_type: production_type.to_string(),
            quantity,
            rate_per_unit,
            amount,
        });
    }

    ContractWageResult {
        total_production,
        contract_salary,
        lines,
        gross_salary: contract_salary,
        net_salary: contract_salary,
    }
}
