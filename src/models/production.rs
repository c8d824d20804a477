//! Production output and job rate models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A quantity of production output recorded for one employee on one date.
///
/// The production type is a free-form job-type string ("manual", "machine",
/// "shaler", ...); contract pay is derived by matching it against active
/// [`JobRate`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    /// Unique id of the record.
    pub id: i64,
    /// The employee who produced this output.
    pub employee_id: i64,
    /// The date the output was recorded.
    pub date: NaiveDate,
    /// Job-type string this output belongs to.
    pub production_type: String,
    /// Quantity produced. Never negative.
    pub quantity: Decimal,
    /// Unit of the quantity ("kg", "pieces", ...).
    pub unit: String,
}

/// The price per unit for a given job type.
///
/// Several rates may exist for the same job type; calculators pick the
/// first active one deterministically (lowest id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRate {
    /// Unique id of the rate.
    pub id: i64,
    /// The job type this rate prices.
    pub job_type: String,
    /// Unit the rate applies to ("kg", "pieces", ...).
    pub unit: String,
    /// Amount paid per unit produced.
    pub rate_per_unit: Decimal,
    /// Inactive rates are never used for new computations.
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_record_round_trips_through_json() {
        let record = ProductionRecord {
            id: 1,
            employee_id: 4,
            date: NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(),
            production_type: "shelling".to_string(),
            quantity: Decimal::from(120),
            unit: "kg".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ProductionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_job_rate_round_trips_through_json() {
        let rate = JobRate {
            id: 2,
            job_type: "shelling".to_string(),
            unit: "kg".to_string(),
            rate_per_unit: Decimal::from(3_000),
            is_active: true,
        };
        let json = serde_json::to_string(&rate).unwrap();
        let back: JobRate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rate);
    }
}
