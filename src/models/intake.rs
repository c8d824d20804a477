//! Raw-material intake and sorting models.
//!
//! These records are inputs to the reporting engine only; nothing in the
//! payroll lifecycle reads or writes them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quality grade assigned to an intake at the gate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityGrade {
    /// Top grade.
    Premium,
    /// Standard grade.
    Standard,
    /// Low grade.
    Low,
}

/// A raw-material supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distributor {
    /// Unique id of the distributor.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// One delivery of raw material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    /// Unique id of the intake.
    pub id: i64,
    /// The date the material arrived.
    pub date: NaiveDate,
    /// The delivering distributor, when known.
    pub distributor_id: Option<i64>,
    /// Delivered weight in kilograms.
    pub weight: Decimal,
    /// Quality grade assigned at the gate.
    pub grade: QualityGrade,
}

/// The sorting outcome of an intake: usable vs. rejected weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortingRecord {
    /// Unique id of the sorting record.
    pub id: i64,
    /// The intake this sorting belongs to, when known.
    pub intake_id: Option<i64>,
    /// The date sorting happened.
    pub date: NaiveDate,
    /// Weight of usable material, in kilograms.
    pub good_weight: Decimal,
    /// Weight of rejected material, in kilograms.
    pub bad_weight: Decimal,
}
