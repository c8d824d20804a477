//! Request types for the payroll engine API.
//!
//! This module defines the JSON bodies of the payroll endpoints and the
//! query parameters of the report endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::store::DateRange;

/// Request body for the `POST /payroll/process` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// The pay period to compute payroll for.
    pub pay_period_id: i64,
}

/// Request body for the `POST /payroll/finalize` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalizeRequest {
    /// The pay period to lock.
    pub pay_period_id: i64,
}

/// Query parameters shared by every report endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportQuery {
    /// The inclusive start of the reporting range.
    pub start_date: NaiveDate,
    /// The inclusive end of the reporting range.
    pub end_date: NaiveDate,
}

impl ReportQuery {
    /// Validates the query into a well-formed [`DateRange`].
    pub fn range(&self) -> EngineResult<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }
}
