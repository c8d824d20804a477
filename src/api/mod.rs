//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for the payroll lifecycle and
//! the aggregate reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{FinalizeRequest, ProcessRequest, ReportQuery};
pub use response::ApiError;
pub use state::AppState;
