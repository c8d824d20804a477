//! Payroll computation and reporting engine for factory operations.
//!
//! This crate derives payroll records from attendance and production data
//! under a draft/validated/final pay-period lifecycle, and computes
//! read-only cross-table reports (intake, sorting, production, attendance,
//! payroll) over arbitrary date ranges.

#![warn(missing_docs)]

pub mod access;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod payroll;
pub mod reports;
pub mod store;
