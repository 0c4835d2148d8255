//! HR administration engine
//!
//! This crate keeps employee, attendance and salary records in an in-memory
//! store, serves them over an HTTP API, and exports attendance reports for
//! a daily, weekly, monthly or custom period as `.xlsx` workbooks.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
