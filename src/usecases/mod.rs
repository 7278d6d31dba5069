//! Application use cases. Orchestrate domain logic via ports.

pub mod report_service;

pub use report_service::{ReportService, report_title};
