//! Core domain layer. No external I/O dependencies.
//!
//! Entities and the pure reporting functions (aggregation, bar rendering,
//! formatting) live here. Dependencies flow inward.

pub mod bars;
pub mod entities;
pub mod errors;
pub mod report;
pub mod stats;

pub use bars::render_bar;
pub use entities::{ExposureDataset, OrdersOfMagnitude, PortEntry, PortStatistics, RunSummary};
pub use errors::DomainError;
pub use report::{ReportLayout, format_report};
pub use stats::{aggregate, order_of_magnitude, orders_of_magnitude};
