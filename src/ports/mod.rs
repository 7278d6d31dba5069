//! Port traits. API boundaries for the hexagon.
//!
//! - Outbound: Called by application into infrastructure
//! - Config: credential lookup, swappable in tests

pub mod config;
pub mod outbound;

pub use config::{ConfigProvider, EnvConfigProvider, StaticConfigProvider};
pub use outbound::{ExposureSource, SnippetPublisher};
