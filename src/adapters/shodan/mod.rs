//! Shodan exposure-data adapter. Implements ExposureSource over HTTP.

pub mod client;

pub use client::{DEFAULT_DATA_URL, ShodanExposureClient, build_url};
