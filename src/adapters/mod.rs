//! Infrastructure adapters. Implement outbound ports.
//!
//! Exposure feed, gist store, console output. Map errors to DomainError.

pub mod gist;
pub mod shodan;
pub mod ui;
