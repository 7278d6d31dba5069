//! shodan-exposure-box: Shodan per-port exposure bar chart, published to a gist.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
