//! Control-plane gateway adapter
//!
//! HTTP implementations of the `StackInventory` and `MetricSink` ports.

pub mod http_client;

pub use http_client::HttpDriftGateway;
