pub mod analytics;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod limiter;
pub mod model;
pub mod payload;
pub mod transport;
