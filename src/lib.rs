//! MCP server exposing National Weather Service alerts and forecasts as tools.

pub mod config;
pub mod constants;
pub mod error;
pub mod fetcher;
pub mod formatters;
pub mod models;
pub mod service;

pub use config::Config;
pub use service::Weather;
