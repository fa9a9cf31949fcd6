pub mod config;
pub mod error;
pub mod evaluation;
pub mod report;
pub mod telemetry;
