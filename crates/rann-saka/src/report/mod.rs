//! Rendering and persistence of evaluation results.

mod document;
mod sink;
mod summary;
pub mod views;

pub use document::{render_document, TIMESTAMP_FORMAT};
pub use sink::{next_available_path, FileReportSink, ReportError, ReportFormat, ReportSink};
pub use summary::render_summary;
pub use views::ReportView;
