use super::document::render_document;
use super::views::ReportView;
use crate::evaluation::CompletedEvaluation;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Output encoding for saved reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Destination for completed evaluations.
pub trait ReportSink {
    fn persist(
        &self,
        evaluation: &CompletedEvaluation,
        generated_at: &DateTime<Local>,
    ) -> Result<PathBuf, ReportError>;
}

/// Writes reports into a directory without ever replacing an existing file.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    output_dir: PathBuf,
    format: ReportFormat,
}

impl FileReportSink {
    pub fn new(output_dir: impl Into<PathBuf>, format: ReportFormat) -> Self {
        Self {
            output_dir: output_dir.into(),
            format,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    fn render(
        &self,
        evaluation: &CompletedEvaluation,
        generated_at: &DateTime<Local>,
    ) -> Result<String, ReportError> {
        match self.format {
            ReportFormat::Text => Ok(render_document(evaluation, generated_at)),
            ReportFormat::Json => {
                let view = ReportView::new(evaluation, *generated_at);
                Ok(serde_json::to_string_pretty(&view)?)
            }
        }
    }
}

impl ReportSink for FileReportSink {
    fn persist(
        &self,
        evaluation: &CompletedEvaluation,
        generated_at: &DateTime<Local>,
    ) -> Result<PathBuf, ReportError> {
        let contents = self.render(evaluation, generated_at)?;
        let prefix = evaluation.mode.report_prefix();
        let extension = self.format.extension();

        let mut counter = 1;
        loop {
            let (path, taken_at) = first_free_name(&self.output_dir, prefix, extension, counter);
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                // claimed after the existence check; resume after it
                Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                    counter = taken_at + 1;
                    continue;
                }
                Err(source) => return Err(ReportError::Write { path, source }),
            };
            file.write_all(contents.as_bytes())
                .map_err(|source| ReportError::Write {
                    path: path.clone(),
                    source,
                })?;

            info!(path = %path.display(), mode = %evaluation.mode, "report written");
            return Ok(path);
        }
    }
}

/// First unused name among `{prefix}.{ext}`, `{prefix}02.{ext}`, `{prefix}03.{ext}`, ...
///
/// Any directory entry counts as taken, including symlinks whose target is missing.
pub fn next_available_path(dir: &Path, prefix: &str, extension: &str) -> PathBuf {
    first_free_name(dir, prefix, extension, 1).0
}

fn first_free_name(dir: &Path, prefix: &str, extension: &str, start: u32) -> (PathBuf, u32) {
    let mut counter = start;
    loop {
        let candidate = dir.join(numbered_file_name(prefix, counter, extension));
        if fs::symlink_metadata(&candidate).is_err() {
            return (candidate, counter);
        }
        counter += 1;
    }
}

fn numbered_file_name(prefix: &str, counter: u32, extension: &str) -> String {
    if counter > 1 {
        format!("{prefix}{counter:02}.{extension}")
    } else {
        format!("{prefix}.{extension}")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}
