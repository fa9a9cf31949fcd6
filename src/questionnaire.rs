use crate::console::Console;
use chrono::{DateTime, Local};
use rann_saka::error::AppError;
use rann_saka::evaluation::{session_rng, Catalog, EngineSettings, EvaluationSession, SessionOutcome};
use rann_saka::report::{render_summary, ReportSink};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

/// Whether results are persisted after the summary is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SavePolicy {
    #[default]
    Ask,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuestionnaireOutcome {
    Aborted,
    Completed {
        weighted_percentage: f64,
        saved: Option<PathBuf>,
    },
}

/// Everything a single questionnaire run needs besides the console and sink.
#[derive(Debug, Clone)]
pub struct QuestionnaireRun {
    pub catalog: Catalog,
    pub settings: EngineSettings,
    pub seed: Option<u64>,
    pub save: SavePolicy,
    pub started_at: DateTime<Local>,
}

/// Asks every indicator, prints the summary and hands the result to the sink on request.
pub fn run_questionnaire<R, W, S>(
    console: &mut Console<R, W>,
    sink: &S,
    run: QuestionnaireRun,
) -> Result<QuestionnaireOutcome, AppError>
where
    R: BufRead,
    W: Write,
    S: ReportSink + ?Sized,
{
    let QuestionnaireRun {
        catalog,
        settings,
        seed,
        save,
        started_at,
    } = run;

    console.begin_questionnaire(&catalog)?;
    let mut rng = session_rng(seed);
    let evaluation = match EvaluationSession::new(catalog, settings).run(console, &mut rng)? {
        SessionOutcome::Completed(evaluation) => evaluation,
        SessionOutcome::Aborted { .. } => return Ok(QuestionnaireOutcome::Aborted),
    };

    console.print_summary(&render_summary(evaluation.mode, &evaluation.score))?;

    let persist = match save {
        SavePolicy::Ask => console.confirm_save(evaluation.mode)?,
        SavePolicy::Always => true,
        SavePolicy::Never => false,
    };

    let saved = if persist {
        let path = sink.persist(&evaluation, &started_at)?;
        console.report_saved(&path)?;
        Some(path)
    } else {
        console.report_skipped()?;
        None
    };

    info!(mode = %evaluation.mode, saved = saved.is_some(), "questionnaire finished");
    Ok(QuestionnaireOutcome::Completed {
        weighted_percentage: evaluation.score.weighted_percentage,
        saved,
    })
}
