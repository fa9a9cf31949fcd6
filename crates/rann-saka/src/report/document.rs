use super::summary::render_summary;
use crate::evaluation::{CompletedEvaluation, Tier};
use chrono::{DateTime, Local};

const RULE_WIDTH: usize = 50;

/// `ctime`-style stamp written at the top of every text report.
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Renders the plain-text report for a completed evaluation.
///
/// The timestamp is captured by the caller when the program starts.
pub fn render_document(evaluation: &CompletedEvaluation, generated_at: &DateTime<Local>) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let summary = render_summary(evaluation.mode, &evaluation.score);
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", generated_at.format(TIMESTAMP_FORMAT)));
    out.push_str(&format!("-- Summary --\n{summary}\n\n"));
    out.push_str(&format!(
        "-- Percentage score -- {:.2}%\n\n",
        evaluation.score.weighted_percentage
    ));
    out.push_str("-- Severity classification of indicators --\n\n");

    for (position, tier) in Tier::ordered().into_iter().enumerate() {
        if position > 0 {
            out.push_str(&format!("{rule}\n\n"));
        }
        out.push_str(&format!("- {} indicators -\n", tier.label()));
        for (category, indicator) in evaluation
            .catalog
            .iter_indicators()
            .filter(|(_, indicator)| indicator.is_affirmative() && indicator.tier() == tier)
        {
            out.push_str(&format!("{category} - {}\n", indicator.question()));
        }
    }

    out.push_str("\n\n-- All indicators with all the answers --\n");
    for (category, indicator) in evaluation.catalog.iter_indicators() {
        let answer = if indicator.is_affirmative() { "Yes" } else { "No" };
        out.push_str(&format!(
            "{rule}\n{category} - {}\n: {answer}\n",
            indicator.question()
        ));
    }

    out
}
