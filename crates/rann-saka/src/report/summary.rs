use crate::evaluation::{EvaluationMode, ScoreCard};

/// Prose summary printed after an evaluation and embedded in saved reports.
pub fn render_summary(mode: EvaluationMode, score: &ScoreCard) -> String {
    match mode {
        EvaluationMode::General => general_summary(score),
        EvaluationMode::Cybersecurity => cybersecurity_summary(score),
    }
}

fn general_summary(score: &ScoreCard) -> String {
    let ScoreCard {
        weighted_sum,
        weighted_percentage,
        tier_counts,
        total_indicators,
        affirmative,
        ..
    } = score;

    let mut text = String::new();
    text.push_str("- Analysis:\n");
    text.push_str(&format!(
        "    Out of a total of {total_indicators} indicators analyzed, {affirmative} \
         (or {weighted_percentage:.2}% of the maximum possible score) were identified as true. \
         The weighted sum of these indicators is {weighted_sum:.2}.\n\n"
    ));
    text.push_str("- Potential issues:\n");
    text.push_str(&format!(
        "    The analysis suggests there might be issues related to biased feedback and false \
         accusations. {affirmative} out of {total_indicators} indicators of these issues are \
         present, indicating a significant likelihood of issues in the evaluated context.\n\n"
    ));
    text.push_str("- Severity classification:\n");
    text.push_str(&format!("  - Less Severe: {}\n", tier_counts.less));
    text.push_str(&format!("  - Moderately Severe: {}\n", tier_counts.moderate));
    text.push_str(&format!("  - Most Severe: {}\n\n", tier_counts.most));
    text.push_str("- Conclusion:\n");
    text.push_str(
        "  - The predominance of moderately to most severe indicators suggests a need for careful \
         scrutiny and potentially corrective action in the areas where biased feedback or false \
         accusations may occur.\n\n",
    );
    text
}

fn cybersecurity_summary(score: &ScoreCard) -> String {
    let ScoreCard {
        weighted_sum,
        weighted_percentage,
        tier_counts,
        total_indicators,
        affirmative,
        ..
    } = score;

    let mut text = String::new();
    text.push_str("• Overview:\n");
    text.push_str(&format!(
        "• Of {total_indicators} indicators reviewed for potential false accusations against \
         cybersecurity and penetration testing personnel, {affirmative} have been flagged as \
         concerns, accounting for {weighted_percentage:.2}% of the maximum possible score.\n"
    ));
    text.push_str(&format!(
        "The weighted sum of these indicators is {weighted_sum:.2}.\n"
    ));
    text.push_str(
        "• This indicates a notable level of unjust criticism or unsubstantiated allegations \
         within the cybersecurity field.\n",
    );
    text.push_str("• Detailed assessment (classification of severity):\n");
    text.push_str(&format!(
        "• Minor misunderstandings: {} indicators suggest minor misunderstandings or procedural \
         discrepancies, possibly due to technical complexities or rapid changes in cybersecurity \
         practices.\n",
        tier_counts.less
    ));
    text.push_str(&format!(
        "• Moderate allegations: {} indicators point to moderate issues, potentially arising \
         from communication gaps, technical misinterpretations, or the specialized nature of \
         cybersecurity work.\n",
        tier_counts.moderate
    ));
    text.push_str(&format!(
        "• Severe allegations: {} indicators relate to severe false accusations or allegations \
         that could significantly impact professional reputation, team morale, and operational \
         integrity.\n",
        tier_counts.most
    ));
    text.push_str("• Conclusion and Recommendations:\n");
    text.push_str(
        "• The analysis underscores the need for clear communication, robust and clear \
         documentation, and fair assessment practices in cybersecurity environments.\n",
    );
    text.push_str(
        "• Particular attention must be given to severe false allegations, requiring thorough \
         investigation to ensure accountability and maintain integrity within the team.\n",
    );
    text.push_str(
        "• Emphasizing continuous education on the evolving nature of cybersecurity threats and \
         the importance of a supportive team culture is crucial to mitigate these issues.\n",
    );
    text.push_str(
        "• This approach will foster a more trustworthy working environment for cybersecurity \
         professionals, ensuring team efficiency and operational effectiveness.",
    );
    text
}
