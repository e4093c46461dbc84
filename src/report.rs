use std::fmt::Write;

use crate::batch::Outcome;
use crate::models::{EvaluationResult, Status, ValidationError};

pub fn render_result(result: &EvaluationResult) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "{}% current attendance",
        result.current_percentage
    );
    let _ = writeln!(output, "{}", result.message);
    let _ = writeln!(output, "{}", result.detail);
    output
}

pub fn render_error(error: &ValidationError) -> String {
    format!("Invalid input: {error}\n")
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::OnTrack => "on track",
        Status::NeedsAttendance => "needs attendance",
        Status::Unreachable => "unreachable",
    }
}

/// Markdown summary over a batch run: status mix first, then one line per
/// row in input order.
pub fn build_batch_report(outcomes: &[Outcome]) -> String {
    let mut on_track = 0usize;
    let mut needs_attendance = 0usize;
    let mut unreachable = 0usize;
    let mut invalid = 0usize;

    for outcome in outcomes {
        match outcome {
            Ok(result) => match result.status {
                Status::OnTrack => on_track += 1,
                Status::NeedsAttendance => needs_attendance += 1,
                Status::Unreachable => unreachable += 1,
            },
            Err(_) => invalid += 1,
        }
    }

    let mut output = String::new();
    let _ = writeln!(output, "# Attendance Batch Report");
    let _ = writeln!(output, "Evaluated {} records", outcomes.len());
    let _ = writeln!(output);
    let _ = writeln!(output, "## Status Mix");

    if outcomes.is_empty() {
        let _ = writeln!(output, "No records in this batch.");
    } else {
        let _ = writeln!(output, "- on track: {on_track}");
        let _ = writeln!(output, "- needs attendance: {needs_attendance}");
        let _ = writeln!(output, "- unreachable: {unreachable}");
        let _ = writeln!(output, "- invalid: {invalid}");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Records");

    if outcomes.is_empty() {
        let _ = writeln!(output, "No records in this batch.");
    } else {
        for (index, outcome) in outcomes.iter().enumerate() {
            match outcome {
                Ok(result) => {
                    let _ = writeln!(
                        output,
                        "- row {}: {}% ({}) {}",
                        index + 1,
                        result.current_percentage,
                        status_label(result.status),
                        result.detail
                    );
                }
                Err(error) => {
                    let _ = writeln!(output, "- row {}: invalid ({error})", index + 1);
                }
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormState;

    #[test]
    fn single_result_rendering_includes_all_lines() {
        let result = FormState::with_fields("50", "40", "75").submit().unwrap();
        let text = render_result(&result);
        assert!(text.contains("80% current attendance"));
        assert!(text.contains("You're on track!"));
        assert!(text.contains("skip up to 3 more classes"));
    }

    #[test]
    fn error_rendering_uses_the_form_copy() {
        let text = render_error(&ValidationError::MissingField);
        assert!(text.contains("Please fill in all fields"));
    }

    #[test]
    fn batch_report_counts_the_status_mix() {
        let outcomes: Vec<Outcome> = vec![
            FormState::with_fields("50", "40", "75").submit(),
            FormState::with_fields("50", "30", "75").submit(),
            FormState::with_fields("10", "0", "100").submit(),
            FormState::with_fields("10", "11", "75").submit(),
        ];

        let report = build_batch_report(&outcomes);
        assert!(report.contains("Evaluated 4 records"));
        assert!(report.contains("- on track: 1"));
        assert!(report.contains("- needs attendance: 1"));
        assert!(report.contains("- unreachable: 1"));
        assert!(report.contains("- invalid: 1"));
        assert!(report.contains("- row 4: invalid"));
    }

    #[test]
    fn empty_batch_report_says_so() {
        let report = build_batch_report(&[]);
        assert!(report.contains("No records in this batch."));
    }
}
