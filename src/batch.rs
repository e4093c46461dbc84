use std::path::Path;

use anyhow::Context;

use crate::form::FormState;
use crate::models::{EvaluationResult, ValidationError};

/// One CSV row of raw field text. Cells are optional so an absent value
/// reaches validation as a missing field instead of failing the read.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct BatchRow {
    pub total: Option<String>,
    pub attended: Option<String>,
    pub required_percent: Option<String>,
}

pub type Outcome = Result<EvaluationResult, ValidationError>;

pub fn read_rows(csv_path: &Path) -> anyhow::Result<Vec<BatchRow>> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<BatchRow>() {
        rows.push(result.context("malformed CSV row")?);
    }
    Ok(rows)
}

/// Evaluates each row independently, preserving input order. Row failures
/// are per-row outcomes, never a batch failure.
pub fn evaluate_rows(rows: &[BatchRow]) -> Vec<Outcome> {
    rows.iter()
        .map(|row| {
            FormState::with_fields(
                row.total.as_deref().unwrap_or(""),
                row.attended.as_deref().unwrap_or(""),
                row.required_percent.as_deref().unwrap_or(""),
            )
            .submit()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    fn row(total: &str, attended: &str, required: &str) -> BatchRow {
        BatchRow {
            total: Some(total.to_string()),
            attended: Some(attended.to_string()),
            required_percent: Some(required.to_string()),
        }
    }

    #[test]
    fn rows_evaluate_independently_and_in_order() {
        let rows = vec![
            row("50", "40", "75"),
            row("50", "30", "75"),
            row("10", "0", "100"),
            row("10", "11", "75"),
        ];

        let outcomes = evaluate_rows(&rows);
        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0].as_ref().unwrap().status, Status::OnTrack);
        assert_eq!(outcomes[1].as_ref().unwrap().status, Status::NeedsAttendance);
        assert_eq!(outcomes[2].as_ref().unwrap().status, Status::Unreachable);
        assert_eq!(
            outcomes[3],
            Err(ValidationError::AttendedExceedsTotal)
        );
    }

    #[test]
    fn absent_cells_surface_as_missing_fields() {
        let rows = vec![BatchRow {
            total: Some("50".to_string()),
            attended: None,
            required_percent: Some("75".to_string()),
        }];

        let outcomes = evaluate_rows(&rows);
        assert_eq!(outcomes[0], Err(ValidationError::MissingField));
    }
}
