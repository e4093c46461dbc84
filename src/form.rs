use crate::advisor;
use crate::models::{EvaluationResult, ValidationError};

/// Raw form fields as the user typed them. An immutable value: editing or
/// resetting produces a new state instead of clearing fields in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub total: String,
    pub attended: String,
    pub required_percent: String,
}

pub const DEFAULT_REQUIRED_PERCENT: &str = "75";

impl FormState {
    /// Blank form with the product default requirement. Also what a reset
    /// action returns, dropping any previously displayed outcome with it.
    pub fn reset() -> Self {
        FormState {
            total: String::new(),
            attended: String::new(),
            required_percent: DEFAULT_REQUIRED_PERCENT.to_string(),
        }
    }

    pub fn with_fields(total: &str, attended: &str, required_percent: &str) -> Self {
        FormState {
            total: total.to_string(),
            attended: attended.to_string(),
            required_percent: required_percent.to_string(),
        }
    }

    /// Validates and evaluates the held fields. Exactly one of the two
    /// outcome shapes comes back; the caller owns displaying it.
    pub fn submit(&self) -> Result<EvaluationResult, ValidationError> {
        let input = advisor::validate(&self.total, &self.attended, &self.required_percent)?;
        Ok(advisor::evaluate(&input))
    }
}

impl Default for FormState {
    fn default() -> Self {
        FormState::reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    #[test]
    fn reset_restores_the_default_requirement() {
        let form = FormState::reset();
        assert_eq!(form.total, "");
        assert_eq!(form.attended, "");
        assert_eq!(form.required_percent, "75");
    }

    #[test]
    fn blank_form_submission_reports_missing_fields() {
        assert_eq!(FormState::reset().submit(), Err(ValidationError::MissingField));
    }

    #[test]
    fn filled_form_submits_through_to_evaluation() {
        let form = FormState::with_fields("50", "40", "75");
        let result = form.submit().unwrap();
        assert_eq!(result.status, Status::OnTrack);
        assert_eq!(result.advisory_count, Some(3));
        // The form itself is untouched by submission.
        assert_eq!(form, FormState::with_fields("50", "40", "75"));
    }
}
