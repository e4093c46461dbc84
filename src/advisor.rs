use crate::models::{AttendanceInput, EvaluationResult, Status, ValidationError};

/// Checks the three raw form values in a fixed precedence order; the first
/// failing rule wins. Empty strings model unfilled fields.
pub fn validate(
    raw_total: &str,
    raw_attended: &str,
    raw_required: &str,
) -> Result<AttendanceInput, ValidationError> {
    if raw_total.trim().is_empty()
        || raw_attended.trim().is_empty()
        || raw_required.trim().is_empty()
    {
        return Err(ValidationError::MissingField);
    }

    let total = parse_count(raw_total).ok_or(ValidationError::NotANumber)?;
    let attended = parse_count(raw_attended).ok_or(ValidationError::NotANumber)?;
    let required_percent: f64 = raw_required
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber)?;
    if !required_percent.is_finite() {
        return Err(ValidationError::NotANumber);
    }

    if total <= 0 || attended < 0 || required_percent <= 0.0 {
        return Err(ValidationError::OutOfRange(
            "Values must be positive numbers".to_string(),
        ));
    }

    if attended > total {
        return Err(ValidationError::AttendedExceedsTotal);
    }

    if required_percent > 100.0 {
        return Err(ValidationError::OutOfRange(
            "Required percentage cannot exceed 100%".to_string(),
        ));
    }

    Ok(AttendanceInput {
        total,
        attended,
        required_percent,
    })
}

/// Class counts accept fractional text and truncate toward zero, matching
/// the original form's integer parsing.
fn parse_count(raw: &str) -> Option<i64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.trunc() as i64)
}

/// Pure and total over validated input: classifies the record and computes
/// the advisory count. Skipping a class grows `total` by one; attending a
/// future class grows both `attended` and `total` by one.
pub fn evaluate(input: &AttendanceInput) -> EvaluationResult {
    let total = input.total as f64;
    let attended = input.attended as f64;
    let required = input.required_percent;
    let required_fraction = required / 100.0;

    let current = attended / total * 100.0;

    if current >= required {
        // Largest x >= 0 with attended / (total + x) >= required_fraction.
        let can_skip = ((attended - required_fraction * total) / required_fraction).floor() as i64;

        let detail = if can_skip > 0 {
            format!(
                "You can safely skip up to {can_skip} more {} and still maintain {required}% attendance.",
                class_word(can_skip)
            )
        } else {
            format!("Your attendance is exactly at {required}%. Don't skip any more classes!")
        };

        EvaluationResult {
            current_percentage: round_two(current),
            status: Status::OnTrack,
            advisory_count: Some(can_skip.max(0)),
            message: "You're on track!".to_string(),
            detail,
        }
    } else {
        // Smallest x >= 0 with (attended + x) / (total + x) >= required_fraction.
        // A 100% requirement makes the denominator zero, so the ratio can
        // never recover once it has dipped below.
        let need_to_attend =
            ((required_fraction * total - attended) / (1.0 - required_fraction)).ceil();

        if need_to_attend < 0.0 || !need_to_attend.is_finite() {
            EvaluationResult {
                current_percentage: round_two(current),
                status: Status::Unreachable,
                advisory_count: None,
                message: "Target unreachable".to_string(),
                detail: format!(
                    "It's mathematically impossible to reach {required}% attendance with your current record."
                ),
            }
        } else {
            let need = need_to_attend as i64;
            EvaluationResult {
                current_percentage: round_two(current),
                status: Status::NeedsAttendance,
                advisory_count: Some(need),
                message: "Attendance needed!".to_string(),
                detail: format!(
                    "You need to attend {need} more consecutive {} to reach {required}% attendance.",
                    class_word(need)
                ),
            }
        }
    }
}

fn class_word(count: i64) -> &'static str {
    if count == 1 {
        "class"
    } else {
        "classes"
    }
}

fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
