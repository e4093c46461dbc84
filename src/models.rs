use serde::Serialize;

/// Validated attendance record. Only `advisor::validate` constructs one, so
/// `total > 0`, `0 <= attended <= total`, `0 < required_percent <= 100` hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttendanceInput {
    pub total: i64,
    pub attended: i64,
    pub required_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    OnTrack,
    NeedsAttendance,
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// Attendance ratio as a percentage, rounded to two decimal places for
    /// display. Branching always happens on the unrounded ratio.
    pub current_percentage: f64,
    pub status: Status,
    /// Classes that can still be skipped (OnTrack), classes that must be
    /// attended (NeedsAttendance), or `None` (Unreachable).
    pub advisory_count: Option<i64>,
    pub message: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    MissingField,
    NotANumber,
    OutOfRange(String),
    AttendedExceedsTotal,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingField => write!(f, "Please fill in all fields"),
            ValidationError::NotANumber => write!(f, "Please enter valid numbers"),
            ValidationError::OutOfRange(reason) => write!(f, "{reason}"),
            ValidationError::AttendedExceedsTotal => {
                write!(f, "Attended classes cannot exceed total classes")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
