// core/src/errors.rs
use thiserror::Error;

/// Feil fra pakkelesing og beregning av treningsdata.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainingError {
    /// Varighet er 0 når snittfart etterspørres.
    #[error("duration must be positive to compute mean speed (got {duration_h})")]
    InvalidDuration { duration_h: f64 },

    /// Høyde er 0 i gangformelen (deler på høyde).
    #[error("height must be positive to compute walking calories (got {height})")]
    InvalidHeight { height: f64 },

    /// En eller flere negative verdier i pakken. Verdiene er unike og sortert.
    #[error("negative values in package: {values:?}")]
    NegativeValue { values: Vec<f64> },

    #[error("non-finite value in package at index {index}")]
    NonFiniteValue { index: usize },

    #[error("unknown workout code '{code}', expected one of {valid:?}")]
    UnknownWorkoutCode {
        code: String,
        valid: Vec<&'static str>,
    },

    #[error("workout '{code}' expects {expected} values, got {got}")]
    WrongArity {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("action count must be a whole number (got {value})")]
    InvalidActionCount { value: f64 },

    #[error("parse error at {path}: {msg}")]
    Parse { path: String, msg: String },

    #[error("failed to encode report: {0}")]
    Encode(String),

    #[error("failed to write report: {0}")]
    Write(String),
}

impl TrainingError {
    /// Kort, stabil etikett for metrics (`fitness_package_errors_total{kind}`).
    pub fn kind(&self) -> &'static str {
        match self {
            TrainingError::InvalidDuration { .. } => "invalid_duration",
            TrainingError::InvalidHeight { .. } => "invalid_height",
            TrainingError::NegativeValue { .. } => "negative_value",
            TrainingError::NonFiniteValue { .. } => "non_finite_value",
            TrainingError::UnknownWorkoutCode { .. } => "unknown_workout_code",
            TrainingError::WrongArity { .. } => "wrong_arity",
            TrainingError::InvalidActionCount { .. } => "invalid_action_count",
            TrainingError::Parse { .. } => "parse",
            TrainingError::Encode(_) => "encode",
            TrainingError::Write(_) => "write",
        }
    }
}

pub type Result<T> = std::result::Result<T, TrainingError>;
