use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum MeltFlowError {
    InvalidRange { start: f64, stop: f64, step: f64 },
    DomainError(String),
    MissingParameter(String),
    InvalidTestCondition(String),
    UnknownMaterial(String),
}

pub type Result<T> = std::result::Result<T, MeltFlowError>;

impl fmt::Display for MeltFlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { start, stop, step } => {
                write!(f, "invalid range: start={start}, stop={stop}, step={step}")
            }
            Self::DomainError(msg) => write!(f, "domain error: {msg}"),
            Self::MissingParameter(msg) => write!(f, "missing parameter: {msg}"),
            Self::InvalidTestCondition(cond) => {
                write!(f, "invalid melt flow test condition: {cond}")
            }
            Self::UnknownMaterial(name) => write!(f, "unknown material: {name}"),
        }
    }
}

impl std::error::Error for MeltFlowError {}

/// Rejects a pipe radius that cannot appear in a denominator.
pub(crate) fn check_radius(radius: f64) -> Result<()> {
    if radius.is_nan() || radius <= 0.0 {
        return Err(MeltFlowError::DomainError(format!(
            "pipe radius must be positive, got {radius}"
        )));
    }
    Ok(())
}
