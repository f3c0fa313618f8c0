use thiserror::Error;

/// Errors that can occur when configuring or running an annealing search.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AnnealError {
    /// Search interval is inverted or has a non-finite endpoint.
    #[error("invalid bounds: lo = {lo}, hi = {hi}")]
    InvalidBounds {
        /// Lower endpoint as given.
        lo: f64,
        /// Upper endpoint as given.
        hi: f64,
    },
    /// Cooling rate outside the open interval (0, 1).
    #[error("cooling rate must be in (0, 1), got {0}")]
    InvalidCoolingRate(f64),
    /// Zero proposals per temperature level.
    #[error("iterations per temperature level must be positive")]
    InvalidIterations,
    /// Non-positive or non-finite initial temperature.
    #[error("initial temperature must be positive and finite, got {0}")]
    InvalidTemperature(f64),
    /// Zero temperature levels.
    #[error("number of temperature levels must be positive")]
    InvalidLevels,
    /// Non-positive or non-finite proposal step fraction.
    #[error("step fraction must be positive and finite, got {0}")]
    InvalidStepFraction(f64),
    /// The objective returned NaN, which cannot be ordered.
    #[error("objective returned NaN at x = {x}")]
    NanQuality {
        /// Domain value the objective was evaluated at.
        x: f64,
    },
}
