//! Input validation errors for the projection engine

use thiserror::Error;

/// Errors raised at the engine's input boundary.
///
/// Every variant is a caller-side validation failure. The simulation loops
/// themselves have no recoverable failure modes: zero-rate arithmetic is
/// special-cased as a valid scenario, and any invariant violation found
/// mid-simulation is a defect, not an error condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A numeric field is NaN or infinite
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// A money or rate field that must be non-negative is negative
    #[error("{field} must be non-negative")]
    Negative { field: &'static str },

    /// Retirement age does not come after current age
    #[error("retirement age ({retirement_age}) must be greater than current age ({current_age})")]
    AgeOrder { current_age: u8, retirement_age: u8 },

    /// Savings rate above 100% of income
    #[error("savings rate cannot exceed 100% of income (got {0})")]
    SavingsRateTooHigh(f64),

    /// Income replacement ratio above 200% of final income
    #[error("income replacement ratio above 200% is unrealistic (got {0})")]
    ReplacementRatioTooHigh(f64),
}
