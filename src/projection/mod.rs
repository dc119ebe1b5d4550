//! Year-by-year retirement projection: accumulation, decumulation, and
//! the summary reduction

pub mod accumulation;
pub mod annuity;
pub mod benefits;
pub mod decumulation;
mod engine;
pub mod records;
pub mod summary;

pub use benefits::WithdrawalRequirement;
pub use decumulation::DecumulationOutcome;
pub use engine::{ProjectionConfig, ProjectionEngine};
pub use records::{Phase, PlanSummary, ProjectionResult, YearlyRecord};
