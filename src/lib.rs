//! Retirement Engine - Deterministic retirement projection engine
//!
//! This library provides:
//! - Year-by-year accumulation and decumulation projections
//! - Risk-profile return-rate resolution
//! - Fixed-benefit aggregation and net withdrawal requirements
//! - Depletion detection, shortfall, and sustainability analysis
//! - Batch scenario runs and profile comparisons

pub mod assumptions;
pub mod error;
pub mod format;
pub mod plan;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{ReturnRates, RiskProfile};
pub use error::EngineError;
pub use plan::{ContributionPolicy, PlanInput, RetirementBenefits};
pub use projection::{
    Phase, PlanSummary, ProjectionConfig, ProjectionEngine, ProjectionResult, YearlyRecord,
};
pub use scenario::ScenarioRunner;
