//! Plan input model: the record a caller supplies per calculation

mod data;
pub mod loader;

pub use data::{ContributionPolicy, PlanInput, RetirementBenefits, DEFAULT_HORIZON_YEARS};
pub use loader::{load_plans, load_plans_from_reader};
