//! Core projection engine wiring the phases together

use chrono::{Datelike, Utc};
use log::debug;

use super::records::ProjectionResult;
use super::{accumulation, benefits, decumulation, summary};
use crate::error::EngineError;
use crate::plan::PlanInput;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Calendar year the first projected year is labeled with
    pub base_year: i32,

    /// Grow withdrawals with inflation during decumulation
    pub apply_inflation_to_withdrawals: bool,

    /// Annual inflation applied to withdrawals when enabled
    pub inflation_rate: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            base_year: Utc::now().year(),
            apply_inflation_to_withdrawals: false,
            inflation_rate: 0.025,
        }
    }
}

/// Main projection engine.
///
/// Pure and stateless between calls: each `project` invocation reads only
/// the plan and the config, so concurrent calls need no coordination.
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Create an engine with default configuration
    pub fn with_defaults() -> Self {
        Self::new(ProjectionConfig::default())
    }

    /// The engine's configuration
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the full projection for a single plan.
    ///
    /// Validates the plan, resolves return rates from the risk profile,
    /// projects both phases, and reduces them into the result record.
    pub fn project(&self, plan: &PlanInput) -> Result<ProjectionResult, EngineError> {
        plan.validate()?;

        let rates = plan.risk_profile.resolve();
        let years = plan.years_to_retirement();
        debug!(
            "projecting plan: {} accumulation years, profile {}",
            years,
            plan.risk_profile.as_str()
        );

        let accumulation_series = accumulation::project(
            self.config.base_year,
            plan.current_age,
            plan.current_savings_balance,
            plan.current_annual_income,
            plan.income_growth_rate,
            plan.contribution,
            rates.pre_retirement,
            years,
        );

        let balance_at_retirement = accumulation_series
            .last()
            .map(|r| r.ending_balance)
            .unwrap_or(plan.current_savings_balance);

        let requirement = benefits::withdrawal_requirement(
            plan.current_annual_income,
            plan.income_growth_rate,
            years,
            plan.income_replacement_ratio,
            &plan.benefits,
        );

        let inflation = if self.config.apply_inflation_to_withdrawals {
            self.config.inflation_rate
        } else {
            0.0
        };
        let decumulation_outcome = decumulation::project(
            self.config.base_year + years as i32,
            plan.retirement_age,
            balance_at_retirement,
            requirement.annual_withdrawal_needed,
            rates.retirement,
            plan.target_horizon_years,
            inflation,
        );

        Ok(summary::summarize(
            plan,
            rates,
            requirement,
            accumulation_series,
            decumulation_outcome,
        ))
    }
}
