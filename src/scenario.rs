//! Scenario runner for batch projections and profile comparisons
//!
//! Holds a base configuration once, then runs many plans or profile
//! variants against it. Each projection is an independent pure call, so
//! batches run in parallel.

use rayon::prelude::*;

use crate::assumptions::RiskProfile;
use crate::error::EngineError;
use crate::plan::PlanInput;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Outcome of running the same plan under two risk profiles
#[derive(Debug, Clone)]
pub struct ProfileComparison {
    pub conservative: ProjectionResult,
    pub aggressive: ProjectionResult,

    /// Aggressive final balance minus conservative final balance
    pub final_balance_difference: f64,

    /// Aggressive average withdrawal rate minus conservative
    pub withdrawal_rate_difference: f64,

    /// True when only the aggressive profile sustains the full horizon
    pub sustainability_improvement: bool,
}

/// Pre-configured runner for batch projections
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Create a runner with default configuration
    pub fn new() -> Self {
        Self {
            base_config: ProjectionConfig::default(),
        }
    }

    /// Create a runner with a specific configuration
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            base_config: config,
        }
    }

    /// The runner's base configuration
    pub fn config(&self) -> &ProjectionConfig {
        &self.base_config
    }

    /// Run a single plan
    pub fn run(&self, plan: &PlanInput) -> Result<ProjectionResult, EngineError> {
        let engine = ProjectionEngine::new(self.base_config.clone());
        engine.project(plan)
    }

    /// Run many plans in parallel, one result per plan in input order
    pub fn run_batch(&self, plans: &[PlanInput]) -> Vec<Result<ProjectionResult, EngineError>> {
        plans
            .par_iter()
            .map(|plan| {
                let engine = ProjectionEngine::new(self.base_config.clone());
                engine.project(plan)
            })
            .collect()
    }

    /// Run one plan under several risk profiles, in profile order
    pub fn run_profiles(
        &self,
        plan: &PlanInput,
        profiles: &[RiskProfile],
    ) -> Result<Vec<ProjectionResult>, EngineError> {
        profiles
            .iter()
            .map(|&profile| {
                let mut variant = plan.clone();
                variant.risk_profile = profile;
                self.run(&variant)
            })
            .collect()
    }

    /// Compare the same plan under a conservative and an aggressive profile
    pub fn compare_profiles(
        &self,
        plan: &PlanInput,
        conservative: RiskProfile,
        aggressive: RiskProfile,
    ) -> Result<ProfileComparison, EngineError> {
        let results = self.run_profiles(plan, &[conservative, aggressive])?;
        let mut iter = results.into_iter();
        let conservative_result = iter.next().expect("two profiles requested");
        let aggressive_result = iter.next().expect("two profiles requested");

        Ok(ProfileComparison {
            final_balance_difference: aggressive_result.summary.final_balance
                - conservative_result.summary.final_balance,
            withdrawal_rate_difference: aggressive_result.summary.average_withdrawal_rate
                - conservative_result.summary.average_withdrawal_rate,
            sustainability_improvement: aggressive_result.is_sustainable
                && !conservative_result.is_sustainable,
            conservative: conservative_result,
            aggressive: aggressive_result,
        })
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{ContributionPolicy, RetirementBenefits};

    fn test_runner() -> ScenarioRunner {
        ScenarioRunner::with_config(ProjectionConfig {
            base_year: 2025,
            apply_inflation_to_withdrawals: false,
            inflation_rate: 0.025,
        })
    }

    fn test_plan() -> PlanInput {
        PlanInput {
            current_age: 35,
            retirement_age: 65,
            target_horizon_years: 25,
            current_annual_income: 80_000.0,
            income_growth_rate: 0.02,
            income_replacement_ratio: 0.7,
            current_savings_balance: 50_000.0,
            contribution: ContributionPolicy::PercentOfIncome(0.10),
            risk_profile: RiskProfile::Balanced,
            benefits: RetirementBenefits {
                cpp_monthly: 1200.0,
                oas_monthly: 700.0,
                company_pension_monthly: 0.0,
                other_monthly: 0.0,
            },
        }
    }

    #[test]
    fn test_batch_preserves_order_and_purity() {
        let runner = test_runner();
        let plans = vec![test_plan(); 4];
        let results = runner.run_batch(&plans);

        assert_eq!(results.len(), 4);
        let first = results[0].as_ref().unwrap();
        for result in &results {
            assert_eq!(result.as_ref().unwrap(), first);
        }
    }

    #[test]
    fn test_higher_profile_grows_retirement_balance() {
        let runner = test_runner();
        let results = runner
            .run_profiles(
                &test_plan(),
                &[
                    RiskProfile::Conservative,
                    RiskProfile::Balanced,
                    RiskProfile::Growth,
                ],
            )
            .unwrap();

        assert!(results[1].balance_at_retirement > results[0].balance_at_retirement);
        assert!(results[2].balance_at_retirement > results[1].balance_at_retirement);
    }

    #[test]
    fn test_compare_profiles() {
        let runner = test_runner();
        let comparison = runner
            .compare_profiles(
                &test_plan(),
                RiskProfile::Custom {
                    pre_retirement: 0.065,
                    retirement: 0.04,
                },
                RiskProfile::Custom {
                    pre_retirement: 0.065,
                    retirement: 0.07,
                },
            )
            .unwrap();

        // Same accumulation, better retirement return: never a worse outcome
        assert_eq!(
            comparison.conservative.balance_at_retirement,
            comparison.aggressive.balance_at_retirement
        );
        assert!(comparison.final_balance_difference >= 0.0);
    }

    #[test]
    fn test_invalid_plan_surfaces_error() {
        let runner = test_runner();
        let mut plan = test_plan();
        plan.current_annual_income = f64::NAN;
        assert!(runner.run(&plan).is_err());
        assert!(runner.run_batch(&[plan])[0].is_err());
    }
}
