//! Summary and gap-analysis reduction
//!
//! Folds the two yearly series plus the withdrawal requirement into the
//! final result record: totals, average withdrawal rate, sustainability
//! verdict, and the capital shortfall when the plan falls short.

use log::debug;

use super::annuity::present_value_of_annuity;
use super::benefits::WithdrawalRequirement;
use super::decumulation::DecumulationOutcome;
use super::records::{PlanSummary, ProjectionResult, YearlyRecord};
use crate::assumptions::ReturnRates;
use crate::plan::PlanInput;

/// Reduce both series into the final `ProjectionResult`
pub fn summarize(
    plan: &PlanInput,
    rates: ReturnRates,
    requirement: WithdrawalRequirement,
    accumulation: Vec<YearlyRecord>,
    decumulation: DecumulationOutcome,
) -> ProjectionResult {
    let balance_at_retirement = accumulation
        .last()
        .map(|r| r.ending_balance)
        .unwrap_or(plan.current_savings_balance);

    let total_contributions: f64 = accumulation.iter().map(|r| r.cash_flow).sum();
    let total_investment_growth =
        balance_at_retirement - plan.current_savings_balance - total_contributions;

    let average_withdrawal_rate = if decumulation.records.is_empty() {
        0.0
    } else {
        decumulation
            .records
            .iter()
            .map(|r| r.withdrawal_rate)
            .sum::<f64>()
            / decumulation.records.len() as f64
    };

    let depletion_age = decumulation.depletion_age;
    let is_sustainable = match depletion_age {
        None => true,
        Some(age) => age as u32 >= plan.retirement_age as u32 + plan.target_horizon_years,
    };

    let shortfall_capital = if is_sustainable {
        0.0
    } else {
        let needed_capital = present_value_of_annuity(
            requirement.annual_withdrawal_needed,
            rates.retirement,
            plan.target_horizon_years,
        );
        (needed_capital - balance_at_retirement).max(0.0)
    };

    debug!(
        "summary: balance at retirement {:.2}, sustainable {}, shortfall {:.2}",
        balance_at_retirement, is_sustainable, shortfall_capital
    );

    let years_until_retirement = plan.years_to_retirement();
    let monthly_contribution_equivalent = if years_until_retirement > 0 {
        total_contributions / (12.0 * years_until_retirement as f64)
    } else {
        0.0
    };
    let final_balance = decumulation
        .records
        .last()
        .map(|r| r.ending_balance)
        .unwrap_or(balance_at_retirement);

    ProjectionResult {
        accumulation,
        decumulation: decumulation.records,
        balance_at_retirement,
        depletion_age,
        shortfall_capital,
        is_sustainable,
        summary: PlanSummary {
            years_until_retirement,
            final_year_income: requirement.final_year_income,
            required_annual_income: requirement.required_annual_income,
            annual_fixed_benefits: requirement.annual_fixed_benefits,
            annual_withdrawal_needed: requirement.annual_withdrawal_needed,
            total_contributions,
            total_investment_growth,
            monthly_contribution_equivalent,
            average_withdrawal_rate,
            final_balance,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{ContributionPolicy, RetirementBenefits};
    use crate::projection::{accumulation, benefits, decumulation};
    use approx::assert_relative_eq;

    fn plan_with_flat_withdrawal() -> PlanInput {
        // Required income 40000/yr, no benefits, so withdrawal is exactly 40000
        PlanInput {
            current_age: 60,
            retirement_age: 65,
            target_horizon_years: 25,
            current_annual_income: 80_000.0,
            income_growth_rate: 0.0,
            income_replacement_ratio: 0.5,
            current_savings_balance: 100_000.0,
            contribution: ContributionPolicy::FixedAnnual(0.0),
            risk_profile: crate::assumptions::RiskProfile::Custom {
                pre_retirement: 0.0,
                retirement: 0.0,
            },
            benefits: RetirementBenefits::none(),
        }
    }

    fn run(plan: &PlanInput) -> ProjectionResult {
        let rates = plan.risk_profile.resolve();
        let years = plan.years_to_retirement();
        let acc = accumulation::project(
            2025,
            plan.current_age,
            plan.current_savings_balance,
            plan.current_annual_income,
            plan.income_growth_rate,
            plan.contribution,
            rates.pre_retirement,
            years,
        );
        let balance = acc
            .last()
            .map(|r| r.ending_balance)
            .unwrap_or(plan.current_savings_balance);
        let req = benefits::withdrawal_requirement(
            plan.current_annual_income,
            plan.income_growth_rate,
            years,
            plan.income_replacement_ratio,
            &plan.benefits,
        );
        let dec = decumulation::project(
            2025 + years as i32,
            plan.retirement_age,
            balance,
            req.annual_withdrawal_needed,
            rates.retirement,
            plan.target_horizon_years,
            0.0,
        );
        summarize(plan, rates, req, acc, dec)
    }

    #[test]
    fn test_zero_rate_shortfall_uses_linear_formula() {
        let plan = plan_with_flat_withdrawal();
        let result = run(&plan);

        // Zero rates: balance at retirement stays 100k, 40k/yr depletes it fast
        assert_eq!(result.balance_at_retirement, 100_000.0);
        assert!(!result.is_sustainable);
        assert_relative_eq!(
            result.shortfall_capital,
            40_000.0 * 25.0 - 100_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_contribution_total_matches_independent_sum() {
        let plan = PlanInput {
            current_age: 27,
            retirement_age: 70,
            target_horizon_years: 25,
            current_annual_income: 65_000.0,
            income_growth_rate: 0.021,
            income_replacement_ratio: 0.6,
            current_savings_balance: 10_000.0,
            contribution: ContributionPolicy::PercentOfIncome(0.07),
            risk_profile: crate::assumptions::RiskProfile::Custom {
                pre_retirement: 0.07,
                retirement: 0.04,
            },
            benefits: RetirementBenefits {
                cpp_monthly: 1306.0,
                oas_monthly: 635.0,
                company_pension_monthly: 0.0,
                other_monthly: 0.0,
            },
        };
        let result = run(&plan);

        // Re-derive the per-year contribution list independently
        let mut income = plan.current_annual_income;
        let mut expected = 0.0;
        for i in 0..plan.years_to_retirement() {
            if i > 0 {
                income *= 1.0 + plan.income_growth_rate;
            }
            expected += income * 0.07;
        }
        assert_relative_eq!(
            result.summary.total_contributions,
            expected,
            max_relative = 1e-12
        );

        // Growth identity: balance = start + contributions + growth
        assert_relative_eq!(
            result.balance_at_retirement,
            plan.current_savings_balance
                + result.summary.total_contributions
                + result.summary.total_investment_growth,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_sustainable_plan_has_no_shortfall() {
        let mut plan = plan_with_flat_withdrawal();
        plan.current_savings_balance = 2_000_000.0;
        let result = run(&plan);

        assert!(result.is_sustainable);
        assert_eq!(result.depletion_age, None);
        assert_eq!(result.shortfall_capital, 0.0);
        assert_eq!(result.decumulation.len(), 25);
    }

    #[test]
    fn test_average_withdrawal_rate_is_mean_of_series() {
        let plan = plan_with_flat_withdrawal();
        let result = run(&plan);

        let expected: f64 = result
            .decumulation
            .iter()
            .map(|r| r.withdrawal_rate)
            .sum::<f64>()
            / result.decumulation.len() as f64;
        assert_eq!(result.summary.average_withdrawal_rate, expected);
        assert!(result.summary.average_withdrawal_rate > 0.0);
    }
}
