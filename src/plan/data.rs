//! Plan input structures supplied by the wizard or batch callers

use serde::{Deserialize, Serialize};

use crate::assumptions::RiskProfile;
use crate::error::EngineError;

/// Default retirement horizon the plan must fund, in years
pub const DEFAULT_HORIZON_YEARS: u32 = 25;

fn default_horizon_years() -> u32 {
    DEFAULT_HORIZON_YEARS
}

/// Fixed monthly retirement income sources (government and pension)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementBenefits {
    /// Monthly CPP benefit
    #[serde(default)]
    pub cpp_monthly: f64,

    /// Monthly OAS benefit
    #[serde(default)]
    pub oas_monthly: f64,

    /// Monthly company pension
    #[serde(default)]
    pub company_pension_monthly: f64,

    /// Other monthly income during retirement
    #[serde(default)]
    pub other_monthly: f64,
}

impl RetirementBenefits {
    /// No fixed income sources
    pub fn none() -> Self {
        Self::default()
    }

    /// Annualized total across all fixed sources
    pub fn annual_total(&self) -> f64 {
        (self.cpp_monthly + self.oas_monthly + self.company_pension_monthly + self.other_monthly)
            * 12.0
    }
}

/// How the annual contribution figure is sized during accumulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContributionPolicy {
    /// Contribution = annual income x rate, with income compounding annually
    PercentOfIncome(f64),

    /// Flat annual sum; the caller folds per-account contributions into it
    FixedAnnual(f64),
}

impl ContributionPolicy {
    /// Whether the contribution tracks income growth
    pub fn tracks_income(&self) -> bool {
        matches!(self, ContributionPolicy::PercentOfIncome(_))
    }
}

/// A validated plan input record, constructed once per calculation.
///
/// Account identity never reaches the engine: `current_savings_balance` and
/// the `FixedAnnual` contribution are sums the caller folds over whatever
/// account structure it keeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInput {
    /// Current age
    pub current_age: u8,

    /// Planned retirement age
    pub retirement_age: u8,

    /// Years of retirement the plan must fund
    #[serde(default = "default_horizon_years")]
    pub target_horizon_years: u32,

    /// Current annual income
    pub current_annual_income: f64,

    /// Annual income growth rate as a decimal fraction (0.02 = 2%)
    pub income_growth_rate: f64,

    /// Desired retirement income as a fraction of final income (0.6 = 60%)
    pub income_replacement_ratio: f64,

    /// Current savings balance summed across all accounts
    pub current_savings_balance: f64,

    /// Annual contribution sizing
    pub contribution: ContributionPolicy,

    /// Investment approach driving the return rate pair
    #[serde(default)]
    pub risk_profile: RiskProfile,

    /// Fixed monthly income sources during retirement
    #[serde(default)]
    pub benefits: RetirementBenefits,
}

fn check_money(value: f64, field: &'static str) -> Result<(), EngineError> {
    if !value.is_finite() {
        return Err(EngineError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(EngineError::Negative { field });
    }
    Ok(())
}

impl PlanInput {
    /// Number of accumulation years before retirement
    pub fn years_to_retirement(&self) -> u32 {
        (self.retirement_age.saturating_sub(self.current_age)) as u32
    }

    /// Validate ranges, orderings, and numeric sanity.
    ///
    /// The UI layer performs its own validation; the engine re-asserts the
    /// invariants here and treats violations as caller programming errors.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.retirement_age <= self.current_age {
            return Err(EngineError::AgeOrder {
                current_age: self.current_age,
                retirement_age: self.retirement_age,
            });
        }

        check_money(self.current_annual_income, "current annual income")?;
        check_money(self.income_growth_rate, "income growth rate")?;
        check_money(self.income_replacement_ratio, "income replacement ratio")?;
        check_money(self.current_savings_balance, "current savings balance")?;
        check_money(self.benefits.cpp_monthly, "CPP benefit")?;
        check_money(self.benefits.oas_monthly, "OAS benefit")?;
        check_money(self.benefits.company_pension_monthly, "company pension")?;
        check_money(self.benefits.other_monthly, "other income")?;

        if self.income_replacement_ratio > 2.0 {
            return Err(EngineError::ReplacementRatioTooHigh(
                self.income_replacement_ratio,
            ));
        }

        match self.contribution {
            ContributionPolicy::PercentOfIncome(rate) => {
                check_money(rate, "savings rate")?;
                if rate > 1.0 {
                    return Err(EngineError::SavingsRateTooHigh(rate));
                }
            }
            ContributionPolicy::FixedAnnual(sum) => {
                check_money(sum, "annual contribution")?;
            }
        }

        if let RiskProfile::Custom {
            pre_retirement,
            retirement,
        } = self.risk_profile
        {
            check_money(pre_retirement, "pre-retirement return rate")?;
            check_money(retirement, "retirement return rate")?;
        }

        Ok(())
    }
}
