//! Net withdrawal requirement from income target and fixed benefits
//!
//! Fixed benefits (CPP, OAS, pension, other) offset the retirement income
//! target; only the remainder is drawn from personal savings.

use serde::{Deserialize, Serialize};

use crate::plan::RetirementBenefits;

/// The annual amounts that parameterize the decumulation phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequirement {
    /// Income in the final working year
    pub final_year_income: f64,

    /// Retirement income target: final income x replacement ratio
    pub required_annual_income: f64,

    /// Annualized fixed benefits
    pub annual_fixed_benefits: f64,

    /// Annual withdrawal from personal savings, never negative
    pub annual_withdrawal_needed: f64,
}

/// Derive the withdrawal requirement for the decumulation phase
pub fn withdrawal_requirement(
    current_annual_income: f64,
    income_growth_rate: f64,
    years_to_retirement: u32,
    income_replacement_ratio: f64,
    benefits: &RetirementBenefits,
) -> WithdrawalRequirement {
    let final_year_income =
        current_annual_income * (1.0 + income_growth_rate).powi(years_to_retirement as i32);
    let required_annual_income = final_year_income * income_replacement_ratio;
    let annual_fixed_benefits = benefits.annual_total();
    let annual_withdrawal_needed = (required_annual_income - annual_fixed_benefits).max(0.0);

    WithdrawalRequirement {
        final_year_income,
        required_annual_income,
        annual_fixed_benefits,
        annual_withdrawal_needed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_withdrawal_requirement() {
        let benefits = RetirementBenefits {
            cpp_monthly: 1306.0,
            oas_monthly: 635.0,
            company_pension_monthly: 0.0,
            other_monthly: 0.0,
        };

        let req = withdrawal_requirement(65_000.0, 0.021, 43, 0.6, &benefits);

        let expected_final = 65_000.0 * 1.021_f64.powi(43);
        assert_relative_eq!(req.final_year_income, expected_final, max_relative = 1e-12);
        assert_relative_eq!(
            req.required_annual_income,
            expected_final * 0.6,
            max_relative = 1e-12
        );
        assert_eq!(req.annual_fixed_benefits, (1306.0 + 635.0) * 12.0);
        assert_relative_eq!(
            req.annual_withdrawal_needed,
            expected_final * 0.6 - 1941.0 * 12.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_benefits_covering_target_need_no_withdrawal() {
        let benefits = RetirementBenefits {
            cpp_monthly: 3000.0,
            oas_monthly: 2000.0,
            company_pension_monthly: 1000.0,
            other_monthly: 0.0,
        };

        // Target 30000/yr, benefits 72000/yr
        let req = withdrawal_requirement(50_000.0, 0.0, 10, 0.6, &benefits);
        assert_eq!(req.annual_withdrawal_needed, 0.0);
    }
}
