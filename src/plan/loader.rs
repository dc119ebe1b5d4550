//! Load plan inputs from a CSV batch file

use super::{ContributionPolicy, PlanInput, RetirementBenefits, DEFAULT_HORIZON_YEARS};
use crate::assumptions::RiskProfile;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row; one plan per line.
///
/// Exactly one of `SavingsRate` (fraction of income) or `AnnualContribution`
/// (flat sum) must be present; `AnnualContribution` wins when both are set.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "CurrentAge")]
    current_age: u8,
    #[serde(rename = "RetirementAge")]
    retirement_age: u8,
    #[serde(rename = "HorizonYears")]
    horizon_years: Option<u32>,
    #[serde(rename = "AnnualIncome")]
    annual_income: f64,
    #[serde(rename = "IncomeGrowthRate")]
    income_growth_rate: f64,
    #[serde(rename = "IncomeReplacementRatio")]
    income_replacement_ratio: f64,
    #[serde(rename = "CurrentSavings")]
    current_savings: f64,
    #[serde(rename = "SavingsRate")]
    savings_rate: Option<f64>,
    #[serde(rename = "AnnualContribution")]
    annual_contribution: Option<f64>,
    #[serde(rename = "RiskProfile")]
    risk_profile: Option<String>,
    #[serde(rename = "CppMonthly")]
    cpp_monthly: Option<f64>,
    #[serde(rename = "OasMonthly")]
    oas_monthly: Option<f64>,
    #[serde(rename = "PensionMonthly")]
    pension_monthly: Option<f64>,
    #[serde(rename = "OtherMonthly")]
    other_monthly: Option<f64>,
}

impl CsvRow {
    fn to_plan(self) -> Result<PlanInput, Box<dyn Error>> {
        let contribution = match (self.annual_contribution, self.savings_rate) {
            (Some(sum), _) => ContributionPolicy::FixedAnnual(sum),
            (None, Some(rate)) => ContributionPolicy::PercentOfIncome(rate),
            (None, None) => {
                return Err("row needs SavingsRate or AnnualContribution".into());
            }
        };

        let risk_profile = self
            .risk_profile
            .as_deref()
            .map(RiskProfile::from_label)
            .unwrap_or_default();

        Ok(PlanInput {
            current_age: self.current_age,
            retirement_age: self.retirement_age,
            target_horizon_years: self.horizon_years.unwrap_or(DEFAULT_HORIZON_YEARS),
            current_annual_income: self.annual_income,
            income_growth_rate: self.income_growth_rate,
            income_replacement_ratio: self.income_replacement_ratio,
            current_savings_balance: self.current_savings,
            contribution,
            risk_profile,
            benefits: RetirementBenefits {
                cpp_monthly: self.cpp_monthly.unwrap_or(0.0),
                oas_monthly: self.oas_monthly.unwrap_or(0.0),
                company_pension_monthly: self.pension_monthly.unwrap_or(0.0),
                other_monthly: self.other_monthly.unwrap_or(0.0),
            },
        })
    }
}

/// Load all plans from a CSV file
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<PlanInput>, Box<dyn Error>> {
    let reader = Reader::from_path(path)?;
    collect_plans(reader)
}

/// Load plans from any reader (e.g., string buffer, network stream)
pub fn load_plans_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<PlanInput>, Box<dyn Error>> {
    collect_plans(Reader::from_reader(reader))
}

fn collect_plans<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<PlanInput>, Box<dyn Error>> {
    let mut plans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let plan = row.to_plan()?;
        plan.validate()?;
        plans.push(plan);
    }

    Ok(plans)
}
