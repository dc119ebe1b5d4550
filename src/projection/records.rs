//! Year-by-year projection output structures

use serde::{Deserialize, Serialize};

/// Which phase of the plan a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Accumulation,
    Decumulation,
}

impl Phase {
    /// Display label used in tables and CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Accumulation => "Accumulation",
            Phase::Decumulation => "Withdrawal",
        }
    }
}

/// A single row of projection output for one simulated year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyRecord {
    /// Calendar year
    pub year: i32,

    /// Age at year end
    pub age: u8,

    /// Phase this record belongs to
    pub phase: Phase,

    /// Balance at the start of the year
    pub beginning_balance: f64,

    /// Balance at the end of the year, floored at zero
    pub ending_balance: f64,

    /// Positive contribution during accumulation, negative withdrawal
    /// during decumulation
    pub cash_flow: f64,

    /// Return earned on the balance net of this year's cash flow
    pub investment_return: f64,

    /// Fraction of the beginning balance withdrawn; zero outside
    /// decumulation or when the beginning balance is zero
    pub withdrawal_rate: f64,
}

/// Aggregate metrics reduced from both series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Accumulation years before retirement
    pub years_until_retirement: u32,

    /// Income in the final working year (grown from current income)
    pub final_year_income: f64,

    /// Retirement income target: final income x replacement ratio
    pub required_annual_income: f64,

    /// Annualized fixed benefits (CPP, OAS, pension, other)
    pub annual_fixed_benefits: f64,

    /// Annual withdrawal the personal savings must fund
    pub annual_withdrawal_needed: f64,

    /// Sum of all accumulation-phase contributions
    pub total_contributions: f64,

    /// Growth at retirement beyond starting balance and contributions
    pub total_investment_growth: f64,

    /// Total contributions spread evenly over the accumulation months
    pub monthly_contribution_equivalent: f64,

    /// Mean withdrawal rate across the decumulation series
    pub average_withdrawal_rate: f64,

    /// Ending balance of the last simulated retirement year
    pub final_balance: f64,
}

/// Complete projection result, created fresh per calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// One record per accumulation year; length = retirement age - current age
    pub accumulation: Vec<YearlyRecord>,

    /// One record per retirement year; truncates early on depletion
    pub decumulation: Vec<YearlyRecord>,

    /// Ending balance of the last accumulation year
    pub balance_at_retirement: f64,

    /// First age at which the ending balance reaches zero, if it does
    pub depletion_age: Option<u8>,

    /// Additional capital needed at retirement to fund the full horizon
    pub shortfall_capital: f64,

    /// Whether funds last through the target horizon
    pub is_sustainable: bool,

    /// Aggregate metrics
    pub summary: PlanSummary,
}

impl ProjectionResult {
    /// All records in order, accumulation then decumulation
    pub fn records(&self) -> impl Iterator<Item = &YearlyRecord> {
        self.accumulation.iter().chain(self.decumulation.iter())
    }
}
