//! Accumulation-phase projector
//!
//! Simulates savings growth from current age to retirement age, one record
//! per year. Contributions land at year end, so each year's investment
//! return is earned on the beginning balance only.

use log::debug;

use super::records::{Phase, YearlyRecord};
use crate::plan::ContributionPolicy;

/// Project the accumulation phase.
///
/// When the contribution is a percent of income, income compounds at the
/// growth rate starting in the second year. A fixed annual contribution
/// ignores income entirely. `years == 0` yields an empty series.
pub fn project(
    base_year: i32,
    current_age: u8,
    start_balance: f64,
    annual_income: f64,
    income_growth_rate: f64,
    contribution: ContributionPolicy,
    pre_retirement_rate: f64,
    years: u32,
) -> Vec<YearlyRecord> {
    debug!(
        "accumulation: {} years from age {}, starting balance {:.2}",
        years, current_age, start_balance
    );

    let mut records = Vec::with_capacity(years as usize);
    let mut income = annual_income;
    let mut beginning_balance = start_balance;

    for i in 0..years {
        if i > 0 && contribution.tracks_income() {
            income *= 1.0 + income_growth_rate;
        }

        let cash_flow = match contribution {
            ContributionPolicy::PercentOfIncome(rate) => income * rate,
            ContributionPolicy::FixedAnnual(sum) => sum,
        };

        let investment_return = beginning_balance * pre_retirement_rate;
        let ending_balance = beginning_balance + cash_flow + investment_return;
        debug_assert!(ending_balance >= 0.0, "accumulation balance went negative");

        records.push(YearlyRecord {
            year: base_year + i as i32,
            age: current_age.saturating_add((i + 1) as u8),
            phase: Phase::Accumulation,
            beginning_balance,
            ending_balance,
            cash_flow,
            investment_return,
            withdrawal_rate: 0.0,
        });

        beginning_balance = ending_balance;
    }

    records
}
