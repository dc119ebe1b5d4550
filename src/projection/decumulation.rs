//! Decumulation-phase projector
//!
//! Simulates fund depletion during retirement: withdrawals come out at the
//! start of each year, the remainder earns the retirement-phase return, and
//! the series truncates the first year the balance reaches zero.

use log::{debug, warn};

use super::records::{Phase, YearlyRecord};

/// Decumulation series plus the depletion point, if any
#[derive(Debug, Clone, PartialEq)]
pub struct DecumulationOutcome {
    pub records: Vec<YearlyRecord>,
    pub depletion_age: Option<u8>,
}

/// Project the decumulation phase.
///
/// `inflation_rate` grows the withdrawal year over year starting with the
/// second retirement year; zero disables the adjustment. A withdrawal is
/// capped at the available balance, so reported balances never go negative.
pub fn project(
    base_year: i32,
    retirement_age: u8,
    start_balance: f64,
    annual_withdrawal: f64,
    retirement_rate: f64,
    horizon_years: u32,
    inflation_rate: f64,
) -> DecumulationOutcome {
    debug!(
        "decumulation: {} year horizon from age {}, balance {:.2}, withdrawal {:.2}",
        horizon_years, retirement_age, start_balance, annual_withdrawal
    );

    let mut records = Vec::with_capacity(horizon_years as usize);
    let mut depletion_age = None;
    let mut current_withdrawal = annual_withdrawal;
    let mut beginning_balance = start_balance;

    for i in 0..horizon_years {
        if i > 0 {
            current_withdrawal *= 1.0 + inflation_rate;
        }

        let cash_out = current_withdrawal.min(beginning_balance);
        let remainder = beginning_balance - cash_out;
        debug_assert!(remainder >= 0.0, "withdrawal exceeded available balance");

        let investment_return = remainder * retirement_rate;
        let ending_balance = (remainder + investment_return).max(0.0);
        let withdrawal_rate = if beginning_balance > 0.0 {
            cash_out / beginning_balance
        } else {
            0.0
        };

        let age = retirement_age.saturating_add((i + 1) as u8);
        records.push(YearlyRecord {
            year: base_year + i as i32,
            age,
            phase: Phase::Decumulation,
            beginning_balance,
            ending_balance,
            cash_flow: -cash_out,
            investment_return,
            withdrawal_rate,
        });

        if ending_balance <= 0.0 {
            warn!("funds deplete at age {}", age);
            depletion_age = Some(age);
            break;
        }

        beginning_balance = ending_balance;
    }

    DecumulationOutcome {
        records,
        depletion_age,
    }
}
