//! Retirement Engine CLI
//!
//! Runs a single plan projection and prints the year-by-year table,
//! optionally writing the full series to CSV.

use anyhow::Context;
use clap::Parser;
use retirement_engine::{
    format, ContributionPolicy, PlanInput, ProjectionConfig, ProjectionEngine, RetirementBenefits,
    RiskProfile,
};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "retirement_engine", version, about = "Run a retirement projection")]
struct Args {
    /// JSON plan file; omit to run the built-in sample plan
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Risk profile override: conservative, balanced, or growth
    #[arg(long)]
    profile: Option<String>,

    /// Retirement horizon override in years
    #[arg(long)]
    horizon: Option<u32>,

    /// Grow withdrawals with this annual inflation rate (e.g. 0.025)
    #[arg(long)]
    inflation: Option<f64>,

    /// Write the full year-by-year projection to this CSV path
    #[arg(long)]
    csv: Option<PathBuf>,
}

/// Built-in sample: age 27 to 70 on a 7% savings rate with CPP and OAS
fn sample_plan() -> PlanInput {
    PlanInput {
        current_age: 27,
        retirement_age: 70,
        target_horizon_years: 25,
        current_annual_income: 65_000.0,
        income_growth_rate: 0.021,
        income_replacement_ratio: 0.6,
        current_savings_balance: 10_000.0,
        contribution: ContributionPolicy::PercentOfIncome(0.07),
        risk_profile: RiskProfile::Custom {
            pre_retirement: 0.07,
            retirement: 0.04,
        },
        benefits: RetirementBenefits {
            cpp_monthly: 1306.0,
            oas_monthly: 635.0,
            company_pension_monthly: 0.0,
            other_monthly: 0.0,
        },
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut plan = match &args.plan {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open plan file {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("failed to parse plan file {}", path.display()))?
        }
        None => sample_plan(),
    };

    if let Some(label) = &args.profile {
        plan.risk_profile = RiskProfile::from_label(label);
    }
    if let Some(horizon) = args.horizon {
        plan.target_horizon_years = horizon;
    }

    let mut config = ProjectionConfig::default();
    if let Some(rate) = args.inflation {
        config.apply_inflation_to_withdrawals = true;
        config.inflation_rate = rate;
    }

    println!("Retirement Engine v0.1.0");
    println!("========================\n");
    println!("Plan:");
    println!("  Ages: {} -> {}", plan.current_age, plan.retirement_age);
    println!("  Horizon: {} retirement years", plan.target_horizon_years);
    println!("  Profile: {}", plan.risk_profile.as_str());
    println!(
        "  Income: {} growing at {}",
        format::compact_currency(plan.current_annual_income),
        format::percentage(plan.income_growth_rate, 1)
    );
    println!();

    let engine = ProjectionEngine::new(config);
    let result = engine.project(&plan)?;

    // Print header
    println!(
        "Projection Results ({} accumulation + {} retirement years):",
        result.accumulation.len(),
        result.decumulation.len()
    );
    println!(
        "{:>6} {:>4} {:>13} {:>14} {:>12} {:>12} {:>14}",
        "Year", "Age", "Phase", "BOY Balance", "Cash Flow", "Return", "EOY Balance"
    );
    println!("{}", "-".repeat(80));

    // Print first 10 years of each phase to console
    for row in result
        .accumulation
        .iter()
        .take(10)
        .chain(result.decumulation.iter().take(10))
    {
        println!(
            "{:>6} {:>4} {:>13} {:>14.2} {:>12.2} {:>12.2} {:>14.2}",
            row.year,
            row.age,
            row.phase.as_str(),
            row.beginning_balance,
            row.cash_flow,
            row.investment_return,
            row.ending_balance,
        );
    }

    let total_rows = result.accumulation.len() + result.decumulation.len();
    if total_rows > 20 {
        println!("... ({} more years)", total_rows - 20);
    }

    // Write full results to CSV
    if let Some(csv_path) = &args.csv {
        let mut file = File::create(csv_path)
            .with_context(|| format!("unable to create CSV file {}", csv_path.display()))?;

        writeln!(
            file,
            "Year,Age,Phase,BeginningBalance,CashFlow,InvestmentReturn,EndingBalance,WithdrawalRate"
        )?;
        for row in result.records() {
            writeln!(
                file,
                "{},{},{},{:.2},{:.2},{:.2},{:.2},{:.6}",
                row.year,
                row.age,
                row.phase.as_str(),
                row.beginning_balance,
                row.cash_flow,
                row.investment_return,
                row.ending_balance,
                row.withdrawal_rate,
            )?;
        }
        println!("\nFull results written to: {}", csv_path.display());
    }

    // Print summary
    let summary = &result.summary;
    println!("\nSummary:");
    println!(
        "  Balance at retirement: {}",
        format::compact_currency(result.balance_at_retirement)
    );
    println!(
        "  Total contributions: {}",
        format::compact_currency(summary.total_contributions)
    );
    println!(
        "  Investment growth: {}",
        format::compact_currency(summary.total_investment_growth)
    );
    println!(
        "  Required annual income: {}",
        format::compact_currency(summary.required_annual_income)
    );
    println!(
        "  Fixed annual benefits: {}",
        format::compact_currency(summary.annual_fixed_benefits)
    );
    println!(
        "  Annual withdrawal needed: {}",
        format::compact_currency(summary.annual_withdrawal_needed)
    );
    println!(
        "  Average withdrawal rate: {}",
        format::percentage(summary.average_withdrawal_rate, 1)
    );

    match result.depletion_age {
        None => println!("  Verdict: on track, funds last the full horizon"),
        Some(age) if result.is_sustainable => {
            println!("  Verdict: on track, funds deplete at age {}", age)
        }
        Some(age) => {
            println!("  Verdict: needs improvement, funds deplete at age {}", age);
            println!(
                "  Additional capital needed at retirement: {}",
                format::compact_currency(result.shortfall_capital)
            );
        }
    }

    Ok(())
}
