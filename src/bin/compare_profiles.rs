//! Compare projection outcomes across risk profiles for a batch of plans
//!
//! Reads plans from a CSV (first argument) or falls back to a small sample
//! set, runs every plan under every named profile in parallel, and writes
//! one comparison row per combination.

use anyhow::Context;
use rayon::prelude::*;
use retirement_engine::{
    plan::load_plans, ContributionPolicy, PlanInput, ProjectionConfig, ProjectionEngine,
    RetirementBenefits, RiskProfile,
};
use std::fs::File;
use std::io::Write;
use std::time::Instant;

const PROFILES: [RiskProfile; 3] = [
    RiskProfile::Conservative,
    RiskProfile::Balanced,
    RiskProfile::Growth,
];

fn sample_plans() -> Vec<PlanInput> {
    let base = PlanInput {
        current_age: 27,
        retirement_age: 70,
        target_horizon_years: 25,
        current_annual_income: 65_000.0,
        income_growth_rate: 0.021,
        income_replacement_ratio: 0.6,
        current_savings_balance: 10_000.0,
        contribution: ContributionPolicy::PercentOfIncome(0.07),
        risk_profile: RiskProfile::Balanced,
        benefits: RetirementBenefits {
            cpp_monthly: 1306.0,
            oas_monthly: 635.0,
            company_pension_monthly: 0.0,
            other_monthly: 0.0,
        },
    };

    let mut late_starter = base.clone();
    late_starter.current_age = 45;
    late_starter.current_savings_balance = 60_000.0;
    late_starter.contribution = ContributionPolicy::FixedAnnual(15_000.0);

    let mut high_earner = base.clone();
    high_earner.current_annual_income = 140_000.0;
    high_earner.income_replacement_ratio = 0.7;
    high_earner.contribution = ContributionPolicy::PercentOfIncome(0.12);

    vec![base, late_starter, high_earner]
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();

    let plans = match std::env::args().nth(1) {
        Some(path) => {
            println!("Loading plans from {}...", path);
            load_plans(&path).map_err(|e| anyhow::anyhow!("failed to load plans: {e}"))?
        }
        None => sample_plans(),
    };
    println!("Loaded {} plans in {:?}", plans.len(), start.elapsed());

    let config = ProjectionConfig::default();

    println!("Running projections...");
    let proj_start = Instant::now();

    // Every plan under every profile, in parallel
    let combinations: Vec<(usize, RiskProfile)> = (0..plans.len())
        .flat_map(|idx| PROFILES.iter().map(move |&p| (idx, p)))
        .collect();

    let results: Vec<_> = combinations
        .par_iter()
        .map(|&(idx, profile)| {
            let mut plan = plans[idx].clone();
            plan.risk_profile = profile;
            let engine = ProjectionEngine::new(config.clone());
            (idx, profile, engine.project(&plan))
        })
        .collect();

    println!("Projections complete in {:?}", proj_start.elapsed());

    // Write output
    let output_path = "profile_comparison.csv";
    let mut file = File::create(output_path).context("failed to create output file")?;

    writeln!(
        file,
        "Plan,Profile,BalanceAtRetirement,TotalContributions,AvgWithdrawalRate,DepletionAge,ShortfallCapital,Sustainable"
    )?;

    for (idx, profile, result) in &results {
        let result = result
            .as_ref()
            .map_err(|e| anyhow::anyhow!("plan {idx} failed: {e}"))?;
        writeln!(
            file,
            "{},{},{:.2},{:.2},{:.6},{},{:.2},{}",
            idx,
            profile.as_str(),
            result.balance_at_retirement,
            result.summary.total_contributions,
            result.summary.average_withdrawal_rate,
            result
                .depletion_age
                .map(|a| a.to_string())
                .unwrap_or_default(),
            result.shortfall_capital,
            result.is_sustainable,
        )?;
    }

    println!("Output written to {}", output_path);

    // Console summary per plan
    println!("\nComparison Summary:");
    for (idx, profile, result) in &results {
        let result = result.as_ref().expect("checked above");
        println!(
            "  Plan {} [{:>12}]: at retirement ${:>12.0}, sustainable: {}",
            idx,
            profile.as_str(),
            result.balance_at_retirement,
            result.is_sustainable,
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
