//! Present-value-of-annuity math for the gap analysis

/// Rates closer to zero than this are treated as exactly zero
const ZERO_RATE_EPSILON: f64 = 1e-12;

/// Present value of a level annual payment over `years` at `rate`.
///
/// At a zero rate the formula degenerates to `payment * years` instead of
/// dividing by zero; a zero-growth scenario is valid, not a fault.
pub fn present_value_of_annuity(payment: f64, rate: f64, years: u32) -> f64 {
    if years == 0 || payment <= 0.0 {
        return 0.0;
    }

    if rate.abs() < ZERO_RATE_EPSILON {
        return payment * years as f64;
    }

    payment * (1.0 - (1.0 + rate).powi(-(years as i32))) / rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_factor() {
        // 25 years at 4%: factor ~ 15.622
        let pv = present_value_of_annuity(1.0, 0.04, 25);
        assert_relative_eq!(pv, 15.62208, max_relative = 1e-5);

        let pv = present_value_of_annuity(40_000.0, 0.04, 25);
        assert_relative_eq!(pv, 40_000.0 * 15.62208, max_relative = 1e-5);
    }

    #[test]
    fn test_zero_rate_degenerates_to_linear() {
        let pv = present_value_of_annuity(40_000.0, 0.0, 25);
        assert_eq!(pv, 1_000_000.0);
        assert!(pv.is_finite());
    }

    #[test]
    fn test_trivial_cases() {
        assert_eq!(present_value_of_annuity(40_000.0, 0.04, 0), 0.0);
        assert_eq!(present_value_of_annuity(0.0, 0.04, 25), 0.0);
    }

    #[test]
    fn test_higher_rate_needs_less_capital() {
        let low = present_value_of_annuity(40_000.0, 0.02, 25);
        let high = present_value_of_annuity(40_000.0, 0.06, 25);
        assert!(high < low);
    }
}
