use serde::{Deserialize, Serialize};

use crate::format::round2;

pub const STOCK_RETURN: f64 = 0.10;
pub const BOND_RETURN: f64 = 0.04;
pub const DEFAULT_MONTHS: u32 = 60;

/// Growth assumed for the retirement-at-65 figure.
const RETIREMENT_RETURN: f64 = 0.07;
const RETIREMENT_AGE: u32 = 65;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectedGrowth {
    pub total_invested: f64,
    pub projected_value: f64,
    pub projected_gains: f64,
    /// Weighted annual return as a fraction, two decimals.
    pub expected_annual_return: f64,
}

/// Weighted return: stocks at 10%, bonds at 4%.
pub fn expected_annual_return(stock_percent: u32) -> f64 {
    let stocks = stock_percent.min(100);
    f64::from(stocks) / 100.0 * STOCK_RETURN + f64::from(100 - stocks) / 100.0 * BOND_RETURN
}

/// Future value of `monthly` deposited at the end of each of `months` months.
pub fn future_value(monthly: f64, monthly_rate: f64, months: u32) -> f64 {
    let n = f64::from(months);
    if monthly_rate == 0.0 {
        return monthly * n;
    }
    monthly * ((1.0 + monthly_rate).powf(n) - 1.0) / monthly_rate
}

/// Projects a monthly contribution over `months` (60 when `None` or zero).
pub fn project_growth(monthly: f64, months: Option<u32>, stock_percent: u32) -> ProjectedGrowth {
    let months = months.filter(|m| *m > 0).unwrap_or(DEFAULT_MONTHS);
    let annual = expected_annual_return(stock_percent);
    let value = future_value(monthly, annual / 12.0, months);
    let invested = monthly * f64::from(months);

    ProjectedGrowth {
        total_invested: invested.round(),
        projected_value: value.round(),
        projected_gains: (value - invested).round(),
        expected_annual_return: round2(annual),
    }
}

/// Balance at 65 from a fixed monthly contribution, compounding yearly at 7%.
/// Zero once the user is 65 or older.
pub fn project_at_65(monthly: f64, age: u32) -> f64 {
    let years = RETIREMENT_AGE.saturating_sub(age);
    let growth = ((1.0 + RETIREMENT_RETURN).powi(years as i32) - 1.0) / RETIREMENT_RETURN;
    (monthly * 12.0 * growth).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_return_weights() {
        assert!((expected_annual_return(100) - 0.10).abs() < 1e-12);
        assert!((expected_annual_return(0) - 0.04).abs() < 1e-12);
        assert!((expected_annual_return(85) - 0.091).abs() < 1e-12);
    }

    #[test]
    fn test_future_value_matches_closed_form() {
        let r = 0.091 / 12.0;
        let expected = 500.0 * ((1.0f64 + r).powi(60) - 1.0) / r;
        assert!((future_value(500.0, r, 60) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_future_value_zero_rate() {
        assert_eq!(future_value(250.0, 0.0, 12), 3000.0);
    }

    #[test]
    fn test_project_growth_defaults_to_60_months() {
        let p = project_growth(500.0, None, 85);
        assert_eq!(p.total_invested, 30000.0);
        assert!(p.projected_value > p.total_invested);
        assert_eq!(p.projected_gains, p.projected_value - p.total_invested);
        assert_eq!(p.expected_annual_return, 0.09);
    }

    #[test]
    fn test_project_growth_zero_months_uses_default() {
        assert_eq!(
            project_growth(100.0, Some(0), 50),
            project_growth(100.0, None, 50)
        );
    }

    #[test]
    fn test_project_at_65() {
        // 240/month at 25: 2880 * ((1.07^40 - 1) / 0.07)
        let expected = (2880.0 * ((1.07f64.powi(40) - 1.0) / 0.07)).round();
        assert_eq!(project_at_65(240.0, 25), expected);
        assert_eq!(project_at_65(240.0, 65), 0.0);
        assert_eq!(project_at_65(240.0, 80), 0.0);
    }
}
