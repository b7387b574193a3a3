//! Stock/bond split by age and risk tier, and the per-tier breakdown of the stock sleeve.

use serde::{Deserialize, Serialize};

use crate::models::profile::RiskTolerance;

pub const MIN_STOCKS: u32 = 20;
pub const MAX_STOCKS: u32 = 90;

/// Percent of the portfolio in each sleeve. Unused sleeves for a tier are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Breakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub us_large_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub us_total_market: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub international: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emerging_growth: Option<f64>,
    pub bonds: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Allocation {
    pub total_stocks: u32,
    pub total_bonds: u32,
    pub breakdown: Breakdown,
}

fn risk_offset(risk: RiskTolerance) -> i64 {
    match risk {
        RiskTolerance::Low => -20,
        RiskTolerance::Medium => 0,
        RiskTolerance::High => 15,
    }
}

/// `clamp(min(110 - age, 90) + offset, 20, 90)`.
pub fn stock_percent(age: u32, risk: RiskTolerance) -> u32 {
    let base = (110 - i64::from(age)).min(i64::from(MAX_STOCKS));
    (base + risk_offset(risk)).clamp(i64::from(MIN_STOCKS), i64::from(MAX_STOCKS)) as u32
}

pub fn allocate(age: u32, risk: RiskTolerance) -> Allocation {
    let total_stocks = stock_percent(age, risk);
    let total_bonds = 100 - total_stocks;
    let s = f64::from(total_stocks);

    let breakdown = match risk {
        RiskTolerance::Low => Breakdown {
            us_large_cap: Some(s * 0.60),
            international: Some(s * 0.25),
            emerging_growth: Some(s * 0.15),
            bonds: f64::from(total_bonds),
            ..Default::default()
        },
        RiskTolerance::Medium => Breakdown {
            us_large_cap: Some(s * 0.40),
            us_total_market: Some(s * 0.25),
            international: Some(s * 0.20),
            emerging_growth: Some(s * 0.15),
            bonds: f64::from(total_bonds),
            ..Default::default()
        },
        RiskTolerance::High => Breakdown {
            us_large_cap: Some(s * 0.30),
            growth: Some(s * 0.25),
            small_cap: Some(s * 0.20),
            international: Some(s * 0.15),
            emerging_growth: Some(s * 0.10),
            bonds: f64::from(total_bonds),
            ..Default::default()
        },
    };

    Allocation {
        total_stocks,
        total_bonds,
        breakdown,
    }
}
