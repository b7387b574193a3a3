use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::{grouped, round2};

/// Percentage points a position may drift from target before it is flagged.
pub const DRIFT_THRESHOLD: f64 = 5.0;

/// Allowed slack when checking that target weights add up to 100.
const TARGET_TOLERANCE: f64 = 0.5;

#[derive(Debug, Error, PartialEq)]
pub enum RebalanceError {
    #[error("target allocation must sum to 100%, got {0}%")]
    TargetSum(f64),

    #[error("current portfolio has no value to rebalance")]
    EmptyPortfolio,

    #[error("negative amount for {0}")]
    Negative(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RebalanceRequest {
    /// Symbol → current dollar value.
    pub current_portfolio: BTreeMap<String, f64>,
    /// Symbol → target percent of the portfolio.
    pub target_allocation: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PositionPlan {
    pub symbol: String,
    pub current_value: f64,
    pub current_percent: f64,
    pub target_percent: f64,
    /// Current minus target, in percentage points.
    pub drift: f64,
    pub action: TradeAction,
    pub amount: f64,
    pub needs_rebalance: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RebalancePlan {
    pub success: bool,
    pub total_value: f64,
    pub needs_rebalancing: bool,
    pub positions: Vec<PositionPlan>,
    pub suggestions: Vec<String>,
}

/// Compares current holdings against target weights. Symbols present on only
/// one side are treated as 0 on the other, so unwanted holdings get sold off
/// and new targets get bought.
pub fn rebalance(request: &RebalanceRequest) -> Result<RebalancePlan, RebalanceError> {
    let all_values = request
        .current_portfolio
        .iter()
        .chain(request.target_allocation.iter());
    for (symbol, value) in all_values {
        if *value < 0.0 {
            return Err(RebalanceError::Negative(symbol.clone()));
        }
    }

    let target_sum: f64 = request.target_allocation.values().sum();
    if (target_sum - 100.0).abs() > TARGET_TOLERANCE {
        return Err(RebalanceError::TargetSum(round2(target_sum)));
    }

    let total: f64 = request.current_portfolio.values().sum();
    if total <= 0.0 {
        return Err(RebalanceError::EmptyPortfolio);
    }

    let symbols: BTreeSet<&String> = request
        .current_portfolio
        .keys()
        .chain(request.target_allocation.keys())
        .collect();

    let positions: Vec<PositionPlan> = symbols
        .into_iter()
        .map(|symbol| {
            let current_value = request.current_portfolio.get(symbol).copied().unwrap_or(0.0);
            let target_percent = request.target_allocation.get(symbol).copied().unwrap_or(0.0);
            let current_percent = current_value / total * 100.0;
            let drift = current_percent - target_percent;
            let difference = total * target_percent / 100.0 - current_value;
            let amount = round2(difference.abs());
            let action = if amount == 0.0 {
                TradeAction::Hold
            } else if difference > 0.0 {
                TradeAction::Buy
            } else {
                TradeAction::Sell
            };

            PositionPlan {
                symbol: symbol.clone(),
                current_value: round2(current_value),
                current_percent: round2(current_percent),
                target_percent,
                drift: round2(drift),
                action,
                amount,
                needs_rebalance: drift.abs() > DRIFT_THRESHOLD,
            }
        })
        .collect();

    let mut suggestions: Vec<String> = positions
        .iter()
        .filter(|p| p.needs_rebalance)
        .map(|p| {
            let verb = match p.action {
                TradeAction::Sell => "Sell",
                _ => "Buy",
            };
            format!(
                "{verb} ${} of {} to move it from {}% back to its {}% target",
                grouped(p.amount),
                p.symbol,
                grouped(p.current_percent),
                grouped(p.target_percent)
            )
        })
        .collect();

    let needs_rebalancing = !suggestions.is_empty();
    if needs_rebalancing {
        suggestions.push(
            "Prefer directing new contributions to underweight funds before selling, to limit taxable gains"
                .to_string(),
        );
    } else {
        suggestions.push(format!(
            "Every position is within {DRIFT_THRESHOLD}% of its target - no rebalancing needed"
        ));
    }

    Ok(RebalancePlan {
        success: true,
        total_value: round2(total),
        needs_rebalancing,
        positions,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(s, v)| (s.to_string(), *v)).collect()
    }

    fn position<'a>(plan: &'a RebalancePlan, symbol: &str) -> &'a PositionPlan {
        plan.positions.iter().find(|p| p.symbol == symbol).unwrap()
    }

    #[test]
    fn test_drift_flags_and_trades() {
        let request = RebalanceRequest {
            current_portfolio: map(&[("VOO", 7000.0), ("BND", 3000.0)]),
            target_allocation: map(&[("VOO", 60.0), ("BND", 40.0)]),
        };
        let plan = rebalance(&request).unwrap();
        assert_eq!(plan.total_value, 10000.0);
        assert!(plan.needs_rebalancing);

        let voo = position(&plan, "VOO");
        assert_eq!(voo.current_percent, 70.0);
        assert_eq!(voo.drift, 10.0);
        assert_eq!(voo.action, TradeAction::Sell);
        assert_eq!(voo.amount, 1000.0);
        assert!(voo.needs_rebalance);

        let bnd = position(&plan, "BND");
        assert_eq!(bnd.action, TradeAction::Buy);
        assert_eq!(bnd.amount, 1000.0);
        assert_eq!(
            plan.suggestions[0],
            "Buy $1,000 of BND to move it from 30% back to its 40% target"
        );
    }

    #[test]
    fn test_small_drift_is_not_flagged() {
        let request = RebalanceRequest {
            current_portfolio: map(&[("VTI", 6300.0), ("AGG", 3700.0)]),
            target_allocation: map(&[("VTI", 60.0), ("AGG", 40.0)]),
        };
        let plan = rebalance(&request).unwrap();
        assert!(!plan.needs_rebalancing);
        assert!(plan.positions.iter().all(|p| !p.needs_rebalance));
        assert_eq!(plan.suggestions.len(), 1);
    }

    #[test]
    fn test_exact_target_holds() {
        let request = RebalanceRequest {
            current_portfolio: map(&[("VOO", 500.0), ("BND", 500.0)]),
            target_allocation: map(&[("VOO", 50.0), ("BND", 50.0)]),
        };
        let plan = rebalance(&request).unwrap();
        assert!(plan.positions.iter().all(|p| p.action == TradeAction::Hold));
    }

    #[test]
    fn test_symbols_missing_from_target_are_sold() {
        let request = RebalanceRequest {
            current_portfolio: map(&[("VOO", 800.0), ("QQQ", 200.0)]),
            target_allocation: map(&[("VOO", 100.0)]),
        };
        let plan = rebalance(&request).unwrap();
        let qqq = position(&plan, "QQQ");
        assert_eq!(qqq.target_percent, 0.0);
        assert_eq!(qqq.action, TradeAction::Sell);
        assert_eq!(qqq.amount, 200.0);
    }

    #[test]
    fn test_rejects_bad_targets_and_empty_portfolio() {
        let bad_sum = RebalanceRequest {
            current_portfolio: map(&[("VOO", 100.0)]),
            target_allocation: map(&[("VOO", 80.0)]),
        };
        assert_eq!(rebalance(&bad_sum), Err(RebalanceError::TargetSum(80.0)));

        let empty = RebalanceRequest {
            current_portfolio: BTreeMap::new(),
            target_allocation: map(&[("VOO", 100.0)]),
        };
        assert_eq!(rebalance(&empty), Err(RebalanceError::EmptyPortfolio));

        let negative = RebalanceRequest {
            current_portfolio: map(&[("VOO", -5.0)]),
            target_allocation: map(&[("VOO", 100.0)]),
        };
        assert_eq!(
            rebalance(&negative),
            Err(RebalanceError::Negative("VOO".to_string()))
        );
    }
}
