use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BenefitsExplanation {
    pub health_insurance_advice: String,
    pub retirement_plan_advice: String,
    pub other_benefits_advice: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmergencyFundPlan {
    pub target_amount: f64,
    pub current_coverage_months: f64,
    pub monthly_contribution: f64,
    pub timeline_months: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebtPayoffStrategy {
    pub priority: String,
    pub monthly_payment_suggestion: f64,
    pub payoff_timeline_months: f64,
    pub strategy: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RetirementStrategy {
    pub recommended_monthly: f64,
    pub employer_match_value: f64,
    pub projected_at_65: f64,
    pub account_recommendations: Vec<String>,
}

/// Percent split across asset classes. Expected to sum to 100.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PortfolioMix {
    pub stocks: f64,
    pub bonds: f64,
    pub cash: f64,
    pub alternatives: f64,
}

/// Structured advisor output, in the shape requested by the plan JSON schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdvisorPlan {
    pub financial_health_score: f64,
    pub action_checklist: Vec<String>,
    pub benefits_explanation: BenefitsExplanation,
    pub emergency_fund_plan: EmergencyFundPlan,
    pub debt_payoff_strategy: DebtPayoffStrategy,
    pub retirement_strategy: RetirementStrategy,
    pub portfolio: PortfolioMix,
    pub monthly_investment_target: f64,
    pub recommendations: Vec<String>,
}

/// Plan fields as persisted on a `QuizResponse`. Field names differ from
/// `AdvisorPlan` for `portfolio` and `recommendations`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoredPlan {
    pub financial_health_score: Option<f64>,
    pub action_checklist: Vec<String>,
    pub benefits_explanation: Option<BenefitsExplanation>,
    pub emergency_fund_plan: Option<EmergencyFundPlan>,
    pub debt_payoff_strategy: Option<DebtPayoffStrategy>,
    pub retirement_strategy: Option<RetirementStrategy>,
    pub portfolio_recommendation: Option<PortfolioMix>,
    pub monthly_investment_target: Option<f64>,
    pub key_recommendations: Vec<String>,
}

impl From<AdvisorPlan> for StoredPlan {
    fn from(plan: AdvisorPlan) -> Self {
        StoredPlan {
            financial_health_score: Some(plan.financial_health_score),
            action_checklist: plan.action_checklist,
            benefits_explanation: Some(plan.benefits_explanation),
            emergency_fund_plan: Some(plan.emergency_fund_plan),
            debt_payoff_strategy: Some(plan.debt_payoff_strategy),
            retirement_strategy: Some(plan.retirement_strategy),
            portfolio_recommendation: Some(plan.portfolio),
            monthly_investment_target: Some(plan.monthly_investment_target),
            key_recommendations: plan.recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_plan_renames_portfolio_and_recommendations() {
        let plan = AdvisorPlan {
            portfolio: PortfolioMix {
                stocks: 80.0,
                bonds: 15.0,
                cash: 5.0,
                alternatives: 0.0,
            },
            recommendations: vec!["Get the match".to_string()],
            ..Default::default()
        };
        let stored = StoredPlan::from(plan);
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["portfolio_recommendation"]["stocks"], 80.0);
        assert_eq!(value["key_recommendations"][0], "Get the match");
        assert!(value.get("portfolio").is_none());
    }

    #[test]
    fn test_partial_advisor_json_fills_defaults() {
        let plan: AdvisorPlan =
            serde_json::from_str(r#"{"financial_health_score": 55, "portfolio": {"stocks": 70}}"#)
                .unwrap();
        assert_eq!(plan.financial_health_score, 55.0);
        assert_eq!(plan.portfolio.stocks, 70.0);
        assert_eq!(plan.portfolio.bonds, 0.0);
        assert!(plan.recommendations.is_empty());
    }
}
