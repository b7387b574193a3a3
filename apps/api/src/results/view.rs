//! Dashboard view model for a finished record: health score, status
//! indicators, budget allocation, emergency fund progress, debt payoff,
//! retirement projection and the portfolio chart series.

use serde::Serialize;
use serde_json::Value;

use crate::form::metrics::EMERGENCY_MONTHS;
use crate::format::{grouped, round1};
use crate::models::plan::{PortfolioMix, StoredPlan};
use crate::models::profile::{FormDetails, QuizAnswers};
use crate::models::quiz_response::QuizResponse;

const RETIREMENT_AGE: u32 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTier {
    Excellent,
    Good,
    NeedsAttention,
}

impl HealthTier {
    pub fn for_score(score: f64) -> Self {
        if score >= 70.0 {
            HealthTier::Excellent
        } else if score >= 50.0 {
            HealthTier::Good
        } else {
            HealthTier::NeedsAttention
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HealthTier::Excellent => "Excellent! You're on a strong path.",
            HealthTier::Good => "Good! Room for improvement.",
            HealthTier::NeedsAttention => "Needs attention. Let's build a stronger foundation.",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthSummary {
    pub score: f64,
    pub tier: HealthTier,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorStatus {
    Met,
    Partial,
    NotMet,
}

impl IndicatorStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            IndicatorStatus::Met => "✓",
            IndicatorStatus::Partial => "△",
            IndicatorStatus::NotMet => "○",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusIndicator {
    pub label: &'static str,
    pub status: IndicatorStatus,
    pub symbol: &'static str,
}

fn indicator(label: &'static str, status: IndicatorStatus) -> StatusIndicator {
    StatusIndicator {
        label,
        status,
        symbol: status.symbol(),
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub amount: f64,
    /// Share of the allocated total, whole percent.
    pub share_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetAllocation {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_surplus: f64,
    pub savings_rate: f64,
    pub items: Vec<BudgetItem>,
    pub total_allocated: f64,
    /// Surplus left over after the allocation, when there is any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_capacity_note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmergencyFundProgress {
    pub target_amount: f64,
    pub current_months: f64,
    pub target_months: f64,
    pub progress_percent: f64,
    pub fully_funded: bool,
    pub monthly_contribution: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DebtPayoffView {
    pub debt_amount: f64,
    pub monthly_payment: f64,
    pub payoff_years: f64,
    pub priority: String,
    pub strategy: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RetirementView {
    pub years_to_retirement: u32,
    pub monthly_contribution: f64,
    pub employer_match_value: f64,
    pub projected_at_65: f64,
    pub account_recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSlice {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyStats {
    pub monthly_investment_target: f64,
    pub monthly_surplus: f64,
    pub goal_target_amount: f64,
    pub goal_timeline_years: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub id: String,
    pub user_name: String,
    pub headline: String,
    pub health: HealthSummary,
    pub status_indicators: Vec<StatusIndicator>,
    pub key_stats: KeyStats,
    pub budget: BudgetAllocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_fund: Option<EmergencyFundProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_payoff: Option<DebtPayoffView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retirement: Option<RetirementView>,
    pub portfolio: Vec<ChartSlice>,
    pub action_checklist: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment_recommendations: Option<Value>,
}

fn status_indicators(form: &FormDetails, plan: &StoredPlan) -> Vec<StatusIndicator> {
    let coverage = plan
        .emergency_fund_plan
        .as_ref()
        .map(|e| e.current_coverage_months)
        .unwrap_or_else(|| {
            if form.monthly_expenses > 0.0 {
                form.current_savings / form.monthly_expenses
            } else {
                0.0
            }
        });
    let emergency = if coverage >= EMERGENCY_MONTHS {
        IndicatorStatus::Met
    } else if coverage > 0.0 {
        IndicatorStatus::Partial
    } else {
        IndicatorStatus::NotMet
    };

    let debt = if form.debt_amount <= 0.0 {
        IndicatorStatus::Met
    } else if form.debt_amount < 10_000.0 {
        IndicatorStatus::Partial
    } else {
        IndicatorStatus::NotMet
    };

    let savings = if form.savings_rate() >= 20.0 {
        IndicatorStatus::Met
    } else {
        IndicatorStatus::NotMet
    };

    let matching = if form.contributing_to_retirement {
        IndicatorStatus::Met
    } else if form.has_employer_retirement {
        IndicatorStatus::Partial
    } else {
        IndicatorStatus::NotMet
    };

    vec![
        indicator("Emergency fund", emergency),
        indicator("Debt", debt),
        indicator("Savings rate 20%+", savings),
        indicator("Employer 401k match", matching),
    ]
}

/// Emergency, debt and retirement contributions from the plan, plus whatever
/// of the monthly investment target is left as goal savings. Zero lines are dropped.
fn budget_allocation(form: &FormDetails, plan: &StoredPlan) -> BudgetAllocation {
    let emergency = plan
        .emergency_fund_plan
        .as_ref()
        .map_or(0.0, |e| e.monthly_contribution);
    let debt = plan
        .debt_payoff_strategy
        .as_ref()
        .map_or(0.0, |d| d.monthly_payment_suggestion);
    let retirement = plan
        .retirement_strategy
        .as_ref()
        .map_or(0.0, |r| r.recommended_monthly);
    let target = plan.monthly_investment_target.unwrap_or(0.0);
    let goal = (target - emergency - debt - retirement).max(0.0);

    let lines = [
        ("Emergency Fund", "🛡️", emergency),
        ("Debt Payment", "💳", debt),
        ("Retirement", "🏖️", retirement),
        ("Goal Savings", "🎯", goal),
    ];
    let total_allocated: f64 = lines.iter().map(|(_, _, a)| a.max(0.0)).sum();
    let items = lines
        .into_iter()
        .filter(|(_, _, amount)| *amount > 0.0)
        .map(|(label, icon, amount)| BudgetItem {
            label,
            icon,
            amount,
            share_percent: (amount / total_allocated * 100.0).round(),
        })
        .collect();

    let surplus = form.monthly_surplus();
    let extra_capacity_note = (total_allocated < surplus).then(|| {
        format!(
            "You have ${} extra monthly capacity. Consider increasing one of the categories above.",
            grouped(surplus - total_allocated)
        )
    });

    BudgetAllocation {
        monthly_income: form.monthly_income,
        monthly_expenses: form.monthly_expenses,
        monthly_surplus: surplus,
        savings_rate: round1(form.savings_rate()),
        items,
        total_allocated,
        extra_capacity_note,
    }
}

fn emergency_fund(plan: &StoredPlan) -> Option<EmergencyFundProgress> {
    let e = plan.emergency_fund_plan.as_ref()?;
    let current_months = e.current_coverage_months.max(0.0);
    let fully_funded = current_months >= EMERGENCY_MONTHS;
    Some(EmergencyFundProgress {
        target_amount: e.target_amount,
        current_months,
        target_months: EMERGENCY_MONTHS,
        progress_percent: (current_months / EMERGENCY_MONTHS * 100.0).min(100.0),
        fully_funded,
        monthly_contribution: e.monthly_contribution,
        advice: (!fully_funded).then(|| {
            format!(
                "Save ${} monthly to reach 6 months coverage.",
                grouped(e.monthly_contribution)
            )
        }),
    })
}

fn debt_payoff(form: &FormDetails, plan: &StoredPlan) -> Option<DebtPayoffView> {
    if form.debt_amount <= 0.0 {
        return None;
    }
    let d = plan.debt_payoff_strategy.as_ref()?;
    Some(DebtPayoffView {
        debt_amount: form.debt_amount,
        monthly_payment: d.monthly_payment_suggestion,
        payoff_years: round1(d.payoff_timeline_months / 12.0),
        priority: d.priority.clone(),
        strategy: d.strategy.replace('_', " "),
    })
}

fn retirement(quiz: &QuizAnswers, plan: &StoredPlan) -> Option<RetirementView> {
    let r = plan.retirement_strategy.as_ref()?;
    let age = quiz.age.unwrap_or(crate::coach::recommendations::DEFAULT_AGE);
    Some(RetirementView {
        years_to_retirement: RETIREMENT_AGE.saturating_sub(age),
        monthly_contribution: r.recommended_monthly,
        employer_match_value: r.employer_match_value,
        projected_at_65: r.projected_at_65,
        account_recommendations: r.account_recommendations.clone(),
    })
}

/// Pie chart series; empty slices are dropped.
pub fn portfolio_series(mix: Option<&PortfolioMix>) -> Vec<ChartSlice> {
    let Some(mix) = mix else {
        return Vec::new();
    };
    [
        ("Stocks", mix.stocks, "#4F46E5"),
        ("Bonds", mix.bonds, "#10B981"),
        ("Cash", mix.cash, "#F59E0B"),
        ("Alternatives", mix.alternatives, "#8B5CF6"),
    ]
    .into_iter()
    .filter(|(_, value, _)| *value > 0.0)
    .map(|(name, value, color)| ChartSlice { name, value, color })
    .collect()
}

pub fn build(record: &QuizResponse) -> ResultsView {
    let quiz = record.quiz();
    let form = record.form();
    let plan = record.plan();

    let score = plan.financial_health_score.unwrap_or(0.0);
    let tier = HealthTier::for_score(score);

    ResultsView {
        id: record.id.clone(),
        user_name: quiz.user_name.clone(),
        headline: format!(
            "Here's your roadmap to achieving ${} in {} years",
            grouped(form.goal_target_amount),
            form.goal_timeline_years
        ),
        health: HealthSummary {
            score,
            tier,
            message: tier.message(),
        },
        status_indicators: status_indicators(&form, &plan),
        key_stats: KeyStats {
            monthly_investment_target: plan.monthly_investment_target.unwrap_or(0.0),
            monthly_surplus: form.monthly_surplus(),
            goal_target_amount: form.goal_target_amount,
            goal_timeline_years: form.goal_timeline_years,
            age: quiz.age,
        },
        budget: budget_allocation(&form, &plan),
        emergency_fund: emergency_fund(&plan),
        debt_payoff: debt_payoff(&form, &plan),
        retirement: retirement(&quiz, &plan),
        portfolio: portfolio_series(plan.portfolio_recommendation.as_ref()),
        action_checklist: plan.action_checklist.clone(),
        recommendations: plan.key_recommendations.clone(),
        investment_recommendations: record.fields.get("investment_recommendations").cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::plan::canned_plan;
    use crate::models::quiz_response::to_fields;
    use serde_json::json;

    fn record_with_plan(form: Value) -> QuizResponse {
        let mut fields = form.as_object().cloned().unwrap();
        fields.extend(to_fields(&StoredPlan::from(canned_plan())).unwrap());
        QuizResponse::new("r1".to_string(), fields)
    }

    #[test]
    fn test_health_tiers() {
        assert_eq!(HealthTier::for_score(72.0), HealthTier::Excellent);
        assert_eq!(HealthTier::for_score(70.0), HealthTier::Excellent);
        assert_eq!(HealthTier::for_score(50.0), HealthTier::Good);
        assert_eq!(HealthTier::for_score(49.9), HealthTier::NeedsAttention);
    }

    #[test]
    fn test_budget_allocation_from_canned_plan() {
        // canned: emergency 300, debt 500, retirement 250, target 400
        let record = record_with_plan(json!({
            "monthly_income": 4200.0,
            "monthly_expenses": 3000.0
        }));
        let view = build(&record);
        let labels: Vec<&str> = view.budget.items.iter().map(|i| i.label).collect();
        // goal savings clamps to 0 and is dropped
        assert_eq!(labels, vec!["Emergency Fund", "Debt Payment", "Retirement"]);
        assert_eq!(view.budget.total_allocated, 1050.0);
        assert_eq!(view.budget.items[1].share_percent, 48.0);
        assert_eq!(
            view.budget.extra_capacity_note.as_deref(),
            Some("You have $150 extra monthly capacity. Consider increasing one of the categories above.")
        );
    }

    #[test]
    fn test_goal_savings_takes_the_remainder() {
        let mut fields = json!({"monthly_income": 5000.0, "monthly_expenses": 3000.0})
            .as_object()
            .cloned()
            .unwrap();
        fields.extend(
            to_fields(&StoredPlan {
                monthly_investment_target: Some(1000.0),
                emergency_fund_plan: Some(crate::models::plan::EmergencyFundPlan {
                    monthly_contribution: 300.0,
                    ..Default::default()
                }),
                ..Default::default()
            })
            .unwrap(),
        );
        let view = build(&QuizResponse::new("r2".to_string(), fields));
        let goal = view.budget.items.iter().find(|i| i.label == "Goal Savings").unwrap();
        assert_eq!(goal.amount, 700.0);
        assert_eq!(goal.share_percent, 70.0);
    }

    #[test]
    fn test_emergency_progress_and_debt_years() {
        let record = record_with_plan(json!({"debt_amount": 25000.0, "age": 24}));
        let view = build(&record);

        let e = view.emergency_fund.unwrap();
        assert!((e.progress_percent - 100.0 / 3.0).abs() < 1e-9);
        assert!(!e.fully_funded);
        assert_eq!(e.advice.as_deref(), Some("Save $300 monthly to reach 6 months coverage."));

        let d = view.debt_payoff.unwrap();
        assert_eq!(d.payoff_years, 4.0);

        let r = view.retirement.unwrap();
        assert_eq!(r.years_to_retirement, 41);
        assert_eq!(r.projected_at_65, 650000.0);
    }

    #[test]
    fn test_no_debt_hides_debt_card() {
        let view = build(&record_with_plan(json!({"debt_amount": 0})));
        assert!(view.debt_payoff.is_none());
        assert_eq!(view.status_indicators[1].status, IndicatorStatus::Met);
    }

    #[test]
    fn test_status_indicators() {
        let view = build(&record_with_plan(json!({
            "monthly_income": 4000.0,
            "monthly_expenses": 3000.0,
            "debt_amount": 5000.0,
            "has_employer_retirement": true
        })));
        let statuses: Vec<IndicatorStatus> =
            view.status_indicators.iter().map(|i| i.status).collect();
        assert_eq!(
            statuses,
            vec![
                IndicatorStatus::Partial,
                IndicatorStatus::Partial,
                IndicatorStatus::Met,
                IndicatorStatus::Partial
            ]
        );
        assert_eq!(view.status_indicators[0].symbol, "△");
    }

    #[test]
    fn test_portfolio_series_drops_empty_slices() {
        let series = portfolio_series(Some(&PortfolioMix {
            stocks: 80.0,
            bonds: 15.0,
            cash: 5.0,
            alternatives: 0.0,
        }));
        let names: Vec<&str> = series.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Stocks", "Bonds", "Cash"]);
        assert!(portfolio_series(None).is_empty());
    }

    #[test]
    fn test_empty_record_renders_defaults() {
        let view = build(&QuizResponse::new("r3".to_string(), serde_json::Map::new()));
        assert_eq!(view.health.tier, HealthTier::NeedsAttention);
        assert!(view.budget.items.is_empty());
        assert!(view.emergency_fund.is_none());
        assert!(view.portfolio.is_empty());
        assert_eq!(view.headline, "Here's your roadmap to achieving $0 in 0 years");
    }
}
