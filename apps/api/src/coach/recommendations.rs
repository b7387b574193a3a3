//! Local investment-plan generator used when no upstream coach answers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coach::allocation::{allocate, Allocation};
use crate::coach::etfs::{select_diversified, Etf, EtfCategory};
use crate::coach::projection::{project_growth, ProjectedGrowth, DEFAULT_MONTHS};
use crate::format::{grouped, round2};
use crate::models::profile::RiskTolerance;

pub const DEFAULT_AGE: u32 = 25;
pub const DEFAULT_CAPACITY: f64 = 500.0;
/// ETFs at or below this share of the portfolio are left out of the plan.
pub const MIN_ETF_PERCENT: f64 = 3.0;

// ────────────────────────────────────────────────────────────────────────────
// Request
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileQuiz {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<String>,
}

/// Loosely shaped profile: callers send name/age/risk either at the top level
/// or nested under `quiz`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<String>,
    pub quiz: ProfileQuiz,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

impl CoachProfile {
    /// `quiz.risk_tolerance`, then `risk_tolerance`; unknown values mean medium.
    pub fn risk(&self) -> RiskTolerance {
        present(&self.quiz.risk_tolerance)
            .or_else(|| present(&self.risk_tolerance))
            .map(RiskTolerance::parse_lenient)
            .unwrap_or_default()
    }

    /// `age`, then `quiz.age`, then `current_age`, else 25.
    pub fn age(&self) -> u32 {
        positive(self.age)
            .or_else(|| positive(self.quiz.age))
            .or_else(|| positive(self.current_age))
            .map(|a| a.round().min(f64::from(u32::MAX)) as u32)
            .unwrap_or(DEFAULT_AGE)
    }

    pub fn display_name(&self) -> &str {
        present(&self.name)
            .or_else(|| present(&self.quiz.name))
            .unwrap_or("there")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationRequest {
    pub user_profile: CoachProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_capacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_timeline_months: Option<u32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Response
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetClass {
    #[serde(rename = "Large Cap Equity")]
    LargeCapEquity,
    #[serde(rename = "Total Market")]
    TotalMarket,
    #[serde(rename = "Growth")]
    Growth,
    #[serde(rename = "Small Cap")]
    SmallCap,
    #[serde(rename = "International")]
    International,
    #[serde(rename = "Emerging Markets")]
    EmergingMarkets,
    #[serde(rename = "Bond")]
    Bond,
}

impl AssetClass {
    fn reasoning(&self, expense_ratio: f64) -> String {
        match self {
            AssetClass::LargeCapEquity => format!(
                "Core holding providing broad US large-cap market exposure with low \
                 {expense_ratio}% expense ratio. Tracks the S&P 500 index, giving you ownership \
                 in America's largest companies."
            ),
            AssetClass::TotalMarket => "Provides complete US market exposure including large, \
                mid, and small-cap stocks, increasing diversification across the entire market \
                including emerging growth companies."
                .to_string(),
            AssetClass::Growth => "Focuses on high-growth companies with strong earnings \
                potential. Higher volatility but offers significant upside for long-term \
                investors."
                .to_string(),
            AssetClass::SmallCap => "Small-cap stocks historically outperform over long periods. \
                Adds growth potential and diversification beyond large-cap holdings."
                .to_string(),
            AssetClass::International => "International diversification reduces US-specific \
                risk and provides exposure to developed economies in Europe, Asia, and \
                Australia."
                .to_string(),
            AssetClass::EmergingMarkets => "Emerging markets offer higher growth potential in \
                developing economies. Adds geographic diversification with higher risk/reward."
                .to_string(),
            AssetClass::Bond => "Provides stability and income, balancing the volatility of \
                stocks while maintaining competitive returns. Essential for risk management."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedEtf {
    pub symbol: String,
    pub name: String,
    pub provider: String,
    #[serde(rename = "type")]
    pub asset_class: AssetClass,
    pub expense_ratio: f64,
    pub allocation_percent: f64,
}

impl RecommendedEtf {
    fn new(etf: &Etf, asset_class: AssetClass, allocation_percent: f64) -> Self {
        Self {
            symbol: etf.symbol.to_string(),
            name: etf.name.to_string(),
            provider: etf.provider.to_string(),
            asset_class,
            expense_ratio: etf.expense,
            allocation_percent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EtfReasoning {
    pub symbol: String,
    pub name: String,
    pub allocation_percent: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoachInsights {
    pub greeting: String,
    pub strategy_overview: String,
    pub specific_recommendations: Vec<EtfReasoning>,
    pub action_steps: Vec<String>,
    pub risk_considerations: Vec<String>,
    pub rebalancing_schedule: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyAmount {
    pub etf: String,
    pub name: String,
    pub allocation_percent: f64,
    pub monthly_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestmentRecommendations {
    pub success: bool,
    pub risk_level: RiskTolerance,
    pub allocation: Allocation,
    pub recommended_etfs: Vec<RecommendedEtf>,
    pub ai_insights: CoachInsights,
    pub monthly_investment_breakdown: Vec<MonthlyAmount>,
    pub rebalancing_suggestions: Vec<String>,
    pub projected_growth: ProjectedGrowth,
    pub last_updated: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Picks the tier's funds in display order, with their share of the portfolio.
/// Includes the bond fund only when the bond sleeve is large enough for the tier.
pub fn recommended_etfs(risk: RiskTolerance, allocation: &Allocation) -> Vec<RecommendedEtf> {
    let selection = select_diversified(risk, allocation.total_stocks);
    let b = &allocation.breakdown;
    let bonds = f64::from(allocation.total_bonds);

    let slots: Vec<(EtfCategory, AssetClass, Option<f64>)> = match risk {
        RiskTolerance::Low => vec![
            (EtfCategory::LargeCap, AssetClass::LargeCapEquity, b.us_large_cap),
            (EtfCategory::International, AssetClass::International, b.international),
            (EtfCategory::Bonds, AssetClass::Bond, (bonds > 10.0).then_some(b.bonds)),
        ],
        RiskTolerance::Medium => vec![
            (EtfCategory::LargeCap, AssetClass::LargeCapEquity, b.us_large_cap),
            (EtfCategory::TotalMarket, AssetClass::TotalMarket, b.us_total_market),
            (EtfCategory::International, AssetClass::International, b.international),
            (EtfCategory::Emerging, AssetClass::EmergingMarkets, b.emerging_growth),
            (EtfCategory::Bonds, AssetClass::Bond, (bonds > 10.0).then_some(b.bonds)),
        ],
        RiskTolerance::High => vec![
            (EtfCategory::LargeCap, AssetClass::LargeCapEquity, b.us_large_cap),
            (EtfCategory::Growth, AssetClass::Growth, b.growth),
            (EtfCategory::SmallCap, AssetClass::SmallCap, b.small_cap),
            (EtfCategory::International, AssetClass::International, b.international),
            (EtfCategory::Emerging, AssetClass::EmergingMarkets, b.emerging_growth),
            (EtfCategory::Bonds, AssetClass::Bond, (bonds > 5.0).then_some(b.bonds)),
        ],
    };

    slots
        .into_iter()
        .filter_map(|(category, class, percent)| {
            let etf = selection.get(category)?;
            Some(RecommendedEtf::new(etf, class, percent?))
        })
        .collect()
}

fn distinct_providers(etfs: &[RecommendedEtf]) -> Vec<&str> {
    let mut providers: Vec<&str> = Vec::new();
    for etf in etfs {
        if !providers.contains(&etf.provider.as_str()) {
            providers.push(&etf.provider);
        }
    }
    providers
}

pub fn generate(request: &RecommendationRequest) -> InvestmentRecommendations {
    let profile = &request.user_profile;
    let risk = profile.risk();
    let age = profile.age();
    let capacity = positive(request.monthly_capacity).unwrap_or(DEFAULT_CAPACITY);
    let months = request.goal_timeline_months.filter(|m| *m > 0);
    let years = (f64::from(months.unwrap_or(DEFAULT_MONTHS)) / 12.0).round();

    let allocation = allocate(age, risk);
    let stocks = allocation.total_stocks;
    let bonds = allocation.total_bonds;

    let etfs: Vec<RecommendedEtf> = recommended_etfs(risk, &allocation)
        .into_iter()
        .filter(|e| e.allocation_percent > MIN_ETF_PERCENT)
        .collect();

    let specific_recommendations = etfs
        .iter()
        .map(|e| EtfReasoning {
            symbol: e.symbol.clone(),
            name: e.name.clone(),
            allocation_percent: e.allocation_percent,
            reasoning: e.asset_class.reasoning(e.expense_ratio),
        })
        .collect();

    let monthly_investment_breakdown = etfs
        .iter()
        .map(|e| MonthlyAmount {
            etf: e.symbol.clone(),
            name: e.name.clone(),
            allocation_percent: e.allocation_percent,
            monthly_amount: round2(capacity * e.allocation_percent / 100.0),
        })
        .collect();

    let ai_insights = CoachInsights {
        greeting: format!(
            "Hi {}! Let's build your personalized investment strategy.",
            profile.display_name()
        ),
        strategy_overview: format!(
            "Based on your {risk} risk tolerance and {age}-year age, I recommend a {stocks}% \
             stocks / {bonds}% bonds allocation. This balanced approach focuses on low-cost index \
             funds with automatic rebalancing to help you reach your ${goal} goal in {years} years.",
            risk = risk.as_str(),
            goal = grouped(request.goal_amount.unwrap_or(0.0)),
        ),
        specific_recommendations,
        action_steps: vec![
            format!(
                "Open a brokerage account with {} or any major broker offering commission-free ETF \
                 trading",
                distinct_providers(&etfs).join(", ")
            ),
            format!(
                "Set up automatic monthly investments of ${capacity:.2} on the same day each month"
            ),
            "Enable dividend reinvestment (DRIP) on all holdings to compound your returns".into(),
            "Schedule quarterly portfolio reviews (March, June, September, December)".into(),
            "Consider increasing contributions by 1% whenever you receive a raise or bonus".into(),
            "Keep 3-6 months of expenses in a high-yield savings account before investing \
             aggressively"
                .into(),
        ],
        risk_considerations: vec![
            "Stock markets can decline 20-40% during recessions - this is normal and temporary. \
             Stay invested through volatility."
                .into(),
            "Your portfolio may experience short-term losses, but historically the market has \
             always recovered and reached new highs."
                .into(),
            "Avoid panic selling during market downturns - every major market crash in history \
             has been followed by a recovery."
                .into(),
            "Don't try to time the market. Time IN the market beats timing the market.".into(),
            format!(
                "With your {years}-year timeline, you have time to recover from market downturns."
            ),
        ],
        rebalancing_schedule: "Review your portfolio quarterly. Rebalance only if any position \
            drifts more than 5% from its target allocation. This maintains your risk profile \
            while minimizing transaction costs."
            .to_string(),
    };

    InvestmentRecommendations {
        success: true,
        risk_level: risk,
        recommended_etfs: etfs,
        ai_insights,
        monthly_investment_breakdown,
        rebalancing_suggestions: rebalancing_suggestions(&allocation, age),
        projected_growth: project_growth(capacity, months, stocks),
        allocation,
        last_updated: Utc::now(),
    }
}

pub fn rebalancing_suggestions(allocation: &Allocation, age: u32) -> Vec<String> {
    vec![
        format!(
            "Review your portfolio quarterly (every 3 months) to maintain your {}% stocks / {}% \
             bonds target allocation.",
            allocation.total_stocks, allocation.total_bonds
        ),
        "Rebalance when any asset class drifts more than 5% from its target allocation.".into(),
        "Consider tax-loss harvesting opportunities during rebalancing to offset capital gains."
            .into(),
        (if age < 35 {
            "At your age, you can afford more market volatility - consider increasing stock \
             allocation during market dips (buying the dip)."
        } else {
            "Focus on maintaining your allocation as you approach retirement age."
        })
        .to_string(),
        "Set up automatic investments to take advantage of dollar-cost averaging and reduce the \
         impact of market timing."
            .into(),
        "Avoid emotional decisions - stick to your quarterly review schedule even during \
         volatile markets."
            .into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(risk: &str, age: f64) -> RecommendationRequest {
        RecommendationRequest {
            user_profile: CoachProfile {
                name: Some("Alex".to_string()),
                age: Some(age),
                quiz: ProfileQuiz {
                    risk_tolerance: Some(risk.to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
            monthly_capacity: Some(400.0),
            goal_amount: Some(20000.0),
            goal_timeline_months: Some(36),
        }
    }

    fn symbols(recs: &InvestmentRecommendations) -> Vec<&str> {
        recs.recommended_etfs.iter().map(|e| e.symbol.as_str()).collect()
    }

    #[test]
    fn test_profile_field_precedence() {
        let profile: CoachProfile = serde_json::from_value(serde_json::json!({
            "risk_tolerance": "low",
            "current_age": 40,
            "quiz": {"risk_tolerance": "HIGH", "age": 33, "name": "Quiz Name"}
        }))
        .unwrap();
        assert_eq!(profile.risk(), RiskTolerance::High);
        assert_eq!(profile.age(), 33);
        assert_eq!(profile.display_name(), "Quiz Name");
        assert_eq!(CoachProfile::default().display_name(), "there");
        assert_eq!(CoachProfile::default().age(), 25);
    }

    #[test]
    fn test_medium_tier_at_25() {
        let recs = generate(&request("medium", 25.0));
        assert_eq!(recs.allocation.total_stocks, 85);
        // 15% bonds clears the 10% bar for medium
        assert_eq!(symbols(&recs), vec!["VOO", "ITOT", "SCHF", "VWO", "BND"]);
        assert_eq!(recs.recommended_etfs[0].allocation_percent, 34.0);
    }

    #[test]
    fn test_high_tier_keeps_ten_percent_bond_sleeve() {
        // 90% stocks leaves 10% bonds, above the 5% bar for high
        let recs = generate(&request("high", 25.0));
        assert_eq!(
            symbols(&recs),
            vec!["VOO", "VUG", "VB", "SCHF", "VWO", "BND"]
        );
    }

    #[test]
    fn test_medium_tier_omits_bonds_at_ten_percent() {
        // age 20: base 90, medium keeps 90, bonds 10 which is not above 10
        let recs = generate(&request("medium", 20.0));
        assert!(!symbols(&recs).contains(&"BND"));
    }

    #[test]
    fn test_small_allocations_filtered() {
        for risk in ["low", "medium", "high"] {
            for age in [18.0, 30.0, 45.0, 60.0, 80.0] {
                let recs = generate(&request(risk, age));
                assert!(recs
                    .recommended_etfs
                    .iter()
                    .all(|e| e.allocation_percent > MIN_ETF_PERCENT));
                assert_eq!(
                    recs.recommended_etfs.len(),
                    recs.monthly_investment_breakdown.len()
                );
            }
        }
    }

    #[test]
    fn test_every_recommendation_has_reasoning() {
        let recs = generate(&request("high", 25.0));
        assert!(recs
            .ai_insights
            .specific_recommendations
            .iter()
            .all(|r| !r.reasoning.is_empty()));
    }

    #[test]
    fn test_monthly_breakdown_rounds_to_cents() {
        let recs = generate(&request("medium", 25.0));
        let voo = &recs.monthly_investment_breakdown[0];
        // 400 * 34 / 100
        assert_eq!(voo.monthly_amount, 136.0);
    }

    #[test]
    fn test_insight_text() {
        let recs = generate(&request("medium", 25.0));
        let insights = &recs.ai_insights;
        assert_eq!(
            insights.greeting,
            "Hi Alex! Let's build your personalized investment strategy."
        );
        assert!(insights
            .strategy_overview
            .contains("reach your $20,000 goal in 3 years"));
        assert!(insights.action_steps[0]
            .starts_with("Open a brokerage account with Vanguard, BlackRock, Schwab or"));
        assert!(insights.action_steps[1].contains("$400.00"));
        assert_eq!(insights.action_steps.len(), 6);
        assert_eq!(insights.risk_considerations.len(), 5);
        assert!(insights.risk_considerations[4].contains("3-year timeline"));
    }

    #[test]
    fn test_defaults_without_capacity_or_timeline() {
        let recs = generate(&RecommendationRequest::default());
        assert_eq!(recs.risk_level, RiskTolerance::Medium);
        assert_eq!(recs.projected_growth.total_invested, 30000.0);
        assert!(recs.ai_insights.action_steps[1].contains("$500.00"));
        assert!(recs.ai_insights.greeting.starts_with("Hi there!"));
    }

    #[test]
    fn test_rebalancing_tip_depends_on_age() {
        let young = rebalancing_suggestions(&allocate(30, RiskTolerance::Medium), 30);
        let older = rebalancing_suggestions(&allocate(50, RiskTolerance::Medium), 50);
        assert_eq!(young.len(), 6);
        assert!(young[3].contains("buying the dip"));
        assert!(older[3].contains("approach retirement"));
    }

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(generate(&request("low", 30.0))).unwrap();
        assert_eq!(value["risk_level"], "low");
        assert_eq!(value["recommended_etfs"][0]["type"], "Large Cap Equity");
        assert!(value["allocation"]["breakdown"]["bonds"].is_number());
    }
}
