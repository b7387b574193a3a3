//! Market snapshot, ETF lookups and portfolio-aware market insights.
//!
//! The snapshot is static sample data; nothing here calls a market data feed.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::coach::etfs::{self, EtfCategory};
use crate::coach::recommendations::CoachProfile;
use crate::format::round2;

// ────────────────────────────────────────────────────────────────────────────
// Static market data
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexQuote {
    pub name: &'static str,
    pub symbol: &'static str,
    pub change_percent: f64,
    pub price: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectorMove {
    pub name: &'static str,
    pub change_percent: f64,
    pub trend: Trend,
    pub top_movers: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct BondYield {
    pub name: &'static str,
    pub yield_percent: f64,
    pub change: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize)]
pub struct EconomicIndicators {
    pub fed_rate: f64,
    pub fed_next_meeting: &'static str,
    pub fed_expected_move: &'static str,
    pub inflation: f64,
    pub inflation_previous: f64,
    pub inflation_trend: Trend,
    pub unemployment: f64,
    pub unemployment_trend: Trend,
}

#[derive(Debug, Clone, Serialize)]
pub struct EtfPerformance {
    pub symbol: &'static str,
    pub name: &'static str,
    pub change_percent: f64,
    pub volume: &'static str,
    pub sector_exposure: &'static str,
}

pub const INDICES: [IndexQuote; 4] = [
    IndexQuote { name: "S&P 500", symbol: "SPY", change_percent: 1.2, price: 450.25, trend: Trend::Up },
    IndexQuote { name: "NASDAQ", symbol: "QQQ", change_percent: 2.4, price: 380.50, trend: Trend::Up },
    IndexQuote { name: "Dow Jones", symbol: "DIA", change_percent: 0.8, price: 350.75, trend: Trend::Up },
    IndexQuote { name: "Russell 2000", symbol: "IWM", change_percent: -0.5, price: 195.30, trend: Trend::Down },
];

pub const SECTORS: [SectorMove; 5] = [
    SectorMove { name: "Technology", change_percent: 2.4, trend: Trend::Up, top_movers: &["AAPL", "MSFT", "NVDA"] },
    SectorMove { name: "Healthcare", change_percent: 0.8, trend: Trend::Up, top_movers: &["JNJ", "UNH"] },
    SectorMove { name: "Financials", change_percent: 1.5, trend: Trend::Up, top_movers: &["JPM", "BAC"] },
    SectorMove { name: "Energy", change_percent: -1.2, trend: Trend::Down, top_movers: &["XOM", "CVX"] },
    SectorMove { name: "Consumer", change_percent: 0.5, trend: Trend::Up, top_movers: &["AMZN", "WMT"] },
];

pub const BOND_YIELDS: [BondYield; 2] = [
    BondYield { name: "10-Year Treasury", yield_percent: 4.25, change: 0.05, trend: Trend::Up },
    BondYield { name: "Corporate Bonds", yield_percent: 5.10, change: 0.03, trend: Trend::Up },
];

pub const INDICATORS: EconomicIndicators = EconomicIndicators {
    fed_rate: 5.25,
    fed_next_meeting: "2 weeks",
    fed_expected_move: "hold",
    inflation: 3.2,
    inflation_previous: 3.7,
    inflation_trend: Trend::Down,
    unemployment: 3.8,
    unemployment_trend: Trend::Stable,
};

pub const HEADLINES: [&str; 5] = [
    "Federal Reserve signals interest rate cuts may begin in Q2 2024",
    "Tech stocks rally on strong AI chip demand",
    "Healthcare sector sees gains on new drug approvals",
    "Bond yields rise as investors reassess Fed policy",
    "Consumer spending remains resilient despite inflation",
];

pub const ETF_PERFORMANCE: [EtfPerformance; 8] = [
    EtfPerformance { symbol: "VOO", name: "Vanguard S&P 500", change_percent: 1.2, volume: "high", sector_exposure: "broad" },
    EtfPerformance { symbol: "VTI", name: "Vanguard Total Market", change_percent: 1.1, volume: "high", sector_exposure: "broad" },
    EtfPerformance { symbol: "VEA", name: "Vanguard International", change_percent: 0.6, volume: "moderate", sector_exposure: "international" },
    EtfPerformance { symbol: "VWO", name: "Vanguard Emerging Markets", change_percent: -0.3, volume: "moderate", sector_exposure: "emerging" },
    EtfPerformance { symbol: "BND", name: "Vanguard Total Bond", change_percent: -0.2, volume: "moderate", sector_exposure: "bonds" },
    EtfPerformance { symbol: "AGG", name: "iShares Aggregate Bond", change_percent: -0.15, volume: "high", sector_exposure: "bonds" },
    EtfPerformance { symbol: "QQQ", name: "Invesco QQQ", change_percent: 2.4, volume: "very_high", sector_exposure: "tech" },
    EtfPerformance { symbol: "SCHD", name: "Schwab Dividend", change_percent: 0.9, volume: "moderate", sector_exposure: "dividend" },
];

fn performance(symbol: &str) -> Option<&'static EtfPerformance> {
    ETF_PERFORMANCE
        .iter()
        .find(|p| p.symbol.eq_ignore_ascii_case(symbol))
}

// ────────────────────────────────────────────────────────────────────────────
// ETF info
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct EtfInfo {
    pub symbol: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<EtfCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<&'static EtfPerformance>,
}

/// Catalogue entry for `symbol`, joined with today's performance when known.
/// Symbols only present in the performance table are returned without provider data.
pub fn etf_info(symbol: &str) -> Option<EtfInfo> {
    let perf = performance(symbol);
    match etfs::find(symbol) {
        Some((category, etf)) => Some(EtfInfo {
            symbol: etf.symbol,
            name: etf.name,
            provider: Some(etf.provider),
            category: Some(category),
            expense_ratio: Some(etf.expense),
            performance: perf,
        }),
        None => perf.map(|p| EtfInfo {
            symbol: p.symbol,
            name: p.name,
            provider: None,
            category: None,
            expense_ratio: None,
            performance: Some(p),
        }),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Summary & analysis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

pub fn sentiment(change_percent: f64) -> Sentiment {
    if change_percent > 0.5 {
        Sentiment::Bullish
    } else if change_percent < -0.5 {
        Sentiment::Bearish
    } else {
        Sentiment::Neutral
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketSummary {
    pub sp500_change: f64,
    pub nasdaq_change: f64,
    pub bond_yield: f64,
    pub market_sentiment: Sentiment,
    pub top_sector: &'static str,
}

fn top_sector() -> &'static SectorMove {
    // first of equals wins
    SECTORS
        .iter()
        .fold(&SECTORS[0], |best, s| if s.change_percent > best.change_percent { s } else { best })
}

fn weakest_sector() -> &'static SectorMove {
    SECTORS
        .iter()
        .fold(&SECTORS[0], |worst, s| if s.change_percent < worst.change_percent { s } else { worst })
}

pub fn market_summary() -> MarketSummary {
    let sp500 = &INDICES[0];
    MarketSummary {
        sp500_change: sp500.change_percent,
        nasdaq_change: INDICES[1].change_percent,
        bond_yield: BOND_YIELDS[0].yield_percent,
        market_sentiment: sentiment(sp500.change_percent),
        top_sector: top_sector().name,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketAnalysis {
    pub timestamp: DateTime<Utc>,
    pub summary: MarketSummary,
    pub indices: &'static [IndexQuote],
    pub sectors: &'static [SectorMove],
    pub bonds: &'static [BondYield],
    pub economic_indicators: &'static EconomicIndicators,
    pub news_headlines: &'static [&'static str],
    pub etf_performance: &'static [EtfPerformance],
}

pub fn market_analysis() -> MarketAnalysis {
    MarketAnalysis {
        timestamp: Utc::now(),
        summary: market_summary(),
        indices: &INDICES,
        sectors: &SECTORS,
        bonds: &BOND_YIELDS,
        economic_indicators: &INDICATORS,
        news_headlines: &HEADLINES,
        etf_performance: &ETF_PERFORMANCE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Portfolio impact
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EtfImpact {
    pub symbol: String,
    pub name: String,
    pub allocation: f64,
    pub change_percent: f64,
    pub contribution_to_portfolio: f64,
    #[serde(skip)]
    pub sector_exposure: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PortfolioImpact {
    pub total_portfolio_change: f64,
    pub etf_impacts: Vec<EtfImpact>,
    pub best_performer: Option<EtfImpact>,
    pub worst_performer: Option<EtfImpact>,
}

/// Weights today's ETF moves by `allocation` (symbol → percent of portfolio).
/// Symbols without performance data are ignored.
pub fn portfolio_impact(allocation: &BTreeMap<String, f64>) -> PortfolioImpact {
    let impacts: Vec<EtfImpact> = allocation
        .iter()
        .filter_map(|(symbol, percent)| {
            let perf = performance(symbol)?;
            Some(EtfImpact {
                symbol: perf.symbol.to_string(),
                name: perf.name.to_string(),
                allocation: *percent,
                change_percent: perf.change_percent,
                contribution_to_portfolio: perf.change_percent * percent / 100.0,
                sector_exposure: perf.sector_exposure,
            })
        })
        .collect();

    let total: f64 = impacts.iter().map(|i| i.contribution_to_portfolio).sum();

    let mut best: Option<&EtfImpact> = None;
    let mut worst: Option<&EtfImpact> = None;
    for impact in &impacts {
        if best.map_or(true, |b| impact.change_percent > b.change_percent) {
            best = Some(impact);
        }
        if worst.map_or(true, |w| impact.change_percent < w.change_percent) {
            worst = Some(impact);
        }
    }
    let best_performer = best.cloned();
    let worst_performer = worst.cloned();

    let mut etf_impacts = impacts;
    etf_impacts.sort_by(|a, b| {
        b.contribution_to_portfolio
            .abs()
            .total_cmp(&a.contribution_to_portfolio.abs())
    });

    PortfolioImpact {
        total_portfolio_change: round2(total),
        etf_impacts,
        best_performer,
        worst_performer,
    }
}

/// Up to three follow-ups for the day's move.
pub fn action_items(impact: &PortfolioImpact) -> Vec<String> {
    let change = impact.total_portfolio_change;
    let mut actions = Vec::new();

    if change.abs() > 2.0 {
        actions.push(format!(
            "Portfolio moved significantly ({change:+.1}%) - this is normal market volatility"
        ));
    }

    if change > 1.0 {
        actions.push("Great day! Stay disciplined - don't get overexcited by short-term gains".into());
    } else if change < -1.0 {
        actions.push("Portfolio dipped - remember your long-term strategy, don't panic sell".into());
    }

    if let (Some(best), Some(worst)) = (&impact.best_performer, &impact.worst_performer) {
        if best.change_percent - worst.change_percent > 5.0 {
            actions.push("Large divergence between holdings - review if rebalancing is needed".into());
        }
    }

    actions.push("Continue your regular dollar-cost averaging schedule".into());
    actions.truncate(3);
    actions
}

// ────────────────────────────────────────────────────────────────────────────
// Insights
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    #[default]
    Daily,
    Weekly,
}

/// Daily updates land at the next 16:00 market close; weekly ones on the next
/// Monday at 16:00 (a full week ahead when today is Monday).
pub fn next_update(kind: InsightKind, now: NaiveDateTime) -> NaiveDateTime {
    let date = match kind {
        InsightKind::Daily if now.hour() >= 16 => now.date() + Duration::days(1),
        InsightKind::Daily => now.date(),
        InsightKind::Weekly => {
            let days_ahead = 7 - i64::from(now.weekday().num_days_from_monday());
            now.date() + Duration::days(days_ahead)
        }
    };
    date.and_hms_opt(16, 0, 0).unwrap_or(now)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InsightsRequest {
    pub user_profile: CoachProfile,
    pub portfolio_allocation: BTreeMap<String, f64>,
    pub insight_type: InsightKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketEvent {
    pub event: String,
    pub simple_explanation: String,
    pub impact_on_you: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonalizedInsights {
    pub greeting: String,
    pub main_insight: String,
    pub portfolio_impact_explanation: String,
    pub whats_happening: Vec<MarketEvent>,
    pub looking_ahead: String,
    pub should_i_worry: bool,
    pub worry_explanation: String,
    pub opportunity: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketInsights {
    pub success: bool,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub timestamp: DateTime<Utc>,
    pub portfolio_change_percent: f64,
    pub market_summary: MarketSummary,
    pub personalized_insights: PersonalizedInsights,
    pub etf_performance: Vec<EtfImpact>,
    pub action_items: Vec<String>,
    pub next_update: String,
}

fn personalize(name: &str, impact: &PortfolioImpact) -> PersonalizedInsights {
    let change = impact.total_portfolio_change;
    let direction = if change > 0.0 {
        "up"
    } else if change < 0.0 {
        "down"
    } else {
        "flat"
    };
    let top = top_sector();
    let weak = weakest_sector();
    let treasury = &BOND_YIELDS[0];

    let portfolio_impact_explanation = match impact.etf_impacts.first() {
        Some(lead) => format!(
            "{} ({}) had the biggest effect on your portfolio: it moved {:+.1}% and makes up \
             {:.0}% of your holdings, which added {:+.2} points to your total.",
            lead.symbol,
            lead.name,
            lead.change_percent,
            lead.allocation,
            lead.contribution_to_portfolio
        ),
        None => "None of your holdings have performance data today, so we couldn't estimate \
                 how your portfolio moved."
            .to_string(),
    };

    let bond_funds: Vec<&str> = impact
        .etf_impacts
        .iter()
        .filter(|i| i.sector_exposure == "bonds")
        .map(|i| i.symbol.as_str())
        .collect();
    let bond_impact = if bond_funds.is_empty() {
        "You don't hold bond funds in this portfolio, so this mostly doesn't affect you."
            .to_string()
    } else {
        format!(
            "Your bond funds ({}) dipped slightly as a result, which is normal when yields rise.",
            bond_funds.join(", ")
        )
    };

    let whats_happening = vec![
        MarketEvent {
            event: format!("{} stocks rose {:.1}%", top.name, top.change_percent),
            simple_explanation: format!(
                "Investors bought {} companies like {}, pushing the sector higher.",
                top.name.to_lowercase(),
                top.top_movers.join(", ")
            ),
            impact_on_you: "Broad-market funds own these companies, so their gains help your \
                            stock funds too."
                .to_string(),
        },
        MarketEvent {
            event: format!("{} stocks fell {:.1}%", weak.name, weak.change_percent.abs()),
            simple_explanation: format!(
                "{} shares slipped, led by {}. Sector swings like this are common day to day.",
                weak.name,
                weak.top_movers.join(", ")
            ),
            impact_on_you: "This sector is a small slice of a diversified fund, so the drag on \
                            you is minor."
                .to_string(),
        },
        MarketEvent {
            event: format!(
                "The {} yield rose to {:.2}%",
                treasury.name, treasury.yield_percent
            ),
            simple_explanation: "When new bonds pay more, older bonds with lower payments become \
                                 a little less valuable."
                .to_string(),
            impact_on_you: bond_impact,
        },
    ];

    let should_i_worry = change < -2.0;
    let worry_explanation = if should_i_worry {
        format!(
            "A {change:+.2}% day stings, but drops like this happen several times a year and \
             long-term investors recover from them."
        )
    } else {
        "No. Day-to-day moves of this size are normal and don't change your long-term plan."
            .to_string()
    };

    let opportunity = if change < -1.0 {
        "Prices are lower today, so your regular contributions buy more shares than usual."
    } else {
        "Stay the course with your long-term strategy and keep your automatic investments \
         running."
    }
    .to_string();

    PersonalizedInsights {
        greeting: format!("Hi {name}! Your portfolio is {direction} {change:+.2}% today."),
        main_insight: format!(
            "{} led the market ({:+.1}%) while the S&P 500 moved {:+.1}%. Your diversified \
             funds captured part of that move.",
            top.name, top.change_percent, INDICES[0].change_percent
        ),
        portfolio_impact_explanation,
        whats_happening,
        looking_ahead: format!(
            "The Fed meets in {} and is expected to {} rates at {}%. Inflation is {}% (down from \
             {}%), so watch for any change in tone.",
            INDICATORS.fed_next_meeting,
            INDICATORS.fed_expected_move,
            INDICATORS.fed_rate,
            INDICATORS.inflation,
            INDICATORS.inflation_previous
        ),
        should_i_worry,
        worry_explanation,
        opportunity,
    }
}

pub fn market_insights(request: &InsightsRequest, now: NaiveDateTime) -> MarketInsights {
    let impact = portfolio_impact(&request.portfolio_allocation);
    let personalized_insights = personalize(request.user_profile.display_name(), &impact);

    MarketInsights {
        success: true,
        kind: request.insight_type,
        timestamp: Utc::now(),
        portfolio_change_percent: impact.total_portfolio_change,
        market_summary: market_summary(),
        personalized_insights,
        action_items: action_items(&impact),
        next_update: next_update(request.insight_type, now)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        etf_performance: impact.etf_impacts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 30, 0)
            .unwrap()
    }

    fn allocation(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(s, p)| (s.to_string(), *p)).collect()
    }

    #[test]
    fn test_sentiment_thresholds() {
        assert_eq!(sentiment(1.2), Sentiment::Bullish);
        assert_eq!(sentiment(0.5), Sentiment::Neutral);
        assert_eq!(sentiment(-0.5), Sentiment::Neutral);
        assert_eq!(sentiment(-0.6), Sentiment::Bearish);
    }

    #[test]
    fn test_market_summary() {
        let summary = market_summary();
        assert_eq!(summary.market_sentiment, Sentiment::Bullish);
        assert_eq!(summary.top_sector, "Technology");
        assert_eq!(summary.bond_yield, 4.25);
    }

    #[test]
    fn test_portfolio_impact_weighted_change() {
        let impact = portfolio_impact(&allocation(&[
            ("VOO", 40.0),
            ("VTI", 20.0),
            ("VEA", 10.0),
            ("BND", 30.0),
        ]));
        // 0.48 + 0.22 + 0.06 - 0.06 = 0.70
        assert_eq!(impact.total_portfolio_change, 0.7);
        assert_eq!(impact.etf_impacts[0].symbol, "VOO");
        assert_eq!(impact.best_performer.unwrap().symbol, "VOO");
        assert_eq!(impact.worst_performer.unwrap().symbol, "BND");
    }

    #[test]
    fn test_portfolio_impact_ignores_unknown_symbols() {
        let impact = portfolio_impact(&allocation(&[("ZZZZ", 100.0)]));
        assert_eq!(impact.total_portfolio_change, 0.0);
        assert!(impact.etf_impacts.is_empty());
        assert!(impact.best_performer.is_none());
    }

    #[test]
    fn test_action_items_capped_at_three() {
        let impact = portfolio_impact(&allocation(&[("QQQ", 100.0)]));
        // +2.4%: significant move, great day, then DCA would be the 3rd
        let actions = action_items(&impact);
        assert_eq!(actions.len(), 3);
        assert!(actions[0].contains("+2.4%"));
        assert!(actions[1].starts_with("Great day!"));
    }

    #[test]
    fn test_action_items_quiet_day() {
        let impact = portfolio_impact(&allocation(&[("BND", 100.0)]));
        assert_eq!(
            action_items(&impact),
            vec!["Continue your regular dollar-cost averaging schedule".to_string()]
        );
    }

    #[test]
    fn test_next_update_daily() {
        // 2024-03-13 is a Wednesday
        let before_close = next_update(InsightKind::Daily, at(2024, 3, 13, 10));
        assert_eq!(before_close, at(2024, 3, 13, 16) - Duration::minutes(30));
        let after_close = next_update(InsightKind::Daily, at(2024, 3, 13, 17));
        assert_eq!(after_close.date(), NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
        assert_eq!(after_close.hour(), 16);
    }

    #[test]
    fn test_next_update_weekly() {
        let from_wednesday = next_update(InsightKind::Weekly, at(2024, 3, 13, 9));
        assert_eq!(from_wednesday.date(), NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
        // Monday rolls a full week ahead
        let from_monday = next_update(InsightKind::Weekly, at(2024, 3, 18, 9));
        assert_eq!(from_monday.date(), NaiveDate::from_ymd_opt(2024, 3, 25).unwrap());
        assert_eq!(from_monday.hour(), 16);
    }

    #[test]
    fn test_etf_info_lookup() {
        let voo = etf_info("voo").unwrap();
        assert_eq!(voo.provider, Some("Vanguard"));
        assert_eq!(voo.performance.unwrap().change_percent, 1.2);

        let qqq = etf_info("QQQ").unwrap();
        assert!(qqq.provider.is_none());
        assert!(qqq.performance.is_some());

        let schz = etf_info("SCHZ").unwrap();
        assert!(schz.performance.is_none());

        assert!(etf_info("NOPE").is_none());
    }

    #[test]
    fn test_market_insights_personalized() {
        let request = InsightsRequest {
            user_profile: CoachProfile {
                name: Some("Alex".to_string()),
                ..Default::default()
            },
            portfolio_allocation: allocation(&[("VOO", 70.0), ("BND", 30.0)]),
            insight_type: InsightKind::Weekly,
        };
        let insights = market_insights(&request, at(2024, 3, 13, 9));
        assert_eq!(insights.next_update, "2024-03-18 16:00:00");
        assert_eq!(insights.portfolio_change_percent, 0.78);
        let p = &insights.personalized_insights;
        assert_eq!(p.greeting, "Hi Alex! Your portfolio is up +0.78% today.");
        assert!(p.portfolio_impact_explanation.starts_with("VOO (Vanguard S&P 500)"));
        assert!(p.whats_happening[2].impact_on_you.contains("BND"));
        assert!(!p.should_i_worry);
    }

    #[test]
    fn test_insight_kind_wire_values() {
        let kind: InsightKind = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(kind, InsightKind::Weekly);
        let request: InsightsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.insight_type, InsightKind::Daily);
    }
}
