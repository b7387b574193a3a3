//! ETF catalogue and provider-diversified selection.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::profile::RiskTolerance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EtfCategory {
    LargeCap,
    TotalMarket,
    International,
    Bonds,
    Growth,
    SmallCap,
    Emerging,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Etf {
    pub symbol: &'static str,
    pub name: &'static str,
    pub provider: &'static str,
    /// Expense ratio in percent.
    pub expense: f64,
}

const fn etf(symbol: &'static str, name: &'static str, provider: &'static str, expense: f64) -> Etf {
    Etf {
        symbol,
        name,
        provider,
        expense,
    }
}

const LARGE_CAP: [Etf; 3] = [
    etf("VOO", "Vanguard S&P 500 ETF", "Vanguard", 0.03),
    etf("IVV", "iShares Core S&P 500 ETF", "BlackRock", 0.03),
    etf("SPLG", "SPDR Portfolio S&P 500 ETF", "State Street", 0.02),
];

const TOTAL_MARKET: [Etf; 3] = [
    etf("VTI", "Vanguard Total Stock Market ETF", "Vanguard", 0.03),
    etf("ITOT", "iShares Core S&P Total US Stock Market ETF", "BlackRock", 0.03),
    etf(
        "SPTM",
        "SPDR Portfolio S&P 1500 Composite Stock Market ETF",
        "State Street",
        0.03,
    ),
];

const INTERNATIONAL: [Etf; 3] = [
    etf("VEA", "Vanguard FTSE Developed Markets ETF", "Vanguard", 0.05),
    etf("IEFA", "iShares Core MSCI EAFE ETF", "BlackRock", 0.07),
    etf("SCHF", "Schwab International Equity ETF", "Schwab", 0.06),
];

const BONDS: [Etf; 3] = [
    etf("BND", "Vanguard Total Bond Market ETF", "Vanguard", 0.03),
    etf("AGG", "iShares Core US Aggregate Bond ETF", "BlackRock", 0.03),
    etf("SCHZ", "Schwab US Aggregate Bond ETF", "Schwab", 0.04),
];

const GROWTH: [Etf; 3] = [
    etf("VUG", "Vanguard Growth ETF", "Vanguard", 0.04),
    etf("IWF", "iShares Russell 1000 Growth ETF", "BlackRock", 0.19),
    etf("SCHG", "Schwab U.S. Large-Cap Growth ETF", "Schwab", 0.04),
];

const SMALL_CAP: [Etf; 3] = [
    etf("VB", "Vanguard Small-Cap ETF", "Vanguard", 0.05),
    etf("IJR", "iShares Core S&P Small-Cap ETF", "BlackRock", 0.06),
    etf("SCHA", "Schwab U.S. Small-Cap ETF", "Schwab", 0.04),
];

const EMERGING: [Etf; 3] = [
    etf("VWO", "Vanguard FTSE Emerging Markets ETF", "Vanguard", 0.08),
    etf("IEMG", "iShares Core MSCI Emerging Markets ETF", "BlackRock", 0.09),
    etf("SCHE", "Schwab Emerging Markets Equity ETF", "Schwab", 0.11),
];

impl EtfCategory {
    pub const ALL: [EtfCategory; 7] = [
        EtfCategory::LargeCap,
        EtfCategory::TotalMarket,
        EtfCategory::International,
        EtfCategory::Bonds,
        EtfCategory::Growth,
        EtfCategory::SmallCap,
        EtfCategory::Emerging,
    ];

    pub fn options(&self) -> &'static [Etf] {
        match self {
            EtfCategory::LargeCap => &LARGE_CAP,
            EtfCategory::TotalMarket => &TOTAL_MARKET,
            EtfCategory::International => &INTERNATIONAL,
            EtfCategory::Bonds => &BONDS,
            EtfCategory::Growth => &GROWTH,
            EtfCategory::SmallCap => &SMALL_CAP,
            EtfCategory::Emerging => &EMERGING,
        }
    }
}

/// Case-insensitive lookup across every category.
pub fn find(symbol: &str) -> Option<(EtfCategory, &'static Etf)> {
    EtfCategory::ALL.iter().find_map(|category| {
        category
            .options()
            .iter()
            .find(|e| e.symbol.eq_ignore_ascii_case(symbol))
            .map(|e| (*category, e))
    })
}

/// One pick per visited category, in visiting order.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    picks: Vec<(EtfCategory, &'static Etf)>,
}

impl Selection {
    pub fn get(&self, category: EtfCategory) -> Option<&'static Etf> {
        self.picks
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, e)| *e)
    }
}

/// Visits large cap, total market, international and bonds; then growth and
/// small cap for the high tier; then emerging when stocks exceed 60%. Each visit
/// takes the first fund from a provider not picked yet, or the category's first
/// fund when every provider is taken.
pub fn select_diversified(risk: RiskTolerance, stock_percent: u32) -> Selection {
    let mut order = vec![
        EtfCategory::LargeCap,
        EtfCategory::TotalMarket,
        EtfCategory::International,
        EtfCategory::Bonds,
    ];
    if risk == RiskTolerance::High {
        order.extend([EtfCategory::Growth, EtfCategory::SmallCap]);
    }
    if stock_percent > 60 {
        order.push(EtfCategory::Emerging);
    }

    let mut used: HashSet<&'static str> = HashSet::new();
    let mut selection = Selection::default();
    for category in order {
        let options = category.options();
        let pick = options
            .iter()
            .find(|e| !used.contains(e.provider))
            .unwrap_or(&options[0]);
        used.insert(pick.provider);
        selection.picks.push((category, pick));
    }
    selection
}
