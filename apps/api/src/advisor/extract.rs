//! Pulls the user's figures back out of a rendered advisor prompt.
//!
//! The chat context prompt embeds lines such as `Monthly Take-Home: $4,200`; the
//! template advisor reads them back so its answers can quote the user's numbers.

use once_cell::sync::Lazy;
use regex::Regex;

static MONTHLY_INCOME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Monthly Take-Home: \$?(-?[\d,]+)").unwrap());
static MONTHLY_EXPENSES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Monthly Expenses: \$?(-?[\d,]+)").unwrap());
static MONTHLY_SURPLUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Monthly Surplus: \$?(-?[\d,]+)").unwrap());
static SAVINGS_RATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Savings Rate: (-?[\d.]+)%").unwrap());
static CURRENT_SAVINGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Current Savings: \$?(-?[\d,]+)").unwrap());
static TOTAL_DEBT: Lazy<Regex> = Lazy::new(|| Regex::new(r"Total Debt: \$?(-?[\d,]+)").unwrap());
static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"Name: ([^\n]+)").unwrap());
static AGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Age: (\d+)").unwrap());
static QUESTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"USER'S QUESTION: (.+)").unwrap());

pub const DEFAULT_AGE: u32 = 25;

/// Figures recovered from a prompt. Absent fields take their defaults:
/// empty name, age 25, zero for every amount.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptFacts {
    pub name: String,
    pub age: u32,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_surplus: f64,
    pub savings_rate: f64,
    pub current_savings: f64,
    pub debt_amount: f64,
}

impl Default for PromptFacts {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: DEFAULT_AGE,
            monthly_income: 0.0,
            monthly_expenses: 0.0,
            monthly_surplus: 0.0,
            savings_rate: 0.0,
            current_savings: 0.0,
            debt_amount: 0.0,
        }
    }
}

pub fn extract_facts(prompt: &str) -> PromptFacts {
    let defaults = PromptFacts::default();
    PromptFacts {
        name: capture(&NAME, prompt)
            .map(|s| s.trim().to_string())
            .unwrap_or(defaults.name),
        age: capture(&AGE, prompt)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.age),
        monthly_income: amount(&MONTHLY_INCOME, prompt),
        monthly_expenses: amount(&MONTHLY_EXPENSES, prompt),
        monthly_surplus: amount(&MONTHLY_SURPLUS, prompt),
        savings_rate: capture(&SAVINGS_RATE, prompt)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.0),
        current_savings: amount(&CURRENT_SAVINGS, prompt),
        debt_amount: amount(&TOTAL_DEBT, prompt),
    }
}

/// The text after `USER'S QUESTION:` up to the end of that line, or empty.
pub fn extract_question(prompt: &str) -> String {
    capture(&QUESTION, prompt)
        .map(str::to_string)
        .unwrap_or_default()
}

fn capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Dollar figure with thousands separators stripped; 0 when absent or unparseable.
fn amount(re: &Regex, text: &str) -> f64 {
    capture(re, text)
        .and_then(|s| s.replace(',', "").parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROMPT: &str = "COMPLETE USER PROFILE:\n\
        - Name: Jordan Lee\n\
        - Age: 24\n\
        - Monthly Take-Home: $4,200\n\
        - Monthly Expenses: $3,100\n\
        - Monthly Surplus: $1,100\n\
        - Savings Rate: 26.2%\n\
        - Current Savings: $2,500\n\
        - Total Debt: $28,000\n\
        USER'S QUESTION: How big should my emergency fund be?\n\
        INSTRUCTIONS:\n";

    #[test]
    fn test_extracts_all_fields() {
        let facts = extract_facts(PROMPT);
        assert_eq!(facts.name, "Jordan Lee");
        assert_eq!(facts.age, 24);
        assert_eq!(facts.monthly_income, 4200.0);
        assert_eq!(facts.monthly_expenses, 3100.0);
        assert_eq!(facts.monthly_surplus, 1100.0);
        assert!((facts.savings_rate - 26.2).abs() < 1e-9);
        assert_eq!(facts.current_savings, 2500.0);
        assert_eq!(facts.debt_amount, 28000.0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let facts = extract_facts("nothing useful here");
        assert_eq!(facts, PromptFacts::default());
        assert_eq!(facts.age, 25);
    }

    #[test]
    fn test_amount_without_dollar_sign() {
        let facts = extract_facts("Monthly Take-Home: 3500");
        assert_eq!(facts.monthly_income, 3500.0);
    }

    #[test]
    fn test_negative_surplus() {
        let facts = extract_facts("Monthly Surplus: $-450");
        assert_eq!(facts.monthly_surplus, -450.0);
    }

    #[test]
    fn test_question_is_single_line() {
        assert_eq!(
            extract_question(PROMPT),
            "How big should my emergency fund be?"
        );
        assert_eq!(extract_question("no question"), "");
    }
}
