//! Static options offered by the account-opening flow.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Broker {
    pub name: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub recommended: bool,
}

pub const BROKERS: &[Broker] = &[
    Broker {
        name: "Principal Securities",
        icon: "🏛️",
        features: &[
            "$0 commissions",
            "Comprehensive retirement planning",
            "Top-rated customer service",
            "Integrated financial tools",
        ],
        recommended: true,
    },
    Broker {
        name: "Vanguard",
        icon: "🏦",
        features: &["$0 commissions", "Low expense ratios", "Excellent ETF selection"],
        recommended: true,
    },
    Broker {
        name: "Fidelity",
        icon: "💼",
        features: &["$0 commissions", "Great research tools", "No account minimums"],
        recommended: true,
    },
    Broker {
        name: "Schwab",
        icon: "📈",
        features: &["$0 commissions", "Excellent customer service", "Banking integration"],
        recommended: false,
    },
    Broker {
        name: "E*TRADE",
        icon: "📊",
        features: &["$0 commissions", "Advanced trading tools", "Good mobile app"],
        recommended: false,
    },
];

pub fn find_broker(name: &str) -> Option<&'static Broker> {
    BROKERS.iter().find(|b| b.name == name)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Individual,
    TraditionalIra,
    RothIra,
    Joint,
}

impl AccountType {
    pub const ALL: [AccountType; 4] = [
        AccountType::Individual,
        AccountType::TraditionalIra,
        AccountType::RothIra,
        AccountType::Joint,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Individual => "Individual Brokerage",
            AccountType::TraditionalIra => "Traditional IRA",
            AccountType::RothIra => "Roth IRA",
            AccountType::Joint => "Joint Account",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AccountType::Individual => "Standard investment account with no contribution limits",
            AccountType::TraditionalIra => "Tax-deductible contributions, taxed at withdrawal",
            AccountType::RothIra => "After-tax contributions, tax-free withdrawals in retirement",
            AccountType::Joint => "Shared account with another person",
        }
    }

    pub fn tax_advantage(&self) -> &'static str {
        match self {
            AccountType::Individual | AccountType::Joint => "No",
            AccountType::TraditionalIra => "Yes - Upfront",
            AccountType::RothIra => "Yes - Later",
        }
    }

    pub fn best_for(&self) -> &'static str {
        match self {
            AccountType::Individual => "General investing",
            AccountType::TraditionalIra => "Retirement, tax deduction now",
            AccountType::RothIra => "Retirement, tax-free growth",
            AccountType::Joint => "Couples, families",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FundingMethod {
    Bank,
    Wire,
    Check,
}

impl FundingMethod {
    pub const ALL: [FundingMethod; 3] = [FundingMethod::Bank, FundingMethod::Wire, FundingMethod::Check];

    pub fn label(&self) -> &'static str {
        match self {
            FundingMethod::Bank => "Bank Transfer",
            FundingMethod::Wire => "Wire Transfer",
            FundingMethod::Check => "Check",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FundingMethod::Bank => "🏦",
            FundingMethod::Wire => "⚡",
            FundingMethod::Check => "📝",
        }
    }

    /// How long the deposit takes to clear.
    pub fn time(&self) -> &'static str {
        match self {
            FundingMethod::Bank => "3-5 days",
            FundingMethod::Wire => "Same day",
            FundingMethod::Check => "7-10 days",
        }
    }
}

pub const EMPLOYMENT_STATUSES: &[(&str, &str)] = &[
    ("employed", "Employed"),
    ("self-employed", "Self-Employed"),
    ("student", "Student"),
    ("retired", "Retired"),
    ("unemployed", "Unemployed"),
];

#[derive(Debug, Serialize)]
pub struct AccountTypeOption {
    pub value: AccountType,
    pub label: &'static str,
    pub description: &'static str,
    pub tax_advantage: &'static str,
    pub best: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FundingOption {
    pub value: FundingMethod,
    pub label: &'static str,
    pub icon: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BrokerageOptions {
    pub total_steps: u8,
    pub brokers: &'static [Broker],
    pub account_types: Vec<AccountTypeOption>,
    pub funding_methods: Vec<FundingOption>,
    pub employment_statuses: Vec<SelectOption>,
}

pub fn options() -> BrokerageOptions {
    BrokerageOptions {
        total_steps: crate::brokerage::application::TOTAL_STEPS,
        brokers: BROKERS,
        account_types: AccountType::ALL
            .iter()
            .map(|t| AccountTypeOption {
                value: *t,
                label: t.label(),
                description: t.description(),
                tax_advantage: t.tax_advantage(),
                best: t.best_for(),
            })
            .collect(),
        funding_methods: FundingMethod::ALL
            .iter()
            .map(|m| FundingOption {
                value: *m,
                label: m.label(),
                icon: m.icon(),
                time: m.time(),
            })
            .collect(),
        employment_statuses: EMPLOYMENT_STATUSES
            .iter()
            .map(|&(value, label)| SelectOption { value, label })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_brokers_come_first() {
        let recommended: Vec<&str> = BROKERS
            .iter()
            .filter(|b| b.recommended)
            .map(|b| b.name)
            .collect();
        assert_eq!(recommended, vec!["Principal Securities", "Vanguard", "Fidelity"]);
        assert!(find_broker("E*TRADE").is_some());
        assert!(find_broker("Robinhood").is_none());
    }

    #[test]
    fn test_options_serialize_snake_case_values() {
        let value = serde_json::to_value(options()).unwrap();
        assert_eq!(value["account_types"][1]["value"], "traditional_ira");
        assert_eq!(value["account_types"][2]["tax_advantage"], "Yes - Later");
        assert_eq!(value["funding_methods"][1]["time"], "Same day");
        assert_eq!(value["brokers"].as_array().unwrap().len(), 5);
    }
}
