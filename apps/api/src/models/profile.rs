use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EmploymentDuration {
    #[serde(rename = "less_than_3_months")]
    LessThan3Months,
    #[serde(rename = "3_to_12_months")]
    ThreeTo12Months,
    #[serde(rename = "1_to_3_years")]
    OneTo3Years,
    #[serde(rename = "more_than_3_years")]
    MoreThan3Years,
}

impl EmploymentDuration {
    pub const ALL: [EmploymentDuration; 4] = [
        EmploymentDuration::LessThan3Months,
        EmploymentDuration::ThreeTo12Months,
        EmploymentDuration::OneTo3Years,
        EmploymentDuration::MoreThan3Years,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmploymentDuration::LessThan3Months => "Less than 3 months",
            EmploymentDuration::ThreeTo12Months => "3-12 months",
            EmploymentDuration::OneTo3Years => "1-3 years",
            EmploymentDuration::MoreThan3Years => "More than 3 years",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentDuration::LessThan3Months => "less_than_3_months",
            EmploymentDuration::ThreeTo12Months => "3_to_12_months",
            EmploymentDuration::OneTo3Years => "1_to_3_years",
            EmploymentDuration::MoreThan3Years => "more_than_3_years",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
}

impl MaritalStatus {
    pub const ALL: [MaritalStatus; 2] = [MaritalStatus::Single, MaritalStatus::Married];

    pub fn label(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "single",
            MaritalStatus::Married => "married",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Concern {
    UnderstandingBenefits,
    ManagingPaycheck,
    PayingOffDebt,
    EmergencyFund,
    SavingBigPurchase,
    InvestingFuture,
    BudgetingTracking,
    TaxesWithholdings,
}

impl Concern {
    pub const ALL: [Concern; 8] = [
        Concern::UnderstandingBenefits,
        Concern::ManagingPaycheck,
        Concern::PayingOffDebt,
        Concern::EmergencyFund,
        Concern::SavingBigPurchase,
        Concern::InvestingFuture,
        Concern::BudgetingTracking,
        Concern::TaxesWithholdings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Concern::UnderstandingBenefits => "understanding_benefits",
            Concern::ManagingPaycheck => "managing_paycheck",
            Concern::PayingOffDebt => "paying_off_debt",
            Concern::EmergencyFund => "emergency_fund",
            Concern::SavingBigPurchase => "saving_big_purchase",
            Concern::InvestingFuture => "investing_future",
            Concern::BudgetingTracking => "budgeting_tracking",
            Concern::TaxesWithholdings => "taxes_withholdings",
        }
    }

    /// Label shown to the user when picking concerns.
    pub fn label(&self) -> &'static str {
        match self {
            Concern::UnderstandingBenefits => {
                "Understanding my company's benefits (insurance, 401k)"
            }
            Concern::ManagingPaycheck => "How to manage my first 'real' paycheck",
            Concern::PayingOffDebt => "Paying off student loans/debt",
            Concern::EmergencyFund => "Starting an emergency fund",
            Concern::SavingBigPurchase => "Saving for a big purchase (car, down payment)",
            Concern::InvestingFuture => "Starting to invest for the future",
            Concern::BudgetingTracking => "Budgeting and tracking my spending",
            Concern::TaxesWithholdings => "Understanding taxes and withholdings",
        }
    }
}

/// Risk tier driving the stock/bond split. Unknown inputs resolve to `Medium`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskTolerance {
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => RiskTolerance::Low,
            "high" => RiskTolerance::High,
            _ => RiskTolerance::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "low",
            RiskTolerance::Medium => "medium",
            RiskTolerance::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DebtType {
    #[default]
    None,
    StudentLoans,
    CreditCards,
    Both,
    Other,
}

impl DebtType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtType::None => "none",
            DebtType::StudentLoans => "student_loans",
            DebtType::CreditCards => "credit_cards",
            DebtType::Both => "both",
            DebtType::Other => "other",
        }
    }
}

/// Fields written by the quiz step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuizAnswers {
    pub user_name: String,
    pub age: Option<u32>,
    pub employment_duration: Option<EmploymentDuration>,
    pub state: String,
    pub annual_salary: Option<f64>,
    pub marital_status: Option<MaritalStatus>,
    pub top_financial_concerns: Vec<Concern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<RiskTolerance>,
}

impl QuizAnswers {
    pub fn has_concern(&self, concern: Concern) -> bool {
        self.top_financial_concerns.contains(&concern)
    }

    /// Concerns joined the way prompts display them: "paying off debt, emergency fund".
    pub fn concerns_display(&self) -> String {
        self.top_financial_concerns
            .iter()
            .map(|c| c.as_str().replace('_', " "))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Fields written by the form step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormDetails {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub current_savings: f64,
    pub debt_amount: f64,
    pub debt_type: DebtType,
    pub debt_monthly_payment: f64,
    pub debt_interest_rate: f64,
    pub has_employer_health_insurance: bool,
    pub enrolled_in_health_insurance: bool,
    pub health_insurance_premium: f64,
    pub has_hsa_fsa: bool,
    pub has_employer_retirement: bool,
    pub employer_match_percentage: f64,
    pub contributing_to_retirement: bool,
    pub retirement_contribution_amount: f64,
    pub financial_goal_description: String,
    pub goal_target_amount: f64,
    pub goal_timeline_years: u32,
    pub additional_context: String,
}

impl FormDetails {
    pub fn monthly_surplus(&self) -> f64 {
        self.monthly_income - self.monthly_expenses
    }

    /// Surplus as a percentage of take-home pay; 0 when there is no income.
    pub fn savings_rate(&self) -> f64 {
        if self.monthly_income > 0.0 {
            self.monthly_surplus() / self.monthly_income * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employment_duration_wire_values() {
        let d: EmploymentDuration = serde_json::from_str("\"3_to_12_months\"").unwrap();
        assert_eq!(d, EmploymentDuration::ThreeTo12Months);
        assert_eq!(
            serde_json::to_string(&EmploymentDuration::MoreThan3Years).unwrap(),
            "\"more_than_3_years\""
        );
    }

    #[test]
    fn test_risk_tolerance_lenient_parse() {
        assert_eq!(RiskTolerance::parse_lenient("HIGH"), RiskTolerance::High);
        assert_eq!(RiskTolerance::parse_lenient("low "), RiskTolerance::Low);
        assert_eq!(RiskTolerance::parse_lenient("yolo"), RiskTolerance::Medium);
    }

    #[test]
    fn test_concerns_display_replaces_underscores() {
        let quiz = QuizAnswers {
            top_financial_concerns: vec![Concern::PayingOffDebt, Concern::EmergencyFund],
            ..Default::default()
        };
        assert_eq!(quiz.concerns_display(), "paying off debt, emergency fund");
    }

    #[test]
    fn test_savings_rate_zero_income() {
        let form = FormDetails {
            monthly_expenses: 1200.0,
            ..Default::default()
        };
        assert_eq!(form.savings_rate(), 0.0);
    }

    #[test]
    fn test_savings_rate() {
        let form = FormDetails {
            monthly_income: 4000.0,
            monthly_expenses: 3000.0,
            ..Default::default()
        };
        assert!((form.savings_rate() - 25.0).abs() < 1e-9);
        assert_eq!(form.monthly_surplus(), 1000.0);
    }
}
