// Chat context prompt. Every turn sends the whole profile and plan so the
// advisor can answer without conversation memory.

use crate::format::grouped;
use crate::models::plan::StoredPlan;
use crate::models::profile::{DebtType, FormDetails, QuizAnswers};
use crate::models::quiz_response::QuizResponse;

const INTRO: &str = "You are an expert financial advisor chatbot helping a newly employed \
individual navigate their first \"adult\" financial responsibilities. You have their complete \
financial profile and personalized plan.";

const PLATFORM_FEATURES: &str = "PLATFORM FEATURES AVAILABLE:

NEW AI Investment Coach Feature:
- IMPORTANT: We now have an AI-Powered Investment Coach available on this platform!
- Users can access it from the Results page or directly at /InvestmentCoach
- The Investment Coach provides:
  * Personalized stock and ETF recommendations based on user's age, risk tolerance, goals
  * Smart portfolio allocation (stocks vs bonds breakdown)
  * Specific ETF recommendations (VOO, VTI, VEA, BND, etc.) with clear explanations
  * Monthly investment breakdown showing exact dollar amounts for each ETF
  * Rebalancing guidance and strategies
  * Dollar-cost averaging recommendations
  * Tax-efficient investing strategies
- The coach analyzes their profile and generates tailored recommendations in seconds
- All recommendations include clear reasoning so users understand WHY each investment fits their situation

NEW Brokerage Account Opening Feature:
- IMPORTANT: Users can now open a brokerage account directly through our platform (dummy/demo version)!
- The feature includes:
  * 4-step guided account opening process
  * Choice of brokers: Principal Securities (BEST CHOICE/Recommended), Vanguard, Fidelity, Schwab, E*TRADE
  * Principal Securities is our TOP recommendation with comprehensive retirement planning and top-rated service
  * Account type selection: Individual, Traditional IRA, Roth IRA, or Joint accounts
  * Complete explanation of tax advantages for each account type
  * Secure form with personal info, address, employment details
  * Multiple funding options: Bank Transfer, Wire Transfer, Check
  * Generates account number upon completion
  * Clear next steps after account creation
- The process is user-friendly and educational, explaining each choice
- Users access it via the \"Open Brokerage Account\" button in Investment Coach → Action Plan tab

When users ask about:
- \"How do I start investing?\" → Mention the AI Investment Coach feature
- \"What should I invest in?\" → Direct them to the Investment Coach
- \"How do I open an account?\" → Tell them about our Brokerage Account Opening feature
- \"Which broker should I use?\" → Recommend Principal Securities as the best choice, also mention Vanguard/Fidelity
- \"What's an IRA?\" or account types → Explain and mention they can open one through our platform
- Anything about ETFs, stocks, portfolio allocation → Reference the Investment Coach";

const INSTRUCTIONS: &str = "INSTRUCTIONS:
- Provide helpful, personalized, conversational responses
- Reference their specific numbers and situation
- Be encouraging and educational
- Keep responses concise but informative (2-4 paragraphs max)
- If they ask \"what if\" questions, do calculations based on their data
- Explain financial concepts in simple, jargon-free terms
- Suggest specific, actionable next steps
- If they're confused about recommendations, explain the reasoning clearly
- Help them understand tradeoffs (e.g., paying debt vs investing)
- Be empathetic to the overwhelming nature of new employment finances
- Use their name occasionally for personalization
- IMPORTANT: Answer questions about platform features (Investment Coach, Brokerage Account Opening)
- If asked about account opening, explain the 4-step process in detail
- If asked about brokers, recommend Principal Securities as the best choice
- If asked about the Investment Coach, explain how it works and encourage them to try it
- You CAN and SHOULD answer questions about how to use this platform's features
- Don't restrict yourself to only traditional financial advice - help users navigate the platform too!";

const NOT_CALCULATED: &str = "Not calculated yet";

pub fn greeting(name: &str) -> String {
    format!(
        "Hi {name}! 👋 I'm your AI financial advisor. I've reviewed your complete financial \
profile and personalized plan.\n\nAsk me anything about your portfolio, investment strategies, \
employer benefits, or any financial questions you have. How can I help you today?"
    )
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

fn basic_info(quiz: &QuizAnswers) -> String {
    format!(
        "Basic Info:
- Name: {name}
- Age: {age}
- Employment Duration: {employment}
- State: {state}
- Annual Salary: ${salary}
- Marital Status: {marital}
- Top Concerns: {concerns}",
        name = quiz.user_name,
        age = quiz.age.map(|a| a.to_string()).unwrap_or_default(),
        employment = quiz
            .employment_duration
            .map(|d| d.as_str().replace('_', " "))
            .unwrap_or_default(),
        state = quiz.state,
        salary = grouped(quiz.annual_salary.unwrap_or(0.0)),
        marital = quiz.marital_status.map(|m| m.as_str()).unwrap_or_default(),
        concerns = quiz.concerns_display(),
    )
}

fn finances(form: &FormDetails, plan: &StoredPlan) -> String {
    let rate = if form.monthly_income > 0.0 {
        format!("{:.1}", form.savings_rate())
    } else {
        "0".to_string()
    };
    let coverage = plan
        .emergency_fund_plan
        .as_ref()
        .map_or(0.0, |e| e.current_coverage_months);
    format!(
        "Current Finances:
- Monthly Take-Home: ${income}
- Monthly Expenses: ${expenses}
- Monthly Surplus: ${surplus}
- Savings Rate: {rate}%
- Current Savings: ${savings}
- Emergency Fund Coverage: {coverage:.1} months",
        income = grouped(form.monthly_income),
        expenses = grouped(form.monthly_expenses),
        surplus = grouped(form.monthly_surplus()),
        savings = grouped(form.current_savings),
    )
}

fn debt(form: &FormDetails, plan: &StoredPlan) -> String {
    let kind = match form.debt_type {
        DebtType::None => "None",
        other => other.as_str(),
    };
    let mut out = format!(
        "Debt Situation:
- Debt Type: {kind}
- Total Debt: ${amount}
- Monthly Payment: ${payment}
- Interest Rate: {rate}%",
        amount = grouped(form.debt_amount),
        payment = grouped(form.debt_monthly_payment),
        rate = grouped(form.debt_interest_rate),
    );
    if let Some(d) = &plan.debt_payoff_strategy {
        out.push_str(&format!(
            "\n- Payoff Strategy: {}\n- Recommended Payment: ${}\n- Timeline: {} months",
            d.strategy,
            grouped(d.monthly_payment_suggestion),
            grouped(d.payoff_timeline_months)
        ));
    }
    out
}

fn benefits(form: &FormDetails) -> String {
    format!(
        "Employer Benefits:
- Has Health Insurance: {health}
- Enrolled: {enrolled}
- Monthly Premium: ${premium}
- Has HSA/FSA: {hsa}
- Has 401k: {k401}
- Employer Match: {matching}%
- Currently Contributing: {contributing}
- Current Contribution: ${contribution}/month",
        health = yes_no(form.has_employer_health_insurance),
        enrolled = yes_no(form.enrolled_in_health_insurance),
        premium = grouped(form.health_insurance_premium),
        hsa = yes_no(form.has_hsa_fsa),
        k401 = yes_no(form.has_employer_retirement),
        matching = grouped(form.employer_match_percentage),
        contributing = yes_no(form.contributing_to_retirement),
        contribution = grouped(form.retirement_contribution_amount),
    )
}

fn retirement(plan: &StoredPlan) -> String {
    let body = match &plan.retirement_strategy {
        Some(r) => format!(
            "- Recommended Monthly: ${}\n- Employer Match Value: ${}\n- Projected at 65: ${}\n- Account Types: {}",
            grouped(r.recommended_monthly),
            grouped(r.employer_match_value),
            grouped(r.projected_at_65),
            r.account_recommendations.join(", ")
        ),
        None => NOT_CALCULATED.to_string(),
    };
    format!("Retirement Plan:\n{body}")
}

fn emergency(plan: &StoredPlan) -> String {
    let body = match &plan.emergency_fund_plan {
        Some(e) => format!(
            "- Target: ${}\n- Current Coverage: {:.1} months\n- Monthly Contribution: ${}\n- Timeline: {} months",
            grouped(e.target_amount),
            e.current_coverage_months,
            grouped(e.monthly_contribution),
            grouped(e.timeline_months)
        ),
        None => NOT_CALCULATED.to_string(),
    };
    format!("Emergency Fund Plan:\n{body}")
}

fn goal(form: &FormDetails) -> String {
    let description = if form.financial_goal_description.is_empty() {
        "Not specified"
    } else {
        form.financial_goal_description.as_str()
    };
    format!(
        "Financial Goal:\n- Goal: {description}\n- Target Amount: ${}\n- Timeline: {} years",
        grouped(form.goal_target_amount),
        form.goal_timeline_years
    )
}

fn portfolio(plan: &StoredPlan) -> String {
    let mix = match &plan.portfolio_recommendation {
        Some(p) => format!(
            "- Stocks: {}%\n- Bonds: {}%\n- Cash: {}%\n- Alternatives: {}%",
            p.stocks, p.bonds, p.cash, p.alternatives
        ),
        None => NOT_CALCULATED.to_string(),
    };
    format!(
        "Portfolio Allocation:\n{mix}\n- Monthly Investment Target: ${}",
        grouped(plan.monthly_investment_target.unwrap_or(0.0))
    )
}

/// The full chat prompt for one question about a stored record.
pub fn build_chat_prompt(record: &QuizResponse, question: &str) -> String {
    let quiz = record.quiz();
    let form = record.form();
    let plan = record.plan();
    let score = plan
        .financial_health_score
        .filter(|s| *s != 0.0)
        .map(grouped)
        .unwrap_or_else(|| "Not calculated".to_string());

    [
        INTRO.to_string(),
        PLATFORM_FEATURES.to_string(),
        format!("COMPLETE USER PROFILE:\n\n{}", basic_info(&quiz)),
        finances(&form, &plan),
        debt(&form, &plan),
        benefits(&form),
        retirement(&plan),
        emergency(&plan),
        goal(&form),
        portfolio(&plan),
        format!("Key Recommendations:\n{}", numbered(&plan.key_recommendations)),
        format!(
            "Action Checklist (First 30-90 Days):\n{}",
            numbered(&plan.action_checklist)
        ),
        format!("Financial Health Score: {score}/100"),
        format!("USER'S QUESTION: {question}"),
        INSTRUCTIONS.to_string(),
    ]
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::extract::{extract_facts, extract_question};
    use crate::advisor::plan::canned_plan;
    use crate::models::quiz_response::to_fields;
    use serde_json::json;

    fn record() -> QuizResponse {
        let mut fields = json!({
            "user_name": "Jordan",
            "age": 24,
            "top_financial_concerns": ["paying_off_debt"],
            "monthly_income": 4200.0,
            "monthly_expenses": 3000.0,
            "current_savings": 4500.0,
            "debt_amount": 25000.0,
            "debt_type": "student_loans"
        })
        .as_object()
        .cloned()
        .unwrap();
        fields.extend(to_fields(&StoredPlan::from(canned_plan())).unwrap());
        QuizResponse::new("c1".to_string(), fields)
    }

    #[test]
    fn test_greeting() {
        let text = greeting("Jordan");
        assert!(text.starts_with("Hi Jordan! 👋 I'm your AI financial advisor."));
        assert!(text.ends_with("How can I help you today?"));
    }

    #[test]
    fn test_prompt_is_readable_by_template_advisor() {
        let prompt = build_chat_prompt(&record(), "Should I pay off debt first?");
        let facts = extract_facts(&prompt);
        assert_eq!(facts.name, "Jordan");
        assert_eq!(facts.age, 24);
        assert_eq!(facts.monthly_income, 4200.0);
        assert_eq!(facts.monthly_surplus, 1200.0);
        assert_eq!(facts.debt_amount, 25000.0);
        assert!((facts.savings_rate - 28.6).abs() < 1e-9);
        assert_eq!(extract_question(&prompt), "Should I pay off debt first?");
    }

    #[test]
    fn test_plan_sections_render() {
        let prompt = build_chat_prompt(&record(), "hi");
        assert!(prompt.contains("- Payoff Strategy: Avalanche method"));
        assert!(prompt.contains("- Projected at 65: $650,000"));
        assert!(prompt.contains("- Current Coverage: 2.0 months"));
        assert!(prompt.contains("- Stocks: 80%"));
        assert!(prompt.contains("Financial Health Score: 72/100"));
        assert!(prompt.contains("1. Priority 1: Get the employer 401k match"));
    }

    #[test]
    fn test_missing_plan_says_not_calculated() {
        let record = QuizResponse::new(
            "c2".to_string(),
            json!({"user_name": "Sam"}).as_object().cloned().unwrap(),
        );
        let prompt = build_chat_prompt(&record, "hello");
        assert!(prompt.contains("Retirement Plan:\nNot calculated yet"));
        assert!(prompt.contains("Emergency Fund Plan:\nNot calculated yet"));
        assert!(prompt.contains("- Debt Type: None"));
        assert!(prompt.contains("- Savings Rate: 0%"));
        assert!(prompt.contains("Financial Health Score: Not calculated/100"));
    }
}
