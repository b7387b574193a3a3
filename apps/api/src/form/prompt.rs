// Advisor prompt for the financial plan. The profile lines use the same
// "Label: $value" layout the template advisor's extractors read back.

use crate::form::metrics::FormMetrics;
use crate::form::sections::FormSections;
use crate::format::grouped;
use crate::models::profile::{FormDetails, QuizAnswers};

const INTRO: &str = "You are an expert financial advisor specializing in helping newly employed \
college graduates navigate their first \"adult\" financial responsibilities. Create a \
comprehensive, actionable financial plan.";

const CLOSING: &str = "Use encouraging, educational language. Acknowledge that adult finances \
can be overwhelming. Make complex topics simple and actionable.";

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn or_blank<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn profile_block(quiz: &QuizAnswers) -> String {
    format!(
        "USER PROFILE FROM QUIZ:
- Name: {name}
- Age: {age}
- Employment Duration: {employment}
- State: {state}
- Annual Salary: ${salary}
- Marital Status: {marital}
- Top Financial Concerns: {concerns}",
        name = quiz.user_name,
        age = or_blank(quiz.age),
        employment = or_blank(quiz.employment_duration.map(|d| d.as_str().replace('_', " "))),
        state = quiz.state,
        salary = grouped(quiz.annual_salary.unwrap_or(0.0)),
        marital = or_blank(quiz.marital_status.map(|m| m.as_str())),
        concerns = quiz.concerns_display(),
    )
}

fn finances_block(form: &FormDetails, metrics: &FormMetrics) -> String {
    format!(
        "DETAILED FINANCIAL INFORMATION:
Income & Expenses:
- Monthly Take-Home: ${income}
- Monthly Expenses: ${expenses}
- Monthly Surplus: ${surplus}
- Savings Rate: {rate:.1}%
- Current Savings: ${savings}
- Emergency Fund Coverage: {coverage:.1} months",
        income = grouped(form.monthly_income),
        expenses = grouped(form.monthly_expenses),
        surplus = grouped(metrics.monthly_surplus),
        rate = metrics.savings_rate,
        savings = grouped(form.current_savings),
        coverage = metrics.emergency_fund_coverage,
    )
}

fn debt_block(form: &FormDetails, sections: &FormSections) -> String {
    if !sections.debt {
        return "No significant debt concerns mentioned.".to_string();
    }
    format!(
        "Debt Situation:
- Debt Type: {kind}
- Total Debt: ${amount}
- Monthly Payment: ${payment}
- Interest Rate: {rate}%",
        kind = form.debt_type.as_str(),
        amount = grouped(form.debt_amount),
        payment = grouped(form.debt_monthly_payment),
        rate = grouped(form.debt_interest_rate),
    )
}

fn benefits_block(form: &FormDetails, sections: &FormSections) -> String {
    if !sections.benefits {
        return "Employer benefits details not primary concern.".to_string();
    }
    format!(
        "Employer Benefits:
- Has Health Insurance Option: {health}
- Enrolled in Health Insurance: {enrolled}
- Monthly Premium: ${premium}
- Has HSA/FSA: {hsa}
- Has 401k Option: {k401}
- Employer Match: {matching}%
- Currently Contributing to 401k: {contributing}
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

fn goal_block(form: &FormDetails, sections: &FormSections) -> String {
    if !sections.goal() {
        return String::new();
    }
    format!(
        "Financial Goal:
- Goal: {goal}
- Target Amount: ${target}
- Timeline: {years} years",
        goal = form.financial_goal_description,
        target = grouped(form.goal_target_amount),
        years = form.goal_timeline_years,
    )
}

fn critical_lines(sections: &FormSections) -> String {
    [
        (sections.benefits, "CRITICAL: Include detailed benefits enrollment steps and deadlines."),
        (sections.debt, "CRITICAL: Include specific debt payoff strategy."),
        (sections.emergency_fund, "CRITICAL: Include emergency fund building steps."),
        (sections.paycheck, "CRITICAL: Include paycheck management and direct deposit setup."),
        (sections.taxes, "CRITICAL: Include W-4 optimization and tax withholding guidance."),
    ]
    .iter()
    .filter(|(shown, _)| *shown)
    .map(|(_, line)| format!("\n   {line}"))
    .collect()
}

fn instructions(
    quiz: &QuizAnswers,
    metrics: &FormMetrics,
    sections: &FormSections,
) -> String {
    let benefits = if sections.benefits {
        "3. EMPLOYER BENEFITS EXPLANATION (PRIORITY):
   Provide clear, jargon-free explanations:
   - Health Insurance Strategy: Should they enroll? How to compare plans? Explain deductibles, co-pays, HSA vs FSA
   - 401k Strategy: Explain matching, vesting, Roth vs Traditional, contribution limits
   - Other Benefits: Any other recommendations based on their situation"
    } else {
        ""
    };
    let debt = if sections.debt {
        "5. DEBT ATTACK STRATEGY (PRIORITY):
   - Should they prioritize debt payoff vs investing?
   - If high-interest debt (>6%): Aggressive payoff strategy
   - Monthly payment recommendation
   - Timeline to debt freedom
   - Strategy: Avalanche vs Snowball method"
    } else {
        ""
    };

    format!(
        "INSTRUCTIONS - Create a comprehensive \"New Employee Financial Success Plan\":

Focus especially on their stated concerns: {concerns}

1. FINANCIAL HEALTH ASSESSMENT (0-100 score):
   Consider:
   - Emergency fund status (critical for new employees)
   - Debt burden relative to income
   - Savings rate
   - Enrollment in employer benefits
   - Overall financial stability

2. IMMEDIATE ACTION CHECKLIST (First 30-90 Days):
   Provide 5-8 specific, time-sensitive actions directly addressing their concerns.{critical}

{benefits}

4. EMERGENCY FUND BUILDER PLAN:
   - Target: ${target} (6 months expenses)
   - Current Coverage: {coverage:.1} months
   - Monthly Contribution Needed: Calculate realistic amount
   - Timeline to Full Funding: Be specific

{debt}

6. RETIREMENT JUMPSTART:
   - Minimum to contribute for full employer match
   - Monthly contribution recommendation
   - Account type recommendations (401k, Roth IRA, etc.)
   - Explain the power of starting early
   - Projected value at 65 (use 7% return assumption)

7. INVESTMENT PORTFOLIO ALLOCATION:
   Generate percentages (must sum to 100%):
   - Stocks: Higher for young professionals with long timeline
   - Bonds: Some stability
   - Cash: Emergency fund + short-term goals
   - Alternatives: 0-5% if appropriate

   Consider their age ({age}), timeline, and risk capacity

8. MONTHLY BUDGET ALLOCATION:
   Break down their ${surplus} surplus:
   - Emergency Fund: $X
   - Debt Payment (extra): $X
   - 401k Contribution: $X
   - IRA Contribution: $X
   - Goal Savings: $X
   Make it add up to their actual surplus

9. KEY RECOMMENDATIONS (8-10 specific items):
   - Address ALL their top concerns
   - Be specific with dollar amounts and timelines
   - Explain WHY each recommendation matters
   - Acknowledge they're newly employed and learning
   - Make it personal to their situation
   - Include both immediate and long-term advice",
        concerns = quiz.concerns_display(),
        critical = critical_lines(sections),
        target = grouped(metrics.emergency_fund_target),
        coverage = metrics.emergency_fund_coverage,
        age = or_blank(quiz.age),
        surplus = grouped(metrics.monthly_surplus),
    )
}

/// Full plan prompt: profile, finances, the sections this user's concerns
/// turn on, and numbered instructions.
pub fn build_plan_prompt(
    quiz: &QuizAnswers,
    form: &FormDetails,
    sections: &FormSections,
    metrics: &FormMetrics,
) -> String {
    let context = if form.additional_context.is_empty() {
        "None provided"
    } else {
        form.additional_context.as_str()
    };

    format!(
        "{INTRO}\n\n{profile}\n\n{finances}\n\n{debt}\n\n{benefits}\n\n{goal}\n\nAdditional Context: {context}\n\n{instructions}\n\n{CLOSING}",
        profile = profile_block(quiz),
        finances = finances_block(form, metrics),
        debt = debt_block(form, sections),
        benefits = benefits_block(form, sections),
        goal = goal_block(form, sections),
        instructions = instructions(quiz, metrics, sections),
    )
}
