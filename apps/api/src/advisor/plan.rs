use crate::models::plan::{
    AdvisorPlan, BenefitsExplanation, DebtPayoffStrategy, EmergencyFundPlan, PortfolioMix,
    RetirementStrategy,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed plan the template advisor returns for every structured request.
pub fn canned_plan() -> AdvisorPlan {
    AdvisorPlan {
        financial_health_score: 72.0,
        action_checklist: strings(&[
            "Enroll in employer health insurance during open enrollment",
            "Set up automatic contributions to emergency fund ($300/month)",
            "Contribute at least 4% to 401k to get full employer match",
            "Review and optimize tax withholdings on Form W-4",
            "Set up a budget tracking system (app or spreadsheet)",
        ]),
        benefits_explanation: BenefitsExplanation {
            health_insurance_advice: "Based on your income and situation, enrolling in your \
                employer's health insurance is highly recommended. Look for a plan with reasonable \
                deductibles ($1500-$3000) and consider an HSA-eligible high-deductible plan if \
                available."
                .to_string(),
            retirement_plan_advice: "Your employer offers a 401k match - this is free money! \
                Contribute at least enough to get the full match. Consider starting with 6% of \
                your salary and increasing by 1% each year."
                .to_string(),
            other_benefits_advice: "Check if your employer offers FSA for healthcare expenses, \
                commuter benefits, or education reimbursement programs."
                .to_string(),
        },
        emergency_fund_plan: EmergencyFundPlan {
            target_amount: 15000.0,
            current_coverage_months: 2.0,
            monthly_contribution: 300.0,
            timeline_months: 24.0,
        },
        debt_payoff_strategy: DebtPayoffStrategy {
            priority: "High priority - pay minimum on all debts, then focus extra payments on \
                highest interest rate first"
                .to_string(),
            monthly_payment_suggestion: 500.0,
            payoff_timeline_months: 48.0,
            strategy: "Avalanche method - pay off highest interest debt first while maintaining \
                minimums on others"
                .to_string(),
        },
        retirement_strategy: RetirementStrategy {
            recommended_monthly: 250.0,
            employer_match_value: 100.0,
            projected_at_65: 650000.0,
            account_recommendations: strings(&[
                "401k up to employer match (4% = $200/month)",
                "Roth IRA for additional tax-advantaged savings ($50/month to start)",
                "Increase contributions by 1% annually or with raises",
            ]),
        },
        portfolio: PortfolioMix {
            stocks: 80.0,
            bonds: 15.0,
            cash: 5.0,
            alternatives: 0.0,
        },
        monthly_investment_target: 400.0,
        recommendations: strings(&[
            "Priority 1: Get the employer 401k match - that's an immediate 100% return",
            "Priority 2: Build emergency fund to 3 months expenses within 12 months",
            "Focus on understanding your benefits package - many people leave thousands on the table",
            "Track your spending for 2-3 months to understand where money goes",
            "Consider a Roth IRA for additional retirement savings with tax-free growth",
            "Review insurance needs - life and disability insurance become important",
            "Start building credit responsibly if you haven't already",
            "Take advantage of any employer learning/education benefits",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_plan_shape() {
        let plan = canned_plan();
        assert_eq!(plan.action_checklist.len(), 5);
        assert_eq!(plan.recommendations.len(), 8);
        assert_eq!(plan.retirement_strategy.account_recommendations.len(), 3);
        assert_eq!(plan.emergency_fund_plan.target_amount, 15000.0);
        assert_eq!(plan.debt_payoff_strategy.payoff_timeline_months, 48.0);
    }

    #[test]
    fn test_canned_portfolio_sums_to_100() {
        let p = canned_plan().portfolio;
        assert_eq!(p.stocks + p.bonds + p.cash + p.alternatives, 100.0);
    }

    #[test]
    fn test_line_continuations_leave_single_spaces() {
        let plan = canned_plan();
        assert!(!plan.benefits_explanation.health_insurance_advice.contains("  "));
        assert!(plan
            .debt_payoff_strategy
            .priority
            .ends_with("highest interest rate first"));
    }
}
