// Prompt fragments shared by the advisor backends.
// The plan prompt itself is built by the form module; the chat context by the chat module.

use serde_json::{json, Value};

/// System prompt for free-form chat answers.
pub const ADVISOR_SYSTEM: &str = "You are a friendly, expert financial advisor for newly \
    employed college graduates. Answer in plain language, reference the user's own numbers, \
    and keep answers to 2-4 short paragraphs.";

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// JSON schema for the structured plan.
pub fn plan_schema() -> Value {
    let number = json!({ "type": "number" });
    let string = json!({ "type": "string" });
    let strings = json!({ "type": "array", "items": { "type": "string" } });

    json!({
        "type": "object",
        "properties": {
            "financial_health_score": { "type": "number", "description": "Score from 0-100" },
            "action_checklist": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Immediate actions for first 30-90 days"
            },
            "benefits_explanation": {
                "type": "object",
                "properties": {
                    "health_insurance_advice": string,
                    "retirement_plan_advice": string,
                    "other_benefits_advice": string
                }
            },
            "emergency_fund_plan": {
                "type": "object",
                "properties": {
                    "target_amount": number,
                    "current_coverage_months": number,
                    "monthly_contribution": number,
                    "timeline_months": number
                }
            },
            "debt_payoff_strategy": {
                "type": "object",
                "properties": {
                    "priority": string,
                    "monthly_payment_suggestion": number,
                    "payoff_timeline_months": number,
                    "strategy": string
                }
            },
            "retirement_strategy": {
                "type": "object",
                "properties": {
                    "recommended_monthly": number,
                    "employer_match_value": number,
                    "projected_at_65": number,
                    "account_recommendations": strings
                }
            },
            "portfolio": {
                "type": "object",
                "properties": {
                    "stocks": number,
                    "bonds": number,
                    "cash": number,
                    "alternatives": number
                }
            },
            "monthly_investment_target": number,
            "recommendations": strings
        }
    })
}

/// Appends the schema to a plan prompt so a real model knows the exact output shape.
pub fn with_plan_schema(prompt: &str) -> String {
    format!(
        "{prompt}\n\nRespond with a single JSON object matching this JSON schema:\n{}",
        plan_schema()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_every_plan_field() {
        let schema = plan_schema();
        let props = schema["properties"].as_object().unwrap();
        for key in [
            "financial_health_score",
            "action_checklist",
            "benefits_explanation",
            "emergency_fund_plan",
            "debt_payoff_strategy",
            "retirement_strategy",
            "portfolio",
            "monthly_investment_target",
            "recommendations",
        ] {
            assert!(props.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn test_with_plan_schema_keeps_prompt_first() {
        let full = with_plan_schema("PLAN PLEASE");
        assert!(full.starts_with("PLAN PLEASE\n\n"));
        assert!(full.contains("\"portfolio\""));
    }
}
