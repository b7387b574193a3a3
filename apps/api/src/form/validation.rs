use serde_json::{Map, Value};
use thiserror::Error;

use crate::form::sections::FormSections;
use crate::models::lenient::{flag, is_answered, number, text};
use crate::models::profile::{DebtType, FormDetails};

#[derive(Debug, Error, PartialEq)]
pub enum FormValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must be a non-negative number")]
    NotANumber(&'static str),

    #[error("unknown debt type {0}")]
    DebtType(String),
}

const REQUIRED: [&str; 3] = ["monthly_income", "monthly_expenses", "current_savings"];

fn field<'a>(input: &'a Map<String, Value>, name: &str) -> &'a Value {
    input.get(name).unwrap_or(&Value::Null)
}

fn debt_type(input: &Map<String, Value>) -> Result<DebtType, FormValidationError> {
    let raw = field(input, "debt_type");
    if !is_answered(Some(raw)) {
        return Ok(DebtType::None);
    }
    serde_json::from_value(raw.clone()).map_err(|_| FormValidationError::DebtType(text(raw)))
}

/// Blank optional amounts count as 0; anything present must be a valid
/// non-negative number.
fn amount(input: &Map<String, Value>, name: &'static str) -> Result<f64, FormValidationError> {
    let raw = field(input, name);
    if !is_answered(Some(raw)) {
        return Ok(0.0);
    }
    number(raw)
        .filter(|n| *n >= 0.0)
        .ok_or(FormValidationError::NotANumber(name))
}

/// Checks the submission against the sections shown for this user and converts
/// it into `FormDetails`.
///
/// Income, expenses and savings are always required. The benefits section
/// needs both the health-insurance and retirement answers; the debt section
/// needs an amount and monthly payment unless the debt type is `none`.
pub fn validate_form(
    sections: &FormSections,
    input: &Map<String, Value>,
) -> Result<FormDetails, FormValidationError> {
    for name in REQUIRED {
        if !is_answered(input.get(name)) {
            return Err(FormValidationError::Missing(name));
        }
    }

    if sections.benefits {
        for name in ["has_employer_health_insurance", "has_employer_retirement"] {
            if !is_answered(input.get(name)) {
                return Err(FormValidationError::Missing(name));
            }
        }
    }

    let debt_type = debt_type(input)?;
    if sections.debt && debt_type != DebtType::None {
        for name in ["debt_amount", "debt_monthly_payment"] {
            if !is_answered(input.get(name)) {
                return Err(FormValidationError::Missing(name));
            }
        }
    }

    let goal_timeline_years = amount(input, "goal_timeline_years")?;

    Ok(FormDetails {
        monthly_income: amount(input, "monthly_income")?,
        monthly_expenses: amount(input, "monthly_expenses")?,
        current_savings: amount(input, "current_savings")?,
        debt_amount: amount(input, "debt_amount")?,
        debt_type,
        debt_monthly_payment: amount(input, "debt_monthly_payment")?,
        debt_interest_rate: amount(input, "debt_interest_rate")?,
        has_employer_health_insurance: flag(field(input, "has_employer_health_insurance")),
        enrolled_in_health_insurance: flag(field(input, "enrolled_in_health_insurance")),
        health_insurance_premium: amount(input, "health_insurance_premium")?,
        has_hsa_fsa: flag(field(input, "has_hsa_fsa")),
        has_employer_retirement: flag(field(input, "has_employer_retirement")),
        employer_match_percentage: amount(input, "employer_match_percentage")?,
        contributing_to_retirement: flag(field(input, "contributing_to_retirement")),
        retirement_contribution_amount: amount(input, "retirement_contribution_amount")?,
        financial_goal_description: text(field(input, "financial_goal_description")),
        goal_target_amount: amount(input, "goal_target_amount")?,
        // parseInt semantics
        goal_timeline_years: goal_timeline_years.trunc().min(f64::from(u32::MAX)) as u32,
        additional_context: text(field(input, "additional_context")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn basics() -> Map<String, Value> {
        input(json!({
            "monthly_income": "4200",
            "monthly_expenses": "3000",
            "current_savings": "2500"
        }))
    }

    #[test]
    fn test_basic_fields_required() {
        let sections = FormSections::default();
        assert!(validate_form(&sections, &basics()).is_ok());

        let mut missing = basics();
        missing.insert("current_savings".into(), json!(""));
        assert_eq!(
            validate_form(&sections, &missing),
            Err(FormValidationError::Missing("current_savings"))
        );
    }

    #[test]
    fn test_zero_savings_is_an_answer() {
        let mut form = basics();
        form.insert("current_savings".into(), json!("0"));
        let details = validate_form(&FormSections::default(), &form).unwrap();
        assert_eq!(details.current_savings, 0.0);
    }

    #[test]
    fn test_benefits_section_needs_both_answers() {
        let sections = FormSections {
            benefits: true,
            ..Default::default()
        };
        let mut form = basics();
        form.insert("has_employer_health_insurance".into(), json!("true"));
        assert_eq!(
            validate_form(&sections, &form),
            Err(FormValidationError::Missing("has_employer_retirement"))
        );

        form.insert("has_employer_retirement".into(), json!("false"));
        let details = validate_form(&sections, &form).unwrap();
        assert!(details.has_employer_health_insurance);
        assert!(!details.has_employer_retirement);
    }

    #[test]
    fn test_debt_section_rules() {
        let sections = FormSections {
            debt: true,
            ..Default::default()
        };
        // no debt type means no debt questions
        assert!(validate_form(&sections, &basics()).is_ok());

        let mut form = basics();
        form.insert("debt_type".into(), json!("student_loans"));
        form.insert("debt_amount".into(), json!("25000"));
        assert_eq!(
            validate_form(&sections, &form),
            Err(FormValidationError::Missing("debt_monthly_payment"))
        );

        form.insert("debt_monthly_payment".into(), json!(300));
        let details = validate_form(&sections, &form).unwrap();
        assert_eq!(details.debt_type, DebtType::StudentLoans);
        assert_eq!(details.debt_amount, 25000.0);
        assert_eq!(details.debt_monthly_payment, 300.0);
    }

    #[test]
    fn test_debt_rules_ignored_without_debt_concern() {
        let mut form = basics();
        form.insert("debt_type".into(), json!("credit_cards"));
        assert!(validate_form(&FormSections::default(), &form).is_ok());
    }

    #[test]
    fn test_bad_numbers_and_debt_type() {
        let mut form = basics();
        form.insert("monthly_income".into(), json!("lots"));
        assert_eq!(
            validate_form(&FormSections::default(), &form),
            Err(FormValidationError::NotANumber("monthly_income"))
        );

        let mut form = basics();
        form.insert("debt_type".into(), json!("mortgage"));
        assert_eq!(
            validate_form(&FormSections::default(), &form),
            Err(FormValidationError::DebtType("mortgage".into()))
        );
    }

    #[test]
    fn test_goal_fields_parse() {
        let mut form = basics();
        form.insert("financial_goal_description".into(), json!(" Buy a car "));
        form.insert("goal_target_amount".into(), json!("12000"));
        form.insert("goal_timeline_years".into(), json!("2.5"));
        let details = validate_form(&FormSections::default(), &form).unwrap();
        assert_eq!(details.financial_goal_description, "Buy a car");
        assert_eq!(details.goal_target_amount, 12000.0);
        assert_eq!(details.goal_timeline_years, 2);
    }
}
