use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::lenient::{is_answered, number, text};
use crate::models::profile::{Concern, QuizAnswers, RiskTolerance};
use crate::quiz::steps::{QuizStep, StepKind, MAX_CONCERNS};

#[derive(Debug, Error, PartialEq)]
pub enum QuizValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> QuizValidationError {
    QuizValidationError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// A checkbox step needs between one and `max_selections` picks; any other
/// step needs a non-blank value.
pub fn is_step_valid(step: &QuizStep, value: Option<&Value>) -> bool {
    match step.kind {
        StepKind::Checkbox => value.and_then(Value::as_array).is_some_and(|picked| {
            !picked.is_empty() && picked.len() <= step.max_selections.unwrap_or(usize::MAX)
        }),
        _ => is_answered(value),
    }
}

fn parse_enum<T: DeserializeOwned>(
    field: &'static str,
    value: &Value,
) -> Result<T, QuizValidationError> {
    serde_json::from_value(value.clone())
        .map_err(|_| invalid(field, format!("unknown option {value}")))
}

/// Checks a full quiz submission against every step and converts it to typed
/// answers. Unknown fields are dropped.
pub fn validate_submission(
    steps: &[QuizStep],
    input: &Map<String, Value>,
) -> Result<QuizAnswers, QuizValidationError> {
    for step in steps {
        if !is_step_valid(step, input.get(step.field)) {
            return Err(match step.kind {
                StepKind::Checkbox => invalid(
                    step.field,
                    format!("select between 1 and {MAX_CONCERNS} options"),
                ),
                _ => QuizValidationError::Missing(step.field),
            });
        }
    }

    let field = |name: &'static str| input.get(name).unwrap_or(&Value::Null);

    // parseInt semantics: fractional ages truncate
    let age = number(field("age"))
        .map(f64::trunc)
        .filter(|a| *a >= 1.0 && *a <= 150.0)
        .ok_or_else(|| invalid("age", "must be a whole number between 1 and 150"))?;

    let annual_salary = number(field("annual_salary"))
        .filter(|s| *s >= 0.0)
        .ok_or_else(|| invalid("annual_salary", "must be a non-negative number"))?;

    let concerns: Vec<Concern> =
        parse_enum("top_financial_concerns", field("top_financial_concerns"))?;

    let risk_tolerance = input
        .get("risk_tolerance")
        .and_then(Value::as_str)
        .filter(|r| !r.trim().is_empty())
        .map(RiskTolerance::parse_lenient);

    Ok(QuizAnswers {
        user_name: text(field("user_name")),
        age: Some(age as u32),
        employment_duration: Some(parse_enum(
            "employment_duration",
            field("employment_duration"),
        )?),
        state: text(field("state")),
        annual_salary: Some(annual_salary),
        marital_status: Some(parse_enum("marital_status", field("marital_status"))?),
        top_financial_concerns: concerns,
        risk_tolerance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{EmploymentDuration, MaritalStatus};
    use crate::quiz::steps::steps;
    use serde_json::json;

    fn submission(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn complete() -> Map<String, Value> {
        submission(json!({
            "user_name": "  Jordan Lee ",
            "age": "24",
            "employment_duration": "3_to_12_months",
            "state": "Ohio",
            "annual_salary": "65000",
            "marital_status": "single",
            "top_financial_concerns": ["paying_off_debt", "emergency_fund"],
            "favorite_color": "teal"
        }))
    }

    #[test]
    fn test_text_step_rejects_blank() {
        let all = steps();
        assert!(!is_step_valid(&all[0], Some(&json!(""))));
        assert!(!is_step_valid(&all[0], Some(&json!("   "))));
        assert!(!is_step_valid(&all[0], Some(&Value::Null)));
        assert!(!is_step_valid(&all[0], None));
        assert!(is_step_valid(&all[0], Some(&json!("Sam"))));
        assert!(is_step_valid(&all[1], Some(&json!(0))));
    }

    #[test]
    fn test_checkbox_step_bounds() {
        let all = steps();
        let concerns = &all[6];
        assert!(!is_step_valid(concerns, Some(&json!([]))));
        assert!(is_step_valid(concerns, Some(&json!(["emergency_fund"]))));
        assert!(is_step_valid(concerns, Some(&json!(["emergency_fund", "paying_off_debt"]))));
        assert!(!is_step_valid(
            concerns,
            Some(&json!(["emergency_fund", "paying_off_debt", "investing_future"]))
        ));
        assert!(!is_step_valid(concerns, Some(&json!("emergency_fund"))));
    }

    #[test]
    fn test_valid_submission_is_typed() {
        let answers = validate_submission(&steps(), &complete()).unwrap();
        assert_eq!(answers.user_name, "Jordan Lee");
        assert_eq!(answers.age, Some(24));
        assert_eq!(answers.annual_salary, Some(65000.0));
        assert_eq!(
            answers.employment_duration,
            Some(EmploymentDuration::ThreeTo12Months)
        );
        assert_eq!(answers.marital_status, Some(MaritalStatus::Single));
        assert_eq!(answers.top_financial_concerns.len(), 2);
        assert!(answers.risk_tolerance.is_none());
    }

    #[test]
    fn test_missing_field_is_reported() {
        let mut input = complete();
        input.remove("state");
        assert_eq!(
            validate_submission(&steps(), &input),
            Err(QuizValidationError::Missing("state"))
        );
    }

    #[test]
    fn test_bad_values_are_rejected() {
        let mut input = complete();
        input.insert("age".into(), json!("twenty"));
        assert!(matches!(
            validate_submission(&steps(), &input),
            Err(QuizValidationError::Invalid { field: "age", .. })
        ));

        let mut input = complete();
        input.insert("marital_status".into(), json!("complicated"));
        assert!(matches!(
            validate_submission(&steps(), &input),
            Err(QuizValidationError::Invalid {
                field: "marital_status",
                ..
            })
        ));

        let mut input = complete();
        input.insert("top_financial_concerns".into(), json!(["crypto"]));
        assert!(validate_submission(&steps(), &input).is_err());
    }

    #[test]
    fn test_fractional_age_truncates_and_risk_is_lenient() {
        let mut input = complete();
        input.insert("age".into(), json!(31.9));
        input.insert("risk_tolerance".into(), json!("HIGH"));
        let answers = validate_submission(&steps(), &input).unwrap();
        assert_eq!(answers.age, Some(31));
        assert_eq!(answers.risk_tolerance, Some(RiskTolerance::High));
    }
}
