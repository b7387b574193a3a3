//! Readers for loosely typed request values. Browser form inputs arrive as
//! strings ("4200", "true") as often as they arrive as JSON numbers and booleans.

use serde_json::Value;

/// A finite number from a JSON number or a numeric string.
pub fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Trimmed string content; empty for anything that is not a string.
pub fn text(value: &Value) -> String {
    value.as_str().map(str::trim).unwrap_or_default().to_string()
}

/// `true` or `"true"`; everything else is false.
pub fn flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.trim() == "true",
        _ => false,
    }
}

/// Whether the user gave any answer. Blank strings and null count as unanswered;
/// `false` and `0` are answers.
pub fn is_answered(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_accepts_strings() {
        assert_eq!(number(&json!("4200.50")), Some(4200.5));
        assert_eq!(number(&json!(12)), Some(12.0));
        assert_eq!(number(&json!(" 7 ")), Some(7.0));
        assert_eq!(number(&json!("abc")), None);
        assert_eq!(number(&json!("NaN")), None);
        assert_eq!(number(&json!(true)), None);
    }

    #[test]
    fn test_flag() {
        assert!(flag(&json!(true)));
        assert!(flag(&json!("true")));
        assert!(!flag(&json!("false")));
        assert!(!flag(&json!("yes")));
        assert!(!flag(&Value::Null));
    }

    #[test]
    fn test_is_answered() {
        assert!(is_answered(Some(&json!("false"))));
        assert!(is_answered(Some(&json!(false))));
        assert!(is_answered(Some(&json!(0))));
        assert!(!is_answered(Some(&json!(" "))));
        assert!(!is_answered(Some(&Value::Null)));
        assert!(!is_answered(None));
    }
}
