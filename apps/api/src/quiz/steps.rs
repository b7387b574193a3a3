use serde::Serialize;

use crate::models::profile::{Concern, EmploymentDuration, MaritalStatus};

pub const MAX_CONCERNS: usize = 2;

pub const US_STATES: [&str; 50] = [
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa", "Kansas",
    "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan", "Minnesota",
    "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire", "New Jersey",
    "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio", "Oklahoma", "Oregon",
    "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota", "Tennessee", "Texas", "Utah",
    "Vermont", "Virginia", "Washington", "West Virginia", "Wisconsin", "Wyoming",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    Text,
    Number,
    Select,
    StateSelect,
    Checkbox,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// One question of the quiz wizard.
#[derive(Debug, Clone, Serialize)]
pub struct QuizStep {
    pub question: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    /// Record field the answer is written to.
    pub field: &'static str,
    #[serde(rename = "type")]
    pub kind: StepKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<StepOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<usize>,
}

impl QuizStep {
    fn new(question: &'static str, field: &'static str, kind: StepKind) -> Self {
        QuizStep {
            question,
            subtitle: None,
            field,
            kind,
            placeholder: None,
            options: Vec::new(),
            max_selections: None,
        }
    }

    fn subtitle(mut self, subtitle: &'static str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    fn options(mut self, options: impl IntoIterator<Item = StepOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }
}

/// The seven quiz questions, in order.
pub fn steps() -> Vec<QuizStep> {
    vec![
        QuizStep::new("What's your name?", "user_name", StepKind::Text)
            .placeholder("Enter your full name"),
        QuizStep::new("How old are you?", "age", StepKind::Number).placeholder("Enter your age"),
        QuizStep::new(
            "How long have you been in your current (or first full-time) job?",
            "employment_duration",
            StepKind::Select,
        )
        .subtitle("This helps us tailor advice to your career stage")
        .options(EmploymentDuration::ALL.iter().map(|d| StepOption {
            value: d.as_str(),
            label: d.label(),
        })),
        QuizStep::new("Which state do you live in?", "state", StepKind::StateSelect)
            .placeholder("Select your state")
            .options(US_STATES.iter().map(|&s| StepOption { value: s, label: s })),
        QuizStep::new(
            "What's your current annual salary?",
            "annual_salary",
            StepKind::Number,
        )
        .subtitle("This helps us calculate your take-home pay and savings potential")
        .placeholder("e.g., 65000"),
        QuizStep::new(
            "What's your marital status?",
            "marital_status",
            StepKind::Select,
        )
        .options(MaritalStatus::ALL.iter().map(|m| StepOption {
            value: m.as_str(),
            label: m.label(),
        })),
        QuizStep {
            max_selections: Some(MAX_CONCERNS),
            ..QuizStep::new(
                "What are your top financial concerns right now?",
                "top_financial_concerns",
                StepKind::Checkbox,
            )
            .subtitle("Select up to 2 that matter most to you")
            .options(Concern::ALL.iter().map(|c| StepOption {
                value: c.as_str(),
                label: c.label(),
            }))
        },
    ]
}

/// Percent complete while `step_index` (zero-based) is showing.
pub fn progress_percent(step_index: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (step_index + 1).min(total) as f64 / total as f64 * 100.0
}
