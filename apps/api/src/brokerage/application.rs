//! Account-opening application: per-step checks and the simulated account.
//! Nothing is sent to a real broker.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::brokerage::catalogue::{find_broker, AccountType, FundingMethod};
use crate::format::grouped;
use crate::models::lenient::{is_answered, number};

pub const TOTAL_STEPS: u8 = 4;

const ACCOUNT_PREFIX: &str = "VG";
const ACCOUNT_SUFFIX_LEN: usize = 9;

#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error("step {step}: {field} is required")]
    Missing { step: u8, field: &'static str },

    #[error("step {step}: {field} {reason}")]
    Invalid {
        step: u8,
        field: &'static str,
        reason: String,
    },
}

/// Fields the flow collects. Identity extras the form asks for (phone, SSN,
/// date of birth) are accepted and dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountApplication {
    pub broker: String,
    pub account_type: Option<AccountType>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub employment_status: String,
    pub initial_deposit: Value,
    pub funding_method: Option<FundingMethod>,
}

fn require(step: u8, field: &'static str, value: &str) -> Result<(), ApplicationError> {
    if value.trim().is_empty() {
        return Err(ApplicationError::Missing { step, field });
    }
    Ok(())
}

/// Blank means 0; anything else must be a non-negative number.
fn deposit(value: &Value) -> Result<f64, ApplicationError> {
    if !is_answered(Some(value)) {
        return Ok(0.0);
    }
    number(value)
        .filter(|n| *n >= 0.0)
        .ok_or_else(|| ApplicationError::Invalid {
            step: 4,
            field: "initial_deposit",
            reason: "must be a non-negative number".to_string(),
        })
}

/// Checks one step of the flow.
///
/// 1. broker and account type
/// 2. first name, last name and email
/// 3. address, city and state
/// 4. funding method, plus a valid deposit amount if one is given
pub fn validate_step(step: u8, app: &AccountApplication) -> Result<(), ApplicationError> {
    match step {
        1 => {
            require(1, "broker", &app.broker)?;
            if find_broker(&app.broker).is_none() {
                return Err(ApplicationError::Invalid {
                    step: 1,
                    field: "broker",
                    reason: format!("{} is not offered", app.broker),
                });
            }
            app.account_type
                .map(|_| ())
                .ok_or(ApplicationError::Missing {
                    step: 1,
                    field: "account_type",
                })
        }
        2 => {
            require(2, "first_name", &app.first_name)?;
            require(2, "last_name", &app.last_name)?;
            require(2, "email", &app.email)
        }
        3 => {
            require(3, "address", &app.address)?;
            require(3, "city", &app.city)?;
            require(3, "state", &app.state)
        }
        4 => {
            if app.funding_method.is_none() {
                return Err(ApplicationError::Missing {
                    step: 4,
                    field: "funding_method",
                });
            }
            deposit(&app.initial_deposit).map(|_| ())
        }
        other => Err(ApplicationError::Invalid {
            step: other,
            field: "step",
            reason: format!("must be between 1 and {TOTAL_STEPS}"),
        }),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NextStep {
    pub title: &'static str,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountHolder {
    pub name: String,
    pub email: String,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub employment_status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenedAccount {
    pub account_number: String,
    pub broker: String,
    pub holder: AccountHolder,
    pub account_type: AccountType,
    pub account_type_label: &'static str,
    pub funding_method: FundingMethod,
    pub initial_deposit: f64,
    pub welcome: String,
    pub next_steps: Vec<NextStep>,
    pub pro_tip: &'static str,
}

const PRO_TIP: &str = "Don't wait! Once your funds clear, our Investment Coach will show you \
exactly which ETFs to buy and how much of each. Start investing within 48 hours!";

/// `VG` followed by nine upper-case alphanumerics.
pub fn account_number() -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(ACCOUNT_SUFFIX_LEN)
        .collect();
    format!("{ACCOUNT_PREFIX}{}", suffix.to_uppercase())
}

fn next_steps(broker: &str, deposit: f64) -> Vec<NextStep> {
    vec![
        NextStep {
            title: "Check Your Email",
            detail: format!("Look for account confirmation from {broker}"),
        },
        NextStep {
            title: "Link Your Bank Account",
            detail: format!("Transfer your initial deposit of ${}", grouped(deposit)),
        },
        NextStep {
            title: "Review Investment Recommendations",
            detail: "Use our AI Investment Coach to see which ETFs to buy".to_string(),
        },
        NextStep {
            title: "Place Your First Trades",
            detail: "Buy recommended ETFs and set up automatic investments".to_string(),
        },
    ]
}

/// Runs every step in order and, if all pass, opens the simulated account.
pub fn open_account(app: &AccountApplication) -> Result<OpenedAccount, ApplicationError> {
    for step in 1..=TOTAL_STEPS {
        validate_step(step, app)?;
    }

    // validated above
    let (Some(account_type), Some(funding_method)) = (app.account_type, app.funding_method) else {
        return Err(ApplicationError::Missing {
            step: 1,
            field: "account_type",
        });
    };
    let initial_deposit = deposit(&app.initial_deposit)?;

    Ok(OpenedAccount {
        account_number: account_number(),
        broker: app.broker.clone(),
        holder: AccountHolder {
            name: format!("{} {}", app.first_name.trim(), app.last_name.trim()),
            email: app.email.trim().to_string(),
            city: app.city.trim().to_string(),
            state: app.state.trim().to_string(),
            employment_status: app.employment_status.trim().to_string(),
        },
        account_type,
        account_type_label: account_type.label(),
        funding_method,
        initial_deposit,
        welcome: format!(
            "Welcome to {}! Your investment journey starts now.",
            app.broker
        ),
        next_steps: next_steps(&app.broker, initial_deposit),
        pro_tip: PRO_TIP,
    })
}
