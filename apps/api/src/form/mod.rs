//! Details form: which sections apply, validation, derived metrics, the plan
//! prompt, and the submission that merges form fields and the advisor's plan
//! into the stored record.

pub mod handlers;
pub mod metrics;
pub mod prompt;
pub mod sections;
pub mod validation;
