pub mod handlers;
pub mod prompt;
