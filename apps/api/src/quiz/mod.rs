//! Quiz wizard: the seven profile questions, per-step validation, and the
//! `QuizResponse` endpoints that create and read records.

pub mod handlers;
pub mod steps;
pub mod validation;
