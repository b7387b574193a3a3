pub mod lenient;
pub mod plan;
pub mod profile;
pub mod quiz_response;
