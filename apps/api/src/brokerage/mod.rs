pub mod application;
pub mod catalogue;
pub mod handlers;
