//! Investment coach: age/risk allocation, diversified ETF picks, growth
//! projection, market insights and rebalancing. Everything here can run
//! without the upstream coach service; `client::CoachClient` decides which
//! side answers.

pub mod allocation;
pub mod client;
pub mod etfs;
pub mod handlers;
pub mod market;
pub mod projection;
pub mod rebalance;
pub mod recommendations;
