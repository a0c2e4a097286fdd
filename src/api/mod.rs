//! Lottery backend integration.
//!
//! This module provides the HTTP client for the three backend endpoints,
//! the wire types they return, and their conversion into domain types.

mod client;
mod converter;
pub mod wire;

#[cfg(test)]
pub use client::MockLotteryApi;
pub use client::{ApiClient, ApiClientBuilder, Endpoint, LotteryApi};
pub use converter::DataConverter;
