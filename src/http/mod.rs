//! HTTP client module
//!
//! Provides the HTTP client used by the page fetcher.
//!
//! # Features
//!
//! - **Base URL**: Relative paths are joined onto a configured base
//! - **Status Mapping**: Non-success responses become `Error::HttpStatus`
//! - **Rate Limiting**: Optional token bucket throttle using governor

mod client;
mod rate_limit;

pub use client::{
    default_user_agent, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig,
};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
