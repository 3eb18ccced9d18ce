//! Placeholder decision rules
//!
//! Stand-ins for the marketing and logistics models. Each rule is a pure
//! function so the HTTP handlers stay thin and the thresholds are testable
//! in isolation.

pub mod logistics;
pub mod marketing;
