//! Marketing propensity rule
//!
//! Placeholder for the trained propensity model. The threshold is an
//! arbitrary stand-in with no documented business rationale; it is kept
//! literal rather than second-guessed.

/// Listening-history length above which a listener counts as high value
pub const HIGH_VALUE_HISTORY_THRESHOLD: usize = 100;

/// Segmentation result: conversion propensity plus advertising segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segmentation {
    /// Estimated likelihood of conversion, in [0, 1]
    pub propensity: f64,
    /// Categorical label for downstream advertising targeting
    pub segment: &'static str,
}

/// Segment a listener from the length of their listening history
///
/// Strictly more than [`HIGH_VALUE_HISTORY_THRESHOLD`] items marks a
/// high-value vinyl buyer; exactly at the threshold falls through to the
/// general audience.
pub fn segment_listener(history_len: usize) -> Segmentation {
    if history_len > HIGH_VALUE_HISTORY_THRESHOLD {
        Segmentation {
            propensity: 0.85,
            segment: "High_Value_Vinyl_Buyer",
        }
    } else {
        Segmentation {
            propensity: 0.30,
            segment: "General_Audience",
        }
    }
}
