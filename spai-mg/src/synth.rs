//! Simulated track synthesis
//!
//! No real model runs here. [`TrackSource`] isolates the two random choices
//! the generation handler makes (track id and fake inference delay) so tests
//! can substitute deterministic values without touching handler logic.

use rand::Rng;
use std::time::Duration;

/// Fabricated track ids are drawn from this fixed-width range
pub const TRACK_ID_MIN: u32 = 10_000;
pub const TRACK_ID_MAX: u32 = 99_999;

/// Simulated inference time bounds, whole seconds
pub const DELAY_SECS_MIN: u64 = 2;
pub const DELAY_SECS_MAX: u64 = 5;

/// Provider of fabricated track ids and simulated processing delays
pub trait TrackSource: Send + Sync {
    /// Next fabricated track id (not unique-guaranteed, never persisted)
    fn next_track_id(&self) -> u32;

    /// Duration to suspend the request, standing in for model inference
    fn processing_delay(&self) -> Duration;
}

/// Production source: uniform random id and delay
pub struct RandomTrackSource;

impl TrackSource for RandomTrackSource {
    fn next_track_id(&self) -> u32 {
        rand::thread_rng().gen_range(TRACK_ID_MIN..=TRACK_ID_MAX)
    }

    fn processing_delay(&self) -> Duration {
        let secs = rand::thread_rng().gen_range(DELAY_SECS_MIN..=DELAY_SECS_MAX);
        Duration::from_secs(secs)
    }
}
