//! Difficulty curve.
//!
//! A single scalar, `harder`, is recomputed every frame from the round and the
//! number of live enemies. Both formation cadences are derived from it.

use holdline_core::constants::*;

/// Formation cadence for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cadence {
    pub harder: f32,
    /// Seconds between formation descent steps.
    pub move_period: f32,
    /// Seconds between enemy volleys.
    pub fire_period: f32,
    /// Descent per movement tick.
    pub step: f32,
}

/// Difficulty scalar for `live_count` enemies in `round`, with per-round increment `k`.
///
/// Thinning the formation raises it through the `5 / count` term until only a
/// couple of units remain, at which point a fixed endgame base takes over.
/// Never exceeds `DIFFICULTY_CLAMP`.
pub fn harder(live_count: usize, round: u32, k: f32) -> f32 {
    let escalation = round as f32 * k;
    let raw = if live_count > DIFFICULTY_ENDGAME_COUNT {
        DIFFICULTY_THIN_NUMERATOR / live_count as f32 + escalation
    } else {
        DIFFICULTY_ENDGAME_BASE + escalation
    };
    raw.min(DIFFICULTY_CLAMP)
}

impl Cadence {
    pub fn compute(live_count: usize, round: u32, k: f32) -> Self {
        Self::from_harder(harder(live_count, round, k))
    }

    pub fn from_harder(harder: f32) -> Self {
        let step = if harder > FORMATION_STEP_THRESHOLD {
            FORMATION_STEP_LARGE
        } else {
            FORMATION_STEP_SMALL
        };
        Self {
            harder,
            move_period: MOVE_PERIOD_BASE - harder,
            fire_period: FIRE_PERIOD_BASE - harder,
            step,
        }
    }
}
