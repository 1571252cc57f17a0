//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::GameOverReason;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// An enemy absorbed a hit.
    EnemyHit { remaining: u32 },
    /// An enemy was destroyed.
    EnemyDestroyed { x: f32, y: f32 },
    ShieldHit { remaining: u32 },
    ShieldDestroyed { x: f32, y: f32 },
    PlayerHit { remaining: u32 },
    /// The player lost a life.
    PlayerDied { lives_left: u32 },
    PlayerRespawned,
    /// The formation fired `count` projectiles.
    EnemyVolley { count: u32 },
    WaveStarted { round: u32, enemies: u32 },
    WaveCleared { round: u32, score: u32 },
    GameOver { reason: GameOverReason },
    GameSaved { round: u32 },
    GameLoaded { round: u32 },
    /// Save or load was skipped; in-memory state is unchanged.
    PersistenceFailed { message: String },
}
