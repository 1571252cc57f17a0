//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state). Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle, no simulation.
    #[default]
    Menu,
    /// Full simulation.
    Playing,
    /// Simulation frozen; only phase input is accepted.
    Paused,
    /// The formation was destroyed; waiting for continue/save/menu/restart.
    WaveCleared,
    /// Waiting for restart/menu.
    GameOver,
}

/// Side that fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// Fired upward by the player.
    Player,
    /// Fired downward by the formation.
    Enemy,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// A front-line unit crossed the loss line.
    FormationBreach,
    /// The player died with no permanent lives left.
    LivesExhausted,
}

/// Visual damage tier derived from the current/max health ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthTier {
    /// Full health.
    #[default]
    Pristine,
    /// At least 80%.
    Scratched,
    /// At least 60%.
    Damaged,
    /// At least 40%.
    Battered,
    /// At least 20%.
    Failing,
    /// Below 20%.
    Critical,
}

impl HealthTier {
    /// Map a health ratio to its tier. A zero maximum counts as critical.
    pub fn from_health(current: u32, max: u32) -> Self {
        if max == 0 {
            return Self::Critical;
        }
        if current >= max {
            return Self::Pristine;
        }
        let ratio = current as f32 / max as f32;
        if ratio >= 0.8 {
            Self::Scratched
        } else if ratio >= 0.6 {
            Self::Damaged
        } else if ratio >= 0.4 {
            Self::Battered
        } else if ratio >= 0.2 {
            Self::Failing
        } else {
            Self::Critical
        }
    }
}

/// An action offered by a phase overlay (menu button).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    NewGame,
    LoadGame,
    Resume,
    ContinueWave,
    SaveGame,
    Restart,
    MainMenu,
}
