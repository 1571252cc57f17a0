//! Input consumed by the simulation.
//!
//! `FrameInput` is the per-frame keyboard snapshot pre-polled by the host.
//! `PlayerCommand`s are menu selections; they are queued and processed at
//! the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::MenuAction;

/// Held keys and edge-triggered presses for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    /// Pause key went down this frame.
    pub pause_toggle: bool,
    /// Restart key went down this frame.
    pub restart: bool,
    /// Debug key that wipes the formation went down this frame.
    pub debug_clear: bool,
}

/// All phase-level player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a fresh game from the main menu.
    NewGame,
    /// Resume the saved game from the main menu.
    LoadGame,
    /// Freeze a running game.
    Pause,
    /// Unfreeze a paused game.
    Resume,
    /// Advance to the next wave after a clear.
    ContinueWave,
    /// Persist the cleared wave.
    SaveGame,
    /// Throw the current game away and start over.
    Restart,
    /// Leave for the main menu, keeping score and round.
    ReturnToMenu,
}

impl FrameInput {
    /// Horizontal axis: -1 left, 0 idle or both held, 1 right.
    pub fn axis(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }
}

impl From<MenuAction> for PlayerCommand {
    fn from(action: MenuAction) -> Self {
        match action {
            MenuAction::NewGame => Self::NewGame,
            MenuAction::LoadGame => Self::LoadGame,
            MenuAction::Resume => Self::Resume,
            MenuAction::ContinueWave => Self::ContinueWave,
            MenuAction::SaveGame => Self::SaveGame,
            MenuAction::Restart => Self::Restart,
            MenuAction::MainMenu => Self::ReturnToMenu,
        }
    }
}
