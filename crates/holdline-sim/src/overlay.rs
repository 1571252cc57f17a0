//! Overlay descriptors for the menu-like phases.
//!
//! Built once when a phase is entered and dropped when it is left.

use holdline_core::enums::{GamePhase, MenuAction};
use holdline_core::state::OverlayView;

/// The overlay for `phase`, or `None` while playing.
pub fn for_phase(phase: GamePhase, round: u32, score: u32) -> Option<OverlayView> {
    let (title, caption, actions) = match phase {
        GamePhase::Playing => return None,
        GamePhase::Menu => (
            "Holdline".to_string(),
            None,
            vec![MenuAction::NewGame, MenuAction::LoadGame],
        ),
        GamePhase::Paused => (
            "Paused".to_string(),
            None,
            vec![MenuAction::Resume, MenuAction::Restart, MenuAction::MainMenu],
        ),
        GamePhase::WaveCleared => (
            format!("Round {round} Complete!"),
            Some(format!("Score: {score}")),
            vec![
                MenuAction::ContinueWave,
                MenuAction::SaveGame,
                MenuAction::MainMenu,
                MenuAction::Restart,
            ],
        ),
        GamePhase::GameOver => (
            "Game Over!".to_string(),
            Some(format!("Final Score: {score}")),
            vec![MenuAction::Restart, MenuAction::MainMenu],
        ),
    };
    Some(OverlayView {
        title,
        caption,
        actions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playing_has_no_overlay() {
        assert!(for_phase(GamePhase::Playing, 3, 100).is_none());
    }

    #[test]
    fn wave_cleared_reports_round_and_score() {
        let overlay = for_phase(GamePhase::WaveCleared, 3, 1240).unwrap();
        assert_eq!(overlay.title, "Round 3 Complete!");
        assert_eq!(overlay.caption.as_deref(), Some("Score: 1240"));
        assert_eq!(overlay.actions[0], MenuAction::ContinueWave);
    }

    #[test]
    fn game_over_offers_restart_and_menu() {
        let overlay = for_phase(GamePhase::GameOver, 1, 70).unwrap();
        assert_eq!(overlay.caption.as_deref(), Some("Final Score: 70"));
        assert_eq!(overlay.actions, vec![MenuAction::Restart, MenuAction::MainMenu]);
    }
}
