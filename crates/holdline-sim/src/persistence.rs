//! Save-game persistence.
//!
//! The record is a flat line-oriented text file, one value per line:
//! resumed round, score, player health, player lives, shield count, then
//! health, x and y for each shield. Encoding and parsing are kept apart from
//! file I/O so the codec can be exercised without touching the disk.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use glam::Vec2;

use holdline_core::components::{Health, Player, Shield};
use holdline_core::constants::{MAX_ROUND, PLAYER_MAX_HEALTH, SHIELD_MAX_HEALTH};

use crate::battlefield::Battlefield;

/// Everything a save carries.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRecord {
    /// The round play resumes at: one past the round that was cleared.
    pub round: u32,
    pub score: u32,
    pub player_health: u32,
    pub player_lives: u32,
    /// Surviving shields in layout order.
    pub shields: Vec<SavedShield>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavedShield {
    pub health: u32,
    pub position: Vec2,
}

#[derive(Debug)]
pub enum PersistenceError {
    Io(io::Error),
    Malformed { line: usize, reason: String },
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "save file I/O failed: {err}"),
            Self::Malformed { line, reason } => {
                write!(f, "malformed save record at line {line}: {reason}")
            }
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed { .. } => None,
        }
    }
}

impl From<io::Error> for PersistenceError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl SaveRecord {
    /// Capture a cleared wave. The stored round is the next one to play.
    pub fn capture(field: &Battlefield) -> Self {
        Self {
            round: field.round.saturating_add(1).min(MAX_ROUND),
            score: field.score,
            player_health: field.player.health.current,
            player_lives: field.player.total_lives,
            shields: field
                .shields
                .iter()
                .map(|s| SavedShield {
                    health: s.health.current,
                    position: s.position,
                })
                .collect(),
        }
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![
            self.round.to_string(),
            self.score.to_string(),
            self.player_health.to_string(),
            self.player_lives.to_string(),
            self.shields.len().to_string(),
        ];
        for shield in &self.shields {
            lines.push(shield.health.to_string());
            lines.push(shield.position.x.to_string());
            lines.push(shield.position.y.to_string());
        }
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Parse a whole record. Nothing is returned unless every field is valid.
    pub fn parse(text: &str) -> Result<Self, PersistenceError> {
        let mut tokens = Tokens::new(text);

        let round: u32 = tokens.next("round")?;
        if round == 0 || round > MAX_ROUND {
            return Err(tokens.malformed(&format!("round must be in 1..={MAX_ROUND}")));
        }
        let score = tokens.next("score")?;
        let player_health = tokens.next("player health")?;
        let player_lives = tokens.next("player lives")?;
        let count: usize = tokens.next("shield count")?;

        let mut shields = Vec::new();
        for _ in 0..count {
            let health: u32 = tokens.next("shield health")?;
            if health == 0 {
                return Err(tokens.malformed("shield health must be positive"));
            }
            let x: f32 = tokens.next("shield x")?;
            let y: f32 = tokens.next("shield y")?;
            if !x.is_finite() || !y.is_finite() {
                return Err(tokens.malformed("shield position must be finite"));
            }
            shields.push(SavedShield {
                health,
                position: Vec2::new(x, y),
            });
        }

        Ok(Self {
            round,
            score,
            player_health,
            player_lives,
            shields,
        })
    }

    /// Overwrite the persisted fields of `field`. Health above the maximum is
    /// clamped; a player saved at zero health comes back down, waiting to respawn.
    pub fn restore(&self, field: &mut Battlefield) {
        field.round = self.round;
        field.score = self.score;

        let mut player = Player::new();
        player.health.current = self.player_health.min(PLAYER_MAX_HEALTH);
        player.total_lives = self.player_lives;
        player.alive = player.health.current > 0;
        field.player = player;

        field.shields = self
            .shields
            .iter()
            .map(|saved| Shield {
                position: saved.position,
                health: Health {
                    current: saved.health.min(SHIELD_MAX_HEALTH),
                    max: SHIELD_MAX_HEALTH,
                },
            })
            .collect();
    }
}

/// Whitespace tokens tagged with their 1-based line number.
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let inner = text
            .lines()
            .enumerate()
            .flat_map(|(i, l)| l.split_whitespace().map(move |t| (i + 1, t)));
        Self {
            inner: Box::new(inner),
            line: 0,
        }
    }

    fn next<T: FromStr>(&mut self, field: &str) -> Result<T, PersistenceError> {
        let Some((line, token)) = self.inner.next() else {
            return Err(self.malformed(&format!("missing {field}")));
        };
        self.line = line;
        token
            .parse()
            .map_err(|_| self.malformed(&format!("invalid {field} {token:?}")))
    }

    fn malformed(&self, reason: &str) -> PersistenceError {
        PersistenceError::Malformed {
            line: self.line,
            reason: reason.to_string(),
        }
    }
}

pub fn save_to_file(path: &Path, record: &SaveRecord) -> Result<(), PersistenceError> {
    fs::write(path, record.to_text())?;
    Ok(())
}

pub fn load_from_file(path: &Path) -> Result<SaveRecord, PersistenceError> {
    let text = fs::read_to_string(path)?;
    SaveRecord::parse(&text)
}
