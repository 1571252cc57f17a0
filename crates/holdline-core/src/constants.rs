//! Simulation constants and tuning parameters.
//!
//! Coordinates are arena-local with the origin at the top-left corner and
//! y growing downward, so "upward" means decreasing y.

// --- Arena ---

/// Arena width in world units.
pub const ARENA_WIDTH: f32 = 800.0;

/// Arena height in world units.
pub const ARENA_HEIGHT: f32 = 600.0;

// --- Player ---

/// Player box width.
pub const PLAYER_WIDTH: f32 = 60.0;

/// Player box height.
pub const PLAYER_HEIGHT: f32 = 20.0;

/// Horizontal player speed (units per second).
pub const PLAYER_SPEED: f32 = 250.0;

/// Default spawn point (box centre): horizontally centred, 10% above the floor.
pub const PLAYER_SPAWN_X: f32 = ARENA_WIDTH / 2.0;
pub const PLAYER_SPAWN_Y: f32 = ARENA_HEIGHT - ARENA_HEIGHT * 0.1;

/// Health points per life.
pub const PLAYER_MAX_HEALTH: u32 = 2;

/// Permanent lives granted by a fresh game.
pub const PLAYER_STARTING_LIVES: u32 = 3;

/// Minimum time between two player shots (seconds).
pub const PLAYER_FIRE_COOLDOWN_SECS: f32 = 0.5;

/// Time a dead player waits before respawning (seconds).
pub const RESPAWN_DELAY_SECS: f32 = 5.0;

// --- Projectiles ---

pub const PROJECTILE_WIDTH: f32 = 5.0;
pub const PROJECTILE_HEIGHT: f32 = 15.0;

/// Vertical projectile speed for both factions (units per second).
pub const PROJECTILE_SPEED: f32 = 600.0;

/// Maximum live player projectiles.
pub const MAX_PLAYER_PROJECTILES: usize = 50;

/// Maximum live enemy projectiles.
pub const MAX_ENEMY_PROJECTILES: usize = 50;

// --- Formation ---

pub const ENEMY_WIDTH: f32 = 50.0;
pub const ENEMY_HEIGHT: f32 = 20.0;

/// Fixed column count of the formation grid.
pub const FORMATION_COLUMNS: u32 = 10;

/// Horizontal gap between grid columns.
pub const FORMATION_MARGIN_X: f32 = 10.0;

/// Vertical gap between grid rows.
pub const FORMATION_MARGIN_Y: f32 = 15.0;

/// Distance between the tops of two vertically adjacent units.
pub const FORMATION_ROW_PITCH: f32 = ENEMY_HEIGHT + FORMATION_MARGIN_Y;

/// Share of the free vertical space the grid is lifted above centre.
pub const FORMATION_LIFT: f32 = 0.40;

/// Alignment tolerance used when deciding whether a unit sits directly beneath another.
pub const FORMATION_ALIGN_EPSILON: f32 = 0.01;

/// Enemies in the first wave.
pub const WAVE_BASE_ENEMIES: u32 = 50;

/// Extra enemies per wave after the first.
pub const WAVE_ENEMIES_PER_ROUND: u32 = 5;

/// Descent per movement tick above the step threshold.
pub const FORMATION_STEP_LARGE: f32 = 3.0;

/// Descent per movement tick at or below the step threshold.
pub const FORMATION_STEP_SMALL: f32 = 1.0;

/// `harder` value above which the formation takes the large step.
pub const FORMATION_STEP_THRESHOLD: f32 = 0.3;

/// An eligible unit whose top edge reaches this share of the arena height ends the game.
pub const LOSS_LINE_FRACTION: f32 = 0.75;

/// Upper bound of units firing in one volley.
pub const MAX_VOLLEY_SIZE: usize = 5;

/// Seconds after wave start during which no unit is eligible to fire.
pub const WAVE_GRACE_PERIOD_SECS: f32 = 2.0;

/// Highest playable round. Saves beyond it are rejected and later rounds
/// repeat its composition.
pub const MAX_ROUND: u32 = 99;

// --- Difficulty ---

/// Per-round difficulty increment `k`.
pub const DEFAULT_DIFFICULTY_STEP: f32 = 0.15;

/// Upper clamp of the difficulty scalar.
pub const DIFFICULTY_CLAMP: f32 = 1.5;

/// Numerator of the thinning term (`DIFFICULTY_THIN_NUMERATOR / live_count`).
pub const DIFFICULTY_THIN_NUMERATOR: f32 = 5.0;

/// Base value used once the formation is down to its last few units.
pub const DIFFICULTY_ENDGAME_BASE: f32 = 1.3;

/// Live count at or below which the endgame base applies.
pub const DIFFICULTY_ENDGAME_COUNT: usize = 2;

/// Movement period is `MOVE_PERIOD_BASE - harder`.
pub const MOVE_PERIOD_BASE: f32 = 2.0;

/// Fire period is `FIRE_PERIOD_BASE - harder`.
pub const FIRE_PERIOD_BASE: f32 = 2.5;

// --- Shields ---

pub const SHIELD_WIDTH: f32 = 50.0;
pub const SHIELD_HEIGHT: f32 = 30.0;
pub const SHIELD_MAX_HEALTH: u32 = 8;

/// Shields in a fresh batch.
pub const SHIELD_BATCH_SIZE: usize = 4;

/// Horizontal gap between shields.
pub const SHIELD_GAP: f32 = 35.0 * 3.0;

/// Vertical position of the shield band as a share of the arena height.
pub const SHIELD_BAND_FRACTION: f32 = 0.8;

/// Health restored to each surviving shield at wave advance.
pub const SHIELD_HEAL_PER_WAVE: u32 = 2;

// --- Scoring ---

/// Score for a hit that leaves the enemy alive.
pub const SCORE_ENEMY_HIT: u32 = 10;

/// Score for the hit that destroys an enemy.
pub const SCORE_ENEMY_KILL: u32 = 50;
