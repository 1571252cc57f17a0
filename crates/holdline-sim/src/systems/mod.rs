//! Per-frame systems that operate on the `Battlefield`.
//!
//! Systems are plain functions that borrow the pieces of the aggregate they
//! touch. They do not own state; all state lives in the aggregate.

pub mod collision;
pub mod formation;
pub mod player;
pub mod projectiles;
pub mod snapshot;
pub mod wave_director;
