//! Core types and definitions for the HOLDLINE simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! entities, input and commands, render snapshots, events, and constants.
//! It has no dependency on any window, renderer or runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
