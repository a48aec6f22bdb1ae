//! Skydash - Terminal Flappy-Bird Arcade Game Library
//!
//! This module exposes the simulation logic for testing and external use.

pub mod audio;
pub mod build_info;
pub mod collision;
pub mod constants;
pub mod game_logic;
pub mod game_state;
pub mod input;
pub mod physics;
pub mod save_manager;
pub mod scoring;
pub mod spawner;
pub mod ui;

pub use constants::FRAME_INTERVAL_MS;
pub use game_logic::GameEvent;
pub use game_state::{GamePhase, GameSession};
