//! Domain models
//!
//! This module contains the data the game is played with. Models are
//! pure data structures with minimal logic.

pub mod constants;
pub mod player;
pub mod errors;
