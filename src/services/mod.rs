//! Game services
//!
//! The terminal views: setup collects the player names, game runs the
//! command loop against a `GameController`.

pub mod game;
pub mod setup;
