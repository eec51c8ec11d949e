//! Revolver
//!
//! A turn-based elimination party game. Players pass a six-chamber
//! revolver around; each pull of the trigger either clicks or eliminates
//! the shooter, until one player is left or the chambers run out.
//!
//! # Modules
//!
//! - [`game_engine`] - The controller state machine, draw sources and events
//! - [`models`] - Players, constants and errors
//! - [`services`] - Terminal setup and play views
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presentation of the table and messages
//! - [`cli`] - Command-line options
//!
//! # Example
//!
//! ```rust
//! use revolver::{GameController, GameState};
//! use revolver::game_engine::events::NullSink;
//!
//! let mut game = GameController::new(42);
//! game.configure(["Alice", "Bob"]).unwrap();
//! game.start();
//! while game.fire(&mut NullSink) == GameState::Armed {}
//! assert!(!game.is_armed());
//! ```

pub mod game_engine;
pub mod models;
pub mod services;
pub mod io;
pub mod ui;
pub mod cli;

// Re-export commonly used types
pub use game_engine::{GameController, GameState, RoundOutcome};
pub use game_engine::draw::{DrawSource, ScriptedDraws, SeededDraws};
pub use game_engine::events::{EventSink, GameEvent};
pub use models::player::Player;
