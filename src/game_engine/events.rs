//! Structured notifications emitted by the controller.

use std::fmt;

use crate::models::constants::Flash;
use crate::models::player::Player;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Survived { player: Player },
    Died { player: Player },
    Winner { player: Player },
    EveryoneDied,
    /// The last chamber was spent with two or more players standing.
    ChambersExhausted,
    /// `fire` was reached with no chambers left.
    NoChambersLeft,
}

impl GameEvent {
    /// Shots carry a flash; round outcomes do not.
    pub fn flash(&self) -> Option<Flash> {
        match self {
            GameEvent::Survived { .. } => Some(Flash::Green),
            GameEvent::Died { .. } => Some(Flash::Red),
            _ => None,
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameEvent::Survived { player } => {
                write!(f, "{} fired... click. 🔥 They survived.", player)
            }
            GameEvent::Died { player } => write!(f, "{} fired... BANG! 💀 They died.", player),
            GameEvent::Winner { player } => write!(f, "🎉 {} is the winner! 🎉", player),
            GameEvent::EveryoneDied => write!(f, "💀 Everyone died! Game over. 💀"),
            GameEvent::ChambersExhausted | GameEvent::NoChambersLeft => {
                write!(f, "No more chambers left! It's a draw.")
            }
        }
    }
}

/// Receives every event the controller emits, in order.
pub trait EventSink {
    fn notify(&mut self, event: &GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Discards events; the controller still records the latest one.
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: &GameEvent) {}
}
