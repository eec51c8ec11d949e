//! User interface and presentation
//!
//! Presenters format the table and event messages, keeping text out of
//! the game controller.

pub mod presenters;
