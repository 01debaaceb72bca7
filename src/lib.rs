//! Rules engine for a walled-grid snake game.
//!
//! The library owns the game state and its rules: snake movement, collisions,
//! food placement, scoring, and the mode state machine. A front end feeds it
//! [`input::Command`]s and reads [`mode::RenderModel`] snapshots back.

pub mod config;
pub mod error;
pub mod food;
pub mod grid;
pub mod input;
pub mod logging;
pub mod mode;
pub mod renderer;
pub mod score;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
