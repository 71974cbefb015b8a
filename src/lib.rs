//! # Connect Four
//!
//! Connect Four for one human against a computer that plays uniformly at
//! random among the legal columns. Ships a line-oriented console front end and
//! a Ratatui terminal UI.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, four-in-a-row scan, round state machine
//! - [`ai`]: Agent trait and the random computer opponent
//! - [`session`]: First-mover policy, computer turns, scoreboard
//! - [`ui`]: Console and terminal front ends
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: Logger setup
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod session;
pub mod ui;
