//! # Board Games
//!
//! Connect Four and a simplified Checkers sharing one grid, rules engine and
//! turn state machine, played through a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: grid, players, rules, turns, sessions
//! - [`ui`] — Terminal UI: menu, board view, piece selection
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
