//! # Smart Connect Four
//!
//! A rule-based Connect Four agent. Given a board seen from the side to move
//! and the legal columns, it wins when it can, blocks when it must, looks one
//! ply ahead for double threats, and otherwise prefers the center.
//!
//! ## Modules
//!
//! - [`game`] — Board with gravity placement and four-in-a-row detection,
//!   action masks, game state machine
//! - [`ai`] — Agent trait, threat analysis, rule-based and random agents
//! - [`tournament`] — Match play and round-robin standings
//! - [`config`] — TOML configuration loading, validation and logging setup
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod tournament;
