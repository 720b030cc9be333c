//! # c4
//!
//! A simple, text-based Connect Four game. Two players take turns dropping
//! pieces into the columns of a gravity board; the first to line up `goal`
//! pieces horizontally, vertically or diagonally wins.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, game session
//! - [`console`] — Line-oriented terminal shell
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
