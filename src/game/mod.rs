//! Core Connect Four game logic: the gravity board with its streak scans,
//! player identities, and the session that alternates turns and records the
//! result.

mod board;
mod player;
mod session;

pub use board::{Board, Cell, DEFAULT_COLUMNS, DEFAULT_GOAL, DEFAULT_ROWS};
pub use player::{Player, PlayerId, PLAYER_ONE_NAME, PLAYER_TWO_NAME};
pub use session::{GameOutcome, GameSession, Move};
