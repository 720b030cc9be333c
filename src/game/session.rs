use std::num::{IntErrorKind, ParseIntError};

use crate::config::GameConfig;
use crate::error::MoveError;

use super::{Board, Player, PlayerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(PlayerId),
    Draw,
}

/// An accepted placement: who moved and where the piece landed (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub player: PlayerId,
    pub row: usize,
    pub column: usize,
}

/// A two-player game in progress on one board.
///
/// The outcome is written at most once. Moves are still accepted after the
/// game is decided, as long as the board has room, but they never change the
/// recorded outcome. The turn flips on every accepted move, including the one
/// that decides the game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    current_player: PlayerId,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// Create a session from a configuration. Player one starts.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_players(
            config.player_one.clone(),
            config.player_two.clone(),
            Board::from_config(config),
        )
    }

    pub fn with_players(
        player_one: impl Into<String>,
        player_two: impl Into<String>,
        board: Board,
    ) -> Self {
        GameSession {
            board,
            players: [
                Player::new(PlayerId::One, player_one),
                Player::new(PlayerId::Two, player_two),
            ],
            current_player: PlayerId::One,
            outcome: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::One => &self.players[0],
            PlayerId::Two => &self.players[1],
        }
    }

    /// The player whose piece the next accepted move places
    pub fn current_turn(&self) -> &Player {
        self.player(self.current_player)
    }

    /// Get game outcome if game is over
    pub fn result(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.outcome {
            Some(GameOutcome::Winner(id)) => Some(self.player(id)),
            _ => None,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of columns that still have room
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.board.columns())
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }

    /// Play a move typed by a player: a 1-based column number, surrounding
    /// whitespace ignored.
    pub fn attempt_move(&mut self, input: &str) -> Result<Move, MoveError> {
        let input = input.trim();
        let columns = self.board.columns();
        let number: i64 = input.parse().map_err(|err: ParseIntError| match err.kind() {
            IntErrorKind::PosOverflow => MoveError::ColumnOutOfRange {
                column: i64::MAX,
                columns,
            },
            IntErrorKind::NegOverflow => MoveError::ColumnOutOfRange {
                column: i64::MIN,
                columns,
            },
            _ => MoveError::NotANumber(input.to_string()),
        })?;

        let column = usize::try_from(number)
            .ok()
            .and_then(|number| number.checked_sub(1))
            .filter(|&column| column < columns)
            .ok_or(MoveError::ColumnOutOfRange {
                column: number,
                columns,
            })?;

        self.play_column(column)
    }

    /// Play a move into a 0-based column.
    pub fn play_column(&mut self, column: usize) -> Result<Move, MoveError> {
        let player = self.current_player;
        let row = self.board.place(player, column)?;
        log::debug!(
            "{} placed at row {}, column {}",
            self.player(player).name(),
            row,
            column
        );

        // There can be only one result
        if self.outcome.is_none() {
            if self.board.has_run(player, row, column) {
                self.outcome = Some(GameOutcome::Winner(player));
                log::info!("{} wins", self.player(player).name());
            } else if self.board.is_full() {
                self.outcome = Some(GameOutcome::Draw);
                log::info!("board full, game drawn");
            }
        }

        self.current_player = player.other();

        Ok(Move {
            player,
            row,
            column,
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
