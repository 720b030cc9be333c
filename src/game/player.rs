use std::fmt;

use super::board::Cell;

pub const PLAYER_ONE_NAME: &str = "Player 1";
pub const PLAYER_TWO_NAME: &str = "Player 2";

/// The two seats at the table. Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Convert player to the cell it owns
    pub fn to_cell(self) -> Cell {
        Cell::Owned(self)
    }

    /// Integer code used when rendering the board
    pub fn code(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

/// A named participant bound to one of the two seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Player {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Get player name for display
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
