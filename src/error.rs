use std::path::PathBuf;

/// Reasons the board refuses a piece. Column indices are 0-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("column {column} is outside the board (0..{columns})")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Reasons a move request is rejected. Column numbers are the 1-based values
/// a player types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("'{0}' is not a column number")]
    NotANumber(String),

    #[error("column {column} is out of range (1-{columns})")]
    ColumnOutOfRange { column: i64, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

impl From<PlaceError> for MoveError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::ColumnOutOfRange { column, columns } => MoveError::ColumnOutOfRange {
                column: i64::try_from(column).map_or(i64::MAX, |c| c.saturating_add(1)),
                columns,
            },
            PlaceError::ColumnFull { column } => MoveError::ColumnFull { column: column + 1 },
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_error_display() {
        let err = PlaceError::ColumnOutOfRange { column: 9, columns: 7 };
        assert_eq!(err.to_string(), "column 9 is outside the board (0..7)");
        assert_eq!(PlaceError::ColumnFull { column: 2 }.to_string(), "column 2 is full");
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::NotANumber("a".to_string());
        assert_eq!(err.to_string(), "'a' is not a column number");

        let err = MoveError::ColumnOutOfRange { column: 0, columns: 7 };
        assert_eq!(err.to_string(), "column 0 is out of range (1-7)");
    }

    #[test]
    fn test_place_error_converts_to_one_based() {
        assert_eq!(
            MoveError::from(PlaceError::ColumnFull { column: 0 }),
            MoveError::ColumnFull { column: 1 }
        );
        assert_eq!(
            MoveError::from(PlaceError::ColumnOutOfRange { column: 7, columns: 7 }),
            MoveError::ColumnOutOfRange { column: 8, columns: 7 }
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("goal must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: goal must be > 0");
    }
}
