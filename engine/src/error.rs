#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("cell ({row}, {col}) is out of range")]
    OutOfRange { row: usize, col: usize },
    #[error("cell ({row}, {col}) is occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("can't make a move on a finished game")]
    GameAlreadyOver,
}

impl GameError {
    pub fn out_of_range(row: usize, col: usize) -> Self {
        Self::OutOfRange { row, col }
    }

    pub fn cell_occupied(row: usize, col: usize) -> Self {
        Self::CellOccupied { row, col }
    }
}

pub type GameResult<T> = Result<T, GameError>;
