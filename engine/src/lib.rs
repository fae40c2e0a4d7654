pub mod board;
pub mod error;
pub mod game;

pub use board::{Board, BoardCell, GridIndex, BOARD_SIZE};
pub use error::{GameError, GameResult};
pub use game::{GameEngine, GameStatus, Player};
