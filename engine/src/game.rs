use std::fmt::{Display, Formatter};

use crate::board::{Board, BoardCell, GridIndex};
use crate::error::{GameError, GameResult};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Returns the player that moves after `self`.
    pub fn opponent(&self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::O => f.write_str("O"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

fn winning_lines() -> [(GridIndex, GridIndex, GridIndex); 8] {
    [
        (
            GridIndex::new(0, 0),
            GridIndex::new(0, 1),
            GridIndex::new(0, 2),
        ),
        (
            GridIndex::new(1, 0),
            GridIndex::new(1, 1),
            GridIndex::new(1, 2),
        ),
        (
            GridIndex::new(2, 0),
            GridIndex::new(2, 1),
            GridIndex::new(2, 2),
        ),
        (
            GridIndex::new(0, 0),
            GridIndex::new(1, 0),
            GridIndex::new(2, 0),
        ),
        (
            GridIndex::new(0, 1),
            GridIndex::new(1, 1),
            GridIndex::new(2, 1),
        ),
        (
            GridIndex::new(0, 2),
            GridIndex::new(1, 2),
            GridIndex::new(2, 2),
        ),
        (
            GridIndex::new(0, 0),
            GridIndex::new(1, 1),
            GridIndex::new(2, 2),
        ),
        (
            GridIndex::new(2, 0),
            GridIndex::new(1, 1),
            GridIndex::new(0, 2),
        ),
    ]
}

/// Two player game on a 3x3 board.
/// Owns the board, the marker of the player whose turn it is
/// and the status derived from the board after every accepted move.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Places the current player's marker at `position` and returns the new status.
    /// The turn passes to the opponent only if the game is still in progress.
    pub fn make_move(&mut self, position: GridIndex) -> GameResult<GameStatus> {
        if self.status.is_finished() {
            return Err(GameError::GameAlreadyOver);
        }
        if !position.in_bounds() {
            return Err(GameError::out_of_range(position.row(), position.col()));
        }

        let cell = &mut self.board[position];
        if cell.is_some() {
            return Err(GameError::cell_occupied(position.row(), position.col()));
        }
        *cell = self.current_player.into();

        Ok(self.update_status())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Reinitializes the game to the start state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn update_status(&mut self) -> GameStatus {
        for (idx1, idx2, idx3) in winning_lines() {
            if let (BoardCell(Some(s1)), BoardCell(Some(s2)), BoardCell(Some(s3))) =
                (self.board[idx1], self.board[idx2], self.board[idx3])
            {
                if s1 == s2 && s2 == s3 {
                    self.status = GameStatus::Won(s1);
                    return self.status;
                }
            }
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            return self.status;
        }

        self.current_player = self.current_player.opponent();
        self.status
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::BOARD_SIZE;

    // X takes the line cells in order, O fills cells outside the line.
    // Two filler moves can't complete a line, so X always wins on the 5th move.
    fn play_line_for_x(line: (GridIndex, GridIndex, GridIndex)) -> GameEngine {
        let mut game = GameEngine::new();
        let line_cells = [line.0, line.1, line.2];
        let mut fillers = (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| GridIndex::new(row, col)))
            .filter(|pos| !line_cells.contains(pos));
        for (i, &pos) in line_cells.iter().enumerate() {
            game.make_move(pos).unwrap();
            if i < 2 {
                game.make_move(fillers.next().unwrap()).unwrap();
            }
        }
        game
    }

    #[test]
    fn x_moves_first() {
        let game = GameEngine::new();
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn every_winning_line_is_detected() {
        for line in winning_lines() {
            let game = play_line_for_x(line);
            assert_eq!(game.status(), GameStatus::Won(Player::X), "line {:?}", line);
            assert_eq!(game.winner(), Some(Player::X));
        }
    }

    #[test]
    fn winning_move_does_not_pass_the_turn() {
        let mut game = GameEngine::new();
        game.make_move(GridIndex::new(0, 0)).unwrap();
        game.make_move(GridIndex::new(1, 0)).unwrap();
        game.make_move(GridIndex::new(0, 1)).unwrap();
        game.make_move(GridIndex::new(1, 1)).unwrap();
        let status = game.make_move(GridIndex::new(0, 2)).unwrap();

        assert_eq!(status, GameStatus::Won(Player::X));
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn o_wins_by_completing_a_line() {
        let mut game = GameEngine::new();
        game.make_move(GridIndex::new(0, 0)).unwrap();
        game.make_move(GridIndex::new(1, 0)).unwrap();
        game.make_move(GridIndex::new(0, 1)).unwrap();
        game.make_move(GridIndex::new(1, 1)).unwrap();
        game.make_move(GridIndex::new(2, 2)).unwrap();
        let status = game.make_move(GridIndex::new(1, 2)).unwrap();

        assert_eq!(status, GameStatus::Won(Player::O));
        assert_eq!(game.winner(), Some(Player::O));
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn win_on_the_last_empty_cell_is_not_a_draw() {
        let mut game = GameEngine::new();
        for pos in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (1, 1),
            (2, 1),
            (2, 0),
        ] {
            game.make_move(pos.into()).unwrap();
        }
        assert_eq!(game.status(), GameStatus::InProgress);

        // the board fills up and the third column completes at once
        let status = game.make_move(GridIndex::new(2, 2)).unwrap();
        assert!(game.board().is_full());
        assert_eq!(status, GameStatus::Won(Player::X));
    }

    #[test]
    fn finished_game_rejects_moves() {
        let mut game = play_line_for_x(winning_lines()[0]);
        assert_eq!(
            game.make_move(GridIndex::new(2, 2)),
            Err(GameError::GameAlreadyOver)
        );
    }

    #[test]
    fn occupied_cell_is_rejected() {
        let mut game = GameEngine::new();
        game.make_move(GridIndex::new(1, 1)).unwrap();
        assert_eq!(
            game.make_move(GridIndex::new(1, 1)),
            Err(GameError::cell_occupied(1, 1))
        );
    }

    #[test]
    fn out_of_range_move_is_rejected() {
        let mut game = GameEngine::new();
        assert_eq!(
            game.make_move(GridIndex::new(0, 3)),
            Err(GameError::out_of_range(0, 3))
        );
        assert_eq!(
            game.make_move(GridIndex::new(3, 0)),
            Err(GameError::out_of_range(3, 0))
        );
    }

    #[test]
    fn reset_restores_start_state() {
        let mut game = GameEngine::new();
        game.make_move(GridIndex::new(1, 1)).unwrap();
        game.make_move(GridIndex::new(0, 0)).unwrap();

        game.reset();
        assert_eq!(game.board(), GameEngine::new().board());
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
    }
}
