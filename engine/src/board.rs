use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::game::Player;

pub const BOARD_SIZE: usize = 3;

/// Index struct to access cells of the [`Board`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GridIndex {
    row: usize,
    col: usize,
}

impl From<(usize, usize)> for GridIndex {
    fn from(value: (usize, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Display for GridIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl GridIndex {
    /// Constructs a new [`GridIndex`].
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns value of `self.row`
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns value of `self.col`
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns `true` if both `row` and `col` address a cell of the [`Board`].
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoardCell(pub Option<Player>);

impl Display for BoardCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(player) => write!(f, "[{}]", player),
            None => f.write_str("[ ]"),
        }
    }
}

impl From<Player> for BoardCell {
    fn from(value: Player) -> Self {
        Self(Some(value))
    }
}

impl Deref for BoardCell {
    type Target = Option<Player>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for BoardCell {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Fixed 3x3 array of cells, addressed by [`GridIndex`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Board {
    cells: [[BoardCell; BOARD_SIZE]; BOARD_SIZE],
}

impl Deref for Board {
    type Target = [[BoardCell; BOARD_SIZE]; BOARD_SIZE];

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Index<GridIndex> for Board {
    type Output = BoardCell;

    fn index(&self, index: GridIndex) -> &Self::Output {
        &self.cells[index.row()][index.col()]
    }
}

impl IndexMut<GridIndex> for Board {
    fn index_mut(&mut self, index: GridIndex) -> &mut Self::Output {
        &mut self.cells[index.row()][index.col()]
    }
}

impl Board {
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_some())
    }
}
