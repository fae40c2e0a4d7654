use bevy::prelude::{Deref, Event};
use engine::{GameStatus, GridIndex, Player};

/// Event emitted when a mouse press lands on a board cell.
/// Contains a [`GridIndex`] of the cell under the cursor.
#[derive(Clone, Copy, Debug, Event)]
pub struct CellClicked {
    pos: GridIndex,
}

impl CellClicked {
    pub fn new(pos: GridIndex) -> Self {
        Self { pos }
    }

    pub fn pos(&self) -> GridIndex {
        self.pos
    }
}

/// Event emitted after an accepted move.
/// Contains the cell and the marker that was placed into it.
#[derive(Clone, Copy, Debug, Event)]
pub struct MarkPlaced {
    pos: GridIndex,
    player: Player,
}

impl MarkPlaced {
    pub fn new(pos: GridIndex, player: Player) -> Self {
        Self { pos, player }
    }

    pub fn pos(&self) -> GridIndex {
        self.pos
    }

    pub fn player(&self) -> Player {
        self.player
    }
}

/// Event emitted whenever the game status may have changed.
#[derive(Clone, Copy, Debug, Deref, Event)]
pub struct StatusChanged(pub GameStatus);

/// Event emitted when the game is restarted.
#[derive(Clone, Copy, Debug, Event)]
pub struct GameReset;
