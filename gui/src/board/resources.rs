use bevy::prelude::{Deref, DerefMut, Resource};
use engine::{GameEngine, BOARD_SIZE};

/// The game played in this window.
#[derive(Debug, Default, Deref, DerefMut, Resource)]
pub struct LocalGame(pub GameEngine);

/// Pixel dimensions of the board grid.
#[derive(Clone, Copy, Debug, Resource)]
pub struct BoardLayout {
    cell_size: f32,
}

impl BoardLayout {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn board_size(&self) -> f32 {
        self.cell_size * BOARD_SIZE as f32
    }
}
