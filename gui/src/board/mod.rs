mod components;
mod events;
mod resources;
mod systems;

use bevy::prelude::*;

use events::{CellClicked, GameReset, MarkPlaced, StatusChanged};
use systems::*;

pub use resources::{BoardLayout, LocalGame};

pub const LINE_WIDTH: f32 = 2.0;
pub const LINE_COLOR: Color = Color::WHITE;
pub const X_COLOR: Color = Color::srgb(0.85, 0.25, 0.2);
pub const O_COLOR: Color = Color::srgb(0.2, 0.35, 0.85);
pub const STATUS_FONT_SIZE: f32 = 24.0;
pub const STATUS_MARGIN: f32 = 8.0;
pub const MARK_FONT_SCALE: f32 = 0.8;

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CellClicked>()
            .add_event::<MarkPlaced>()
            .add_event::<StatusChanged>()
            .add_event::<GameReset>()
            .add_systems(Startup, setup)
            .add_systems(
                Update,
                // ordered so every event is consumed the frame it is sent
                (
                    handle_mouse_input,
                    apply_action,
                    place_mark,
                    handle_reset,
                    clear_marks,
                    update_status,
                )
                    .chain(),
            );
    }
}
