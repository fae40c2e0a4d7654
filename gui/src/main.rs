mod board;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use clap::Parser;

use board::{BoardLayout, BoardPlugin, LocalGame};

const BACKGROUND_COLOR: Color = Color::srgb(0.38, 0.5, 0.38);

/// Two player tic-tac-toe in a window.
#[derive(Parser)]
#[command(name = "gui", about = "Two player tic-tac-toe in a window")]
struct Cli {
    /// Cell size in pixels
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u32).range(60..=400))]
    cell_size: u32,
}

fn init_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn main() {
    let cli = Cli::parse();
    let layout = BoardLayout::new(cli.cell_size as f32);
    let side = layout.board_size();
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Tic Tac Toe".to_string(),
                    resolution: WindowResolution::new(side, side),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
            BoardPlugin,
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(layout)
        .insert_resource(LocalGame::default())
        .add_systems(Startup, init_camera)
        .run();
}
