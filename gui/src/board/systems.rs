use bevy::input::mouse::MouseButtonInput;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use engine::{GameStatus, GridIndex, Player, BOARD_SIZE};

use super::components::{GridLine, Mark, StatusText};
use super::events::{CellClicked, GameReset, MarkPlaced, StatusChanged};
use super::resources::{BoardLayout, LocalGame};
use super::{
    LINE_COLOR, LINE_WIDTH, MARK_FONT_SCALE, O_COLOR, STATUS_FONT_SIZE, STATUS_MARGIN, X_COLOR,
};

/// Returns the board cell under a window cursor position,
/// mapping coordinates to cells by whole cell sizes.
fn cursor_to_cell(layout: &BoardLayout, cursor: Vec2) -> Option<GridIndex> {
    if cursor.x < 0.0 || cursor.y < 0.0 {
        return None;
    }
    let pos = GridIndex::new(
        (cursor.y / layout.cell_size()) as usize,
        (cursor.x / layout.cell_size()) as usize,
    );
    pos.in_bounds().then_some(pos)
}

/// Returns world coordinates of a cell center, the window center being the origin.
fn cell_center(layout: &BoardLayout, pos: GridIndex) -> Vec2 {
    let half = layout.board_size() / 2.0;
    let x = (pos.col() as f32 + 0.5) * layout.cell_size() - half;
    let y = half - (pos.row() as f32 + 0.5) * layout.cell_size();
    Vec2::new(x, y)
}

fn status_line(game: &LocalGame) -> String {
    match game.status() {
        GameStatus::InProgress => format!("Player {} to move", game.current_player()),
        GameStatus::Won(player) => format!("Player {} wins! Press R to restart", player),
        GameStatus::Draw => "It is a draw! Press R to restart".to_string(),
    }
}

/// Draws the grid lines and the status line.
pub fn setup(mut commands: Commands, game: Res<LocalGame>, layout: Res<BoardLayout>) {
    let board_size = layout.board_size();
    for i in 1..BOARD_SIZE {
        let offset = layout.cell_size() * i as f32 - board_size / 2.0;
        commands.spawn((
            Sprite::from_color(LINE_COLOR, Vec2::new(LINE_WIDTH, board_size)),
            Transform::from_xyz(offset, 0.0, 1.0),
            GridLine,
        ));
        commands.spawn((
            Sprite::from_color(LINE_COLOR, Vec2::new(board_size, LINE_WIDTH)),
            Transform::from_xyz(0.0, offset, 1.0),
            GridLine,
        ));
    }
    commands.spawn((
        Text::new(status_line(&game)),
        TextFont {
            font_size: STATUS_FONT_SIZE,
            ..default()
        },
        TextColor(LINE_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(STATUS_MARGIN),
            left: Val::Px(STATUS_MARGIN),
            ..default()
        },
        StatusText,
    ));
}

/// Receive mouse press events and send [`CellClicked`] for the cell under the cursor.
pub fn handle_mouse_input(
    window: Query<&Window, With<PrimaryWindow>>,
    layout: Res<BoardLayout>,
    mut button_evr: EventReader<MouseButtonInput>,
    mut clicked: EventWriter<CellClicked>,
) {
    let Ok(window) = window.get_single() else {
        error!("failed to get single window");
        return;
    };
    for event in button_evr.read() {
        if event.state.is_pressed() {
            if let Some(pos) = window
                .cursor_position()
                .and_then(|cursor| cursor_to_cell(&layout, cursor))
            {
                debug!("cell {} pressed", pos);
                clicked.send(CellClicked::new(pos));
            }
        }
    }
}

/// Receive [`CellClicked`] event, apply the move to the game and send
/// [`MarkPlaced`] and [`StatusChanged`]. Clicks are ignored once the game is over.
pub fn apply_action(
    mut game: ResMut<LocalGame>,
    mut cell_clicked: EventReader<CellClicked>,
    mut mark_placed: EventWriter<MarkPlaced>,
    mut status_changed: EventWriter<StatusChanged>,
) {
    for event in cell_clicked.read() {
        if game.status().is_finished() {
            continue;
        }
        let player = game.current_player();
        match game.make_move(event.pos()) {
            Ok(status) => {
                mark_placed.send(MarkPlaced::new(event.pos(), player));
                status_changed.send(StatusChanged(status));
            }
            Err(err) => debug!("move to {} rejected: {}", event.pos(), err),
        }
    }
}

/// Receive [`MarkPlaced`] event and spawn the marker glyph at the cell center.
pub fn place_mark(
    mut commands: Commands,
    layout: Res<BoardLayout>,
    mut mark_placed: EventReader<MarkPlaced>,
) {
    for event in mark_placed.read() {
        let color = match event.player() {
            Player::X => X_COLOR,
            Player::O => O_COLOR,
        };
        commands.spawn((
            Text2d::new(event.player().to_string()),
            TextFont {
                font_size: layout.cell_size() * MARK_FONT_SCALE,
                ..default()
            },
            TextColor(color),
            Transform::from_translation(cell_center(&layout, event.pos()).extend(1.0)),
            Mark,
        ));
    }
}

/// Receive [`StatusChanged`] event and rewrite the status line.
pub fn update_status(
    game: Res<LocalGame>,
    mut status_text: Query<&mut Text, With<StatusText>>,
    mut status_changed: EventReader<StatusChanged>,
) {
    if status_changed.read().last().is_none() {
        return;
    }
    let Ok(mut text) = status_text.get_single_mut() else {
        warn!("failed to get single status text");
        return;
    };
    text.0 = status_line(&game);
}

/// Restart the game when the R key is pressed, at any point including after game end.
pub fn handle_reset(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game: ResMut<LocalGame>,
    mut game_reset: EventWriter<GameReset>,
    mut status_changed: EventWriter<StatusChanged>,
) {
    if keyboard_input.just_pressed(KeyCode::KeyR) {
        game.reset();
        game_reset.send(GameReset);
        status_changed.send(StatusChanged(game.status()));
    }
}

/// Receive [`GameReset`] event and despawn every placed marker.
pub fn clear_marks(
    mut commands: Commands,
    marks: Query<Entity, With<Mark>>,
    mut game_reset: EventReader<GameReset>,
) {
    if game_reset.is_empty() {
        return;
    }
    game_reset.clear();
    for entity in marks.iter() {
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cursor_maps_to_cells_by_cell_size() {
        let layout = BoardLayout::new(100.0);
        // cell centers, row by row
        itertools::assert_equal(
            (0..BOARD_SIZE)
                .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
                .map(|(row, col)| {
                    let cursor =
                        Vec2::new(col as f32 * 100.0 + 50.0, row as f32 * 100.0 + 50.0);
                    cursor_to_cell(&layout, cursor).unwrap()
                }),
            (0..BOARD_SIZE)
                .flat_map(|row| (0..BOARD_SIZE).map(move |col| GridIndex::new(row, col))),
        );
    }

    #[test]
    fn cursor_on_cell_boundary_belongs_to_the_next_cell() {
        let layout = BoardLayout::new(100.0);
        assert_eq!(
            cursor_to_cell(&layout, Vec2::new(0.0, 0.0)),
            Some(GridIndex::new(0, 0))
        );
        assert_eq!(
            cursor_to_cell(&layout, Vec2::new(99.9, 99.9)),
            Some(GridIndex::new(0, 0))
        );
        assert_eq!(
            cursor_to_cell(&layout, Vec2::new(100.0, 0.0)),
            Some(GridIndex::new(0, 1))
        );
        assert_eq!(
            cursor_to_cell(&layout, Vec2::new(0.0, 200.0)),
            Some(GridIndex::new(2, 0))
        );
    }

    #[test]
    fn cursor_outside_the_board_is_ignored() {
        let layout = BoardLayout::new(100.0);
        assert_eq!(cursor_to_cell(&layout, Vec2::new(300.0, 150.0)), None);
        assert_eq!(cursor_to_cell(&layout, Vec2::new(150.0, 300.0)), None);
        assert_eq!(cursor_to_cell(&layout, Vec2::new(-1.0, 150.0)), None);
        assert_eq!(cursor_to_cell(&layout, Vec2::new(150.0, -1.0)), None);
    }

    #[test]
    fn cell_center_is_the_inverse_of_the_cursor_mapping() {
        let layout = BoardLayout::new(100.0);
        let half = layout.board_size() / 2.0;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = GridIndex::new(row, col);
                let center = cell_center(&layout, pos);
                // translate world coordinates back into window coordinates
                let cursor = Vec2::new(center.x + half, half - center.y);
                assert_eq!(cursor_to_cell(&layout, cursor), Some(pos));
            }
        }
    }
}
