use bevy::prelude::Component;

/// Marker glyph placed on a board cell.
#[derive(Component)]
pub struct Mark;

/// One of the lines separating board cells.
#[derive(Component)]
pub struct GridLine;

/// Line of text reporting whose turn it is and how the game ended.
#[derive(Component)]
pub struct StatusText;
