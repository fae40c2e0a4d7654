use std::io::{self, BufRead, Write};

use engine::{Board, GameEngine, GameStatus};

/// Renders every board row as cell values joined by " | ",
/// each followed by a separator line of 9 dashes.
fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in board.iter() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match **cell {
                Some(player) => player.to_string(),
                None => " ".to_string(),
            })
            .collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
        out.push_str(&"-".repeat(9));
        out.push('\n');
    }
    out
}

/// Parses a line of user input as exactly two whitespace-separated cell coordinates.
fn parse_position(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = GameEngine::new();

    loop {
        print!("{}", render_board(game.board()));
        let status = loop {
            print!("Player {}, enter a row and column (0-2)", game.current_player());
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                println!();
                return Ok(());
            };
            let pos = match parse_position(&line?) {
                Some(pos) => pos,
                None => {
                    println!("Invalid input. Please enter two numbers separated by a space.");
                    continue;
                }
            };
            match game.make_move(pos.into()) {
                Ok(status) => break status,
                Err(err) => println!("{}", err),
            }
        };
        match status {
            GameStatus::InProgress => {}
            GameStatus::Won(player) => {
                print!("{}", render_board(game.board()));
                println!("Player {} wins!", player);
                return Ok(());
            }
            GameStatus::Draw => {
                print!("{}", render_board(game.board()));
                println!("It is a draw!");
                return Ok(());
            }
        }
    }
}
