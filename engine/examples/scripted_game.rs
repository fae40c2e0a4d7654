use engine::{GameEngine, GridIndex};

fn main() {
    let mut game = GameEngine::new();

    game.make_move(GridIndex::new(1, 1)).unwrap();
    println!("{}", game.board());
    game.make_move(GridIndex::new(1, 2)).unwrap();
    println!("{}", game.board());
    game.make_move(GridIndex::new(2, 2)).unwrap();
    println!("{}", game.board());
    game.make_move(GridIndex::new(0, 0)).unwrap();
    println!("{}", game.board());
    game.make_move(GridIndex::new(2, 1)).unwrap();
    println!("{}", game.board());
    game.make_move(GridIndex::new(0, 1)).unwrap();
    println!("{}", game.board());
    game.make_move(GridIndex::new(2, 0)).unwrap();
    println!("{}", game.board());
    println!("{:?}", game.status());
}
