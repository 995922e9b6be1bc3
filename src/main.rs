use term_snake::game::SnakeGame;

fn main() {
    let mut game = SnakeGame::new();
    game.run();
}
