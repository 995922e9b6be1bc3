pub mod food;
pub mod game;
pub mod grid;
pub mod snake;
pub mod surface;
pub mod term;

pub type GameInt = i16;

// A game coordinate does not include the border; (0, 0) is the top-left
// playable cell and a valid place for the snake to be.
pub type Coord = (GameInt, GameInt);
