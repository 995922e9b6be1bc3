use std::{thread::sleep, time::Duration};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::food::FoodPlacer;
use crate::grid::Grid;
use crate::snake::Direction::{self, *};
use crate::snake::SnakeRing;
use crate::surface::{Cell, Surface};
use crate::term::TermManager;
use crate::{Coord, GameInt};

const GAME_WIDTH: GameInt = 38;
const GAME_HEIGHT: GameInt = 13;

// Terminal cells are taller than they are wide, so vertical movement gets a
// longer tick to feel the same speed as horizontal movement.
const HORIZONTAL_TICK_MS: u64 = 150;
const VERTICAL_TICK_MS: u64 = 190;
const END_PAUSE_MS: u64 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCause {
    WallCollision,
    SelfCollision,
    BoardFull,
    QuitRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Ended(EndCause),
}

/// The whole simulation state, advanced one tick at a time. Input arrives
/// as a batch of already-drained commands and every mutation lands in the
/// owned display surface, so a tick needs no terminal to run under test.
pub struct GameState {
    grid: Grid,
    snake: SnakeRing,
    direction: Direction,
    food: Coord,
    placer: FoodPlacer,
    surface: Surface,
}

impl GameState {
    pub fn new(grid: Grid, placer: FoodPlacer) -> Self {
        let snake = SnakeRing::new(grid.area());
        let surface = Surface::new(grid.surface_width(), grid.surface_height());
        let mut state = GameState { grid, snake, direction: Right, food: (0, 0), placer, surface };
        state.reset();
        state
    }

    /// Back to the starting position: two segments at the board center
    /// heading right, fresh food, fully repainted board.
    pub fn reset(&mut self) {
        let (cx, cy) = self.grid.center();
        self.snake.initialize((cx, cy), (cx + 1, cy));
        self.direction = Right;
        self.food = self.placer.place(&self.grid, &self.snake);
        self.repaint();
    }

    pub fn tick(&mut self, commands: &[Command]) -> TickOutcome {
        // Every turn request in this batch is validated against the
        // direction the previous tick actually moved in, so two quick
        // keypresses within one tick can never reverse the snake.
        let last = self.direction;
        for command in commands {
            match command {
                Command::Quit => return TickOutcome::Ended(EndCause::QuitRequested),
                Command::Turn(dir) => {
                    if *dir != last.opposite() {
                        self.direction = *dir;
                    }
                }
            }
        }

        let (hx, hy) = self.snake.head();
        let (dx, dy) = self.direction.delta();
        let new_head = (hx + dx, hy + dy);

        if !self.grid.is_in_bounds(new_head) {
            return TickOutcome::Ended(EndCause::WallCollision);
        }
        if self.snake.contains(new_head) {
            return TickOutcome::Ended(EndCause::SelfCollision);
        }

        self.snake.advance_head(new_head);

        if self.snake.is_full() {
            return TickOutcome::Ended(EndCause::BoardFull);
        }

        if new_head == self.food {
            // Eating: the tail stays put and the snake grows by one.
            self.food = self.placer.place(&self.grid, &self.snake);
            let food_pos = self.grid.to_surface(self.food);
            self.surface.put(food_pos, Cell::FOOD);
        } else {
            let old_tail = self.snake.retire_tail();
            self.surface.put(self.grid.to_surface(old_tail), Cell::BLANK);
        }

        self.surface.put(self.grid.to_surface(new_head), Cell::ALIVE);
        TickOutcome::Running
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Coord {
        self.food
    }

    pub fn snake(&self) -> &SnakeRing {
        &self.snake
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn body_head_to_tail(&self) -> Vec<Coord> {
        self.snake.iter_head_to_tail().collect()
    }

    pub fn paint_dead(&mut self, segment: Coord) {
        self.surface.put(self.grid.to_surface(segment), Cell::DEAD);
    }

    pub fn debug_set_snake(&mut self, segments_tail_to_head: &[Coord], direction: Direction) {
        assert!(segments_tail_to_head.len() >= 2);
        self.snake.initialize(segments_tail_to_head[0], segments_tail_to_head[1]);
        for segment in &segments_tail_to_head[2..] {
            self.snake.advance_head(*segment);
        }
        self.direction = direction;
        self.repaint();
    }

    pub fn debug_set_food(&mut self, food: Coord) {
        self.food = food;
        self.repaint();
    }

    fn repaint(&mut self) {
        self.surface.clear();
        for pos in self.grid.border_cells() {
            self.surface.put(pos, Cell::BORDER);
        }
        for segment in self.snake.iter() {
            let pos = self.grid.to_surface(segment);
            self.surface.put(pos, Cell::ALIVE);
        }
        let food_pos = self.grid.to_surface(self.food);
        self.surface.put(food_pos, Cell::FOOD);
    }
}

/// Drives a `GameState` against the real terminal: fixed-tick pacing, key
/// decoding, and the end-of-game animation.
pub struct SnakeGame {
    term: TermManager,
    state: GameState,
}

impl SnakeGame {
    pub fn new() -> Self {
        let grid = Grid::new(GAME_WIDTH, GAME_HEIGHT);
        let state = GameState::new(grid, FoodPlacer::new());
        SnakeGame { term: TermManager::new(), state }
    }

    pub fn run(&mut self) {
        let surface = self.state.surface();
        self.term.setup(surface.width(), surface.height());
        self.term.write_frame(self.state.surface());

        loop {
            sleep(Duration::from_millis(self.tick_interval()));

            let commands = self.drain_commands();
            match self.state.tick(&commands) {
                TickOutcome::Running => self.term.write_frame(self.state.surface()),
                TickOutcome::Ended(_) => break,
            }
        }

        self.end_screen();
        self.term.restore();
    }

    ///////////////////////////////////////////////////////////////////////////

    fn tick_interval(&self) -> u64 {
        match self.state.direction() {
            Up | Down => VERTICAL_TICK_MS,
            Left | Right => HORIZONTAL_TICK_MS,
        }
    }

    fn drain_commands(&self) -> Vec<Command> {
        self.term.read_key_events_queue().iter().filter_map(key_command).collect()
    }

    fn end_screen(&mut self) {
        sleep(Duration::from_millis(END_PAUSE_MS));

        // Keys pressed during the pause are not an acknowledgment.
        self.term.read_key_events_queue();

        for segment in self.state.body_head_to_tail() {
            self.state.paint_dead(segment);
            self.term.write_frame(self.state.surface());
            sleep(Duration::from_millis(HORIZONTAL_TICK_MS));
        }

        self.term.read_key_blocking();
        self.term.clear();
    }
}

fn key_command(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Turn(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Turn(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Turn(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Turn(Right)),
        KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
