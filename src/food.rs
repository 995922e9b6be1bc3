use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::Grid;
use crate::snake::SnakeRing;
use crate::Coord;

/// Picks the cell the next piece of food lands on. A random candidate is
/// drawn first; if the snake sits on it, the placer walks forward cell by
/// cell in row-major order, wrapping at the right edge and at the bottom
/// corner, until it finds a free cell. The walk is deterministic given the
/// candidate, which keeps seeded tests exact.
pub struct FoodPlacer {
    rng: StdRng,
}

impl FoodPlacer {
    pub fn new() -> Self {
        FoodPlacer { rng: StdRng::from_entropy() }
    }

    pub fn with_seed(seed: u64) -> Self {
        FoodPlacer { rng: StdRng::seed_from_u64(seed) }
    }

    /// Do not call this when the snake covers every playable cell; the game
    /// treats that as a win before ever placing food.
    pub fn place(&mut self, grid: &Grid, snake: &SnakeRing) -> Coord {
        assert!(snake.len() < grid.area(), "no free cell to place food on");

        let mut x = self.rng.gen_range(0..grid.width());
        let mut y = self.rng.gen_range(0..grid.height());

        while snake.contains((x, y)) {
            x += 1;
            if x == grid.width() {
                x = 0;
                y += 1;
                if y == grid.height() {
                    y = 0;
                }
            }
        }

        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_lands_off_the_snake() {
        let grid = Grid::new(10, 10);
        let mut snake = SnakeRing::new(grid.area());
        snake.initialize((4, 5), (5, 5));

        let mut placer = FoodPlacer::with_seed(7);
        for _ in 0..50 {
            let food = placer.place(&grid, &snake);
            assert!(grid.is_in_bounds(food));
            assert!(!snake.contains(food));
        }
    }

    #[test]
    fn collision_falls_back_to_the_only_free_cell() {
        // Fill the whole 3x3 board except (1, 1): wherever the candidate
        // lands, the forward scan must end up there.
        let grid = Grid::new(3, 3);
        let mut snake = SnakeRing::new(grid.area());
        snake.initialize((0, 0), (1, 0));
        for coord in [(2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1)].iter() {
            snake.advance_head(*coord);
        }
        assert_eq!(snake.len(), 8);

        for seed in 0..20 {
            let mut placer = FoodPlacer::with_seed(seed);
            assert_eq!(placer.place(&grid, &snake), (1, 1));
        }
    }

    #[test]
    fn scan_wraps_past_the_bottom_right_corner() {
        // Only (0, 0) is free, so any candidate below or right of it has to
        // wrap around the end of the board to terminate.
        let grid = Grid::new(2, 2);
        let mut snake = SnakeRing::new(grid.area());
        snake.initialize((1, 0), (1, 1));
        snake.advance_head((0, 1));

        for seed in 0..20 {
            let mut placer = FoodPlacer::with_seed(seed);
            assert_eq!(placer.place(&grid, &snake), (0, 0));
        }
    }
}
