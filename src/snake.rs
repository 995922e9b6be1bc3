use crate::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn delta(self) -> Coord {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// The snake body: a fixed-capacity circular buffer of coordinates indexed
/// by wrapping head/tail positions, so a move is two index bumps and one
/// write, never a reallocation. The live body runs tail..head inclusive,
/// oldest segment first.
pub struct SnakeRing {
    cells: Vec<Coord>,
    tail: usize,
    head: usize,
    len: usize,
}

impl SnakeRing {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 2, "ring must hold at least the two starting segments");
        SnakeRing { cells: vec![(0, 0); capacity], tail: 0, head: 0, len: 0 }
    }

    /// Resets the body to exactly two segments, whatever its prior state.
    pub fn initialize(&mut self, tail: Coord, head: Coord) {
        self.cells[0] = tail;
        self.cells[1] = head;
        self.tail = 0;
        self.head = 1;
        self.len = 2;
    }

    pub fn head(&self) -> Coord {
        self.cells[self.head]
    }

    pub fn tail(&self) -> Coord {
        self.cells[self.tail]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn is_full(&self) -> bool {
        self.len == self.cells.len()
    }

    /// Appends a new head segment. Calling this on a full ring is a
    /// programming error; the game checks for the win state first.
    pub fn advance_head(&mut self, new_head: Coord) {
        assert!(!self.is_full(), "advance_head on a full ring");
        self.head = self.next(self.head);
        self.cells[self.head] = new_head;
        self.len += 1;
    }

    /// Removes and returns the oldest segment.
    pub fn retire_tail(&mut self) -> Coord {
        debug_assert!(self.len > 0);
        let old_tail = self.cells[self.tail];
        self.tail = self.next(self.tail);
        self.len -= 1;
        old_tail
    }

    /// Linear scan of the live body, head included. The body length is
    /// bounded by the board area, so this stays cheap.
    pub fn contains(&self, coord: Coord) -> bool {
        self.iter().any(|segment| segment == coord)
    }

    /// Live segments, tail to head.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        let capacity = self.cells.len();
        (0..self.len).map(move |i| self.cells[(self.tail + i) % capacity])
    }

    /// Live segments, head back to tail. The death animation walks this way.
    pub fn iter_head_to_tail(&self) -> impl Iterator<Item = Coord> + '_ {
        let capacity = self.cells.len();
        (0..self.len).map(move |i| self.cells[(self.head + capacity - i) % capacity])
    }

    fn next(&self, idx: usize) -> usize {
        (idx + 1) % self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_yields_exactly_two_segments() {
        let mut ring = SnakeRing::new(16);
        ring.initialize((3, 3), (4, 3));

        assert_eq!(ring.len(), 2);
        assert_eq!(ring.tail(), (3, 3));
        assert_eq!(ring.head(), (4, 3));
        assert_eq!(ring.iter().collect::<Vec<_>>(), vec![(3, 3), (4, 3)]);
    }

    #[test]
    fn initialize_resets_any_prior_state() {
        let mut ring = SnakeRing::new(16);
        ring.initialize((0, 0), (1, 0));
        for x in 2..7 {
            ring.advance_head((x, 0));
        }
        ring.retire_tail();

        ring.initialize((5, 5), (6, 5));
        assert_eq!(ring.len(), 2);
        assert_eq!(ring.iter().collect::<Vec<_>>(), vec![(5, 5), (6, 5)]);
    }

    #[test]
    fn advance_then_retire_keeps_order() {
        let mut ring = SnakeRing::new(8);
        ring.initialize((0, 0), (1, 0));

        ring.advance_head((2, 0));
        assert_eq!(ring.head(), (2, 0));
        assert_eq!(ring.len(), 3);

        assert_eq!(ring.retire_tail(), (0, 0));
        assert_eq!(ring.tail(), (1, 0));
        assert_eq!(ring.len(), 2);
    }

    #[test]
    fn indices_wrap_across_the_ring_seam() {
        let mut ring = SnakeRing::new(3);
        ring.initialize((0, 0), (1, 0));

        // Push the indices around the buffer several times over.
        for step in 0..10 {
            ring.advance_head((2 + step, 0));
            ring.retire_tail();
            assert_eq!(ring.len(), 2);
        }

        assert_eq!(ring.head(), (11, 0));
        assert_eq!(ring.tail(), (10, 0));
        assert_eq!(ring.iter().collect::<Vec<_>>(), vec![(10, 0), (11, 0)]);
    }

    #[test]
    fn contains_sees_every_live_segment_and_nothing_else() {
        let mut ring = SnakeRing::new(8);
        ring.initialize((0, 0), (1, 0));
        ring.advance_head((1, 1));

        assert!(ring.contains((0, 0)));
        assert!(ring.contains((1, 0)));
        assert!(ring.contains((1, 1)));
        assert!(!ring.contains((2, 2)));

        let retired = ring.retire_tail();
        assert!(!ring.contains(retired));
    }

    #[test]
    fn full_detection_matches_capacity() {
        let mut ring = SnakeRing::new(4);
        ring.initialize((0, 0), (1, 0));
        assert!(!ring.is_full());

        ring.advance_head((2, 0));
        ring.advance_head((3, 0));
        assert!(ring.is_full());
        assert_eq!(ring.len(), ring.capacity());
    }

    #[test]
    #[should_panic(expected = "advance_head on a full ring")]
    fn advancing_a_full_ring_panics() {
        let mut ring = SnakeRing::new(2);
        ring.initialize((0, 0), (1, 0));
        ring.advance_head((2, 0));
    }

    #[test]
    fn head_to_tail_walk_is_the_reverse_of_the_body() {
        let mut ring = SnakeRing::new(5);
        ring.initialize((0, 0), (1, 0));
        ring.advance_head((2, 0));
        ring.advance_head((2, 1));

        let forward: Vec<_> = ring.iter().collect();
        let mut backward: Vec<_> = ring.iter_head_to_tail().collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }
}
