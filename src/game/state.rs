use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::config::GameConfig;
use super::direction::{Direction, Turn};
use super::grid::Grid;

/// Game status. Every non-`Playing` value is terminal: once reached,
/// `play`/`turn` become no-ops returning the same status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    /// No free cell left to place a fruit on
    Won,
    /// Two body segments coincide
    LostSelfCollision,
    /// A body segment lies on the boundary ring
    LostWall,
    /// The requested move was off-grid or back into the neck
    InvalidMove,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::Playing
    }
}

/// The live, mutable game state: snake body, fruit, score and status.
///
/// The body is a head-first sequence of cell indices, preallocated to the
/// full grid capacity. All mutation goes through [`SnakeState::reset`],
/// [`SnakeState::play`] and [`SnakeState::turn`]; everything else is a
/// plain uncached query.
#[derive(Debug, Clone)]
pub struct SnakeState {
    grid: Grid,
    pub(crate) body: Vec<usize>,
    pub(crate) fruit: Option<usize>,
    pub(crate) score: u32,
    pub(crate) status: Status,
    rng: StdRng,
}

impl SnakeState {
    pub fn new(config: &GameConfig) -> Self {
        let grid = Grid::new(config.rows, config.cols);
        let capacity = grid.cell_count();
        let mut state = Self {
            grid,
            body: Vec::with_capacity(capacity),
            fruit: None,
            score: 0,
            status: Status::Playing,
            rng: StdRng::from_entropy(),
        };
        state.reset(None);
        state
    }

    /// Reinitializes the game: two-segment body at rows 1-2 of column 1
    /// (head on top), a fresh fruit, score zero, status `Playing`.
    ///
    /// Passing a seed makes the fruit sequence reproducible.
    pub fn reset(&mut self, seed: Option<u64>) {
        self.rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.body.clear();
        self.body.push(self.grid.coords_to_cell(1, 1));
        self.body.push(self.grid.coords_to_cell(2, 1));
        self.score = 0;
        self.status = Status::Playing;
        self.draw_fruit();
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn head(&self) -> usize {
        self.body[0]
    }

    pub fn neck(&self) -> usize {
        self.body[1]
    }

    /// Body cells, head first.
    pub fn body(&self) -> &[usize] {
        &self.body
    }

    pub fn fruit(&self) -> Option<usize> {
        self.fruit
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether a cell is occupied by the snake.
    pub fn occupied(&self, cell: usize) -> bool {
        self.body.contains(&cell)
    }

    /// Cells that are neither forbidden nor occupied, recomputed on demand.
    pub fn free_cells(&self) -> Vec<usize> {
        (0..self.grid.cell_count())
            .filter(|&cell| !self.grid.is_forbidden(cell) && !self.occupied(cell))
            .collect()
    }

    /// Current absolute heading, derived from the head/neck offset.
    ///
    /// Head and neck are orthogonally adjacent in every state reachable
    /// through `reset`/`play`; anything else is corrupted state.
    pub fn heading(&self) -> Direction {
        let (hr, hc) = self.grid.cell_to_coords(self.head());
        let (nr, nc) = self.grid.cell_to_coords(self.neck());
        Direction::from_delta(hr as i64 - nr as i64, hc as i64 - nc as i64)
            .expect("head and neck must be orthogonally adjacent")
    }

    /// Advances the snake one cell in an absolute direction.
    ///
    /// Moving off-grid or back into the neck terminates with
    /// `InvalidMove` without touching the body. A successful move shifts
    /// the body toward the tail; landing on the fruit grows the body by
    /// one segment, bumps the score and redraws the fruit (`Won` when no
    /// free cell remains). Self-collision and wall checks run after every
    /// successful move, fruit or not.
    pub fn play(&mut self, direction: Direction) -> Status {
        if self.status.is_terminal() {
            return self.status;
        }
        match self.grid.neighbor(self.head(), direction) {
            None => self.status = Status::InvalidMove,
            Some(new_head) if new_head == self.neck() => self.status = Status::InvalidMove,
            Some(new_head) => {
                let ate = self.fruit == Some(new_head);
                self.body.insert(0, new_head);
                if ate {
                    self.score += 1;
                    self.draw_fruit();
                } else {
                    self.body.pop();
                }
                self.check_defeat();
            }
        }
        self.status
    }

    /// Rotates the current heading by a relative turn and plays it.
    pub fn turn(&mut self, turn: Turn) -> Status {
        if self.status.is_terminal() {
            return self.status;
        }
        let direction = self.heading().rotated(turn);
        self.play(direction)
    }

    fn draw_fruit(&mut self) {
        let free = self.free_cells();
        match free.choose(&mut self.rng) {
            Some(&cell) => self.fruit = Some(cell),
            None => {
                self.fruit = None;
                self.status = Status::Won;
            }
        }
    }

    /// Post-move validation: distinct body cells, nobody on the boundary.
    /// The wall check runs last and wins when both trip at once.
    fn check_defeat(&mut self) {
        let mut seen = HashSet::with_capacity(self.body.len());
        if !self.body.iter().all(|&cell| seen.insert(cell)) {
            self.status = Status::LostSelfCollision;
        }
        if self.body.iter().any(|&cell| self.grid.is_forbidden(cell)) {
            self.status = Status::LostWall;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_5x5(seed: u64) -> SnakeState {
        let mut state = SnakeState::new(&GameConfig::small());
        state.reset(Some(seed));
        state
    }

    #[test]
    fn test_reset_layout() {
        let state = state_5x5(7);
        let grid = state.grid();
        assert_eq!(state.body(), &[grid.coords_to_cell(1, 1), grid.coords_to_cell(2, 1)]);
        assert_eq!(state.heading(), Direction::Up);
        assert_eq!(state.score(), 0);
        assert_eq!(state.status(), Status::Playing);
        let fruit = state.fruit().unwrap();
        assert!(!grid.is_forbidden(fruit));
        assert!(!state.occupied(fruit));
    }

    #[test]
    fn test_reset_is_deterministic_with_seed() {
        let a = state_5x5(42);
        let b = state_5x5(42);
        assert_eq!(a.fruit(), b.fruit());
        assert_eq!(a.body(), b.body());
    }

    #[test]
    fn test_seeded_games_replay_identically() {
        let mut a = state_5x5(9);
        let mut b = state_5x5(9);
        for _ in 0..20 {
            assert_eq!(a.turn(Turn::Left), b.turn(Turn::Left));
            assert_eq!(a.fruit(), b.fruit());
            assert_eq!(a.body(), b.body());
        }
    }

    #[test]
    fn test_move_into_neck_is_invalid_and_mutates_nothing() {
        let mut state = state_5x5(1);
        let body_before = state.body().to_vec();
        // Head (1,1), neck (2,1): down points straight into the neck.
        assert_eq!(state.play(Direction::Down), Status::InvalidMove);
        assert_eq!(state.body(), body_before.as_slice());
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_first_forward_move_hits_the_top_wall() {
        let mut state = state_5x5(3);
        // Heading is up from the fixed reset layout, and (0,1) is boundary.
        assert_eq!(state.turn(Turn::Forward), Status::LostWall);
        assert_eq!(state.head(), state.grid().coords_to_cell(0, 1));
    }

    #[test]
    fn test_sideways_move_keeps_playing() {
        let mut state = state_5x5(3);
        state.fruit = Some(state.grid().coords_to_cell(3, 3));
        assert_eq!(state.play(Direction::Right), Status::Playing);
        assert_eq!(state.head(), state.grid().coords_to_cell(1, 2));
        assert_eq!(state.body().len(), 2);
    }

    #[test]
    fn test_wall_collision() {
        let mut state = state_5x5(3);
        // Straight up from (1,1) into row 0.
        assert_eq!(state.play(Direction::Up), Status::LostWall);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut state = state_5x5(11);
        let target = state.grid().coords_to_cell(1, 2);
        state.fruit = Some(target);
        assert_eq!(state.play(Direction::Right), Status::Playing);
        assert_eq!(state.head(), target);
        assert_eq!(state.score(), 1);
        assert_eq!(state.body().len(), 3);
        // Fruit was redrawn somewhere free.
        let fruit = state.fruit().unwrap();
        assert!(!state.occupied(fruit));
        assert!(!state.grid().is_forbidden(fruit));
    }

    #[test]
    fn test_filling_the_board_wins() {
        // 4x4 interior is a 2x2 block; two forced fruits fill it.
        let mut state = SnakeState::new(&GameConfig::new(4, 4));
        state.reset(Some(0));
        let grid = state.grid().clone();
        state.fruit = Some(grid.coords_to_cell(1, 2));
        assert_eq!(state.play(Direction::Right), Status::Playing);
        assert_eq!(state.body().len(), 3);
        // Only (2,2) is free now, so the redraw was forced there.
        assert_eq!(state.fruit(), Some(grid.coords_to_cell(2, 2)));
        assert_eq!(state.play(Direction::Down), Status::Won);
        assert_eq!(state.score(), 2);
        // The winning bite still grows the body.
        assert_eq!(state.body().len(), 4);
        assert_eq!(state.fruit(), None);
    }

    #[test]
    fn test_self_collision() {
        // Grow to five segments along row 1, then hook back into the body.
        let mut state = SnakeState::new(&GameConfig::new(7, 7));
        state.reset(Some(5));
        let grid = state.grid().clone();
        for col in 2..=4 {
            state.fruit = Some(grid.coords_to_cell(1, col));
            assert_eq!(state.play(Direction::Right), Status::Playing);
        }
        assert_eq!(state.body().len(), 5);
        state.fruit = Some(grid.coords_to_cell(5, 5));
        assert_eq!(state.play(Direction::Down), Status::Playing);
        assert_eq!(state.play(Direction::Left), Status::Playing);
        assert_eq!(state.play(Direction::Up), Status::LostSelfCollision);
    }

    #[test]
    fn test_terminal_state_is_idempotent() {
        let mut state = state_5x5(8);
        assert_eq!(state.play(Direction::Up), Status::LostWall);
        let body = state.body().to_vec();
        let score = state.score();
        for _ in 0..3 {
            assert_eq!(state.play(Direction::Right), Status::LostWall);
            assert_eq!(state.turn(Turn::Left), Status::LostWall);
        }
        assert_eq!(state.body(), body.as_slice());
        assert_eq!(state.score(), score);
    }

    #[test]
    fn test_turn_rotates_heading() {
        let mut state = state_5x5(2);
        state.fruit = Some(state.grid().coords_to_cell(3, 3));
        // Heading up; a left turn heads left, which from (1,1) hits the wall.
        let mut left = state.clone();
        assert_eq!(left.turn(Turn::Left), Status::LostWall);
        // A right turn heads right into open space.
        assert_eq!(state.turn(Turn::Right), Status::Playing);
        assert_eq!(state.head(), state.grid().coords_to_cell(1, 2));
        assert_eq!(state.heading(), Direction::Right);
    }

    #[test]
    fn test_free_cells_excludes_boundary_and_body() {
        let state = state_5x5(4);
        let free = state.free_cells();
        // 9 interior cells minus 2 body segments.
        assert_eq!(free.len(), 7);
        for cell in free {
            assert!(!state.grid().is_forbidden(cell));
            assert!(!state.occupied(cell));
        }
    }
}
