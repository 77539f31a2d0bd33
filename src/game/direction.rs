/// Absolute movement direction in grid-index space.
///
/// The encoding is fixed and load-bearing: 0=right (+1), 1=up (−cols),
/// 2=left (−1), 3=down (+cols). "Up"/"down" are index-space directions
/// (row 0 first), and the cyclic order right→up→left→down is what makes
/// relative turns a simple modulo-4 rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right = 0,
    Up = 1,
    Left = 2,
    Down = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    /// Position in the fixed cyclic order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Direction::index`]. Panics on an out-of-range index.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    /// Returns the (drow, dcol) offset for moving one cell in this direction.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
        }
    }

    /// Maps a unit (drow, dcol) offset back to a direction.
    ///
    /// Returns `None` when the offset is not one of the four cardinal
    /// unit offsets.
    pub fn from_delta(drow: i64, dcol: i64) -> Option<Self> {
        match (drow, dcol) {
            (0, 1) => Some(Direction::Right),
            (-1, 0) => Some(Direction::Up),
            (0, -1) => Some(Direction::Left),
            (1, 0) => Some(Direction::Down),
            _ => None,
        }
    }

    /// Rotates this direction by a relative turn, modulo 4 over the
    /// cyclic order (left = +1, right = −1).
    pub fn rotated(self, turn: Turn) -> Self {
        let index = (self.index() as i8 + turn.offset()).rem_euclid(4);
        Self::from_index(index as usize)
    }

    /// Shorthand for a single left rotation.
    pub fn left(self) -> Self {
        self.rotated(Turn::Left)
    }

    /// Shorthand for a single right rotation.
    pub fn right(self) -> Self {
        self.rotated(Turn::Right)
    }

    /// The direction pointing back the way we came.
    pub fn opposite(self) -> Self {
        Self::from_index((self.index() + 2) % 4)
    }
}

/// A turn relative to the snake's current heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Right,
    Forward,
    Left,
}

impl Turn {
    pub const ALL: [Turn; 3] = [Turn::Right, Turn::Forward, Turn::Left];

    /// Signed rotation applied to a direction index: right = −1,
    /// forward = 0, left = +1.
    pub fn offset(self) -> i8 {
        match self {
            Turn::Right => -1,
            Turn::Forward => 0,
            Turn::Left => 1,
        }
    }

    /// Maps the conventional agent output {-1, 0, +1} to a turn.
    pub fn from_offset(offset: i8) -> Option<Self> {
        match offset {
            -1 => Some(Turn::Right),
            0 => Some(Turn::Forward),
            1 => Some(Turn::Left),
            _ => None,
        }
    }
}
