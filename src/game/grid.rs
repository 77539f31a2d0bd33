use super::direction::Direction;

/// Immutable grid geometry: dimensions, cell indexing, and the static
/// boundary ring of forbidden cells.
///
/// Cells are identified by a single row-major flattened index in
/// `0..cell_count()`. The first/last row and first/last column form the
/// forbidden ring; the playable interior requires `rows` and `cols` of at
/// least 3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows >= 3 && cols >= 3,
            "grid needs an interior: rows and cols must be >= 3 (got {rows}x{cols})"
        );
        Self { rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Converts a cell index to (row, col) coordinates.
    pub fn cell_to_coords(&self, cell: usize) -> (usize, usize) {
        (cell / self.cols, cell % self.cols)
    }

    /// Converts (row, col) coordinates to a cell index.
    pub fn coords_to_cell(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Whether the cell lies on the boundary ring.
    pub fn is_forbidden(&self, cell: usize) -> bool {
        let (row, col) = self.cell_to_coords(cell);
        row == 0 || row == self.rows - 1 || col == 0 || col == self.cols - 1
    }

    /// All boundary cells, in index order.
    pub fn forbidden_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cell_count()).filter(|&cell| self.is_forbidden(cell))
    }

    /// The four neighbors of a cell in fixed direction order
    /// `[right, up, left, down]`; `None` where the cell sits on the
    /// corresponding grid edge.
    pub fn neighbors(&self, cell: usize) -> [Option<usize>; 4] {
        let (row, col) = self.cell_to_coords(cell);
        [
            (col < self.cols - 1).then(|| cell + 1),
            (row > 0).then(|| cell - self.cols),
            (col > 0).then(|| cell - 1),
            (row < self.rows - 1).then(|| cell + self.cols),
        ]
    }

    /// The neighbor of a cell in one direction, `None` if off-grid.
    pub fn neighbor(&self, cell: usize, direction: Direction) -> Option<usize> {
        self.neighbors(cell)[direction.index()]
    }

    /// Steps from (row, col) by a signed offset, staying on the grid.
    ///
    /// Unlike [`Grid::neighbor`] this walks in coordinate space, which is
    /// what diagonal sensor rays need.
    pub fn step(&self, row: usize, col: usize, drow: i64, dcol: i64) -> Option<usize> {
        let row = row as i64 + drow;
        let col = col as i64 + dcol;
        if row < 0 || row >= self.rows as i64 || col < 0 || col >= self.cols as i64 {
            return None;
        }
        Some(self.coords_to_cell(row as usize, col as usize))
    }
}
