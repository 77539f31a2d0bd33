use super::SensorMode;
use crate::game::{Direction, SnakeState};

/// Occupancy of the three head-relative neighbor cells, in order
/// `[right, front, left]`: `+1` fruit, `-1` forbidden/body/off-grid,
/// `0` free.
pub fn turn_neighbors(state: &SnakeState) -> [f64; 3] {
    let heading = state.heading();
    let mut out = [0.0; 3];
    for (slot, direction) in relative_directions(heading).into_iter().enumerate() {
        out[slot] = match state.grid().neighbor(state.head(), direction) {
            None => -1.0,
            Some(cell) if state.fruit() == Some(cell) => 1.0,
            Some(cell) if state.grid().is_forbidden(cell) || state.occupied(cell) => -1.0,
            Some(_) => 0.0,
        };
    }
    out
}

/// Distance-to-obstruction along the three head-relative rays, in order
/// `[right, front, left]`.
///
/// Each value is the number of free cells before the first forbidden or
/// body cell (the grid edge counts as the obstacle), or the sentinel
/// `cell_count` when the ray reaches the fruit first.
pub fn lidar(state: &SnakeState) -> [f64; 3] {
    let heading = state.heading();
    let dirs = relative_directions(heading);
    dirs.map(|direction| ray_scan(state, direction.delta()))
}

/// Five-ray lidar: `[right, front, left, back-right, back-left]`, the
/// last two being the diagonal rays pointing behind the snake.
pub fn enhanced_lidar(state: &SnakeState) -> [f64; 5] {
    let heading = state.heading();
    let [right, front, left] = lidar(state);
    let (br, bc) = heading.opposite().delta();
    let (rr, rc) = heading.right().delta();
    let (lr, lc) = heading.left().delta();
    let back_right = ray_scan(state, (br + rr, bc + rc));
    let back_left = ray_scan(state, (br + lr, bc + lc));
    [right, front, left, back_right, back_left]
}

/// `(cos, sin)` of the angle between the current heading and the
/// direction to the fruit, normalized by Euclidean distance. Positive
/// sin means the fruit lies to the snake's left.
///
/// Undefined without a fruit on the board or with the fruit on the head
/// cell; neither occurs in valid play, and callers must guard.
pub fn fruit_bearing(state: &SnakeState) -> (f64, f64) {
    let grid = state.grid();
    let fruit = state
        .fruit()
        .expect("fruit_bearing requires a fruit on the board");
    let (hr, hc) = grid.cell_to_coords(state.head());
    let (fr, fc) = grid.cell_to_coords(fruit);
    let dcol = fc as f64 - hc as f64;
    let drow = fr as f64 - hr as f64;
    // Math frame: x along columns, y up (row axis flipped).
    let (fx, fy) = (dcol, -drow);
    let distance = (fx * fx + fy * fy).sqrt();
    assert!(distance > 0.0, "fruit_bearing undefined with fruit on head");
    let (hx, hy) = match state.heading() {
        Direction::Right => (1.0, 0.0),
        Direction::Up => (0.0, 1.0),
        Direction::Left => (-1.0, 0.0),
        Direction::Down => (0.0, -1.0),
    };
    let cos = (hx * fx + hy * fy) / distance;
    let sin = (hx * fy - hy * fx) / distance;
    (cos, sin)
}

/// The full observation vector for a sensor mode: the mode's sensor
/// block followed by the fruit bearing.
pub fn observation(state: &SnakeState, mode: SensorMode) -> Vec<f64> {
    let mut out = Vec::with_capacity(mode.len());
    match mode {
        SensorMode::Default => out.extend(turn_neighbors(state)),
        SensorMode::Lidar => out.extend(lidar(state)),
        SensorMode::Elidar => out.extend(enhanced_lidar(state)),
    }
    let (cos, sin) = fruit_bearing(state);
    out.push(cos);
    out.push(sin);
    out
}

/// Absolute directions of the head-relative frame: right, front, left.
fn relative_directions(heading: Direction) -> [Direction; 3] {
    [heading.right(), heading, heading.left()]
}

/// Walks outward from the head cell by (drow, dcol) steps, counting free
/// cells until an obstruction. The fruit short-circuits to the
/// `cell_count` sentinel; the grid edge is treated as the obstacle.
fn ray_scan(state: &SnakeState, (drow, dcol): (i64, i64)) -> f64 {
    let grid = state.grid();
    let (mut row, mut col) = grid.cell_to_coords(state.head());
    let mut distance = 0.0;
    loop {
        let Some(cell) = grid.step(row, col, drow, dcol) else {
            return distance;
        };
        if state.fruit() == Some(cell) {
            return grid.cell_count() as f64;
        }
        if grid.is_forbidden(cell) || state.occupied(cell) {
            return distance;
        }
        distance += 1.0;
        (row, col) = grid.cell_to_coords(cell);
    }
}
