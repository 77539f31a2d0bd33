use serde::{Deserialize, Serialize};

use crate::game::SnakeState;

/// An RGB triple.
pub type Rgb = (u8, u8, u8);

/// Colors for the five cell classes of the color-grid snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub snake: Rgb,
    pub head: Rgb,
    pub forbidden: Rgb,
    pub fruit: Rgb,
    pub void: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            snake: (0, 0, 0),
            head: (128, 128, 128),
            forbidden: (255, 0, 0),
            fruit: (0, 255, 0),
            void: (255, 255, 255),
        }
    }
}

/// Renders the current state as a `rows * cols * 3` row-major RGB byte
/// buffer: void background, then body, head, boundary ring and fruit,
/// painted in that order (later classes overwrite earlier ones).
///
/// Pure query, independent of any GUI toolkit.
pub fn color_grid(state: &SnakeState, palette: &Palette) -> Vec<u8> {
    let grid = state.grid();
    let mut out = Vec::with_capacity(grid.cell_count() * 3);
    for _ in 0..grid.cell_count() {
        push_rgb(&mut out, palette.void);
    }
    for &cell in state.body().iter().skip(1) {
        paint(&mut out, cell, palette.snake);
    }
    paint(&mut out, state.head(), palette.head);
    for cell in grid.forbidden_cells() {
        paint(&mut out, cell, palette.forbidden);
    }
    if let Some(cell) = state.fruit() {
        paint(&mut out, cell, palette.fruit);
    }
    out
}

fn push_rgb(out: &mut Vec<u8>, (r, g, b): Rgb) {
    out.push(r);
    out.push(g);
    out.push(b);
}

fn paint(out: &mut [u8], cell: usize, (r, g, b): Rgb) {
    out[cell * 3] = r;
    out[cell * 3 + 1] = g;
    out[cell * 3 + 2] = b;
}
