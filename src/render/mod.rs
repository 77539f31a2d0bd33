pub mod color_grid;
pub mod renderer;

pub use color_grid::{color_grid, Palette, Rgb};
pub use renderer::Renderer;
