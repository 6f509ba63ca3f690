pub mod anchor;
pub mod grid;
pub mod image;
pub mod text;

pub use anchor::{find_quoted_blank_row, find_row_by_text, find_row_starting_with};
pub use grid::{Grid, MergeRange};
pub use image::{MediaStore, ScaledImage, load_scaled, scaled_height};
pub use text::{estimate_line_count, split_text};
