//! Locating template rows by their label text.
//!
//! Templates are edited by hand, so section positions are never hard-coded.
//! Every lookup scans rows top to bottom and columns left to right and
//! returns the first 1-based row that matches. Cells already filled with
//! candidate data are skipped.

use crate::layout::grid::Grid;

fn normalized(text: &str) -> String {
    text.to_lowercase().replace(['\r', '\n'], " ")
}

fn find_row(grid: &Grid<'_>, needle: &str, matches: impl Fn(&str, &str) -> bool) -> Option<u32> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    let cols = grid.column_count();
    (1..=grid.row_count()).find(|&row| {
        (1..=cols).any(|col| {
            if grid.is_written(row, col) {
                return false;
            }
            let text = grid.cell_text(row, col);
            !text.is_empty() && matches(&normalized(&text), &needle)
        })
    })
}

/// First row with a cell containing `needle`, case-insensitively.
pub fn find_row_by_text(grid: &Grid<'_>, needle: &str) -> Option<u32> {
    find_row(grid, needle, |text, needle| text.contains(needle))
}

/// Like [`find_row_by_text`] but the cell must begin with `needle`.
///
/// Header labels share words ("имя" inside "фамилия, имя"), so the header
/// writer needs the stricter match.
pub fn find_row_starting_with(grid: &Grid<'_>, needle: &str) -> Option<u32> {
    find_row(grid, needle, |text, needle| text.trim_start().starts_with(needle))
}

/// First row whose column A reads `""` once spaces are removed.
///
/// This is the `"   "` blank where the day of the signing date goes.
pub fn find_quoted_blank_row(grid: &Grid<'_>) -> Option<u32> {
    (1..=grid.row_count()).find(|&row| {
        if grid.is_written(row, 1) {
            return false;
        }
        let text = grid.cell_text(row, 1);
        text.chars().filter(|c| !c.is_whitespace()).eq("\"\"".chars())
    })
}
