//! Row insertion and merge bookkeeping over a umya worksheet.
//!
//! umya shifts cell coordinates on `insert_new_row` but its treatment of
//! merged ranges that straddle the insertion point is not what a template
//! needs. [`Grid::insert_row`] therefore snapshots every merge, lets umya
//! move the cells, and then re-derives the merge list from the snapshot.

use crate::error::{QuestionnaireError, Result};
use crate::layout::image::ScaledImage;
use crate::styles::has_explicit_style;
use crate::utils::{cell_address, parse_range};
use std::collections::HashSet;
use std::fmt;
use tracing::trace;
use umya_spreadsheet::structs::VerticalAlignmentValues;
use umya_spreadsheet::structs::drawing::spreadsheet::MarkerType;
use umya_spreadsheet::{Image, Worksheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRange {
    pub start_col: u32,
    pub start_row: u32,
    pub end_col: u32,
    pub end_row: u32,
}

impl MergeRange {
    pub fn single_row(row: u32, start_col: u32, end_col: u32) -> Self {
        Self {
            start_col,
            start_row: row,
            end_col,
            end_row: row,
        }
    }

    pub fn parse(range: &str) -> Option<Self> {
        let ((start_col, start_row), (end_col, end_row)) = parse_range(range)?;
        Some(Self {
            start_col,
            start_row,
            end_col,
            end_row,
        })
    }

    pub fn contains(&self, col: u32, row: u32) -> bool {
        (self.start_col..=self.end_col).contains(&col)
            && (self.start_row..=self.end_row).contains(&row)
    }

    /// Position of this range after one row is inserted at `index`.
    ///
    /// Ranges whose top row is at or below the insertion point move down by
    /// one; everything else keeps its rows.
    pub fn shifted_for_insert(self, index: u32) -> Self {
        if self.start_row >= index {
            Self {
                start_row: self.start_row + 1,
                end_row: self.end_row + 1,
                ..self
            }
        } else {
            self
        }
    }
}

impl fmt::Display for MergeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            cell_address(self.start_col, self.start_row),
            cell_address(self.end_col, self.end_row)
        )
    }
}

/// Mutable view of the questionnaire worksheet.
///
/// Cells written through [`Grid::write_cell`] hold candidate data, not
/// template labels. They are remembered (and moved along with row inserts)
/// so the row locators never mistake a value for an anchor.
pub struct Grid<'a> {
    sheet: &'a mut Worksheet,
    written: HashSet<(u32, u32)>,
}

impl<'a> Grid<'a> {
    pub fn new(sheet: &'a mut Worksheet) -> Self {
        Self {
            sheet,
            written: HashSet::new(),
        }
    }

    pub fn sheet(&self) -> &Worksheet {
        &*self.sheet
    }

    pub fn column_count(&self) -> u32 {
        self.sheet.get_highest_column()
    }

    pub fn row_count(&self) -> u32 {
        self.sheet.get_highest_row()
    }

    /// Fails when the template is narrower than `max_col`.
    pub fn ensure_columns(&self, max_col: u32) -> Result<()> {
        let width = self.column_count();
        if width < max_col {
            return Err(QuestionnaireError::Structural(format!(
                "layout needs {max_col} columns but worksheet {:?} has {width}",
                self.sheet.get_name()
            )));
        }
        Ok(())
    }

    pub fn merge_ranges(&self) -> Vec<MergeRange> {
        self.sheet
            .get_merge_cells()
            .iter()
            .filter_map(|range| MergeRange::parse(&range.get_range()))
            .collect()
    }

    fn merge_containing(&self, col: u32, row: u32) -> Option<MergeRange> {
        self.merge_ranges()
            .into_iter()
            .find(|range| range.contains(col, row))
    }

    pub fn cell_text(&self, row: u32, col: u32) -> String {
        self.sheet
            .get_cell((col, row))
            .map(|cell| cell.get_value().into_owned())
            .unwrap_or_default()
    }

    /// Writes into the top-left cell of the merge covering `(row, col)`, if any.
    pub fn write_cell(&mut self, row: u32, col: u32, value: &str) {
        let (col, row) = match self.merge_containing(col, row) {
            Some(range) => (range.start_col, range.start_row),
            None => (col, row),
        };
        self.sheet
            .get_cell_mut((col, row))
            .set_value_string(value);
        self.written.insert((row, col));
    }

    /// True when `(row, col)` holds a value written by this grid.
    pub fn is_written(&self, row: u32, col: u32) -> bool {
        self.written.contains(&(row, col))
    }

    /// Merges `col_start..=col_end` on `row`.
    pub fn apply_merge(&mut self, row: u32, col_start: u32, col_end: u32) {
        if col_end <= col_start {
            return;
        }
        let range = MergeRange::single_row(row, col_start, col_end);
        if self.merge_ranges().contains(&range) {
            return;
        }
        self.sheet.add_merge_cells(range.to_string());
    }

    /// Inserts one empty row at `index` and styles it like `style_source_row`.
    ///
    /// `style_source_row` is given in pre-insert coordinates.
    pub fn insert_row(&mut self, index: u32, style_source_row: u32) {
        let merges = self.merge_ranges();
        let max_col = self.column_count();

        self.sheet.insert_new_row(&index, &1);

        let merge_cells = self.sheet.get_merge_cells_mut();
        merge_cells.clear();
        for range in &merges {
            let shifted = range.shifted_for_insert(index);
            self.sheet.add_merge_cells(shifted.to_string());
        }

        self.written = self
            .written
            .drain()
            .map(|(row, col)| if row >= index { (row + 1, col) } else { (row, col) })
            .collect();

        let source_row = if style_source_row >= index {
            style_source_row + 1
        } else {
            style_source_row
        };

        for col in 1..=max_col {
            let style = self.sheet.get_style((col, source_row));
            if !has_explicit_style(style) {
                continue;
            }
            let style = style.clone();
            self.sheet.get_cell_mut((col, index)).set_style(style);
        }

        trace!(index, source_row, merges = merges.len(), "row inserted");
    }

    pub fn row_height(&self, row: u32) -> Option<f64> {
        self.sheet
            .get_row_dimension(&row)
            .map(|dimension| *dimension.get_height())
            .filter(|height| *height > 0.0)
    }

    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.sheet.get_row_dimension_mut(&row).set_height(height);
    }

    pub fn set_wrapped_top_aligned(&mut self, row: u32, col: u32) {
        let alignment = self.sheet.get_style_mut((col, row)).get_alignment_mut();
        alignment.set_wrap_text(true);
        alignment.set_vertical(VerticalAlignmentValues::Top);
    }

    /// Anchors `image` with its top-left corner at `(row, col)`.
    pub fn place_image(&mut self, row: u32, col: u32, image: &ScaledImage) {
        let mut marker = MarkerType::default();
        marker.set_coordinate(cell_address(col, row));
        let mut drawing = Image::default();
        drawing.new_image_with_dimensions(
            image.height,
            image.width,
            &image.name,
            image.bytes.clone(),
            marker,
        );
        self.sheet.add_image(drawing);
    }
}
