//! Signing date and signature.
//!
//! The template marks the spot with a `"   "` blank in column A followed by
//! empty month and year cells: `"5" марта 2025 г.`

use super::{SectionContext, SectionKind, SectionOutcome, anchor_missing};
use crate::error::Result;
use crate::layout::{Grid, find_quoted_blank_row};
use chrono::Datelike;
use tracing::debug;

const QUOTED_BLANK: &str = "\"  \"";

pub fn write_created_at(grid: &mut Grid<'_>, ctx: &SectionContext<'_>) -> Result<SectionOutcome> {
    let Some(created_at) = ctx.candidate.created_at else {
        return Ok(SectionOutcome::Empty);
    };
    let Some(row) = find_quoted_blank_row(grid) else {
        return Ok(anchor_missing(SectionKind::CreatedAt, QUOTED_BLANK));
    };
    let layout = &ctx.profile.date_stamp;

    grid.write_cell(row, layout.day_col, &format!("\"{}\"", created_at.day()));

    grid.apply_merge(row, layout.month.start, layout.month.end);
    grid.write_cell(
        row,
        layout.month.start,
        ctx.profile.vocabulary.month_name(created_at.month()),
    );

    grid.apply_merge(row, layout.year.start, layout.year.end);
    grid.write_cell(row, layout.year.start, &created_at.year().to_string());

    if let Some(signature) = ctx.candidate.signature.as_deref() {
        let image = ctx.media.load(signature, layout.signature_width)?;
        grid.place_image(row, layout.signature_col, &image);
        debug!(row, "signature placed");
    }

    Ok(SectionOutcome::written())
}
