use super::{SectionContext, SectionOutcome};
use crate::error::Result;
use crate::layout::Grid;

/// Places the photo at the top-left of the photo box, scaled to its width.
///
/// Runs after every row insertion so nothing can push the box down.
pub fn write_photo(grid: &mut Grid<'_>, ctx: &SectionContext<'_>) -> Result<SectionOutcome> {
    let Some(photo) = ctx.candidate.photo.as_deref() else {
        return Ok(SectionOutcome::Empty);
    };
    let layout = &ctx.profile.photo;
    let width = layout.columns.width() * layout.px_per_column;
    let image = ctx.media.load(photo, width)?;
    grid.place_image(layout.start_row, layout.columns.start, &image);
    Ok(SectionOutcome::written())
}
