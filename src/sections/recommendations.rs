use super::{SectionContext, SectionKind, SectionOutcome, anchor_missing, grow_region, join_present};
use crate::error::Result;
use crate::layout::{Grid, estimate_line_count};
use crate::model::Recommendation;

/// `referrer, position, company, contact` with the free text on its own line.
pub(crate) fn recommendation_text(recommendation: &Recommendation) -> String {
    let heading = join_present(
        [
            recommendation.referrer_name.as_str(),
            recommendation.position.as_str(),
            recommendation.company.as_str(),
            recommendation.contact.as_str(),
        ],
        ", ",
    );
    join_present([heading.as_str(), recommendation.text.as_str()], "\n")
}

/// Row height that shows `text` in full, never below one line.
pub(crate) fn row_height_for(text: &str, max_chars_per_line: usize, line_height: f64) -> f64 {
    let lines = estimate_line_count(text, max_chars_per_line) as f64;
    (lines * line_height).max(line_height)
}

pub fn write_recommendations(
    grid: &mut Grid<'_>,
    ctx: &SectionContext<'_>,
) -> Result<SectionOutcome> {
    let texts: Vec<String> = ctx
        .candidate
        .recommendations
        .iter()
        .map(recommendation_text)
        .filter(|text| !text.is_empty())
        .collect();
    if texts.is_empty() {
        return Ok(SectionOutcome::Empty);
    }

    let layout = &ctx.profile.recommendations;
    let Some(region) = grow_region(grid, &layout.table, texts.len())? else {
        return Ok(anchor_missing(SectionKind::Recommendations, layout.table.anchor));
    };

    let span = layout.table.columns[0];
    for (offset, text) in texts.iter().enumerate() {
        let row = region.first_row + offset as u32;
        grid.apply_merge(row, span.start, span.end);
        grid.write_cell(row, span.start, text);
        grid.set_wrapped_top_aligned(row, span.start);
        grid.set_row_height(
            row,
            row_height_for(text, layout.max_chars_per_line, layout.line_height),
        );
    }

    Ok(SectionOutcome::Written {
        rows_inserted: region.rows_inserted,
    })
}
