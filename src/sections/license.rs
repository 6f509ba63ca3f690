use super::{SectionContext, SectionKind, SectionOutcome, anchor_missing};
use crate::layout::{Grid, find_row_by_text};

/// Number and issue date on the label row, categories on the row below.
pub fn write_license(grid: &mut Grid<'_>, ctx: &SectionContext<'_>) -> SectionOutcome {
    let candidate = ctx.candidate;
    let number = candidate.driver_license_number.trim();
    if number.is_empty() {
        return SectionOutcome::Empty;
    }
    let layout = &ctx.profile.license;
    let Some(row) = find_row_by_text(grid, layout.needle) else {
        return anchor_missing(SectionKind::DriverLicense, layout.needle);
    };

    grid.write_cell(row, layout.number_col, number);
    let issued = ctx.format_date(candidate.driver_license_issue_date);
    if !issued.is_empty() {
        grid.write_cell(row, layout.date_col, &issued);
    }
    let categories = candidate.driver_license_categories.trim();
    if !categories.is_empty() {
        grid.write_cell(row + 1, layout.categories_col, categories);
    }
    SectionOutcome::written()
}
