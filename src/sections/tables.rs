//! Education, employment and family tables.

use super::{SectionContext, SectionKind, SectionOutcome, anchor_missing, grow_region, join_present};
use crate::error::Result;
use crate::layout::Grid;
use crate::locale::{TableLayout, Vocabulary};
use crate::model::{EducationForm, Employment};
use tracing::debug;

/// Grows the region under `layout.anchor` and fills one row per entry.
///
/// Values line up with `layout.columns`; each is written at its span's first
/// column.
pub(crate) fn write_table(
    grid: &mut Grid<'_>,
    section: SectionKind,
    layout: &TableLayout,
    rows: Vec<Vec<String>>,
) -> Result<SectionOutcome> {
    if rows.is_empty() {
        return Ok(SectionOutcome::Empty);
    }
    let Some(region) = grow_region(grid, layout, rows.len())? else {
        return Ok(anchor_missing(section, layout.anchor));
    };

    for (offset, values) in rows.iter().enumerate() {
        let row = region.first_row + offset as u32;
        for (span, value) in layout.columns.iter().zip(values) {
            if !value.is_empty() {
                grid.write_cell(row, span.start, value);
            }
        }
    }

    debug!(
        ?section,
        entries = rows.len(),
        first_row = region.first_row,
        rows_inserted = region.rows_inserted,
        "table written"
    );
    Ok(SectionOutcome::Written {
        rows_inserted: region.rows_inserted,
    })
}

fn education_form(vocabulary: &Vocabulary, form: Option<EducationForm>) -> String {
    match form {
        Some(EducationForm::FullTime) => vocabulary.full_time.to_string(),
        Some(EducationForm::Evening) => vocabulary.evening.to_string(),
        Some(EducationForm::Distance) => vocabulary.distance.to_string(),
        None => String::new(),
    }
}

pub fn write_education(grid: &mut Grid<'_>, ctx: &SectionContext<'_>) -> Result<SectionOutcome> {
    let vocabulary = &ctx.profile.vocabulary;
    let rows = ctx
        .candidate
        .sorted_educations()
        .into_iter()
        .map(|education| {
            vec![
                join_present(
                    [
                        education.institution_name.as_str(),
                        education.institution_location.as_str(),
                    ],
                    ", ",
                ),
                education
                    .graduation_year
                    .map(|year| year.to_string())
                    .unwrap_or_default(),
                education_form(vocabulary, education.education_form),
                education.specialty.trim().to_string(),
                education.diploma_information.trim().to_string(),
            ]
        })
        .collect();
    write_table(grid, SectionKind::Education, &ctx.profile.education, rows)
}

fn employment_row(ctx: &SectionContext<'_>, job: &Employment) -> Vec<String> {
    let end = if job.is_current() {
        ctx.profile.vocabulary.present.to_string()
    } else {
        ctx.format_date(job.end_date)
    };
    vec![
        ctx.format_date(job.start_date),
        end,
        join_present([job.position.as_str(), job.organization.as_str()], ", "),
        join_present(
            [job.organization_address.as_str(), job.organization_phone.as_str()],
            ", ",
        ),
        job.manager_full_name.trim().to_string(),
        job.dismissal_reason.trim().to_string(),
    ]
}

pub fn write_employment(grid: &mut Grid<'_>, ctx: &SectionContext<'_>) -> Result<SectionOutcome> {
    let rows = ctx
        .candidate
        .sorted_employments()
        .into_iter()
        .map(|job| employment_row(ctx, job))
        .collect();
    write_table(grid, SectionKind::Employment, &ctx.profile.employment, rows)
}

pub fn write_family(grid: &mut Grid<'_>, ctx: &SectionContext<'_>) -> Result<SectionOutcome> {
    let rows = ctx
        .candidate
        .family_members
        .iter()
        .map(|member| {
            let birth = match (member.birth_date, member.birth_year) {
                (Some(date), _) => ctx.format_date(Some(date)),
                (None, Some(year)) => year.to_string(),
                (None, None) => String::new(),
            };
            vec![
                member.relation.trim().to_string(),
                birth,
                member.occupation.trim().to_string(),
                member.residence.trim().to_string(),
            ]
        })
        .collect();
    write_table(grid, SectionKind::Family, &ctx.profile.family, rows)
}
