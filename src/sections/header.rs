//! Personal details at the top of the form.

use super::{GenerationReport, SectionContext, SectionKind, SectionOutcome, anchor_missing, join_present};
use crate::layout::{Grid, find_row_starting_with};
use crate::locale::HeaderField;

fn passport_line(ctx: &SectionContext<'_>) -> String {
    let Some(citizenship) = ctx.candidate.citizenship.as_ref() else {
        return String::new();
    };
    let vocabulary = &ctx.profile.vocabulary;

    let number = if citizenship.passport_number.trim().is_empty() {
        String::new()
    } else {
        format!("{} {}", vocabulary.passport_number, citizenship.passport_number.trim())
    };
    let document = join_present([citizenship.passport_series.as_str(), number.as_str()], " ");

    let issued_parts = join_present(
        [
            citizenship.passport_issued_by.as_str(),
            ctx.format_date(citizenship.passport_issue_date).as_str(),
        ],
        " ",
    );
    let issued = if issued_parts.is_empty() {
        String::new()
    } else {
        format!("{} {}", vocabulary.passport_issued, issued_parts)
    };

    join_present([document.as_str(), issued.as_str()], ", ")
}

pub(crate) fn header_value(ctx: &SectionContext<'_>, field: HeaderField) -> String {
    let candidate = ctx.candidate;
    let value = match field {
        HeaderField::LastName => candidate.last_name.clone(),
        HeaderField::FirstName => candidate.first_name.clone(),
        HeaderField::MiddleName => candidate.middle_name.clone(),
        HeaderField::BirthDate => ctx.format_date(candidate.birth_date),
        HeaderField::BirthPlace => candidate.birth_place.clone(),
        HeaderField::Citizenship => candidate
            .citizenship
            .as_ref()
            .map(|c| c.citizenship.clone())
            .unwrap_or_default(),
        HeaderField::Passport => passport_line(ctx),
        HeaderField::RegistrationAddress => candidate.registration_address.clone(),
        HeaderField::ResidenceAddress => candidate.residence_address.clone(),
        HeaderField::Phone => candidate.phone.clone(),
        HeaderField::Email => candidate.email.clone(),
    };
    value.trim().to_string()
}

/// Writes each header field next to its label, one report entry per field.
pub fn write_header(grid: &mut Grid<'_>, ctx: &SectionContext<'_>, report: &mut GenerationReport) {
    for label in ctx.profile.header {
        let value = header_value(ctx, label.field);
        let outcome = if value.is_empty() {
            SectionOutcome::Empty
        } else {
            match find_row_starting_with(grid, label.needle) {
                Some(row) => {
                    grid.write_cell(row, ctx.profile.header_value_col, &value);
                    SectionOutcome::written()
                }
                None => anchor_missing(SectionKind::Header, label.needle),
            }
        };
        report.record_field(SectionKind::Header, label.field.as_str(), outcome);
    }
}
