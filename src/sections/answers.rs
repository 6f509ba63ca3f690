//! Free-text question blocks.
//!
//! The answer goes on the rows directly below the question, wrapped to the
//! locale's line width. Target rows keep their template height.

use super::{GenerationReport, SectionContext, SectionKind, SectionOutcome, anchor_missing};
use crate::layout::{Grid, find_row_by_text, split_text};
use crate::locale::{AnswerField, AnswerLayout};
use tracing::trace;

pub(crate) fn answer_value(ctx: &SectionContext<'_>, field: AnswerField) -> String {
    let candidate = ctx.candidate;
    let value = match field {
        AnswerField::ForeignLanguages => candidate.foreign_languages.as_str(),
        AnswerField::MilitaryService => candidate.military_service.as_str(),
        AnswerField::Disqualification => candidate.disqualification.as_str(),
        AnswerField::ManagementExperience => candidate.management_experience.as_str(),
        AnswerField::HealthRestrictions => candidate.health_restrictions.as_str(),
        AnswerField::VacancySource => candidate.vacancy_source.as_str(),
        AnswerField::AcquaintancesInCompany => candidate.acquaintances_in_company.as_str(),
        AnswerField::AllowReferenceCheck => match candidate.allow_reference_check {
            Some(true) => ctx.profile.vocabulary.yes,
            Some(false) => ctx.profile.vocabulary.no,
            None => "",
        },
        AnswerField::JobRequirements => candidate.job_requirements.as_str(),
        AnswerField::WorkObstacles => candidate.work_obstacles.as_str(),
        AnswerField::SalaryExpectations => candidate.salary_expectations.as_str(),
        AnswerField::AdditionalInfo => candidate.additional_info.as_str(),
    };
    value.trim().to_string()
}

pub fn write_answer(
    grid: &mut Grid<'_>,
    ctx: &SectionContext<'_>,
    layout: &AnswerLayout,
) -> SectionOutcome {
    let section = if layout.field == AnswerField::ForeignLanguages {
        SectionKind::ForeignLanguages
    } else {
        SectionKind::Answers
    };

    let value = answer_value(ctx, layout.field);
    if value.is_empty() {
        return SectionOutcome::Empty;
    }
    let Some(question_row) = find_row_by_text(grid, layout.needle) else {
        return anchor_missing(section, layout.needle);
    };

    let rows = question_row + 1..=question_row + layout.max_lines as u32;
    let heights: Vec<(u32, f64)> = rows
        .clone()
        .filter_map(|row| grid.row_height(row).map(|height| (row, height)))
        .collect();

    let lines = split_text(&value, ctx.profile.answer_max_len, layout.max_lines);
    for (row, line) in rows.zip(&lines) {
        grid.write_cell(row, ctx.profile.answer_start_col, line);
    }
    for (row, height) in heights {
        grid.set_row_height(row, height);
    }
    trace!(field = layout.field.as_str(), lines = lines.len(), "answer written");
    SectionOutcome::written()
}

pub fn write_answers(grid: &mut Grid<'_>, ctx: &SectionContext<'_>, report: &mut GenerationReport) {
    for layout in ctx.profile.answers {
        let outcome = write_answer(grid, ctx, layout);
        report.record_field(SectionKind::Answers, layout.field.as_str(), outcome);
    }
}
