//! Section writers.
//!
//! Every writer follows the same steps: locate its anchor row, work out how
//! many rows it needs, grow the template when the static allotment is too
//! small, then fill values. A template without the anchor is tolerated: the
//! section is skipped with a warning and recorded as
//! [`SectionOutcome::AnchorMissing`].

pub mod answers;
pub mod date_stamp;
pub mod header;
pub mod license;
pub mod photo;
pub mod recommendations;
pub mod tables;

use crate::error::Result;
use crate::layout::{Grid, MediaStore, find_row_by_text};
use crate::locale::{Locale, LocaleProfile, TableLayout};
use crate::model::Candidate;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Education,
    Employment,
    ForeignLanguages,
    Recommendations,
    Family,
    Answers,
    DriverLicense,
    CreatedAt,
    Photo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionOutcome {
    Written { rows_inserted: u32 },
    /// Nothing to write for this candidate.
    Empty,
    AnchorMissing { needle: String },
}

impl SectionOutcome {
    pub fn written() -> Self {
        SectionOutcome::Written { rows_inserted: 0 }
    }

    pub fn rows_inserted(&self) -> u32 {
        match self {
            SectionOutcome::Written { rows_inserted } => *rows_inserted,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub section: SectionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    pub outcome: SectionOutcome,
}

/// What one generation did to the template, section by section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub locale: Locale,
    pub sections: Vec<SectionReport>,
}

impl GenerationReport {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            sections: Vec::new(),
        }
    }

    pub fn record(&mut self, section: SectionKind, outcome: SectionOutcome) {
        self.sections.push(SectionReport {
            section,
            field: None,
            outcome,
        });
    }

    pub fn record_field(&mut self, section: SectionKind, field: &'static str, outcome: SectionOutcome) {
        self.sections.push(SectionReport {
            section,
            field: Some(field),
            outcome,
        });
    }

    pub fn outcome(&self, section: SectionKind) -> Option<&SectionOutcome> {
        self.sections
            .iter()
            .find(|entry| entry.section == section && entry.field.is_none())
            .map(|entry| &entry.outcome)
    }

    pub fn field_outcome(&self, field: &str) -> Option<&SectionOutcome> {
        self.sections
            .iter()
            .find(|entry| entry.field == Some(field))
            .map(|entry| &entry.outcome)
    }

    pub fn rows_inserted(&self) -> u32 {
        self.sections
            .iter()
            .map(|entry| entry.outcome.rows_inserted())
            .sum()
    }

    pub fn missing_anchors(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter_map(|entry| match &entry.outcome {
                SectionOutcome::AnchorMissing { needle } => Some(needle.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Everything a writer reads; the grid is the only thing it mutates.
pub struct SectionContext<'c> {
    pub candidate: &'c Candidate,
    pub profile: &'c LocaleProfile,
    pub media: &'c MediaStore,
}

impl SectionContext<'_> {
    pub fn format_date(&self, date: Option<NaiveDate>) -> String {
        date.map(|date| date.format(self.profile.date_format).to_string())
            .unwrap_or_default()
    }
}

pub fn write_section(
    kind: SectionKind,
    grid: &mut Grid<'_>,
    ctx: &SectionContext<'_>,
    report: &mut GenerationReport,
) -> Result<()> {
    match kind {
        SectionKind::Header => header::write_header(grid, ctx, report),
        SectionKind::Education => {
            report.record(kind, tables::write_education(grid, ctx)?);
        }
        SectionKind::Employment => {
            report.record(kind, tables::write_employment(grid, ctx)?);
        }
        SectionKind::Family => {
            report.record(kind, tables::write_family(grid, ctx)?);
        }
        SectionKind::ForeignLanguages => {
            let layout = &ctx.profile.foreign_languages;
            report.record(kind, answers::write_answer(grid, ctx, layout));
        }
        SectionKind::Recommendations => {
            report.record(kind, recommendations::write_recommendations(grid, ctx)?);
        }
        SectionKind::Answers => answers::write_answers(grid, ctx, report),
        SectionKind::DriverLicense => {
            report.record(kind, license::write_license(grid, ctx));
        }
        SectionKind::CreatedAt => {
            report.record(kind, date_stamp::write_created_at(grid, ctx)?);
        }
        SectionKind::Photo => {
            report.record(kind, photo::write_photo(grid, ctx)?);
        }
    }
    Ok(())
}

pub(crate) fn anchor_missing(section: SectionKind, needle: &str) -> SectionOutcome {
    warn!(?section, needle, "anchor not found in template, section skipped");
    SectionOutcome::AnchorMissing {
        needle: needle.to_string(),
    }
}

/// Rows reserved for a repeating region after growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Region {
    pub first_row: u32,
    pub rows_inserted: u32,
}

/// Finds the region below `layout.anchor` and grows it to hold `count` rows.
///
/// Extra rows go directly after the last static row, copy that row's style
/// and receive the section's merge pattern. `None` when the anchor is absent.
pub(crate) fn grow_region(
    grid: &mut Grid<'_>,
    layout: &TableLayout,
    count: usize,
) -> Result<Option<Region>> {
    let Some(anchor) = find_row_by_text(grid, layout.anchor) else {
        return Ok(None);
    };
    grid.ensure_columns(layout.max_column())?;

    let first_row = anchor + layout.data_offset;
    let deficit = (count as u32).saturating_sub(layout.baseline_rows);
    for k in 0..deficit {
        let index = first_row + layout.baseline_rows + k;
        grid.insert_row(index, index - 1);
        for span in layout.columns {
            grid.apply_merge(index, span.start, span.end);
        }
    }

    Ok(Some(Region {
        first_row,
        rows_inserted: deficit,
    }))
}

/// Joins the non-blank parts with `sep`.
pub(crate) fn join_present<'a>(parts: impl IntoIterator<Item = &'a str>, sep: &str) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_totals_and_missing_anchors() {
        let mut report = GenerationReport::new(Locale::Ru);
        report.record(SectionKind::Education, SectionOutcome::Written { rows_inserted: 2 });
        report.record(SectionKind::Employment, SectionOutcome::Written { rows_inserted: 1 });
        report.record(
            SectionKind::Family,
            SectionOutcome::AnchorMissing {
                needle: "степень родства".into(),
            },
        );
        report.record_field(SectionKind::Header, "phone", SectionOutcome::Empty);

        assert_eq!(report.rows_inserted(), 3);
        assert_eq!(report.missing_anchors(), vec!["степень родства"]);
        assert_eq!(report.field_outcome("phone"), Some(&SectionOutcome::Empty));
        assert_eq!(report.outcome(SectionKind::Header), None);
    }

    #[test]
    fn report_serializes_tagged_outcomes() {
        let mut report = GenerationReport::new(Locale::En);
        report.record(SectionKind::Photo, SectionOutcome::written());
        let json = serde_json::to_value(&report).expect("json");
        assert_eq!(json["locale"], "en");
        assert_eq!(json["sections"][0]["section"], "photo");
        assert_eq!(json["sections"][0]["outcome"]["status"], "written");
        assert_eq!(json["sections"][0]["outcome"]["rows_inserted"], 0);
    }

    #[test]
    fn join_present_skips_blanks() {
        assert_eq!(join_present(["Москва", " ", "ул. Тверская"], ", "), "Москва, ул. Тверская");
        assert_eq!(join_present(["", ""], ", "), "");
    }
}
