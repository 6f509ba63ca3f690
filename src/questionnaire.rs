//! Per-locale questionnaire generation.

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::layout::{Grid, MediaStore};
use crate::locale::{Locale, LocaleProfile};
use crate::log_slow_operation;
use crate::logging::generation_span;
use crate::model::Candidate;
use crate::sections::{GenerationReport, SectionContext, write_section};
use crate::workbook::{load_template, worksheet_mut, write_temp};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use umya_spreadsheet::Worksheet;

/// A filled questionnaire in a temporary file.
///
/// The file is deleted when this value drops unless it was persisted.
#[derive(Debug)]
pub struct GeneratedQuestionnaire {
    pub file: NamedTempFile,
    pub filename: String,
    pub report: GenerationReport,
}

impl GeneratedQuestionnaire {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn bytes(&self) -> Result<Vec<u8>> {
        Ok(fs::read(self.file.path())?)
    }

    /// Copies the document to `dest`, leaving the temp file in place.
    pub fn persist_to(&self, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::copy(self.file.path(), dest)?;
        Ok(())
    }
}

/// Runs every section of `profile` against `sheet`, in the locale's order.
pub fn fill_worksheet(
    sheet: &mut Worksheet,
    candidate: &Candidate,
    profile: &LocaleProfile,
    media: &MediaStore,
) -> Result<GenerationReport> {
    let mut grid = Grid::new(sheet);
    let ctx = SectionContext {
        candidate,
        profile,
        media,
    };
    let mut report = GenerationReport::new(profile.locale);
    for &kind in profile.sequence {
        write_section(kind, &mut grid, &ctx, &mut report)?;
        debug!(section = ?kind, "section done");
    }
    Ok(report)
}

#[derive(Debug, Clone)]
pub struct QuestionnaireGenerator {
    config: Arc<GeneratorConfig>,
}

impl QuestionnaireGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates in the candidate's communication language.
    pub fn generate(&self, candidate: &Candidate) -> Result<GeneratedQuestionnaire> {
        self.generate_for(candidate, candidate.locale())
    }

    pub fn generate_for(&self, candidate: &Candidate, locale: Locale) -> Result<GeneratedQuestionnaire> {
        let span = generation_span(locale.code(), &candidate.full_name());
        let _enter = span.enter();
        let started = Instant::now();

        let profile = locale.profile();
        let template = self.config.template_path(locale);
        let mut book = load_template(&template)?;
        let sheet = worksheet_mut(&mut book, self.config.sheet_name.as_deref())?;

        let media = self.config.media_store();
        let report = fill_worksheet(sheet, candidate, profile, &media)?;

        let file = write_temp(&book, &self.config.output_dir())?;
        let filename = profile.output_filename(&candidate.last_name, &candidate.first_name);

        log_slow_operation!(
            started.elapsed(),
            self.config.slow_threshold_ms,
            template = %template.display(),
            "questionnaire generation"
        );
        info!(
            filename = %filename,
            rows_inserted = report.rows_inserted(),
            missing_anchors = report.missing_anchors().len(),
            "questionnaire generated"
        );

        Ok(GeneratedQuestionnaire {
            file,
            filename,
            report,
        })
    }
}
