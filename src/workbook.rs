//! Template loading and output persistence.

use crate::error::{QuestionnaireError, Result};
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;
use umya_spreadsheet::reader::xlsx;
use umya_spreadsheet::{Spreadsheet, Worksheet};

/// Reads a template workbook. Each call returns an independent copy.
pub fn load_template(path: &Path) -> Result<Spreadsheet> {
    let metadata = fs::metadata(path).map_err(|err| QuestionnaireError::TemplateRead {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let book = xlsx::read(path).map_err(|err| QuestionnaireError::TemplateRead {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    debug!(path = %path.display(), bytes = metadata.len(), "template loaded");
    Ok(book)
}

/// The named worksheet, or the first one when `name` is `None`.
pub fn worksheet_mut<'a>(book: &'a mut Spreadsheet, name: Option<&str>) -> Result<&'a mut Worksheet> {
    match name {
        Some(name) => book
            .get_sheet_by_name_mut(name)
            .ok_or_else(|| QuestionnaireError::SheetNotFound(name.to_string())),
        None => book
            .get_sheet_mut(&0)
            .ok_or_else(|| QuestionnaireError::SheetNotFound("#0".to_string())),
    }
}

pub fn sheet_names(book: &Spreadsheet) -> Vec<String> {
    book.get_sheet_collection()
        .iter()
        .map(|sheet| sheet.get_name().to_string())
        .collect()
}

/// Serializes `book` into a fresh `.xlsx` temp file inside `dir`.
///
/// The file is removed when the handle drops unless it is persisted.
pub fn write_temp(book: &Spreadsheet, dir: &Path) -> Result<NamedTempFile> {
    let file = tempfile::Builder::new()
        .prefix("questionnaire-")
        .suffix(".xlsx")
        .tempfile_in(dir)?;
    umya_spreadsheet::writer::xlsx::write(book, file.path()).map_err(|err| {
        QuestionnaireError::Write {
            path: file.path().to_path_buf(),
            message: err.to_string(),
        }
    })?;
    debug!(path = %file.path().display(), "questionnaire written");
    Ok(file)
}
