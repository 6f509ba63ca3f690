#![allow(dead_code)]
pub mod builders;

use std::path::{Path, PathBuf};

use questionnaire_xlsx::GeneratorConfig;
use tempfile::{TempDir, tempdir};
use umya_spreadsheet::{self, Border, Spreadsheet, Worksheet};

/// Row numbers of the Russian test template, before any insertion.
pub mod ru_rows {
    pub const LAST_NAME: u32 = 2;
    pub const FIRST_NAME: u32 = 3;
    pub const PASSPORT: u32 = 8;
    pub const PHONE: u32 = 11;
    pub const EDUCATION_ANCHOR: u32 = 13;
    pub const EDUCATION_FIRST: u32 = 14;
    pub const EMPLOYMENT_ANCHOR: u32 = 18;
    pub const EMPLOYMENT_FIRST: u32 = 19;
    pub const LANGUAGES_ANCHOR: u32 = 24;
    pub const RECOMMENDATIONS_ANCHOR: u32 = 27;
    pub const RECOMMENDATIONS_FIRST: u32 = 28;
    pub const FAMILY_ANCHOR: u32 = 30;
    pub const FAMILY_FIRST: u32 = 31;
    pub const MILITARY_ANCHOR: u32 = 35;
    pub const MILITARY_SECOND_LINE_HEIGHT: f64 = 24.0;
    pub const LICENSE_ANCHOR: u32 = 38;
    pub const SALARY_ANCHOR: u32 = 40;
    pub const SALARY_ANSWER: u32 = 41;
    pub const SALARY_ANSWER_HEIGHT: f64 = 30.0;
    pub const DATE_STAMP: u32 = 42;
}

/// Row numbers of the English test template.
pub mod en_rows {
    pub const LAST_NAME: u32 = 2;
    pub const EDUCATION_ANCHOR: u32 = 6;
    pub const EDUCATION_FIRST: u32 = 7;
    pub const FAMILY_ANCHOR: u32 = 10;
    pub const FAMILY_FIRST: u32 = 11;
    pub const RECOMMENDATIONS_ANCHOR: u32 = 14;
    pub const RECOMMENDATIONS_FIRST: u32 = 15;
    pub const HEALTH_ANCHOR: u32 = 19;
    pub const DATE_STAMP: u32 = 22;
}

fn label(sheet: &mut Worksheet, row: u32, col: u32, text: &str) {
    sheet.get_cell_mut((col, row)).set_value_string(text);
}

fn merge_rows(sheet: &mut Worksheet, rows: std::ops::RangeInclusive<u32>, spans: &[(u32, u32)]) {
    for row in rows {
        for &(start, end) in spans {
            if end > start {
                let range = format!(
                    "{}:{}",
                    questionnaire_xlsx::utils::cell_address(start, row),
                    questionnaire_xlsx::utils::cell_address(end, row)
                );
                sheet.add_merge_cells(range);
            }
        }
    }
}

fn bordered(sheet: &mut Worksheet, row: u32, max_col: u32) {
    for col in 1..=max_col {
        sheet
            .get_style_mut((col, row))
            .get_borders_mut()
            .get_bottom_mut()
            .set_border_style(Border::BORDER_THIN);
    }
}

pub const RU_EDUCATION_SPANS: &[(u32, u32)] = &[(1, 5), (6, 7), (8, 9), (10, 12), (13, 14)];
pub const RU_EMPLOYMENT_SPANS: &[(u32, u32)] =
    &[(1, 1), (2, 4), (5, 7), (8, 9), (10, 12), (13, 14)];
pub const RU_FAMILY_SPANS: &[(u32, u32)] = &[(1, 3), (4, 6), (7, 10), (11, 14)];

/// Fills `book`'s first sheet with the Russian questionnaire layout.
pub fn build_ru_template(book: &mut Spreadsheet, with_family: bool) {
    let sheet = book.get_sheet_mut(&0).expect("default sheet");
    use ru_rows::*;

    label(sheet, 1, 1, "АНКЕТА КАНДИДАТА");
    label(sheet, 1, 14, "Фото");
    for (row, text) in [
        (LAST_NAME, "Фамилия"),
        (FIRST_NAME, "Имя"),
        (4, "Отчество"),
        (5, "Дата рождения"),
        (6, "Место рождения"),
        (7, "Гражданство"),
        (PASSPORT, "Паспорт"),
        (9, "Место регистрации"),
        (10, "Место проживания"),
        (PHONE, "Телефон"),
        (12, "Электронная почта"),
    ] {
        label(sheet, row, 1, text);
    }

    label(sheet, EDUCATION_ANCHOR, 1, "Наименование учебного заведения, местонахождение");
    label(sheet, EDUCATION_ANCHOR, 6, "Год окончания");
    label(sheet, EDUCATION_ANCHOR, 8, "Форма обучения");
    label(sheet, EDUCATION_ANCHOR, 10, "Специальность");
    label(sheet, EDUCATION_ANCHOR, 13, "Диплом");
    merge_rows(sheet, EDUCATION_FIRST..=EDUCATION_FIRST + 3, RU_EDUCATION_SPANS);
    for row in EDUCATION_FIRST..=EDUCATION_FIRST + 3 {
        bordered(sheet, row, 14);
    }
    sheet
        .get_style_mut((1, EDUCATION_FIRST + 3))
        .get_font_mut()
        .set_bold(true);

    label(sheet, EMPLOYMENT_ANCHOR, 1, "Дата приема");
    label(sheet, EMPLOYMENT_ANCHOR, 2, "Дата увольнения");
    label(sheet, EMPLOYMENT_ANCHOR, 5, "Должность, организация");
    merge_rows(sheet, EMPLOYMENT_FIRST..=EMPLOYMENT_FIRST + 4, RU_EMPLOYMENT_SPANS);

    label(sheet, LANGUAGES_ANCHOR, 1, "Владение иностранными языками");

    label(sheet, RECOMMENDATIONS_ANCHOR, 1, "Рекомендации");
    merge_rows(
        sheet,
        RECOMMENDATIONS_FIRST..=RECOMMENDATIONS_FIRST + 1,
        &[(1, 14)],
    );

    if with_family {
        label(sheet, FAMILY_ANCHOR, 1, "Степень родства");
        label(sheet, FAMILY_ANCHOR, 4, "Дата рождения");
    } else {
        label(sheet, FAMILY_ANCHOR, 1, "Близкие родственники");
    }
    merge_rows(sheet, FAMILY_FIRST..=FAMILY_FIRST + 3, RU_FAMILY_SPANS);

    label(sheet, MILITARY_ANCHOR, 1, "Воинская обязанность, категория запаса");
    sheet
        .get_row_dimension_mut(&(MILITARY_ANCHOR + 2))
        .set_height(MILITARY_SECOND_LINE_HEIGHT);
    label(sheet, LICENSE_ANCHOR, 1, "Водительское удостоверение №");
    label(sheet, LICENSE_ANCHOR, 10, "дата выдачи");
    label(sheet, LICENSE_ANCHOR + 1, 1, "Категории");

    label(sheet, SALARY_ANCHOR, 1, "Ожидания по заработной плате");
    sheet
        .get_row_dimension_mut(&SALARY_ANSWER)
        .set_height(SALARY_ANSWER_HEIGHT);

    label(sheet, DATE_STAMP, 1, "\"    \"");
    label(sheet, DATE_STAMP, 8, "г.");
    label(sheet, DATE_STAMP, 9, "Подпись");
}

/// Fills `book`'s first sheet with the English questionnaire layout.
pub fn build_en_template(book: &mut Spreadsheet) {
    let sheet = book.get_sheet_mut(&0).expect("default sheet");
    use en_rows::*;

    label(sheet, 1, 1, "APPLICATION FORM");
    label(sheet, 1, 14, "Photo");
    label(sheet, LAST_NAME, 1, "Last name");
    label(sheet, 3, 1, "First name");
    label(sheet, 4, 1, "Date of birth");

    label(sheet, EDUCATION_ANCHOR, 1, "Educational institution");
    merge_rows(
        sheet,
        EDUCATION_FIRST..=EDUCATION_FIRST + 2,
        &[(1, 4), (5, 6), (7, 8), (9, 11), (12, 14)],
    );

    label(sheet, FAMILY_ANCHOR, 1, "Relationship");
    merge_rows(
        sheet,
        FAMILY_FIRST..=FAMILY_FIRST + 2,
        &[(1, 3), (4, 5), (6, 9), (10, 14)],
    );

    label(sheet, RECOMMENDATIONS_ANCHOR, 1, "Recommendations");
    merge_rows(
        sheet,
        RECOMMENDATIONS_FIRST..=RECOMMENDATIONS_FIRST + 2,
        &[(1, 14)],
    );

    label(sheet, HEALTH_ANCHOR, 1, "Health restrictions relevant to the position");

    label(sheet, DATE_STAMP, 1, "\"   \"");
}

pub fn write_workbook_to_path<F>(path: &Path, f: F)
where
    F: FnOnce(&mut Spreadsheet),
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create dir");
    }
    let mut book = umya_spreadsheet::new_file();
    f(&mut book);
    umya_spreadsheet::writer::xlsx::write(&book, path).expect("write workbook");
}

pub fn ru_book(with_family: bool) -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file();
    build_ru_template(&mut book, with_family);
    book
}

pub fn en_book() -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file();
    build_en_template(&mut book);
    book
}

/// Writes a solid PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create dir");
    }
    image::RgbImage::from_pixel(width, height, image::Rgb([200, 180, 160]))
        .save(path)
        .expect("write png");
}

pub struct TestWorkspace {
    _tempdir: TempDir,
    root: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let tempdir = tempdir().expect("tempdir");
        let root = tempdir.path().to_path_buf();
        Self {
            _tempdir: tempdir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.path("templates")
    }

    pub fn media_dir(&self) -> PathBuf {
        self.path("media")
    }

    pub fn output_dir(&self) -> PathBuf {
        let dir = self.path("out");
        std::fs::create_dir_all(&dir).expect("create out dir");
        dir
    }

    /// Writes the Russian, English and French templates under `templates/`.
    pub fn install_templates(&self) {
        let dir = self.templates_dir();
        write_workbook_to_path(&dir.join("RUS_2025.xlsx"), |book| {
            build_ru_template(book, true)
        });
        write_workbook_to_path(&dir.join("ENG_2025.xlsx"), build_en_template);
        write_workbook_to_path(&dir.join("FRA_2025.xlsx"), |book| {
            let sheet = book.get_sheet_mut(&0).expect("sheet");
            sheet.get_cell_mut((1, 1)).set_value_string("FORMULAIRE");
            sheet.get_cell_mut((14, 1)).set_value_string("Photo");
            sheet.get_cell_mut((1, 2)).set_value_string("Nom de famille");
            sheet.get_cell_mut((1, 5)).set_value_string("Lien de parenté");
        });
    }

    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.templates_dir())
            .with_media_root(self.media_dir())
            .with_output_dir(self.output_dir())
    }
}
