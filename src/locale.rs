//! Per-locale questionnaire layouts.
//!
//! Each template is a physical document design, so its geometry lives here as
//! literal tables: anchor phrases, column spans, base row allotments and the
//! order in which sections are written. A [`Locale`] is resolved to its
//! [`LocaleProfile`] once, at the entry point, and the profile is threaded
//! through every section writer.
//!
//! Anchor phrases are matched lowercase against cell text, so they are stored
//! lowercase. Columns are 1-based (`A` = 1).

use crate::sections::SectionKind;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
    Fr,
}

impl Locale {
    pub fn profile(self) -> &'static LocaleProfile {
        match self {
            Locale::Ru => &RU_PROFILE,
            Locale::En => &EN_PROFILE,
            Locale::Fr => &FR_PROFILE,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Inclusive single-row column span, e.g. `A..=E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub start: u32,
    pub end: u32,
}

impl ColumnSpan {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub const fn single(col: u32) -> Self {
        Self {
            start: col,
            end: col,
        }
    }

    pub fn width(&self) -> u32 {
        self.end - self.start + 1
    }
}

/// A repeating table region: anchor row, first data row offset, static row
/// allotment and the merge pattern of one data row.
#[derive(Debug, Clone, Copy)]
pub struct TableLayout {
    pub anchor: &'static str,
    pub data_offset: u32,
    pub baseline_rows: u32,
    pub columns: &'static [ColumnSpan],
}

impl TableLayout {
    pub fn max_column(&self) -> u32 {
        self.columns.iter().map(|span| span.end).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RecommendationLayout {
    pub table: TableLayout,
    pub max_chars_per_line: usize,
    pub line_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderField {
    LastName,
    FirstName,
    MiddleName,
    BirthDate,
    BirthPlace,
    Citizenship,
    Passport,
    RegistrationAddress,
    ResidenceAddress,
    Phone,
    Email,
}

impl HeaderField {
    pub fn as_str(self) -> &'static str {
        match self {
            HeaderField::LastName => "last_name",
            HeaderField::FirstName => "first_name",
            HeaderField::MiddleName => "middle_name",
            HeaderField::BirthDate => "birth_date",
            HeaderField::BirthPlace => "birth_place",
            HeaderField::Citizenship => "citizenship",
            HeaderField::Passport => "passport",
            HeaderField::RegistrationAddress => "registration_address",
            HeaderField::ResidenceAddress => "residence_address",
            HeaderField::Phone => "phone",
            HeaderField::Email => "email",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HeaderLabel {
    pub field: HeaderField,
    pub needle: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerField {
    ForeignLanguages,
    MilitaryService,
    Disqualification,
    ManagementExperience,
    HealthRestrictions,
    VacancySource,
    AcquaintancesInCompany,
    AllowReferenceCheck,
    JobRequirements,
    WorkObstacles,
    SalaryExpectations,
    AdditionalInfo,
}

impl AnswerField {
    pub fn as_str(self) -> &'static str {
        match self {
            AnswerField::ForeignLanguages => "foreign_languages",
            AnswerField::MilitaryService => "military_service",
            AnswerField::Disqualification => "disqualification",
            AnswerField::ManagementExperience => "management_experience",
            AnswerField::HealthRestrictions => "health_restrictions",
            AnswerField::VacancySource => "vacancy_source",
            AnswerField::AcquaintancesInCompany => "acquaintances_in_company",
            AnswerField::AllowReferenceCheck => "allow_reference_check",
            AnswerField::JobRequirements => "job_requirements",
            AnswerField::WorkObstacles => "work_obstacles",
            AnswerField::SalaryExpectations => "salary_expectations",
            AnswerField::AdditionalInfo => "additional_info",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnswerLayout {
    pub field: AnswerField,
    pub needle: &'static str,
    pub max_lines: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct LicenseLayout {
    pub needle: &'static str,
    pub number_col: u32,
    pub date_col: u32,
    /// Written one row below the anchor.
    pub categories_col: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct DateStampLayout {
    pub day_col: u32,
    pub month: ColumnSpan,
    pub year: ColumnSpan,
    pub signature_col: u32,
    pub signature_width: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct PhotoLayout {
    pub start_row: u32,
    pub end_row: u32,
    pub columns: ColumnSpan,
    /// Approximate rendered width of one template column.
    pub px_per_column: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub months: [&'static str; 12],
    pub yes: &'static str,
    pub no: &'static str,
    /// Shown instead of an end date for the current job.
    pub present: &'static str,
    pub full_time: &'static str,
    pub evening: &'static str,
    pub distance: &'static str,
    pub passport_number: &'static str,
    pub passport_issued: &'static str,
}

impl Vocabulary {
    /// `month` is 1-based, as returned by `chrono::Datelike::month`.
    pub fn month_name(&self, month: u32) -> &'static str {
        month
            .checked_sub(1)
            .and_then(|idx| self.months.get(idx as usize))
            .copied()
            .unwrap_or("")
    }
}

#[derive(Debug)]
pub struct LocaleProfile {
    pub locale: Locale,
    pub filename_word: &'static str,
    pub template_file: &'static str,
    pub date_format: &'static str,
    pub vocabulary: Vocabulary,
    pub sequence: &'static [SectionKind],
    pub header_value_col: u32,
    pub header: &'static [HeaderLabel],
    pub education: TableLayout,
    pub employment: TableLayout,
    pub family: TableLayout,
    pub recommendations: RecommendationLayout,
    pub foreign_languages: AnswerLayout,
    pub answers: &'static [AnswerLayout],
    pub answer_max_len: usize,
    pub answer_start_col: u32,
    pub license: LicenseLayout,
    pub date_stamp: DateStampLayout,
    pub photo: PhotoLayout,
}

impl LocaleProfile {
    /// `{word}_{last_name}_{first_name}.xlsx`
    pub fn output_filename(&self, last_name: &str, first_name: &str) -> String {
        format!("{}_{}_{}.xlsx", self.filename_word, last_name, first_name)
    }

    /// Widest column any section of this layout writes to.
    pub fn max_column(&self) -> u32 {
        [
            self.education.max_column(),
            self.employment.max_column(),
            self.family.max_column(),
            self.recommendations.table.max_column(),
            self.photo.columns.end,
            self.date_stamp.signature_col,
            self.license.date_col,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

const RU_SEQUENCE: &[SectionKind] = &[
    SectionKind::Header,
    SectionKind::Education,
    SectionKind::Employment,
    SectionKind::ForeignLanguages,
    SectionKind::Recommendations,
    SectionKind::Family,
    SectionKind::Answers,
    SectionKind::DriverLicense,
    SectionKind::CreatedAt,
    SectionKind::Photo,
];

const FOREIGN_SEQUENCE: &[SectionKind] = &[
    SectionKind::Header,
    SectionKind::Education,
    SectionKind::Employment,
    SectionKind::ForeignLanguages,
    SectionKind::Family,
    SectionKind::Recommendations,
    SectionKind::Answers,
    SectionKind::DriverLicense,
    SectionKind::CreatedAt,
    SectionKind::Photo,
];

// RU template, columns A..N.
const RU_EDUCATION_COLUMNS: &[ColumnSpan] = &[
    ColumnSpan::new(1, 5),
    ColumnSpan::new(6, 7),
    ColumnSpan::new(8, 9),
    ColumnSpan::new(10, 12),
    ColumnSpan::new(13, 14),
];

const RU_EMPLOYMENT_COLUMNS: &[ColumnSpan] = &[
    ColumnSpan::single(1),
    ColumnSpan::new(2, 4),
    ColumnSpan::new(5, 7),
    ColumnSpan::new(8, 9),
    ColumnSpan::new(10, 12),
    ColumnSpan::new(13, 14),
];

const RU_FAMILY_COLUMNS: &[ColumnSpan] = &[
    ColumnSpan::new(1, 3),
    ColumnSpan::new(4, 6),
    ColumnSpan::new(7, 10),
    ColumnSpan::new(11, 14),
];

// EN and FR share one geometry.
const FOREIGN_EDUCATION_COLUMNS: &[ColumnSpan] = &[
    ColumnSpan::new(1, 4),
    ColumnSpan::new(5, 6),
    ColumnSpan::new(7, 8),
    ColumnSpan::new(9, 11),
    ColumnSpan::new(12, 14),
];

const FOREIGN_EMPLOYMENT_COLUMNS: &[ColumnSpan] = &[
    ColumnSpan::new(1, 2),
    ColumnSpan::new(3, 4),
    ColumnSpan::new(5, 7),
    ColumnSpan::new(8, 9),
    ColumnSpan::new(10, 11),
    ColumnSpan::new(12, 14),
];

const FOREIGN_FAMILY_COLUMNS: &[ColumnSpan] = &[
    ColumnSpan::new(1, 3),
    ColumnSpan::new(4, 5),
    ColumnSpan::new(6, 9),
    ColumnSpan::new(10, 14),
];

const FULL_WIDTH: &[ColumnSpan] = &[ColumnSpan::new(1, 14)];

const DATE_STAMP: DateStampLayout = DateStampLayout {
    day_col: 1,
    month: ColumnSpan::new(2, 5),
    year: ColumnSpan::new(6, 7),
    signature_col: 11,
    signature_width: 100,
};

const PHOTO: PhotoLayout = PhotoLayout {
    start_row: 2,
    end_row: 9,
    columns: ColumnSpan::new(12, 14),
    px_per_column: 40,
};

pub static RU_PROFILE: LocaleProfile = LocaleProfile {
    locale: Locale::Ru,
    filename_word: "Анкета",
    template_file: "RUS_2025.xlsx",
    date_format: "%d.%m.%Y",
    vocabulary: Vocabulary {
        months: [
            "января",
            "февраля",
            "марта",
            "апреля",
            "мая",
            "июня",
            "июля",
            "августа",
            "сентября",
            "октября",
            "ноября",
            "декабря",
        ],
        yes: "Да",
        no: "Нет",
        present: "по настоящее время",
        full_time: "Дневная",
        evening: "Вечерняя",
        distance: "Заочная",
        passport_number: "№",
        passport_issued: "выдан",
    },
    sequence: RU_SEQUENCE,
    header_value_col: 5,
    header: &[
        HeaderLabel { field: HeaderField::LastName, needle: "фамилия" },
        HeaderLabel { field: HeaderField::FirstName, needle: "имя" },
        HeaderLabel { field: HeaderField::MiddleName, needle: "отчество" },
        HeaderLabel { field: HeaderField::BirthDate, needle: "дата рождения" },
        HeaderLabel { field: HeaderField::BirthPlace, needle: "место рождения" },
        HeaderLabel { field: HeaderField::Citizenship, needle: "гражданство" },
        HeaderLabel { field: HeaderField::Passport, needle: "паспорт" },
        HeaderLabel { field: HeaderField::RegistrationAddress, needle: "место регистрации" },
        HeaderLabel { field: HeaderField::ResidenceAddress, needle: "место проживания" },
        HeaderLabel { field: HeaderField::Phone, needle: "телефон" },
        HeaderLabel { field: HeaderField::Email, needle: "электронная почта" },
    ],
    education: TableLayout {
        anchor: "учебного заведения",
        data_offset: 1,
        baseline_rows: 4,
        columns: RU_EDUCATION_COLUMNS,
    },
    employment: TableLayout {
        anchor: "дата приема",
        data_offset: 1,
        baseline_rows: 5,
        columns: RU_EMPLOYMENT_COLUMNS,
    },
    family: TableLayout {
        anchor: "степень родства",
        data_offset: 1,
        baseline_rows: 4,
        columns: RU_FAMILY_COLUMNS,
    },
    recommendations: RecommendationLayout {
        table: TableLayout {
            anchor: "рекомендации",
            data_offset: 1,
            baseline_rows: 2,
            columns: FULL_WIDTH,
        },
        max_chars_per_line: 75,
        line_height: 11.0,
    },
    foreign_languages: AnswerLayout {
        field: AnswerField::ForeignLanguages,
        needle: "иностранными языками",
        max_lines: 2,
    },
    answers: &[
        AnswerLayout { field: AnswerField::MilitaryService, needle: "воинская обязанность", max_lines: 2 },
        AnswerLayout { field: AnswerField::Disqualification, needle: "сведения о дисквалификации", max_lines: 2 },
        AnswerLayout { field: AnswerField::ManagementExperience, needle: "предпринимательской деятельности", max_lines: 3 },
        AnswerLayout { field: AnswerField::HealthRestrictions, needle: "ограничения по состоянию здоровья", max_lines: 2 },
        AnswerLayout { field: AnswerField::VacancySource, needle: "источник информации о вакансии", max_lines: 1 },
        AnswerLayout { field: AnswerField::AcquaintancesInCompany, needle: "родственники или знакомые в компании", max_lines: 2 },
        AnswerLayout { field: AnswerField::AllowReferenceCheck, needle: "запрос рекомендаций", max_lines: 1 },
        AnswerLayout { field: AnswerField::JobRequirements, needle: "дополнительные требования", max_lines: 2 },
        AnswerLayout { field: AnswerField::WorkObstacles, needle: "факторы, препятствующие работе", max_lines: 2 },
        AnswerLayout { field: AnswerField::SalaryExpectations, needle: "заработной плате", max_lines: 1 },
        AnswerLayout { field: AnswerField::AdditionalInfo, needle: "другие сведения", max_lines: 3 },
    ],
    answer_max_len: 100,
    answer_start_col: 1,
    license: LicenseLayout {
        needle: "водительское удостоверение",
        number_col: 7,
        date_col: 12,
        categories_col: 7,
    },
    date_stamp: DATE_STAMP,
    photo: PHOTO,
};

const EN_HEADER: &[HeaderLabel] = &[
    HeaderLabel { field: HeaderField::LastName, needle: "last name" },
    HeaderLabel { field: HeaderField::FirstName, needle: "first name" },
    HeaderLabel { field: HeaderField::MiddleName, needle: "middle name" },
    HeaderLabel { field: HeaderField::BirthDate, needle: "date of birth" },
    HeaderLabel { field: HeaderField::BirthPlace, needle: "place of birth" },
    HeaderLabel { field: HeaderField::Citizenship, needle: "citizenship" },
    HeaderLabel { field: HeaderField::Passport, needle: "passport" },
    HeaderLabel { field: HeaderField::RegistrationAddress, needle: "registration address" },
    HeaderLabel { field: HeaderField::ResidenceAddress, needle: "residential address" },
    HeaderLabel { field: HeaderField::Phone, needle: "phone" },
    HeaderLabel { field: HeaderField::Email, needle: "e-mail" },
];

const EN_ANSWERS: &[AnswerLayout] = &[
    AnswerLayout { field: AnswerField::MilitaryService, needle: "military service", max_lines: 2 },
    AnswerLayout { field: AnswerField::Disqualification, needle: "subject to disqualification", max_lines: 2 },
    AnswerLayout { field: AnswerField::ManagementExperience, needle: "management or entrepreneurship experience", max_lines: 3 },
    AnswerLayout { field: AnswerField::HealthRestrictions, needle: "health restrictions", max_lines: 2 },
    AnswerLayout { field: AnswerField::VacancySource, needle: "learn about the vacancy", max_lines: 1 },
    AnswerLayout { field: AnswerField::AcquaintancesInCompany, needle: "acquaintances in the company", max_lines: 2 },
    AnswerLayout { field: AnswerField::AllowReferenceCheck, needle: "reference check", max_lines: 1 },
    AnswerLayout { field: AnswerField::JobRequirements, needle: "additional requirements", max_lines: 2 },
    AnswerLayout { field: AnswerField::WorkObstacles, needle: "prevent you from working", max_lines: 2 },
    AnswerLayout { field: AnswerField::SalaryExpectations, needle: "salary expectations", max_lines: 1 },
    AnswerLayout { field: AnswerField::AdditionalInfo, needle: "other information", max_lines: 3 },
];

pub static EN_PROFILE: LocaleProfile = LocaleProfile {
    locale: Locale::En,
    filename_word: "Application_form",
    template_file: "ENG_2025.xlsx",
    date_format: "%d/%m/%Y",
    vocabulary: Vocabulary {
        months: [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ],
        yes: "Yes",
        no: "No",
        present: "present",
        full_time: "Full-time",
        evening: "Evening",
        distance: "Distance",
        passport_number: "No.",
        passport_issued: "issued by",
    },
    sequence: FOREIGN_SEQUENCE,
    header_value_col: 5,
    header: EN_HEADER,
    education: TableLayout {
        anchor: "educational institution",
        data_offset: 1,
        baseline_rows: 3,
        columns: FOREIGN_EDUCATION_COLUMNS,
    },
    employment: TableLayout {
        anchor: "date of employment",
        data_offset: 1,
        baseline_rows: 4,
        columns: FOREIGN_EMPLOYMENT_COLUMNS,
    },
    family: TableLayout {
        anchor: "relationship",
        data_offset: 1,
        baseline_rows: 3,
        columns: FOREIGN_FAMILY_COLUMNS,
    },
    recommendations: RecommendationLayout {
        table: TableLayout {
            anchor: "recommendations",
            data_offset: 1,
            baseline_rows: 3,
            columns: FULL_WIDTH,
        },
        max_chars_per_line: 75,
        line_height: 11.0,
    },
    foreign_languages: AnswerLayout {
        field: AnswerField::ForeignLanguages,
        needle: "foreign languages",
        max_lines: 2,
    },
    answers: EN_ANSWERS,
    answer_max_len: 95,
    answer_start_col: 1,
    license: LicenseLayout {
        needle: "driver's license",
        number_col: 7,
        date_col: 12,
        categories_col: 7,
    },
    date_stamp: DATE_STAMP,
    photo: PHOTO,
};

const FR_HEADER: &[HeaderLabel] = &[
    HeaderLabel { field: HeaderField::LastName, needle: "nom de famille" },
    HeaderLabel { field: HeaderField::FirstName, needle: "prénom" },
    HeaderLabel { field: HeaderField::MiddleName, needle: "deuxième prénom" },
    HeaderLabel { field: HeaderField::BirthDate, needle: "date de naissance" },
    HeaderLabel { field: HeaderField::BirthPlace, needle: "lieu de naissance" },
    HeaderLabel { field: HeaderField::Citizenship, needle: "nationalité" },
    HeaderLabel { field: HeaderField::Passport, needle: "passeport" },
    HeaderLabel { field: HeaderField::RegistrationAddress, needle: "adresse d'enregistrement" },
    HeaderLabel { field: HeaderField::ResidenceAddress, needle: "adresse de résidence" },
    HeaderLabel { field: HeaderField::Phone, needle: "téléphone" },
    HeaderLabel { field: HeaderField::Email, needle: "e-mail" },
];

const FR_ANSWERS: &[AnswerLayout] = &[
    AnswerLayout { field: AnswerField::MilitaryService, needle: "service militaire", max_lines: 2 },
    AnswerLayout { field: AnswerField::Disqualification, needle: "mesure de disqualification", max_lines: 2 },
    AnswerLayout { field: AnswerField::ManagementExperience, needle: "expérience en entrepreneuriat", max_lines: 3 },
    AnswerLayout { field: AnswerField::HealthRestrictions, needle: "restrictions de santé", max_lines: 2 },
    AnswerLayout { field: AnswerField::VacancySource, needle: "connaissance du poste", max_lines: 1 },
    AnswerLayout { field: AnswerField::AcquaintancesInCompany, needle: "connaissances dans l'entreprise", max_lines: 2 },
    AnswerLayout { field: AnswerField::AllowReferenceCheck, needle: "prise de références", max_lines: 1 },
    AnswerLayout { field: AnswerField::JobRequirements, needle: "exigences supplémentaires", max_lines: 2 },
    AnswerLayout { field: AnswerField::WorkObstacles, needle: "empêcher de travailler", max_lines: 2 },
    AnswerLayout { field: AnswerField::SalaryExpectations, needle: "prétentions salariales", max_lines: 1 },
    AnswerLayout { field: AnswerField::AdditionalInfo, needle: "autres informations", max_lines: 3 },
];

pub static FR_PROFILE: LocaleProfile = LocaleProfile {
    locale: Locale::Fr,
    filename_word: "Formulaire",
    template_file: "FRA_2025.xlsx",
    date_format: "%d/%m/%Y",
    vocabulary: Vocabulary {
        months: [
            "janvier",
            "février",
            "mars",
            "avril",
            "mai",
            "juin",
            "juillet",
            "août",
            "septembre",
            "octobre",
            "novembre",
            "décembre",
        ],
        yes: "Oui",
        no: "Non",
        present: "à ce jour",
        full_time: "Temps plein",
        evening: "Cours du soir",
        distance: "À distance",
        passport_number: "n°",
        passport_issued: "délivré par",
    },
    sequence: FOREIGN_SEQUENCE,
    header_value_col: 5,
    header: FR_HEADER,
    education: TableLayout {
        anchor: "établissement d'enseignement",
        data_offset: 1,
        baseline_rows: 3,
        columns: FOREIGN_EDUCATION_COLUMNS,
    },
    employment: TableLayout {
        anchor: "date d'embauche",
        data_offset: 1,
        baseline_rows: 4,
        columns: FOREIGN_EMPLOYMENT_COLUMNS,
    },
    family: TableLayout {
        anchor: "lien de parenté",
        data_offset: 1,
        baseline_rows: 3,
        columns: FOREIGN_FAMILY_COLUMNS,
    },
    recommendations: RecommendationLayout {
        table: TableLayout {
            anchor: "recommandations",
            data_offset: 1,
            baseline_rows: 3,
            columns: FULL_WIDTH,
        },
        max_chars_per_line: 75,
        line_height: 11.0,
    },
    foreign_languages: AnswerLayout {
        field: AnswerField::ForeignLanguages,
        needle: "langues étrangères",
        max_lines: 2,
    },
    answers: FR_ANSWERS,
    answer_max_len: 95,
    answer_start_col: 1,
    license: LicenseLayout {
        needle: "permis de conduire",
        number_col: 7,
        date_col: 12,
        categories_col: 7,
    },
    date_stamp: DATE_STAMP,
    photo: PHOTO,
};
