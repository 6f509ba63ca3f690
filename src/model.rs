//! Candidate aggregate consumed by the generator.
//!
//! The aggregate is read-only input. Every field defaults so partially filled
//! questionnaires deserialize; empty values simply produce no output.

use crate::error::{QuestionnaireError, Result};
use crate::locale::Locale;
use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationForm {
    FullTime,
    Evening,
    Distance,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution_name: String,
    pub institution_location: String,
    pub graduation_year: Option<i32>,
    pub education_form: Option<EducationForm>,
    pub specialty: String,
    pub diploma_information: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employment {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub position: String,
    pub organization: String,
    pub organization_address: String,
    pub organization_phone: String,
    pub manager_full_name: String,
    pub dismissal_reason: String,
}

impl Employment {
    /// No end date means the candidate still works there.
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }
}

/// Current jobs first, then end date descending, then start date descending.
pub fn employment_order(a: &Employment, b: &Employment) -> Ordering {
    b.is_current()
        .cmp(&a.is_current())
        .then_with(|| b.end_date.cmp(&a.end_date))
        .then_with(|| b.start_date.cmp(&a.start_date))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyMember {
    pub relation: String,
    pub birth_year: Option<i32>,
    pub birth_date: Option<NaiveDate>,
    pub occupation: String,
    pub residence: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub company: String,
    pub referrer_name: String,
    pub position: String,
    pub contact: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Citizenship {
    pub citizenship: String,
    pub passport_series: String,
    pub passport_number: String,
    pub passport_issued_by: String,
    pub passport_issue_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub birth_date: Option<NaiveDate>,
    pub birth_place: String,
    pub phone: String,
    pub email: String,
    pub registration_address: String,
    pub residence_address: String,

    pub driver_license_number: String,
    pub driver_license_issue_date: Option<NaiveDate>,
    pub driver_license_categories: String,

    pub communication_language: Option<Locale>,

    pub foreign_languages: String,
    pub military_service: String,
    pub disqualification: String,
    pub management_experience: String,
    pub health_restrictions: String,
    pub vacancy_source: String,
    pub acquaintances_in_company: String,
    pub allow_reference_check: Option<bool>,
    pub job_requirements: String,
    pub work_obstacles: String,
    pub additional_info: String,
    pub salary_expectations: String,

    pub photo: Option<PathBuf>,
    pub signature: Option<PathBuf>,

    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,

    pub citizenship: Option<Citizenship>,
    pub educations: Vec<Education>,
    pub employments: Vec<Employment>,
    pub family_members: Vec<FamilyMember>,
    pub recommendations: Vec<Recommendation>,
}

impl Candidate {
    /// Loads a candidate from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: &Path) -> Result<Self> {
        parse_document(path)
    }

    pub fn locale(&self) -> Locale {
        self.communication_language.unwrap_or_default()
    }

    /// `Last First Middle`, skipping blanks.
    pub fn full_name(&self) -> String {
        [&self.last_name, &self.first_name, &self.middle_name]
            .into_iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Educations by graduation year, unknown years last.
    pub fn sorted_educations(&self) -> Vec<&Education> {
        let mut educations: Vec<&Education> = self.educations.iter().collect();
        educations.sort_by_key(|education| (education.graduation_year.is_none(), education.graduation_year));
        educations
    }

    pub fn sorted_employments(&self) -> Vec<&Employment> {
        let mut employments: Vec<&Employment> = self.employments.iter().collect();
        employments.sort_by(|a, b| employment_order(a, b));
        employments
    }
}

fn parse_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .map_err(|err| QuestionnaireError::InvalidInput(format!("{}: {err}", path.display()))),
        "json" => serde_json::from_str(&contents)
            .map_err(|err| QuestionnaireError::InvalidInput(format!("{}: {err}", path.display()))),
        other => Err(QuestionnaireError::InvalidInput(format!(
            "unsupported candidate extension {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn job(start: Option<NaiveDate>, end: Option<NaiveDate>, label: &str) -> Employment {
        Employment {
            start_date: start,
            end_date: end,
            organization: label.to_string(),
            ..Employment::default()
        }
    }

    #[test]
    fn employments_put_current_job_first() {
        let candidate = Candidate {
            employments: vec![
                job(date(2015, 1, 1), date(2017, 6, 1), "old"),
                job(date(2019, 3, 1), None, "current"),
                job(date(2017, 7, 1), date(2019, 2, 1), "recent"),
                job(date(2016, 1, 1), date(2017, 6, 1), "overlap"),
            ],
            ..Candidate::default()
        };
        let order: Vec<&str> = candidate
            .sorted_employments()
            .iter()
            .map(|job| job.organization.as_str())
            .collect();
        assert_eq!(order, vec!["current", "recent", "overlap", "old"]);
    }

    #[test]
    fn educations_sort_by_year_with_unknown_last() {
        let candidate = Candidate {
            educations: vec![
                Education { graduation_year: Some(2012), ..Education::default() },
                Education { graduation_year: None, ..Education::default() },
                Education { graduation_year: Some(2008), ..Education::default() },
            ],
            ..Candidate::default()
        };
        let years: Vec<Option<i32>> = candidate
            .sorted_educations()
            .iter()
            .map(|e| e.graduation_year)
            .collect();
        assert_eq!(years, vec![Some(2008), Some(2012), None]);
    }

    #[test]
    fn partial_json_deserializes() {
        let candidate: Candidate = serde_json::from_str(
            r#"{
                "last_name": "Иванов",
                "first_name": "Пётр",
                "communication_language": "en",
                "birth_date": "1990-04-12",
                "created_at": "2025-03-05T10:15:00",
                "educations": [{"institution_name": "МГУ", "education_form": "full_time"}]
            }"#,
        )
        .expect("candidate");
        assert_eq!(candidate.locale(), Locale::En);
        assert_eq!(candidate.full_name(), "Иванов Пётр");
        assert_eq!(candidate.educations[0].education_form, Some(EducationForm::FullTime));
        assert!(candidate.family_members.is_empty());
        assert_eq!(candidate.allow_reference_check, None);
    }

    #[test]
    fn locale_defaults_to_russian() {
        assert_eq!(Candidate::default().locale(), Locale::Ru);
    }

    #[test]
    fn from_path_reads_yaml_and_rejects_other_extensions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let yaml = dir.path().join("candidate.yaml");
        fs::write(&yaml, "last_name: Smith\nfirst_name: Anna\nallow_reference_check: true\n")
            .expect("write");
        let candidate = Candidate::from_path(&yaml).expect("yaml candidate");
        assert_eq!(candidate.allow_reference_check, Some(true));

        let txt = dir.path().join("candidate.txt");
        fs::write(&txt, "last_name: Smith").expect("write");
        let err = Candidate::from_path(&txt).unwrap_err();
        assert_eq!(err.code().category(), "input_error");
    }
}
