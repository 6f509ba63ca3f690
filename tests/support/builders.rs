use chrono::{NaiveDate, NaiveDateTime};
use questionnaire_xlsx::locale::Locale;
use questionnaire_xlsx::model::{
    Candidate, Citizenship, Education, EducationForm, Employment, FamilyMember, Recommendation,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn timestamp(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(10, 30, 0).expect("valid time")
}

pub struct CandidateBuilder {
    candidate: Candidate,
}

impl CandidateBuilder {
    pub fn new(last_name: &str, first_name: &str) -> Self {
        Self {
            candidate: Candidate {
                last_name: last_name.to_string(),
                first_name: first_name.to_string(),
                ..Candidate::default()
            },
        }
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.candidate.communication_language = Some(locale);
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.candidate.phone = phone.to_string();
        self
    }

    pub fn passport(mut self, series: &str, number: &str) -> Self {
        self.candidate.citizenship = Some(Citizenship {
            citizenship: "Российская Федерация".to_string(),
            passport_series: series.to_string(),
            passport_number: number.to_string(),
            ..Citizenship::default()
        });
        self
    }

    pub fn education(mut self, institution: &str, year: i32) -> Self {
        self.candidate.educations.push(Education {
            institution_name: institution.to_string(),
            graduation_year: Some(year),
            education_form: Some(EducationForm::FullTime),
            specialty: "Прикладная математика".to_string(),
            ..Education::default()
        });
        self
    }

    pub fn job(mut self, organization: &str, start: NaiveDate, end: Option<NaiveDate>) -> Self {
        self.candidate.employments.push(Employment {
            start_date: Some(start),
            end_date: end,
            position: "Инженер".to_string(),
            organization: organization.to_string(),
            ..Employment::default()
        });
        self
    }

    pub fn relative(mut self, relation: &str, birth_year: i32) -> Self {
        self.candidate.family_members.push(FamilyMember {
            relation: relation.to_string(),
            birth_year: Some(birth_year),
            occupation: "Пенсионер".to_string(),
            residence: "Тверь".to_string(),
            ..FamilyMember::default()
        });
        self
    }

    pub fn relative_working(mut self, relation: &str, birth_year: i32, occupation: &str) -> Self {
        self.candidate.family_members.push(FamilyMember {
            relation: relation.to_string(),
            birth_year: Some(birth_year),
            occupation: occupation.to_string(),
            ..FamilyMember::default()
        });
        self
    }

    pub fn recommendation(mut self, referrer: &str, company: &str, text: &str) -> Self {
        self.candidate.recommendations.push(Recommendation {
            referrer_name: referrer.to_string(),
            company: company.to_string(),
            text: text.to_string(),
            ..Recommendation::default()
        });
        self
    }

    pub fn health(mut self, text: &str) -> Self {
        self.candidate.health_restrictions = text.to_string();
        self
    }

    pub fn recommendation_text(mut self, text: &str) -> Self {
        self.candidate.recommendations.push(Recommendation {
            text: text.to_string(),
            ..Recommendation::default()
        });
        self
    }

    pub fn license(mut self, number: &str, issued: NaiveDate, categories: &str) -> Self {
        self.candidate.driver_license_number = number.to_string();
        self.candidate.driver_license_issue_date = Some(issued);
        self.candidate.driver_license_categories = categories.to_string();
        self
    }

    pub fn salary(mut self, text: &str) -> Self {
        self.candidate.salary_expectations = text.to_string();
        self
    }

    pub fn military(mut self, text: &str) -> Self {
        self.candidate.military_service = text.to_string();
        self
    }

    pub fn created_at(mut self, at: NaiveDateTime) -> Self {
        self.candidate.created_at = Some(at);
        self
    }

    pub fn photo(mut self, path: &str) -> Self {
        self.candidate.photo = Some(path.into());
        self
    }

    pub fn signature(mut self, path: &str) -> Self {
        self.candidate.signature = Some(path.into());
        self
    }

    pub fn build(self) -> Candidate {
        self.candidate
    }
}
