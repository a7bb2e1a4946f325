use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::job::{EmploymentType, SalaryRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum UserRole {
    Jobseeker,
    Recruiter,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub phone: String,
    pub city: String,
    pub country: String,
    pub company: Option<String>,
    pub company_size: Option<String>,
    pub industry: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerEntry {
    pub organization: String,
    pub role: String,
    pub description: Option<String>,
}

/// Personal details kept in the profile document rather than on the user
/// record itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalDetails {
    pub whatsapp: Option<String>,
    pub marital_status: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPreferences {
    pub job_types: Vec<EmploymentType>,
    pub locations: Vec<String>,
    pub salary: Option<SalaryRange>,
    pub industries: Vec<String>,
}

/// The stored profile document, as edited through the profile forms.
/// Every section defaults to empty so a partially filled document
/// deserializes without error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDocument {
    pub personal_info: PersonalDetails,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub hobbies: Vec<String>,
    pub volunteer: Vec<VolunteerEntry>,
    pub preferences: JobPreferences,
}

/// Read-only aggregate the completeness scorer consumes: the user record
/// merged with the profile document into one snapshot. The scorer never
/// mutates it and never reaches back to the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub personal: PersonalInfo,
    pub professional: ProfessionalInfo,
    pub preferences: JobPreferences,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub marital_status: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfessionalInfo {
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub hobbies: Vec<String>,
    pub volunteer: Vec<VolunteerEntry>,
}

impl ProfileSnapshot {
    /// Assembles the scoring snapshot from the user record and the profile
    /// document. Name, email, phone, city and country come from the user;
    /// everything else from the document.
    pub fn assemble(user: &User, document: &ProfileDocument) -> Self {
        ProfileSnapshot {
            personal: PersonalInfo {
                name: non_empty(&user.name),
                email: non_empty(&user.email),
                phone: non_empty(&user.phone),
                whatsapp: document.personal_info.whatsapp.clone(),
                marital_status: document.personal_info.marital_status.clone(),
                address: document.personal_info.address.clone(),
                city: non_empty(&user.city),
                country: non_empty(&user.country),
                date_of_birth: document.personal_info.date_of_birth,
                gender: document.personal_info.gender.clone(),
            },
            professional: ProfessionalInfo {
                education: document.education.clone(),
                experience: document.experience.clone(),
                skills: document.skills.clone(),
                languages: document.languages.clone(),
                hobbies: document.hobbies.clone(),
                volunteer: document.volunteer.clone(),
            },
            preferences: document.preferences.clone(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
