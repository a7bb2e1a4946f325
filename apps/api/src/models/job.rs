use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "employment_type", rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub fn as_str(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
            EmploymentType::Contract => "contract",
            EmploymentType::Internship => "internship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "workplace_type", rename_all = "kebab-case")]
pub enum WorkplaceType {
    OnSite,
    Hybrid,
    Remote,
}

impl WorkplaceType {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkplaceType::OnSite => "on-site",
            WorkplaceType::Hybrid => "hybrid",
            WorkplaceType::Remote => "remote",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "experience_level", rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
        }
    }
}

/// Proficiency a posting demands for one required skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "job_status", rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Closed,
    Draft,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSkill {
    pub name: String,
    pub level: SkillLevel,
    pub years_required: String,
}

/// Invariant: `min <= max`, both strictly positive. Enforced at the write
/// boundary before anything reaches the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub recruiter_id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub workplace_type: WorkplaceType,
    pub experience_level: ExperienceLevel,
    pub description: String,
    pub responsibilities: String,
    pub requirements: String,
    pub skills: Vec<JobSkill>,
    pub benefits: Vec<String>,
    pub salary: SalaryRange,
    pub status: JobStatus,
    /// Derived: lowercase containment-search tokens, recomputed in full on
    /// every write. See `search::keywords`.
    pub search_keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A posting as submitted by a recruiter, before the store assigns identity
/// and timestamps. A draft without an explicit status is persisted as active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDraft {
    pub recruiter_id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub workplace_type: WorkplaceType,
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsibilities: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub skills: Vec<JobSkill>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub salary: SalaryRange,
    #[serde(default)]
    pub status: Option<JobStatus>,
}

/// Field-level edit to an existing posting. Status transitions go through
/// the dedicated status operation, not through a patch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobPostingPatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub workplace_type: Option<WorkplaceType>,
    pub experience_level: Option<ExperienceLevel>,
    pub description: Option<String>,
    pub responsibilities: Option<String>,
    pub requirements: Option<String>,
    pub skills: Option<Vec<JobSkill>>,
    pub benefits: Option<Vec<String>>,
    pub salary: Option<SalaryRange>,
}

impl JobPostingPatch {
    /// Merges the patch over an existing posting into the full record that
    /// gets re-indexed and persisted.
    pub fn apply_to(self, existing: &JobPosting) -> JobDraft {
        JobDraft {
            recruiter_id: existing.recruiter_id,
            title: self.title.unwrap_or_else(|| existing.title.clone()),
            company: self.company.unwrap_or_else(|| existing.company.clone()),
            location: self.location.unwrap_or_else(|| existing.location.clone()),
            employment_type: self.employment_type.unwrap_or(existing.employment_type),
            workplace_type: self.workplace_type.unwrap_or(existing.workplace_type),
            experience_level: self.experience_level.unwrap_or(existing.experience_level),
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
            responsibilities: self
                .responsibilities
                .unwrap_or_else(|| existing.responsibilities.clone()),
            requirements: self
                .requirements
                .unwrap_or_else(|| existing.requirements.clone()),
            skills: self.skills.unwrap_or_else(|| existing.skills.clone()),
            benefits: self.benefits.unwrap_or_else(|| existing.benefits.clone()),
            salary: self.salary.unwrap_or_else(|| existing.salary.clone()),
            status: Some(existing.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_spellings() {
        assert_eq!(
            serde_json::to_string(&EmploymentType::FullTime).unwrap(),
            "\"full-time\""
        );
        assert_eq!(
            serde_json::to_string(&WorkplaceType::OnSite).unwrap(),
            "\"on-site\""
        );
        assert_eq!(
            serde_json::to_string(&ExperienceLevel::Senior).unwrap(),
            "\"senior\""
        );
        assert_eq!(serde_json::to_string(&JobStatus::Active).unwrap(), "\"active\"");
    }

    #[test]
    fn test_patch_preserves_unset_fields_and_status() {
        let existing = fixture_posting();
        let patch = JobPostingPatch {
            title: Some("Staff Engineer".to_string()),
            ..Default::default()
        };
        let draft = patch.apply_to(&existing);
        assert_eq!(draft.title, "Staff Engineer");
        assert_eq!(draft.company, existing.company);
        assert_eq!(draft.salary, existing.salary);
        assert_eq!(draft.status, Some(existing.status));
    }

    fn fixture_posting() -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            recruiter_id: Uuid::new_v4(),
            title: "Senior Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            employment_type: EmploymentType::FullTime,
            workplace_type: WorkplaceType::Hybrid,
            experience_level: ExperienceLevel::Senior,
            description: String::new(),
            responsibilities: String::new(),
            requirements: String::new(),
            skills: vec![],
            benefits: vec![],
            salary: SalaryRange {
                min: 50_000,
                max: 70_000,
                currency: "EUR".to_string(),
            },
            status: JobStatus::Closed,
            search_keywords: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
