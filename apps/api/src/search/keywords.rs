//! Keyword index generation.
//!
//! The store only supports exact-match and array-containment predicates, so
//! keyword search runs against a precomputed token set stored on each
//! posting. The set is regenerated in full on every create and update,
//! never patched incrementally.

use std::collections::BTreeSet;

use crate::models::job::JobDraft;

/// Produces the lowercase token set for a posting. Pure, total, and
/// idempotent: duplicates are removed, order carries no meaning, and
/// degenerate input (empty lists, blank text) yields a smaller set rather
/// than an error.
pub fn generate_search_keywords(draft: &JobDraft) -> Vec<String> {
    let mut keywords = BTreeSet::new();

    for word in draft.title.split_whitespace() {
        keywords.insert(word.to_lowercase());
    }
    for word in draft.company.split_whitespace() {
        keywords.insert(word.to_lowercase());
    }

    // The location is indexed as one token, spaces included, so multi-word
    // locations match only when typed in full.
    keywords.insert(draft.location.to_lowercase());

    for skill in &draft.skills {
        keywords.insert(skill.name.to_lowercase());
        keywords.insert(skill.level.as_str().to_string());
    }

    keywords.insert(draft.experience_level.as_str().to_string());
    keywords.insert(draft.employment_type.as_str().to_string());
    keywords.insert(draft.workplace_type.as_str().to_string());

    for benefit in &draft.benefits {
        for word in benefit.split_whitespace() {
            keywords.insert(word.to_lowercase());
        }
    }

    keywords.insert(format!("salary-{}", draft.salary.currency.to_lowercase()));
    keywords.insert(format!("min-{}", draft.salary.min));
    keywords.insert(format!("max-{}", draft.salary.max));

    keywords.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{
        EmploymentType, ExperienceLevel, JobSkill, SalaryRange, SkillLevel, WorkplaceType,
    };
    use uuid::Uuid;

    fn base_draft() -> JobDraft {
        JobDraft {
            recruiter_id: Uuid::new_v4(),
            title: "Senior Software Engineer".to_string(),
            company: "Acme Robotics".to_string(),
            location: "New York".to_string(),
            employment_type: EmploymentType::FullTime,
            workplace_type: WorkplaceType::Hybrid,
            experience_level: ExperienceLevel::Senior,
            description: String::new(),
            responsibilities: String::new(),
            requirements: String::new(),
            skills: vec![],
            benefits: vec![],
            salary: SalaryRange {
                min: 120_000,
                max: 160_000,
                currency: "USD".to_string(),
            },
            status: None,
        }
    }

    #[test]
    fn test_indexing_is_idempotent() {
        let draft = base_draft();
        assert_eq!(
            generate_search_keywords(&draft),
            generate_search_keywords(&draft)
        );
    }

    #[test]
    fn test_empty_skills_and_benefits_index_cleanly() {
        let keywords = generate_search_keywords(&base_draft());
        let expected: Vec<String> = [
            "acme",
            "engineer",
            "full-time",
            "hybrid",
            "max-160000",
            "min-120000",
            "new york",
            "robotics",
            "salary-usd",
            "senior",
            "software",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(keywords, expected);
    }

    #[test]
    fn test_location_is_a_single_token() {
        let keywords = generate_search_keywords(&base_draft());
        assert!(keywords.contains(&"new york".to_string()));
        assert!(!keywords.contains(&"york".to_string()));
    }

    #[test]
    fn test_skills_contribute_name_and_level() {
        let mut draft = base_draft();
        draft.skills = vec![JobSkill {
            name: "Rust".to_string(),
            level: SkillLevel::Advanced,
            years_required: "3+".to_string(),
        }];
        let keywords = generate_search_keywords(&draft);
        assert!(keywords.contains(&"rust".to_string()));
        assert!(keywords.contains(&"advanced".to_string()));
        // years_required is display metadata and is not indexed
        assert!(!keywords.contains(&"3+".to_string()));
    }

    #[test]
    fn test_benefits_split_into_words() {
        let mut draft = base_draft();
        draft.benefits = vec!["Health Insurance".to_string(), "Remote Stipend".to_string()];
        let keywords = generate_search_keywords(&draft);
        for token in ["health", "insurance", "remote", "stipend"] {
            assert!(keywords.contains(&token.to_string()), "missing {token}");
        }
    }

    #[test]
    fn test_duplicate_words_collapse() {
        let mut draft = base_draft();
        draft.title = "Engineer Engineer".to_string();
        draft.company = "Engineer".to_string();
        let keywords = generate_search_keywords(&draft);
        assert_eq!(
            keywords.iter().filter(|k| *k == "engineer").count(),
            1
        );
    }

    #[test]
    fn test_salary_tokens_stringify_values_verbatim() {
        let mut draft = base_draft();
        draft.salary = SalaryRange {
            min: 1,
            max: 9_999_999,
            currency: "eUr".to_string(),
        };
        let keywords = generate_search_keywords(&draft);
        assert!(keywords.contains(&"salary-eur".to_string()));
        assert!(keywords.contains(&"min-1".to_string()));
        assert!(keywords.contains(&"max-9999999".to_string()));
    }
}
