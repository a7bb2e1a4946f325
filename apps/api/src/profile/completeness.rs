//! Profile completeness scoring.
//!
//! A pure function of the profile snapshot: three field groups, each scored
//! as the fraction of populated fields, combined with fixed weights and
//! scaled to 0–100. Rounding is half-up (`f64::round` on a non-negative
//! value), and the result is banded into a display tier.

use serde::Serialize;

use crate::models::profile::{PersonalInfo, ProfessionalInfo, JobPreferences, ProfileSnapshot};

const PERSONAL_WEIGHT: f64 = 0.30;
const PROFESSIONAL_WEIGHT: f64 = 0.50;
const PREFERENCES_WEIGHT: f64 = 0.20;

impl PersonalInfo {
    fn presence(&self) -> [bool; 10] {
        [
            self.name.is_some(),
            self.email.is_some(),
            self.phone.is_some(),
            self.whatsapp.is_some(),
            self.marital_status.is_some(),
            self.address.is_some(),
            self.city.is_some(),
            self.country.is_some(),
            self.date_of_birth.is_some(),
            self.gender.is_some(),
        ]
    }
}

impl ProfessionalInfo {
    fn presence(&self) -> [bool; 6] {
        [
            !self.education.is_empty(),
            !self.experience.is_empty(),
            !self.skills.is_empty(),
            !self.languages.is_empty(),
            !self.hobbies.is_empty(),
            !self.volunteer.is_empty(),
        ]
    }
}

impl JobPreferences {
    fn presence(&self) -> [bool; 4] {
        [
            !self.job_types.is_empty(),
            !self.locations.is_empty(),
            self.salary.is_some(),
            !self.industries.is_empty(),
        ]
    }
}

fn completion(present: &[bool]) -> f64 {
    present.iter().filter(|p| **p).count() as f64 / present.len() as f64
}

/// Weighted completion percentage in `[0, 100]`. A missing profile scores
/// exactly zero, a defined terminal case rather than an error.
pub fn completeness_score(profile: Option<&ProfileSnapshot>) -> u8 {
    let Some(profile) = profile else {
        return 0;
    };
    let total = completion(&profile.personal.presence()) * PERSONAL_WEIGHT
        + completion(&profile.professional.presence()) * PROFESSIONAL_WEIGHT
        + completion(&profile.preferences.presence()) * PREFERENCES_WEIGHT;
    (total * 100.0).round() as u8
}

/// Display banding for a completeness score. Lower bounds are inclusive:
/// 30, 60 and 80 land in the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthTier {
    Low,
    MediumLow,
    MediumHigh,
    High,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=29 => StrengthTier::Low,
            30..=59 => StrengthTier::MediumLow,
            60..=79 => StrengthTier::MediumHigh,
            _ => StrengthTier::High,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            StrengthTier::Low => "Your profile needs attention",
            StrengthTier::MediumLow => "Keep going! Add more details",
            StrengthTier::MediumHigh => "Almost there! Complete missing sections",
            StrengthTier::High => "Great job! Profile is well completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthLabel {
    pub color_tier: StrengthTier,
    pub message: &'static str,
}

pub fn strength_label(score: u8) -> StrengthLabel {
    let tier = StrengthTier::from_score(score);
    StrengthLabel {
        color_tier: tier,
        message: tier.message(),
    }
}

/// Labels of the unpopulated fields, in the fixed personal → professional →
/// preferences enumeration order. The UI prompts for them in exactly this
/// order, never resorted by impact.
pub fn incomplete_fields(profile: Option<&ProfileSnapshot>) -> Vec<&'static str> {
    let Some(profile) = profile else {
        return Vec::new();
    };

    const PERSONAL_LABELS: [&str; 10] = [
        "Full Name",
        "Email",
        "Phone Number",
        "WhatsApp",
        "Marital Status",
        "Address",
        "City",
        "Country",
        "Date of Birth",
        "Gender",
    ];
    const PROFESSIONAL_LABELS: [&str; 6] = [
        "Education",
        "Work Experience",
        "Skills",
        "Languages",
        "Hobbies",
        "Volunteer Experience",
    ];
    const PREFERENCE_LABELS: [&str; 4] = [
        "Job Types",
        "Preferred Locations",
        "Salary Expectations",
        "Preferred Industries",
    ];

    let personal = profile.personal.presence();
    let professional = profile.professional.presence();
    let preferences = profile.preferences.presence();

    let mut missing = Vec::new();
    let groups = [
        (&PERSONAL_LABELS[..], &personal[..]),
        (&PROFESSIONAL_LABELS[..], &professional[..]),
        (&PREFERENCE_LABELS[..], &preferences[..]),
    ];
    for (labels, present) in groups {
        for (label, present) in labels.iter().zip(present) {
            if !present {
                missing.push(*label);
            }
        }
    }
    missing
}
