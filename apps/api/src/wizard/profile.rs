use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const MIN_HOURS: u8 = 1;
pub const MAX_HOURS: u8 = 40;
pub const DEFAULT_HOURS: u8 = 10;

/// Highest education qualification (step 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "High School")]
    #[default]
    HighSchool,
    #[serde(rename = "Diploma")]
    Diploma,
    #[serde(rename = "Bachelor's Degree")]
    Bachelors,
    #[serde(rename = "Master's Degree")]
    Masters,
    #[serde(rename = "PhD")]
    Phd,
    #[serde(rename = "Other")]
    Other,
}

impl Education {
    pub const ALL: &'static [Education] = &[
        Education::HighSchool,
        Education::Diploma,
        Education::Bachelors,
        Education::Masters,
        Education::Phd,
        Education::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Education::HighSchool => "High School",
            Education::Diploma => "Diploma",
            Education::Bachelors => "Bachelor's Degree",
            Education::Masters => "Master's Degree",
            Education::Phd => "PhD",
            Education::Other => "Other",
        }
    }
}

/// Main career goal (step 5).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareerGoal {
    #[serde(rename = "Software Developer")]
    #[default]
    SoftwareDeveloper,
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
    #[serde(rename = "QA/Automation Tester")]
    QaAutomationTester,
    #[serde(rename = "Full Stack Developer")]
    FullStackDeveloper,
    #[serde(rename = "Other")]
    Other,
}

impl CareerGoal {
    pub const ALL: &'static [CareerGoal] = &[
        CareerGoal::SoftwareDeveloper,
        CareerGoal::DataAnalyst,
        CareerGoal::QaAutomationTester,
        CareerGoal::FullStackDeveloper,
        CareerGoal::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CareerGoal::SoftwareDeveloper => "Software Developer",
            CareerGoal::DataAnalyst => "Data Analyst",
            CareerGoal::QaAutomationTester => "QA/Automation Tester",
            CareerGoal::FullStackDeveloper => "Full Stack Developer",
            CareerGoal::Other => "Other",
        }
    }
}

/// Preferred learning style (step 7).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearningStyle {
    #[serde(rename = "Self-paced")]
    #[default]
    SelfPaced,
    #[serde(rename = "Instructor-led")]
    InstructorLed,
    #[serde(rename = "Hybrid")]
    Hybrid,
    #[serde(rename = "No preference")]
    NoPreference,
}

impl LearningStyle {
    pub const ALL: &'static [LearningStyle] = &[
        LearningStyle::SelfPaced,
        LearningStyle::InstructorLed,
        LearningStyle::Hybrid,
        LearningStyle::NoPreference,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LearningStyle::SelfPaced => "Self-paced",
            LearningStyle::InstructorLed => "Instructor-led",
            LearningStyle::Hybrid => "Hybrid",
            LearningStyle::NoPreference => "No preference",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(Education, CareerGoal, LearningStyle);

/// Clamps weekly hours into the slider range.
pub fn clamp_hours(hours: i64) -> u8 {
    hours.clamp(MIN_HOURS as i64, MAX_HOURS as i64) as u8
}

/// The completed answer set handed to the recommendation service.
///
/// Field names and enum labels match the `POST /recommend` wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub education: Education,
    pub experience: String,
    pub tech_knowledge: BTreeSet<String>,
    pub interests: String,
    pub goal: CareerGoal,
    pub companies: String,
    pub learning_style: LearningStyle,
    pub time_commitment: u8,
    pub other_constraints: String,
}

/// Answers collected so far. Each field is owned by exactly one wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Education>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_knowledge: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<CareerGoal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<LearningStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_commitment: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_constraints: Option<String>,
}

impl ProfileDraft {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        *self == ProfileDraft::default()
    }

    /// Returns the full profile once all nine fields are answered.
    pub fn complete(&self) -> Option<Profile> {
        Some(Profile {
            education: self.education?,
            experience: self.experience.clone()?,
            tech_knowledge: self.tech_knowledge.clone()?,
            interests: self.interests.clone()?,
            goal: self.goal?,
            companies: self.companies.clone()?,
            learning_style: self.learning_style?,
            time_commitment: self.time_commitment?,
            other_constraints: self.other_constraints.clone()?,
        })
    }
}

#[cfg(test)]
pub(crate) fn sample_profile() -> Profile {
    Profile {
        education: Education::Bachelors,
        experience: "6 months QA internship".to_string(),
        tech_knowledge: ["Python", "SQL"].iter().map(|s| s.to_string()).collect(),
        interests: "Data Analytics, Automation".to_string(),
        goal: CareerGoal::DataAnalyst,
        companies: "Amazon, FinTech".to_string(),
        learning_style: LearningStyle::Hybrid,
        time_commitment: 12,
        other_constraints: "Weekend classes only".to_string(),
    }
}
