//! The questionnaire state machine.
//!
//! `current_step` starts at 1 and moves forward by exactly one per accepted
//! submission until it reaches [`TERMINAL_STEP`]. `reset` is the only way back.
//! Each step writes only its own profile field, and a rejected submission
//! leaves the state untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wizard::profile::{
    clamp_hours, CareerGoal, Education, LearningStyle, ProfileDraft, DEFAULT_HOURS,
};
use crate::wizard::steps::{TERMINAL_STEP, TOTAL_STEPS};
use crate::wizard::tech::{is_popular, TechSelection};

const TECH_STEP: u8 = 3;
const CONSTRAINTS_STEP: u8 = 9;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Please select at least one programming language or skill.")]
    EmptyTechSelection,

    #[error("Expected input for step {expected}, got input for step {got}")]
    StepMismatch { expected: u8, got: u8 },

    #[error("The questionnaire is complete; start over to change your answers")]
    Completed,

    #[error("Technical knowledge can only be edited on step 3")]
    NotOnTechStep,

    #[error("'{0}' is not one of the popular languages")]
    UnknownPopularItem(String),

    #[error("Language name cannot be blank")]
    BlankTechItem,
}

fn default_hours() -> i64 {
    DEFAULT_HOURS as i64
}

/// One step submission. Choice fields fall back to the first option, mirroring a
/// select control that always has something selected.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum StepInput {
    Education {
        #[serde(default)]
        education: Education,
    },
    Experience {
        #[serde(default)]
        experience: String,
    },
    /// Final step-3 submit. `search` picks are merged with the toggles already made.
    TechKnowledge {
        #[serde(default)]
        search: Vec<String>,
    },
    Interests {
        #[serde(default)]
        interests: String,
    },
    Goal {
        #[serde(default)]
        goal: CareerGoal,
    },
    Companies {
        #[serde(default)]
        companies: String,
    },
    LearningStyle {
        #[serde(default)]
        learning_style: LearningStyle,
    },
    TimeCommitment {
        #[serde(default = "default_hours")]
        hours: i64,
    },
    /// Saves the optional constraints without leaving step 9.
    OtherConstraints {
        #[serde(default)]
        other_constraints: String,
    },
    /// Leaves step 9 for the results screen.
    Proceed,
}

impl StepInput {
    /// The step this input belongs to.
    pub fn step(&self) -> u8 {
        match self {
            StepInput::Education { .. } => 1,
            StepInput::Experience { .. } => 2,
            StepInput::TechKnowledge { .. } => 3,
            StepInput::Interests { .. } => 4,
            StepInput::Goal { .. } => 5,
            StepInput::Companies { .. } => 6,
            StepInput::LearningStyle { .. } => 7,
            StepInput::TimeCommitment { .. } => 8,
            StepInput::OtherConstraints { .. } | StepInput::Proceed => CONSTRAINTS_STEP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    Advanced { step: u8 },
    Saved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardState {
    current_step: u8,
    profile: ProfileDraft,
    tech: TechSelection,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            current_step: 1,
            profile: ProfileDraft::default(),
            tech: TechSelection::default(),
        }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn profile(&self) -> &ProfileDraft {
        &self.profile
    }

    pub fn tech(&self) -> &TechSelection {
        &self.tech
    }

    pub fn is_complete(&self) -> bool {
        self.current_step == TERMINAL_STEP
    }

    /// Fraction of input steps already answered, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        f32::from(self.current_step - 1) / f32::from(TOTAL_STEPS)
    }

    /// Back to step 1 with nothing answered.
    pub fn reset(&mut self) {
        self.current_step = 1;
        self.profile = ProfileDraft::default();
        self.tech.clear();
    }

    fn advance(&mut self) {
        debug_assert!(self.current_step < TERMINAL_STEP);
        self.current_step += 1;
    }

    /// Validates `input` against the current step, records its field and advances.
    pub fn submit(&mut self, input: StepInput) -> Result<StepOutcome, WizardError> {
        if self.is_complete() {
            return Err(WizardError::Completed);
        }
        let expected = self.current_step;
        let got = input.step();
        if got != expected {
            return Err(WizardError::StepMismatch { expected, got });
        }

        match input {
            StepInput::Education { education } => self.profile.education = Some(education),
            StepInput::Experience { experience } => self.profile.experience = Some(experience),
            StepInput::TechKnowledge { search } => {
                let extra: Vec<&str> = search
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .collect();
                let selected = self.tech.union_with(extra.iter().copied());
                if selected.is_empty() {
                    return Err(WizardError::EmptyTechSelection);
                }
                for item in extra {
                    self.tech.add_search(item);
                }
                self.profile.tech_knowledge = Some(selected);
            }
            StepInput::Interests { interests } => self.profile.interests = Some(interests),
            StepInput::Goal { goal } => self.profile.goal = Some(goal),
            StepInput::Companies { companies } => self.profile.companies = Some(companies),
            StepInput::LearningStyle { learning_style } => {
                self.profile.learning_style = Some(learning_style)
            }
            StepInput::TimeCommitment { hours } => {
                self.profile.time_commitment = Some(clamp_hours(hours))
            }
            StepInput::OtherConstraints { other_constraints } => {
                self.profile.other_constraints = Some(other_constraints);
                return Ok(StepOutcome::Saved);
            }
            StepInput::Proceed => {
                self.profile.other_constraints.get_or_insert_with(String::new);
            }
        }

        self.advance();
        Ok(StepOutcome::Advanced {
            step: self.current_step,
        })
    }

    fn ensure_tech_step(&self) -> Result<(), WizardError> {
        if self.current_step == TECH_STEP {
            Ok(())
        } else {
            Err(WizardError::NotOnTechStep)
        }
    }

    /// Flips a popular language. Returns whether it is now selected.
    pub fn toggle_popular(&mut self, item: &str) -> Result<bool, WizardError> {
        self.ensure_tech_step()?;
        if !is_popular(item) {
            return Err(WizardError::UnknownPopularItem(item.to_string()));
        }
        Ok(self.tech.toggle(item))
    }

    pub fn add_search(&mut self, item: &str) -> Result<(), WizardError> {
        self.ensure_tech_step()?;
        let item = item.trim();
        if item.is_empty() {
            return Err(WizardError::BlankTechItem);
        }
        self.tech.add_search(item);
        Ok(())
    }

    pub fn remove_search(&mut self, item: &str) -> Result<bool, WizardError> {
        self.ensure_tech_step()?;
        Ok(self.tech.remove_search(item.trim()))
    }
}

#[cfg(test)]
pub(crate) fn completed_state() -> WizardState {
    let mut state = WizardState::new();
    for input in [
        StepInput::Education {
            education: Education::Bachelors,
        },
        StepInput::Experience {
            experience: "6 months QA internship".to_string(),
        },
        StepInput::TechKnowledge {
            search: vec!["Python".to_string(), "SQL".to_string()],
        },
        StepInput::Interests {
            interests: "Data Analytics, Automation".to_string(),
        },
        StepInput::Goal {
            goal: CareerGoal::DataAnalyst,
        },
        StepInput::Companies {
            companies: "Amazon, FinTech".to_string(),
        },
        StepInput::LearningStyle {
            learning_style: LearningStyle::Hybrid,
        },
        StepInput::TimeCommitment { hours: 12 },
        StepInput::OtherConstraints {
            other_constraints: "Weekend classes only".to_string(),
        },
        StepInput::Proceed,
    ] {
        state.submit(input).unwrap();
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::profile::sample_profile;

    fn state_at(step: u8) -> WizardState {
        let mut state = WizardState::new();
        let inputs = [
            StepInput::Education {
                education: Education::Diploma,
            },
            StepInput::Experience {
                experience: String::new(),
            },
            StepInput::TechKnowledge {
                search: vec!["Go".to_string()],
            },
            StepInput::Interests {
                interests: String::new(),
            },
            StepInput::Goal {
                goal: CareerGoal::Other,
            },
            StepInput::Companies {
                companies: String::new(),
            },
            StepInput::LearningStyle {
                learning_style: LearningStyle::SelfPaced,
            },
            StepInput::TimeCommitment { hours: 10 },
            StepInput::Proceed,
        ];
        for input in inputs.into_iter().take(usize::from(step - 1)) {
            state.submit(input).unwrap();
        }
        assert_eq!(state.current_step(), step);
        state
    }

    #[test]
    fn test_new_state_starts_at_step_one() {
        let state = WizardState::new();
        assert_eq!(state.current_step(), 1);
        assert!(state.profile().is_empty());
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_each_submission_advances_by_one_and_records_field() {
        let mut state = WizardState::new();

        state
            .submit(StepInput::Education {
                education: Education::Masters,
            })
            .unwrap();
        assert_eq!(state.current_step(), 2);
        assert_eq!(state.profile().education, Some(Education::Masters));

        state
            .submit(StepInput::Experience {
                experience: "1 year as a QA tester".to_string(),
            })
            .unwrap();
        assert_eq!(state.current_step(), 3);
        assert_eq!(
            state.profile().experience.as_deref(),
            Some("1 year as a QA tester")
        );

        state.toggle_popular("Java").unwrap();
        let outcome = state
            .submit(StepInput::TechKnowledge { search: vec![] })
            .unwrap();
        assert_eq!(outcome, StepOutcome::Advanced { step: 4 });
        assert_eq!(
            state.profile().tech_knowledge.as_ref().unwrap().len(),
            1
        );
    }

    #[test]
    fn test_full_walkthrough_completes_profile() {
        let state = completed_state();
        assert!(state.is_complete());
        assert_eq!(state.current_step(), TERMINAL_STEP);
        assert_eq!(state.progress(), 1.0);
        assert_eq!(state.profile().complete(), Some(sample_profile()));
    }

    #[test]
    fn test_empty_tech_selection_is_rejected_without_mutation() {
        let mut state = state_at(3);
        let before = state.clone();

        let err = state
            .submit(StepInput::TechKnowledge {
                search: vec!["   ".to_string()],
            })
            .unwrap_err();

        assert_eq!(err, WizardError::EmptyTechSelection);
        assert_eq!(state, before);
        assert_eq!(state.current_step(), 3);
        assert!(state.profile().tech_knowledge.is_none());
    }

    #[test]
    fn test_tech_union_of_toggles_and_search() {
        let mut state = state_at(3);
        state.toggle_popular("Python").unwrap();
        state.toggle_popular("SQL").unwrap();
        state.add_search("Rust").unwrap();

        state
            .submit(StepInput::TechKnowledge {
                search: vec!["Python".to_string(), "Kotlin".to_string()],
            })
            .unwrap();

        let tech: Vec<&str> = state
            .profile()
            .tech_knowledge
            .as_ref()
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(tech, vec!["Kotlin", "Python", "Rust", "SQL"]);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut state = state_at(3);
        state.toggle_popular("C#").unwrap();
        let before = state.clone();
        assert!(state.toggle_popular("Go").unwrap());
        assert!(!state.toggle_popular("Go").unwrap());
        assert_eq!(state, before);
    }

    #[test]
    fn test_toggle_rejects_unknown_and_wrong_step() {
        let mut state = state_at(3);
        assert_eq!(
            state.toggle_popular("Haskell"),
            Err(WizardError::UnknownPopularItem("Haskell".to_string()))
        );

        let mut early = WizardState::new();
        assert_eq!(early.toggle_popular("Python"), Err(WizardError::NotOnTechStep));
        assert_eq!(early.add_search("Rust"), Err(WizardError::NotOnTechStep));
    }

    #[test]
    fn test_search_add_and_remove() {
        let mut state = state_at(3);
        assert_eq!(state.add_search("  "), Err(WizardError::BlankTechItem));
        state.add_search(" Elixir ").unwrap();
        assert!(state.tech().search.contains("Elixir"));
        assert!(state.remove_search("Elixir").unwrap());
        assert!(!state.remove_search("Elixir").unwrap());
    }

    #[test]
    fn test_wrong_step_input_is_rejected() {
        let mut state = WizardState::new();
        let err = state
            .submit(StepInput::Goal {
                goal: CareerGoal::DataAnalyst,
            })
            .unwrap_err();
        assert_eq!(err, WizardError::StepMismatch { expected: 1, got: 5 });
        assert_eq!(state, WizardState::new());
    }

    #[test]
    fn test_hours_are_clamped() {
        let mut state = state_at(8);
        state.submit(StepInput::TimeCommitment { hours: 99 }).unwrap();
        assert_eq!(state.profile().time_commitment, Some(40));

        let mut state = state_at(8);
        state.submit(StepInput::TimeCommitment { hours: 0 }).unwrap();
        assert_eq!(state.profile().time_commitment, Some(1));
    }

    #[test]
    fn test_constraints_save_does_not_advance() {
        let mut state = state_at(9);
        let outcome = state
            .submit(StepInput::OtherConstraints {
                other_constraints: "Remote only".to_string(),
            })
            .unwrap();
        assert_eq!(outcome, StepOutcome::Saved);
        assert_eq!(state.current_step(), 9);

        state.submit(StepInput::Proceed).unwrap();
        assert_eq!(state.profile().other_constraints.as_deref(), Some("Remote only"));
    }

    #[test]
    fn test_proceed_defaults_constraints_to_empty() {
        let mut state = state_at(9);
        state.submit(StepInput::Proceed).unwrap();
        assert!(state.is_complete());
        assert_eq!(state.profile().other_constraints.as_deref(), Some(""));
        assert!(state.profile().complete().is_some());
    }

    #[test]
    fn test_profile_is_frozen_at_terminal_step() {
        let mut state = completed_state();
        let before = state.clone();
        assert_eq!(
            state.submit(StepInput::Proceed),
            Err(WizardError::Completed)
        );
        assert_eq!(
            state.submit(StepInput::Education {
                education: Education::Phd
            }),
            Err(WizardError::Completed)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_from_any_step() {
        for step in 1..=TERMINAL_STEP {
            let mut state = if step == TERMINAL_STEP {
                completed_state()
            } else {
                state_at(step)
            };
            state.reset();
            assert_eq!(state.current_step(), 1);
            assert!(state.profile().is_empty());
            assert_eq!(state.tech(), &TechSelection::default());
        }
    }

    #[test]
    fn test_step_input_wire_format() {
        let input: StepInput =
            serde_json::from_str(r#"{"field": "education", "education": "PhD"}"#).unwrap();
        assert!(matches!(
            input,
            StepInput::Education {
                education: Education::Phd
            }
        ));

        let input: StepInput = serde_json::from_str(r#"{"field": "goal"}"#).unwrap();
        assert!(matches!(
            input,
            StepInput::Goal {
                goal: CareerGoal::SoftwareDeveloper
            }
        ));

        let input: StepInput = serde_json::from_str(r#"{"field": "time_commitment"}"#).unwrap();
        assert!(matches!(input, StepInput::TimeCommitment { hours: 10 }));

        let input: StepInput = serde_json::from_str(r#"{"field": "proceed"}"#).unwrap();
        assert!(matches!(input, StepInput::Proceed));
    }
}
