//! Static description of the nine questionnaire screens.

use serde::Serialize;

use crate::wizard::profile::{
    CareerGoal, Education, LearningStyle, DEFAULT_HOURS, MAX_HOURS, MIN_HOURS,
};
use crate::wizard::tech::{searchable_languages, POPULAR_LANGUAGES};

pub const TOTAL_STEPS: u8 = 9;
/// The results screen; collects no input.
pub const TERMINAL_STEP: u8 = TOTAL_STEPS + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    SingleChoice,
    TextLine,
    TextBlock,
    MultiChoice,
    RangeSlider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderRange {
    pub min: u8,
    pub max: u8,
    pub default: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepPrompt {
    pub step: u8,
    pub field: &'static str,
    pub title: &'static str,
    pub question: &'static str,
    pub control: ControlKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
    /// Step 3 only: the one-click toggle list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub popular: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<SliderRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    pub help: &'static str,
    pub optional: bool,
}

impl StepPrompt {
    fn new(
        step: u8,
        field: &'static str,
        title: &'static str,
        question: &'static str,
        control: ControlKind,
        help: &'static str,
    ) -> Self {
        Self {
            step,
            field,
            title,
            question,
            control,
            options: Vec::new(),
            popular: Vec::new(),
            range: None,
            placeholder: None,
            help,
            optional: false,
        }
    }

    fn options(mut self, options: Vec<&'static str>) -> Self {
        self.options = options;
        self
    }

    fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Prompt for `step`, or `None` for the terminal step and out-of-range values.
pub fn prompt_for(step: u8) -> Option<StepPrompt> {
    use ControlKind::*;

    let prompt = match step {
        1 => StepPrompt::new(
            1,
            "education",
            "Your Highest Education Qualification",
            "Select your highest qualification:",
            SingleChoice,
            "This helps us tailor recommendations to your background.",
        )
        .options(Education::ALL.iter().map(|e| e.label()).collect()),
        2 => StepPrompt::new(
            2,
            "experience",
            "Previous Work Experience",
            "Do you have any work experience?",
            TextLine,
            "Include internships, part-time, or full-time roles.",
        )
        .placeholder("e.g., 1 year as a QA tester, No experience"),
        3 => {
            let mut p = StepPrompt::new(
                3,
                "tech_knowledge",
                "Previous Technical Knowledge",
                "Select from popular/in-demand languages, or search and add any programming language(s):",
                MultiChoice,
                "Pick at least one language or skill.",
            )
            .options(searchable_languages());
            p.popular = POPULAR_LANGUAGES.to_vec();
            p
        }
        4 => StepPrompt::new(
            4,
            "interests",
            "Main Interests in Tech or IT",
            "What are your main interests in tech or IT?",
            TextBlock,
            "This helps us recommend the best track for you.",
        )
        .placeholder("e.g., Web Development, Data Analytics, Automation, Software Testing"),
        5 => StepPrompt::new(
            5,
            "goal",
            "Your Career Goal",
            "What is your main career goal?",
            SingleChoice,
            "Choose the role you aspire to.",
        )
        .options(CareerGoal::ALL.iter().map(|g| g.label()).collect()),
        6 => StepPrompt::new(
            6,
            "companies",
            "Dream Companies or Industries",
            "Any dream companies or industries?",
            TextLine,
            "Optional, but helps us personalize your report.",
        )
        .placeholder("e.g., Amazon, Microsoft, FinTech, Healthcare"),
        7 => StepPrompt::new(
            7,
            "learning_style",
            "Preferred Learning Style",
            "Preferred learning style:",
            SingleChoice,
            "How do you prefer to learn?",
        )
        .options(LearningStyle::ALL.iter().map(|l| l.label()).collect()),
        8 => {
            let mut p = StepPrompt::new(
                8,
                "time_commitment",
                "Time Commitment",
                "How many hours per week can you commit?",
                RangeSlider,
                "This helps us recommend a realistic upskilling plan.",
            );
            p.range = Some(SliderRange {
                min: MIN_HOURS,
                max: MAX_HOURS,
                default: DEFAULT_HOURS,
            });
            p
        }
        9 => {
            let mut p = StepPrompt::new(
                9,
                "other_constraints",
                "Other Preferences or Constraints (Optional)",
                "Any other preferences or constraints?",
                TextBlock,
                "Optional, but helps us personalize your plan.",
            )
            .placeholder("e.g., Only remote courses, Need weekend classes, etc.");
            p.optional = true;
            p
        }
        _ => return None,
    };

    Some(prompt)
}
