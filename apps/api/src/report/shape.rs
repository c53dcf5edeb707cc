use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const USER_SUMMARY: &str = "User Summary";
pub const DREAM_JOB: &str = "Dream Job";
pub const SALARY_POTENTIAL: &str = "Salary Potential";

pub const ESTIMATED_SALARY_RANGE: &str = "Estimated Salary Range";
pub const SUGGESTED_LEARNING_TRACKS: &str = "Suggested Learning Tracks";
pub const ROI_OF_UPSKILLING: &str = "ROI of Upskilling";

/// Which report contract the prompt asks for and the renderer insists on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportShape {
    /// Summary, dream job and a single salary figure.
    #[default]
    Minimal,
    /// Five-section upskilling report.
    Structured,
    /// Same five sections with the alternate header wording.
    StructuredAlt,
}

impl ReportShape {
    pub fn required_sections(self) -> &'static [&'static str] {
        match self {
            ReportShape::Minimal => &[USER_SUMMARY, DREAM_JOB, SALARY_POTENTIAL],
            ReportShape::Structured => &[
                ESTIMATED_SALARY_RANGE,
                "Roles They Can Aim For",
                "Skills They're Missing",
                SUGGESTED_LEARNING_TRACKS,
                ROI_OF_UPSKILLING,
            ],
            ReportShape::StructuredAlt => &[
                ESTIMATED_SALARY_RANGE,
                "Roles to Aim For",
                "Skills to Acquire",
                SUGGESTED_LEARNING_TRACKS,
                ROI_OF_UPSKILLING,
            ],
        }
    }

    pub fn is_structured(self) -> bool {
        !matches!(self, ReportShape::Minimal)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReportShape::Minimal => "minimal",
            ReportShape::Structured => "structured",
            ReportShape::StructuredAlt => "structured_alt",
        }
    }
}

impl fmt::Display for ReportShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(ReportShape::Minimal),
            "structured" => Ok(ReportShape::Structured),
            "structured_alt" | "structured-alt" => Ok(ReportShape::StructuredAlt),
            other => Err(format!("unknown report shape '{other}'")),
        }
    }
}
