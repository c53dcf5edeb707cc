//! Presentation of a parsed reply: the fields the results page actually shows.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::report::format::{extract_salary_figure, format_grouping};
use crate::report::parser::{parse_report, ReportSections};
use crate::report::shape::{ReportShape, DREAM_JOB, SALARY_POTENTIAL, SUGGESTED_LEARNING_TRACKS};

/// Courses we can link to when the model recommends one of them first.
pub const CATALOG_COURSES: &[&str] = &[
    "Full Stack Development",
    "Data Analytics",
    "QA Automation Testing",
    "Python Programming",
];

pub const NO_JOB_TITLE: &str = "(No job title returned)";
pub const NO_SALARY: &str = "(No salary returned)";
pub const CTA_LABEL: &str = "Upskill with Our Courses";

static ENUMERATION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+").expect("enumeration pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseLink {
    pub label: String,
    pub url: String,
}

/// Minimal-shape headline values, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlights {
    pub dream_job: String,
    pub salary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub shape: ReportShape,
    pub sections: ReportSections,
    pub missing_sections: Vec<String>,
    /// Unparsed reply, kept for diagnosing parse shortfalls.
    pub raw_report: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Highlights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_track: Option<CourseLink>,
    pub call_to_action: CourseLink,
    /// Page-level banner for a failed recommendation call (structured shapes only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Builds the results page from the recommendation outcome.
///
/// `outcome` is the raw reply on success or the error text on failure. The
/// minimal shape shows a failure as the report body; structured shapes show a
/// banner instead of sections.
pub fn render_report(
    shape: ReportShape,
    outcome: Result<String, String>,
    catalog_url: &str,
) -> ReportView {
    let call_to_action = CourseLink {
        label: CTA_LABEL.to_string(),
        url: catalog_url.to_string(),
    };

    let raw_report = match outcome {
        Ok(reply) => reply,
        Err(message) if shape.is_structured() => {
            return ReportView {
                shape,
                sections: ReportSections::default(),
                missing_sections: Vec::new(),
                raw_report: String::new(),
                highlights: None,
                learning_track: None,
                call_to_action,
                error: Some(message),
            };
        }
        Err(message) => message,
    };

    let parsed = parse_report(&raw_report, shape.required_sections());
    let (highlights, learning_track) = if shape.is_structured() {
        (None, learning_track_link(&parsed.sections, catalog_url))
    } else {
        (Some(minimal_highlights(&parsed.sections)), None)
    };

    ReportView {
        shape,
        sections: parsed.sections,
        missing_sections: parsed.missing_sections,
        raw_report,
        highlights,
        learning_track,
        call_to_action,
        error: None,
    }
}

fn minimal_highlights(sections: &ReportSections) -> Highlights {
    let dream_job = sections
        .get(DREAM_JOB)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| NO_JOB_TITLE.to_string());

    let salary = sections
        .get(SALARY_POTENTIAL)
        .and_then(extract_salary_figure)
        .filter(|s| !s.trim().is_empty())
        .map(|figure| format!("₹ {}", format_grouping(&figure)))
        .unwrap_or_else(|| NO_SALARY.to_string());

    Highlights { dream_job, salary }
}

/// Links the first suggested track when it names a catalog course.
fn learning_track_link(sections: &ReportSections, catalog_url: &str) -> Option<CourseLink> {
    let first = sections
        .get(SUGGESTED_LEARNING_TRACKS)?
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())?;

    let lowered = first.to_lowercase();
    if !CATALOG_COURSES
        .iter()
        .any(|course| lowered.contains(&course.to_lowercase()))
    {
        return None;
    }

    Some(CourseLink {
        label: ENUMERATION_PREFIX.replace(first, "").into_owned(),
        url: catalog_url.to_string(),
    })
}
