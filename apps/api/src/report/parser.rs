//! Section recovery from the model's free-text reply.
//!
//! The reply is expected to look like
//!
//! ```text
//! ---
//! Dream Job:
//! Data Analyst
//!
//! Salary Potential:
//! 850000
//! ---
//! ```
//!
//! Recovery is a single line-oriented pass. A line is a header when, trimmed, it
//! ends with `:` and is shorter than [`MAX_HEADER_LEN`] characters. This also
//! catches any short body line that happens to end in a colon; such lines open a
//! new (spurious) section and callers must tolerate that.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Header candidates must be strictly shorter than this (in characters, colon included).
pub const MAX_HEADER_LEN: usize = 40;

const HORIZONTAL_RULE: &str = "---";

/// A recovered section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

/// Ordered mapping of section title to body text, in first-seen header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSections {
    sections: Vec<Section>,
}

impl ReportSections {
    pub fn get(&self, title: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.body.as_str())
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Opens `title`, or restarts its body if it was already seen. Returns its index.
    fn open(&mut self, title: &str) -> usize {
        if let Some(idx) = self.sections.iter().position(|s| s.title == title) {
            self.sections[idx].body.clear();
            return idx;
        }
        self.sections.push(Section {
            title: title.to_string(),
            body: String::new(),
        });
        self.sections.len() - 1
    }
}

impl Serialize for ReportSections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.title, &section.body)?;
        }
        map.end()
    }
}

/// Result of parsing one reply against a list of required sections.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ParsedReport {
    pub sections: ReportSections,
    pub missing_sections: Vec<String>,
}

/// Returns the header title if `line` (already trimmed) is a header candidate.
fn header_title(line: &str) -> Option<&str> {
    if line.chars().count() >= MAX_HEADER_LEN {
        return None;
    }
    line.strip_suffix(':')
}

/// Recovers every `Header:` section from `text`. Lines before the first header are dropped.
pub fn extract_sections(text: &str) -> ReportSections {
    let mut sections = ReportSections::default();
    let mut current: Option<usize> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line == HORIZONTAL_RULE {
            continue;
        }

        if let Some(title) = header_title(line) {
            current = Some(sections.open(title));
            continue;
        }

        if let Some(idx) = current {
            let body = &mut sections.sections[idx].body;
            body.push_str(line);
            body.push('\n');
        }
    }

    for section in &mut sections.sections {
        section.body = section.body.trim().to_string();
    }

    sections
}

/// Required titles that are absent or have an empty body, in `required` order.
pub fn missing_sections(sections: &ReportSections, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|title| sections.get(title).map_or(true, str::is_empty))
        .map(|title| title.to_string())
        .collect()
}

pub fn parse_report(text: &str, required: &[&str]) -> ParsedReport {
    let sections = extract_sections(text);
    let missing_sections = missing_sections(&sections, required);
    ParsedReport {
        sections,
        missing_sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &[&str] = &["User Summary", "Dream Job", "Salary Potential"];

    #[test]
    fn test_two_sections_one_missing() {
        let text = "---\nDream Job:\nData Analyst\n\nSalary Potential:\n850000\n---";
        let parsed = parse_report(text, MINIMAL);

        assert_eq!(parsed.sections.len(), 2);
        assert_eq!(parsed.sections.get("Dream Job"), Some("Data Analyst"));
        assert_eq!(parsed.sections.get("Salary Potential"), Some("850000"));
        assert_eq!(parsed.missing_sections, vec!["User Summary".to_string()]);
    }

    #[test]
    fn test_full_minimal_reply() {
        let text = "\
---
User Summary:
Bachelor's Degree, no experience
Knows Python, SQL

Dream Job:
Data Analyst

Salary Potential:
600000
---";
        let parsed = parse_report(text, MINIMAL);
        assert!(parsed.missing_sections.is_empty());
        assert_eq!(
            parsed.sections.get("User Summary"),
            Some("Bachelor's Degree, no experience\nKnows Python, SQL")
        );
    }

    #[test]
    fn test_missing_header_is_reported_not_raised() {
        let text = "User Summary:\nSome text\nDream Job:\nQA Engineer\n";
        let parsed = parse_report(text, MINIMAL);
        assert!(parsed.sections.get("Salary Potential").is_none());
        assert_eq!(parsed.missing_sections, vec!["Salary Potential".to_string()]);
    }

    #[test]
    fn test_preamble_is_discarded() {
        let text = "Sure! Here is your report.\nDream Job:\nData Analyst";
        let sections = extract_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections.titles().collect::<Vec<_>>(), vec!["Dream Job"]);
    }

    #[test]
    fn test_reordered_and_extra_sections() {
        let text = "Salary Potential:\n900000\nFun Fact:\nYou like tea\nDream Job:\nSRE";
        let parsed = parse_report(text, &["Dream Job", "Salary Potential"]);
        assert!(parsed.missing_sections.is_empty());
        assert_eq!(
            parsed.sections.titles().collect::<Vec<_>>(),
            vec!["Salary Potential", "Fun Fact", "Dream Job"]
        );
        assert_eq!(parsed.sections.get("Fun Fact"), Some("You like tea"));
    }

    #[test]
    fn test_short_colon_line_opens_spurious_section() {
        let text = "Roles They Can Aim For:\nCloud Engineer\nGood fit for:\ncloud roles\n";
        let sections = extract_sections(text);
        assert_eq!(sections.get("Roles They Can Aim For"), Some("Cloud Engineer"));
        assert_eq!(sections.get("Good fit for"), Some("cloud roles"));
    }

    #[test]
    fn test_inline_colon_line_stays_in_body() {
        let text = "Roles They Can Aim For:\nGood fit for: cloud roles\n";
        let sections = extract_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections.get("Roles They Can Aim For"),
            Some("Good fit for: cloud roles")
        );
    }

    #[test]
    fn test_long_colon_line_is_not_a_header() {
        let line = "These are the skills you should pick up next:";
        assert!(line.chars().count() >= MAX_HEADER_LEN);
        let text = format!("Skills to Acquire:\n{line}\n- Docker");
        let sections = extract_sections(&text);
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections.get("Skills to Acquire"),
            Some(format!("{line}\n- Docker").as_str())
        );
    }

    #[test]
    fn test_header_length_boundary() {
        // 39 characters including the colon is a header; 40 is not.
        let header_39 = format!("{}:", "a".repeat(38));
        let line_40 = format!("{}:", "b".repeat(39));
        let text = format!("{header_39}\n{line_40}\n");
        let sections = extract_sections(&text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections.get(&"a".repeat(38)), Some(line_40.as_str()));
    }

    #[test]
    fn test_empty_body_counts_as_missing() {
        let text = "User Summary:\n\nDream Job:\nDev\nSalary Potential:\n   \n";
        let parsed = parse_report(text, MINIMAL);
        assert_eq!(parsed.sections.get("User Summary"), Some(""));
        assert_eq!(
            parsed.missing_sections,
            vec!["User Summary".to_string(), "Salary Potential".to_string()]
        );
    }

    #[test]
    fn test_repeated_header_restarts_body_in_place() {
        let text = "Dream Job:\nFirst\nSalary Potential:\n1\nDream Job:\nSecond\n";
        let sections = extract_sections(text);
        assert_eq!(
            sections.titles().collect::<Vec<_>>(),
            vec!["Dream Job", "Salary Potential"]
        );
        assert_eq!(sections.get("Dream Job"), Some("Second"));
    }

    #[test]
    fn test_only_the_trailing_colon_is_stripped() {
        let sections = extract_sections("Dream Job :\nData Analyst\n");
        assert_eq!(sections.get("Dream Job "), Some("Data Analyst"));
        assert!(sections.get("Dream Job").is_none());
    }

    #[test]
    fn test_indented_lines_are_trimmed() {
        let text = "    Dream Job:   \n      Data Analyst   \n";
        let sections = extract_sections(text);
        assert_eq!(sections.get("Dream Job"), Some("Data Analyst"));
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse_report("", MINIMAL);
        assert_eq!(parsed.sections.len(), 0);
        assert_eq!(parsed.missing_sections.len(), 3);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let sections = extract_sections("Dream Job:\nDev\nSalary Potential:\n5");
        let json = serde_json::to_string(&sections).unwrap();
        assert_eq!(json, r#"{"Dream Job":"Dev","Salary Potential":"5"}"#);
    }
}
