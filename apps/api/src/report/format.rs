use std::sync::LazyLock;

use regex::Regex;

/// First run of digits (with `,` / `.` separators) bounded on both sides.
static SALARY_FIGURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d[\d,.]*\b").expect("salary pattern is valid"));

/// Formats an integer string with South Asian digit grouping (`1200000` -> `12,00,000`).
///
/// Commas in the input are ignored. Anything that is not an unsigned whole
/// number, of any length, is returned unchanged.
pub fn format_grouping(amount: &str) -> String {
    let stripped = amount.replace(',', "");
    let stripped = stripped.trim();
    if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_digit()) {
        return amount.to_string();
    }
    let digits = match stripped.trim_start_matches('0') {
        "" => "0",
        significant => significant,
    };

    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (rest, last3) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = rest;
    while rest.len() > 2 {
        let (head, tail) = rest.split_at(rest.len() - 2);
        groups.push(tail);
        rest = head;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    groups.push(last3);
    groups.join(",")
}

/// Pulls the salary number out of a `Salary Potential` body.
///
/// Falls back to the first whitespace-delimited token when the body has no digits.
pub fn extract_salary_figure(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Some(m) = SALARY_FIGURE.find(body) {
        return Some(m.as_str().to_string());
    }
    body.split_whitespace().next().map(str::to_string)
}
