use std::collections::BTreeSet;

use serde::Serialize;

/// One-click toggles shown on the technical-knowledge step.
pub const POPULAR_LANGUAGES: &[&str] = &[
    "Python",
    "JavaScript",
    "Java",
    "C#",
    "C++",
    "TypeScript",
    "Go",
    "Ruby",
    "PHP",
    "SQL",
    "HTML/CSS",
];

/// Suggestions offered by the search box in addition to the popular list.
pub const EXTRA_LANGUAGES: &[&str] = &[
    "Kotlin",
    "Swift",
    "Scala",
    "Rust",
    "Dart",
    "Perl",
    "MATLAB",
    "R",
    "Objective-C",
    "Shell",
    "Assembly",
    "Other",
];

/// Sorted, de-duplicated search suggestions.
pub fn searchable_languages() -> Vec<&'static str> {
    let all: BTreeSet<&'static str> = POPULAR_LANGUAGES
        .iter()
        .chain(EXTRA_LANGUAGES)
        .copied()
        .collect();
    all.into_iter().collect()
}

pub fn is_popular(item: &str) -> bool {
    POPULAR_LANGUAGES.contains(&item)
}

/// The two step-3 input sources: popular toggles and free-form search picks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TechSelection {
    pub popular: BTreeSet<String>,
    pub search: BTreeSet<String>,
}

impl TechSelection {
    /// Flips `item` in the popular set. Returns whether it is now selected.
    pub fn toggle(&mut self, item: &str) -> bool {
        if self.popular.remove(item) {
            false
        } else {
            self.popular.insert(item.to_string());
            true
        }
    }

    pub fn add_search(&mut self, item: &str) {
        self.search.insert(item.to_string());
    }

    pub fn remove_search(&mut self, item: &str) -> bool {
        self.search.remove(item)
    }

    /// Union of both sources plus any `extra` search picks submitted with the step.
    pub fn union_with<'a>(&self, extra: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
        self.popular
            .iter()
            .chain(self.search.iter())
            .cloned()
            .chain(extra.into_iter().map(str::to_string))
            .collect()
    }

    pub fn clear(&mut self) {
        self.popular.clear();
        self.search.clear();
    }
}
