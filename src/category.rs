// src/category.rs

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Grammatical categories a word can be classified into.
///
/// Declaration order is significant: it is the order used by the report and
/// by every per-category listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Pronoun,
    Determiner,
    Conjunction,
    Interjection,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Noun,
        Category::Verb,
        Category::Adjective,
        Category::Adverb,
        Category::Preposition,
        Category::Pronoun,
        Category::Determiner,
        Category::Conjunction,
        Category::Interjection,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Noun => "Noun",
            Category::Verb => "Verb",
            Category::Adjective => "Adjective",
            Category::Adverb => "Adverb",
            Category::Preposition => "Preposition",
            Category::Pronoun => "Pronoun",
            Category::Determiner => "Determiner",
            Category::Conjunction => "Conjunction",
            Category::Interjection => "Interjection",
        }
    }

    /// Label written for entries inserted by morphological derivation.
    pub fn derived_label(self) -> &'static str {
        match self {
            Category::Noun => "noun",
            Category::Verb => "verb",
            Category::Adjective => "adjective",
            Category::Adverb => "adverb",
            Category::Preposition => "preposition",
            Category::Pronoun => "pronoun",
            Category::Determiner => "determiner",
            Category::Conjunction => "conjunction",
            Category::Interjection => "interjection",
        }
    }

    /// Maps a 1-based menu choice onto the category list.
    pub fn from_choice(choice: usize) -> Option<Category> {
        choice
            .checked_sub(1)
            .and_then(|idx| Category::ALL.get(idx).copied())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

lazy_static! {
    static ref LABELS: HashMap<&'static str, WordClass> = {
        let mut m = HashMap::new();
        for category in Category::ALL {
            m.insert(category.name(), WordClass::Canonical(category));
            m.insert(category.derived_label(), WordClass::Derived(category));
        }
        m
    };
}

/// The class a dictionary entry carries.
///
/// Directly classified words carry a canonical category. Entries produced by
/// morphological derivation keep their lowercase label (`"noun"`, `"verb"`)
/// so they stay distinguishable from confirmed classifications, and labels
/// outside both sets are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WordClass {
    Canonical(Category),
    Derived(Category),
    Other(String),
}

impl WordClass {
    pub fn parse(label: &str) -> WordClass {
        match LABELS.get(label) {
            Some(class) => class.clone(),
            None => WordClass::Other(label.to_string()),
        }
    }

    /// The category this class is reported under, if any.
    pub fn canonical(&self) -> Option<Category> {
        match self {
            WordClass::Canonical(category) => Some(*category),
            _ => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            WordClass::Canonical(category) => category.name(),
            WordClass::Derived(category) => category.derived_label(),
            WordClass::Other(label) => label,
        }
    }
}

impl From<Category> for WordClass {
    fn from(category: Category) -> Self {
        WordClass::Canonical(category)
    }
}

impl From<String> for WordClass {
    fn from(label: String) -> Self {
        WordClass::parse(&label)
    }
}

impl From<WordClass> for String {
    fn from(class: WordClass) -> Self {
        match class {
            WordClass::Other(label) => label,
            other => other.label().to_string(),
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
