// src/transitions.rs
//
// Symbol-indexed transition table. The parser does not consult it; it is
// available to callers that want to validate token shapes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::dictionary::DictionaryFormat;
use crate::error::{Error, Result};
use crate::splitter::is_punctuation;

const EMBEDDED_STARTING_TABLE: &str = include_str!("../configs/english_starting_dfa.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionTable {
    pub transitions: HashMap<String, HashMap<String, String>>,
    pub current_state: String,
    #[serde(default)]
    pub accept_states: HashMap<String, bool>,
}

impl TransitionTable {
    /// The table shipped in `configs/english_starting_dfa.json`.
    pub fn starting() -> Result<Self> {
        serde_json::from_str(EMBEDDED_STARTING_TABLE).map_err(|source| Error::Json {
            path: Path::new("configs/english_starting_dfa.json").to_path_buf(),
            source,
        })
    }

    /// Same extension rule as dictionaries.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = DictionaryFormat::from_path(path)?;
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        format.decode(BufReader::new(file), path)
    }

    /// Follows the edge for `symbol`. Without one, the state is unchanged
    /// and `false` is returned.
    pub fn transition(&mut self, symbol: &str) -> bool {
        let next = self
            .transitions
            .get(&self.current_state)
            .and_then(|edges| edges.get(symbol));
        match next {
            Some(next) => {
                self.current_state = next.clone();
                true
            }
            None => false,
        }
    }

    pub fn is_accepting(&self) -> bool {
        self.accept_states
            .get(&self.current_state)
            .copied()
            .unwrap_or(false)
    }

    /// Runs `text` from the current state over its symbol classes, without
    /// mutating `self`.
    pub fn accepts(&self, text: &str) -> bool {
        let mut run = self.clone();
        text.chars()
            .all(|c| run.transition(symbol_class(c)))
            && run.is_accepting()
    }
}

/// Coarse symbol for a character: `letter`, `digit`, `punct`, `space` or
/// `other`.
pub fn symbol_class(c: char) -> &'static str {
    if c.is_whitespace() {
        return "space";
    }
    if is_punctuation(c) {
        return "punct";
    }
    match get_general_category(c) {
        GeneralCategory::UppercaseLetter
        | GeneralCategory::LowercaseLetter
        | GeneralCategory::TitlecaseLetter
        | GeneralCategory::ModifierLetter
        | GeneralCategory::OtherLetter => "letter",
        GeneralCategory::DecimalNumber => "digit",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn symbol_classes() {
        assert_eq!(symbol_class('a'), "letter");
        assert_eq!(symbol_class('É'), "letter");
        assert_eq!(symbol_class('7'), "digit");
        assert_eq!(symbol_class('\''), "punct");
        assert_eq!(symbol_class(' '), "space");
        assert_eq!(symbol_class('$'), "other");
    }

    #[test]
    fn transition_only_on_defined_edge() {
        let mut table = TransitionTable::starting().unwrap();
        assert_eq!(table.current_state, "start");
        assert!(!table.is_accepting());
        assert!(!table.transition("punct"));
        assert_eq!(table.current_state, "start");
        assert!(table.transition("letter"));
        assert_eq!(table.current_state, "word");
        assert!(table.is_accepting());
    }

    #[test]
    fn accepts_word_shapes() {
        let table = TransitionTable::starting().unwrap();
        assert!(table.accepts("cat"));
        assert!(table.accepts("don't"));
        assert!(table.accepts("42"));
        assert!(!table.accepts("cat'"));
        assert!(!table.accepts("4x"));
        assert!(!table.accepts(""));
        assert_eq!(table.current_state, "start");
    }

    #[test]
    fn loads_yaml_and_rejects_other_extensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.yaml");
        fs::write(
            &path,
            "transitions:\n  a:\n    x: b\ncurrentState: a\nacceptStates:\n  b: true\n",
        )
        .unwrap();
        let mut table = TransitionTable::from_file(&path).unwrap();
        assert!(table.transition("x"));
        assert!(table.is_accepting());

        let err = TransitionTable::from_file(dir.path().join("table.toml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
