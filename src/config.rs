// src/config.rs

use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "output.csv";
pub const DEFAULT_DICTIONARY: &str = "dictionary.json";

/// Files a parser run reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Processed strictly in this order.
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    /// `.json` or `.yaml`; read at construction and rewritten at close.
    pub dictionary: PathBuf,
}

impl ParserConfig {
    pub fn new<I, P>(inputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        ParserConfig {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
        }
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn dictionary(mut self, dictionary: impl Into<PathBuf>) -> Self {
        self.dictionary = dictionary.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_overrides() {
        let config = ParserConfig::new(["a.txt", "b.txt"]);
        assert_eq!(config.inputs, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(config.output, PathBuf::from("output.csv"));
        assert_eq!(config.dictionary, PathBuf::from("dictionary.json"));

        let config = config.output("r.csv").dictionary("d.yaml");
        assert_eq!(config.output, PathBuf::from("r.csv"));
        assert_eq!(config.dictionary, PathBuf::from("d.yaml"));
    }
}
