// src/splitter.rs

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{self, BufRead};
use unicode_general_category::{get_general_category, GeneralCategory};

/// Runs of whitespace or Unicode punctuation separate tokens.
pub const SEPARATOR_PATTERN: &str = r"[\s\p{P}]+";

static DEFAULT_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(SEPARATOR_PATTERN).unwrap_or_else(|e| panic!("Separator pattern failed to compile: {}", e))
});

/// Whether `c` belongs to the separator class of [`SEPARATOR_PATTERN`].
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || is_punctuation(c)
}

pub fn is_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Partitions text into maximal runs of non-separator characters.
#[derive(Debug, Clone)]
pub struct Splitter {
    separator: Regex,
}

impl Default for Splitter {
    fn default() -> Self {
        // Regex clones share the compiled program.
        Splitter {
            separator: DEFAULT_SEPARATOR.clone(),
        }
    }
}

impl Splitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Splitter {
            separator: Regex::new(pattern)?,
        })
    }

    /// Tokens of a single in-memory string. Empty pieces are skipped.
    pub fn split<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.separator.split(text).filter(|piece| !piece.is_empty())
    }

    /// Lazily tokenizes a stream, one line at a time.
    pub fn tokens<R: BufRead>(&self, reader: R) -> Tokens<R> {
        Tokens {
            separator: self.separator.clone(),
            reader,
            buf: Vec::new(),
            pending: Vec::new(),
            exhausted: false,
        }
    }
}

/// Single-pass token iterator over a reader.
///
/// Newlines are separators, so splitting each line independently yields the
/// same tokens as splitting the whole stream.
pub struct Tokens<R> {
    separator: Regex,
    reader: R,
    buf: Vec<u8>,
    // Tokens of the current line, stored in reverse so `pop` yields them in order.
    pending: Vec<String>,
    exhausted: bool,
}

impl<R: BufRead> Tokens<R> {
    fn fill(&mut self) -> io::Result<bool> {
        self.buf.clear();
        let read = self.reader.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(false);
        }
        // Invalid UTF-8 is a read error, never a lossy rewrite.
        let line = std::str::from_utf8(&self.buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pending = self
            .separator
            .split(line)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect();
        self.pending.reverse();
        Ok(true)
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Some(Ok(token));
            }
            if self.exhausted {
                return None;
            }
            match self.fill() {
                Ok(true) => continue,
                Ok(false) => {
                    self.exhausted = true;
                    return None;
                }
                Err(e) => {
                    // A read error ends the stream.
                    self.exhausted = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn collect(text: &str) -> Vec<String> {
        Splitter::new()
            .tokens(Cursor::new(text.as_bytes().to_vec()))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn splits_on_whitespace_and_punctuation() {
        assert_eq!(collect("The cat sat."), vec!["The", "cat", "sat"]);
        assert_eq!(
            collect("  hello,,  world!!\n\nagain;end"),
            vec!["hello", "world", "again", "end"]
        );
    }

    #[test]
    fn trailing_remainder_is_yielded() {
        assert_eq!(collect("one two"), vec!["one", "two"]);
    }

    #[test]
    fn empty_and_separator_only_inputs_yield_nothing() {
        assert!(collect("").is_empty());
        assert!(collect(" \t\n...!?\n").is_empty());
    }

    #[test]
    fn unicode_punctuation_separates() {
        assert_eq!(collect("¿qué?«hola»—adiós"), vec!["qué", "hola", "adiós"]);
    }

    #[test]
    fn symbols_are_not_separators() {
        // `$` and `+` are symbols, not punctuation.
        assert_eq!(collect("a+b $5"), vec!["a+b", "$5"]);
    }

    #[test]
    fn tokens_never_contain_separators() {
        let text = "It's a dog-eat-dog world (isn't it?)\r\n“Quoted” words… and_more\u{00a0}end";
        let tokens = collect(text);
        assert!(!tokens.is_empty());
        for token in &tokens {
            assert!(!token.is_empty());
            assert!(!token.chars().any(is_separator), "{:?}", token);
        }
    }

    #[test]
    fn split_matches_streaming() {
        let text = "first line.\nsecond, line\n";
        let splitter = Splitter::new();
        let direct: Vec<String> = splitter.split(text).map(str::to_string).collect();
        assert_eq!(direct, collect(text));
    }

    /// Yields `data`, then fails every read.
    struct FailingReader {
        data: Cursor<Vec<u8>>,
    }

    impl io::Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::Other, "disk gone")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn read_error_ends_the_stream() {
        let reader = io::BufReader::new(FailingReader {
            data: Cursor::new(b"one two\n".to_vec()),
        });
        let mut tokens = Splitter::new().tokens(reader);
        assert_eq!(tokens.next().unwrap().unwrap(), "one");
        assert_eq!(tokens.next().unwrap().unwrap(), "two");
        let err = tokens.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(tokens.next().is_none());
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let mut tokens = Splitter::new().tokens(Cursor::new(b"good line\ncaf\xe9 ok\nlater\n".to_vec()));
        assert_eq!(tokens.next().unwrap().unwrap(), "good");
        assert_eq!(tokens.next().unwrap().unwrap(), "line");
        let err = tokens.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(tokens.next().is_none());
    }

    #[test]
    fn custom_pattern() {
        let splitter = Splitter::with_pattern(r"\|+").unwrap();
        let tokens: Vec<&str> = splitter.split("a||b|c d").collect();
        assert_eq!(tokens, vec!["a", "b", "c d"]);
        assert!(Splitter::with_pattern("(").is_err());
    }
}
