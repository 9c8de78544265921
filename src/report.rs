// src/report.rs

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use crate::category::Category;

pub const REPORT_HEADER: &str = "TOKEN,LEXEMAS,POSICIONES";

/// Where an occurrence was seen: 0-based file index, 1-based ordinal within
/// that file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub file: usize,
    pub ordinal: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TXT#{}-{}", self.file, self.ordinal)
    }
}

#[derive(Debug, Default, Clone)]
struct Column {
    words: Vec<String>,
    positions: Vec<Position>,
}

/// Per-category occurrences, in emission order.
#[derive(Debug, Default, Clone)]
pub struct CategoryIndex {
    columns: BTreeMap<Category, Column>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: Category, word: &str, position: Position) {
        let column = self.columns.entry(category).or_default();
        column.words.push(word.to_string());
        column.positions.push(position);
    }

    pub fn words(&self, category: Category) -> &[String] {
        self.columns
            .get(&category)
            .map(|c| c.words.as_slice())
            .unwrap_or(&[])
    }

    pub fn positions(&self, category: Category) -> &[Position] {
        self.columns
            .get(&category)
            .map(|c| c.positions.as_slice())
            .unwrap_or(&[])
    }

    /// Header line, then one `CATEGORY;words;positions` line per category.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{}", REPORT_HEADER)?;
        for category in Category::ALL {
            let positions: Vec<String> = self
                .positions(category)
                .iter()
                .map(Position::to_string)
                .collect();
            writeln!(
                writer,
                "{};{};{}",
                category,
                self.words(category).join(","),
                positions.join(",")
            )?;
        }
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(index: &CategoryIndex) -> String {
        let mut out = Vec::new();
        index.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_index_lists_every_category() {
        let text = render(&CategoryIndex::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], REPORT_HEADER);
        assert_eq!(lines[1], "Noun;;");
        assert_eq!(lines[9], "Interjection;;");
    }

    #[test]
    fn occurrences_join_without_trailing_comma() {
        let mut index = CategoryIndex::new();
        index.record(Category::Verb, "run", Position { file: 0, ordinal: 2 });
        index.record(Category::Noun, "dog", Position { file: 0, ordinal: 1 });
        index.record(Category::Verb, "runs", Position { file: 1, ordinal: 4 });
        let text = render(&index);
        assert!(text.contains("\nNoun;dog;TXT#0-1\n"));
        assert!(text.contains("\nVerb;run,runs;TXT#0-2,TXT#1-4\n"));
        assert!(text.contains("\nAdjective;;\n"));
    }
}
