// src/dictionary.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::category::{Category, WordClass};
use crate::error::{Error, Result};
use crate::morphology::{conjugate_verb, pluralize_noun};

/// On-disk encodings, chosen solely by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryFormat {
    Json,
    Yaml,
}

impl DictionaryFormat {
    /// `.json` or `.yaml`, case-sensitive. Anything else is rejected.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(DictionaryFormat::Json),
            Some("yaml") => Ok(DictionaryFormat::Yaml),
            _ => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Decodes `T` from `reader`; `path` only labels errors.
    pub(crate) fn decode<T, R>(self, reader: R, path: &Path) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
        R: Read,
    {
        match self {
            DictionaryFormat::Json => serde_json::from_reader(reader).map_err(|source| Error::Json {
                path: path.to_path_buf(),
                source,
            }),
            DictionaryFormat::Yaml => serde_yaml::from_reader(reader).map_err(|source| Error::Yaml {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Entries are structs rather than bare labels so the file format can grow
/// extra fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    pub category: WordClass,
}

/// Lowercase word to class mapping. Entries are only ever added or
/// overwritten, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, DictEntry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        // Reject the extension before touching the filesystem.
        let format = DictionaryFormat::from_path(path)?;
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let dictionary: Dictionary = format.decode(BufReader::new(file), path)?;
        info!(path = %path.display(), entries = dictionary.len(), "dictionary loaded");
        Ok(dictionary)
    }

    pub fn from_reader<R: Read>(reader: R, format: DictionaryFormat) -> Result<Self> {
        format.decode(reader, Path::new("<reader>"))
    }

    /// Rewrites the whole mapping to `path` in the format its extension names.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = DictionaryFormat::from_path(path)?;
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer, format, path)?;
        writer.flush().map_err(|e| Error::io(path, e))?;
        info!(path = %path.display(), entries = self.len(), "dictionary saved");
        Ok(())
    }

    pub fn to_writer<W: Write>(&self, writer: W, format: DictionaryFormat) -> Result<()> {
        self.write_to(writer, format, Path::new("<writer>"))
    }

    fn write_to<W: Write>(&self, mut writer: W, format: DictionaryFormat, path: &Path) -> Result<()> {
        match format {
            DictionaryFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, self).map_err(|source| Error::Json {
                    path: path.to_path_buf(),
                    source,
                })?;
                writer.write_all(b"\n").map_err(|e| Error::io(path, e))
            }
            DictionaryFormat::Yaml => serde_yaml::to_writer(writer, self).map_err(|source| Error::Yaml {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Exact match on the already-lowercased word.
    pub fn lookup(&self, word: &str) -> Option<&WordClass> {
        self.entries.get(word).map(|entry| &entry.category)
    }

    /// Stores `word -> category`, overwriting any previous entry.
    ///
    /// With `derive_related`, nouns and verbs also seed one inflected form
    /// under the lowercase derived label, but only when that form is absent.
    pub fn insert(&mut self, word: &str, category: Category, derive_related: bool) {
        self.entries.insert(
            word.to_string(),
            DictEntry {
                category: WordClass::Canonical(category),
            },
        );

        if !derive_related {
            return;
        }
        let related = match category {
            Category::Noun => pluralize_noun(word),
            Category::Verb => conjugate_verb(word),
            _ => return,
        };
        if !self.entries.contains_key(&related) {
            debug!(word, related = %related, "derived entry");
            self.entries.insert(
                related,
                DictEntry {
                    category: WordClass::Derived(category),
                },
            );
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordClass)> {
        self.entries
            .iter()
            .map(|(word, entry)| (word.as_str(), &entry.category))
    }
}
