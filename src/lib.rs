// src/lib.rs

//! Dictionary-backed word classification over text streams.
//!
//! Input files are split into word tokens, each token is looked up in a
//! persisted word → category dictionary, and unknown words are handed to an
//! external [`Classifier`](pipeline::Classifier) before the stream resumes.
//! A run produces a per-category report file and a [`RunInfo`] summary.

pub mod category;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod morphology;
pub mod pipeline;
pub mod report;
pub mod splitter;
pub mod stats;
pub mod transitions;

pub use category::{Category, WordClass};
pub use config::ParserConfig;
pub use dictionary::{Dictionary, DictionaryFormat};
pub use error::{Error, ErrorKind, Result};
pub use pipeline::{ClassifiedToken, Classifier, Emission, Parser, Session};
pub use splitter::Splitter;
pub use stats::RunInfo;
