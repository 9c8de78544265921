// src/pipeline.rs
//
// The parser streams classified words to a consumer over zero-capacity
// channels. Every send is a rendezvous, so the parser never runs ahead of
// the consumer, and an unknown word parks it until an answer arrives.

use crossbeam_channel::{bounded, select, Receiver, Sender};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::category::{Category, WordClass};
use crate::config::ParserConfig;
use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::report::{CategoryIndex, Position};
use crate::splitter::Splitter;
use crate::stats::{RunInfo, RunStats};

/// One processed token, lowercased, with the class it was resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedToken {
    pub word: String,
    pub class: WordClass,
}

/// Items on the classified-token stream. `EndOfStream` is sent exactly once,
/// last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    Token(ClassifiedToken),
    EndOfStream,
}

/// Decision source for words missing from the dictionary. Receives the word
/// exactly as tokenized.
pub trait Classifier {
    /// `None` means no answer will ever come; the session is then ended and
    /// the parser shuts down, keeping the answers it already has.
    fn classify(&mut self, word: &str) -> Option<Category>;
}

impl<F> Classifier for F
where
    F: FnMut(&str) -> Category,
{
    fn classify(&mut self, word: &str) -> Option<Category> {
        Some(self(word))
    }
}

struct Input {
    path: PathBuf,
    reader: BufReader<File>,
}

/// A fully constructed run: dictionary loaded, inputs opened, report created.
pub struct Parser {
    dictionary: Dictionary,
    dictionary_path: PathBuf,
    splitter: Splitter,
    inputs: Vec<Input>,
    output: BufWriter<File>,
    output_path: PathBuf,
}

impl Parser {
    /// Any failure here aborts construction; nothing has been started and
    /// the dictionary file is untouched.
    pub fn new(config: &ParserConfig) -> Result<Self> {
        let dictionary = Dictionary::load(&config.dictionary)?;

        let mut inputs = Vec::with_capacity(config.inputs.len());
        for path in &config.inputs {
            let file = File::open(path).map_err(|e| Error::io(path, e))?;
            inputs.push(Input {
                path: path.clone(),
                reader: BufReader::new(file),
            });
        }

        let output = File::create(&config.output).map_err(|e| Error::io(&config.output, e))?;

        info!(
            inputs = inputs.len(),
            output = %config.output.display(),
            dictionary = %config.dictionary.display(),
            "parser ready"
        );
        Ok(Parser {
            dictionary,
            dictionary_path: config.dictionary.clone(),
            splitter: Splitter::default(),
            inputs,
            output: BufWriter::new(output),
            output_path: config.output.clone(),
        })
    }

    pub fn with_splitter(mut self, splitter: Splitter) -> Self {
        self.splitter = splitter;
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Starts the parser on its own thread and hands back the consumer side.
    pub fn spawn(self) -> Session {
        let (classified_tx, classified_rx) = bounded(0);
        let (new_words_tx, new_words_rx) = bounded(0);
        let (answers_tx, answers_rx) = bounded(0);

        let endpoints = Endpoints {
            classified: classified_tx,
            new_words: new_words_tx,
            answers: answers_rx,
        };
        let worker = thread::spawn(move || self.run(endpoints));

        Session {
            classified: classified_rx,
            new_words: new_words_rx,
            answers: answers_tx,
            worker,
        }
    }

    fn run(self, endpoints: Endpoints) -> Result<RunInfo> {
        let started = Instant::now();
        let Parser {
            dictionary,
            dictionary_path,
            splitter,
            inputs,
            mut output,
            output_path,
        } = self;
        let file_count = inputs.len();

        let mut engine = Engine {
            dictionary,
            splitter,
            endpoints,
            stats: RunStats::new(),
            index: CategoryIndex::new(),
        };

        let streamed = inputs
            .into_iter()
            .enumerate()
            .try_for_each(|(file_index, input)| engine.process_file(file_index, input));

        let Engine {
            dictionary,
            endpoints,
            stats,
            index,
            ..
        } = engine;

        let outcome = streamed.and_then(|()| {
            if let Err(e) = index.write_to(&mut output) {
                warn!(path = %output_path.display(), error = %e, "failed to write report");
            }
            endpoints
                .classified
                .send(Emission::EndOfStream)
                .map_err(|_| Error::Disconnected)?;
            Ok(stats.finish(file_count, started.elapsed()))
        });

        drop(output);
        drop(endpoints);

        match &outcome {
            Ok(info) => info!(
                words = info.word_count,
                new_words = info.new_word_count,
                elapsed = ?info.time_spent,
                "parse finished"
            ),
            Err(e) => warn!(error = %e, "parse aborted"),
        }

        if let Err(e) = dictionary.save(&dictionary_path) {
            error!(error = %e, "failed to persist dictionary");
        }
        outcome
    }
}

struct Endpoints {
    classified: Sender<Emission>,
    new_words: Sender<String>,
    answers: Receiver<Category>,
}

/// Mutable run state, owned by the parser thread alone.
struct Engine {
    dictionary: Dictionary,
    splitter: Splitter,
    endpoints: Endpoints,
    stats: RunStats,
    index: CategoryIndex,
}

impl Engine {
    fn process_file(&mut self, file_index: usize, input: Input) -> Result<()> {
        debug!(file_index, path = %input.path.display(), "reading input");
        let mut ordinal = 0;

        for token in self.splitter.tokens(input.reader) {
            let raw = match token {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(path = %input.path.display(), error = %e, "input read failed, skipping rest of file");
                    break;
                }
            };
            ordinal += 1;
            let word = raw.to_lowercase();

            let class = match self.dictionary.lookup(&word) {
                Some(class) => class.clone(),
                None => self.resolve_unknown(&raw, &word)?,
            };
            self.stats.record_word(&word, &class);

            debug!(word = %word, class = %class, "classified");
            self.endpoints
                .classified
                .send(Emission::Token(ClassifiedToken {
                    word: word.clone(),
                    class: class.clone(),
                }))
                .map_err(|_| Error::Disconnected)?;

            if let Some(category) = class.canonical() {
                self.index.record(
                    category,
                    &word,
                    Position {
                        file: file_index,
                        ordinal,
                    },
                );
            }
        }
        Ok(())
    }

    /// Blocks until the consumer answers. Answers are stored verbatim, with
    /// no derived forms.
    fn resolve_unknown(&mut self, raw: &str, word: &str) -> Result<WordClass> {
        debug!(word = raw, "awaiting classification");
        let waiting = Instant::now();
        self.endpoints
            .new_words
            .send(raw.to_string())
            .map_err(|_| Error::Disconnected)?;
        let category = self
            .endpoints
            .answers
            .recv()
            .map_err(|_| Error::Disconnected)?;
        self.stats.record_wait(waiting.elapsed());

        self.dictionary.insert(word, category, false);
        let class = WordClass::Canonical(category);
        self.stats.record_new_word(&class);
        Ok(class)
    }
}

/// Consumer side of a running parser.
pub struct Session {
    classified: Receiver<Emission>,
    new_words: Receiver<String>,
    answers: Sender<Category>,
    worker: JoinHandle<Result<RunInfo>>,
}

impl Session {
    pub fn classified(&self) -> &Receiver<Emission> {
        &self.classified
    }

    pub fn new_words(&self) -> &Receiver<String> {
        &self.new_words
    }

    pub fn answers(&self) -> &Sender<Category> {
        &self.answers
    }

    /// Serves both outgoing streams until the end of the stream, answering
    /// every request through `classifier`, then returns the run's statistics.
    /// If the classifier gives up, the session is finished early and the
    /// parser's [`Error::Disconnected`] is returned once it has shut down.
    pub fn drive<C, F>(self, classifier: &mut C, mut on_token: F) -> Result<RunInfo>
    where
        C: Classifier + ?Sized,
        F: FnMut(&ClassifiedToken),
    {
        loop {
            select! {
                recv(self.classified) -> msg => match msg {
                    Ok(Emission::Token(token)) => on_token(&token),
                    Ok(Emission::EndOfStream) => break,
                    // Parser stopped early; `finish` reports why.
                    Err(_) => break,
                },
                recv(self.new_words) -> msg => match msg {
                    Ok(word) => {
                        let Some(category) = classifier.classify(&word) else {
                            break;
                        };
                        if self.answers.send(category).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                },
            }
        }
        self.finish()
    }

    /// Hangs up and waits for the parser thread. After `EndOfStream` this
    /// yields the run's statistics; before it, the parser stops with
    /// [`Error::Disconnected`].
    pub fn finish(self) -> Result<RunInfo> {
        let Session {
            classified,
            new_words,
            answers,
            worker,
        } = self;
        drop(classified);
        drop(new_words);
        drop(answers);

        match worker.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}
