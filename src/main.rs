// src/main.rs
use clap::Parser as _;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use lexclass::config::{DEFAULT_DICTIONARY, DEFAULT_OUTPUT};
use lexclass::{Category, Classifier, Parser, ParserConfig, RunInfo};

/// Classifies the words of one or more text files against a dictionary,
/// asking for a category whenever a word is unknown.
#[derive(clap::Parser, Debug)]
#[command(name = "lexclass")]
struct Args {
    /// Input text files, processed in order
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Report file to write
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Dictionary file (.json or .yaml), updated on exit
    #[arg(long, short = 'd', env = "LEXCLASS_DICTIONARY", default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,
}

/// Asks on `output` and reads a menu number from `input`, re-prompting until
/// the answer names a category. Gives up once `input` is closed.
struct ConsoleClassifier<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Classifier for ConsoleClassifier<R, W> {
    fn classify(&mut self, word: &str) -> Option<Category> {
        let _ = writeln!(self.output, "Please classify the word '{}':", word);
        for (i, category) in Category::ALL.iter().enumerate() {
            let _ = writeln!(self.output, "{}: {}", i + 1, category);
        }
        let _ = self.output.flush();

        let mut line = String::new();
        loop {
            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    eprintln!("No classification available for '{}'; aborting.", word);
                    return None;
                }
                Ok(_) => {}
            }
            if let Some(category) = line.trim().parse::<usize>().ok().and_then(Category::from_choice) {
                return Some(category);
            }
            let _ = writeln!(self.output, "Invalid class. Please enter a valid class:");
            let _ = self.output.flush();
        }
    }
}

fn print_run_info(info: &RunInfo) {
    println!("Word count: {}", info.word_count);
    println!("Distinct word count: {}", info.distinct_word_count);
    for (class, count) in &info.word_per_category {
        println!("Word count for category {}: {}", class, count);
    }
    for (class, count) in &info.distinct_word_per_category {
        println!("Distinct word count for category {}: {}", class, count);
    }
    println!("New word count: {}", info.new_word_count);
    for (class, count) in &info.new_word_per_category {
        println!("New word count for category {}: {}", class, count);
    }
    println!("File count: {}", info.file_count);
    println!("Time spent: {:?}", info.time_spent);
    println!("Time waited: {:?}", info.time_waited);
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = ParserConfig::new(args.inputs)
        .output(args.output)
        .dictionary(args.dictionary);

    let setup_start = Instant::now();
    let parser = match Parser::new(&config) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "Dictionary loaded with {} entries. (Took {:?})",
        parser.dictionary().len(),
        setup_start.elapsed()
    );

    let stdin = io::stdin();
    let mut classifier = ConsoleClassifier {
        input: stdin.lock(),
        output: io::stdout(),
    };
    let session = parser.spawn();
    let result = session.drive(&mut classifier, |token| {
        println!("{}: {}", token.word, token.class);
    });

    match result {
        Ok(info) => {
            print_run_info(&info);
            println!("Report written to {}", config.output.display());
        }
        // `drive` has already joined the parser, so the dictionary is saved.
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
