//! Wordle Narrow - CLI
//!
//! Suggests guesses for a Wordle game, solves a known word, or benchmarks the
//! engine over the whole vocabulary.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use wordle_narrow::{
    commands::{SolveConfig, run_benchmark, run_simple, solve_word},
    config::SessionConfig,
    core::Word,
    output::{print_benchmark_result, print_solve_result},
    wordlists::{
        VOCABULARY,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_narrow",
    about = "Wordle solver that narrows a vocabulary from per-letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pick guesses uniformly at random instead of by letter coverage
    #[arg(long, global = true)]
    random: bool,

    /// Seed for reproducible guesses
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Wordlist: 'embedded' (default) or path to a whitespace-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Letters per word for a custom wordlist
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    length: usize,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: suggest guesses and read the game's feedback (default)
    Simple,

    /// Solve a specific secret word
    Solve {
        /// The secret word to solve
        word: String,

        /// Play this word first
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Show candidate counts for each turn
        #[arg(long)]
        counts: bool,
    },

    /// Play every vocabulary word as a secret and report statistics
    Benchmark {
        /// Only test the first N words
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Play this word first in every game
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load the vocabulary selected by the -w flag
fn load_vocabulary(wordlist: &str, length: usize) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(VOCABULARY)),
        path => load_from_file(path, length).with_context(|| format!("loading {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let length = if cli.wordlist == "embedded" { 5 } else { cli.length };
    let vocabulary = load_vocabulary(&cli.wordlist, length)?;
    let config = SessionConfig::new()
        .with_optimize(!cli.random)
        .with_word_length(length)
        .with_seed(cli.seed);

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => run_simple(&vocabulary, config),
        Commands::Solve {
            word,
            first_word,
            counts,
        } => {
            let mut solve = SolveConfig::new(word);
            solve.first_guess = first_word;
            solve.session = config;

            let result = solve_word(&vocabulary, solve)?;
            print_solve_result(&result, counts);
            Ok(())
        }
        Commands::Benchmark { count, first_word } => {
            run_benchmark_command(&vocabulary, config, count, first_word.as_deref())
        }
    }
}

fn run_benchmark_command(
    vocabulary: &[Word],
    config: SessionConfig,
    count: Option<usize>,
    first_word: Option<&str>,
) -> Result<()> {
    let count = count.unwrap_or(vocabulary.len()).min(vocabulary.len());
    let forced = first_word
        .map(|text| Word::with_length(text, config.word_length))
        .transpose()
        .context("invalid first word")?;

    match &forced {
        Some(word) => println!("Running benchmark on {count} words with forced first word: {word}..."),
        None => println!("Running benchmark on {count} words..."),
    }

    let result = run_benchmark(vocabulary, &vocabulary[..count], config, forced.as_ref(), true);
    print_benchmark_result(&result);
    Ok(())
}
