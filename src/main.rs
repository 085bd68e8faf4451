//! Word Scramble - CLI
//!
//! Anagram word game with TUI and simple line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use word_scramble::{
    commands::{check_word, list_words, run_simple},
    game::GameState,
    output::{print_check_result, print_words_result},
    validator::{Dictionary, WordIsRealChecker},
    wordlists::loader::{WordSource, load_dictionary, load_start_words},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Find the words hidden inside a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start words: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    start_words: String,

    /// Dictionary: 'embedded' (default) or path to a word list such as /usr/share/dict/words
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Seed for choosing root words (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Check whether a word would be accepted against a root word
    Check {
        /// Candidate word
        word: String,

        /// Root word to spell it from
        #[arg(short, long)]
        root: String,
    },

    /// List every playable word for a root word
    Words {
        /// Root word
        root: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let dictionary_source = WordSource::from_arg(&cli.dictionary);
    let dictionary = load_dictionary(&dictionary_source)
        .with_context(|| format!("Cannot start without a dictionary ({dictionary_source})"))?;
    info!(
        "Using {} dictionary ({} words)",
        dictionary.language(),
        dictionary.len()
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let start_words = load_start(&cli.start_words)?;
            run_play_command(&dictionary, &start_words, cli.seed)
        }
        Commands::Simple => {
            let start_words = load_start(&cli.start_words)?;
            run_simple_command(&dictionary, &start_words, cli.seed)
        }
        Commands::Check { word, root } => {
            let result = check_word(&root, &word, &dictionary)?;
            print_check_result(&result);
            if !result.accepted() {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Words { root } => {
            print_words_result(&list_words(&root, &dictionary)?);
            Ok(())
        }
    }
}

/// Load the start-word list; failure here ends the program
fn load_start(value: &str) -> Result<Vec<String>> {
    let source = WordSource::from_arg(value);
    load_start_words(&source).context("Cannot start a round without a start-word list")
}

fn run_simple_command(
    dictionary: &Dictionary,
    start_words: &[String],
    seed: Option<u64>,
) -> Result<()> {
    let mut game = match seed {
        Some(seed) => GameState::with_seed(dictionary, seed),
        None => GameState::new(dictionary),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple(&mut game, start_words, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_play_command(
    dictionary: &Dictionary,
    start_words: &[String],
    seed: Option<u64>,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(dictionary, start_words, seed);
    run_tui(app)
}
