//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI. Reads from any `BufRead` and writes to
//! any `Write` so the loop can be driven from tests.

use crate::game::{GameState, Submission};
use crate::output::formatters::{circled_count, rejection_line};
use crate::validator::WordIsRealChecker;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// Starts a round, then treats every input line as a submission except for
/// the commands `:new`, `:words` and `:quit`. Returns at end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<C, R, I, O>(
    game: &mut GameState<C, R>,
    start_words: &[String],
    input: I,
    output: &mut O,
) -> io::Result<()>
where
    C: WordIsRealChecker,
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Make words of 3+ letters from the letters of the root word.")?;
    writeln!(output, "Commands: ':new' for a new word, ':words' to list your words, ':quit' to exit\n")?;

    game.start_round(start_words);
    print_round_header(game, output)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{} > ", game.root_word().to_uppercase().bright_yellow().bold())?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            break;
        };

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => {
                writeln!(output, "\n🔄 New word!\n")?;
                game.start_round(start_words);
                print_round_header(game, output)?;
            }
            ":words" | ":w" => print_used_words(game, output)?,
            _ => match game.submit(&line) {
                Ok(Submission::Accepted { word, score }) => {
                    writeln!(
                        output,
                        "{} {} {}",
                        "✓".green().bold(),
                        word.bright_white().bold(),
                        format!("(score: {score})").bright_black()
                    )?;
                }
                Ok(Submission::Ignored) => {}
                Err(rejection) => {
                    writeln!(output, "{}", format!("✗ {}", rejection_line(&rejection)).red())?;
                }
            },
        }
    }

    writeln!(
        output,
        "👋 Final score for {}: {}",
        game.root_word().to_uppercase(),
        game.score()
    )?;
    Ok(())
}

fn print_round_header<C, R, O>(game: &GameState<C, R>, output: &mut O) -> io::Result<()>
where
    O: Write,
{
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(
        output,
        "Root word: {}",
        game.root_word().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(output, "────────────────────────────────────────────────────────────")
}

fn print_used_words<C, R, O>(game: &GameState<C, R>, output: &mut O) -> io::Result<()>
where
    O: Write,
{
    writeln!(output, "Score: {}", game.score().to_string().bright_cyan().bold())?;
    for word in game.used_words() {
        writeln!(output, "  {} {word}", circled_count(word.chars().count()))?;
    }
    Ok(())
}
