//! Display functions for command results

use super::formatters::{circled_count, rejection_line};
use crate::commands::{CheckResult, WordsResult};
use crate::game::Submission;
use colored::Colorize;

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\nRoot: {}   Word: {}",
        result.root.to_uppercase().bright_yellow().bold(),
        result.word.to_uppercase().bright_white().bold()
    );

    match &result.outcome {
        Ok(Submission::Accepted { word, .. }) => {
            println!(
                "{}",
                format!("✅ '{word}' would be accepted").green().bold()
            );
        }
        Ok(Submission::Ignored) => {
            println!("{}", "Nothing to check".bright_black());
        }
        Err(rejection) => {
            println!("{}", format!("❌ {}", rejection_line(rejection)).red().bold());
        }
    }
}

/// Print every playable word for a root
pub fn print_words_result(result: &WordsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORDS IN".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📖 {} playable words (dictionary of {})\n",
        result.words.len().to_string().bright_yellow().bold(),
        result.dictionary_size
    );

    let mut current_len = None;
    for word in &result.words {
        let len = word.chars().count();
        if current_len != Some(len) {
            current_len = Some(len);
            println!("{}", format!("{} letters", circled_count(len)).bright_cyan());
        }
        println!("   {word}");
    }
}
