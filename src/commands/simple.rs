//! Simple interactive CLI mode
//!
//! Suggests a guess, reads the game's feedback from the user, and narrows.

use crate::config::SessionConfig;
use crate::core::{FeedbackItem, LetterState, Word, from_pattern};
use crate::error::SessionError;
use crate::output::formatters::feedback_to_emoji;
use crate::solver::{Outcome, Session};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the user typed at the feedback prompt
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    NewGame,
    Feedback(Vec<FeedbackItem>),
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input fails or the vocabulary cannot start a
/// session.
pub fn run_simple(vocabulary: &[Word], config: SessionConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Solver - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest a guess. After playing it, enter the feedback pattern:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Any other symbol skips that letter. Commands: 'quit', 'new'\n");

    let mut session = Session::new(vocabulary.to_vec(), config)?;

    loop {
        let remaining = session.candidate_count();
        let guess = session.next_guess()?;

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {}: {remaining} candidates remaining", session.rounds() + 1);
        println!("────────────────────────────────────────────────────────────");
        println!(
            "\n📊 Suggested guess: {}\n",
            guess.text().to_uppercase().bright_yellow().bold()
        );

        if remaining <= 10 {
            println!("Remaining candidates:");
            for candidate in session.candidates() {
                println!("  • {}", candidate.text().to_uppercase());
            }
            println!();
        }

        let feedback = match read_input(&mut input, &guess)? {
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::NewGame => {
                session = Session::new(vocabulary.to_vec(), config)?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            Input::Feedback(feedback) => feedback,
        };

        match session.submit_feedback(&feedback) {
            Ok(Outcome::Continue { remaining: after }) => {
                println!(
                    "{} {}  eliminated {} ({remaining} → {after})\n",
                    guess.text().to_uppercase().bold(),
                    feedback_to_emoji(&feedback, guess.len()),
                    remaining - after
                );
            }
            Ok(Outcome::Solved { rounds, .. }) => {
                print_victory(&session, rounds);
                if !ask_play_again(&mut input)? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                session = Session::new(vocabulary.to_vec(), config)?;
                println!("\n🔄 New game started!\n");
            }
            Err(SessionError::Exhausted { .. }) => {
                println!(
                    "\n{}",
                    "❌ No candidates remain! Your feedback may be incorrect."
                        .red()
                        .bold()
                );
                println!("Starting over.\n");
                session = Session::new(vocabulary.to_vec(), config)?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn print_victory(session: &Session, rounds: usize) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Solution found in {} {}",
        rounds.to_string().bright_cyan().bold(),
        if rounds == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, round) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            round.guess.text().to_uppercase().bright_white().bold(),
            feedback_to_emoji(&round.feedback, round.guess.len())
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Prompt until the user enters a command or a usable pattern
fn read_input<R: BufRead>(input: &mut R, guess: &Word) -> Result<Input> {
    loop {
        let Some(line) = prompt(input, "Enter feedback (G/Y/-, 'win', or command)")? else {
            return Ok(Input::Quit);
        };

        if let Some(parsed) = parse_input(&line, guess) {
            return Ok(parsed);
        }
        println!("❌ Enter one symbol per letter, 'win', 'new' or 'quit'\n");
    }
}

/// Interpret one line of user input for the pending `guess`
fn parse_input(line: &str, guess: &Word) -> Option<Input> {
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Some(Input::Quit),
        "new" | "n" => Some(Input::NewGame),
        "win" | "correct" | "yes" | "solved" => Some(Input::Feedback(
            guess
                .chars()
                .enumerate()
                .map(|(i, c)| FeedbackItem::new(c, i, LetterState::Correct))
                .collect(),
        )),
        _ if line.chars().count() == guess.len() => {
            let feedback = from_pattern(guess, line);
            (!feedback.is_empty()).then_some(Input::Feedback(feedback))
        }
        _ => None,
    }
}

fn ask_play_again<R: BufRead>(input: &mut R) -> Result<bool> {
    let answer = prompt(input, "Play again? (yes/no)")?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

/// Print a prompt and read one trimmed line. `None` at end of input.
fn prompt<R: BufRead>(input: &mut R, text: &str) -> Result<Option<String>> {
    print!("{text}: ");
    io::stdout().flush().context("flushing stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState::*;

    fn crane() -> Word {
        Word::new("crane").unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_input("QUIT", &crane()), Some(Input::Quit));
        assert_eq!(parse_input("new", &crane()), Some(Input::NewGame));
        assert_eq!(parse_input("huh", &crane()), None);
    }

    #[test]
    fn pattern_without_known_symbols_is_rejected() {
        assert_eq!(parse_input("abcde", &crane()), None);
        assert_eq!(parse_input("?????", &crane()), None);
    }

    #[test]
    fn win_is_all_correct() {
        let Some(Input::Feedback(feedback)) = parse_input("win", &crane()) else {
            panic!("expected feedback");
        };
        assert_eq!(feedback.len(), 5);
        assert!(feedback.iter().all(|item| item.state == Correct));
    }

    #[test]
    fn pattern_with_unknown_symbol_drops_position() {
        let Some(Input::Feedback(feedback)) = parse_input("-y?gg", &crane()) else {
            panic!("expected feedback");
        };
        assert_eq!(
            feedback,
            vec![
                FeedbackItem::new('c', 0, Absent),
                FeedbackItem::new('r', 1, Present),
                FeedbackItem::new('n', 3, Correct),
                FeedbackItem::new('e', 4, Correct),
            ]
        );
    }

    #[test]
    fn read_input_retries_then_quits_at_eof() {
        let mut input = io::Cursor::new("nonsense\n");
        assert_eq!(read_input(&mut input, &crane()).unwrap(), Input::Quit);
    }

    #[test]
    fn read_input_reprompts_after_unusable_pattern() {
        let mut input = io::Cursor::new("abcde\n-y?gg\n");
        let Input::Feedback(feedback) = read_input(&mut input, &crane()).unwrap() else {
            panic!("expected feedback");
        };
        assert_eq!(feedback.len(), 4);
    }

    #[test]
    fn play_again_answers() {
        assert!(ask_play_again(&mut io::Cursor::new("Y\n")).unwrap());
        assert!(!ask_play_again(&mut io::Cursor::new("no\n")).unwrap());
        assert!(!ask_play_again(&mut io::Cursor::new("")).unwrap());
    }
}
