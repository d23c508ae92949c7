//! Display functions for command results

use super::formatters::{distribution_bar, feedback_hint};
use crate::alphabet::keyboard_rows;
use crate::core::{Feedback, Letter, Session, Status};
use crate::stats::{Statistics, display_value};
use colored::{ColoredString, Colorize};

fn colored_key(letter: Letter, feedback: Feedback) -> ColoredString {
    let label = format!(" {} ", letter.as_char().to_ascii_uppercase());
    match feedback {
        Feedback::Unguessed => label.bold(),
        Feedback::Far => label.black().on_bright_black(),
        Feedback::Close => label.black().on_yellow().bold(),
        Feedback::Correct => label.black().on_green().bold(),
    }
}

/// Print the board as three keyboard rows
pub fn print_board(board: &[(Letter, Feedback)]) {
    println!();
    for (indent, row) in keyboard_rows(board).iter().enumerate() {
        let keys: Vec<String> = row
            .iter()
            .map(|&(letter, feedback)| colored_key(letter, feedback).to_string())
            .collect();
        println!("  {}{}", "  ".repeat(indent), keys.join(" "));
    }
    println!();
}

/// Print the outcome of a single guess
pub fn print_guess_result(letter: Letter, feedback: Feedback, session: &Session) {
    let hint = feedback_hint(feedback);
    let line = format!(
        "{} {} ({} {})",
        colored_key(letter, feedback),
        hint,
        session.attempts,
        if session.attempts == 1 { "attempt" } else { "attempts" }
    );
    match feedback {
        Feedback::Correct => println!("{}", line.green().bold()),
        Feedback::Close => println!("{}", line.yellow()),
        _ => println!("{line}"),
    }
}

/// One-line summary of where the current window stands
pub fn print_status(session: &Session) {
    match session.status {
        Status::Complete => println!(
            "{}",
            format!(
                "🎉 Found in {} {}! Come back tomorrow.",
                session.attempts,
                if session.attempts == 1 { "attempt" } else { "attempts" }
            )
            .green()
            .bold()
        ),
        Status::Loaded => println!(
            "Attempts so far: {}",
            session.attempts.to_string().bright_yellow()
        ),
        Status::Idle | Status::Loading => println!("{}", "Loading....".bright_black()),
    }
}

/// Print statistics and the time until the next window
pub fn print_statistics(stats: &Statistics, countdown: Option<&str>) {
    println!("\n{}", "═".repeat(44).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(44).cyan());

    println!("\n   Total attempts:  {}", stats.played.to_string().bold());
    println!("   Today:           {}", stats.today.to_string().bold());
    println!(
        "   Average:         {}",
        display_value(stats.average).bright_yellow().bold()
    );
    println!(
        "   Best:            {}",
        display_value(stats.best).green().bold()
    );

    if !stats.distribution.is_empty() {
        println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
        let max_bucket = stats.max_bucket();
        for &(attempts, count) in &stats.distribution {
            let bar = distribution_bar(count, max_bucket, 30);
            println!("   {attempts:>2}: {} {count}", bar.green());
        }
    }

    println!("\n⏳ {}", "Next available:".bright_cyan().bold());
    match countdown {
        Some(remaining) => println!("   {}", remaining.bold()),
        None => println!("   And like that... he's gone! (Refresh to start over)"),
    }
    println!();
}
