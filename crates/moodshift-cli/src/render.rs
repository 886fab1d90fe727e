//! Terminal output.

use colored::Colorize;
use moodshift_application::VisitSummary;
use moodshift_core::device::DeviceInfo;
use moodshift_core::history::{HistoryRecord, relative_time};
use moodshift_core::selection::{Candidate, Selection};
use moodshift_core::tags::{Mood, SessionLength};
use strum::IntoEnumIterator;

pub fn greeting(summary: &VisitSummary) {
    let title = if summary.is_returning {
        "Welcome back"
    } else {
        "How are you feeling?"
    };
    println!("{}", title.bright_magenta().bold());
    if summary.weekly_count > 0 {
        println!(
            "{}",
            format!("{} intentional breaks this week", summary.weekly_count).bright_black()
        );
    }
}

pub fn mood_menu() {
    for (i, mood) in Mood::iter().enumerate() {
        println!("  {} {} {}", format!("{}.", i + 1).bright_black(), mood.emoji(), mood);
    }
}

pub fn time_menu() {
    for (i, length) in SessionLength::iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).bright_black(), length.label());
    }
}

pub fn selection(selection: &Selection, device: &DeviceInfo) {
    match selection {
        Selection::Candidate(candidate) => self::candidate(candidate, device),
        Selection::Pending => println!("{}", "Searching worldwide hits...".yellow()),
        Selection::Exhausted => {
            println!("{}", "No more games in your library for this mood.".yellow());
            println!(
                "{}",
                "Type 'hits' to find worldwide hits (or pass --next 1).".bright_black()
            );
        }
    }
}

fn candidate(candidate: &Candidate, device: &DeviceInfo) {
    let badge = if candidate.is_discovered() {
        "Worldwide hit".bright_cyan()
    } else {
        "From your library".bright_green()
    };
    println!();
    println!("{}  {}", candidate.name().bold(), badge);
    println!("{}", candidate.description());
    println!("{}", candidate.launch_url(device).underline().blue());
    for source in candidate.sources() {
        if let Some(uri) = &source.uri {
            println!("  {} {}", source.display_title().bright_black(), uri.bright_black());
        }
    }
    println!();
}

pub fn history(records: &[HistoryRecord], now: i64) {
    if records.is_empty() {
        println!("{}", "No breaks logged yet.".bright_black());
        return;
    }
    for record in records {
        println!(
            "{} {:<28} {:<12} {}",
            record.mood.emoji(),
            record.recommended_game_name,
            record.time_selected.label(),
            relative_time(record.timestamp, now).bright_black()
        );
    }
}

pub fn stats(weekly: usize, total: usize, returning: bool) {
    println!("{} {}", "This week:".bold(), weekly);
    println!("{} {}", "All time: ".bold(), total);
    println!(
        "{} {}",
        "Visited in the last 24h:".bold(),
        if returning { "yes" } else { "no" }
    );
}

pub fn info(message: &str) {
    println!("{}", message.bright_black());
}

pub fn error(message: &str) {
    eprintln!("{}", message.red());
}
