//! Interactive session driven by the step state machine.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::str::FromStr;

use anyhow::Result;
use colored::Colorize;
use moodshift_application::NextOutcome;
use moodshift_core::session::SessionStep;
use moodshift_core::tags::{Mood, SessionLength};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use strum::IntoEnumIterator;

use super::App;
use crate::render;

const GLOBAL_COMMANDS: &[&str] = &["back", "history", "reset", "help", "quit"];
const RESULT_COMMANDS: &[&str] = &["next", "hits", "open"];

/// Completion and hints for shell commands, moods and session lengths.
struct ShellHelper {
    words: Vec<String>,
}

impl ShellHelper {
    fn new() -> Self {
        let mut words: Vec<String> = GLOBAL_COMMANDS
            .iter()
            .chain(RESULT_COMMANDS)
            .map(|w| w.to_string())
            .collect();
        words.extend(Mood::iter().map(|m| m.to_string().to_lowercase()));
        words.extend(SessionLength::iter().map(|l| l.to_string().to_lowercase()));
        Self { words }
    }
}

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return Ok((0, vec![]));
        }
        let candidates = self
            .words
            .iter()
            .filter(|word| word.starts_with(line))
            .map(|word| Pair {
                display: word.clone(),
                replacement: word.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.words.iter().any(|word| word == line.trim()) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return None;
        }
        self.words
            .iter()
            .find(|word| word.starts_with(line) && word.len() > line.len())
            .map(|word| word[line.len()..].to_string())
    }
}

impl Validator for ShellHelper {}

enum Flow {
    Continue,
    Quit,
}

pub async fn run(app: &App) -> Result<()> {
    let summary = app.usecase.start().await?;

    let mut rl = Editor::new()?;
    rl.set_helper(Some(ShellHelper::new()));

    println!("{}", "=== MoodShift ===".bright_magenta().bold());
    render::greeting(&summary);
    print_prompt_for(app).await;

    loop {
        let prompt = format!("{}> ", step_label(app.usecase.snapshot().await.step));
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match handle(app, trimmed).await {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => break,
                    Err(e) => render::error(&format!("{e:#}")),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                render::error(&format!("Error: {err:?}"));
                break;
            }
        }
    }

    println!("{}", "Enjoy your break!".bright_green());
    Ok(())
}

async fn handle(app: &App, input: &str) -> Result<Flow> {
    let usecase = &app.usecase;
    let command = input.to_lowercase();

    match command.as_str() {
        "quit" | "exit" => return Ok(Flow::Quit),
        "help" => {
            print_help();
            return Ok(Flow::Continue);
        }
        "back" => {
            usecase.back().await;
            print_prompt_for(app).await;
            return Ok(Flow::Continue);
        }
        "reset" => {
            usecase.reset().await;
            print_prompt_for(app).await;
            return Ok(Flow::Continue);
        }
        "history" => {
            usecase.open_history().await;
            render::history(&usecase.history().await, chrono::Utc::now().timestamp_millis());
            render::info("Type 'back' to pick a new mood.");
            return Ok(Flow::Continue);
        }
        _ => {}
    }

    match usecase.snapshot().await.step {
        SessionStep::MoodSelect => {
            let mood = parse_choice::<Mood>(&command)?;
            usecase.select_mood(mood).await?;
            print_prompt_for(app).await;
        }
        SessionStep::TimeSelect => {
            let length = parse_choice::<SessionLength>(&command)?;
            let selection = usecase.select_time(length).await?;
            render::selection(&selection, usecase.device());
        }
        SessionStep::Result => match command.as_str() {
            "next" | "n" => {
                render::info("Finding another one...");
                report(app, usecase.show_next().await?).await;
            }
            "hits" => {
                render::info("Searching worldwide hits...");
                report(app, usecase.find_worldwide_hits().await?).await;
            }
            "open" | "play" => {
                let url = usecase.launch_current().await?;
                render::info(&format!("Opening {url}"));
            }
            _ => render::error("Try 'next', 'hits', 'open', 'back' or 'help'."),
        },
        SessionStep::History => render::error("Type 'back' to pick a new mood."),
    }
    Ok(Flow::Continue)
}

async fn report(app: &App, outcome: NextOutcome) {
    match outcome {
        NextOutcome::Shown(selection) => render::selection(&selection, app.usecase.device()),
        NextOutcome::DiscoveryFailed(e) => {
            render::error(&format!("{e}"));
            render::info("Your current pick is still here. Try 'next' again later.");
        }
        NextOutcome::AlreadySearching => render::info("Still searching..."),
        NextOutcome::Discarded => {}
    }
}

/// Accepts a 1-based menu number or a case-insensitive name.
fn parse_choice<T>(input: &str) -> Result<T>
where
    T: IntoEnumIterator + FromStr,
{
    if let Ok(index) = input.parse::<usize>() {
        if let Some(choice) = index.checked_sub(1).and_then(|i| T::iter().nth(i)) {
            return Ok(choice);
        }
    }
    T::from_str(input).map_err(|_| anyhow::anyhow!("'{input}' is not one of the options"))
}

async fn print_prompt_for(app: &App) {
    match app.usecase.snapshot().await.step {
        SessionStep::MoodSelect => {
            println!("{}", "How are you feeling?".bold());
            render::mood_menu();
        }
        SessionStep::TimeSelect => {
            println!("{}", "How long is your break?".bold());
            render::time_menu();
        }
        SessionStep::Result => {
            if let Ok(selection) = app.usecase.current().await {
                render::selection(&selection, app.usecase.device());
            }
        }
        SessionStep::History => {}
    }
}

fn step_label(step: SessionStep) -> &'static str {
    match step {
        SessionStep::MoodSelect => "mood",
        SessionStep::TimeSelect => "time",
        SessionStep::Result => "pick",
        SessionStep::History => "history",
    }
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  <mood> / <number>   choose a mood, then a session length");
    println!("  next                another game for the same mood");
    println!("  hits                search worldwide hits once your library runs out");
    println!("  open                open the current pick");
    println!("  back / reset        step back / start over");
    println!("  history             recent breaks");
    println!("  quit                exit");
}
