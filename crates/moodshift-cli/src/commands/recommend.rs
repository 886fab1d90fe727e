use anyhow::Result;
use moodshift_application::NextOutcome;
use moodshift_core::selection::Selection;
use moodshift_core::tags::{Mood, SessionLength};

use super::App;
use crate::render;

pub async fn run(app: &App, mood: Mood, time: SessionLength, next: usize, launch: bool) -> Result<()> {
    let usecase = &app.usecase;
    let summary = usecase.start().await?;
    render::greeting(&summary);

    usecase.select_mood(mood).await?;
    let mut selection = usecase.select_time(time).await?;

    for _ in 0..next {
        match usecase.show_next().await? {
            NextOutcome::Shown(shown) => selection = shown,
            NextOutcome::DiscoveryFailed(e) => {
                render::error(&e.to_string());
                break;
            }
            NextOutcome::AlreadySearching | NextOutcome::Discarded => {}
        }
    }

    render::selection(&selection, usecase.device());

    if launch && matches!(selection, Selection::Candidate(_)) {
        let url = usecase.launch_current().await?;
        render::info(&format!("Opening {url}"));
    }
    Ok(())
}
