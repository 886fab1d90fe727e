use anyhow::Result;

use super::App;
use crate::render;

pub async fn run(app: &App, limit: Option<usize>) -> Result<()> {
    app.usecase.start().await?;
    let records = app.usecase.history().await;
    let shown = limit.unwrap_or(records.len()).min(records.len());
    render::history(&records[..shown], chrono::Utc::now().timestamp_millis());
    Ok(())
}

pub async fn stats(app: &App) -> Result<()> {
    let usecase = &app.usecase;
    usecase.start().await?;
    render::stats(
        usecase.weekly_count().await,
        usecase.history().await.len(),
        usecase.is_returning_visitor().await,
    );
    render::info(&format!("Data directory: {}", app.paths.data_dir().display()));
    Ok(())
}
