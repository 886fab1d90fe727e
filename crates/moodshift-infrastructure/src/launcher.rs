//! Launch action backed by the host's URL opener.

use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use moodshift_core::error::{MoodshiftError, Result};
use moodshift_core::launch::Launcher;

/// Opens URLs with `xdg-open`, `open` or `cmd /C start` depending on the OS.
#[derive(Debug, Clone)]
pub struct CommandLauncher {
    program: String,
    args: Vec<String>,
}

impl CommandLauncher {
    /// Launcher for the current operating system.
    pub fn system() -> Self {
        if cfg!(target_os = "macos") {
            Self::with_command("open", &[])
        } else if cfg!(target_os = "windows") {
            Self::with_command("cmd", &["/C", "start", ""])
        } else {
            Self::with_command("xdg-open", &[])
        }
    }

    /// Runs `program args... <url>`.
    pub fn with_command(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Default for CommandLauncher {
    fn default() -> Self {
        Self::system()
    }
}

impl CommandLauncher {
    /// Spawns the opener and waits for it on a background thread so the
    /// child is reaped. The handle yields the opener's exit status.
    fn spawn(&self, url: &str) -> Result<JoinHandle<Option<ExitStatus>>> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| MoodshiftError::io(format!("failed to run {}: {}", self.program, e)))?;

        let program = self.program.clone();
        Ok(thread::spawn(move || match child.wait() {
            Ok(status) => {
                if !status.success() {
                    tracing::warn!(%program, %status, "url opener exited with failure");
                }
                Some(status)
            }
            Err(e) => {
                tracing::warn!(%program, "failed to wait for url opener: {}", e);
                None
            }
        }))
    }
}

impl Launcher for CommandLauncher {
    fn open(&self, url: &str) -> Result<()> {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(MoodshiftError::internal(format!(
                "refusing to open non-http url '{url}'"
            )));
        }

        self.spawn(url)?;
        tracing::info!(url, "launched");
        Ok(())
    }
}
