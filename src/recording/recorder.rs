use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::path::Path;
use std::sync::Arc;
use tokio::process::Command;
use tracing::info;

use crate::config::SettingsProvider;

/// Container extension Streamlink writes Twitch streams into.
const OUTPUT_EXTENSION: &str = "ts";

/// Launches one capture of a stream and waits for it to end.
///
/// Implementations are fire-and-forget: the exit status of the capture is
/// not interpreted, and the schedule loop decides whether another attempt
/// happens.
#[async_trait]
pub trait StreamRecorder: Send + Sync {
    async fn record(
        &self,
        channel: &str,
        quality: Option<&str>,
        filename: Option<&str>,
    ) -> Result<()>;
}

/// Resolve the output filename for one capture cycle.
///
/// An explicit name is used as given, so every cycle of a reconnecting
/// recording writes to the same file. Without one, the name is stamped
/// with `now`, which gives each cycle a fresh timestamp.
pub fn output_filename(channel: &str, explicit: Option<&str>, now: NaiveDateTime) -> String {
    let stem = match explicit {
        Some(name) => name.to_string(),
        None => format!("{}-{}", channel, now.format("%m-%d(%H-%M)")),
    };

    format!("{}.{}", stem, OUTPUT_EXTENSION)
}

/// Records streams by invoking the external `streamlink` binary.
pub struct StreamlinkRecorder {
    settings: Arc<dyn SettingsProvider>,
}

impl StreamlinkRecorder {
    pub fn new(settings: Arc<dyn SettingsProvider>) -> Self {
        Self { settings }
    }

    /// Assemble the full streamlink argument list for one capture.
    ///
    /// Explicit quality and filename are passed through; missing ones fall
    /// back to the configured default quality and a `now`-stamped name.
    fn capture_args(
        &self,
        channel: &str,
        quality: Option<&str>,
        filename: Option<&str>,
        now: NaiveDateTime,
    ) -> Result<Vec<String>> {
        let filename = output_filename(channel, filename, now);

        let quality = match quality {
            Some(quality) => quality.to_string(),
            None => self.settings.get("recording", "quality")?,
        };

        let path = self.settings.get("download", "path")?;
        let wait = self.settings.get("connecting", "wait")?;
        let attempts = self.settings.get("connecting", "attempts")?;
        let rec_attempts = self.settings.get("recording", "attempts")?;

        Ok(vec![
            format!("twitch.tv/{}", channel),
            quality,
            "-o".to_string(),
            format!("{}/{}", path, filename),
            "--retry-streams".to_string(),
            wait,
            "--retry-max".to_string(),
            attempts,
            "--retry-open".to_string(),
            rec_attempts,
        ])
    }
}

#[async_trait]
impl StreamRecorder for StreamlinkRecorder {
    async fn record(
        &self,
        channel: &str,
        quality: Option<&str>,
        filename: Option<&str>,
    ) -> Result<()> {
        let args = self.capture_args(channel, quality, filename, chrono::Local::now().naive_local())?;

        let path = self.settings.get("download", "path")?;
        if !Path::new(&path).is_dir() {
            std::fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create download directory {}", path))?;
        }

        info!("Launching streamlink for {}", channel);

        // The exit status is deliberately not inspected; whether the
        // capture ended cleanly or not, the reconnect loop re-invokes on
        // its own schedule.
        Command::new("streamlink")
            .args(&args)
            .status()
            .await
            .context("Failed to launch streamlink")?;

        info!("Capture of {} ended", channel);

        Ok(())
    }
}
