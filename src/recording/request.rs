use serde::{Deserialize, Serialize};

/// A single scheduled recording: which channel to capture, when to start,
/// and how to save it.
///
/// The same shape is persisted as a Quickstream bookmark, so the field
/// names here are the on-disk schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingRequest {
    /// Channel to record (the part after `twitch.tv/`).
    pub channel: String,

    /// Local 24hr wall-clock start time, "HH:MM".
    pub start_time: String,

    /// Name to save the recording as, without extension. `None` means a
    /// timestamped name is generated fresh at each invocation.
    #[serde(default)]
    pub filename: Option<String>,

    /// Streamlink-compatible quality, e.g. "best" or "720p". `None` means
    /// the configured default.
    #[serde(default)]
    pub quality: Option<String>,

    /// Keep re-recording until this local time ("HH:MM") if the stream
    /// ends early.
    #[serde(default)]
    pub reconnect: Option<String>,

    /// Shut the machine down once the schedule completes.
    #[serde(default)]
    pub shutdown: bool,

    /// Bookmark name this request should be saved under. Cleared on the
    /// stored copy so a loaded bookmark never re-bookmarks itself.
    #[serde(default)]
    pub bookmark: Option<String>,
}
