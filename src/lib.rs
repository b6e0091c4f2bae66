pub mod bookmark;
pub mod cli;
pub mod config;
pub mod power;
pub mod recording;
pub mod schedule;

pub use bookmark::{BookmarkCollection, BookmarkStore, NamePrompt, StdinPrompt};
pub use cli::Args;
pub use config::{Settings, SettingsProvider};
pub use power::{PowerControl, SystemPower};
pub use recording::{output_filename, RecordingRequest, StreamRecorder, StreamlinkRecorder};
pub use schedule::{resolve_instant, Clock, ScheduleController, SystemClock};
