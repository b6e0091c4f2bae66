use clap::Parser;

use crate::recording::RecordingRequest;

/// Record a Twitch stream through Streamlink at a scheduled time.
#[derive(Debug, Parser)]
#[command(name = "streamtape")]
#[command(about = "Twitch stream recorder")]
pub struct Args {
    /// Name of the Twitch channel to record
    pub channel: Option<String>,

    /// Local 24hr time to start recording (HH:MM)
    pub start_time: Option<String>,

    /// Name to save recording as
    #[arg(short, long)]
    pub filename: Option<String>,

    /// Recording quality, a Streamlink compatible value e.g. 'best', '720p'
    #[arg(short, long)]
    pub quality: Option<String>,

    /// Attempt to reconnect and record again if the stream ends before this local 24hr time
    #[arg(short, long, value_name = "HH:MM")]
    pub reconnect: Option<String>,

    /// Shutdown computer when the recording schedule finishes
    #[arg(short, long)]
    pub shutdown: bool,

    /// Bookmark these recording settings under the given name
    #[arg(short, long, value_name = "name")]
    pub bookmark: Option<String>,

    /// List all Quickstream bookmarks
    #[arg(long)]
    pub list: bool,

    /// Load the named Quickstream bookmark
    #[arg(short, long, value_name = "name")]
    pub load: Option<String>,

    /// Delete the named Quickstream bookmark
    #[arg(short, long, value_name = "name")]
    pub delete: Option<String>,
}

impl Args {
    /// Build the unit of work the scheduler consumes. Only possible when
    /// both positional arguments were given.
    pub fn to_request(&self) -> Option<RecordingRequest> {
        match (&self.channel, &self.start_time) {
            (Some(channel), Some(start_time)) => Some(RecordingRequest {
                channel: channel.clone(),
                start_time: start_time.clone(),
                filename: self.filename.clone(),
                quality: self.quality.clone(),
                reconnect: self.reconnect.clone(),
                shutdown: self.shutdown,
                bookmark: self.bookmark.clone(),
            }),
            _ => None,
        }
    }
}
