use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use streamtape::bookmark::{BookmarkStore, StdinPrompt};
use streamtape::cli::Args;
use streamtape::config::{self, Settings};
use streamtape::power::SystemPower;
use streamtape::recording::StreamlinkRecorder;
use streamtape::schedule::{ScheduleController, SystemClock};
use tracing::info;

/// Bookmark document, kept in the working directory so it stays easy to
/// inspect and edit by hand.
const BOOKMARK_FILE: &str = "quickstreams.json";

/// Settings file, resolved by extension (config/streamtape.toml, .ini, ...).
const SETTINGS_FILE: &str = "config/streamtape";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let store = BookmarkStore::new(BOOKMARK_FILE);

    if args.list {
        list_bookmarks(&store)?;
        return Ok(());
    }

    if let Some(name) = &args.delete {
        if store.delete(name)? {
            println!("Quickstream {} successfully deleted.", name);
        } else {
            println!("No Quickstream under that name (--list to list them, --help for help)");
        }
        return Ok(());
    }

    let request = if let Some(name) = &args.load {
        match store.load(name) {
            Some(request) => request,
            None => {
                println!("No Quickstream under that name (--list to list, --help for help).");
                std::process::exit(1);
            }
        }
    } else {
        match args.to_request() {
            Some(request) => request,
            None => {
                println!(
                    "Channel and start_time arguments are required if \
                     --delete, --list, or --load aren't being called."
                );
                std::process::exit(2);
            }
        }
    };

    if request.bookmark.is_some() {
        let name = store.create(&request, &mut StdinPrompt)?;
        info!("Bookmarked these recording settings as {}", name);
    }

    let settings = Arc::new(Settings::load(SETTINGS_FILE)?);
    config::verify_required(settings.as_ref())?;

    println!(
        "Recording of {} will begin around {}",
        request.channel, request.start_time
    );

    let controller = ScheduleController::new(
        Arc::new(SystemClock),
        Arc::new(StreamlinkRecorder::new(settings)),
        Arc::new(SystemPower),
    );

    controller.run(&request).await
}

fn list_bookmarks(store: &BookmarkStore) -> Result<()> {
    let bookmarks = store.list();

    if bookmarks.is_empty() {
        println!("No Quickstream bookmarks found.");
    } else {
        println!("{}", serde_json::to_string_pretty(&bookmarks)?);
    }

    Ok(())
}
