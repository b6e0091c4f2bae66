pub mod store;

pub use store::{BookmarkCollection, BookmarkStore, NamePrompt, StdinPrompt};
