pub mod recorder;
pub mod request;

pub use recorder::{output_filename, StreamRecorder, StreamlinkRecorder};
pub use request::RecordingRequest;
