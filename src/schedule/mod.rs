pub mod clock;
pub mod controller;

pub use clock::{resolve_instant, Clock, SystemClock};
pub use controller::ScheduleController;
