pub mod fixtures;
pub mod tracing;

pub use self::fixtures::{fixture_path, write_log};
pub use self::tracing::{CapturedEvent, capture_events};
