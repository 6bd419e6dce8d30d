// crates/logging/src/lib.rs

mod flags;
mod formatter;
mod json_format;
mod subscriber;

pub use flags::{DebugFlag, InfoFlag, LogFormat, SubscriberConfig, SubscriberConfigBuilder};
pub use formatter::ReportFormatter;
pub use json_format::JsonFormatter;
pub use subscriber::{init, subscriber};
