pub mod json;

pub use json::{ErrorInfo, JsonFormatter, PollResultJson};
