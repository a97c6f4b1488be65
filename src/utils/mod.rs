//! Utilities - progress spinners, terminal styling and logging setup

mod logging;
mod progress;
mod styling;

pub use logging::*;
pub use progress::*;
pub use styling::*;
