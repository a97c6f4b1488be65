//! Report module - terminal rendering and JSON export of analysis results

pub mod charts;
pub mod export;
pub mod summary;

pub use charts::*;
pub use export::*;
pub use summary::*;
