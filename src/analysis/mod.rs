//! Analysis module - classification, summaries and the request dispatcher

pub mod bivariate;
pub mod chart;
pub mod classify;
pub mod config;
pub mod correlation;
pub mod dispatch;
pub mod loader;
pub mod missing;
pub mod notice;
pub mod overview;
pub mod stats;
pub mod univariate;

pub use bivariate::*;
pub use chart::*;
pub use classify::*;
pub use config::*;
pub use correlation::*;
pub use dispatch::*;
pub use loader::*;
pub use missing::*;
pub use notice::*;
pub use overview::*;
pub use stats::*;
pub use univariate::*;
