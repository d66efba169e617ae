//! Shared types for the httpfinger workspace: the error taxonomy, runtime
//! configuration, and lexicon-table loading.

pub mod config;
pub mod error;
pub mod lexicon;

pub use config::{FingerConfig, ReportMode};
pub use error::{FingerError, FingerResult};
pub use lexicon::Lexicons;
