//! Configuration management
//!
//! Process-wide settings for the command-line front end. The conversion
//! functions themselves never read this; callers build a `Codec` from it.

pub mod settings;

pub use settings::{Config, GLOBAL_CONFIG, STRICT_PREFIX_ENV};
