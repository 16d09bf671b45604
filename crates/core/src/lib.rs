//! Core types for FounderOS
//!
//! Domain records shared by the analysis engine, storage and service layers.

mod activity;
mod chatter;
pub mod constants;
mod drift;
mod env_config;
mod error;
mod pattern;
mod profile;

pub use activity::*;
pub use chatter::*;
pub use constants::*;
pub use drift::*;
pub use env_config::*;
pub use error::*;
pub use pattern::*;
pub use profile::*;
