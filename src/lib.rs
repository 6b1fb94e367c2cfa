//! Personalized wordlist generation.
//!
//! Facts about a target go into a [`BookKeeper`]; [`generate`] turns them
//! into a ranked, deduplicated candidate list.

pub mod book;
pub mod combine;
pub mod engine;
pub mod error;
pub mod mangle;
pub mod output;
pub mod permute;
pub mod rank;
pub mod settings;
pub mod suffix;
pub mod terminal;
pub mod transform;

pub use book::BookKeeper;
pub use engine::{Options, generate};
pub use error::{Error, Result};
pub use settings::Settings;
