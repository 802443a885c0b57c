pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::resolver::{resolve, resolve_with_default, DEFAULT_IMPACT_FACTOR};
pub use crate::core::tables::all_specialties;
pub use crate::domain::services::{annotate_articles, ImpactAnnotator, StoredRankings};
pub use crate::utils::error::{ImpactError, Result};
