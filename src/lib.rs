//! droidsweep library
//!
//! Core engine for classifying installed Android packages against a curated
//! reference database and synthesizing the bloatware removal command plan.
//! The CLI binary (and any richer UI) is a thin consumer of this crate.

pub mod classifier;
pub mod cli;
pub mod database;
pub mod error;
pub mod normalizer;
pub mod report;
pub mod session;
pub mod synthesizer;
pub mod types;

// Re-export main types for convenience
pub use classifier::{
    classify_packages, classify_packages_with_rules, group_for_display, CategoryGroup,
    DetectedPackage,
};
pub use database::{
    BloatwareEntry, PackageMetadata, PrefixRule, ReferenceDatabase, DEFAULT_PREFIX_RULES,
};
pub use error::{DroidSweepError, Result};
pub use normalizer::normalize_input;
pub use report::render_report;
pub use session::{detect, DetectionSession};
pub use synthesizer::{synthesize_commands, to_script};
pub use types::{Category, SafetyRating};
