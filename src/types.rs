//! Type-safe classification types for droidsweep
//!
//! This module replaces stringly-typed category and rating fields with proper
//! Rust enums that provide compile-time validation and exhaustive matching.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Classification category assigned to a detected package.
///
/// Assigned once by the classifier and immutable afterwards. The first three
/// variants only occur for packages found in the bloatware database; the
/// prefix rule table decides between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Bloatware in a device-manufacturer namespace (Samsung, Xiaomi, ...)
    #[strum(serialize = "brand")]
    Brand,
    /// Bloatware in a SoC/chipset-vendor namespace (Qualcomm, MediaTek, ...)
    #[strum(serialize = "chipset")]
    Chipset,
    /// Bloatware matching neither vendor prefix list
    #[strum(serialize = "generic")]
    Generic,
    /// Package in neither reference set - research before removing
    #[strum(serialize = "suspicious")]
    Suspicious,
    /// Recognised legitimate/system package
    #[strum(serialize = "system")]
    System,
}

impl Category {
    /// Display priority for grouping: lower sorts first.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Brand => 0,
            Self::Chipset => 1,
            Self::Generic => 2,
            Self::Suspicious => 3,
            Self::System => 4,
        }
    }

    /// Fixed heading for the display group this category belongs to.
    pub fn group_label(&self) -> &'static str {
        match self {
            Self::Brand => "Brand-specific bloatware",
            Self::Chipset => "Chipset-specific bloatware",
            Self::Generic => "Generic bloatware",
            Self::Suspicious => "Suspicious packages",
            Self::System => "Other installed apps",
        }
    }

    /// True for the three categories sourced from the bloatware database.
    pub fn is_bloatware(&self) -> bool {
        matches!(self, Self::Brand | Self::Chipset | Self::Generic)
    }
}

/// Curated risk tier describing the consequences of removing a package.
///
/// Sourced exclusively from the optional metadata side table; absence means
/// the curators have not rated the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SafetyRating {
    #[strum(serialize = "safe")]
    Safe,
    #[strum(serialize = "caution")]
    Caution,
    #[strum(serialize = "risky")]
    Risky,
}
