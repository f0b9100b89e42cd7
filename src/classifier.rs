//! Package classifier.
//!
//! Translates a normalized identifier sequence plus the reference database
//! into the `DetectedPackage` collection the rest of the tool operates on.
//!
//! # Decision Procedure (per first occurrence, first match wins)
//!
//! | Step | Condition | Category | Auto-selected |
//! |------|-----------|----------|---------------|
//! | 1    | in recognised set | `system` | no |
//! | 2    | in bloatware set  | prefix rule table → brand/chipset/generic | yes |
//! | 3    | neither           | `suspicious` | no |
//!
//! Duplicate identifiers later in the input are dropped entirely, not
//! re-classified. Metadata always wins over the bloatware entry's own
//! name/description (curator product decision, see DESIGN.md).
//!
//! # Design
//!
//! - **Pure logic**: No I/O, no side effects - only classification
//! - **Typed output**: `Category` and `SafetyRating` are closed enums
//! - **Order-preserving**: Output keeps first-seen input order

// Library API - consumed by the CLI and external UIs
#![allow(dead_code)]

use crate::database::{PrefixRule, ReferenceDatabase, DEFAULT_PREFIX_RULES};
use crate::types::{Category, SafetyRating};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Fixed description for recognised packages without curated metadata.
const RECOGNISED_FALLBACK: &str = "Recognised as a legitimate application. \
     Not identified as bloatware, but can be removed if desired.";

/// Fixed description for packages in neither reference set.
const SUSPICIOUS_FALLBACK: &str =
    "Unrecognised package - not in our verified database. Research carefully before removing.";

// ============================================================================
// Detected Package
// ============================================================================

/// One classified package, created once per distinct input identifier.
///
/// `selected` is the only field that changes after classification, and only
/// through the explicit transition functions in [`crate::session`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedPackage {
    /// Immutable identifier key (reverse-domain style)
    pub package_name: String,
    /// Display name: metadata, else bloatware entry, else the identifier
    pub app_name: String,
    /// Always populated (possibly empty for bloatware without any source)
    pub description: String,
    /// Immutable once assigned
    pub category: Category,
    /// Whether the package is part of the removal plan
    pub selected: bool,
    /// Curated risk tier, metadata-sourced only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_rating: Option<SafetyRating>,
    /// Free-text removal consequences, metadata-sourced only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removal_impact: Option<String>,
    /// Open-vocabulary grouping label, metadata-sourced only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_category: Option<String>,
}

// ============================================================================
// Classification
// ============================================================================

/// Classify a normalized identifier sequence against the reference database.
///
/// Emits one `DetectedPackage` per distinct identifier in first-seen order;
/// later duplicates are silently dropped. Uses [`DEFAULT_PREFIX_RULES`] for
/// the bloatware brand/chipset split.
pub fn classify_packages(
    identifiers: &[String],
    db: &ReferenceDatabase,
) -> Vec<DetectedPackage> {
    classify_packages_with_rules(identifiers, db, DEFAULT_PREFIX_RULES)
}

/// Classification with an explicit prefix rule table (exposed for tests and
/// callers shipping their own vendor lists).
pub fn classify_packages_with_rules(
    identifiers: &[String],
    db: &ReferenceDatabase,
    rules: &[PrefixRule],
) -> Vec<DetectedPackage> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(identifiers.len());
    let mut detected = Vec::with_capacity(identifiers.len());

    for id in identifiers {
        // First occurrence wins; duplicates are dropped, not re-classified
        if !seen.insert(id.as_str()) {
            continue;
        }
        detected.push(classify_one(id, db, rules));
    }

    debug!(
        "Classified {} identifiers into {} distinct packages",
        identifiers.len(),
        detected.len()
    );
    detected
}

/// Classify a single identifier. Recognised check precedes the bloatware
/// check, so an identifier present in both sets resolves to `system`.
fn classify_one(id: &str, db: &ReferenceDatabase, rules: &[PrefixRule]) -> DetectedPackage {
    let meta = db.metadata(id);
    let meta_app_name = meta.and_then(|m| m.app_name.clone());
    let meta_description = meta.and_then(|m| m.description.clone());

    let (category, selected, app_name, description) = if db.is_recognised(id) {
        (
            Category::System,
            false,
            meta_app_name.unwrap_or_else(|| id.to_string()),
            meta_description.unwrap_or_else(|| RECOGNISED_FALLBACK.to_string()),
        )
    } else if let Some(entry) = db.bloatware_entry(id) {
        (
            classify_prefix(id, rules),
            true,
            meta_app_name
                .or_else(|| entry.app_name.clone())
                .unwrap_or_else(|| id.to_string()),
            meta_description
                .or_else(|| entry.description.clone())
                .unwrap_or_default(),
        )
    } else {
        (
            Category::Suspicious,
            false,
            meta_app_name.unwrap_or_else(|| id.to_string()),
            meta_description.unwrap_or_else(|| SUSPICIOUS_FALLBACK.to_string()),
        )
    };

    DetectedPackage {
        package_name: id.to_string(),
        app_name,
        description,
        category,
        selected,
        safety_rating: meta.and_then(|m| m.safety_rating),
        removal_impact: meta.and_then(|m| m.removal_impact.clone()),
        package_category: meta.and_then(|m| m.category.clone()),
    }
}

/// Resolve a bloatware identifier's vendor category from the rule table.
///
/// Case-insensitive starts-with match, evaluated top-to-bottom, first match
/// wins. No match means `generic`.
fn classify_prefix(id: &str, rules: &[PrefixRule]) -> Category {
    let lowered = id.to_ascii_lowercase();
    rules
        .iter()
        .find(|rule| lowered.starts_with(rule.prefix))
        .map(|rule| rule.category)
        .unwrap_or(Category::Generic)
}

// ============================================================================
// Grouping for Display
// ============================================================================

/// One display group: a fixed heading plus the packages bucketed into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub label: &'static str,
    pub packages: Vec<DetectedPackage>,
}

/// Bucket a classified collection into the five fixed display groups.
///
/// Groups appear in priority order (brand, chipset, generic, suspicious,
/// system); empty groups are omitted. Relative input order is preserved
/// within each group.
pub fn group_for_display(packages: &[DetectedPackage]) -> Vec<CategoryGroup> {
    let mut sorted: Vec<&DetectedPackage> = packages.iter().collect();
    // Stable sort on priority only, so input order survives within a group
    sorted.sort_by_key(|p| p.category.priority());

    let mut groups: Vec<CategoryGroup> = Vec::new();
    for pkg in sorted {
        match groups.last_mut() {
            Some(group) if group.category == pkg.category => group.packages.push(pkg.clone()),
            _ => groups.push(CategoryGroup {
                category: pkg.category,
                label: pkg.category.group_label(),
                packages: vec![pkg.clone()],
            }),
        }
    }
    groups
}

// ============================================================================
// Tests
// ============================================================================
