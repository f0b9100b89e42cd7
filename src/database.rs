//! Reference database of recognised and bloatware packages.
//!
//! The database is supplied by an external data-curation collaborator and is
//! immutable after loading: a set of recognised (legitimate) identifiers, a
//! map of known bloatware entries, and an optional metadata side table.
//!
//! # Database File Format
//!
//! JSON, mirroring the curator export:
//!
//! ```json
//! {
//!   "recognised": ["com.android.chrome"],
//!   "bloatware": [
//!     "com.facebook.appmanager",
//!     { "package": "com.samsung.android.bixby.agent",
//!       "app_name": "Bixby Voice",
//!       "description": "Samsung voice assistant" }
//!   ],
//!   "metadata": {
//!     "com.samsung.android.bixby.agent": {
//!       "app_name": "Bixby Voice",
//!       "safety_rating": "safe",
//!       "removal_impact": "Voice assistant stops working",
//!       "category": "Assistant"
//!     }
//!   }
//! }
//! ```
//!
//! A small built-in database is compiled in so the CLI works without a
//! database file; `--database` replaces it entirely.

// Library API - consumed by the CLI and external UIs
#![allow(dead_code)]

use crate::error::Result;
use crate::types::{Category, SafetyRating};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

// ============================================================================
// Records
// ============================================================================

/// One curated bloatware record. Name and description are optional; bare
/// identifiers in the database file become entries with both unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloatwareEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Optional enrichment record from the metadata side table.
///
/// Every field is optional; consumers degrade gracefully when a field (or
/// the whole record) is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_rating: Option<SafetyRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removal_impact: Option<String>,
    /// Free-text grouping label - externally curated, so not an enum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A bloatware record as it appears in the database file: either a bare
/// identifier string or a full record carrying name/description.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum BloatwareRecord {
    Bare(String),
    Full {
        package: String,
        #[serde(default)]
        app_name: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
}

/// On-disk database file layout.
#[derive(Debug, Deserialize)]
struct DatabaseFile {
    #[serde(default)]
    recognised: Vec<String>,
    #[serde(default)]
    bloatware: Vec<BloatwareRecord>,
    #[serde(default)]
    metadata: HashMap<String, PackageMetadata>,
}

// ============================================================================
// Reference Database
// ============================================================================

/// Immutable reference database, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDatabase {
    recognised: HashSet<String>,
    bloatware: HashMap<String, BloatwareEntry>,
    metadata: HashMap<String, PackageMetadata>,
}

impl ReferenceDatabase {
    /// Build a database from pre-split collections.
    ///
    /// Duplicate identifiers within a collection are a curator-contract
    /// violation; loading tolerates them with last-record-wins semantics.
    pub fn from_parts(
        recognised: impl IntoIterator<Item = String>,
        bloatware: impl IntoIterator<Item = (String, BloatwareEntry)>,
        metadata: impl IntoIterator<Item = (String, PackageMetadata)>,
    ) -> Self {
        Self {
            recognised: recognised.into_iter().collect(),
            bloatware: bloatware.into_iter().collect(),
            metadata: metadata.into_iter().collect(),
        }
    }

    /// Load a database from a curator-exported JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!("Loading reference database from {:?}", path);
        let content = fs::read_to_string(path)?;
        let file: DatabaseFile = serde_json::from_str(&content)?;

        let bloatware = file.bloatware.into_iter().map(|record| match record {
            BloatwareRecord::Bare(package) => (package, BloatwareEntry::default()),
            BloatwareRecord::Full {
                package,
                app_name,
                description,
            } => (
                package,
                BloatwareEntry {
                    app_name,
                    description,
                },
            ),
        });

        let db = Self::from_parts(file.recognised, bloatware, file.metadata);
        info!(
            "Reference database loaded: {} recognised, {} bloatware, {} metadata records",
            db.recognised.len(),
            db.bloatware.len(),
            db.metadata.len()
        );
        Ok(db)
    }

    /// The compiled-in default database.
    pub fn builtin() -> Self {
        let bloatware = BUILTIN_BLOATWARE.iter().map(|(pkg, name, desc)| {
            (
                (*pkg).to_string(),
                BloatwareEntry {
                    app_name: (!name.is_empty()).then(|| (*name).to_string()),
                    description: (!desc.is_empty()).then(|| (*desc).to_string()),
                },
            )
        });
        Self::from_parts(
            BUILTIN_RECOGNISED.iter().map(|s| (*s).to_string()),
            bloatware,
            std::iter::empty(),
        )
    }

    /// Membership test against the recognised (legitimate) set.
    pub fn is_recognised(&self, package: &str) -> bool {
        self.recognised.contains(package)
    }

    /// Look up a curated bloatware entry.
    pub fn bloatware_entry(&self, package: &str) -> Option<&BloatwareEntry> {
        self.bloatware.get(package)
    }

    /// Look up the optional metadata record.
    pub fn metadata(&self, package: &str) -> Option<&PackageMetadata> {
        self.metadata.get(package)
    }

    pub fn recognised_count(&self) -> usize {
        self.recognised.len()
    }

    pub fn bloatware_count(&self) -> usize {
        self.bloatware.len()
    }
}

// ============================================================================
// Prefix Rule Table
// ============================================================================

/// One prefix classification rule: identifiers starting with `prefix`
/// (case-insensitively) get `category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRule {
    pub prefix: &'static str,
    pub category: Category,
}

/// Ordered rule table for classifying bloatware identifiers by vendor
/// namespace. Evaluated top-to-bottom, first match wins, so every brand
/// rule is listed before every chipset rule: an identifier matching both
/// lists always resolves to `brand`.
pub const DEFAULT_PREFIX_RULES: &[PrefixRule] = &[
    // Device manufacturers
    PrefixRule { prefix: "com.samsung.", category: Category::Brand },
    PrefixRule { prefix: "com.sec.", category: Category::Brand },
    PrefixRule { prefix: "com.miui.", category: Category::Brand },
    PrefixRule { prefix: "com.xiaomi.", category: Category::Brand },
    PrefixRule { prefix: "com.mi.", category: Category::Brand },
    PrefixRule { prefix: "com.huawei.", category: Category::Brand },
    PrefixRule { prefix: "com.hihonor.", category: Category::Brand },
    PrefixRule { prefix: "com.oppo.", category: Category::Brand },
    PrefixRule { prefix: "com.coloros.", category: Category::Brand },
    PrefixRule { prefix: "com.oneplus.", category: Category::Brand },
    PrefixRule { prefix: "com.vivo.", category: Category::Brand },
    PrefixRule { prefix: "com.bbk.", category: Category::Brand },
    PrefixRule { prefix: "com.lge.", category: Category::Brand },
    PrefixRule { prefix: "com.htc.", category: Category::Brand },
    PrefixRule { prefix: "com.sonymobile.", category: Category::Brand },
    PrefixRule { prefix: "com.sonyericsson.", category: Category::Brand },
    PrefixRule { prefix: "com.motorola.", category: Category::Brand },
    PrefixRule { prefix: "com.asus.", category: Category::Brand },
    PrefixRule { prefix: "com.zte.", category: Category::Brand },
    PrefixRule { prefix: "com.lenovo.", category: Category::Brand },
    PrefixRule { prefix: "com.tcl.", category: Category::Brand },
    PrefixRule { prefix: "com.transsion.", category: Category::Brand },
    PrefixRule { prefix: "com.infinix.", category: Category::Brand },
    PrefixRule { prefix: "com.tecno.", category: Category::Brand },
    PrefixRule { prefix: "com.realme.", category: Category::Brand },
    PrefixRule { prefix: "com.heytap.", category: Category::Brand },
    PrefixRule { prefix: "com.nothing.", category: Category::Brand },
    // Chipset vendors
    PrefixRule { prefix: "com.qualcomm.", category: Category::Chipset },
    PrefixRule { prefix: "com.qti.", category: Category::Chipset },
    PrefixRule { prefix: "com.quicinc.", category: Category::Chipset },
    PrefixRule { prefix: "com.mediatek.", category: Category::Chipset },
    PrefixRule { prefix: "com.mtk.", category: Category::Chipset },
    PrefixRule { prefix: "com.unisoc.", category: Category::Chipset },
    PrefixRule { prefix: "com.spreadtrum.", category: Category::Chipset },
    PrefixRule { prefix: "com.hisilicon.", category: Category::Chipset },
    PrefixRule { prefix: "vendor.qti.", category: Category::Chipset },
];

// ============================================================================
// Built-in Data
//
// A minimal working set so the CLI is useful without a database file.
// Curated exports are expected to be much larger; format: (package,
// app_name, description), empty string = unset.
// ============================================================================

const BUILTIN_RECOGNISED: &[&str] = &[
    "com.android.chrome",
    "com.android.vending",
    "com.android.settings",
    "com.android.systemui",
    "com.android.phone",
    "com.android.contacts",
    "com.android.mms",
    "com.google.android.gms",
    "com.google.android.gsf",
    "com.google.android.dialer",
    "com.google.android.messaging",
    "com.google.android.inputmethod.latin",
];

const BUILTIN_BLOATWARE: &[(&str, &str, &str)] = &[
    (
        "com.facebook.appmanager",
        "Facebook App Manager",
        "Background installer and updater for Facebook apps",
    ),
    (
        "com.facebook.services",
        "Facebook Services",
        "Background services for preloaded Facebook apps",
    ),
    (
        "com.facebook.system",
        "Facebook App Installer",
        "Silently installs Facebook applications",
    ),
    (
        "com.samsung.android.bixby.agent",
        "Bixby Voice",
        "Samsung voice assistant",
    ),
    (
        "com.samsung.android.app.spage",
        "Samsung Free",
        "News and content feed on the home screen",
    ),
    (
        "com.miui.analytics",
        "MIUI Analytics",
        "Xiaomi usage analytics and tracking",
    ),
    (
        "com.miui.msa.global",
        "MIUI System Ads",
        "Serves advertisements inside MIUI system apps",
    ),
    (
        "com.qualcomm.qti.qms.service.telemetry",
        "Qualcomm Telemetry",
        "Chipset telemetry reporting service",
    ),
    (
        "com.mediatek.duraspeed",
        "DuraSpeed",
        "MediaTek background app killer",
    ),
    ("com.android.egg", "", ""),
    (
        "com.netflix.partner.activation",
        "Netflix Activation",
        "Carrier/OEM Netflix preload activation stub",
    ),
];
