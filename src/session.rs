//! Detection session state.
//!
//! The original removal-plan state lived in a UI framework's reactive store;
//! here it is an explicit session value built by [`detect`] and advanced
//! through pure transition functions. Every transition returns a new
//! collection, leaves non-targeted entries untouched, and returns an
//! element-wise equal collection when nothing needs changing - callers can
//! compare with `==` for cheap change detection.
//!
//! A detection run either fully succeeds (complete new collection) or fully
//! fails (error returned, caller keeps its previous session). There are no
//! partial results.

use crate::classifier::{classify_packages, group_for_display, CategoryGroup, DetectedPackage};
use crate::database::ReferenceDatabase;
use crate::error::{DroidSweepError, Result};
use crate::normalizer::normalize_input;
use crate::types::Category;
use serde::Serialize;
use tracing::info;

/// One detection run's worth of classified packages.
///
/// Rebuilt from scratch on every run; selection defaults are recomputed and
/// any prior manual selection is discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetectionSession {
    pub packages: Vec<DetectedPackage>,
}

/// Run a full detection pass: validate the raw paste, normalize, classify.
///
/// # Errors
///
/// - [`DroidSweepError::BlankInput`] if the paste is empty or whitespace-only
/// - [`DroidSweepError::EmptyInput`] if normalization yields no identifiers
pub fn detect(raw: &str, db: &ReferenceDatabase) -> Result<DetectionSession> {
    if raw.trim().is_empty() {
        return Err(DroidSweepError::BlankInput);
    }

    let identifiers = normalize_input(raw);
    if identifiers.is_empty() {
        return Err(DroidSweepError::EmptyInput);
    }

    let packages = classify_packages(&identifiers, db);
    info!(
        "Detection run complete: {} packages, {} auto-selected",
        packages.len(),
        packages.iter().filter(|p| p.selected).count()
    );
    Ok(DetectionSession { packages })
}

impl DetectionSession {
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn total(&self) -> usize {
        self.packages.len()
    }

    pub fn selected_count(&self) -> usize {
        self.packages.iter().filter(|p| p.selected).count()
    }

    /// The classified collection bucketed into the fixed display groups.
    pub fn grouped(&self) -> Vec<CategoryGroup> {
        group_for_display(&self.packages)
    }

    /// Flip the selection state of one package. Unknown identifiers leave
    /// the collection unchanged.
    pub fn toggle_package(&self, package_name: &str) -> Self {
        Self {
            packages: self
                .packages
                .iter()
                .map(|p| {
                    if p.package_name == package_name {
                        DetectedPackage {
                            selected: !p.selected,
                            ..p.clone()
                        }
                    } else {
                        p.clone()
                    }
                })
                .collect(),
        }
    }

    /// Set the selection state of one package.
    pub fn set_package_selected(&self, package_name: &str, selected: bool) -> Self {
        self.set_selected_where(|p| p.package_name == package_name, selected)
    }

    /// Set the selection state of every package in one category, leaving
    /// all other categories untouched.
    pub fn set_category_selected(&self, category: Category, selected: bool) -> Self {
        self.set_selected_where(|p| p.category == category, selected)
    }

    /// Select every package in the collection.
    pub fn select_all(&self) -> Self {
        self.set_selected_where(|_| true, true)
    }

    /// Deselect every package in the collection.
    pub fn deselect_all(&self) -> Self {
        self.set_selected_where(|_| true, false)
    }

    fn set_selected_where(
        &self,
        target: impl Fn(&DetectedPackage) -> bool,
        selected: bool,
    ) -> Self {
        Self {
            packages: self
                .packages
                .iter()
                .map(|p| {
                    if target(p) && p.selected != selected {
                        DetectedPackage {
                            selected,
                            ..p.clone()
                        }
                    } else {
                        p.clone()
                    }
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::BloatwareEntry;

    fn test_db() -> ReferenceDatabase {
        ReferenceDatabase::from_parts(
            vec!["com.android.chrome".to_string()],
            vec![
                ("com.android.egg".to_string(), BloatwareEntry::default()),
                (
                    "com.samsung.junk".to_string(),
                    BloatwareEntry::default(),
                ),
            ],
            vec![],
        )
    }

    fn test_session() -> DetectionSession {
        detect(
            "com.android.egg\ncom.samsung.junk\ncom.unknown.x\ncom.android.chrome",
            &test_db(),
        )
        .expect("detection should succeed")
    }

    #[test]
    fn test_detect_blank_input_rejected() {
        let db = test_db();
        assert!(matches!(detect("", &db), Err(DroidSweepError::BlankInput)));
        assert!(matches!(
            detect("   \n\t ", &db),
            Err(DroidSweepError::BlankInput)
        ));
    }

    #[test]
    fn test_detect_prefix_only_input_rejected() {
        // Non-blank raw input that normalizes to nothing
        let result = detect("package:\npackage:", &test_db());
        assert!(matches!(result, Err(DroidSweepError::EmptyInput)));
    }

    #[test]
    fn test_detect_recomputes_selection_defaults() {
        let session = test_session();
        let manual = session.set_package_selected("com.unknown.x", true);
        assert_eq!(manual.selected_count(), 3);

        // A rerun discards the manual selection
        let rerun = detect(
            "com.android.egg\ncom.samsung.junk\ncom.unknown.x\ncom.android.chrome",
            &test_db(),
        )
        .expect("detection should succeed");
        assert_eq!(rerun, session);
        assert_eq!(rerun.selected_count(), 2);
    }

    #[test]
    fn test_toggle_package_flips_only_target() {
        let session = test_session();
        let toggled = session.toggle_package("com.unknown.x");

        let target = toggled
            .packages
            .iter()
            .find(|p| p.package_name == "com.unknown.x")
            .expect("package present");
        assert!(target.selected);

        for (before, after) in session.packages.iter().zip(&toggled.packages) {
            if before.package_name != "com.unknown.x" {
                assert_eq!(before, after);
            }
        }

        // Toggling back restores the original collection
        assert_eq!(toggled.toggle_package("com.unknown.x"), session);
    }

    #[test]
    fn test_toggle_unknown_package_is_noop() {
        let session = test_session();
        assert_eq!(session.toggle_package("com.not.present"), session);
    }

    #[test]
    fn test_set_category_selected_scoped() {
        let session = test_session();
        let selected = session.set_category_selected(Category::Suspicious, true);
        assert_eq!(selected.selected_count(), 3);

        let deselected = selected.set_category_selected(Category::Suspicious, false);
        assert_eq!(deselected, session);
    }

    #[test]
    fn test_set_category_selected_noop_when_already_set() {
        let session = test_session();
        // Bloatware is auto-selected already; selecting again changes nothing
        let same = session.set_category_selected(Category::Brand, true);
        assert_eq!(same, session);
    }

    #[test]
    fn test_select_all_and_deselect_all() {
        let session = test_session();
        let all = session.select_all();
        assert_eq!(all.selected_count(), all.total());

        let none = all.deselect_all();
        assert_eq!(none.selected_count(), 0);
        assert_eq!(none.total(), session.total());
    }

    #[test]
    fn test_grouped_reflects_collection() {
        let session = test_session();
        let groups = session.grouped();
        let total: usize = groups.iter().map(|g| g.packages.len()).sum();
        assert_eq!(total, session.total());
    }
}
