//! Human-readable detection report.
//!
//! Pure string building over the grouped classification - no terminal
//! control, no color, so the output pastes cleanly anywhere.

use crate::classifier::DetectedPackage;
use crate::session::DetectionSession;

/// Render the grouped detection report.
///
/// One heading per non-empty display group, one block per package with its
/// selection marker, identifier, description, and any curated metadata.
pub fn render_report(session: &DetectionSession) -> String {
    let mut lines = vec![format!(
        "Detected {} packages ({} selected for removal)",
        session.total(),
        session.selected_count()
    )];

    for group in session.grouped() {
        lines.push(String::new());
        lines.push(format!("{} ({})", group.label, group.packages.len()));
        for pkg in &group.packages {
            lines.extend(package_lines(pkg));
        }
    }

    lines.join("\n")
}

fn package_lines(pkg: &DetectedPackage) -> Vec<String> {
    let marker = if pkg.selected { "[x]" } else { "[ ]" };
    let mut lines = vec![format!("  {} {} ({})", marker, pkg.app_name, pkg.package_name)];

    if !pkg.description.is_empty() {
        lines.push(format!("      {}", pkg.description));
    }
    if let Some(rating) = pkg.safety_rating {
        lines.push(format!("      Safety: {rating}"));
    }
    if let Some(impact) = &pkg.removal_impact {
        lines.push(format!("      Removal impact: {impact}"));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::DetectedPackage;
    use crate::types::{Category, SafetyRating};

    fn session_with(packages: Vec<DetectedPackage>) -> DetectionSession {
        DetectionSession { packages }
    }

    fn pkg(name: &str, category: Category, selected: bool) -> DetectedPackage {
        DetectedPackage {
            package_name: name.to_string(),
            app_name: format!("App {name}"),
            description: "Does things".to_string(),
            category,
            selected,
            safety_rating: None,
            removal_impact: None,
            package_category: None,
        }
    }

    #[test]
    fn test_report_has_counts_and_headings() {
        let session = session_with(vec![
            pkg("com.a.b", Category::Generic, true),
            pkg("com.c.d", Category::System, false),
        ]);
        let report = render_report(&session);
        assert!(report.contains("Detected 2 packages (1 selected for removal)"));
        assert!(report.contains("Generic bloatware (1)"));
        assert!(report.contains("Other installed apps (1)"));
    }

    #[test]
    fn test_report_selection_markers() {
        let session = session_with(vec![
            pkg("com.a.b", Category::Generic, true),
            pkg("com.c.d", Category::Suspicious, false),
        ]);
        let report = render_report(&session);
        assert!(report.contains("[x] App com.a.b (com.a.b)"));
        assert!(report.contains("[ ] App com.c.d (com.c.d)"));
    }

    #[test]
    fn test_report_includes_metadata_lines() {
        let mut p = pkg("com.a.b", Category::Brand, true);
        p.safety_rating = Some(SafetyRating::Caution);
        p.removal_impact = Some("Widgets stop updating".to_string());
        let report = render_report(&session_with(vec![p]));
        assert!(report.contains("Safety: caution"));
        assert!(report.contains("Removal impact: Widgets stop updating"));
    }

    #[test]
    fn test_report_skips_empty_description() {
        let mut p = pkg("com.a.b", Category::Generic, true);
        p.description = String::new();
        let report = render_report(&session_with(vec![p]));
        assert!(!report.contains("      \n"));
        assert!(report.contains("[x] App com.a.b"));
    }

    #[test]
    fn test_empty_session_report() {
        let report = render_report(&session_with(vec![]));
        assert!(report.contains("Detected 0 packages (0 selected for removal)"));
    }
}
