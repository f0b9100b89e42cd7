//! Removal command synthesizer.
//!
//! Translates the currently-selected packages into the ordered `pm` command
//! sequence a user runs inside an `adb shell` session.
//!
//! # Design
//!
//! - **Pure logic**: No I/O, no side effects - only generates text
//! - **Deterministic**: Three commands per selected package, always in
//!   disable → clear → uninstall order, collection order preserved
//! - **Never executes**: Running the commands is entirely the user's
//!   responsibility via an external device shell

use crate::classifier::DetectedPackage;
use tracing::debug;

/// Fixed user-profile index the commands target.
const USER_ID: u32 = 0;

/// Synthesize the removal command sequence for all selected packages.
///
/// Emits exactly three commands per selected package, skipping unselected
/// entries but never reordering the rest. The output length is always
/// `3 × selected_count`.
pub fn synthesize_commands(packages: &[DetectedPackage]) -> Vec<String> {
    let commands: Vec<String> = packages
        .iter()
        .filter(|p| p.selected)
        .flat_map(|p| commands_for_package(&p.package_name))
        .collect();

    debug!("Synthesized {} removal commands", commands.len());
    commands
}

/// The fixed disable / clear / uninstall triple for one package.
fn commands_for_package(package_name: &str) -> [String; 3] {
    [
        format!("pm disable-user --user {USER_ID} {package_name}"),
        format!("pm clear --user {USER_ID} {package_name}"),
        format!("pm uninstall --user {USER_ID} {package_name}"),
    ]
}

/// The synthesized sequence as one newline-joined block for copy/paste.
pub fn to_script(packages: &[DetectedPackage]) -> String {
    synthesize_commands(packages).join("\n")
}
