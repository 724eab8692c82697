//! Scenario: Package Upgrade
//!
//! Journey: the project was provisioned from an older release and the
//! package is upgraded.
//!
//! Steps:
//! 1. Install from the old skeleton
//! 2. The vendored skeleton is replaced by a newer release
//! 3. The update hook runs
//!
//! Success Criteria:
//! - Signed managed files match the new skeleton
//! - Unmanaged files keep their provisioned content

use crate::common::*;

/// SCENARIO: upgrade refreshes min.php and .htaccess from their own sources
#[test]
fn scenario_upgrade_refreshes_managed_files() {
    let env = TestEnv::new();
    env.write_skeleton_file("min.php", OWNED_OLD_MIN_PHP);
    env.write_skeleton_file(".htaccess", "# <brad @=\"bjc.id.au\" />\nRewriteEngine Off\n");
    env.write_skeleton_file("js/app.js", "// v1\n");

    assert!(env.run(&["install"]).success);

    env.write_skeleton_file("min.php", SKELETON_MIN_PHP);
    env.write_skeleton_file(".htaccess", SKELETON_HTACCESS);
    env.write_skeleton_file("js/app.js", "// v2\n");

    let result = env.run(&["update"]);

    assert!(result.success, "update failed: {}", result.combined_output());
    assert_eq!(env.read_project_file("assets/min.php"), SKELETON_MIN_PHP);
    assert_eq!(env.read_project_file("assets/.htaccess"), SKELETON_HTACCESS);
    assert_eq!(env.read_project_file("assets/js/app.js"), "// v1\n");
}

/// SCENARIO: previewing the upgrade, then applying it
#[test]
fn scenario_preview_then_apply() {
    let env = TestEnv::with_default_skeleton();
    env.write_project_file("assets/min.php", OWNED_OLD_MIN_PHP);
    env.write_project_file("assets/.htaccess", SKELETON_HTACCESS);

    let preview = env.run(&["update", "--dry-run", "--json"]);
    assert!(preview.success);
    let files = preview.events_of("file");
    assert_eq!(files[0]["status"], "updated");
    assert_eq!(files[0]["dry_run"], true);
    assert_eq!(files[1]["before"], files[1]["after"]);
    assert_eq!(env.read_project_file("assets/min.php"), OWNED_OLD_MIN_PHP);

    let applied = env.run(&["update", "--lock"]);
    assert!(applied.success, "update failed: {}", applied.combined_output());
    assert_eq!(env.read_project_file("assets/min.php"), SKELETON_MIN_PHP);

    let again = env.run(&["update", "--json"]);
    for file in again.events_of("file") {
        assert_eq!(file["status"], "updated");
        assert_eq!(file["before"], file["after"]);
    }
}
