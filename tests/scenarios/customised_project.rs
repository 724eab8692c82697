//! Scenario: Customised Project
//!
//! Journey: the site owner took over a managed file by removing the
//! ownership signature, then upgraded the package.
//!
//! Success Criteria:
//! - The customised file is never overwritten
//! - The file that still carries the signature is refreshed
//! - The run succeeds and says why the customised file was skipped

use crate::common::*;

/// SCENARIO: an edited min.php survives upgrades
#[test]
fn scenario_user_owned_file_is_preserved() {
    let env = TestEnv::with_default_skeleton();
    assert!(env.run(&["install"]).success);

    env.write_project_file("assets/min.php", USER_MIN_PHP);
    env.write_skeleton_file(".htaccess", "# <brad @=\"bjc.id.au\" />\nRewriteEngine On\n# v3\n");

    let result = env.run(&["update"]);

    assert!(result.success, "update failed: {}", result.combined_output());
    assert_output_contains!(result, "no ownership signature");
    assert_eq!(env.read_project_file("assets/min.php"), USER_MIN_PHP);
    assert!(env.read_project_file("assets/.htaccess").ends_with("# v3\n"));

    let result = env.run(&["update"]);
    assert!(result.success);
    assert_eq!(env.read_project_file("assets/min.php"), USER_MIN_PHP);
}

/// SCENARIO: a removed managed file is not resurrected by updates
#[test]
fn scenario_deleted_file_stays_deleted() {
    let env = TestEnv::with_default_skeleton();
    assert!(env.run(&["install"]).success);
    std::fs::remove_file(env.project_path("assets/.htaccess")).unwrap();

    let result = env.run(&["update"]);

    assert!(result.success);
    assert_not_exists!(env, "assets/.htaccess");
    assert_eq!(env.read_project_file("assets/min.php"), SKELETON_MIN_PHP);
}
