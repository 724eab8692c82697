//! Scenario: Fresh Install
//!
//! Journey: a project requires the package for the first time.
//!
//! Steps:
//! 1. The package is vendored with its skeleton
//! 2. The host checks the package type
//! 3. The install hook provisions `assets/`
//!
//! Success Criteria:
//! - Every skeleton entry is present under `assets/`, byte for byte
//! - Running install again changes nothing

use crate::common::*;

/// SCENARIO: first install copies the full skeleton
#[test]
fn scenario_fresh_install_copies_skeleton() {
    let env = TestEnv::with_default_skeleton();
    env.write_skeleton_file("img/icons/.gitkeep", "");

    let result = env.run(&["supports", "gears-assetmini"]);
    assert!(result.success, "package type should be supported");

    let result = env.run(&["install"]);
    assert!(result.success, "install failed: {}", result.combined_output());

    let skeleton = env.project_path(SKELETON_DIR);
    let target = env.project_path("assets");
    let mut expected: Vec<String> = list_all_files(&skeleton)
        .into_iter()
        .map(|p| p.replacen(skeleton.to_str().unwrap(), "", 1))
        .collect();
    let mut actual: Vec<String> = list_all_files(&target)
        .into_iter()
        .map(|p| p.replacen(target.to_str().unwrap(), "", 1))
        .collect();
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);

    assert_eq!(env.read_project_file("assets/.htaccess"), SKELETON_HTACCESS);
    assert_eq!(env.read_project_file("assets/css/site.css"), SKELETON_SITE_CSS);
    assert!(env.project_path("assets/img/icons").is_dir());
}

/// SCENARIO: re-running install after the user edits files is harmless
#[test]
fn scenario_repeated_install_keeps_user_edits() {
    let env = TestEnv::with_default_skeleton();

    assert!(env.run(&["install"]).success);
    env.write_project_file("assets/js/app.js", "// customised\n");
    std::fs::remove_file(env.project_path("assets/css/site.css")).unwrap();

    let result = env.run(&["install"]);

    assert!(result.success);
    assert_eq!(env.read_project_file("assets/js/app.js"), "// customised\n");
    assert_not_exists!(env, "assets/css/site.css");
}
