//! Test environment for isolated AssetMini runs.
//!
//! `TestEnv` owns a temporary project directory. The package is vendored at
//! `vendor/gears/assetmini`, matching the default configuration, and the
//! CLI is run with every `ASSETMINI_*` variable cleared.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::*;

/// Package root relative to the project, under default configuration
pub const PACKAGE_ROOT: &str = "vendor/gears/assetmini";

/// Skeleton directory relative to the project, under default configuration
pub const SKELETON_DIR: &str = "vendor/gears/assetmini/skel";

const CLEARED_VARS: &[&str] = &[
    "ASSETMINI_DIR",
    "ASSETMINI_VENDOR_DIR",
    "ASSETMINI_SIGNATURE",
    "ASSETMINI_MANAGED_FILES",
    "ASSETMINI_LOG",
];

/// Result of running the AssetMini CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {:?}: {}", line, e))
            })
            .collect()
    }

    /// Events whose `event` field equals `kind`
    pub fn events_of(&self, kind: &str) -> Vec<serde_json::Value> {
        self.json_events()
            .into_iter()
            .filter(|event| event["event"] == kind)
            .collect()
    }
}

/// Isolated project with helpers to lay out a package and run the CLI.
pub struct TestEnv {
    pub project_root: TempDir,
    /// Points the user config lookup at a file that never exists
    user_config: PathBuf,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().expect("Failed to create project dir");
        let user_config = project_root.path().join(".no-user-config/config.toml");
        Self {
            project_root,
            user_config,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_assetmini")),
        }
    }

    /// Project with the default skeleton already vendored
    pub fn with_default_skeleton() -> Self {
        let env = Self::new();
        env.write_skeleton_file("min.php", SKELETON_MIN_PHP);
        env.write_skeleton_file(".htaccess", SKELETON_HTACCESS);
        env.write_skeleton_file("js/app.js", SKELETON_APP_JS);
        env.write_skeleton_file("css/site.css", SKELETON_SITE_CSS);
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to the vendored skeleton
    pub fn skeleton_path(&self, relative: &str) -> PathBuf {
        self.project_path(SKELETON_DIR).join(relative)
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run the CLI from a specific directory with extra env vars
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("ASSETMINI_USER_CONFIG", &self.user_config)
            .env("NO_COLOR", "1");

        for var in CLEARED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute assetmini");
        output_to_result(output)
    }

    /// Write a file into the vendored skeleton
    pub fn write_skeleton_file(&self, relative: &str, content: &str) {
        write_file(&self.skeleton_path(relative), content.as_bytes());
    }

    /// Write a file relative to the project root
    pub fn write_project_file(&self, relative: &str, content: &str) {
        write_file(&self.project_path(relative), content.as_bytes());
    }

    /// Read a file relative to the project root
    pub fn read_project_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
