//! Installer adapter
//!
//! The surface a host package manager calls into. It resolves the skeleton
//! and target paths from explicit configuration and delegates to the
//! provision and update use cases.

use std::path::{Path, PathBuf};

use crate::config::InstallerConfig;
use crate::domain::entities::ManagedFile;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{OwnershipSignature, PackageType};
use crate::error::AssetMiniResult;

use super::provision::{ProvisionOutcome, ProvisionUseCase};
use super::update::{UpdateOptions, UpdateReport, UpdateUseCase};

/// Validated installer settings
#[derive(Debug, Clone)]
pub struct InstallerSettings {
    pub target_dir: PathBuf,
    pub skeleton_dir: PathBuf,
    pub vendor_dir: PathBuf,
    pub package_name: String,
    pub package_type: PackageType,
    pub signature: OwnershipSignature,
    pub managed_files: Vec<ManagedFile>,
}

impl InstallerSettings {
    pub fn from_config(config: &InstallerConfig) -> AssetMiniResult<Self> {
        let managed_files = config
            .managed_files
            .iter()
            .map(ManagedFile::new)
            .collect::<AssetMiniResult<Vec<_>>>()?;

        Ok(Self {
            target_dir: config.target_dir.clone(),
            skeleton_dir: config.skeleton_dir.clone(),
            vendor_dir: config.vendor_dir.clone(),
            package_name: config.package_name.clone(),
            package_type: config.package_type.clone(),
            signature: OwnershipSignature::new(config.signature.clone())?,
            managed_files,
        })
    }
}

/// Package-type installer for one consuming project
pub struct Installer<FS>
where
    FS: FileSystem + Clone,
{
    fs: FS,
    project_root: PathBuf,
    settings: InstallerSettings,
}

impl<FS> Installer<FS>
where
    FS: FileSystem + Clone,
{
    pub fn new(fs: FS, project_root: impl Into<PathBuf>, settings: InstallerSettings) -> Self {
        Self {
            fs,
            project_root: project_root.into(),
            settings,
        }
    }

    pub fn settings(&self) -> &InstallerSettings {
        &self.settings
    }

    /// Whether packages of `package_type` are handled by this installer
    pub fn supports(&self, package_type: &str) -> bool {
        self.settings.package_type.supports(package_type)
    }

    /// Resolved target directory inside the project
    pub fn target_dir(&self) -> PathBuf {
        self.project_root.join(&self.settings.target_dir)
    }

    /// Where the package lives when the host does not say: `<vendor>/<name>`
    pub fn default_package_root(&self) -> PathBuf {
        self.project_root
            .join(&self.settings.vendor_dir)
            .join(&self.settings.package_name)
    }

    pub fn skeleton_dir(&self, package_root: &Path) -> PathBuf {
        package_root.join(&self.settings.skeleton_dir)
    }

    /// Install hook: provision the target directory from the skeleton
    pub fn install(&self, package_root: &Path) -> AssetMiniResult<ProvisionOutcome> {
        let skeleton = self.skeleton_dir(package_root);
        let target = self.target_dir();
        tracing::debug!(
            skeleton = %skeleton.display(),
            target = %target.display(),
            "running install hook"
        );
        ProvisionUseCase::new(self.fs.clone()).execute(&skeleton, &target)
    }

    /// Update hook: refresh every managed file the installer still owns
    pub fn update(
        &self,
        package_root: &Path,
        options: &UpdateOptions,
    ) -> AssetMiniResult<UpdateReport> {
        let skeleton = self.skeleton_dir(package_root);
        let target = self.target_dir();
        tracing::debug!(
            skeleton = %skeleton.display(),
            target = %target.display(),
            files = self.settings.managed_files.len(),
            "running update hook"
        );
        UpdateUseCase::new(self.fs.clone(), self.settings.signature.clone()).execute(
            &skeleton,
            &target,
            &self.settings.managed_files,
            options,
        )
    }
}
