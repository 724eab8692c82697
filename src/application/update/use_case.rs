//! Update Use Case
//!
//! Signature-gated refresh of managed files.

use std::path::Path;

use crate::domain::entities::ManagedFile;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::OwnershipSignature;
use crate::error::{AssetMiniError, AssetMiniResult};
use crate::infrastructure::TargetLock;

use super::options::UpdateOptions;
use super::result::{ContentChange, EntryStatus, UpdateEntry, UpdateOutcome, UpdateReport};

/// Evaluation of a single destination before anything is written
enum Decision {
    Skip(UpdateOutcome),
    Replace(ContentChange),
}

/// Update use case - refreshes installer-owned files from the skeleton
pub struct UpdateUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
    signature: OwnershipSignature,
}

impl<FS> UpdateUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS, signature: OwnershipSignature) -> Self {
        Self { fs, signature }
    }

    pub fn signature(&self) -> &OwnershipSignature {
        &self.signature
    }

    /// Refresh one destination from `skeleton_file`.
    ///
    /// The destination is only replaced when it exists and contains the
    /// ownership signature. Replacement is atomic.
    pub fn update_file(
        &self,
        skeleton_file: &Path,
        destination: &Path,
    ) -> AssetMiniResult<UpdateOutcome> {
        self.apply(skeleton_file, destination, false)
            .map(|(outcome, _)| outcome)
    }

    /// Process every managed file independently.
    ///
    /// Per-file failures are recorded in the report; only a lock failure
    /// aborts the whole run. A missing target is never locked, so no lock
    /// file or parent directory is created for it.
    pub fn execute(
        &self,
        skeleton: &Path,
        target: &Path,
        files: &[ManagedFile],
        options: &UpdateOptions,
    ) -> AssetMiniResult<UpdateReport> {
        let _lock = if options.lock && !options.dry_run && self.fs.exists(target) {
            Some(TargetLock::acquire(target)?)
        } else {
            None
        };

        let mut report = UpdateReport::new(target.to_path_buf(), options.dry_run);
        for file in files {
            let skeleton_file = file.skeleton_path(skeleton);
            let destination = file.destination_path(target);

            let entry = match self.apply(&skeleton_file, &destination, options.dry_run) {
                Ok((outcome, change)) => {
                    match outcome {
                        UpdateOutcome::Updated if options.dry_run => tracing::info!(
                            file = %destination.display(),
                            "would update managed file"
                        ),
                        UpdateOutcome::Updated => tracing::info!(
                            file = %destination.display(),
                            "updated managed file"
                        ),
                        UpdateOutcome::SkippedNotPresent => tracing::info!(
                            file = %destination.display(),
                            "managed file not present, skipping"
                        ),
                        UpdateOutcome::SkippedNotOwned => tracing::info!(
                            file = %destination.display(),
                            "managed file lacks ownership signature, leaving untouched"
                        ),
                    }
                    UpdateEntry {
                        file: file.clone(),
                        destination,
                        status: EntryStatus::Done(outcome),
                        change,
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        file = %destination.display(),
                        error = %err,
                        "failed to update managed file"
                    );
                    UpdateEntry {
                        file: file.clone(),
                        destination,
                        status: EntryStatus::Failed {
                            message: err.to_string(),
                        },
                        change: None,
                    }
                }
            };
            report.push(entry);
        }

        Ok(report)
    }

    fn apply(
        &self,
        skeleton_file: &Path,
        destination: &Path,
        dry_run: bool,
    ) -> AssetMiniResult<(UpdateOutcome, Option<ContentChange>)> {
        match self.decide(skeleton_file, destination)? {
            Decision::Skip(outcome) => Ok((outcome, None)),
            Decision::Replace(change) => {
                if !dry_run {
                    self.fs
                        .write_atomic(destination, &change.after)
                        .map_err(|source| AssetMiniError::Update {
                            path: destination.to_path_buf(),
                            source,
                        })?;
                }
                Ok((UpdateOutcome::Updated, Some(change)))
            }
        }
    }

    fn decide(&self, skeleton_file: &Path, destination: &Path) -> AssetMiniResult<Decision> {
        if !self.fs.exists(destination) {
            return Ok(Decision::Skip(UpdateOutcome::SkippedNotPresent));
        }

        let before = self
            .fs
            .read(destination)
            .map_err(|source| AssetMiniError::Update {
                path: destination.to_path_buf(),
                source,
            })?;
        if !self.signature.is_found_in(&before) {
            return Ok(Decision::Skip(UpdateOutcome::SkippedNotOwned));
        }

        let after = self
            .fs
            .read(skeleton_file)
            .map_err(|source| AssetMiniError::Update {
                path: skeleton_file.to_path_buf(),
                source,
            })?;

        Ok(Decision::Replace(ContentChange { before, after }))
    }
}

/// Shorthand for a single signature-gated refresh
pub fn update_managed_file<FS>(
    fs: FS,
    skeleton_file: &Path,
    destination: &Path,
    signature: &OwnershipSignature,
) -> AssetMiniResult<UpdateOutcome>
where
    FS: FileSystem,
{
    UpdateUseCase::new(fs, signature.clone()).update_file(skeleton_file, destination)
}
