//! Update options

/// Options for the update use case
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Evaluate every managed file but write nothing
    pub dry_run: bool,
    /// Hold the exclusive target lock for the whole update
    pub lock: bool,
}

impl UpdateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set locking
    pub fn with_lock(mut self, lock: bool) -> Self {
        self.lock = lock;
        self
    }
}
