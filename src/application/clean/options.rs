//! Clean options

/// Options for a cleanup run
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    /// Compute and announce obsolete paths without deleting them
    pub dry_run: bool,
}

impl CleanOptions {
    /// Create new clean options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
