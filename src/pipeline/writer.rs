use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{GenerateError, Result};

/// Index-aligned file bodies and target paths: `bodies[i]` is written to `targets[i]`.
#[derive(Debug, Clone)]
pub struct WriteBatch {
    bodies: Vec<String>,
    targets: Vec<PathBuf>,
}

impl WriteBatch {
    /// Fails with `SizeMismatch` unless both sequences have the same length.
    pub fn new(bodies: Vec<String>, targets: Vec<PathBuf>) -> Result<Self> {
        if bodies.len() != targets.len() {
            return Err(GenerateError::SizeMismatch {
                bodies: bodies.len(),
                targets: targets.len(),
            });
        }
        Ok(Self { bodies, targets })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PathBuf)> {
        self.bodies.iter().zip(self.targets.iter())
    }
}

/// Splits a body into written records on `\n`. A body without `\n` is one record;
/// trailing empty records are dropped. `\r` stays inside its record.
pub fn split_records(body: &str) -> Vec<&str> {
    if !body.contains('\n') {
        return vec![body];
    }
    let mut records: Vec<&str> = body.split('\n').collect();
    while records.last().is_some_and(|r| r.is_empty()) {
        records.pop();
    }
    records
}

/// Performs the filesystem writes for a `WriteBatch`.
#[derive(Debug, Clone)]
pub struct WriteReconciler {
    line_separator: String,
}

impl WriteReconciler {
    pub fn new(line_separator: impl Into<String>) -> Self {
        Self {
            line_separator: line_separator.into(),
        }
    }

    /// Validates alignment before touching the filesystem, then writes every pair.
    pub fn reconcile(&self, bodies: Vec<String>, targets: Vec<PathBuf>) -> Result<()> {
        let batch = WriteBatch::new(bodies, targets)?;
        self.write_batch(&batch)
    }

    /// Writes pairs in order. The first failure aborts the rest; earlier files stay on disk.
    pub fn write_batch(&self, batch: &WriteBatch) -> Result<()> {
        info!("Writing {} test files", batch.len());
        // Bounded by the shared length that WriteBatch::new validated, nothing else.
        for (body, target) in batch.iter() {
            self.write_one(body, target)?;
        }
        Ok(())
    }

    fn write_one(&self, body: &str, target: &Path) -> Result<()> {
        match fs::remove_file(target) {
            Ok(()) => debug!("Removed existing {}", target.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(GenerateError::io(target, e)),
        }

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| GenerateError::io(parent, e))?;
        }

        let mut file = File::create_new(target).map_err(|e| GenerateError::io(target, e))?;
        for record in split_records(body) {
            file.write_all(record.as_bytes())
                .and_then(|_| file.write_all(self.line_separator.as_bytes()))
                .map_err(|e| GenerateError::io(target, e))?;
        }
        file.flush().map_err(|e| GenerateError::io(target, e))?;

        info!("Wrote {}", target.display());
        Ok(())
    }
}

impl Default for WriteReconciler {
    fn default() -> Self {
        Self::new("\n")
    }
}
