use std::path::PathBuf;

/// A filesystem action performed while exporting a generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOperation {
    /// Write a single artifact.
    Write { target: PathBuf, content: String, target_exists: bool },
    /// Bundle artifacts into a zip archive.
    Archive { target: PathBuf, entries: Vec<(String, String)>, target_exists: bool },
}

impl ExportOperation {
    pub fn target(&self) -> &PathBuf {
        match self {
            ExportOperation::Write { target, .. } | ExportOperation::Archive { target, .. } => {
                target
            }
        }
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            ExportOperation::Write { target, target_exists, .. } => {
                if *target_exists {
                    format!(
                        "{prefix}Writing to '{}' (overwriting existing file)",
                        target.display()
                    )
                } else {
                    format!("{prefix}Writing to '{}'", target.display())
                }
            }
            ExportOperation::Archive { target, entries, target_exists } => {
                let names: Vec<_> = entries.iter().map(|(name, _)| name.as_str()).collect();
                let overwrite = if *target_exists { " (overwriting existing file)" } else { "" };
                format!(
                    "{prefix}Archiving {} into '{}'{overwrite}",
                    names.join(", "),
                    target.display()
                )
            }
        }
    }
}
