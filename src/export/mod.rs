//! Writing generated projects to disk
//!
//! An export either lays the artifacts out in a directory or bundles them into
//! a single zip archive. Both paths first plan [`ExportOperation`]s, then apply
//! them unless running dry.

pub mod operation;

use crate::{
    constants::artifacts::{
        ARCHIVE_PREFIX, ARCHIVE_SLUG_FALLBACK, MANIFEST_FILE, README_FILE, SOURCE_FILE,
    },
    error::Result,
    generator::GeneratedProject,
    ioutils::{get_output_path, write_file, write_zip},
    model::derive_identifier,
};
pub use operation::ExportOperation;
use std::path::{Path, PathBuf};

/// Options shared by both export targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Overwrite an existing output directory or archive.
    pub force: bool,
    /// Log what would be written without touching the filesystem.
    pub dry_run: bool,
}

/// Artifact file names paired with their content, in archive order.
pub fn artifact_entries(generated: &GeneratedProject) -> Vec<(String, String)> {
    vec![
        (SOURCE_FILE.to_string(), generated.source.clone()),
        (MANIFEST_FILE.to_string(), generated.manifest.clone()),
        (README_FILE.to_string(), generated.readme.clone()),
    ]
}

/// File name of the archive for a project, e.g. `mcp_project_weather.zip`.
pub fn archive_name(project_name: &str) -> String {
    let slug: String = derive_identifier(project_name.trim())
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    let slug = if slug.is_empty() { ARCHIVE_SLUG_FALLBACK.to_string() } else { slug };
    format!("{ARCHIVE_PREFIX}{slug}.zip")
}

/// Writes the artifacts into `output_dir`, returning the written paths.
pub fn export_to_dir(
    generated: &GeneratedProject,
    output_dir: &Path,
    options: ExportOptions,
) -> Result<Vec<PathBuf>> {
    let output_root = get_output_path(output_dir, options.force)?;

    let operations: Vec<ExportOperation> = artifact_entries(generated)
        .into_iter()
        .map(|(name, content)| {
            let target = output_root.join(name);
            let target_exists = target.exists();
            ExportOperation::Write { target, content, target_exists }
        })
        .collect();

    operations.iter().map(|op| apply(op, options.dry_run)).collect()
}

/// Bundles the artifacts into an archive inside `output_dir`.
pub fn export_to_zip(
    generated: &GeneratedProject,
    project_name: &str,
    output_dir: &Path,
    options: ExportOptions,
) -> Result<PathBuf> {
    let target = get_output_path(output_dir.join(archive_name(project_name)), options.force)?;
    let target_exists = target.exists();
    let operation = ExportOperation::Archive {
        target,
        entries: artifact_entries(generated),
        target_exists,
    };
    apply(&operation, options.dry_run)
}

fn apply(operation: &ExportOperation, dry_run: bool) -> Result<PathBuf> {
    log::debug!("Handling export operation: {operation:?}");
    if !dry_run {
        match operation {
            ExportOperation::Write { target, content, .. } => write_file(content, target)?,
            ExportOperation::Archive { target, entries, .. } => write_zip(entries, target)?,
        }
    }
    log::info!("{}", operation.get_message(dry_run));
    Ok(operation.target().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn generated() -> GeneratedProject {
        GeneratedProject {
            source: "print('hi')\n".into(),
            manifest: "{}".into(),
            readme: "# readme\n".into(),
        }
    }

    #[test]
    fn archive_name_uses_project_slug() {
        assert_eq!(archive_name("Weather Tools"), "mcp_project_weather_tools.zip");
        assert_eq!(archive_name("  "), "mcp_project_project.zip");
        assert_eq!(archive_name("../etc"), "mcp_project____etc.zip");
    }

    #[test]
    fn writes_artifacts_into_new_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("server");
        let written = export_to_dir(&generated(), &out, ExportOptions::default()).unwrap();
        assert_eq!(
            written,
            vec![out.join("server.py"), out.join("mcp.json"), out.join("README.md")]
        );
        assert_eq!(std::fs::read_to_string(out.join("server.py")).unwrap(), "print('hi')\n");
    }

    #[test]
    fn existing_directory_needs_force() {
        let tmp = tempfile::tempdir().unwrap();
        let err = export_to_dir(&generated(), tmp.path(), ExportOptions::default()).unwrap_err();
        assert!(matches!(err, Error::OutputExistsError { .. }));

        let options = ExportOptions { force: true, dry_run: false };
        export_to_dir(&generated(), tmp.path(), options).unwrap();
        assert!(tmp.path().join("mcp.json").exists());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("server");
        let options = ExportOptions { force: false, dry_run: true };
        export_to_dir(&generated(), &out, options).unwrap();
        export_to_zip(&generated(), "demo", &out, options).unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn zip_export_refuses_existing_archive() {
        let tmp = tempfile::tempdir().unwrap();
        let first = export_to_zip(&generated(), "demo", tmp.path(), ExportOptions::default())
            .unwrap();
        assert_eq!(first, tmp.path().join("mcp_project_demo.zip"));
        let err = export_to_zip(&generated(), "demo", tmp.path(), ExportOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::OutputExistsError { .. }));
    }
}
