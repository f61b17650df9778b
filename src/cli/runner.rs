use crate::{
    cli::{Commands, ExportArgs, ValidateArgs},
    error::Result,
    export::{export_to_dir, export_to_zip, ExportOptions},
    generator::Generator,
    model::{ProjectRecord, ProjectSpec},
    validation::{validate_project, ValidationReport},
};
use std::path::{Path, PathBuf};

/// Loads a project and converts it into the typed model.
fn load_project(source: &str) -> Result<ProjectSpec> {
    ProjectRecord::load(source)?.into_spec()
}

fn log_warnings(report: &ValidationReport) {
    for warning in &report.warnings {
        log::warn!("{warning}");
    }
}

/// Runs `export`: load, validate, generate, write. Returns the written paths.
pub fn run_export(args: ExportArgs) -> Result<Vec<PathBuf>> {
    let project = load_project(&args.project)?;

    let report = validate_project(&project);
    log_warnings(&report);
    if args.skip_validation {
        for error in &report.errors {
            log::warn!("Ignoring validation error: {error}");
        }
    } else {
        report.into_result()?;
    }

    let generated = Generator::new()?.generate(&project)?;
    let options = ExportOptions { force: args.force, dry_run: args.dry_run };

    let written = if args.zip {
        vec![export_to_zip(&generated, &project.name, &args.output_dir, options)?]
    } else {
        export_to_dir(&generated, &args.output_dir, options)?
    };

    println!("{}", export_summary(&project, &args.output_dir, args.dry_run));
    Ok(written)
}

fn export_summary(project: &ProjectSpec, output_dir: &Path, dry_run: bool) -> String {
    let prefix = if dry_run { "[DRY RUN] " } else { "" };
    format!(
        "{prefix}Generated {} tool(s) for '{}' in {}.",
        project.tools.len(),
        project.name,
        output_dir.display()
    )
}

/// Runs `validate`: prints warnings and fails with the error list when there are errors.
pub fn run_validate(args: ValidateArgs) -> Result<ValidationReport> {
    let project = load_project(&args.project)?;
    let report = validate_project(&project);

    for line in validate_summary(&project, &report) {
        println!("{line}");
    }
    report.into_result()
}

/// Lines printed by `validate`. Errors are left to the error handler.
fn validate_summary(project: &ProjectSpec, report: &ValidationReport) -> Vec<String> {
    let mut lines: Vec<String> =
        report.warnings.iter().map(|warning| format!("warning: {warning}")).collect();
    if report.is_valid() {
        lines.push(format!(
            "Project '{}' is valid ({} tool(s)).",
            project.name,
            project.tools.len()
        ));
    }
    lines
}

/// Main entry point for CLI execution
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Export(args) => run_export(args).map(|_| ()),
        Commands::Validate(args) => run_validate(args).map(|_| ()),
    }
}
