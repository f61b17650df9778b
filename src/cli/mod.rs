pub mod args;
pub mod runner;

pub use args::{
    get_cli, get_log_level_from_verbose, Cli, Commands, ExportArgs, ValidateArgs,
};
pub use runner::{run, run_export, run_validate};
