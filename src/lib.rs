/// Handles argument parsing and command dispatch.
pub mod cli;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Writes generated projects to directories or zip archives.
pub mod export;

/// Turns project definitions into server source, manifest and readme.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Reads project definitions from files, directories or stdin.
pub mod loader;

/// Typed tool and project definitions.
pub mod model;

/// Template rendering for generated sources.
pub mod renderer;

/// Upstream checks the generator relies on.
pub mod validation;

pub use generator::{generate, GeneratedProject, Generator};
pub use model::{HandlerType, InputSchema, ProjectSpec, Property, SchemaType, ToolSpec};
