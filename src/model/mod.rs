//! Typed project and tool definitions
//!
//! This module contains the data model components:
//! - `schema`: flat JSON-schema fragments and the parameter type mapping
//! - `tool`: tool and project definitions consumed by the generator
//! - `url_template`: placeholder-bearing URLs of API tools
//! - `record`: loosely-typed persisted records and their conversion

pub mod record;
pub mod schema;
pub mod tool;
pub mod url_template;

pub use record::{ProjectRecord, ToolRecord};
pub use schema::{InputSchema, ParamType, Property, SchemaType};
pub use tool::{derive_identifier, HandlerType, ProjectSpec, ToolSpec};
pub use url_template::UrlTemplate;
