//! Constants used throughout toolsmith

/// Project definition file names in order of preference
pub const PROJECT_FILENAMES: &[&str] =
    &["toolsmith.json", "toolsmith.yaml", "toolsmith.yml"];

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Names of the exported artifacts
pub mod artifacts {
    pub const SOURCE_FILE: &str = "server.py";
    pub const MANIFEST_FILE: &str = "mcp.json";
    pub const README_FILE: &str = "README.md";
    pub const ARCHIVE_PREFIX: &str = "mcp_project_";
    pub const ARCHIVE_SLUG_FALLBACK: &str = "project";
}

/// Fixed values baked into generated artifacts
pub mod generation {
    pub const DEFAULT_SERVER_NAME: &str = "My MCP Server";
    pub const MANIFEST_VERSION: &str = "1.0.0";
    pub const FALLBACK_DESCRIPTION: &str = "No description";
    pub const ARGS_HEADING: &str = "Args:";
    pub const STATIC_RESULT_PREFIX: &str = "Executed";
    pub const PLACEHOLDER_HELPER: &str = "_fill_placeholders";
    pub const REQUESTS_ALIAS: &str = "_requests";
    pub const SERVER_INSTANCE: &str = "mcp";

    /// Module-level names of the generated source that tools must not shadow
    pub const RESERVED_NAMES: &[&str] = &[SERVER_INSTANCE, REQUESTS_ALIAS, PLACEHOLDER_HELPER];

    pub const README: &str = r#"# Generated MCP Server

## Running the server

1. Install dependencies:
   ```bash
   pip install mcp requests
   ```

2. Run the server:
   ```bash
   python server.py
   ```
"#;
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
