use anyhow::{Context, Result};
use std::path::PathBuf;

pub mod check;
pub mod route;

/// Resolve the solver binary path from the CLI argument or `VROOM_BINARY`.
pub(crate) fn resolve_binary(binary: Option<PathBuf>) -> Result<PathBuf> {
    match binary {
        Some(path) => Ok(path),
        None => std::env::var("VROOM_BINARY").map(PathBuf::from).context(
            "VROOM_BINARY environment variable not set. Use --binary or set VROOM_BINARY",
        ),
    }
}
