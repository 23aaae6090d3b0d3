//! Solver binary descriptor and verification.

use std::path::{Path, PathBuf};

use crate::error::{Result, RouteError};

/// Descriptor for the external VROOM solver executable.
///
/// The path is resolved once from configuration; [`Self::verify`] re-checks
/// existence and execute permission, so a binary removed or replaced
/// underneath a running service is noticed on the next request.
#[derive(Debug, Clone)]
pub struct VroomBinary {
    path: PathBuf,
}

impl VroomBinary {
    /// Create a descriptor for the binary at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Full path to the executable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name component, used for the relative `./<name>` invocation.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Directory containing the binary; the child process runs with this as
    /// its working directory.
    pub fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Check that the binary exists and is executable by the current process.
    pub fn verify(&self) -> Result<()> {
        let metadata = match std::fs::metadata(&self.path) {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => {
                return Err(RouteError::BinaryMissing {
                    path: self.path.clone(),
                })
            }
        };

        if !is_executable(&metadata) {
            return Err(RouteError::BinaryNotExecutable {
                path: self.path.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(unix)]
fn is_executable(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &std::fs::Metadata) -> bool {
    // No execute bit to inspect; existence is the best available check.
    true
}
