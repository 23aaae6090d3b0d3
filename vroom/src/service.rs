//! High-level route service: validation, solver invocation, JSON capture.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

use crate::binary::VroomBinary;
use crate::error::Result;
use crate::exec::Invocation;
use crate::request::RouteRequest;

/// High-level interface for running routing computations through the
/// external VROOM solver.
///
/// The service holds the binary descriptor resolved at startup; each call to
/// [`Self::compute`] verifies the binary, validates the request, runs one
/// child process to completion, and parses its merged output as JSON.
///
/// # Example
///
/// ```ignore
/// use vroom::{RouteRequest, RouteService};
///
/// let service = RouteService::new("/opt/vroom/vroom");
///
/// let request = RouteRequest::new(vec!["1.1,2.2".into(), "3.3,4.4".into()]);
/// let solution = service.compute(&request).await?;
/// println!("{}", solution);
/// ```
pub struct RouteService {
    /// Descriptor for the solver executable.
    binary: VroomBinary,
}

impl RouteService {
    /// Create a service around the solver binary at `binary_path`.
    pub fn new<P: AsRef<Path>>(binary_path: P) -> Self {
        Self {
            binary: VroomBinary::new(binary_path),
        }
    }

    /// The descriptor for the configured solver binary.
    pub fn binary(&self) -> &VroomBinary {
        &self.binary
    }

    /// Run one routing computation.
    ///
    /// Preconditions are checked in order: the binary must exist, it must be
    /// executable, and at least two locations must be supplied. The solver
    /// runs with its own directory as working directory; the call waits for
    /// it to exit and returns its output parsed as a JSON document. The
    /// exit code is not inspected.
    ///
    /// Each failure maps to a distinct [`crate::RouteError`] variant; nothing
    /// is retried.
    pub async fn compute(&self, request: &RouteRequest) -> Result<Value> {
        self.binary.verify()?;
        request.validate()?;

        // Relative program name; the child's working directory is the
        // binary's own directory.
        let invocation = Invocation::new(
            format!("./{}", self.binary.file_name()),
            request.solver_args(),
            self.binary.dir(),
        );

        let run = run_token();
        tracing::info!(run = run, command = %invocation.command_line(), "Running solver");

        let raw = invocation.run_merged().await?;
        // Concatenate captured lines without separators.
        let output: String = raw.lines().collect();

        tracing::info!(run = run, output = %output, "Solver output");

        Ok(serde_json::from_str(&output)?)
    }
}

/// Millisecond-timestamp correlation token tying a request's log lines
/// together.
fn run_token() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
