//! External command invocation with merged output capture.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;

/// A fully-built external command: program, arguments, and the working
/// directory it runs in.
///
/// Keeping the invocation as a plain value separates command construction,
/// which is deterministic and unit-testable, from the side effect of
/// actually running it.
#[derive(Debug, Clone)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    dir: PathBuf,
}

impl Invocation {
    /// Create an invocation of `program` with `args`, run from `dir`.
    pub fn new<P: AsRef<Path>>(program: String, args: Vec<String>, dir: P) -> Self {
        Self {
            program,
            args,
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The program being invoked.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The argument vector, in execution order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The working directory the child runs in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The command line as it will be executed, for logging.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Run the command to completion and capture its output, stderr appended
    /// after stdout.
    ///
    /// The child is reaped before this returns; its exit status is not
    /// inspected, since callers only care about the captured text.
    pub async fn run_merged(&self) -> std::io::Result<String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.dir)
            .stdin(Stdio::null())
            .output()
            .await?;

        let mut merged = String::from_utf8_lossy(&output.stdout).into_owned();
        merged.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(merged)
    }
}
