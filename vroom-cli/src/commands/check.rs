use anyhow::{bail, Result};
use std::path::PathBuf;
use vroom::VroomBinary;

pub fn run(binary: Option<PathBuf>) -> Result<()> {
    let path = super::resolve_binary(binary)?;
    let binary = VroomBinary::new(&path);

    if let Err(e) = binary.verify() {
        bail!("{}: {}", path.display(), e);
    }

    let metadata = std::fs::metadata(binary.path())?;

    println!("Binary: {}", binary.file_name());
    println!("Directory: {}", binary.dir().display());
    println!("Size: {}", format_size(metadata.len()));
    println!("OK");

    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
