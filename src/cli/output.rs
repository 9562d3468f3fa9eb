use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Write fully rendered output to stdout or to a file.
///
/// Files are written through a temporary file in the destination directory and
/// renamed into place, so the destination either holds the complete output or
/// is left untouched.
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_terminated(&mut handle, content).context("Failed to write to stdout")?;
            handle.flush().context("Failed to flush stdout")?;
        }
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let mut tmp = NamedTempFile::new_in(dir)
                .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
            write_terminated(&mut tmp, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tmp.persist(path)
                .with_context(|| format!("Failed to move output into {}", path.display()))?;
            info!("Wrote {} ({} bytes)", path.display(), content.len());
        }
    }
    Ok(())
}

fn write_terminated<W: Write>(writer: &mut W, content: &str) -> std::io::Result<()> {
    writer.write_all(content.as_bytes())?;
    if !content.is_empty() && !content.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    Ok(())
}
