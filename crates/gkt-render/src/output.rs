//! # Output
//!
//! Rendered text goes either to a file or to standard output. File writes go
//! through a temporary file in the target's directory that is renamed over
//! the target once fully written, so a downstream build step never observes a
//! truncated or half-written file.
//!
//! Permissions: an existing target keeps its mode; a new file gets `0644`
//! filtered through the process umask, as a plain `File::create` would.

use std::io::Write;
use std::path::Path;

use crate::error::RenderError;

/// Mode requested for newly created output files, before the umask.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Write `content` to `path`, or to stdout when `path` is `None`.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), RenderError> {
    match path {
        Some(path) => write_atomic(path, content),
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(content.as_bytes())
                .and_then(|()| out.flush())
                .map_err(|source| RenderError::Output {
                    path: "<stdout>".to_string(),
                    source,
                })
        }
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<(), RenderError> {
    let fail = |source| RenderError::Output {
        path: path.display().to_string(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let existing = std::fs::metadata(path).ok().map(|m| m.permissions());

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(NEW_FILE_MODE));
    }

    let mut tmp = builder.tempfile_in(dir).map_err(fail)?;
    tmp.write_all(content.as_bytes()).map_err(fail)?;
    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions).map_err(fail)?;
    }
    tmp.as_file().sync_all().map_err(fail)?;
    tmp.persist(path).map_err(|e| fail(e.error))?;

    tracing::info!(path = %path.display(), bytes = content.len(), "wrote output");
    Ok(())
}
