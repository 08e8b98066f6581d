use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::SiteError;

pub const INDEX_FILE: &str = "index.html";
pub const STYLESHEET_FILE: &str = "style.css";

const STYLESHEET: &str = include_str!("../static/style.css");

pub fn ensure_output_dir(dir: &Path) -> Result<(), SiteError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(SiteError::NotADirectory(dir.to_path_buf()))
    }
}

/// Write the rendered page and its stylesheet into `dir`.
///
/// Returns the path of the written `index.html`.
pub fn write_site(dir: &Path, html: &str) -> Result<PathBuf, SiteError> {
    ensure_output_dir(dir)?;

    let index = dir.join(INDEX_FILE);
    fs::write(&index, html).map_err(|source| SiteError::Io {
        operation: "Failed to write",
        path: index.clone(),
        source,
    })?;
    info!("Wrote {}", index.display());

    write_stylesheet(dir)?;
    Ok(index)
}

fn write_stylesheet(dir: &Path) -> Result<(), SiteError> {
    let path = dir.join(STYLESHEET_FILE);

    if fs::read_to_string(&path).is_ok_and(|existing| existing == STYLESHEET) {
        debug!("Stylesheet already up to date at {}", path.display());
        return Ok(());
    }

    fs::write(&path, STYLESHEET).map_err(|source| SiteError::Io {
        operation: "Failed to write",
        path,
        source,
    })
}
