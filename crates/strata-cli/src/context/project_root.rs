use std::path::{Path, PathBuf};

use anyhow::Context;

/// Walk upwards from `start` until a `.strata` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(".strata").is_dir() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// `--project` if given, else the nearest ancestor holding `.strata`, else
/// the current directory.
pub fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);
        if explicit.file_name().is_some_and(|name| name == ".strata") {
            return explicit
                .parent()
                .map(Path::to_path_buf)
                .context("invalid --project path: '.strata' directory has no parent");
        }
        if explicit.is_dir() {
            return Ok(explicit);
        }
        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    Ok(find_project_root(&start).unwrap_or(start))
}
