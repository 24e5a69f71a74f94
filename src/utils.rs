use crate::error::Error;
use crate::result::Result;
use std::path::{Component, Path, PathBuf};

/// Find the project root in the current directory or specified path
///
/// `path` may point at the metadata document itself or at the directory
/// containing it.
pub fn find_project_root(path: Option<&Path>, metadata_file: &str) -> Result<PathBuf> {
    let base_path = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let root = if base_path.is_file() && base_path.file_name().is_some_and(|n| n == metadata_file) {
        base_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    } else {
        base_path
    };

    let metadata_path = root.join(metadata_file);
    if !metadata_path.is_file() {
        return Err(Error::Metadata(format!(
            "{} not found",
            metadata_path.display()
        )));
    }

    Ok(root)
}

/// Archive entry name for `path`, relative to `root`, using `/` separators
pub fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        Error::custom(format!(
            "{} is outside of {}",
            path.display(),
            root.display()
        ))
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| {
                    Error::custom(format!("Non UTF-8 path: {}", path.display()))
                })?;
                parts.push(part);
            }
            Component::CurDir => {}
            _ => {
                return Err(Error::custom(format!(
                    "Unsupported path component in {}",
                    relative.display()
                )));
            }
        }
    }

    if parts.is_empty() {
        return Err(Error::custom(format!("Empty entry name for {}", path.display())));
    }

    Ok(parts.join("/"))
}
