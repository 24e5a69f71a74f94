use crate::error::Error;
use crate::result::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Fields read from the project's package.json
#[derive(Debug, Deserialize)]
struct PackageJson {
    version: Option<serde_json::Value>,
}

/// Parsed project metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub version: String,
}

impl Metadata {
    /// Load the metadata document and extract its `version` string
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Metadata(format!("unable to read {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
            .map_err(|e| Error::Metadata(format!("{}: {}", path.display(), e)))
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        let package: PackageJson = serde_json::from_str(content)
            .map_err(|e| format!("invalid JSON: {}", e))?;

        let version = match package.version {
            Some(serde_json::Value::String(version)) => version,
            Some(other) => return Err(format!("`version` must be a string, found {}", other)),
            None => return Err("missing `version` field".to_string()),
        };

        if version.trim().is_empty() {
            return Err("`version` is empty".to_string());
        }

        if version.contains(['/', '\\']) {
            return Err(format!("`version` contains a path separator: {}", version));
        }

        Ok(Metadata { version })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_version_ignoring_other_fields() {
        let metadata = Metadata::parse(r#"{"name": "ukg", "version": "1.2.3", "private": true}"#)
            .unwrap();
        assert_eq!(metadata.version, "1.2.3");
    }

    #[test]
    fn test_missing_version() {
        let err = Metadata::parse(r#"{"name": "ukg"}"#).unwrap_err();
        assert!(err.contains("missing `version`"));
    }

    #[test]
    fn test_non_string_version() {
        let err = Metadata::parse(r#"{"version": 3}"#).unwrap_err();
        assert!(err.contains("must be a string"));
    }

    #[test]
    fn test_empty_version() {
        assert!(Metadata::parse(r#"{"version": "  "}"#).is_err());
    }

    #[test]
    fn test_version_with_separator() {
        assert!(Metadata::parse(r#"{"version": "1.0/../x"}"#).is_err());
    }

    #[test]
    fn test_invalid_json() {
        let err = Metadata::parse("{ version: 1.2.3").unwrap_err();
        assert!(err.starts_with("invalid JSON"));
    }

    #[test]
    fn test_missing_file_is_metadata_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Metadata::load(&dir.path().join("package.json")).unwrap_err();
        assert!(matches!(err, Error::Metadata(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"version": "0.9.0"}"#).unwrap();

        assert_eq!(Metadata::load(&path).unwrap().version, "0.9.0");
    }
}
