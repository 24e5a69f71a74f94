/// Product identifier used in the archive file name
pub const PRODUCT: &str = "ukg-schedule-sync";

/// Metadata document supplying the version
pub const METADATA_FILE: &str = "package.json";

/// Top-level files and directories bundled into the archive, in order
pub const INCLUDE: &[&str] = &["manifest.json", "assets", "dist"];

/// Archive file name template
pub const FILENAME: &str = "$PRODUCT_v$VERSION.zip";

/// Packaging configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub product: String,
    pub metadata_file: String,
    pub include: Vec<String>,
    pub filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            product: PRODUCT.to_string(),
            metadata_file: METADATA_FILE.to_string(),
            include: INCLUDE.iter().map(|s| s.to_string()).collect(),
            filename: FILENAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_include_order() {
        let config = Config::default();
        assert_eq!(config.include, vec!["manifest.json", "assets", "dist"]);
        assert_eq!(config.metadata_file, "package.json");
    }
}
