use std::path::PathBuf;

/// Context passed throughout the application containing run-wide settings
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (report resolved paths)
    pub verbose: bool,

    /// Project root: holds package.json, the include set and the output archive
    pub base_dir: PathBuf,
}

impl Context {
    pub fn new(base_dir: PathBuf, verbose: bool) -> Self {
        Self { verbose, base_dir }
    }
}
