mod archive;
mod args;
mod config;
mod context;
mod error;
mod metadata;
mod result;
mod tpl;
mod utils;

use args::Args;
use config::Config;
use context::Context;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args { verbose, path } = Args::parse();

    let config = Config::default();

    // Find package.json
    let base_dir = utils::find_project_root(path.as_deref(), &config.metadata_file)?;

    let ctx = Context::new(base_dir, verbose);

    cliclack::intro(config.product.as_str())?;

    let archive_path = match archive::package(&ctx, &config) {
        Ok(path) => path,
        Err(e) => {
            cliclack::outro_cancel("Packaging failed")?;
            return Err(e);
        }
    };

    let archive_name = archive_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| archive_path.display().to_string());

    cliclack::outro(archive_name)?;
    Ok(())
}
