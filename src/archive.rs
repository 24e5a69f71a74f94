use crate::config::Config;
use crate::context::Context;
use crate::error::Error;
use crate::metadata::Metadata;
use crate::result::Result;
use crate::tpl::Tpl;
use crate::utils;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Seek, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Package the project at `ctx.base_dir` into a versioned zip archive
///
/// Reads the version from the metadata document, checks the include set and
/// writes `<product>_v<version>.zip` into the project root. Returns the path
/// of the written archive.
pub fn package(ctx: &Context, config: &Config) -> Result<PathBuf> {
    let metadata = load_metadata(ctx, config)?;

    let archive_path = ctx.base_dir.join(archive_filename(config, &metadata));

    check_include(&ctx.base_dir, &config.include)?;

    if archive_path.exists() {
        cliclack::log::warning(format!(
            "Overwriting existing archive {}",
            archive_path.display()
        ))?;
    }

    let count = create_zip(&ctx.base_dir, &config.include, &archive_path)?;

    if ctx.verbose {
        cliclack::log::info(format!("{} files archived", count))?;
    }

    Ok(archive_path)
}

/// Load the metadata document behind a spinner
pub fn load_metadata(ctx: &Context, config: &Config) -> Result<Metadata> {
    let metadata_path = ctx.base_dir.join(&config.metadata_file);

    let spinner = cliclack::spinner();
    spinner.start("Loading metadata...");

    match Metadata::load(&metadata_path) {
        Ok(metadata) => {
            spinner.stop(format!("Loaded version {}", metadata.version));
            if ctx.verbose {
                cliclack::log::info(format!("Metadata: {}", metadata_path.display()))?;
            }
            Ok(metadata)
        }
        Err(e) => {
            spinner.error("Failed to load metadata");
            Err(e)
        }
    }
}

/// Archive file name for the given metadata
pub fn archive_filename(config: &Config, metadata: &Metadata) -> String {
    let mut tpl = Tpl::new();
    tpl.register("PRODUCT", &config.product);
    tpl.register("VERSION", &metadata.version);
    tpl.parse(&config.filename)
}

/// Fail with `MissingInclude` for the first entry that is neither a file nor a directory
pub fn check_include(root: &Path, include: &[String]) -> Result<()> {
    for name in include {
        let path = root.join(name);
        if !path.is_file() && !path.is_dir() {
            return Err(Error::MissingInclude(name.clone()));
        }
    }
    Ok(())
}

/// Write every file reachable from `include` into a new zip at `output_path`
///
/// Entries are named relative to `root`. Directories are walked in file name
/// order. Returns the number of stored files.
pub fn create_zip(root: &Path, include: &[String], output_path: &Path) -> Result<usize> {
    let file = File::create(output_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut written = HashSet::new();

    for name in include {
        let path = root.join(name);

        if path.is_file() {
            add_file(&mut zip, &mut written, root, &path, options)?;
        } else if path.is_dir() {
            for entry in WalkDir::new(&path).sort_by_file_name() {
                let entry = entry?;
                let entry_path = entry.path();

                // symlinked directories are listed but not descended into
                if entry_path == output_path || entry_path.is_dir() {
                    continue;
                }

                if !entry_path.is_file() {
                    return Err(Error::Io(io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("{} is not a readable file", entry_path.display()),
                    )));
                }

                add_file(&mut zip, &mut written, root, entry_path, options)?;
            }
        } else {
            return Err(Error::MissingInclude(name.clone()));
        }
    }

    zip.finish()?;
    Ok(written.len())
}

fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    written: &mut HashSet<String>,
    root: &Path,
    path: &Path,
    options: SimpleFileOptions,
) -> Result<()> {
    let name = utils::entry_name(root, path)?;

    // overlapping include entries
    if !written.insert(name.clone()) {
        return Ok(());
    }

    cliclack::log::remark(format!("> {}", name))?;

    zip.start_file(name.as_str(), options)?;
    let mut f = File::open(path)?;
    io::copy(&mut f, zip)?;

    Ok(())
}
