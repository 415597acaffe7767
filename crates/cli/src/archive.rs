//! ZIP packaging for downloaded font bundles.

use std::{fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use fontpack_core::AssetBundle;
use zip::{ZipWriter, write::SimpleFileOptions};

/// Writes every bundle entry to a fresh ZIP at `path`, each one under
/// `dir_name/` so the archive unpacks into a single directory.
pub fn write_zip(path: &Path, dir_name: &str, bundle: &AssetBundle) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for (filename, contents) in bundle {
        zip.start_file(format!("{dir_name}/{filename}"), options)
            .with_context(|| format!("Failed to add {filename} to archive"))?;
        zip.write_all(contents)?;
    }

    zip.finish()?;
    Ok(())
}
