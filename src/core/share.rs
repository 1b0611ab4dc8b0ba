//! Hand the raw log file to another destination, verbatim.
//!
//! CLI analog of the tablet's "share" action: the receiving side gets
//! the CSV exactly as written, optionally zipped.

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::store::ResponseLog;
use crate::ui::messages::{success, warning};
use std::fs;
use std::io;
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct ShareLogic;

impl ShareLogic {
    pub fn share(store: &ResponseLog, dest_file: &str, compress: bool, force: bool) -> AppResult<()> {
        // No file yet is the normal empty state, not an error.
        if !store.exists() {
            warning("No responses recorded yet, nothing to share.");
            return Ok(());
        }

        let dest = Path::new(dest_file);

        // A compressed share always lands at <dest>.zip, so the writer
        // target is fixed before anything touches the filesystem.
        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if target.as_path() == store.path() {
            return Err(io::Error::other(format!(
                "Destination equals the log file itself: {}",
                target.display()
            ))
            .into());
        }

        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(&target, force)?;

        if compress {
            // Zip straight from the source; no intermediate copy.
            compress_into(store.path(), &target)?;
        } else {
            fs::copy(store.path(), &target)?;
            success(format!("Log copied to: {}", target.display()));
        }

        Ok(())
    }
}

/// Write a .zip holding the log verbatim as its single entry.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(src)?;
    let name = src
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "survey_log.csv".to_string());
    zip.start_file(name, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    success(format!("Compressed: {}", zip_path.display()));

    Ok(())
}
