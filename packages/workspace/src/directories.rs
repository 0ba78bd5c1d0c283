use crate::error::{ConvertError, ConvertResult};
use crate::options::ConvertOptions;
use mtt_common::FileSystem;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Get the working and convert directories ready for a run.
///
/// A missing working directory is created (there is simply nothing to
/// convert yet). The convert directory is cleared when
/// `clean_convert_dir` is set, then created.
pub fn prepare_directories(options: &ConvertOptions, fs: &dyn FileSystem) -> ConvertResult<()> {
    let working_dir = &options.working_dir;
    let convert_dir = &options.convert_dir;

    if !fs.exists(working_dir) {
        warn!(dir = %working_dir.display(), "Working directory does not exist, creating");
        fs.create_dir_all(working_dir).map_err(|e| {
            ConvertError::config(format!(
                "cannot create working directory {}: {}",
                working_dir.display(),
                e
            ))
        })?;
    }

    if options.clean_convert_dir && fs.exists(convert_dir) {
        let working = canonical(fs, working_dir)?;
        let convert = canonical(fs, convert_dir)?;

        if working.starts_with(&convert) {
            return Err(ConvertError::config(format!(
                "refusing to clear convert directory {} because it contains the working directory {}",
                convert_dir.display(),
                working_dir.display()
            )));
        }

        info!(dir = %convert_dir.display(), "Clearing convert directory");
        fs.remove_dir_all(convert_dir).map_err(|e| {
            ConvertError::config(format!(
                "cannot clear convert directory {}: {}",
                convert_dir.display(),
                e
            ))
        })?;
    }

    fs.create_dir_all(convert_dir).map_err(|e| {
        ConvertError::config(format!(
            "cannot create convert directory {}: {}",
            convert_dir.display(),
            e
        ))
    })?;

    Ok(())
}

fn canonical(fs: &dyn FileSystem, dir: &Path) -> ConvertResult<PathBuf> {
    fs.canonicalize(dir).map_err(|e| {
        ConvertError::config(format!("cannot resolve directory {}: {}", dir.display(), e))
    })
}
