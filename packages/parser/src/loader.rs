//! Model loader: reads the working directory into [`SourceModel`]s.
//!
//! Files directly under the root form the root group (empty name). Files one
//! level down are grouped by their parent directory. Anything deeper is
//! ignored.

use crate::error::{LoadError, LoadResult};
use crate::model::SourceModel;
use mtt_common::to_pascal_case;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};
use walkdir::{DirEntry, WalkDir};

/// Suffix stripped from file names by default, e.g. `UserResource.cs` → `User`
pub const DEFAULT_NAME_SUFFIX: &str = "Resource";

/// Options for loading models
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Suffix removed from the file stem before casing
    pub name_suffix: Option<String>,

    /// Only load files with these extensions (without the dot). Empty loads every file.
    pub extensions: Vec<String>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            name_suffix: Some(DEFAULT_NAME_SUFFIX.to_string()),
            extensions: Vec::new(),
        }
    }
}

impl LoaderOptions {
    fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext,
            None => return false,
        };

        self.extensions
            .iter()
            .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

/// Load every model file under `working_dir`.
///
/// Root files come first, then each group in name order; files within a group
/// are ordered by name. A missing or unreadable root is an error, never an
/// empty batch.
#[instrument(skip(options), fields(root = %working_dir.display()))]
pub fn load_models(working_dir: &Path, options: &LoaderOptions) -> LoadResult<Vec<SourceModel>> {
    if !working_dir.is_dir() {
        return Err(LoadError::missing_root(working_dir));
    }

    let mut models = Vec::new();

    let walker = WalkDir::new(working_dir)
        .min_depth(1)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(|source| LoadError::Walk {
            path: working_dir.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() || !options.accepts(entry.path()) {
            continue;
        }

        let structure_group = if entry.depth() == 1 {
            String::new()
        } else {
            entry
                .path()
                .parent()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        };

        models.push(load_model(entry.path(), structure_group, options)?);
    }

    // Stable: keeps the walker's name order inside each group
    models.sort_by(|a, b| a.structure_group.cmp(&b.structure_group));

    info!(models = models.len(), "Loaded models");
    Ok(models)
}

/// Read a single model file.
pub fn load_model(
    path: &Path,
    structure_group: String,
    options: &LoaderOptions,
) -> LoadResult<SourceModel> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::read(path, e))?;
    let raw_lines: Vec<String> = content.lines().map(str::to_string).collect();

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = model_name(&file_name, options.name_suffix.as_deref());

    debug!(
        file = %path.display(),
        name = %name,
        group = %structure_group,
        lines = raw_lines.len(),
        "Loaded model file"
    );

    Ok(SourceModel {
        name,
        structure_group,
        path: path.to_path_buf(),
        raw_lines,
    })
}

/// Derive a type name from a file name: drop the extension, drop `suffix`
/// when something is left afterwards, upper-case the first character.
pub fn model_name(file_name: &str, suffix: Option<&str>) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = match suffix {
        Some(suffix) if !suffix.is_empty() => match stem.strip_suffix(suffix) {
            Some(rest) if !rest.is_empty() => rest.to_string(),
            _ => stem,
        },
        _ => stem,
    };

    to_pascal_case(&stem)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|s| s.starts_with('.'))
            .unwrap_or(false)
}
