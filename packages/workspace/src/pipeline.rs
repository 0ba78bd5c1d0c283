//! The full conversion run: load → extract → resolve → compile → write.
//!
//! Each stage finishes for the whole batch before the next starts. The
//! resolver needs every model in hand, since any model may be referenced
//! by any other.

use crate::directories::prepare_directories;
use crate::error::{ConvertError, ConvertResult};
use crate::options::ConvertOptions;
use mtt_common::{Diagnostic, FileSystem};
use mtt_compiler_ts::{compile_model, output_path};
use mtt_parser::{extract_all, load_models};
use mtt_resolver::{ModelBatch, Resolver};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// One emitted file, not yet written
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub model_name: String,

    /// Path relative to the convert directory
    pub relative_path: PathBuf,

    pub contents: String,
}

/// Everything produced from the working directory, before any write
#[derive(Debug, Clone)]
pub struct Generation {
    pub files: Vec<GeneratedFile>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct ConvertReport {
    /// Absolute paths of the written files, in model order
    pub written: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ConvertReport {
    pub fn warnings(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }
}

/// Read the working directory and produce every output file in memory.
#[instrument(skip_all, fields(root = %options.working_dir.display()))]
pub fn generate(options: &ConvertOptions) -> ConvertResult<Generation> {
    let sources = load_models(&options.working_dir, &options.loader)?;

    let (models, mut diagnostics) = extract_all(sources);

    let batch = ModelBatch::new(models);
    let resolution = Resolver::new(&batch, options.resolver.clone()).resolve_all();
    diagnostics.extend(resolution.diagnostics);

    let files = resolution
        .models
        .iter()
        .map(|model| GeneratedFile {
            model_name: model.name.clone(),
            relative_path: output_path(model, &options.compile.file_extension),
            contents: compile_model(model, options.compile.clone()),
        })
        .collect();

    Ok(Generation { files, diagnostics })
}

/// Write generated files under `convert_dir`, creating group directories as
/// needed. Stops at the first failure; files already written stay in place.
pub fn write_files(
    files: &[GeneratedFile],
    convert_dir: &Path,
    fs: &dyn FileSystem,
) -> ConvertResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let path = convert_dir.join(&file.relative_path);

        if let Some(parent) = path.parent() {
            fs.create_dir_all(parent).map_err(|source| ConvertError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs.write(&path, &file.contents)
            .map_err(|source| ConvertError::Write {
                path: path.clone(),
                source,
            })?;

        debug!(model = %file.model_name, path = %path.display(), "Wrote file");
        written.push(path);
    }

    Ok(written)
}

/// Prepare directories, generate every file, then write them.
pub fn convert(options: &ConvertOptions, fs: &dyn FileSystem) -> ConvertResult<ConvertReport> {
    prepare_directories(options, fs)?;

    let generation = generate(options)?;
    let written = write_files(&generation.files, &options.convert_dir, fs)?;

    info!(
        files = written.len(),
        diagnostics = generation.diagnostics.len(),
        "Conversion complete"
    );

    Ok(ConvertReport {
        written,
        diagnostics: generation.diagnostics,
    })
}
