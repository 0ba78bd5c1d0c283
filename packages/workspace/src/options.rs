use mtt_compiler_ts::CompileOptions;
use mtt_parser::LoaderOptions;
use mtt_resolver::ResolverOptions;
use std::path::PathBuf;

/// Everything one conversion run needs
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Root of the model files
    pub working_dir: PathBuf,

    /// Root the generated files are written under
    pub convert_dir: PathBuf,

    /// Delete an existing convert directory before writing
    pub clean_convert_dir: bool,

    pub loader: LoaderOptions,
    pub resolver: ResolverOptions,
    pub compile: CompileOptions,
}

impl ConvertOptions {
    pub fn new(working_dir: impl Into<PathBuf>, convert_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            convert_dir: convert_dir.into(),
            clean_convert_dir: true,
            loader: LoaderOptions::default(),
            resolver: ResolverOptions::default(),
            compile: CompileOptions::default(),
        }
    }
}
