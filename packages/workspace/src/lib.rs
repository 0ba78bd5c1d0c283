pub mod directories;
pub mod error;
pub mod options;
pub mod pipeline;

pub use directories::prepare_directories;
pub use error::{ConvertError, ConvertResult};
pub use options::ConvertOptions;
pub use pipeline::{convert, generate, write_files, ConvertReport, GeneratedFile, Generation};

// Re-export the file system seam so callers need only this crate
pub use mtt_common::{FileSystem, MockFileSystem, RealFileSystem};
