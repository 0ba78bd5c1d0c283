pub mod error;
pub mod extractor;
pub mod loader;
pub mod model;
pub mod predicates;

pub use error::{LoadError, LoadResult};
pub use extractor::{extract, extract_all, Extraction};
pub use loader::{load_models, LoaderOptions};
pub use model::{Field, Model, SourceModel};
