//! # MTT Reference Resolver
//!
//! Second pass of the pipeline. Given the complete set of extracted models it
//! decides, for every field type and base type, whether the name refers to
//! another model in the batch (and where to import it from) or falls back to
//! a primitive mapping.
//!
//! ## Example
//!
//! ```rust
//! use mtt_parser::{Field, Model};
//! use mtt_resolver::{ModelBatch, Resolver, ResolverOptions};
//!
//! let batch = ModelBatch::new(vec![
//!     Model::new("Profile", "").with_field(Field::new("Owner", "User", "User", false)),
//!     Model::new("User", "people"),
//! ]);
//!
//! let resolution = Resolver::new(&batch, ResolverOptions::default()).resolve_all();
//! let owner = &resolution.models[0].fields[0];
//! assert_eq!(owner.import_path(), Some("./people/user"));
//! ```

pub mod batch;
pub mod options;
pub mod primitive;
pub mod resolver;
pub mod types;

pub use batch::ModelBatch;
pub use options::ResolverOptions;
pub use primitive::map_primitive;
pub use resolver::{import_path, Resolution, Resolver};
pub use types::{Primitive, ResolvedField, ResolvedModel, ResolvedType, TypeReference};
