pub mod typescript;

use mtt_resolver::{ResolvedField, ResolvedModel, TypeReference};

/// Plugin trait for rendering resolved models in a target language
pub trait CodeGenerator {
    /// Import statement for one referenced model
    fn generate_import(&self, reference: &TypeReference) -> String;

    /// Opening line of the type declaration, including any parent
    fn generate_header(&self, model: &ResolvedModel) -> String;

    /// A single member line, without indentation
    fn generate_property(&self, field: &ResolvedField) -> String;

    /// Closing line of the type declaration
    fn generate_footer(&self) -> String;
}
