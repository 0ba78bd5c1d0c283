use crate::codegen::CodeGenerator;
use mtt_common::to_camel_case;
use mtt_resolver::{ResolvedField, ResolvedModel, TypeReference};

/// Renders resolved models as TypeScript interfaces
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptGenerator;

impl TypeScriptGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Member type, with `[]` appended for collections
    pub fn generate_type(&self, field: &ResolvedField) -> String {
        if field.is_array {
            format!("{}[]", field.resolved_type())
        } else {
            field.resolved_type().to_string()
        }
    }
}

impl CodeGenerator for TypeScriptGenerator {
    fn generate_import(&self, reference: &TypeReference) -> String {
        format!("import {{ {} }} from \"{}\"", reference.name, reference.import_path)
    }

    fn generate_header(&self, model: &ResolvedModel) -> String {
        match &model.base {
            Some(base) => format!("export interface {} extends {} {{", model.name, base.name),
            None => format!("export interface {} {{", model.name),
        }
    }

    fn generate_property(&self, field: &ResolvedField) -> String {
        format!(
            "{}: {};",
            to_camel_case(&field.variable_name),
            self.generate_type(field)
        )
    }

    fn generate_footer(&self) -> String {
        "}".to_string()
    }
}
