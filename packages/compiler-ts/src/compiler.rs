use crate::codegen::typescript::TypeScriptGenerator;
use crate::codegen::CodeGenerator;
use crate::context::{CompileOptions, CompilerContext};
use mtt_common::to_camel_case;
use mtt_resolver::{ResolvedModel, TypeReference};
use std::path::PathBuf;

pub const AUTO_GENERATED_BANNER: &str = "/* Auto Generated */";

/// Compile one resolved model to the contents of its `.ts` file
pub fn compile_model(model: &ResolvedModel, options: CompileOptions) -> String {
    let ctx = CompilerContext::new(options);
    let gen = TypeScriptGenerator::new();

    if ctx.options.auto_generated_tag {
        ctx.add_line(AUTO_GENERATED_BANNER);
        ctx.add_blank_line();
    }

    let imports = collect_imports(model);
    for reference in &imports {
        ctx.add_line(&gen.generate_import(reference));
    }
    if !imports.is_empty() {
        ctx.add_blank_line();
    }

    ctx.add_line(&gen.generate_header(model));
    ctx.indent();
    for field in &model.fields {
        ctx.add_line(&gen.generate_property(field));
    }
    ctx.dedent();
    ctx.add_line(&gen.generate_footer());

    ctx.get_output()
}

/// Every model this file must import: the base type first, then field
/// references in declaration order. Each (name, path) pair appears once.
/// Nothing named like the model itself is imported, since the import would
/// clash with its own `export interface`.
pub fn collect_imports(model: &ResolvedModel) -> Vec<&TypeReference> {
    let mut imports: Vec<&TypeReference> = Vec::new();

    let references = model
        .base
        .iter()
        .chain(model.fields.iter().filter_map(|f| f.reference()));

    for reference in references {
        if reference.name == model.name {
            continue;
        }
        if !imports.contains(&reference) {
            imports.push(reference);
        }
    }

    imports
}

/// Output location of a model relative to the convert directory:
/// `<group>/<camelName>.<ext>`
pub fn output_path(model: &ResolvedModel, file_extension: &str) -> PathBuf {
    let file_name = format!("{}.{}", to_camel_case(&model.name), file_extension);

    if model.structure_group.is_empty() {
        PathBuf::from(file_name)
    } else {
        PathBuf::from(&model.structure_group).join(file_name)
    }
}
