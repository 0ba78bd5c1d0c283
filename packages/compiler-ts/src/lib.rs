pub mod codegen;
mod compiler;
mod context;

pub use codegen::{typescript::TypeScriptGenerator, CodeGenerator};
pub use compiler::{collect_imports, compile_model, output_path, AUTO_GENERATED_BANNER};
pub use context::{CompileOptions, CompilerContext};

#[cfg(test)]
mod tests;
