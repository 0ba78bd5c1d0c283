use std::cell::RefCell;
use std::rc::Rc;

/// Options for TypeScript emission
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Whether to start each file with the auto-generated banner
    pub auto_generated_tag: bool,
    /// Indentation unit for interface members
    pub indent: String,
    /// Extension of emitted files, without the dot
    pub file_extension: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            auto_generated_tag: true,
            indent: "\t".to_string(),
            file_extension: "ts".to_string(),
        }
    }
}

/// Compilation context for managing state during code generation
pub struct CompilerContext {
    buffer: Rc<RefCell<String>>,
    indent_level: Rc<RefCell<usize>>,
    pub options: CompileOptions,
}

impl CompilerContext {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            buffer: Rc::new(RefCell::new(String::new())),
            indent_level: Rc::new(RefCell::new(0)),
            options,
        }
    }

    pub fn add(&self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }

    pub fn add_line(&self, text: &str) {
        self.add_indented(text);
        self.add("\n");
    }

    pub fn add_blank_line(&self) {
        self.add("\n");
    }

    pub fn add_indented(&self, text: &str) {
        let indent = self.options.indent.repeat(*self.indent_level.borrow());
        self.buffer.borrow_mut().push_str(&indent);
        self.buffer.borrow_mut().push_str(text);
    }

    pub fn indent(&self) {
        *self.indent_level.borrow_mut() += 1;
    }

    pub fn dedent(&self) {
        let mut level = self.indent_level.borrow_mut();
        if *level > 0 {
            *level -= 1;
        }
    }

    pub fn get_output(&self) -> String {
        self.buffer.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let ctx = CompilerContext::new(CompileOptions::default());
        ctx.add_line("{");
        ctx.indent();
        ctx.add_line("a: number;");
        ctx.dedent();
        ctx.dedent();
        ctx.add_line("}");

        assert_eq!(ctx.get_output(), "{\n\ta: number;\n}\n");
    }

    #[test]
    fn test_custom_indent() {
        let options = CompileOptions {
            indent: "  ".to_string(),
            ..Default::default()
        };
        let ctx = CompilerContext::new(options);
        ctx.indent();
        ctx.indent();
        ctx.add_line("x");

        assert_eq!(ctx.get_output(), "    x\n");
    }
}
