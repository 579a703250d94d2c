use fluent_typegen_inference::codegen::typescript::DEFAULT_OPAQUE_TYPE;
use fluent_typegen_inference::InferenceOptions;

/// Runtime package whose types the declarations refer to
pub const DEFAULT_RUNTIME_MODULE: &str = "@fluent/bundle";

/// Options for declaration compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Module that exports `FluentBundle`, `FluentResource` and the opaque type
    pub runtime_module: String,
    /// Type used for arguments that are only interpolated
    pub opaque_type: String,
    /// Reject requests that carry no `?locale=` tag
    pub require_locale: bool,
    /// Fail on any syntax error instead of skipping broken entries
    pub strict_syntax: bool,
    /// Inference behaviour (collisions, empty shapes)
    pub inference: InferenceOptions,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            runtime_module: DEFAULT_RUNTIME_MODULE.to_string(),
            opaque_type: DEFAULT_OPAQUE_TYPE.to_string(),
            require_locale: false,
            strict_syntax: true,
            inference: InferenceOptions::default(),
        }
    }
}

/// Output buffer with indentation tracking for code generation
pub struct CompilerContext {
    buffer: String,
    indent_level: usize,
    pub options: CompileOptions,
}

impl CompilerContext {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            options,
        }
    }

    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        if !text.is_empty() {
            self.add_indented(text);
        }
        self.add("\n");
    }

    pub fn add_indented(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.buffer.push_str("  ");
        }
        self.buffer.push_str(text);
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}
