mod compiler;
mod context;
mod definitions;
mod request;

pub use compiler::{compile_source, CompileError, CompileOutput, CompileResult};
pub use context::{CompileOptions, CompilerContext, DEFAULT_RUNTIME_MODULE};
pub use definitions::compile_definitions;
pub use request::ResourceRequest;

// Re-export from inference crate for convenience
pub use fluent_typegen_inference::{
    CodeGenerator, CollisionPolicy, EntryArguments, InferenceEngine, InferenceOptions,
    InferredType, ResourceArgumentIndex, TypeScriptGenerator,
};
