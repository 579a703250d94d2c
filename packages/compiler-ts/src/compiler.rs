use crate::context::CompileOptions;
use crate::definitions::compile_definitions;
use crate::request::ResourceRequest;
use fluent_typegen_inference::{InferenceEngine, InferenceError, ResourceArgumentIndex};
use fluent_typegen_parser::{parse, parse_lenient, ParseErrors};
use thiserror::Error;
use tracing::{info, warn};

pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that stop declarations from being emitted for one resource
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Failed to parse {path}: {errors}")]
    Parse { path: String, errors: ParseErrors },

    #[error("{0}")]
    Inference(#[from] InferenceError),

    #[error("Resource request '{request}' has no path")]
    EmptyPath { request: String },

    #[error("Resource request '{request}' has a malformed query: {reason}")]
    MalformedQuery { request: String, reason: String },

    #[error("Resource request '{request}' has unknown parameter '{key}'")]
    UnknownParameter { request: String, key: String },

    #[error("Resource request for {path} is missing a locale tag")]
    MissingLocale { path: String },

    #[error("Resource request for {path} has invalid locale tag '{tag}'")]
    InvalidLocale { path: String, tag: String },
}

/// Everything produced for one resource
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// The `.d.ts` module text
    pub declarations: String,
    /// The inferred arguments the declarations were built from
    pub index: ResourceArgumentIndex,
    /// Syntax errors skipped over in lenient mode
    pub syntax_errors: ParseErrors,
}

/// Parse, infer and emit declarations for one resource
pub fn compile_source(
    source: &str,
    request: &ResourceRequest,
    options: &CompileOptions,
) -> CompileResult<CompileOutput> {
    if options.require_locale {
        request.require_locale()?;
    }

    let (resource, syntax_errors) = if options.strict_syntax {
        let resource = parse(source).map_err(|errors| CompileError::Parse {
            path: request.path.clone(),
            errors,
        })?;
        (resource, ParseErrors::new())
    } else {
        parse_lenient(source)
    };

    for error in syntax_errors.iter() {
        warn!(path = %request.path, %error, "Skipped broken entry");
    }

    let engine = InferenceEngine::new(options.inference.clone());
    let index = engine.infer_resource(&resource)?;
    let declarations = compile_definitions(&index, request, options)?;

    info!(path = %request.path, entries = index.len(), "Compiled declarations");

    Ok(CompileOutput {
        declarations,
        index,
        syntax_errors,
    })
}
