use fluent_typegen_compiler::{compile_source, CompileOptions, InferenceOptions, ResourceRequest};
use fluent_typegen_inference::InferenceEngine;
use fluent_typegen_parser::parse;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
#[derive(Debug)]
pub struct CompileResult {
    declarations: String,
    index: String,
}

#[wasm_bindgen]
impl CompileResult {
    #[wasm_bindgen(getter)]
    pub fn declarations(&self) -> String {
        self.declarations.clone()
    }

    /// The inferred argument index as JSON
    #[wasm_bindgen(getter)]
    pub fn index(&self) -> String {
        self.index.clone()
    }
}

/// Compile a .ftl resource to TypeScript declarations
///
/// `request` is the import specifier, e.g. `./app.ftl?locale=en-US`.
#[wasm_bindgen(js_name = compileDefinitions)]
pub fn compile_definitions_js(
    source: &str,
    request: &str,
    compact: bool,
) -> Result<CompileResult, JsValue> {
    compile(source, request, compact).map_err(|e| JsValue::from_str(&e))
}

/// Infer the arguments of every message and return them as JSON
#[wasm_bindgen(js_name = inferArguments)]
pub fn infer_arguments_js(source: &str, compact: bool) -> Result<String, JsValue> {
    infer(source, compact).map_err(|e| JsValue::from_str(&e))
}

/// Check a .ftl resource; resolves to an empty string when it is valid
#[wasm_bindgen(js_name = checkSyntax)]
pub fn check_syntax_js(source: &str) -> String {
    match parse(source) {
        Ok(_) => String::new(),
        Err(errors) => errors.to_string(),
    }
}

fn options(compact: bool) -> CompileOptions {
    CompileOptions {
        inference: if compact {
            InferenceOptions::compact()
        } else {
            InferenceOptions::default()
        },
        ..Default::default()
    }
}

fn compile(source: &str, request: &str, compact: bool) -> Result<CompileResult, String> {
    let request = ResourceRequest::parse(request).map_err(|e| format!("Request error: {}", e))?;
    let output = compile_source(source, &request, &options(compact))
        .map_err(|e| format!("Compile error: {}", e))?;

    let index = serde_json::to_string(&output.index)
        .map_err(|e| format!("Serialization error: {}", e))?;

    Ok(CompileResult {
        declarations: output.declarations,
        index,
    })
}

fn infer(source: &str, compact: bool) -> Result<String, String> {
    let resource = parse(source).map_err(|e| format!("Parse error: {}", e))?;
    let index = InferenceEngine::new(options(compact).inference)
        .infer_resource(&resource)
        .map_err(|e| format!("Inference error: {}", e))?;

    serde_json::to_string(&index).map_err(|e| format!("Serialization error: {}", e))
}
