use crate::compiler::CompileResult;
use crate::context::{CompileOptions, CompilerContext};
use crate::request::ResourceRequest;
use fluent_typegen_inference::codegen::typescript::{property_name, quote};
use fluent_typegen_inference::{CodeGenerator, ResourceArgumentIndex, TypeScriptGenerator};

const ERRORS_PARAM: &str = "errors?: Array<Error> | null";

// Built-in types that need no import from the runtime module
const BUILTIN_TYPES: &[&str] = &[
    "any", "unknown", "string", "number", "boolean", "object", "never", "bigint",
];

/// Compile a TypeScript definition file (.d.ts) for one resource
///
/// Ids with an arguments shape go into `MessageArguments` and are formatted
/// through the generic overload, which requires `args`. Ids without one
/// form `NoArgumentId`, whose overload has no `args` parameter.
pub fn compile_definitions(
    index: &ResourceArgumentIndex,
    request: &ResourceRequest,
    options: &CompileOptions,
) -> CompileResult<String> {
    if options.require_locale {
        request.require_locale()?;
    }

    let mut ctx = CompilerContext::new(options.clone());
    let ts_gen = TypeScriptGenerator::with_opaque_type(options.opaque_type.clone());

    compile_header(request, &ts_gen, &mut ctx);
    compile_arguments_interface(index, &ts_gen, &mut ctx);
    compile_no_argument_ids(index, &mut ctx);
    compile_format_message(index, &mut ctx);

    if let Some(locale) = &request.locale {
        ctx.add_line(&format!(
            "export const locale: {};",
            quote(&locale.to_string())
        ));
        ctx.add("\n");
    }

    ctx.add_line("declare const resource: FluentResource;");
    ctx.add_line("export default resource;");

    Ok(ctx.into_output())
}

fn compile_header(
    request: &ResourceRequest,
    ts_gen: &TypeScriptGenerator,
    ctx: &mut CompilerContext,
) {
    ctx.add_line(&format!(
        "// Generated by fluent-typegen from {}. Do not edit.",
        request.file_name()
    ));

    let mut imports = vec!["FluentBundle".to_string(), "FluentResource".to_string()];
    let opaque_type = ts_gen.opaque_type();
    if needs_import(opaque_type) && !imports.iter().any(|name| name == opaque_type) {
        imports.push(opaque_type.to_string());
    }

    let runtime_module = quote(&ctx.options.runtime_module);
    ctx.add_line(&format!(
        "import type {{ {} }} from {};",
        imports.join(", "),
        runtime_module
    ));
    ctx.add("\n");
}

fn compile_arguments_interface(
    index: &ResourceArgumentIndex,
    ts_gen: &TypeScriptGenerator,
    ctx: &mut CompilerContext,
) {
    ctx.add_line("export interface MessageArguments {");
    ctx.indent();

    for (id, shape) in index.argument_ids() {
        ctx.add_line(&format!("{}: {};", quote(id), ts_gen.generate_shape(shape)));
    }

    ctx.dedent();
    ctx.add_line("}");
    ctx.add("\n");
}

fn compile_no_argument_ids(index: &ResourceArgumentIndex, ctx: &mut CompilerContext) {
    let ids: Vec<String> = index.no_argument_ids().map(quote).collect();
    let union = if ids.is_empty() {
        "never".to_string()
    } else {
        ids.join(" | ")
    };

    ctx.add_line(&format!("export type NoArgumentId = {};", union));
    ctx.add("\n");
}

fn compile_format_message(index: &ResourceArgumentIndex, ctx: &mut CompilerContext) {
    let has_argument_ids = index.argument_ids().next().is_some();
    let has_no_argument_ids = index.no_argument_ids().next().is_some();

    // An empty resource still gets one (uncallable) signature.
    if has_no_argument_ids || !has_argument_ids {
        ctx.add_line("export function formatMessage(");
        ctx.indent();
        ctx.add_line("bundle: FluentBundle,");
        ctx.add_line("id: NoArgumentId,");
        ctx.add_line(ERRORS_PARAM);
        ctx.dedent();
        ctx.add_line("): string;");
    }

    if has_argument_ids {
        ctx.add_line("export function formatMessage<Id extends keyof MessageArguments>(");
        ctx.indent();
        ctx.add_line("bundle: FluentBundle,");
        ctx.add_line("id: Id,");
        ctx.add_line("args: MessageArguments[Id],");
        ctx.add_line(ERRORS_PARAM);
        ctx.dedent();
        ctx.add_line("): string;");
    }

    ctx.add("\n");
}

fn needs_import(type_name: &str) -> bool {
    !BUILTIN_TYPES.contains(&type_name) && property_name(type_name) == type_name
}
