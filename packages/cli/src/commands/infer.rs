use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use fluent_typegen_inference::{CollisionPolicy, InferenceEngine, ResourceArgumentIndex};
use fluent_typegen_parser::{format_errors, parse, parse_lenient};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Args)]
pub struct InferArgs {
    /// The .ftl file to analyze
    pub file: String,

    /// Entries without variables take no arguments (overrides config)
    #[arg(long)]
    pub compact: bool,

    /// Reject duplicate entry ids (overrides config)
    #[arg(long)]
    pub strict: bool,
}

/// Print the inferred argument index of one resource as JSON
pub fn infer(args: InferArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = PathBuf::from(cwd).join(&args.file);

    let index = infer_file(&path, &apply_flags(config, &args))?;
    println!("{}", serde_json::to_string_pretty(&index)?);

    Ok(())
}

fn apply_flags(mut config: Config, args: &InferArgs) -> Config {
    if args.compact {
        config.omit_empty_shapes = true;
    }
    if args.strict {
        config.collisions = CollisionPolicy::Reject;
    }
    config
}

fn infer_file(path: &Path, config: &Config) -> Result<ResourceArgumentIndex> {
    let source = fs::read_to_string(path)
        .map_err(|e| anyhow!("Cannot read {}: {}", path.display(), e))?;

    let resource = if config.strict_syntax {
        parse(&source).map_err(|errors| {
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unknown");
            anyhow!("\n{}", format_errors(&source, file_name, &errors))
        })?
    } else {
        let (resource, errors) = parse_lenient(&source);
        for error in errors.iter() {
            warn!(file = %path.display(), %error, "Skipped broken entry");
        }
        resource
    };

    let options = config.compile_options().inference;
    Ok(InferenceEngine::new(options).infer_resource(&resource)?)
}
