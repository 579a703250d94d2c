use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

const EXAMPLE_RESOURCE: &str = r#"hello = Hello, { $name }!
apples = I have { $count ->
    [one] one apple
   *[other] { $count } apples
}
choices =
    .create = Create
    .open = Open { $path }
"#;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Source directory
    #[arg(short, long, default_value = "src")]
    pub src_dir: String,

    /// Directory for generated declarations
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing fluent-typegen project...".bright_blue().bold()
    );

    let src_dir = PathBuf::from(cwd).join(&args.src_dir);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), args.src_dir);
    }

    let example_file = src_dir.join("example.ftl");
    if !example_file.exists() {
        fs::write(&example_file, EXAMPLE_RESOURCE)?;
        println!("  {} Created example.ftl", "✓".green());
    }

    let config = Config {
        src_dir: args.src_dir.clone(),
        out_dir: args.out_dir.clone(),
        ..Default::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/example.ftl", args.src_dir);
    println!("  2. Run: fluent-typegen compile");
    println!("  3. Import the generated example.ftl.d.ts types");

    Ok(())
}
