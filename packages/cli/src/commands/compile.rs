use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use fluent_typegen_compiler::{compile_source, CollisionPolicy, CompileError, CompileOptions, ResourceRequest};
use fluent_typegen_parser::format_errors;
use notify::{EventKind, RecursiveMode, Watcher};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use tracing::{debug, warn};
use walkdir::WalkDir;

pub const FTL_EXTENSION: &str = "ftl";
const DECLARATION_EXTENSION: &str = "ftl.d.ts";

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Directory to compile (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Locale tag attached to every resource request
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Reject duplicate entry ids
    #[arg(long)]
    pub strict: bool,

    /// Watch for file changes
    #[arg(short, long)]
    pub watch: bool,
}

pub fn compile(args: CompileArgs, cwd: &str) -> Result<()> {
    let root_dir = PathBuf::from(cwd).join(&args.path);
    let root = root_dir.to_string_lossy().to_string();
    let config = Config::load(&root)?;
    let src_dir = config.get_src_dir(&root);

    if !src_dir.exists() {
        return Err(anyhow!("Source directory does not exist: {:?}", src_dir));
    }

    let mut options = config.compile_options();
    if args.strict {
        options.inference.collisions = CollisionPolicy::Reject;
    }

    let out_dir = args
        .out_dir
        .as_ref()
        .or(config.out_dir.as_ref())
        .map(|out| root_dir.join(out));

    let job = CompileJob {
        src_dir,
        out_dir,
        locale: args.locale.clone(),
        stdout: args.stdout,
        options,
    };

    println!("{}", "🔨 Generating Fluent declarations...".bright_blue().bold());

    let ftl_files = find_ftl_files(&job.src_dir)?;

    if ftl_files.is_empty() {
        println!("{}", "⚠️  No .ftl files found".yellow());
        return Ok(());
    }

    println!("Found {} files", ftl_files.len());

    let mut success_count = 0;
    let mut error_count = 0;

    for ftl_file in &ftl_files {
        if job.report(ftl_file) {
            success_count += 1;
        } else {
            error_count += 1;
        }
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Compiled {} files successfully",
            "✅".green(),
            success_count
        );
    } else {
        println!(
            "{} Compiled {} files, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
    }

    if args.watch {
        job.watch()?;
    }

    if error_count > 0 {
        return Err(anyhow!("{} file(s) failed to compile", error_count));
    }

    Ok(())
}

/// Everything needed to turn one .ftl file into declarations
struct CompileJob {
    src_dir: PathBuf,
    out_dir: Option<PathBuf>,
    locale: Option<String>,
    stdout: bool,
    options: CompileOptions,
}

impl CompileJob {
    /// Compile one file and print its ✓/✗ line; returns whether it succeeded
    fn report(&self, ftl_file: &Path) -> bool {
        let relative_path = ftl_file.strip_prefix(&self.src_dir).unwrap_or(ftl_file);

        match self.compile_file(ftl_file) {
            Ok(output_path) => {
                println!(
                    "  {} {} → {}",
                    "✓".green(),
                    relative_path.display(),
                    output_path
                );
                true
            }
            Err(e) => {
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    e.to_string().red()
                );
                false
            }
        }
    }

    fn compile_file(&self, file_path: &Path) -> Result<String> {
        let source = fs::read_to_string(file_path)?;
        let relative_path = file_path.strip_prefix(&self.src_dir).unwrap_or(file_path);
        let request = self.request_for(relative_path)?;

        let output = compile_source(&source, &request, &self.options).map_err(|e| match e {
            CompileError::Parse { errors, .. } => {
                // Use pretty error formatting
                let file_name = file_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                anyhow!("\n{}", format_errors(&source, file_name, &errors))
            }
            other => anyhow!(other),
        })?;

        if self.stdout {
            println!("{}", output.declarations);
            return Ok("stdout".to_string());
        }

        let output_file = self.output_path(file_path);

        if let Some(parent) = output_file.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&output_file, output.declarations)?;
        debug!(output = %output_file.display(), "Wrote declarations");

        Ok(output_file.display().to_string())
    }

    fn request_for(&self, relative_path: &Path) -> Result<ResourceRequest> {
        let path = relative_path.to_string_lossy().replace('\\', "/");
        let request = match &self.locale {
            Some(locale) => format!("{}?locale={}", path, locale),
            None => path,
        };

        Ok(ResourceRequest::parse(&request)?)
    }

    /// `app.ftl` → `app.ftl.d.ts`, next to the source or under the output dir
    fn output_path(&self, file_path: &Path) -> PathBuf {
        let target = match &self.out_dir {
            Some(out_dir) => {
                let relative_path = file_path.strip_prefix(&self.src_dir).unwrap_or(file_path);
                out_dir.join(relative_path)
            }
            None => file_path.to_path_buf(),
        };

        target.with_extension(DECLARATION_EXTENSION)
    }

    /// Recompile .ftl files as they change until the watcher shuts down
    fn watch(&self) -> Result<()> {
        println!("\n{}", "👀 Watching for changes...".bright_blue());

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;
        watcher.watch(&self.src_dir, RecursiveMode::Recursive)?;

        for result in rx {
            let event = match result {
                Ok(event) => event,
                Err(e) => {
                    warn!(error = %e, "Watch error");
                    continue;
                }
            };

            if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
                continue;
            }

            for path in event.paths.iter().filter(|p| is_ftl_file(p)) {
                self.report(path);
            }
        }

        Ok(())
    }
}

fn is_ftl_file(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(FTL_EXTENSION)
}

pub fn find_ftl_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if is_ftl_file(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(src_dir: &Path, out_dir: Option<PathBuf>, options: CompileOptions) -> CompileJob {
        CompileJob {
            src_dir: src_dir.to_path_buf(),
            out_dir,
            locale: None,
            stdout: false,
            options,
        }
    }

    #[test]
    fn test_find_ftl_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("en-US")).unwrap();
        fs::write(dir.path().join("en-US/app.ftl"), "hello = Hello\n").unwrap();
        fs::write(dir.path().join("main.ftl"), "hi = Hi\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not fluent").unwrap();

        let files = find_ftl_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "ftl"));
    }

    #[test]
    fn test_compile_file_next_to_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("app.ftl");
        fs::write(&source, "hello = Hello, { $name }!\n").unwrap();

        let job = job(dir.path(), None, CompileOptions::default());
        let output = job.compile_file(&source).unwrap();

        let declarations = dir.path().join("app.ftl.d.ts");
        assert_eq!(output, declarations.display().to_string());
        let content = fs::read_to_string(declarations).unwrap();
        assert!(content.contains("\"hello\": { readonly name: FluentVariable };"));
    }

    #[test]
    fn test_compile_file_into_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let src_dir = dir.path().join("locales");
        fs::create_dir_all(src_dir.join("fr")).unwrap();
        let source = src_dir.join("fr/app.ftl");
        fs::write(&source, "hello = Bonjour { $name }\n").unwrap();

        let out_dir = dir.path().join("types");
        let job = job(&src_dir, Some(out_dir.clone()), CompileOptions::default());
        job.compile_file(&source).unwrap();

        assert!(out_dir.join("fr/app.ftl.d.ts").exists());
    }

    #[test]
    fn test_compile_file_with_locale() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("app.ftl");
        fs::write(&source, "hello = Hello\n").unwrap();

        let mut job = job(dir.path(), None, CompileOptions::default());
        job.locale = Some("de-AT".to_string());
        job.compile_file(&source).unwrap();

        let content = fs::read_to_string(dir.path().join("app.ftl.d.ts")).unwrap();
        assert!(content.contains("export const locale: \"de-AT\";"));
    }

    #[test]
    fn test_compile_file_rejects_bad_locale() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("app.ftl");
        fs::write(&source, "hello = Hello\n").unwrap();

        let mut job = job(dir.path(), None, CompileOptions::default());
        job.locale = Some("!!".to_string());

        assert!(job.compile_file(&source).is_err());
        assert!(!dir.path().join("app.ftl.d.ts").exists());
    }

    #[test]
    fn test_compile_file_reports_syntax_errors() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("broken.ftl");
        fs::write(&source, "hello = { $name\n").unwrap();

        let job = job(dir.path(), None, CompileOptions::default());
        let error = job.compile_file(&source).unwrap_err();

        assert!(error.to_string().contains("Invalid Fluent syntax"));
    }

    #[test]
    fn test_compile_directory_with_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("fluent-typegen.config.json"),
            r#"{ "srcDir": "locales", "outDir": "types", "omitEmptyShapes": true }"#,
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("locales")).unwrap();
        fs::write(dir.path().join("locales/app.ftl"), "demo = No arguments\n").unwrap();

        let args = CompileArgs {
            path: ".".to_string(),
            stdout: false,
            out_dir: None,
            locale: None,
            strict: false,
            watch: false,
        };
        compile(args, &dir.path().to_string_lossy()).unwrap();

        let content = fs::read_to_string(dir.path().join("types/app.ftl.d.ts")).unwrap();
        assert!(content.contains("export type NoArgumentId = \"demo\";"));
    }
}
