use fluent_typegen_compiler::{CollisionPolicy, CompileOptions, InferenceOptions, DEFAULT_RUNTIME_MODULE};
use fluent_typegen_inference::codegen::typescript::DEFAULT_OPAQUE_TYPE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "fluent-typegen.config.json";

/// fluent-typegen configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Source directory containing .ftl files
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Output directory; declarations go next to their sources when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,

    /// Module the declarations import Fluent types from
    #[serde(default = "default_runtime_module")]
    pub runtime_module: String,

    /// Type used for arguments that are only interpolated
    #[serde(default = "default_opaque_type")]
    pub opaque_type: String,

    /// Fail files whose request carries no locale tag
    #[serde(default)]
    pub require_locale: bool,

    /// Fail files with syntax errors instead of skipping broken entries
    #[serde(default = "default_true")]
    pub strict_syntax: bool,

    /// How duplicate entry ids are resolved
    #[serde(default)]
    pub collisions: CollisionPolicy,

    /// Entries without variables take no arguments parameter
    #[serde(default)]
    pub omit_empty_shapes: bool,
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_runtime_module() -> String {
    DEFAULT_RUNTIME_MODULE.to_string()
}

fn default_opaque_type() -> String {
    DEFAULT_OPAQUE_TYPE.to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to source directory
    pub fn get_src_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.src_dir)
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            runtime_module: self.runtime_module.clone(),
            opaque_type: self.opaque_type.clone(),
            require_locale: self.require_locale,
            strict_syntax: self.strict_syntax,
            inference: InferenceOptions {
                collisions: self.collisions,
                omit_empty_shapes: self.omit_empty_shapes,
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: None,
            runtime_module: default_runtime_module(),
            opaque_type: default_opaque_type(),
            require_locale: false,
            strict_syntax: true,
            collisions: CollisionPolicy::default(),
            omit_empty_shapes: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "srcDir": "locales",
            "outDir": "types",
            "opaqueType": "FluentValue",
            "requireLocale": true,
            "strictSyntax": false,
            "collisions": "reject",
            "omitEmptyShapes": true
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.src_dir, "locales");
        assert_eq!(config.out_dir, Some("types".to_string()));
        assert_eq!(config.runtime_module, "@fluent/bundle");
        assert_eq!(config.opaque_type, "FluentValue");
        assert!(config.require_locale);
        assert!(!config.strict_syntax);
        assert_eq!(config.collisions, CollisionPolicy::Reject);
        assert!(config.omit_empty_shapes);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.src_dir, "src");
        assert_eq!(config.out_dir, None);
        assert!(config.strict_syntax);
        assert_eq!(config.collisions, CollisionPolicy::LastWriteWins);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.src_dir, "src");
        assert!(config.strict_syntax);
        assert_eq!(config.opaque_type, "FluentVariable");
    }

    #[test]
    fn test_compile_options_from_config() {
        let config = Config {
            omit_empty_shapes: true,
            collisions: CollisionPolicy::Reject,
            ..Default::default()
        };

        let options = config.compile_options();
        assert!(options.inference.omit_empty_shapes);
        assert_eq!(options.inference.collisions, CollisionPolicy::Reject);
        assert!(options.strict_syntax);
    }
}
