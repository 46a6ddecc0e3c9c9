use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub root_directories: Vec<PathBuf>,
    pub file_extensions: Vec<String>,
    pub max_file_size: usize,
    pub flags: FlagConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagConfig {
    pub recognized_names: Vec<String>,
    pub default_name: String,
    pub indent_unit: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_directories: vec![
                PathBuf::from("script"),
                PathBuf::from("scene"),
                PathBuf::from("addons"),
            ],
            file_extensions: vec!["gd".to_string()],
            max_file_size: 1024 * 1024, // 1MB
            flags: FlagConfig {
                recognized_names: vec![
                    "DEBUG_ENABLED".to_string(),
                    "DEBUG_DISABLED".to_string(),
                ],
                default_name: "DEBUG_ENABLED".to_string(),
                indent_unit: "\t".to_string(),
            },
        }
    }
}

impl Config {
    /// Get the default config file path (~/.print-guard.toml)
    pub fn default_config_path() -> crate::Result<PathBuf> {
        let home_dir = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(PathBuf::from(home_dir).join(".print-guard.toml"))
    }

    /// Load config from the default location, falling back to defaults if no file exists
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::default_config_path()?;

        if config_path.exists() {
            println!("📝 Loading configuration from: {}", config_path.display());
            Self::from_file(&config_path)
        } else {
            println!("ℹ️  No config file found at {}, using defaults", config_path.display());
            println!("💡 Run 'print-guard config' to create a default configuration file");
            Ok(Self::default())
        }
    }

    /// Load config from a specific file path
    pub fn from_file(path: &PathBuf) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a file
    pub fn to_file(&self, path: &PathBuf) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create a config file with all available options documented
    pub fn create_documented_config() -> String {
        format!(
            r#"# Print Guard Configuration File
# This file configures how print-guard rewrites your script files

# Directories searched for script files, relative to the base path.
# Roots that do not exist are skipped.
root_directories = ["script", "scene", "addons"]

# File extensions to process
file_extensions = ["gd"]

# Maximum file size to process (in bytes, default 1MB)
max_file_size = 1048576

[flags]
# Identifiers recognized as an existing debug flag declaration
recognized_names = ["DEBUG_ENABLED", "DEBUG_DISABLED"]

# Flag name injected when a file declares none
default_name = "DEBUG_ENABLED"

# Indentation unit prepended to wrapped print lines
indent_unit = "\t"
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_roots_and_flags() {
        let config = Config::default();
        assert_eq!(
            config.root_directories,
            vec![
                PathBuf::from("script"),
                PathBuf::from("scene"),
                PathBuf::from("addons")
            ]
        );
        assert_eq!(config.file_extensions, vec!["gd"]);
        assert_eq!(
            config.flags.recognized_names,
            vec!["DEBUG_ENABLED", "DEBUG_DISABLED"]
        );
        assert_eq!(config.flags.default_name, "DEBUG_ENABLED");
        assert_eq!(config.flags.indent_unit, "\t");
    }

    #[test]
    fn documented_config_parses() {
        let config: Config = toml::from_str(&Config::create_documented_config()).unwrap();
        assert_eq!(config.max_file_size, 1048576);
        assert_eq!(config.flags.default_name, "DEBUG_ENABLED");
        assert_eq!(config.flags.indent_unit, "\t");
    }

    #[test]
    fn config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("print-guard.toml");

        let mut config = Config::default();
        config.file_extensions.push("tscn".to_string());
        config.to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.file_extensions, config.file_extensions);
        assert_eq!(loaded.flags.recognized_names, config.flags.recognized_names);
    }
}
