//! Config command - manage configuration.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use tracing::debug;

use folio_core::FolioConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "search.folder")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// New value
        value: String,
    },

    /// Show configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("config.json")
}

/// Load the configuration used by the search commands.
///
/// An explicit path must exist. Without one the default location is used
/// when present, otherwise built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<FolioConfig> {
    if let Some(path) = config_path {
        debug!("Loading configuration from {}", path);
        return Ok(FolioConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Loading configuration from {}", default_path.display());
        Ok(FolioConfig::from_file(&default_path)?)
    } else {
        Ok(FolioConfig::default())
    }
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => show_config(&path),
        ConfigCommand::Init(init_args) => init_config(init_args, &path),
        ConfigCommand::Get { key } => get_config(&path, &key),
        ConfigCommand::Set { key, value } => set_config(&path, &key, &value),
        ConfigCommand::Path => show_path(&path),
    }
}

fn read_or_default(config_path: &Path) -> anyhow::Result<FolioConfig> {
    if config_path.exists() {
        Ok(FolioConfig::from_file(config_path)?)
    } else {
        Ok(FolioConfig::default())
    }
}

fn show_config(config_path: &Path) -> anyhow::Result<()> {
    if !config_path.exists() {
        eprintln!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
    }
    let config = read_or_default(config_path)?;

    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(args: InitArgs, config_path: &Path) -> anyhow::Result<()> {
    let output_path = args.output.unwrap_or_else(|| config_path.to_path_buf());

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = FolioConfig::default();
    config.save(&output_path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        output_path.display()
    );

    Ok(())
}

/// Look up a dotted key in the JSON form of `config`.
fn lookup(config: &FolioConfig, key: &str) -> anyhow::Result<serde_json::Value> {
    let json = serde_json::to_value(config)?;

    let mut current = &json;
    for part in key.split('.') {
        current = current
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
    }

    Ok(current.clone())
}

/// Return `config` with the dotted `key` replaced by `value`.
///
/// `value` is parsed as JSON first and falls back to a plain string, so
/// `true`, `3` and `"regex"` all work from the shell.
fn assign(config: &FolioConfig, key: &str, value: &str) -> anyhow::Result<(FolioConfig, serde_json::Value)> {
    let parsed_value: serde_json::Value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));

    let mut json = serde_json::to_value(config)?;

    let parts: Vec<&str> = key.split('.').collect();
    let (last, parents) = parts
        .split_last()
        .ok_or_else(|| anyhow::anyhow!("Empty configuration key"))?;

    let mut current = &mut json;
    for part in parents {
        current = current
            .get_mut(*part)
            .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?;
    }

    let object = current
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("Cannot set value at non-object path"))?;
    if !object.contains_key(*last) {
        anyhow::bail!("Configuration key not found: {}", key);
    }
    object.insert((*last).to_string(), parsed_value.clone());

    let updated = serde_json::from_value(json)
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;
    Ok((updated, parsed_value))
}

fn get_config(config_path: &Path, key: &str) -> anyhow::Result<()> {
    let config = read_or_default(config_path)?;
    let value = lookup(&config, key)?;

    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(())
}

fn set_config(config_path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let config = read_or_default(config_path)?;
    let (config, parsed_value) = assign(&config, key, value)?;

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    config.save(config_path)?;

    println!(
        "{} Set {} = {}",
        style("✓").green(),
        key,
        serde_json::to_string(&parsed_value)?
    );

    Ok(())
}

fn show_path(config_path: &Path) -> anyhow::Result<()> {
    println!("Configuration file: {}", config_path.display());

    if config_path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'folio config init' to create a configuration file.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::MatchMode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_nested_key() {
        let config = FolioConfig::default();
        assert_eq!(lookup(&config, "search.folder").unwrap(), serde_json::json!("pdfs"));
        assert_eq!(lookup(&config, "pdf.max_pages").unwrap(), serde_json::json!(0));
        assert!(lookup(&config, "search.missing").is_err());
    }

    #[test]
    fn test_assign_parses_json_values() {
        let config = FolioConfig::default();

        let (config, value) = assign(&config, "pdf.max_pages", "25").unwrap();
        assert_eq!(value, serde_json::json!(25));
        assert_eq!(config.pdf.max_pages, 25);

        let (config, _) = assign(&config, "search.mode", "regex").unwrap();
        assert_eq!(config.search.mode, MatchMode::Regex);

        let (config, _) = assign(&config, "search.folder", "archive").unwrap();
        assert_eq!(config.search.folder, PathBuf::from("archive"));
    }

    #[test]
    fn test_assign_rejects_bad_values() {
        let config = FolioConfig::default();
        assert!(assign(&config, "pdf.max_pages", "many").is_err());
        assert!(assign(&config, "search.colour", "red").is_err());
        assert!(assign(&config, "nothing.here", "1").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.json");
        std::fs::write(&path, r#"{ "output": { "format": "csv" } }"#).unwrap();

        let config = load_config(path.to_str()).unwrap();
        assert_eq!(config.output.format, folio_core::models::ResultFormat::Csv);
        assert_eq!(config.search.folder, PathBuf::from("pdfs"));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(load_config(path.to_str()).is_err());
    }
}
