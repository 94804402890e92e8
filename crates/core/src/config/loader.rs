use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "deploytally.toml";

/// Prefix for environment overrides; nested keys are separated by `__`.
const ENV_PREFIX: &str = "DEPLOYTALLY_";

fn base_figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
}

fn with_env(figment: Figment) -> Figment {
    figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: Config = with_env(base_figment().merge(Toml::file(path)))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load built-in defaults, then `deploytally.toml` if present, then the environment.
pub fn load_default_config() -> Result<Config, ConfigError> {
    let mut figment = base_figment();
    if Path::new(DEFAULT_CONFIG_FILE).exists() {
        figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
    }

    with_env(figment)
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[tickets]
top_n = 10
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.tickets.top_n, 10);
    }

    #[test]
    fn test_load_config_from_str_bad_type() {
        let toml = r#"
[tickets]
top_n = "many"
"#;
        let result = load_config_from_str(toml);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/deploytally.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[status]
missing_label = "Unknown"

[status.input]
path = "march.tsv"
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.status.missing_label, "Unknown");
        assert_eq!(config.status.input.path.to_str(), Some("march.tsv"));
        // Untouched sections fall back to the built-in defaults
        assert_eq!(config.tickets.top_n, 5);
        assert_eq!(config.status.input.encoding, "utf-16");
    }
}
