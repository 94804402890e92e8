use encoding_rs::Encoding;

use super::{types::Config, ConfigError, InputConfig};

/// Validate configuration
/// Currently validates:
/// - Delimiters are single ASCII characters
/// - Encoding labels are known
/// - Column names and the missing-status label are not empty
/// - The ticket summary shows at least one entry
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    validate_input("tickets.input", &config.tickets.input)?;
    validate_input("status.input", &config.status.input)?;

    require_non_empty("tickets.service_column", &config.tickets.service_column)?;
    require_non_empty("tickets.commitment_column", &config.tickets.commitment_column)?;
    require_non_empty("status.status_column", &config.status.status_column)?;
    require_non_empty("status.missing_label", &config.status.missing_label)?;

    if config.tickets.top_n == 0 {
        return Err(ConfigError::ValidationError(
            "tickets.top_n cannot be 0".to_string(),
        ));
    }

    Ok(())
}

fn validate_input(section: &str, input: &InputConfig) -> Result<(), ConfigError> {
    if !input.delimiter.is_ascii() {
        return Err(ConfigError::ValidationError(format!(
            "{section}.delimiter must be an ASCII character, got {:?}",
            input.delimiter
        )));
    }

    if Encoding::for_label(input.encoding.as_bytes()).is_none() {
        return Err(ConfigError::ValidationError(format!(
            "{section}.encoding: unknown encoding label {:?}",
            input.encoding
        )));
    }

    Ok(())
}

fn require_non_empty(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::ValidationError(format!("{key} cannot be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_non_ascii_delimiter_fails() {
        let mut config = Config::default();
        config.tickets.input.delimiter = '→';
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_unknown_encoding_fails() {
        let mut config = Config::default();
        config.status.input.encoding = "utf-99".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("status.input.encoding"));
    }

    #[test]
    fn test_validate_top_n_zero_fails() {
        let mut config = Config::default();
        config.tickets.top_n = 0;
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_blank_column_fails() {
        let mut config = Config::default();
        config.status.status_column = "  ".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("status.status_column"));
    }
}
