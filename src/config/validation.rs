//! Configuration semantic validation.
//!
//! Checks values that parse fine but cannot work, such as an extension
//! without its leading dot or a malformed exclude glob.

use globset::Glob;

use crate::config::Config;
use crate::error::{ForsureError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if an extension lacks its leading dot, the size limit is
/// zero, or an exclude pattern is not a valid glob.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_extensions("validate.extensions", &config.validate.extensions)?;
    validate_extensions("scanner.extensions", &config.scanner.extensions)?;

    if config.validate.max_file_size == 0 {
        return Err(ForsureError::Config(
            "validate.max_file_size must be greater than 0".to_string(),
        ));
    }

    for pattern in &config.scanner.exclude {
        Glob::new(pattern).map_err(|source| ForsureError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }

    Ok(())
}

fn validate_extensions(field: &str, extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        return Err(ForsureError::Config(format!("{field} must not be empty")));
    }
    for (i, ext) in extensions.iter().enumerate() {
        if !ext.starts_with('.') || ext.len() < 2 {
            return Err(ForsureError::Config(format!(
                "{field}[{i}] must start with '.' followed by a name, got '{ext}'"
            )));
        }
    }
    Ok(())
}
