use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings.
///
/// # Validation Rules
/// - API domain cannot be empty and must look like a URL or domain name
/// - API key cannot be empty
/// - If a log file path is provided, its parent directory must exist or be
///   creatable
pub fn validate_config(
    api_domain: &str,
    api_key: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // If it doesn't start with a protocol, it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    if api_key.is_empty() {
        return Err(AppError::config_error("API key cannot be empty"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_domain_and_key() {
        assert!(validate_config("", "key", &None).is_err());
        assert!(validate_config("https://v3.football.api-sports.io", "", &None).is_err());
    }

    #[test]
    fn test_accepts_plain_domains_and_localhost() {
        assert!(validate_config("v3.football.api-sports.io", "key", &None).is_ok());
        assert!(validate_config("localhost:8080", "key", &None).is_ok());
        assert!(validate_config("not_a_domain", "key", &None).is_err());
    }
}
