//! Configuration validation utilities.

/// Validate that a string is not empty.
pub fn validate_non_empty(s: &str, field: &str) -> crate::types::Result<()> {
    if s.trim().is_empty() {
        return Err(crate::types::Error::validation(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(())
}

/// Validate that a value is one of the accepted options (case-insensitive).
pub fn validate_one_of(s: &str, allowed: &[&str], field: &str) -> crate::types::Result<()> {
    if !allowed.iter().any(|a| a.eq_ignore_ascii_case(s)) {
        return Err(crate::types::Error::validation(format!(
            "{} must be one of {:?}, got {:?}",
            field, allowed, s
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert!(validate_non_empty("ar_engine", "source").is_ok());
        assert!(validate_non_empty("", "source").is_err());
        assert!(validate_non_empty("   ", "source").is_err());
    }

    #[test]
    fn test_one_of() {
        let levels = ["trace", "debug", "info"];
        assert!(validate_one_of("INFO", &levels, "log_level").is_ok());
        let err = validate_one_of("loud", &levels, "log_level").unwrap_err();
        assert!(err.to_string().contains("log_level must be one of"));
    }
}
