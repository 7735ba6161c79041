use crate::validation::Validator;

/// Validation errors specific to theme manifests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeValidationError {
    InvalidThemeId { id: String, reason: String },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::InvalidThemeId { id, reason } => {
                format!(
                    "Invalid theme id: '{}'\n\n\
                    Reason: {}\n\n\
                    Please use valid theme ids (alphanumeric, hyphens, underscores only).",
                    id, reason
                )
            }
        }
    }
}

/// Validator for theme ids as they appear in the manifest `themes` mapping
pub struct ThemeIdValidator;

impl Validator<str> for ThemeIdValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(ThemeValidationError::InvalidThemeId {
                id: input.to_string(),
                reason: "Id cannot be empty".to_string(),
            });
        }

        if input.len() > 50 {
            return Err(ThemeValidationError::InvalidThemeId {
                id: input.to_string(),
                reason: "Id too long (max 50 characters)".to_string(),
            });
        }

        if !input
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ThemeValidationError::InvalidThemeId {
                id: input.to_string(),
                reason: "Id contains invalid characters (only alphanumeric, hyphens, and underscores allowed)".to_string(),
            });
        }

        if input.starts_with('-')
            || input.starts_with('_')
            || input.ends_with('-')
            || input.ends_with('_')
        {
            return Err(ThemeValidationError::InvalidThemeId {
                id: input.to_string(),
                reason: "Id cannot start or end with hyphens or underscores".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_id_validator() {
        let validator = ThemeIdValidator;

        // Valid ids
        assert!(validator.validate("default").is_ok());
        assert!(validator.validate("high-contrast").is_ok());
        assert!(validator.validate("theme_2").is_ok());

        // Invalid ids
        assert!(validator.validate("").is_err());
        assert!(validator.validate("_invalid").is_err());
        assert!(validator.validate("invalid-").is_err());
        assert!(validator.validate("invalid@theme").is_err());
        assert!(validator.validate(&"a".repeat(51)).is_err());
    }
}
