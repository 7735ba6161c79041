use crate::validation::Validator;

/// Validation errors specific to the locale registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleValidationError {
    InvalidLanguageCode { code: String, reason: String },
}

impl LocaleValidationError {
    pub fn user_message(&self) -> String {
        match self {
            LocaleValidationError::InvalidLanguageCode { code, reason } => {
                format!(
                    "Invalid language code: '{}'\n\n\
                    Reason: {}\n\n\
                    Please use short codes like 'en', 'ar' or 'pt-BR'.",
                    code, reason
                )
            }
        }
    }
}

/// Validator for declared language codes.
///
/// Codes double as content file stems, so the rules stay close to BCP 47
/// subtags: ASCII alphanumeric segments separated by single hyphens.
pub struct LanguageCodeValidator;

impl Validator<str> for LanguageCodeValidator {
    type Error = LocaleValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(LocaleValidationError::InvalidLanguageCode {
                code: input.to_string(),
                reason: "Code cannot be empty".to_string(),
            });
        }

        if input.len() > 16 {
            return Err(LocaleValidationError::InvalidLanguageCode {
                code: input.to_string(),
                reason: "Code too long (max 16 characters)".to_string(),
            });
        }

        if !input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(LocaleValidationError::InvalidLanguageCode {
                code: input.to_string(),
                reason: "Code contains invalid characters (only ASCII letters, digits and hyphens allowed)"
                    .to_string(),
            });
        }

        if input.starts_with('-') || input.ends_with('-') || input.contains("--") {
            return Err(LocaleValidationError::InvalidLanguageCode {
                code: input.to_string(),
                reason: "Hyphens must separate non-empty segments".to_string(),
            });
        }

        Ok(())
    }
}
