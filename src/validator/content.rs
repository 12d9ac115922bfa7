use regex::Regex;

use super::balance::check_balance;
use super::result::ValidationResult;

const REQUIRED_SYNTAX: &str = r"(?imR)^(component|page|layout|route|api|util|hook|context|service|model|type|interface|const|function):";

const MISSING_DESCRIPTION: &str = r"(?imR)^(component|page|layout):[^{]*\{\s*\}";

/// Content-level checks for a ForSure document.
#[derive(Debug, Clone)]
pub struct ContentValidator {
    required: Regex,
    warnings: Vec<(Regex, &'static str)>,
}

impl Default for ContentValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentValidator {
    /// # Panics
    /// Panics if a built-in pattern is invalid (should never happen).
    #[must_use]
    pub fn new() -> Self {
        Self {
            required: Regex::new(REQUIRED_SYNTAX).expect("Invalid regex"),
            warnings: vec![(
                Regex::new(MISSING_DESCRIPTION).expect("Invalid regex"),
                "Some components are missing descriptions",
            )],
        }
    }

    /// Empty content short-circuits with a single error. Otherwise the
    /// syntax marker, warning patterns and bracket balance are all checked.
    #[must_use]
    pub fn validate(&self, content: &str) -> ValidationResult {
        if content.trim().is_empty() {
            return ValidationResult::failure("File content is empty");
        }

        let mut result = ValidationResult::valid();

        if !self.required.is_match(content) {
            result.add_error("File does not contain valid ForSure syntax");
        }

        for (pattern, message) in &self.warnings {
            if pattern.is_match(content) {
                result.add_warning(*message);
            }
        }

        let balance = check_balance(content);
        if !balance.is_balanced() {
            result.add_error(format!("Unbalanced braces: {}", balance.message()));
        }

        result
    }
}

/// Validate document text with the built-in checks.
#[must_use]
pub fn validate_content(content: &str) -> ValidationResult {
    ContentValidator::new().validate(content)
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
