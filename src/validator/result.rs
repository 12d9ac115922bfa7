use serde::Serialize;

/// Outcome of one validation step. Errors make it invalid; warnings never do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl ValidationResult {
    /// A passing result with no messages.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// A failing result carrying a single error.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        let mut result = Self::valid();
        result.add_error(error);
        result
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// File-level and content-level outcome for one file of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchValidationResult {
    pub file_name: String,
    pub file_validation: ValidationResult,
    pub content_validation: ValidationResult,
    pub overall_valid: bool,
}

impl BatchValidationResult {
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        file_validation: ValidationResult,
        content_validation: ValidationResult,
    ) -> Self {
        let overall_valid = file_validation.is_valid && content_validation.is_valid;
        Self {
            file_name: file_name.into(),
            file_validation,
            content_validation,
            overall_valid,
        }
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.file_validation.has_warnings() || self.content_validation.has_warnings()
    }

    /// File warnings followed by content warnings.
    pub fn all_warnings(&self) -> impl Iterator<Item = &str> {
        self.file_validation
            .warnings
            .iter()
            .chain(&self.content_validation.warnings)
            .map(String::as_str)
    }
}

/// Counts over a completed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Files where either sub-result carries at least one warning.
    pub warnings: usize,
}

#[must_use]
pub fn summarize_batch(results: &[BatchValidationResult]) -> BatchSummary {
    results
        .iter()
        .fold(BatchSummary::default(), |mut summary, result| {
            summary.total += 1;
            if result.overall_valid {
                summary.valid += 1;
            } else {
                summary.invalid += 1;
            }
            if result.has_warnings() {
                summary.warnings += 1;
            }
            summary
        })
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
