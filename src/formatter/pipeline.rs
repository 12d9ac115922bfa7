use super::change::{ChangeSink, FormatResult};
use super::options::FormatOptions;
use super::passes::{
    BraceSpacing, CommentSpacing, ImportSorting, Indentation, KeywordCase, LineEndings,
    QuoteStyle, SemicolonInsertion, TokenSpacing, TrailingWhitespace,
};

/// One rewrite step of the formatter.
pub trait Pass {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Rewrite `text`, recording every edit in `sink`.
    ///
    /// A pass that finds nothing to do returns the text unchanged and records
    /// nothing.
    fn apply(&self, text: &str, sink: &mut ChangeSink) -> String;
}

/// Ordered chain of passes run over the output of the previous one.
pub struct Pipeline {
    passes: Vec<Box<dyn Pass>>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::from_options(&FormatOptions::default())
    }
}

impl Pipeline {
    #[must_use]
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Build the fixed pass order, keeping only the enabled passes.
    #[must_use]
    pub fn from_options(options: &FormatOptions) -> Self {
        Self::builder()
            .pass_if(options.fix_line_endings, LineEndings)
            .pass_if(options.remove_trailing_spaces, TrailingWhitespace)
            .pass_if(options.fix_indentation, Indentation)
            .pass_if_with(options.fix_braces, BraceSpacing::new)
            .pass_if_with(options.fix_quotes, QuoteStyle::new)
            .pass_if_with(options.fix_spacing, TokenSpacing::new)
            .pass_if(options.add_missing_semicolons, SemicolonInsertion)
            .pass_if_with(options.normalize_keywords, KeywordCase::new)
            .pass_if_with(options.sort_imports, ImportSorting::new)
            .pass_if(options.format_comments, CommentSpacing)
            .build()
    }

    #[must_use]
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    #[must_use]
    pub fn run(&self, source: &str) -> FormatResult {
        let mut sink = ChangeSink::new();
        let mut text = source.to_string();

        for pass in &self.passes {
            let recorded = sink.len();
            text = pass.apply(&text, &mut sink);
            log::trace!(
                "pass {} recorded {} change(s)",
                pass.name(),
                sink.len() - recorded
            );
        }

        FormatResult {
            formatted: text,
            changes: sink.into_changes(),
        }
    }
}

#[derive(Default)]
pub struct PipelineBuilder {
    passes: Vec<Box<dyn Pass>>,
}

impl PipelineBuilder {
    #[must_use]
    pub fn pass(mut self, pass: impl Pass + 'static) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    #[must_use]
    pub fn pass_if(self, enabled: bool, pass: impl Pass + 'static) -> Self {
        if enabled { self.pass(pass) } else { self }
    }

    /// Like `pass_if`, but only constructs the pass when it is enabled.
    #[must_use]
    pub fn pass_if_with<P, F>(self, enabled: bool, make: F) -> Self
    where
        P: Pass + 'static,
        F: FnOnce() -> P,
    {
        if enabled { self.pass(make()) } else { self }
    }

    #[must_use]
    pub fn build(self) -> Pipeline {
        Pipeline {
            passes: self.passes,
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
