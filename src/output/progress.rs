use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for a batch of files.
///
/// The progress bar is automatically disabled in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct BatchProgress {
    progress_bar: ProgressBar,
}

impl BatchProgress {
    /// Creates a new progress bar for `total` files.
    ///
    /// `action` is shown in front of the bar, e.g. `Formatting`. The bar
    /// draws to stderr so stdout stays clean for reports.
    ///
    /// # Panics
    ///
    /// This function will panic if the progress bar template is invalid.
    /// The template is a compile-time constant, so this should never happen.
    #[must_use]
    pub fn new(action: &str, total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(action, total, quiet, is_tty)
    }

    fn new_with_visibility(action: &str, total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(action, total)
        };

        Self { progress_bar }
    }

    fn create_visible_progress_bar(action: &str, total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(&format!(
                    "{{spinner:.green}} {action} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} files {{wide_msg}}"
                ))
                // SAFETY: Template is built from fixed format specifiers
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Show `name` as the file in progress, with `completed` files done.
    pub fn update(&self, completed: u64, name: &str) {
        self.progress_bar.set_position(completed);
        self.progress_bar.set_message(name.to_string());
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.progress_bar.position()
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
