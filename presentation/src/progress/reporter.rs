//! Spinner shown while an upstream call is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A spinner with a short status message, cleared when the call returns.
pub struct ThinkingSpinner {
    bar: Option<ProgressBar>,
}

impl ThinkingSpinner {
    /// Start a spinner, or a no-op handle when progress display is off.
    pub fn start(message: &str, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("static spinner template is valid"),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// Stop and erase the spinner.
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_spinner_is_a_no_op() {
        let spinner = ThinkingSpinner::start("thinking", false);
        assert!(spinner.bar.is_none());
        spinner.finish();
    }
}
