use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} products - {msg}";

/// StderrProgressReporter adapter writing progress to stderr
///
/// Stage messages are plain lines; per-product progress drives an indicatif
/// bar that is cleared before warnings and the completion message.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn bar_for(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        match slot.as_ref() {
            Some(pb) if pb.length() == Some(total as u64) && !pb.is_finished() => pb.clone(),
            _ => {
                let pb = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
                // The template is a constant; fall back to the default bar if it ever fails to parse
                if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
                    pb.set_style(style.progress_chars("=>-"));
                }
                *slot = Some(pb.clone());
                pb
            }
        }
    }

    fn clear_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) if !pb.is_finished() => pb.println(message),
            _ => eprintln!("{}", message),
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.bar_for(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_bar();
        eprintln!("{}", message.yellow());
    }

    fn report_completion(&self, message: &str) {
        self.clear_bar();
        eprintln!();
        eprintln!("{}", message.green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_reporting_cycle_does_not_panic() {
        let reporter = StderrProgressReporter::new();
        reporter.report("Parsing p10");
        reporter.report_progress(1, 3, Some("p10/kworkstation"));
        reporter.report("Parsing p9");
        reporter.report_progress(2, 3, None);
        reporter.report_error("⚠️  Warning: skipped 1 catalog record without an ID");
        reporter.report_completion("✅ Update complete");
    }

    #[test]
    fn test_bar_is_reused_for_same_total() {
        let reporter = StderrProgressReporter::default();
        reporter.report_progress(1, 4, None);
        reporter.report_progress(2, 4, None);

        let position = reporter.progress_bar.borrow().as_ref().map(|pb| pb.position());
        assert_eq!(position, Some(2));
    }

    #[test]
    fn test_error_clears_bar() {
        let reporter = StderrProgressReporter::new();
        reporter.report_progress(1, 2, None);
        reporter.report_error("failed");

        assert!(reporter.progress_bar.borrow().is_none());
    }
}
