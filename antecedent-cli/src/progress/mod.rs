//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Per-input progress for multi-file runs
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
    segments: usize,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
            segments: 0,
        }
    }

    /// Start a bar over `total` inputs, labelled with `noun` ("documents", "files")
    ///
    /// A single input gets no bar.
    pub fn init(&mut self, total: u64, noun: &str) {
        if self.quiet || total < 2 {
            return;
        }

        let pb = ProgressBar::new(total);
        let template =
            format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos}}/{{len}} {noun} {{msg}}");
        if let Ok(style) = ProgressStyle::default_bar().template(&template) {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record one finished input and the segments it produced
    pub fn input_done(&mut self, source: &str, segments: usize) {
        self.segments += segments;
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{source}: {segments} segment(s)"));
            pb.inc(1);
        }
    }

    /// Segments written so far
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{} segment(s) written", self.segments));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_still_counts_segments() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init(10, "files");
        assert!(reporter.progress_bar.is_none());
        reporter.input_done("a.txt", 3);
        reporter.input_done("b.txt", 2);
        assert_eq!(reporter.segments(), 5);
        reporter.finish();
    }

    #[test]
    fn test_single_input_has_no_bar() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init(1, "documents");
        assert!(reporter.progress_bar.is_none());
    }
}
