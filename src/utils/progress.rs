use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta}) {msg}";

/// Progress bar over the files of a batch
///
/// A hidden tracker accepts every update but draws nothing.
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    pub fn new(file_count: u64, description: &str, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(file_count)
        } else {
            ProgressBar::hidden()
        };
        let style = ProgressStyle::default_bar()
            .template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_message(description.to_string());

        ProgressTracker { bar }
    }

    /// Show the file about to be processed
    pub fn start_file(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    /// Count one finished file
    pub fn file_done(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_with_message(format!("{} files averaged", self.bar.position()));
    }
}
