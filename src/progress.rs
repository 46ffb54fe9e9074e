// src/progress.rs

//! Per-file progress reporting for the conversion pass.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Receives progress updates while files are read.
///
/// # Examples
///
/// ```
/// use to_llm_view::progress::ProgressReporter;
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct Recorder {
///     seen: Mutex<Vec<String>>,
/// }
/// impl ProgressReporter for Recorder {
///     fn set_length(&self, _len: u64) {}
///     fn set_position(&self, _pos: u64) {}
///     fn set_message(&self, msg: String) {
///         self.seen.lock().unwrap().push(msg);
///     }
///     fn finish_with_message(&self, _msg: String) {}
/// }
///
/// let recorder = Recorder::default();
/// recorder.set_message("src/main.rs".to_string());
/// assert_eq!(recorder.seen.lock().unwrap().as_slice(), ["src/main.rs"]);
/// ```
pub trait ProgressReporter: Send + Sync {
    /// Sets the number of files in the pass.
    fn set_length(&self, len: u64);
    /// Sets how many files are done.
    fn set_position(&self, pos: u64);
    /// Shows the file currently being read.
    fn set_message(&self, msg: String);
    /// Ends the pass, leaving `msg` in place of the file name.
    fn finish_with_message(&self, msg: String);
}

/// A file counter bar on stderr, built on `indicatif`.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates a bar drawing to stderr.
    pub fn new() -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
        // The template is a literal; a parse failure falls back to the default style.
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self { bar }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn set_length(&self, len: u64) {
        self.bar.set_length(len);
    }

    fn set_position(&self, pos: u64) {
        self.bar.set_position(pos);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish_with_message(&self, msg: String) {
        self.bar.finish_with_message(msg);
    }
}
