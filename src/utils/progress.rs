//! Construction progress bar, a no-op without the `progress` feature

use std::borrow::Cow;

/// Inputs shorter than this build without a bar
pub const PROGRESS_MIN_LEN: usize = 1 << 20;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

#[cfg(not(feature = "progress"))]
use self::noop::ProgressBar;

/// Progress over the bytes of one input
pub struct BuildProgress {
    bar: Option<ProgressBar>,
}

impl BuildProgress {
    /// Show a bar only for inputs of at least [`PROGRESS_MIN_LEN`] bytes
    pub fn for_input(len: usize) -> Self {
        if len < PROGRESS_MIN_LEN {
            return Self { bar: None };
        }
        Self {
            bar: Some(new_bar(len as u64)),
        }
    }

    pub fn inc(&self, delta: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(delta);
        }
    }

    pub fn finish(&self, msg: impl Into<Cow<'static, str>>) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(msg);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }
}

#[cfg(feature = "progress")]
fn new_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner} [{bar:40}] {bytes}/{total_bytes} {msg}")
    {
        bar.set_style(style.progress_chars("=> "));
    }
    bar
}

#[cfg(not(feature = "progress"))]
fn new_bar(len: u64) -> ProgressBar {
    ProgressBar::new(len)
}

#[cfg(not(feature = "progress"))]
mod noop {
    use std::borrow::Cow;

    /// No-op progress bar when `progress` feature is disabled
    pub struct ProgressBar;

    impl ProgressBar {
        pub fn new(_len: u64) -> Self {
            ProgressBar
        }

        pub fn inc(&self, _delta: u64) {}
        pub fn finish_with_message(&self, _msg: impl Into<Cow<'static, str>>) {}
    }
}
