//! Narrow seam to the hosting UI.
//!
//! The upload pipeline only needs one capability from its host: showing a
//! transient notice. Keeping that behind a trait lets the pipeline run under
//! a CLI, a plugin host, or a test harness unchanged.

/// Surface for transient user-visible messages.
pub trait Host {
    fn show_notice(&self, message: &str);
}

/// CLI host: notices go to stderr and the log.
#[derive(Debug, Default)]
pub struct StderrHost;

impl Host for StderrHost {
    fn show_notice(&self, message: &str) {
        tracing::warn!("{}", message);
        eprintln!("{}", message);
    }
}
