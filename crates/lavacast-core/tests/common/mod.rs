pub mod vtt_server;

use lavacast_core::host::Host;
use std::sync::Mutex;

/// Test host that records every notice instead of printing it.
#[derive(Debug, Default)]
pub struct RecordingHost {
    notices: Mutex<Vec<String>>,
}

impl RecordingHost {
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl Host for RecordingHost {
    fn show_notice(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}
