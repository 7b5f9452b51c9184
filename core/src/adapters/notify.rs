use std::sync::Mutex;

use solid_common::error::DeliveryError;
use tracing::info;

use crate::ports::Notifier;

/// Emits every notification as a `tracing` event and never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, target: &str, message: &str) -> Result<(), DeliveryError> {
        info!("Notifying {target}: {message}");
        Ok(())
    }
}

/// Buffers notifications so they can be inspected afterwards.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(target, message)` pairs in the order they were sent.
    pub fn sent(&self) -> Vec<(String, String)> {
        match self.sent.lock() {
            Ok(sent) => sent.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, target: &str, message: &str) -> Result<(), DeliveryError> {
        self.sent
            .lock()
            .map_err(|_| DeliveryError::new(target, "outbox lock poisoned"))?
            .push((target.to_string(), message.to_string()));
        Ok(())
    }
}
