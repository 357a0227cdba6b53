//! Desktop platform implementations
//!
//! Native clipboard through arboard, timers through tokio. There is no
//! share sheet on desktop, so sharing copies the message instead.

use std::time::{SystemTime, UNIX_EPOCH};
use std::{future::Future, pin::Pin};

use chrono::NaiveDate;

use crate::ports::outbound::platform::{
    ClipboardProvider, DocumentProvider, ShareProvider, ShareRequest, SleepProvider, TimeProvider,
};
use crate::state::Platform;

#[derive(Clone, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Desktop sleep provider using tokio timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}

#[derive(Clone, Default)]
pub struct DesktopClipboardProvider;

impl ClipboardProvider for DesktopClipboardProvider {
    fn copy_text(&self, text: &str) {
        let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
        match result {
            Ok(()) => tracing::debug!(chars = text.chars().count(), "Copied to clipboard"),
            Err(e) => tracing::error!("Failed to write clipboard: {}", e),
        }
    }
}

/// Copies the share message to the clipboard.
#[derive(Clone, Default)]
pub struct DesktopShareProvider {
    clipboard: DesktopClipboardProvider,
}

impl ShareProvider for DesktopShareProvider {
    fn can_share(&self) -> bool {
        false
    }

    fn share(&self, request: ShareRequest) {
        let message = match &request.url {
            Some(url) => format!("{} {}", request.text, url),
            None => request.text.clone(),
        };
        tracing::info!(title = %request.title, "No share sheet on desktop, copying instead");
        self.clipboard.copy_text(&message);
    }
}

#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // Window title is owned by the desktop launcher config
    }

    fn current_url(&self) -> Option<String> {
        None
    }
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(
        DesktopTimeProvider,
        DesktopSleepProvider,
        DesktopClipboardProvider,
        DesktopShareProvider::default(),
        DesktopDocumentProvider,
    )
}
