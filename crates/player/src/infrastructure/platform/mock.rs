//! In-memory platform for tests
//!
//! Clipboard writes, shares, sleeps and page titles are recorded so tests
//! can assert on side effects. Time is fixed and sleeps complete immediately.

use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

use chrono::NaiveDate;

use crate::ports::outbound::platform::{
    ClipboardProvider, DocumentProvider, ShareProvider, ShareRequest, SleepProvider, TimeProvider,
};
use crate::state::Platform;

type Recorded<T> = Arc<Mutex<Vec<T>>>;

fn record<T>(log: &Recorded<T>, item: T) {
    if let Ok(mut items) = log.lock() {
        items.push(item);
    }
}

fn snapshot<T: Clone>(log: &Recorded<T>) -> Vec<T> {
    log.lock().map(|items| items.clone()).unwrap_or_default()
}

#[derive(Clone)]
pub struct MockTimeProvider {
    pub millis: u64,
    pub today: NaiveDate,
}

impl TimeProvider for MockTimeProvider {
    fn now_millis(&self) -> u64 {
        self.millis
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

#[derive(Clone, Default)]
pub struct MockSleepProvider {
    requested: Recorded<u64>,
}

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        record(&self.requested, ms);
        Box::pin(async {})
    }
}

#[derive(Clone, Default)]
pub struct MockClipboardProvider {
    copied: Recorded<String>,
}

impl ClipboardProvider for MockClipboardProvider {
    fn copy_text(&self, text: &str) {
        record(&self.copied, text.to_string());
    }
}

#[derive(Clone, Default)]
pub struct MockShareProvider {
    shared: Recorded<ShareRequest>,
}

impl ShareProvider for MockShareProvider {
    fn can_share(&self) -> bool {
        true
    }

    fn share(&self, request: ShareRequest) {
        record(&self.shared, request);
    }
}

#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    titles: Recorded<String>,
    url: Option<String>,
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        record(&self.titles, title.to_string());
    }

    fn current_url(&self) -> Option<String> {
        self.url.clone()
    }
}

/// Handles onto everything a [`MockPlatform`] recorded.
#[derive(Clone)]
pub struct MockPlatform {
    pub time: MockTimeProvider,
    sleep: MockSleepProvider,
    clipboard: MockClipboardProvider,
    share: MockShareProvider,
    document: MockDocumentProvider,
}

impl MockPlatform {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            time: MockTimeProvider { millis: 0, today },
            sleep: MockSleepProvider::default(),
            clipboard: MockClipboardProvider::default(),
            share: MockShareProvider::default(),
            document: MockDocumentProvider::default(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.document.url = Some(url.into());
        self
    }

    /// A [`Platform`] sharing this mock's recorders.
    pub fn platform(&self) -> Platform {
        Platform::new(
            self.time.clone(),
            self.sleep.clone(),
            self.clipboard.clone(),
            self.share.clone(),
            self.document.clone(),
        )
    }

    pub fn sleeps(&self) -> Vec<u64> {
        snapshot(&self.sleep.requested)
    }

    pub fn copied(&self) -> Vec<String> {
        snapshot(&self.clipboard.copied)
    }

    pub fn shared(&self) -> Vec<ShareRequest> {
        snapshot(&self.share.shared)
    }

    pub fn titles(&self) -> Vec<String> {
        snapshot(&self.document.titles)
    }
}
