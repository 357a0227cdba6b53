//! Platform DI Container
//!
//! `Platform` aggregates the platform-specific providers behind the port
//! traits. It is built by `create_platform()` in `infrastructure/platform`,
//! injected into Dioxus context by the runner and read in components via
//! `use_context::<Platform>()`.

use std::{future::Future, pin::Pin, sync::Arc};

use chrono::NaiveDate;

use crate::ports::outbound::{
    ClipboardProvider, DocumentProvider, ShareProvider, ShareRequest, SleepProvider, TimeProvider,
};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProviderDyn>,
    sleep: Arc<dyn SleepProviderDyn>,
    clipboard: Arc<dyn ClipboardProviderDyn>,
    share: Arc<dyn ShareProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait TimeProviderDyn: Send + Sync {
    fn now_millis(&self) -> u64;
    fn today(&self) -> NaiveDate;
}

trait SleepProviderDyn: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

trait ClipboardProviderDyn: Send + Sync {
    fn copy_text(&self, text: &str);
}

trait ShareProviderDyn: Send + Sync {
    fn can_share(&self) -> bool;
    fn share(&self, request: ShareRequest);
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
    fn current_url(&self) -> Option<String>;
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: TimeProvider + Send + Sync> TimeProviderDyn for T {
    fn now_millis(&self) -> u64 {
        TimeProvider::now_millis(self)
    }
    fn today(&self) -> NaiveDate {
        TimeProvider::today(self)
    }
}

impl<T: SleepProvider + Send + Sync> SleepProviderDyn for T {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        SleepProvider::sleep_ms(self, ms)
    }
}

impl<T: ClipboardProvider + Send + Sync> ClipboardProviderDyn for T {
    fn copy_text(&self, text: &str) {
        ClipboardProvider::copy_text(self, text)
    }
}

impl<T: ShareProvider + Send + Sync> ShareProviderDyn for T {
    fn can_share(&self) -> bool {
        ShareProvider::can_share(self)
    }
    fn share(&self, request: ShareRequest) {
        ShareProvider::share(self, request)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
    fn current_url(&self) -> Option<String> {
        DocumentProvider::current_url(self)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Tm, Sl, C, Sh, D>(
        time: Tm,
        sleep: Sl,
        clipboard: C,
        share: Sh,
        document: D,
    ) -> Self
    where
        Tm: TimeProvider + Send + Sync,
        Sl: SleepProvider + Send + Sync,
        C: ClipboardProvider + Send + Sync,
        Sh: ShareProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
    {
        Self {
            time: Arc::new(time),
            sleep: Arc::new(sleep),
            clipboard: Arc::new(clipboard),
            share: Arc::new(share),
            document: Arc::new(document),
        }
    }

    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    pub fn now_millis(&self) -> u64 {
        self.time.now_millis()
    }

    /// Local calendar date, used to stamp new moments
    pub fn today(&self) -> NaiveDate {
        self.time.today()
    }

    /// Sleep for the given number of milliseconds.
    pub fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    // -------------------------------------------------------------------------
    // Clipboard and sharing
    // -------------------------------------------------------------------------

    pub fn copy_text(&self, text: &str) {
        self.clipboard.copy_text(text)
    }

    pub fn can_share(&self) -> bool {
        self.share.can_share()
    }

    /// Share `request`, filling in the current page URL when it has none.
    pub fn share(&self, mut request: ShareRequest) {
        if request.url.is_none() {
            request.url = self.document.current_url();
        }
        self.share.share(request)
    }

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (no-op on desktop)
    pub fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    pub fn current_url(&self) -> Option<String> {
        self.document.current_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatform;

    fn mock() -> MockPlatform {
        MockPlatform::new(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
    }

    #[test]
    fn today_comes_from_time_provider() {
        let platform = mock().platform();

        assert_eq!(
            platform.today(),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
        );
    }

    #[test]
    fn clipboard_writes_reach_the_provider() {
        let mock = mock();

        mock.platform().copy_text("Hail Sithis.");

        assert_eq!(mock.copied(), ["Hail Sithis."]);
    }

    #[test]
    fn share_fills_in_page_url() {
        let mock = mock().with_url("https://legends.example/");

        mock.platform().share(ShareRequest {
            title: "Haldor".into(),
            text: "Check out Haldor in Legends.".into(),
            url: None,
        });

        let shared = mock.shared();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].url.as_deref(), Some("https://legends.example/"));
    }

    #[test]
    fn explicit_share_url_is_kept() {
        let mock = mock().with_url("https://legends.example/");

        mock.platform().share(ShareRequest {
            title: "Haldor".into(),
            text: "text".into(),
            url: Some("https://other.example/".into()),
        });

        assert_eq!(
            mock.shared()[0].url.as_deref(),
            Some("https://other.example/")
        );
    }

    #[test]
    fn page_title_reaches_the_document() {
        let mock = mock();

        mock.platform().set_page_title("Legends");

        assert_eq!(mock.titles(), ["Legends"]);
    }

    #[tokio::test]
    async fn sleep_requests_are_recorded() {
        let mock = mock();

        mock.platform().sleep_ms(600).await;

        assert_eq!(mock.sleeps(), [600]);
    }
}
