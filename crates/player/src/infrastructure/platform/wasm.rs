//! Browser platform implementations
//!
//! Clipboard and share go through `navigator`; both return promises that
//! are driven on the local executor and only logged on failure.

use std::{future::Future, pin::Pin};

use chrono::NaiveDate;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::ports::outbound::platform::{
    ClipboardProvider, DocumentProvider, ShareProvider, ShareRequest, SleepProvider, TimeProvider,
};
use crate::state::Platform;

fn navigator() -> Option<web_sys::Navigator> {
    web_sys::window().map(|w| w.navigator())
}

fn await_promise(promise: js_sys::Promise, what: &'static str) {
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            tracing::warn!("{} failed: {:?}", what, e);
        }
    });
}

#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn today(&self) -> NaiveDate {
        let now = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(
            now.get_full_year() as i32,
            now.get_month() + 1,
            now.get_date(),
        )
        .unwrap_or_default()
    }
}

#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
        })
    }
}

#[derive(Clone, Default)]
pub struct WasmClipboardProvider;

impl ClipboardProvider for WasmClipboardProvider {
    fn copy_text(&self, text: &str) {
        match navigator() {
            Some(nav) => await_promise(nav.clipboard().write_text(text), "Clipboard write"),
            None => tracing::error!("No window available for clipboard write"),
        }
    }
}

/// Uses the Web Share API when the browser exposes it, clipboard otherwise.
#[derive(Clone, Default)]
pub struct WasmShareProvider {
    clipboard: WasmClipboardProvider,
}

impl ShareProvider for WasmShareProvider {
    fn can_share(&self) -> bool {
        navigator()
            .map(|nav| js_sys::Reflect::has(&nav, &JsValue::from_str("share")).unwrap_or(false))
            .unwrap_or(false)
    }

    fn share(&self, request: ShareRequest) {
        let Some(nav) = navigator().filter(|_| self.can_share()) else {
            let message = match &request.url {
                Some(url) => format!("{} {}", request.text, url),
                None => request.text.clone(),
            };
            self.clipboard.copy_text(&message);
            return;
        };

        let data = web_sys::ShareData::new();
        data.set_title(&request.title);
        data.set_text(&request.text);
        if let Some(url) = &request.url {
            data.set_url(url);
        }
        // Also rejects when the user dismisses the sheet.
        await_promise(nav.share_with_data(&data), "Share");
    }
}

#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }

    fn current_url(&self) -> Option<String> {
        web_sys::window().and_then(|w| w.location().href().ok())
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(
        WasmTimeProvider,
        WasmSleepProvider,
        WasmClipboardProvider,
        WasmShareProvider::default(),
        WasmDocumentProvider,
    )
}
