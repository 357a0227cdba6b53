//! DOM queries routed through `document::eval`.
//!
//! The same script runs in the desktop webview and the browser, so there
//! is no per-target code here. Every query is best effort: a failed eval
//! is logged and reads as "nothing there".

use dioxus::prelude::*;
use legends_domain::Size;
use serde::Deserialize;

use crate::application::reorder::{parse_reorder_index, REORDER_INDEX_ATTR};

async fn run<T: for<'de> Deserialize<'de>>(script: String, what: &str) -> Option<T> {
    match document::eval(&script).join::<T>().await {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = ?e, what, "DOM query failed");
            None
        }
    }
}

/// The display index of the reorderable item under a touch point.
pub async fn reorder_index_at(client_x: f64, client_y: f64) -> Option<usize> {
    let script = format!(
        r#"const el = document.elementFromPoint({client_x}, {client_y});
        const item = el ? el.closest("[{REORDER_INDEX_ATTR}]") : null;
        return item ? item.getAttribute("{REORDER_INDEX_ATTR}") : null;"#
    );
    let raw: Option<String> = run(script, "reorder index").await?;
    raw.as_deref().and_then(parse_reorder_index)
}

/// Container and natural size of an `<img>` with the given id.
pub async fn image_metrics(image_id: &str) -> Option<(Size, Size)> {
    let script = format!(
        r#"const img = document.getElementById("{image_id}");
        if (!img || !img.naturalWidth || !img.naturalHeight) return null;
        const rect = img.getBoundingClientRect();
        return [rect.width, rect.height, img.naturalWidth, img.naturalHeight];"#
    );
    let metrics: Option<[f64; 4]> = run(script, "image metrics").await?;
    metrics.map(|[width, height, natural_width, natural_height]| {
        (
            Size { width, height },
            Size {
                width: natural_width,
                height: natural_height,
            },
        )
    })
}

/// Vertical scroll offset of the element with the given id.
pub async fn scroll_top(element_id: &str) -> Option<f64> {
    let script = format!(
        r#"const el = document.getElementById("{element_id}");
        return el ? el.scrollTop : null;"#
    );
    run::<Option<f64>>(script, "scroll offset").await?
}

/// Scroll a horizontal carousel by most of its width. `direction` is
/// `-1.0` for left and `1.0` for right.
pub fn scroll_carousel(element_id: &str, direction: f64) {
    let script = format!(
        r#"const el = document.getElementById("{element_id}");
        if (el) el.scrollBy({{ left: {direction} * el.offsetWidth * 0.8, behavior: "smooth" }});"#
    );
    let _ = document::eval(&script);
}

/// Open the file picker behind a hidden `<input type="file">`.
pub fn click_element(element_id: &str) {
    let script = format!(
        r#"const el = document.getElementById("{element_id}");
        if (el) el.click();"#
    );
    // Fire and forget; nothing comes back.
    let _ = document::eval(&script);
}
