//! UI timing constants, in milliseconds.

/// Quiet period after the last keystroke before a remote game search runs.
pub const SEARCH_DEBOUNCE_MS: u64 = 600;

/// Quiet period after the last edit before a moment is autosaved.
pub const AUTOSAVE_DEBOUNCE_MS: u64 = 1000;

/// How long the "saved" indicator stays up after an autosave.
pub const SAVE_INDICATOR_MS: u64 = 800;

/// How long the "copied" confirmation stays up.
pub const COPY_FEEDBACK_MS: u64 = 2000;

/// Length of the forging ceremony before the legend is created.
pub const FORGE_CEREMONY_MS: u64 = 2000;

/// Press duration that counts as a long press on touch devices.
pub const LONG_PRESS_MS: u64 = 500;

/// Delay before the file picker opens after a visual moment type is chosen.
pub const FILE_PICKER_DELAY_MS: u64 = 100;

/// Scroll distance (px) below which chrome never hides.
pub const CHROME_HIDE_AFTER_PX: f64 = 100.0;

/// Minimum scroll delta (px) that toggles chrome visibility.
pub const CHROME_SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Whether the floating chrome should be visible after a scroll event.
///
/// Returns `None` when the delta is too small to change anything.
pub fn chrome_visible_after_scroll(previous_y: f64, current_y: f64) -> Option<bool> {
    let delta = current_y - previous_y;
    if delta.abs() < CHROME_SCROLL_THRESHOLD_PX {
        return None;
    }
    Some(delta < 0.0 || current_y <= CHROME_HIDE_AFTER_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_scrolls_leave_chrome_alone() {
        assert_eq!(chrome_visible_after_scroll(300.0, 305.0), None);
    }

    #[test]
    fn scrolling_down_past_threshold_hides_chrome() {
        assert_eq!(chrome_visible_after_scroll(200.0, 260.0), Some(false));
    }

    #[test]
    fn scrolling_near_top_keeps_chrome() {
        assert_eq!(chrome_visible_after_scroll(20.0, 80.0), Some(true));
    }

    #[test]
    fn scrolling_up_shows_chrome() {
        assert_eq!(chrome_visible_after_scroll(900.0, 850.0), Some(true));
    }
}
