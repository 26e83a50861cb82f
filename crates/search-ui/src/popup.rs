//! Help popup window.

/// Width and height of the help popup, in pixels.
pub const POPUP_WIDTH: u32 = 500;
pub const POPUP_HEIGHT: u32 = 500;

/// Window name shared by all help popups, so repeated clicks reuse one window.
const POPUP_WINDOW_NAME: &str = "name";

/// Builds the `window.open` feature string for a scrollable popup of the
/// given size.
pub fn popup_features(width: u32, height: u32) -> String {
    format!("scrollbars=1,height={},width={}", height, width)
}

/// Opens `url` in a fixed-size help popup and focuses it.
///
/// Always returns `false` so a link handler can use the return value to
/// suppress default navigation, whether or not the window actually opened.
/// A blocked or failed open is logged and swallowed; the surrounding page
/// never sees an error.
pub fn open_help_popup(url: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    let features = popup_features(POPUP_WIDTH, POPUP_HEIGHT);
    match window.open_with_url_and_target_and_features(url, POPUP_WINDOW_NAME, &features) {
        Ok(Some(popup)) => {
            // Focus is best-effort; some hosts disallow it.
            let _ = popup.focus();
        }
        Ok(None) => {
            log::warn!("help popup for '{}' was blocked by the browser", url);
        }
        Err(err) => {
            log::warn!("window.open failed for '{}': {:?}", url, err);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_string_matches_fixed_popup_geometry() {
        assert_eq!(
            popup_features(POPUP_WIDTH, POPUP_HEIGHT),
            "scrollbars=1,height=500,width=500"
        );
    }

    #[test]
    fn feature_string_places_height_before_width() {
        assert_eq!(popup_features(320, 240), "scrollbars=1,height=240,width=320");
    }
}
