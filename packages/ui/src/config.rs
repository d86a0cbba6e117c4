/// localStorage key holding the visitor's theme choice (`"light"` | `"dark"`).
pub const THEME_STORAGE_KEY: &str = "portfolio_theme";

/// Viewports at least this wide (CSS pixels) show the full nav bar.
pub const DESKTOP_MIN_WIDTH_PX: u32 = 860;

/// Fraction of a `.reveal` element that must be on screen before it is shown.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Media query matching the desktop breakpoint.
pub fn desktop_media_query() -> String {
    format!("(min-width: {DESKTOP_MIN_WIDTH_PX}px)")
}
