use log::Level;

/// Google Apps Script deployment that appends contact leads to the production sheet.
pub const CONTACT_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbxVa0CPxue5kqnO-6pJUMCIFGzGT2t9oNEq3ZBB3jjzSqg97nr4RS7mtzfxWM_hXOpVoQ/exec";

/// Vertical scroll offset past which the navbar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Viewports narrower than this get the single-slide portfolio and tight reel spacing.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Share of the reel section that must be on screen before the active card plays.
pub const REEL_VISIBILITY_RATIO: f64 = 0.4;

// Contact form pacing, in milliseconds.
pub const SUBMIT_PACING_MS: u32 = 800;
pub const CLAPPER_REVEAL_MS: u32 = 600;
pub const SUCCESS_HOLD_MS: u32 = 4000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}
