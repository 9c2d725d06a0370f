use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::config::NAV_SCROLL_THRESHOLD_PX;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD_PX
}

/// Element id an in-page href points at. `None` means the page top.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.trim_start_matches('#');
    if id.is_empty() || id == "root" {
        None
    } else {
        Some(id)
    }
}

/// Smoothly brings the anchor's target to the top of the viewport, or scrolls
/// to the page top when the href has no target.
pub fn scroll_to_anchor(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match anchor_target(href) {
        Some(id) => {
            let element = window.document().and_then(|d| d.get_element_by_id(id));
            match element {
                Some(element) => {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
                None => debug!("no element for anchor {}", href),
            }
        }
        None => {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#pricing"), Some("pricing"));
        assert_eq!(anchor_target("footer"), Some("footer"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("root"), None);
    }
}
