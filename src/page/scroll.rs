//! Scroll-driven decisions: anchor jumps, sticky header, back-to-top

/// Height of the fixed header that anchor targets must clear
pub const HEADER_OFFSET: f64 = 80.0;
/// Scroll position past which the header turns solid
pub const STICKY_THRESHOLD: f64 = 50.0;
/// Scroll position past which the back-to-top button shows
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
/// Selector for in-page links
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub const BACK_TO_TOP_CLASS: &str = "back-to-top";
pub const BACK_TO_TOP_LABEL: &str = "Yukarı Çık";
pub const VISIBLE_CLASS: &str = "visible";
/// Up chevron, drawn in the button's text color
pub const BACK_TO_TOP_ICON: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M18 15l-6-6-6 6"/></svg>"#;

/// Selector to scroll to for an in-page link, `None` for a bare `#`
pub fn anchor_target(href: &str) -> Option<&str> {
    match href {
        "" | "#" => None,
        target => Some(target),
    }
}

/// Document scroll position that puts an element just below the header
pub fn scroll_offset(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - HEADER_OFFSET
}

/// Inline header styling for a scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl HeaderStyle {
    pub const SCROLLED: Self = Self {
        background: "rgba(14, 17, 13, 0.95)",
        box_shadow: "0 4px 20px rgba(0,0,0,0.5)",
    };
    pub const TOP: Self = Self {
        background: "rgba(14, 17, 13, 0.8)",
        box_shadow: "none",
    };

    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > STICKY_THRESHOLD {
            Self::SCROLLED
        } else {
            Self::TOP
        }
    }
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#services"), Some("#services"));
    }

    #[test]
    fn test_scroll_offset_clears_header() {
        // Element 500px below the viewport top, page already scrolled 1000px
        assert_eq!(scroll_offset(500.0, 1000.0), 1420.0);
        assert_eq!(scroll_offset(-200.0, 300.0), 20.0);
    }

    #[test]
    fn test_header_threshold() {
        assert_eq!(HeaderStyle::for_scroll(0.0), HeaderStyle::TOP);
        assert_eq!(HeaderStyle::for_scroll(50.0), HeaderStyle::TOP);
        assert_eq!(HeaderStyle::for_scroll(50.5), HeaderStyle::SCROLLED);
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(301.0));
    }
}
