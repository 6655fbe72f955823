//! Skeleton preloader shown until the page has loaded

pub const PRELOADER_CLASS: &str = "preloader";
pub const FADE_OUT_CLASS: &str = "fade-out";
/// Delay after load before the fade starts
pub const FADE_DELAY_MS: i32 = 500;
/// Fade duration; the element is removed afterwards
pub const REMOVE_DELAY_MS: i32 = 500;

/// Skeleton of the header and hero, styled by the site stylesheet
pub const SKELETON_HTML: &str = r#"
    <div class="skeleton-header">
        <div class="skeleton-inner">
            <div class="skeleton-logo"></div>
            <div class="skeleton-nav">
                <div class="skeleton-nav-item"></div>
                <div class="skeleton-nav-item"></div>
                <div class="skeleton-nav-item"></div>
                <div class="skeleton-nav-item"></div>
            </div>
        </div>
    </div>
    <div class="skeleton-hero">
        <div class="skeleton-title"></div>
        <div class="skeleton-text"></div>
        <div class="skeleton-text" style="width: 30%"></div>
    </div>
"#;

/// Whether dismissal has to wait for the window `load` event
pub fn waits_for_load(ready_state: &str) -> bool {
    ready_state != "complete"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_states() {
        assert!(waits_for_load("loading"));
        assert!(waits_for_load("interactive"));
        assert!(!waits_for_load("complete"));
    }

    #[test]
    fn test_skeleton_has_four_nav_items() {
        assert_eq!(SKELETON_HTML.matches("skeleton-nav-item").count(), 4);
    }
}
