//! Custom cursor: a dot that tracks the pointer and a trailing outline

/// Only devices with a precise pointer get the custom cursor
pub const FINE_POINTER_QUERY: &str = "(pointer: fine)";
/// Hovering any of these enlarges the outline
pub const INTERACTIVE_SELECTOR: &str = "a, button, input, textarea, select, .card";
pub const DOT_CLASS: &str = "cursor-dot";
pub const OUTLINE_CLASS: &str = "cursor-outline";
pub const HOVERED_CLASS: &str = "hovered";
/// How long the outline takes to catch up with the pointer
pub const OUTLINE_TRAIL_MS: f64 = 500.0;

/// CSS pixel length
pub fn px(value: i32) -> String {
    format!("{}px", value)
}

/// End keyframe of the outline's trailing animation towards the pointer.
///
/// Animated with `fill: forwards`, so the outline stays where it lands
/// without touching its inline style or stylesheet transitions.
pub fn trail_keyframe(x: i32, y: i32) -> [(&'static str, String); 2] {
    [("left", px(x)), ("top", px(y))]
}
