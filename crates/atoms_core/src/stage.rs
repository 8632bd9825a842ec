//! Stage capability trait
//!
//! A [`Stage`] is the controller's window onto the host document: viewport
//! metrics, element queries and bounding boxes, and the handful of style
//! side effects the atoms are allowed to apply (heights, opacity, the
//! sticky-fallback position class). Controllers hold the capability at the
//! trait seam and never touch a real document directly, so the same logic
//! runs against a browser bridge, a native embedder, or the in-memory
//! [`MemoryStage`](crate::MemoryStage) used in tests.
//!
//! Sticky support is a capability the host detects once and reports via
//! [`Stage::supports_sticky`]; controllers query it, they never re-derive it.

use slotmap::new_key_type;

use crate::geometry::{Rect, Size};

new_key_type! {
    /// Handle to an element on a stage
    pub struct ElementId;
}

/// Positioning mode for the sticky-fallback layer
///
/// When the host lacks native sticky positioning, the visual panel is pinned
/// manually each frame with one of these three modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PositionMode {
    /// Fixed to the top of the viewport (panel mid-sequence)
    FixedTop,
    /// Absolute at the bottom of the scroll container (scrolled past)
    AbsoluteBottom,
    /// Absolute at the top of the scroll container (not yet reached)
    #[default]
    AbsoluteTop,
}

impl PositionMode {
    /// CSS class the host toggles for this mode
    pub fn css_class(&self) -> &'static str {
        match self {
            PositionMode::FixedTop => "fixed-top",
            PositionMode::AbsoluteBottom => "absolute-bottom",
            PositionMode::AbsoluteTop => "absolute-top",
        }
    }
}

/// Host capability: document queries and style side effects
pub trait Stage {
    /// Logical viewport size
    fn viewport(&self) -> Size;

    /// Current document scroll offset
    fn page_y_offset(&self) -> f32;

    /// First element carrying the given class, in document order
    fn query(&self, class: &str) -> Option<ElementId>;

    /// All elements carrying the given class, in document order
    fn query_all(&self, class: &str) -> Vec<ElementId>;

    /// Parent of an element, if any
    fn parent(&self, el: ElementId) -> Option<ElementId>;

    /// Current bounding box, in viewport coordinates
    fn rect(&self, el: ElementId) -> Rect;

    /// Set an explicit height style on an element
    fn set_height(&mut self, el: ElementId, px: f32);

    /// Set an element's opacity
    fn set_opacity(&mut self, el: ElementId, value: f32);

    /// Toggle the sticky-fallback position class on an element
    fn set_position(&mut self, el: ElementId, mode: PositionMode);

    /// Whether the host supports native sticky positioning
    fn supports_sticky(&self) -> bool;
}
