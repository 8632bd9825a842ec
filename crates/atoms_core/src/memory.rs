//! In-memory stage backend
//!
//! [`MemoryStage`] implements [`Stage`] over a flat element store, for tests
//! and headless embedding. Elements are laid out by hand in document
//! coordinates; the stage applies the scroll offset when reporting bounding
//! boxes. There is no reflow: `set_height` resizes the element it targets
//! and records the style write, it does not move siblings. Tests that care
//! about post-layout geometry construct it directly.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::geometry::{Rect, Size};
use crate::stage::{ElementId, PositionMode, Stage};

#[derive(Clone, Debug, Default)]
struct MemoryElement {
    classes: Vec<String>,
    /// Bounding box in document coordinates (y measured from document top)
    base: Rect,
    parent: Option<ElementId>,
    opacity: Option<f32>,
    position: Option<PositionMode>,
    height_style: Option<f32>,
}

/// Headless [`Stage`] implementation backed by an element slotmap
pub struct MemoryStage {
    elements: SlotMap<ElementId, MemoryElement>,
    /// Document order
    order: Vec<ElementId>,
    by_class: FxHashMap<String, Vec<ElementId>>,
    viewport: Size,
    scroll_y: f32,
    sticky: bool,
}

impl MemoryStage {
    pub fn new(viewport: Size) -> Self {
        Self {
            elements: SlotMap::with_key(),
            order: Vec::new(),
            by_class: FxHashMap::default(),
            viewport,
            scroll_y: 0.0,
            sticky: true,
        }
    }

    /// Disable native sticky support (exercises the fallback path)
    pub fn without_sticky(mut self) -> Self {
        self.sticky = false;
        self
    }

    /// Add an element with the given classes and document-coordinate rect
    pub fn add_element(&mut self, classes: &[&str], rect: Rect) -> ElementId {
        self.insert(classes, rect, None)
    }

    /// Add an element parented to another
    pub fn add_child(&mut self, parent: ElementId, classes: &[&str], rect: Rect) -> ElementId {
        self.insert(classes, rect, Some(parent))
    }

    fn insert(&mut self, classes: &[&str], rect: Rect, parent: Option<ElementId>) -> ElementId {
        let id = self.elements.insert(MemoryElement {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            base: rect,
            parent,
            ..Default::default()
        });
        self.order.push(id);
        for class in classes {
            self.by_class.entry(class.to_string()).or_default().push(id);
        }
        id
    }

    /// Simulate the document scrolling to the given offset
    pub fn set_scroll_y(&mut self, offset: f32) {
        self.scroll_y = offset;
    }

    /// Move an element's document-coordinate rect (layout by hand)
    pub fn set_rect(&mut self, el: ElementId, rect: Rect) {
        if let Some(element) = self.elements.get_mut(el) {
            element.base = rect;
        }
    }

    /// Opacity last applied to an element, if any
    pub fn opacity_of(&self, el: ElementId) -> Option<f32> {
        self.elements.get(el).and_then(|e| e.opacity)
    }

    /// Position mode last applied to an element, if any
    pub fn position_of(&self, el: ElementId) -> Option<PositionMode> {
        self.elements.get(el).and_then(|e| e.position)
    }

    /// Height style last applied to an element, if any
    pub fn height_style_of(&self, el: ElementId) -> Option<f32> {
        self.elements.get(el).and_then(|e| e.height_style)
    }
}

impl Stage for MemoryStage {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn page_y_offset(&self) -> f32 {
        self.scroll_y
    }

    fn query(&self, class: &str) -> Option<ElementId> {
        self.by_class.get(class).and_then(|ids| ids.first().copied())
    }

    fn query_all(&self, class: &str) -> Vec<ElementId> {
        self.by_class.get(class).cloned().unwrap_or_default()
    }

    fn parent(&self, el: ElementId) -> Option<ElementId> {
        self.elements.get(el).and_then(|e| e.parent)
    }

    fn rect(&self, el: ElementId) -> Rect {
        self.elements
            .get(el)
            .map(|e| e.base.translated_y(-self.scroll_y))
            .unwrap_or(Rect::ZERO)
    }

    fn set_height(&mut self, el: ElementId, px: f32) {
        if let Some(element) = self.elements.get_mut(el) {
            element.height_style = Some(px);
            element.base.size.height = px;
        }
    }

    fn set_opacity(&mut self, el: ElementId, value: f32) {
        if let Some(element) = self.elements.get_mut(el) {
            element.opacity = Some(value);
        }
    }

    fn set_position(&mut self, el: ElementId, mode: PositionMode) {
        if let Some(element) = self.elements.get_mut(el) {
            element.position = Some(mode);
        }
    }

    fn supports_sticky(&self) -> bool {
        self.sticky
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_in_document_order() {
        let mut stage = MemoryStage::new(Size::new(1024.0, 768.0));
        let a = stage.add_element(&["step"], Rect::new(0.0, 0.0, 100.0, 50.0));
        let b = stage.add_element(&["step"], Rect::new(0.0, 50.0, 100.0, 50.0));

        assert_eq!(stage.query("step"), Some(a));
        assert_eq!(stage.query_all("step"), vec![a, b]);
        assert_eq!(stage.query("missing"), None);
    }

    #[test]
    fn rects_track_scroll_offset() {
        let mut stage = MemoryStage::new(Size::new(1024.0, 768.0));
        let el = stage.add_element(&["panel"], Rect::new(0.0, 1000.0, 100.0, 500.0));

        assert_eq!(stage.rect(el).top(), 1000.0);
        stage.set_scroll_y(1200.0);
        assert_eq!(stage.rect(el).top(), -200.0);
        assert_eq!(stage.rect(el).bottom(), 300.0);
    }

    #[test]
    fn style_writes_are_recorded() {
        let mut stage = MemoryStage::new(Size::new(1024.0, 768.0));
        let el = stage.add_element(&["step"], Rect::new(0.0, 0.0, 100.0, 50.0));

        stage.set_height(el, 400.0);
        stage.set_opacity(el, 0.25);
        stage.set_position(el, PositionMode::FixedTop);

        assert_eq!(stage.height_style_of(el), Some(400.0));
        assert_eq!(stage.rect(el).height(), 400.0);
        assert_eq!(stage.opacity_of(el), Some(0.25));
        assert_eq!(stage.position_of(el), Some(PositionMode::FixedTop));
    }

    #[test]
    fn parent_lookup() {
        let mut stage = MemoryStage::new(Size::new(1024.0, 768.0));
        let outer = stage.add_element(&["outer"], Rect::new(0.0, 0.0, 100.0, 100.0));
        let inner = stage.add_child(outer, &["inner"], Rect::new(0.0, 0.0, 100.0, 40.0));

        assert_eq!(stage.parent(inner), Some(outer));
        assert_eq!(stage.parent(outer), None);
    }
}
