//! The scrolly controller
//!
//! [`ScrollyTeller`] binds the layout pass, step detection, and the trigger
//! registry to a [`Stage`]. Construction runs the one-shot sizing pass and
//! caches the geometry; after that the controller is driven one frame at a
//! time through [`ScrollyTeller::check_frame`], either by the host's own
//! frame callback or by the background watcher in [`crate::watcher`].

use atoms_core::{ElementId, Stage};

use crate::detect::{active_step, emphasis, in_window, position_mode};
use crate::error::{Result, ScrollyError};
use crate::layout::StepLayout;
use crate::trigger::{Trigger, TriggerRegistry};

/// Class names of the stage subtree the controller consumes
pub mod classes {
    pub const WRAPPER: &str = "scroll-wrapper";
    pub const INNER: &str = "scroll-inner";
    pub const TRACK: &str = "scroll-text";
    pub const STEP_BODY: &str = "scroll-text__inner";
}

/// Construction-time configuration
///
/// The trigger fractions are tunable without touching the detection
/// algorithm; which of the pair applies is chosen once at construction from
/// the viewport width.
#[derive(Clone, Copy, Debug)]
pub struct ScrollyConfig {
    /// Trigger line as a fraction of viewport height, wide viewports
    pub trigger_top: f32,
    /// Trigger line fraction below the mobile breakpoint
    pub trigger_top_mobile: f32,
    /// Viewport width below which the mobile fraction applies
    pub mobile_breakpoint: f32,
    /// Dim steps that have not yet been reached
    pub transparent_until_active: bool,
    /// Opacity applied to not-yet-reached steps in fade mode
    pub dimmed_opacity: f32,
}

impl Default for ScrollyConfig {
    fn default() -> Self {
        Self {
            trigger_top: 0.5,
            trigger_top_mobile: 0.66,
            mobile_breakpoint: 740.0,
            transparent_until_active: false,
            dimmed_opacity: 0.25,
        }
    }
}

impl ScrollyConfig {
    /// Enable fade mode
    pub fn with_fade(mut self) -> Self {
        self.transparent_until_active = true;
        self
    }
}

/// Elements resolved from the stage at construction
#[derive(Clone, Debug)]
struct StageRefs {
    panel: ElementId,
    sticky_layer: ElementId,
    track: ElementId,
    /// (wrapper, body) per step, document order
    steps: Vec<(ElementId, ElementId)>,
}

/// Scroll-triggered narrative step controller
#[derive(Debug)]
pub struct ScrollyTeller {
    refs: StageRefs,
    layout: StepLayout,
    trigger_fraction: f32,
    transparent_until_active: bool,
    dimmed_opacity: f32,
    /// Last observed scroll offset, to skip identical frames
    last_scroll: Option<f32>,
    /// Current active step index, 0-based; `None` before the sequence has
    /// been entered
    active: Option<usize>,
    triggers: TriggerRegistry,
}

impl ScrollyTeller {
    /// Resolve the subtree, run the layout sizing pass, and cache geometry
    ///
    /// Fails with [`ScrollyError::MissingElement`] when the panel, sticky
    /// layer, or track are absent. An empty step sequence is valid.
    pub fn new<S: Stage>(stage: &mut S, config: ScrollyConfig) -> Result<Self> {
        let panel = stage
            .query(classes::WRAPPER)
            .ok_or(ScrollyError::MissingElement(classes::WRAPPER))?;
        let sticky_layer = stage
            .query(classes::INNER)
            .ok_or(ScrollyError::MissingElement(classes::INNER))?;
        let track = stage
            .query(classes::TRACK)
            .ok_or(ScrollyError::MissingElement(classes::TRACK))?;

        // Each step is a wrapper/body pair; a body without a wrapper parent
        // takes the style writes itself.
        let steps: Vec<(ElementId, ElementId)> = stage
            .query_all(classes::STEP_BODY)
            .into_iter()
            .map(|body| (stage.parent(body).unwrap_or(body), body))
            .collect();

        let viewport = stage.viewport();
        let is_mobile = viewport.width < config.mobile_breakpoint;
        let trigger_fraction = if is_mobile {
            config.trigger_top_mobile
        } else {
            config.trigger_top
        };

        let layout = StepLayout::measure(stage, panel, track, &steps);

        tracing::debug!(
            steps = steps.len(),
            is_mobile,
            trigger_fraction,
            "scrolly controller constructed"
        );

        Ok(Self {
            refs: StageRefs {
                panel,
                sticky_layer,
                track,
                steps,
            },
            layout,
            trigger_fraction,
            transparent_until_active: config.transparent_until_active,
            dimmed_opacity: config.dimmed_opacity,
            last_scroll: None,
            active: None,
            triggers: TriggerRegistry::new(),
        })
    }

    /// Register a trigger (1-based step number, see [`Trigger`])
    pub fn add_trigger(&mut self, trigger: Trigger) {
        self.triggers.add(trigger);
    }

    /// Current active step index, 0-based
    pub fn active_step(&self) -> Option<usize> {
        self.active
    }

    pub fn step_count(&self) -> usize {
        self.refs.steps.len()
    }

    /// The cached layout from the construction-time sizing pass
    pub fn layout(&self) -> &StepLayout {
        &self.layout
    }

    /// Process one frame
    ///
    /// Skips all work when the scroll offset matches the previous frame.
    /// Otherwise: sticky-fallback positioning first, then step detection,
    /// then trigger dispatch and fade on a transition.
    pub fn check_frame<S: Stage>(&mut self, stage: &mut S) {
        let offset = stage.page_y_offset();
        if self.last_scroll == Some(offset) {
            return;
        }

        let viewport_height = stage.viewport().height;
        let track = stage.rect(self.refs.track);

        if !stage.supports_sticky() {
            stage.set_position(self.refs.sticky_layer, position_mode(track, viewport_height));
        }

        if in_window(track, viewport_height, self.trigger_fraction) {
            let trigger_line = viewport_height * self.trigger_fraction;
            let next = active_step(
                &self.layout.tops,
                track.top(),
                self.layout.initial_track_top,
                trigger_line,
            );

            if next != self.active {
                tracing::debug!(from = ?self.active, to = ?next, "step transition");
                self.active = next;

                if let Some(index) = next {
                    self.triggers.dispatch(index);
                }
                if self.transparent_until_active {
                    self.apply_emphasis(stage);
                }
            }
        }

        self.last_scroll = Some(offset);
    }

    fn apply_emphasis<S: Stage>(&self, stage: &mut S) {
        let levels = emphasis(self.refs.steps.len(), self.active, self.dimmed_opacity);
        for (&(_, body), level) in self.refs.steps.iter().zip(levels) {
            stage.set_opacity(body, level);
        }
    }

    /// The visual panel element
    pub fn panel(&self) -> ElementId {
        self.refs.panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atoms_core::{MemoryStage, Rect, Size};

    fn fixture(heights: &[f32]) -> (MemoryStage, Vec<(atoms_core::ElementId, atoms_core::ElementId)>) {
        let mut stage = MemoryStage::new(Size::new(1024.0, 1000.0));
        stage.add_element(&["scroll-wrapper"], Rect::new(0.0, 0.0, 600.0, 500.0));
        let track = stage.add_element(&["scroll-text"], Rect::new(0.0, 0.0, 600.0, 2450.0));
        stage.add_child(track, &["scroll-inner"], Rect::new(0.0, 0.0, 600.0, 500.0));

        let mut steps = Vec::new();
        let mut y = 0.0;
        for &h in heights {
            let wrapper = stage.add_child(track, &["scroll-text__div"], Rect::new(0.0, y, 600.0, h));
            let body = stage.add_child(wrapper, &["scroll-text__inner"], Rect::new(0.0, y, 600.0, h));
            steps.push((wrapper, body));
            y += h;
        }
        (stage, steps)
    }

    #[test]
    fn missing_wrapper_is_a_configuration_error() {
        let mut stage = MemoryStage::new(Size::new(1024.0, 1000.0));
        let err = ScrollyTeller::new(&mut stage, ScrollyConfig::default()).unwrap_err();
        assert!(matches!(err, ScrollyError::MissingElement("scroll-wrapper")));
    }

    #[test]
    fn missing_track_is_a_configuration_error() {
        let mut stage = MemoryStage::new(Size::new(1024.0, 1000.0));
        stage.add_element(&["scroll-wrapper"], Rect::new(0.0, 0.0, 600.0, 500.0));
        stage.add_element(&["scroll-inner"], Rect::new(0.0, 0.0, 600.0, 500.0));
        let err = ScrollyTeller::new(&mut stage, ScrollyConfig::default()).unwrap_err();
        assert!(matches!(err, ScrollyError::MissingElement("scroll-text")));
    }

    #[test]
    fn zero_steps_is_valid() {
        let (mut stage, _) = fixture(&[]);
        let controller = ScrollyTeller::new(&mut stage, ScrollyConfig::default()).unwrap();
        assert_eq!(controller.step_count(), 0);
        assert_eq!(controller.active_step(), None);
    }

    #[test]
    fn mobile_breakpoint_selects_trigger_fraction() {
        let config = ScrollyConfig {
            trigger_top: 0.4,
            trigger_top_mobile: 0.8,
            ..Default::default()
        };

        let (mut stage, _) = fixture(&[400.0]);
        let desktop = ScrollyTeller::new(&mut stage, config).unwrap();
        assert_eq!(desktop.trigger_fraction, 0.4);

        let mut narrow = MemoryStage::new(Size::new(390.0, 844.0));
        narrow.add_element(&["scroll-wrapper"], Rect::new(0.0, 0.0, 390.0, 500.0));
        let track = narrow.add_element(&["scroll-text"], Rect::new(0.0, 0.0, 390.0, 2000.0));
        narrow.add_child(track, &["scroll-inner"], Rect::new(0.0, 0.0, 390.0, 500.0));
        let mobile = ScrollyTeller::new(&mut narrow, config).unwrap();
        assert_eq!(mobile.trigger_fraction, 0.8);
    }

    #[test]
    fn identical_frames_are_skipped() {
        let (mut stage, _) = fixture(&[400.0, 1200.0, 400.0]);
        let mut controller = ScrollyTeller::new(&mut stage, ScrollyConfig::default()).unwrap();

        controller.check_frame(&mut stage);
        let first = controller.active_step();
        // Same offset: no recompute, state unchanged
        controller.check_frame(&mut stage);
        assert_eq!(controller.active_step(), first);
    }
}
