//! One-shot layout sizing pass
//!
//! At construction the controller measures the empty visual panel and every
//! step body, then reserves enough vertical scroll distance for each step's
//! trigger zone to be reachable. Short steps only need the panel height;
//! steps taller than a quarter of the viewport get extra distance for the
//! overflow. The pass runs exactly once, after the subtree is present and
//! before scroll tracking begins.

use atoms_core::{ElementId, Size, Stage};

/// Fraction of the viewport a step body may fill before it earns extra
/// scroll distance.
const OVERFLOW_FRACTION: f32 = 0.25;

/// Scroll distance reserved for a single step
///
/// `panel_height` when the body fits in a quarter viewport, otherwise the
/// panel height plus the overflow past that quarter.
pub fn reserved_height(panel_height: f32, body_height: f32, viewport_height: f32) -> f32 {
    let quarter = viewport_height * OVERFLOW_FRACTION;
    if body_height > quarter {
        panel_height + body_height - quarter
    } else {
        panel_height
    }
}

/// Geometry cached by the layout pass, referenced on every later frame
#[derive(Clone, Debug, Default)]
pub struct StepLayout {
    /// Height of the empty visual panel at layout time
    pub panel_height: f32,
    /// Reserved scroll distance per step
    pub reserved: Vec<f32>,
    /// Each step body's top edge at layout time
    pub tops: Vec<f32>,
    /// The text track's top edge at layout time (reference point for
    /// relative-offset math)
    pub initial_track_top: f32,
    /// Sum of all reserved heights, assigned to the scroll container
    pub total_height: f32,
}

impl StepLayout {
    /// Measure and mutate: size every step wrapper, size the scroll
    /// container, and cache the offsets the frame loop needs.
    ///
    /// `steps` are (wrapper, body) pairs in document order. Zero-height
    /// bodies are valid and reserve the bare panel height.
    pub fn measure<S: Stage>(
        stage: &mut S,
        panel: ElementId,
        track: ElementId,
        steps: &[(ElementId, ElementId)],
    ) -> Self {
        let Size { height: viewport_height, .. } = stage.viewport();
        let panel_height = stage.rect(panel).height();

        let reserved: Vec<f32> = steps
            .iter()
            .map(|&(_, body)| reserved_height(panel_height, stage.rect(body).height(), viewport_height))
            .collect();
        for (&(wrapper, _), &height) in steps.iter().zip(&reserved) {
            stage.set_height(wrapper, height);
        }

        let total_height: f32 = reserved.iter().sum();
        stage.set_height(panel, total_height);

        // Offsets are read back after the height writes so the cached
        // positions reflect the sized layout.
        let tops = steps.iter().map(|&(_, body)| stage.rect(body).top()).collect();
        let initial_track_top = stage.rect(track).top();

        tracing::debug!(
            steps = steps.len(),
            panel_height,
            total_height,
            "scrolly layout pass complete"
        );

        Self {
            panel_height,
            reserved,
            tops,
            initial_track_top,
            total_height,
        }
    }

    pub fn step_count(&self) -> usize {
        self.tops.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atoms_core::{MemoryStage, Rect};

    #[test]
    fn short_step_reserves_panel_height() {
        assert_eq!(reserved_height(500.0, 200.0, 1000.0), 500.0);
        // Boundary: exactly a quarter viewport is still "short"
        assert_eq!(reserved_height(500.0, 250.0, 1000.0), 500.0);
    }

    #[test]
    fn tall_step_reserves_overflow() {
        assert_eq!(reserved_height(500.0, 1200.0, 1000.0), 1450.0);
    }

    #[test]
    fn zero_height_step_is_valid() {
        assert_eq!(reserved_height(500.0, 0.0, 1000.0), 500.0);
    }

    #[test]
    fn measure_sizes_wrappers_and_container() {
        let mut stage = MemoryStage::new(Size::new(1024.0, 1000.0));
        let panel = stage.add_element(&["scroll-wrapper"], Rect::new(0.0, 0.0, 600.0, 500.0));
        let track = stage.add_element(&["scroll-text"], Rect::new(0.0, 0.0, 600.0, 2000.0));

        let heights = [400.0, 1200.0, 400.0];
        let mut steps = Vec::new();
        let mut y = 0.0;
        for h in heights {
            let wrapper = stage.add_child(track, &["scroll-text__div"], Rect::new(0.0, y, 600.0, h));
            let body = stage.add_child(wrapper, &["scroll-text__inner"], Rect::new(0.0, y, 600.0, h));
            steps.push((wrapper, body));
            y += h;
        }

        let layout = StepLayout::measure(&mut stage, panel, track, &steps);

        assert_eq!(layout.reserved, vec![500.0, 1450.0, 500.0]);
        assert_eq!(layout.total_height, 2450.0);
        assert_eq!(stage.height_style_of(steps[0].0), Some(500.0));
        assert_eq!(stage.height_style_of(steps[1].0), Some(1450.0));
        assert_eq!(stage.height_style_of(panel), Some(2450.0));
        assert_eq!(layout.tops, vec![0.0, 400.0, 1600.0]);
        assert_eq!(layout.initial_track_top, 0.0);
    }
}
