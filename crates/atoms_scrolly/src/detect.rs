//! Per-frame step detection
//!
//! Pure functions over the cached layout and the track's current bounding
//! box. The controller calls these every processed frame and applies the
//! side effects (trigger dispatch, emphasis, position class) separately, so
//! the decision logic tests without a stage.

use atoms_core::{PositionMode, Rect};

/// Which positioning mode the sticky-fallback layer should use this frame
///
/// Evaluated from the scroll container's bounding box: pinned to the
/// viewport top while the container straddles the viewport, parked at the
/// container's bottom once scrolled past, parked at its top before entry.
pub fn position_mode(track: Rect, viewport_height: f32) -> PositionMode {
    if track.top() <= 0.0 && track.bottom() >= viewport_height {
        PositionMode::FixedTop
    } else if track.top() <= 0.0 {
        PositionMode::AbsoluteBottom
    } else {
        PositionMode::AbsoluteTop
    }
}

/// Whether the track is within the vertical window of interest
///
/// Outside this window the active step is left unchanged and nothing is
/// dispatched.
pub fn in_window(track: Rect, viewport_height: f32, trigger_fraction: f32) -> bool {
    track.top() < viewport_height * trigger_fraction && track.bottom() > viewport_height / 2.0
}

/// The active step for the current frame
///
/// Each step's cached top is adjusted by how far the track has moved since
/// layout; the active step is the *last* (highest-index) step whose adjusted
/// top has crossed the trigger line. `None` when no step qualifies.
pub fn active_step(
    tops: &[f32],
    track_top: f32,
    initial_track_top: f32,
    trigger_line: f32,
) -> Option<usize> {
    let shift = track_top - initial_track_top;
    let mut active = None;
    for (i, top) in tops.iter().enumerate() {
        if top + shift <= trigger_line {
            active = Some(i);
        }
    }
    active
}

/// Per-step opacity for fade mode
///
/// Steps at or before the active index are fully opaque; later steps are
/// dimmed. With no active step everything is dimmed.
pub fn emphasis(step_count: usize, active: Option<usize>, dimmed_opacity: f32) -> Vec<f32> {
    (0..step_count)
        .map(|j| match active {
            Some(i) if j <= i => 1.0,
            _ => dimmed_opacity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_mode_three_states() {
        // Straddling the viewport: pinned to viewport top
        assert_eq!(
            position_mode(Rect::new(0.0, -100.0, 600.0, 2000.0), 800.0),
            PositionMode::FixedTop
        );
        // Scrolled past: parked at container bottom
        assert_eq!(
            position_mode(Rect::new(0.0, -1500.0, 600.0, 2000.0), 800.0),
            PositionMode::AbsoluteBottom
        );
        // Not yet reached: parked at container top
        assert_eq!(
            position_mode(Rect::new(0.0, 200.0, 600.0, 2000.0), 800.0),
            PositionMode::AbsoluteTop
        );
    }

    #[test]
    fn window_of_interest() {
        // top below the trigger line, bottom past half viewport
        assert!(in_window(Rect::new(0.0, 100.0, 600.0, 2000.0), 1000.0, 0.5));
        // not yet entered
        assert!(!in_window(Rect::new(0.0, 600.0, 600.0, 2000.0), 1000.0, 0.5));
        // fully scrolled past
        assert!(!in_window(Rect::new(0.0, -1800.0, 600.0, 2000.0), 1000.0, 0.5));
    }

    #[test]
    fn last_crossed_step_wins() {
        let tops = [0.0, 400.0, 1600.0];
        // Nothing shifted, line at 500: steps 0 and 1 qualify, last wins
        assert_eq!(active_step(&tops, 0.0, 0.0, 500.0), Some(1));
        // Shift down by 1200: all three qualify
        assert_eq!(active_step(&tops, -1200.0, 0.0, 500.0), Some(2));
        // Shift up past the line: none qualify
        assert_eq!(active_step(&tops, 600.0, 0.0, 500.0), None);
    }

    #[test]
    fn active_step_moves_backward_on_scroll_up() {
        let tops = [0.0, 400.0, 1600.0];
        assert_eq!(active_step(&tops, -500.0, 0.0, 300.0), Some(1));
        assert_eq!(active_step(&tops, -200.0, 0.0, 300.0), Some(0));
    }

    #[test]
    fn emphasis_dims_unreached_steps() {
        assert_eq!(emphasis(4, Some(2), 0.25), vec![1.0, 1.0, 1.0, 0.25]);
        assert_eq!(emphasis(3, None, 0.25), vec![0.25, 0.25, 0.25]);
        assert_eq!(emphasis(2, Some(1), 0.25), vec![1.0, 1.0]);
    }
}
