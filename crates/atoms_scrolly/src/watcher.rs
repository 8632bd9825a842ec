//! Background scroll watcher
//!
//! [`watch_scroll`] takes ownership of a controller and its stage and drives
//! [`ScrollyTeller::check_frame`] from a [`FrameLoop`]. The returned
//! [`ScrollyHandle`] is the owner of the loop: `stop()` halts it
//! deterministically and dropping the handle does the same, so the watcher's
//! lifetime is tied to the component that created it.

use std::sync::{Arc, Mutex};

use atoms_core::{FrameHandle, FrameLoop, Stage};

use crate::controller::ScrollyTeller;
use crate::trigger::Trigger;

/// Default frame rate for the watcher
const DEFAULT_FPS: u32 = 60;

struct Watched<S> {
    controller: ScrollyTeller,
    stage: S,
}

/// Owned handle to a running scroll watcher
pub struct ScrollyHandle<S> {
    watched: Arc<Mutex<Watched<S>>>,
    frame: FrameHandle,
}

impl<S: Stage + Send + 'static> ScrollyHandle<S> {
    /// Stop the frame loop and join its thread
    pub fn stop(&mut self) {
        self.frame.stop();
    }

    /// Whether the watcher is still running
    pub fn is_running(&self) -> bool {
        self.frame.is_running()
    }

    /// Current active step index, 0-based
    pub fn active_step(&self) -> Option<usize> {
        self.watched.lock().unwrap().controller.active_step()
    }

    /// Register a trigger while the watcher is running
    pub fn add_trigger(&self, trigger: Trigger) {
        self.watched.lock().unwrap().controller.add_trigger(trigger);
    }

    /// Run a closure against the stage (for hosts that feed scroll state in)
    pub fn with_stage<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.watched.lock().unwrap().stage)
    }
}

/// Start watching scroll at the default frame rate
pub fn watch_scroll<S: Stage + Send + 'static>(
    controller: ScrollyTeller,
    stage: S,
) -> ScrollyHandle<S> {
    watch_scroll_at(controller, stage, DEFAULT_FPS)
}

/// Start watching scroll at a caller-chosen frame rate
pub fn watch_scroll_at<S: Stage + Send + 'static>(
    controller: ScrollyTeller,
    stage: S,
    fps: u32,
) -> ScrollyHandle<S> {
    let watched = Arc::new(Mutex::new(Watched { controller, stage }));
    let tick_state = Arc::clone(&watched);

    let frame = FrameLoop::new(fps).start(Arc::new(move || {
        let mut state = tick_state.lock().unwrap();
        let Watched { controller, stage } = &mut *state;
        controller.check_frame(stage);
    }));

    tracing::debug!(fps, "scroll watcher started");

    ScrollyHandle { watched, frame }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ScrollyConfig;
    use atoms_core::{MemoryStage, Rect, Size};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    fn stage_with_steps() -> MemoryStage {
        let mut stage = MemoryStage::new(Size::new(1024.0, 1000.0));
        stage.add_element(&["scroll-wrapper"], Rect::new(0.0, 0.0, 600.0, 500.0));
        let track = stage.add_element(&["scroll-text"], Rect::new(0.0, 0.0, 600.0, 1700.0));
        stage.add_child(track, &["scroll-inner"], Rect::new(0.0, 0.0, 600.0, 500.0));
        for y in [100.0f32, 700.0, 1300.0] {
            let wrapper =
                stage.add_child(track, &["scroll-text__div"], Rect::new(0.0, y, 600.0, 400.0));
            stage.add_child(wrapper, &["scroll-text__inner"], Rect::new(0.0, y, 600.0, 400.0));
        }
        stage
    }

    #[test]
    fn watcher_detects_steps_and_stops() {
        let mut stage = stage_with_steps();
        let mut controller = ScrollyTeller::new(&mut stage, ScrollyConfig::default()).unwrap();

        let fired = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&fired);
        controller.add_trigger(Trigger::new(1, move || {
            count.fetch_add(1, Ordering::Relaxed);
        }));

        let mut handle = watch_scroll_at(controller, stage, 120);
        handle.with_stage(|s| s.set_scroll_y(50.0));
        thread::sleep(Duration::from_millis(60));

        assert_eq!(handle.active_step(), Some(0));
        assert_eq!(fired.load(Ordering::Relaxed), 1);

        handle.stop();
        assert!(!handle.is_running());
    }
}
