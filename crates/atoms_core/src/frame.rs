//! Frame loop with an owned stop handle
//!
//! Controllers that poll the stage (scroll watching, embed height watching)
//! run their per-frame work from a [`FrameLoop`]: a background thread ticking
//! at a target rate until its handle is stopped. The handle stops the loop
//! deterministically on [`FrameHandle::stop`] and again on `Drop`, so a
//! watcher's lifetime is bound to the component that owns it rather than
//! running until the process exits.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Per-frame callback driven by a [`FrameLoop`]
pub type FrameCallback = Arc<dyn Fn() + Send + Sync>;

/// Background frame driver
pub struct FrameLoop {
    target_fps: u32,
}

impl FrameLoop {
    /// Create a loop ticking at the given rate
    pub fn new(target_fps: u32) -> Self {
        Self {
            target_fps: target_fps.max(1),
        }
    }

    /// Create a loop ticking at the given interval
    pub fn with_interval(interval: Duration) -> Self {
        let micros = interval.as_micros().max(1) as u64;
        Self::new((1_000_000 / micros).max(1) as u32)
    }

    /// Spawn the background thread and start ticking
    pub fn start(self, tick: FrameCallback) -> FrameHandle {
        let stop_flag = Arc::new(AtomicBool::new(false));
        let thread_flag = Arc::clone(&stop_flag);
        let frame_duration = Duration::from_micros(1_000_000 / u64::from(self.target_fps));

        tracing::debug!(fps = self.target_fps, "frame loop started");

        let thread_handle = thread::spawn(move || {
            while !thread_flag.load(Ordering::Relaxed) {
                let start = Instant::now();
                tick();
                let elapsed = start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        });

        FrameHandle {
            stop_flag,
            thread_handle: Some(thread_handle),
        }
    }
}

/// Owned handle to a running [`FrameLoop`]
///
/// Dropping the handle stops the loop.
pub struct FrameHandle {
    stop_flag: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl FrameHandle {
    /// Signal the loop to stop and join the thread
    pub fn stop(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
            tracing::debug!("frame loop stopped");
        }
    }

    /// Whether the loop is still running
    pub fn is_running(&self) -> bool {
        self.thread_handle.is_some()
    }
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn ticks_until_stopped() {
        let count = Arc::new(AtomicUsize::new(0));
        let tick_count = Arc::clone(&count);

        let mut handle = FrameLoop::new(200).start(Arc::new(move || {
            tick_count.fetch_add(1, Ordering::Relaxed);
        }));

        thread::sleep(Duration::from_millis(50));
        handle.stop();
        let at_stop = count.load(Ordering::Relaxed);
        assert!(at_stop > 0);
        assert!(!handle.is_running());

        // No ticks after stop
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::Relaxed), at_stop);
    }

    #[test]
    fn drop_stops_the_loop() {
        let count = Arc::new(AtomicUsize::new(0));
        let tick_count = Arc::clone(&count);

        {
            let _handle = FrameLoop::new(200).start(Arc::new(move || {
                tick_count.fetch_add(1, Ordering::Relaxed);
            }));
            thread::sleep(Duration::from_millis(20));
        }

        let at_drop = count.load(Ordering::Relaxed);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::Relaxed), at_drop);
    }

    #[test]
    fn interval_constructor() {
        let frame_loop = FrameLoop::with_interval(Duration::from_millis(200));
        assert_eq!(frame_loop.target_fps, 5);
    }
}
