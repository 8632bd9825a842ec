//! Atoms Embed
//!
//! Atoms ship inside a host page's frame, and the frame has to be told how
//! tall its content is. [`resize_frame`] runs the one-shot sizing pass
//! (post the embed-size message, hide overflow, size the frame to the
//! target element); [`HeightWatcher`] keeps the frame in sync afterwards by
//! polling the host for height changes, with an owned handle that stops the
//! poll deterministically.
//!
//! The host side is a capability trait like the scrolly stage: the crate
//! decides *when* to resize, the embedder supplies the *how*.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use atoms_core::{FrameHandle, FrameLoop};

/// Extra room added below the content when the watcher resizes the frame,
/// so late-loading furniture does not clip
const RESIZE_PADDING: f32 = 100.0;

/// Default interval between height polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Host capability for frame sizing
pub trait EmbedHost {
    /// Whether the atom is actually inside a frame; everything is a no-op
    /// when it is not
    fn is_framed(&self) -> bool;

    /// Current document body height
    fn body_height(&self) -> f32;

    /// Current height of the atom's target element
    fn target_height(&self) -> f32;

    /// Post the AMP-style embed-size message to the parent
    fn post_embed_size(&mut self, height: f32);

    /// Hide document overflow so no scrollbars appear inside the frame
    fn hide_overflow(&mut self);

    /// Set the frame element's height
    fn set_frame_height(&mut self, height: f32);
}

/// One-shot frame sizing pass
///
/// No-op outside a frame. Inside one: posts the embed-size message with the
/// body height, hides overflow, and sizes the frame to the target element.
pub fn resize_frame<H: EmbedHost>(host: &mut H) {
    if !host.is_framed() {
        return;
    }
    let body = host.body_height();
    host.post_embed_size(body);
    host.hide_overflow();
    host.set_frame_height(host.target_height());
    tracing::debug!(body, "embed frame sized");
}

/// Polling watcher that keeps the frame height in sync with its content
pub struct HeightWatcher {
    frame: FrameHandle,
}

impl HeightWatcher {
    /// Start polling the host at [`DEFAULT_POLL_INTERVAL`]
    pub fn start<H: EmbedHost + Send + 'static>(host: H) -> Self {
        Self::start_with_interval(host, DEFAULT_POLL_INTERVAL)
    }

    /// Start polling at a caller-chosen interval
    pub fn start_with_interval<H: EmbedHost + Send + 'static>(
        host: H,
        interval: Duration,
    ) -> Self {
        let shared = Arc::new(Mutex::new(host));
        // f32 bits; heights are non-negative so the encoding is ordered
        let last_height = Arc::new(AtomicU32::new(0));

        let frame = FrameLoop::with_interval(interval).start(Arc::new(move || {
            let mut host = shared.lock().unwrap();
            let height = host.body_height();
            let previous = f32::from_bits(last_height.load(Ordering::Relaxed));
            if height != previous {
                last_height.store(height.to_bits(), Ordering::Relaxed);
                let target = host.target_height();
                host.set_frame_height(target + RESIZE_PADDING);
                tracing::debug!(height, target, "embed frame re-sized");
            }
        }));

        Self { frame }
    }

    /// Stop polling and join the watcher thread
    pub fn stop(&mut self) {
        self.frame.stop();
    }

    /// Whether the watcher is still polling
    pub fn is_running(&self) -> bool {
        self.frame.is_running()
    }
}
