//! Scrolly - scroll-triggered narrative step controller
//!
//! Maps a continuous scroll position onto a discrete sequence of narrative
//! steps sharing one visual panel, and fires registered callbacks on step
//! transitions. The controller consumes a [`Stage`](atoms_core::Stage)
//! capability rather than a document, so the same logic drives a browser
//! bridge, a native embedder, or the in-memory stage used below.
//!
//! - One layout sizing pass at construction reserves scroll distance per
//!   step and caches offsets.
//! - Every processed frame picks the *last* step whose adjusted top has
//!   crossed the trigger line; transitions dispatch triggers (1-based step
//!   numbers, all matches, registration order) and optionally dim
//!   not-yet-reached steps.
//! - Hosts without native sticky positioning get a three-mode position
//!   class computed per frame for the sticky layer.
//!
//! # Example
//!
//! ```rust
//! use atoms_core::{MemoryStage, Rect, Size};
//! use atoms_scrolly::{ScrollyConfig, ScrollyTeller, Trigger};
//!
//! let mut stage = MemoryStage::new(Size::new(1024.0, 1000.0));
//! stage.add_element(&["scroll-wrapper"], Rect::new(0.0, 0.0, 600.0, 500.0));
//! let track = stage.add_element(&["scroll-text"], Rect::new(0.0, 0.0, 600.0, 1500.0));
//! stage.add_child(track, &["scroll-inner"], Rect::new(0.0, 0.0, 600.0, 500.0));
//! let wrapper = stage.add_child(track, &["scroll-text__div"], Rect::new(0.0, 100.0, 600.0, 200.0));
//! stage.add_child(wrapper, &["scroll-text__inner"], Rect::new(0.0, 100.0, 600.0, 200.0));
//!
//! let mut scrolly = ScrollyTeller::new(&mut stage, ScrollyConfig::default()).unwrap();
//! scrolly.add_trigger(Trigger::new(1, || println!("entered the first step")));
//!
//! stage.set_scroll_y(50.0);
//! scrolly.check_frame(&mut stage);
//! assert_eq!(scrolly.active_step(), Some(0));
//! ```

pub mod controller;
pub mod detect;
pub mod error;
pub mod layout;
pub mod trigger;
pub mod watcher;

pub use controller::{classes, ScrollyConfig, ScrollyTeller};
pub use detect::{active_step, emphasis, in_window, position_mode};
pub use error::{Result, ScrollyError};
pub use layout::{reserved_height, StepLayout};
pub use trigger::{Trigger, TriggerRegistry};
pub use watcher::{watch_scroll, watch_scroll_at, ScrollyHandle};
