//! Atoms Core
//!
//! Foundational primitives for the interactive atoms:
//!
//! - **Geometry**: viewport-coordinate points, sizes, and bounding boxes
//! - **Stage**: the capability trait a host supplies for document queries
//!   and style side effects, plus an in-memory backend for tests and
//!   headless embedding
//! - **Frame Loop**: a background frame driver with an owned stop handle
//!
//! # Example
//!
//! ```rust
//! use atoms_core::{MemoryStage, Rect, Size, Stage};
//!
//! let mut stage = MemoryStage::new(Size::new(1024.0, 768.0));
//! let panel = stage.add_element(&["scroll-wrapper"], Rect::new(0.0, 0.0, 600.0, 500.0));
//!
//! stage.set_scroll_y(100.0);
//! assert_eq!(stage.rect(panel).top(), -100.0);
//! ```

pub mod frame;
pub mod geometry;
pub mod memory;
pub mod stage;

pub use frame::{FrameCallback, FrameHandle, FrameLoop};
pub use geometry::{Point, Rect, Size};
pub use memory::MemoryStage;
pub use stage::{ElementId, PositionMode, Stage};
