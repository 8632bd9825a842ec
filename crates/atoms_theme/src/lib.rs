//! Atoms Theme
//!
//! Colour and label lookup tables for the election atoms: normalized party
//! tokens with CSS classes and chart colours, display-name shortening, and
//! the categorical fallback palette.
//!
//! # Example
//!
//! ```rust
//! use atoms_theme::Party;
//!
//! let party = Party::from_label("Australian Labor Party");
//! assert_eq!(party.css_class(), "alp");
//! assert_eq!(party.hex(), "#d40000");
//! ```

pub mod palette;
pub mod party;

pub use palette::{series_color, DEFAULT_PALETTE};
pub use party::{short_name, Party};
