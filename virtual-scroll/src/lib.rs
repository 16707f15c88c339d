//! Headless windowing and reorder math for fixed-row-height virtual lists.
//!
//! For host-driven state (scroll controller, drag engine, auto-scroll), see the
//! `virtual-scroll-adapter` crate.
//!
//! This crate focuses on the pure parts of a virtual scroll component: mapping a scroll offset to
//! a buffered render window, resolving where a dragged row would land, and the easing curves used
//! to animate programmatic scrolling.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the container height and scroll offset
//! - the (uniform) row height and item count
//! - vertical centers of the dragged row and the row under it while reordering
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod drop;
mod easing;
mod error;
mod options;
mod state;
mod types;
mod window;


pub use drop::{DropCandidate, accuracy, end_of_list, resolve_drop};
pub use easing::{Easing, ParseEasingError};
pub use error::OptionsError;
pub use options::{DEFAULT_PADDING, OnEventCallback, VirtualScrollOptions};
pub use state::ViewportState;
pub use types::{Bounds, Direction, Index, Point, ReorderIndex, ScrollMetrics, VirtualScrollEvent};
pub use window::{WindowCalculator, compute_window};
