//! Host-driven state for the `virtual-scroll` crate.
//!
//! The `virtual-scroll` crate is UI-agnostic and holds only the pure math. This crate provides
//! the stateful parts a component needs on top of it:
//!
//! - A scroll controller that coalesces scroll/resize events into one windowing pass per frame
//!   and animates `scroll_to_index`
//! - A drag-reorder engine with edge auto-scrolling
//! - A row registry mapping rendered elements to logical indexes
//!
//! Nothing here holds UI objects. The host implements [`Geometry`], [`Scheduler`] and
//! [`DragSurface`] for its element handles and forwards events and fired frame tokens.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod autoscroll;
mod component;
mod controller;
mod drag;
mod host;
mod pointer;
mod registry;
mod tween;


pub use autoscroll::AutoScroll;
pub use component::VirtualScroll;
pub use controller::ScrollController;
pub use drag::{DragEngine, DragSession};
pub use host::{
    DragSurface, ElementId, FrameToken, Geometry, Host, Scheduler, elements_from_point,
};
pub use pointer::PointerEvent;
pub use registry::RowRegistry;
pub use tween::Tween;
