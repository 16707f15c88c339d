use thiserror::Error;

/// A configuration problem reported by [`crate::VirtualScrollOptions::validate`].
///
/// Runtime paths never fail: an invalid row height simply suppresses window updates. Validation
/// exists for adapters that prefer to reject bad input up front.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum OptionsError {
    #[error("row height must be a finite, positive number of pixels (got {0})")]
    InvalidRowHeight(f64),
    #[error("draggable marker class must not be empty")]
    EmptyDraggableClass,
    #[error("dragging is enabled on neither axis")]
    NoDragAxis,
    #[error("scroll animation duration must be at least 1ms")]
    ZeroScrollDuration,
}
