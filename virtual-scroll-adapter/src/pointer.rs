use virtual_scroll::Point;

use crate::ElementId;

/// A pointer event as delivered by the host.
///
/// Both mouse and touch input drive a drag. Any other input shape is carried as `Other`: it cannot
/// start or move a drag, but it still ends one.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerEvent {
    Mouse {
        target: Option<ElementId>,
        x: f64,
        y: f64,
    },
    Touch {
        target: Option<ElementId>,
        /// Client positions of the touches that changed in this event.
        changed_touches: Vec<Point>,
    },
    Other {
        target: Option<ElementId>,
    },
}

impl PointerEvent {
    pub fn mouse(target: ElementId, x: f64, y: f64) -> Self {
        Self::Mouse {
            target: Some(target),
            x,
            y,
        }
    }

    pub fn touch(target: ElementId, x: f64, y: f64) -> Self {
        Self::Touch {
            target: Some(target),
            changed_touches: vec![Point::new(x, y)],
        }
    }

    pub fn target(&self) -> Option<ElementId> {
        match self {
            Self::Mouse { target, .. } | Self::Touch { target, .. } | Self::Other { target } => {
                *target
            }
        }
    }

    /// The pointer position: the mouse position, or the first changed touch.
    pub fn point(&self) -> Option<Point> {
        match self {
            Self::Mouse { x, y, .. } => Some(Point::new(*x, *y)),
            Self::Touch {
                changed_touches, ..
            } => changed_touches.first().copied(),
            Self::Other { .. } => None,
        }
    }
}
