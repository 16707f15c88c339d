use core::ops::Range;

/// The buffered render window of a virtual list.
///
/// `first..last` is the exactly visible row range; `start..end` is that range expanded by the
/// configured padding and clamped to `0..=item_count`. Consumers render `start..end` and translate
/// the rendered slice down by `top_offset`.
///
/// Always satisfies `start <= first <= last <= end`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Index {
    pub first: usize,
    pub last: usize, // exclusive
    pub start: usize,
    pub end: usize, // exclusive
    /// `row_height * start`, in pixels.
    pub top_offset: f64,
}

impl Index {
    pub fn visible_len(&self) -> usize {
        self.last - self.first
    }

    pub fn rendered_len(&self) -> usize {
        self.end - self.start
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }

    /// Maps a position inside the rendered slice to its logical index.
    pub fn logical(&self, position: usize) -> usize {
        self.start + position
    }
}

/// The state of a reorder gesture.
///
/// `start` is the logical index the drag began on. `end` is the resolved insertion index and
/// `target` the logical row currently under the dragged row; both stay `None` until the first
/// drop resolution. `accuracy` is a percentage in `[0, 100]` describing how well the dragged row
/// is centered on `target`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReorderIndex {
    pub start: usize,
    pub end: Option<usize>,
    pub target: Option<usize>,
    pub accuracy: Option<f64>,
}

impl ReorderIndex {
    pub fn new(start: usize) -> Self {
        Self {
            start,
            ..Self::default()
        }
    }

    /// Returns `true` when the resolved drop would actually move the row.
    pub fn is_move(&self) -> bool {
        self.end.is_some_and(|end| end != self.start)
    }
}

/// Events emitted by a virtual scroll component.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VirtualScrollEvent {
    /// A new render window. `None` signals transient overscroll: keep rendering the previous one.
    Update(Option<Index>),
    DragStart(ReorderIndex),
    Dragging(ReorderIndex),
    DragEnd(ReorderIndex),
    /// A `scroll_to_index` animation ended. `completed` is `false` when it was cancelled or
    /// superseded before reaching its target.
    ScrollEnd { completed: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned box in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.left && x <= self.right
    }
}

/// Scroll geometry of the scroll container, as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_width: f64,
    pub client_height: f64,
    pub scrollbar_width: f64,
    pub scrollbar_height: f64,
}

impl ScrollMetrics {
    /// Height available to rows (client height minus a horizontal scrollbar).
    pub fn content_height(&self) -> f64 {
        (self.client_height - self.scrollbar_height).max(0.0)
    }

    pub fn content_width(&self) -> f64 {
        (self.client_width - self.scrollbar_width).max(0.0)
    }

    /// Elastic overscroll: above the top, or past the bottom of the scrollable content.
    pub fn is_overscrolled(&self) -> bool {
        if self.scroll_top < 0.0 {
            return true;
        }
        self.scroll_top > 0.0 && self.scroll_height - self.scroll_top - self.client_height < 0.0
    }
}
