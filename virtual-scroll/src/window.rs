use crate::Index;

/// Maps a scroll position to the buffered render window.
///
/// Returns `None` when no window should be emitted:
/// - `scroll_top` is negative (elastic overscroll above the top), or
/// - any input is non-finite, or `row_height` is not positive (the division would produce NaN).
///
/// A `scroll_top` past the end of the content is clamped to the content height, and a negative
/// `container_height` counts as an empty viewport.
pub fn compute_window(
    scroll_top: f64,
    container_height: f64,
    row_height: f64,
    item_count: usize,
    padding: usize,
) -> Option<Index> {
    if !scroll_top.is_finite() || !container_height.is_finite() || !row_height.is_finite() {
        return None;
    }
    if row_height <= 0.0 || scroll_top < 0.0 {
        return None;
    }

    let scroll_height = row_height * item_count as f64;
    let rows_above = scroll_top.min(scroll_height) / row_height;
    let rows_in_view = (container_height.max(0.0) / row_height).ceil() as usize;

    // `as` saturates, and both ends are clamped to `item_count` anyway.
    let first = (rows_above.floor() as usize).min(item_count);
    let last = (rows_above.ceil() as usize)
        .saturating_add(rows_in_view)
        .min(item_count);

    let start = first.saturating_sub(padding);
    let end = last.saturating_add(padding).min(item_count);

    Some(Index {
        first,
        last,
        start,
        end,
        top_offset: row_height * start as f64,
    })
}

/// Stateful wrapper around [`compute_window`] that only reports changed windows.
///
/// A window is reported when its `(start, end)` pair differs from the previously reported one.
/// Invalid inputs never replace the last valid window.
#[derive(Clone, Debug, Default)]
pub struct WindowCalculator {
    previous: Option<(usize, usize)>,
    current: Option<Index>,
}

impl WindowCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the window and returns it if the rendered range changed.
    pub fn update(
        &mut self,
        scroll_top: f64,
        container_height: f64,
        row_height: f64,
        item_count: usize,
        padding: usize,
    ) -> Option<Index> {
        let Some(index) =
            compute_window(scroll_top, container_height, row_height, item_count, padding)
        else {
            vtrace!(scroll_top, row_height, "WindowCalculator::update: no window");
            return None;
        };

        let range = (index.start, index.end);
        if self.previous == Some(range) {
            return None;
        }

        vtrace!(
            first = index.first,
            last = index.last,
            start = index.start,
            end = index.end,
            "WindowCalculator::update"
        );
        self.previous = Some(range);
        self.current = Some(index);
        Some(index)
    }

    /// The last window reported by [`Self::update`].
    pub fn current(&self) -> Option<Index> {
        self.current
    }

    /// Forgets the previously reported range so the next valid update is reported again.
    ///
    /// The current window is kept until a new one replaces it.
    pub fn reset(&mut self) {
        self.previous = None;
    }
}
