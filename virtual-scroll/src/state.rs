/// A lightweight, serializable snapshot of the viewport geometry the windowing pass last saw.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_top: f64,
    pub container_width: f64,
    pub container_height: f64,
    pub scrollbar_width: f64,
    pub scrollbar_height: f64,
    pub row_height: f64,
    pub item_count: usize,
    pub padding: usize,
}

impl ViewportState {
    /// Total height of all rows, in pixels.
    pub fn scroll_height(&self) -> f64 {
        self.row_height * self.item_count as f64
    }

    /// Height available to rows.
    pub fn content_height(&self) -> f64 {
        (self.container_height - self.scrollbar_height).max(0.0)
    }
}
