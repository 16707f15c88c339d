use std::collections::HashMap;

use crate::ElementId;

/// Maps rendered elements to their slot in the rendered slice.
///
/// The consumer records the rows it renders, in order, each time a new window is emitted. Rows
/// are stored in an arena indexed by their position in the slice; descendant elements (drag
/// handles, labels) can be bound to their row so a pointer target resolves to its row without
/// walking the element tree.
#[derive(Clone, Debug, Default)]
pub struct RowRegistry {
    start: usize,
    rows: Vec<ElementId>,
    slots: HashMap<ElementId, usize>,
}

impl RowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the previous slice and starts recording one whose first row is logical `start`.
    pub fn begin_render(&mut self, start: usize) {
        self.rows.clear();
        self.slots.clear();
        self.start = start;
    }

    /// Records the next rendered row and returns its position in the slice.
    pub fn push_row(&mut self, row: ElementId) -> usize {
        let position = self.rows.len();
        self.rows.push(row);
        self.slots.insert(row, position);
        position
    }

    /// Associates a descendant element with an already recorded row.
    ///
    /// Returns `false` if `row` is not a recorded row.
    pub fn bind_part(&mut self, part: ElementId, row: ElementId) -> bool {
        let Some(position) = self.position_of(row) else {
            vwarn!(?part, ?row, "RowRegistry::bind_part: unknown row");
            return false;
        };
        self.slots.insert(part, position);
        true
    }

    /// Resolves a row or any bound descendant to `(position, row)`.
    pub fn row_for(&self, element: ElementId) -> Option<(usize, ElementId)> {
        let position = *self.slots.get(&element)?;
        let row = *self.rows.get(position)?;
        Some((position, row))
    }

    /// Position of `row` in the rendered slice; `None` for unknown elements and for parts.
    pub fn position_of(&self, row: ElementId) -> Option<usize> {
        let position = *self.slots.get(&row)?;
        (self.rows.get(position) == Some(&row)).then_some(position)
    }

    /// Logical index of the row `element` belongs to.
    pub fn logical_index_of(&self, element: ElementId) -> Option<usize> {
        self.row_for(element)
            .map(|(position, _)| self.start + position)
    }

    pub fn row_at(&self, position: usize) -> Option<ElementId> {
        self.rows.get(position).copied()
    }

    /// Logical index of the first recorded row.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.begin_render(0);
    }
}
