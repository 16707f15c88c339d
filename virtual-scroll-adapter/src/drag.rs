use virtual_scroll::{
    Bounds, Direction, DropCandidate, Index, Point, ReorderIndex, VirtualScrollEvent,
    VirtualScrollOptions, end_of_list, resolve_drop,
};

use crate::{
    AutoScroll, ElementId, FrameToken, Geometry, Host, PointerEvent, RowRegistry,
    elements_from_point,
};

/// State of one drag gesture, from pointer down to drop.
#[derive(Clone, Debug)]
pub struct DragSession {
    origin_index: usize,
    origin_row: ElementId,
    transit: ElementId,
    last_pointer: Point,
    /// Pointer position relative to the dragged row's top-left corner at pointer down.
    initial_offset: Point,
    /// Container box captured at pointer down.
    container: Bounds,
    row_width: f64,
    /// Translation of the transit clone relative to the container's top-left corner.
    offset: Point,
    reorder: ReorderIndex,
}

impl DragSession {
    pub fn origin_index(&self) -> usize {
        self.origin_index
    }

    pub fn origin_row(&self) -> ElementId {
        self.origin_row
    }

    pub fn transit(&self) -> ElementId {
        self.transit
    }

    pub fn last_pointer(&self) -> Point {
        self.last_pointer
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn container(&self) -> Bounds {
        self.container
    }

    /// The drop the gesture would currently produce.
    pub fn reorder(&self) -> ReorderIndex {
        self.reorder
    }

    /// Moves the transit clone to follow `pointer`.
    fn drag<H: Host + ?Sized>(&mut self, pointer: Point, options: &VirtualScrollOptions, host: &mut H) {
        self.last_pointer = pointer;
        let c = self.container;
        let x = pointer.x - self.initial_offset.x - c.left;
        let mut y = pointer.y - self.initial_offset.y - c.top;
        if options.contain_drag_to_viewport {
            y = y.min(c.height - options.row_height).max(0.0);
        }

        if options.allow_horizontal_drag {
            self.offset.x = x;
        }
        if options.allow_vertical_drag {
            self.offset.y = y;
        }
        host.translate(self.transit, self.offset.x, self.offset.y);
    }

    fn scroll_direction(&self, pointer: Point, row_height: f64) -> Option<Direction> {
        if pointer.y < self.container.top + row_height {
            Some(Direction::Up)
        } else if pointer.y > self.container.bottom - row_height {
            Some(Direction::Down)
        } else {
            None
        }
    }

    /// Hit tests under the transit clone and resolves where a drop would land.
    fn resolve_drop_target<H: Geometry + ?Sized>(
        &self,
        registry: &RowRegistry,
        options: &VirtualScrollOptions,
        host: &mut H,
    ) -> ReorderIndex {
        let c = self.container;
        let row_height = options.row_height;
        let left = c.left + self.offset.x;
        let center_y = c.top + self.offset.y + row_height / 2.0;

        let hit_x = if c.contains_x(left) {
            Some(left)
        } else if c.contains_x(left + self.row_width) {
            Some(left + self.row_width)
        } else {
            None
        };
        let hit = hit_x.and_then(|x| {
            elements_from_point(host, x, center_y)
                .into_iter()
                .find_map(|el| registry.position_of(el).map(|position| (position, el)))
        });

        let Some((position, row)) = hit else {
            return if options.contain_drag_to_viewport {
                end_of_list(self.origin_index, options.item_count)
            } else {
                self.reorder
            };
        };
        let Some(row_box) = host.bounding_box(row) else {
            vwarn!(?row, "DragSession: hovered row has no bounding box");
            return self.reorder;
        };

        resolve_drop(DropCandidate {
            origin: self.origin_index,
            // Hit elements come from the rendered slice, which may lag the last emitted window.
            target: registry.start() + position,
            dragged_center_y: center_y - c.top,
            target_center_y: row_box.center_y() - c.top,
            row_height,
            item_count: options.item_count,
        })
    }
}

/// Drag-to-reorder state machine: idle, or exactly one [`DragSession`].
///
/// The host forwards pointer events. Move/up/cancel events only reach the engine between
/// [`crate::DragSurface::bind_session`] and [`crate::DragSurface::release_session`].
#[derive(Clone, Debug, Default)]
pub struct DragEngine {
    session: Option<DragSession>,
    auto_scroll: AutoScroll,
}

impl DragEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn auto_scroll(&self) -> &AutoScroll {
        &self.auto_scroll
    }

    /// Starts a drag if `event` landed on a drag handle inside a rendered row.
    ///
    /// Returns whether a session started. Emits `DragStart`.
    pub fn pointer_down<H: Host + ?Sized>(
        &mut self,
        event: &PointerEvent,
        window: Option<Index>,
        registry: &RowRegistry,
        options: &VirtualScrollOptions,
        host: &mut H,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        let Some(mut session) = Self::start_session(event, window, registry, options, host) else {
            return false;
        };

        let pointer = session.last_pointer;
        session.drag(pointer, options, host);
        self.auto_scroll
            .set_direction(session.scroll_direction(pointer, options.row_height), host);

        vdebug!(origin = session.origin_index, "DragEngine: drag start");
        options.notify(VirtualScrollEvent::DragStart(session.reorder));
        self.session = Some(session);
        true
    }

    fn start_session<H: Host + ?Sized>(
        event: &PointerEvent,
        window: Option<Index>,
        registry: &RowRegistry,
        options: &VirtualScrollOptions,
        host: &mut H,
    ) -> Option<DragSession> {
        let target = event.target()?;
        let pointer = event.point()?;
        if !host.has_class(target, &options.draggable_class) {
            return None;
        }
        // Nothing has been rendered yet.
        if window.is_none() {
            return None;
        }
        let (position, row) = registry.row_for(target)?;
        let row_box = host.bounding_box(row)?;
        let container = host.container_bounds();

        let origin_index = registry.start() + position;
        let transit = host.spawn_transit(row);
        host.mark_drag_source(row, true);
        host.bind_session(target);

        Some(DragSession {
            origin_index,
            origin_row: row,
            transit,
            last_pointer: pointer,
            initial_offset: Point::new(pointer.x - row_box.left, pointer.y - row_box.top),
            container,
            row_width: row_box.width,
            offset: Point::new(row_box.left - container.left, row_box.top - container.top),
            reorder: ReorderIndex::new(origin_index),
        })
    }

    /// Follows the pointer, steers auto-scrolling and emits `Dragging`.
    pub fn pointer_move<H: Host + ?Sized>(
        &mut self,
        event: &PointerEvent,
        registry: &RowRegistry,
        options: &VirtualScrollOptions,
        host: &mut H,
    ) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(pointer) = event.point() else {
            return;
        };

        session.drag(pointer, options, host);
        self.auto_scroll
            .set_direction(session.scroll_direction(pointer, options.row_height), host);

        session.reorder = session.resolve_drop_target(registry, options, host);
        vtrace!(reorder = ?session.reorder, "DragEngine: dragging");
        options.notify(VirtualScrollEvent::Dragging(session.reorder));
    }

    /// Drops the dragged row and emits `DragEnd`.
    pub fn pointer_up<H: Host + ?Sized>(
        &mut self,
        event: &PointerEvent,
        registry: &RowRegistry,
        options: &VirtualScrollOptions,
        host: &mut H,
    ) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        // Events without a position drop the row where it was last held.
        if let Some(pointer) = event.point() {
            session.drag(pointer, options, host);
        }

        session.reorder = session.resolve_drop_target(registry, options, host);
        self.release(&session, host);

        vdebug!(reorder = ?session.reorder, "DragEngine: drag end");
        options.notify(VirtualScrollEvent::DragEnd(session.reorder));
    }

    /// A cancelled gesture still drops where the row was last held.
    pub fn pointer_cancel<H: Host + ?Sized>(
        &mut self,
        event: &PointerEvent,
        registry: &RowRegistry,
        options: &VirtualScrollOptions,
        host: &mut H,
    ) {
        self.pointer_up(event, registry, options, host);
    }

    /// Routes a fired frame to the auto-scroll driver.
    pub fn on_frame<H: Host + ?Sized>(
        &mut self,
        token: FrameToken,
        options: &VirtualScrollOptions,
        host: &mut H,
    ) -> bool {
        self.auto_scroll
            .on_frame(token, options.row_height, options.item_count, host)
    }

    /// Releases the session without emitting anything.
    pub fn teardown<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(session) = self.session.take() {
            vdebug!(origin = session.origin_index, "DragEngine: torn down mid-drag");
            self.release(&session, host);
        }
        self.auto_scroll.stop(host);
    }

    fn release<H: Host + ?Sized>(&mut self, session: &DragSession, host: &mut H) {
        host.mark_drag_source(session.origin_row, false);
        self.auto_scroll.stop(host);
        host.remove_transit(session.transit);
        host.release_session();
    }
}
