use std::collections::BTreeSet;

use virtual_scroll::{Bounds, Easing, ScrollMetrics, VirtualScrollEvent, VirtualScrollOptions};
use virtual_scroll_adapter::{
    DragSurface, ElementId, FrameToken, Geometry, Scheduler, VirtualScroll,
};

/// A headless scroll container: no elements, just a scroll position and a frame queue.
#[derive(Default)]
struct Headless {
    scroll_top: f64,
    next: u64,
    frames: BTreeSet<u64>,
}

impl Geometry for Headless {
    fn bounding_box(&self, _element: ElementId) -> Option<Bounds> {
        None
    }

    fn container_bounds(&self) -> Bounds {
        Bounds::from_origin_size(0.0, 0.0, 320.0, 400.0)
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: self.scroll_top,
            scroll_height: 200_000.0,
            client_width: 320.0,
            client_height: 400.0,
            ..ScrollMetrics::default()
        }
    }

    fn set_scroll_top(&mut self, scroll_top: f64) {
        self.scroll_top = scroll_top;
    }

    fn element_at_point(&self, _x: f64, _y: f64) -> Option<ElementId> {
        None
    }

    fn set_hit_testable(&mut self, _element: ElementId, hit_testable: bool) -> bool {
        hit_testable
    }

    fn has_class(&self, _element: ElementId, _class: &str) -> bool {
        false
    }
}

impl Scheduler for Headless {
    fn request_frame(&mut self) -> FrameToken {
        self.next += 1;
        self.frames.insert(self.next);
        FrameToken(self.next)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.frames.remove(&token.0);
    }
}

impl DragSurface for Headless {
    fn spawn_transit(&mut self, row: ElementId) -> ElementId {
        row
    }

    fn translate(&mut self, _transit: ElementId, _x: f64, _y: f64) {}

    fn remove_transit(&mut self, _transit: ElementId) {}

    fn mark_drag_source(&mut self, _row: ElementId, _active: bool) {}

    fn bind_session(&mut self, _target: ElementId) {}

    fn release_session(&mut self) {}
}

fn main() {
    // Example: the component driving an animated scroll without holding any UI objects.
    //
    // An adapter would:
    // - forward scroll events to `on_scroll`
    // - fire requested frames back into `on_frame(token, now_ms, ..)`
    // - render rows `start..end` whenever an `Update(Some(..))` arrives
    let options = VirtualScrollOptions::new(10_000, 20.0)
        .with_scroll_animation(240, Easing::EaseOutCubic)
        .with_on_event(Some(|e: &VirtualScrollEvent| {
            match e {
                VirtualScrollEvent::Update(Some(index)) => {
                    println!("  render {:?} at y={}", index.range(), index.top_offset);
                }
                VirtualScrollEvent::ScrollEnd { completed } => {
                    println!("  scroll end completed={completed}");
                }
                _ => {}
            }
        }));
    let mut host = Headless::default();
    let mut vs = VirtualScroll::new(options);
    vs.mount(&mut host);

    let target = vs.scroll_to_index(2_000, 0.0, 0, &mut host);
    println!("target_scroll_top={target}");

    let mut now_ms = 0u64;
    while !host.frames.is_empty() {
        now_ms += 16;
        let due = std::mem::take(&mut host.frames);

        let before = host.scroll_top;
        for token in due {
            vs.on_frame(FrameToken(token), now_ms, &mut host);
        }
        if host.scroll_top != before {
            println!("t={now_ms} scroll_top={}", host.scroll_top);
            vs.on_scroll(&mut host);
        }
    }

    println!("done: scroll_top={} index={:?}", host.scroll_top, vs.index());
}
