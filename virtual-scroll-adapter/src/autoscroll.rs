use virtual_scroll::Direction;

use crate::{FrameToken, Geometry, Scheduler};

/// Scrolls the container while a dragged row is held near one of its edges.
///
/// Runs one step per frame for as long as a direction is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoScroll {
    direction: Option<Direction>,
    token: Option<FrameToken>,
}

impl AutoScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pixels moved per frame: grows with the list length, capped at one row.
    pub fn step(row_height: f64, item_count: usize) -> f64 {
        let step = (row_height * item_count as f64 / 1000.0).ceil() + 5.0;
        step.min(row_height)
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }

    /// Starts, redirects or (with `None`) stops auto-scrolling.
    pub fn set_direction<H: Scheduler + ?Sized>(&mut self, direction: Option<Direction>, host: &mut H) {
        if direction.is_none() {
            self.stop(host);
            return;
        }
        if self.direction != direction {
            vdebug!(?direction, "AutoScroll::set_direction");
        }
        self.direction = direction;
        if self.token.is_none() {
            self.token = Some(host.request_frame());
        }
    }

    pub fn stop<H: Scheduler + ?Sized>(&mut self, host: &mut H) {
        if let Some(token) = self.token.take() {
            host.cancel_frame(token);
        }
        self.direction = None;
    }

    /// Handles a fired frame. Returns `false` if the token is not the one this driver is
    /// waiting for.
    pub fn on_frame<H: Geometry + Scheduler + ?Sized>(
        &mut self,
        token: FrameToken,
        row_height: f64,
        item_count: usize,
        host: &mut H,
    ) -> bool {
        if self.token != Some(token) {
            return false;
        }
        self.token = None;

        let Some(direction) = self.direction else {
            return true;
        };
        if !row_height.is_finite() || row_height <= 0.0 {
            self.direction = None;
            return true;
        }

        let step = Self::step(row_height, item_count);
        let max = row_height * item_count as f64;
        let current = host.scroll_metrics().scroll_top;
        let next = match direction {
            Direction::Up => current - step,
            Direction::Down => current + step,
        }
        .min(max)
        .max(0.0);
        if next != current {
            vtrace!(?direction, next, "AutoScroll: step");
            host.set_scroll_top(next);
        }

        self.token = Some(host.request_frame());
        true
    }
}
