// Example: adapter-driven eased scrolling (restarted from the current position on interruption).
use virtual_scroll::{Easing, compute_window};

const ROW_HEIGHT: f64 = 20.0;
const ITEM_COUNT: usize = 10_000;

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f64,
    to: f64,
    start_ms: u64,
    duration_ms: u64,
    easing: Easing,
}

impl Tween {
    fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    fn sample(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = elapsed as f64 / self.duration_ms as f64;
        (self.from + (self.to - self.from) * self.easing.sample(t)).round()
    }
}

fn main() {
    let easing: Easing = std::env::args()
        .nth(1)
        .and_then(|name| name.parse().ok())
        .unwrap_or(Easing::EaseInOutQuad);
    println!("easing={easing}");

    let mut tween = Tween::new(0.0, 2_000.0 * ROW_HEIGHT, 0, 240, easing);
    let mut now_ms = 0u64;
    let mut scroll_top = 0.0;

    while !tween.is_done(now_ms) {
        // Simulate a 60fps "tick".
        now_ms += 16;
        scroll_top = tween.sample(now_ms);

        if let Some(index) = compute_window(scroll_top, 400.0, ROW_HEIGHT, ITEM_COUNT, 3) {
            println!("t={now_ms}ms scroll_top={scroll_top} render={:?}", index.range());
        }

        // User input interrupts the animation at ~120ms.
        if (120..120 + 16).contains(&now_ms) {
            tween = Tween::new(scroll_top, 7_500.0 * ROW_HEIGHT, now_ms, 300, Easing::EaseOutCubic);
        }
    }

    println!("done: scroll_top={scroll_top}");
}
