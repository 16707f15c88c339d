// Example: computing render windows and resolving a drop.
use virtual_scroll::{DropCandidate, WindowCalculator, compute_window, resolve_drop};

fn main() {
    let index = compute_window(200.0, 400.0, 20.0, 1_000_000, 3);
    println!("window={index:?}");

    // A calculator only reports ranges that changed.
    let mut calc = WindowCalculator::new();
    for scroll_top in [0.0, 5.0, 20.0, 123_456.0, -10.0] {
        match calc.update(scroll_top, 400.0, 20.0, 1_000_000, 3) {
            Some(idx) => println!("scroll_top={scroll_top}: render {:?}", idx.range()),
            None => println!("scroll_top={scroll_top}: keep {:?}", calc.current().map(|i| i.range())),
        }
    }

    let drop = resolve_drop(DropCandidate {
        origin: 5,
        target: 3,
        dragged_center_y: 72.0,
        target_center_y: 70.0,
        row_height: 20.0,
        item_count: 1_000,
    });
    println!("drop={drop:?} moves={}", drop.is_move());
}
