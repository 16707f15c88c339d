use crate::ReorderIndex;

/// Inputs for resolving a drop onto a hovered row.
///
/// Both centers are vertical positions measured from the same origin (typically the container
/// top); only their difference matters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropCandidate {
    /// Logical index the drag started on.
    pub origin: usize,
    /// Logical index of the row under the dragged row.
    pub target: usize,
    pub dragged_center_y: f64,
    pub target_center_y: f64,
    pub row_height: f64,
    pub item_count: usize,
}

/// Percentage (one decimal) of how well two row centers `center_delta` pixels apart line up.
///
/// `100` when the centers coincide, `0` once they are a full row (or more) apart.
pub fn accuracy(center_delta: f64, row_height: f64) -> f64 {
    if !center_delta.is_finite() || !row_height.is_finite() || row_height <= 0.0 {
        return 0.0;
    }
    let percent = 100.0 * (1.0 - center_delta.abs() / row_height);
    ((percent * 10.0).round() / 10.0).clamp(0.0, 100.0)
}

/// Resolves the insertion index for a drop onto `candidate.target`.
///
/// A dragged row below the target's center inserts after it, above inserts before it. The
/// insertion index accounts for the origin row being removed first, so moving down past the
/// target lands on `target` rather than `target + 1`.
///
/// Dropping dead-center on an interior neighbour of the origin row is a no-op (`end == start`):
/// that position is indistinguishable from the origin row sliding half a row in either direction.
pub fn resolve_drop(candidate: DropCandidate) -> ReorderIndex {
    let DropCandidate {
        origin,
        target,
        dragged_center_y,
        target_center_y,
        row_height,
        item_count,
    } = candidate;
    let last_index = item_count.saturating_sub(1);
    let delta = dragged_center_y - target_center_y;

    let mut end = if delta > 0.0 {
        (target + usize::from(origin > target)).min(last_index)
    } else if delta < 0.0 {
        target.saturating_sub(usize::from(origin < target))
    } else {
        target
    };

    let accuracy = accuracy(delta, row_height);
    let interior = target > 0 && target < last_index;
    if accuracy == 100.0 && interior && origin.abs_diff(target) == 1 {
        end = origin;
    }

    ReorderIndex {
        start: origin,
        end: Some(end),
        target: Some(target),
        accuracy: Some(accuracy),
    }
}

/// The sentinel drop used when nothing is under the dragged row and dragging is contained to
/// the viewport: past the last row, with zero accuracy.
pub fn end_of_list(origin: usize, item_count: usize) -> ReorderIndex {
    ReorderIndex {
        start: origin,
        end: Some(item_count.saturating_sub(1)),
        target: Some(item_count),
        accuracy: Some(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(origin: usize, target: usize, delta: f64) -> DropCandidate {
        DropCandidate {
            origin,
            target,
            dragged_center_y: 100.0 + delta,
            target_center_y: 100.0,
            row_height: 20.0,
            item_count: 10,
        }
    }

    #[test]
    fn accuracy_is_rounded_to_one_decimal() {
        assert_eq!(accuracy(0.0, 20.0), 100.0);
        assert_eq!(accuracy(20.0, 20.0), 0.0);
        assert_eq!(accuracy(-5.0, 20.0), 75.0);
        assert_eq!(accuracy(1.0, 30.0), 96.7);
        assert_eq!(accuracy(45.0, 20.0), 0.0);
        assert_eq!(accuracy(1.0, 0.0), 0.0);
        assert_eq!(accuracy(f64::NAN, 20.0), 0.0);
    }

    #[test]
    fn below_center_inserts_after_target_when_moving_up() {
        let r = resolve_drop(candidate(7, 3, 4.0));
        assert_eq!(r.target, Some(3));
        assert_eq!(r.end, Some(4));
        assert_eq!(r.accuracy, Some(80.0));
    }

    #[test]
    fn below_center_lands_on_target_when_moving_down() {
        let r = resolve_drop(candidate(1, 3, 4.0));
        assert_eq!(r.end, Some(3));
    }

    #[test]
    fn above_center_inserts_before_target() {
        assert_eq!(resolve_drop(candidate(1, 5, -4.0)).end, Some(4));
        assert_eq!(resolve_drop(candidate(8, 5, -4.0)).end, Some(5));
        assert_eq!(resolve_drop(candidate(3, 0, -4.0)).end, Some(0));
    }

    #[test]
    fn after_last_row_is_clamped() {
        let r = resolve_drop(candidate(2, 9, 4.0));
        assert_eq!(r.end, Some(9));
        let r = resolve_drop(candidate(9, 9, 4.0));
        assert_eq!(r.end, Some(9));
    }

    #[test]
    fn dead_center_on_neighbour_does_not_move() {
        let r = resolve_drop(candidate(5, 4, 0.0));
        assert_eq!(r.end, Some(5));
        assert_eq!(r.start, 5);
        assert!(!r.is_move());

        let r = resolve_drop(candidate(5, 6, 0.0));
        assert_eq!(r.end, Some(5));
    }

    #[test]
    fn dead_center_on_edge_neighbour_still_moves() {
        let r = resolve_drop(candidate(1, 0, 0.0));
        assert_eq!(r.end, Some(0));
        let r = resolve_drop(candidate(8, 9, 0.0));
        assert_eq!(r.end, Some(9));
    }

    #[test]
    fn end_of_list_sentinel() {
        let r = end_of_list(4, 10);
        assert_eq!(r.target, Some(10));
        assert_eq!(r.end, Some(9));
        assert_eq!(r.accuracy, Some(0.0));
        assert_eq!(end_of_list(0, 0).end, Some(0));
    }
}
