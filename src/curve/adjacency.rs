//! Neighbor lookup along an ordered point sequence.

/// Returns `(prev, next)` for index `index` in a sequence of `count` points.
///
/// Closed sequences wrap around (`0` and `count - 1` are neighbors), open ones
/// clamp at the ends so the first point is its own `prev` and the last point
/// is its own `next`.
///
/// `count` must be at least 1.
#[inline]
pub const fn neighbors(index: usize, count: usize, closed: bool) -> (usize, usize) {
    if closed {
        ((index + count - 1) % count, (index + 1) % count)
    } else {
        let prev = index.saturating_sub(1);
        let next = if index + 1 < count { index + 1 } else { count - 1 };
        (prev, next)
    }
}
