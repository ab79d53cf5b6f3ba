use crate::coords::Vec2;

/// Reorders three points into the clockwise order the rasterizer expects.
///
/// First comes the point with the greatest `y` (ties: smallest `x`), second
/// the rightmost of the remaining two (ties: greatest `y`), third the one
/// left over. Already-clockwise triangles come back unchanged, so the
/// function is idempotent.
///
/// Callers binding per-point colors should note the colors stay slot-bound:
/// the first color paints whichever point sorts first.
pub fn clockwise_order(p1: Vec2, p2: Vec2, p3: Vec2) -> [Vec2; 3] {
    let mut points = [p1, p2, p3];

    let first = (0..3)
        .reduce(|best, i| if points[i].lower_or_leftmost(points[best]) { i } else { best })
        .unwrap_or(0);
    points.swap(0, first);

    if points[2].rightmost_or_lower(points[1]) {
        points.swap(1, 2);
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn sorts_bottom_then_rightmost() {
        // Bottom point first (y grows downward), then the rightmost.
        let ordered = clockwise_order(p(0.0, 0.0), p(10.0, 0.0), p(5.0, 10.0));
        assert_eq!(ordered, [p(5.0, 10.0), p(10.0, 0.0), p(0.0, 0.0)]);
    }

    #[test]
    fn idempotent() {
        let once = clockwise_order(p(3.0, 7.0), p(9.0, 1.0), p(0.0, 2.0));
        let twice = clockwise_order(once[0], once[1], once[2]);
        assert_eq!(once, twice);
    }

    #[test]
    fn y_tie_breaks_on_smaller_x() {
        let ordered = clockwise_order(p(4.0, 5.0), p(2.0, 5.0), p(3.0, 0.0));
        assert_eq!(ordered[0], p(2.0, 5.0));
        assert_eq!(ordered[1], p(4.0, 5.0));
    }

    #[test]
    fn x_tie_breaks_on_greater_y() {
        let ordered = clockwise_order(p(0.0, 9.0), p(6.0, 1.0), p(6.0, 4.0));
        assert_eq!(ordered, [p(0.0, 9.0), p(6.0, 4.0), p(6.0, 1.0)]);
    }
}
