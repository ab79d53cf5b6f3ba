use std::collections::HashMap;
use std::f32::consts::TAU;

use crate::coords::Vec2;

/// Minimum segment count for a circle; fewer cannot enclose an area.
pub const MIN_CIRCLE_SEGMENTS: usize = 4;

/// Cache of unit-radius circle rings keyed by segment count.
///
/// Rings are computed once per segment count and returned by reference on
/// every later lookup, bit-identical each time; emitters scale and translate
/// per call. The renderer owns one instance for its whole lifetime.
#[derive(Default)]
pub struct CircleCache {
    outline: HashMap<usize, Vec<Vec2>>,
    filled: HashMap<usize, Vec<Vec2>>,
}

impl CircleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unit ring for a line-strip outline: `segments + 1` points on the
    /// circle, closed by repeating the angle-zero point.
    pub fn outline_ring(&mut self, segments: usize) -> &[Vec2] {
        assert!(
            segments >= MIN_CIRCLE_SEGMENTS,
            "circle needs at least {MIN_CIRCLE_SEGMENTS} segments, got {segments}"
        );
        self.outline.entry(segments).or_insert_with(|| {
            let mut ring = Vec::with_capacity(segments + 1);
            for i in 0..segments {
                ring.push(unit_point(i, segments));
            }
            ring.push(unit_point(0, segments));
            ring
        })
    }

    /// Unit ring reordered for a triangle strip that zigzags across the
    /// disc: ring indices `0, 1, segments-1, 2, segments-2, …` so every
    /// consecutive triple spans the interior.
    pub fn filled_ring(&mut self, segments: usize) -> &[Vec2] {
        assert!(
            segments >= MIN_CIRCLE_SEGMENTS,
            "circle needs at least {MIN_CIRCLE_SEGMENTS} segments, got {segments}"
        );
        self.filled.entry(segments).or_insert_with(|| {
            let mut ring = Vec::with_capacity(segments);
            ring.push(unit_point(0, segments));
            ring.push(unit_point(1, segments));
            ring.push(unit_point(segments - 1, segments));
            for place in 4..=segments {
                let index = if place % 2 == 0 {
                    place / 2
                } else {
                    segments - place / 2
                };
                ring.push(unit_point(index, segments));
            }
            ring
        })
    }
}

#[inline]
fn unit_point(index: usize, segments: usize) -> Vec2 {
    let theta = TAU * index as f32 / segments as f32;
    Vec2::new(theta.cos(), theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_ring_closes_on_first_point() {
        let mut cache = CircleCache::new();
        let ring = cache.outline_ring(16);
        assert_eq!(ring.len(), 17);
        assert_eq!(ring[0], ring[16]);
        for point in ring {
            let len = (point.x * point.x + point.y * point.y).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn filled_ring_zigzag_order() {
        let mut cache = CircleCache::new();
        let expected: Vec<Vec2> = [0usize, 1, 7, 2, 6, 3, 5, 4]
            .iter()
            .map(|&i| unit_point(i, 8))
            .collect();
        assert_eq!(cache.filled_ring(8), expected.as_slice());
    }

    #[test]
    fn lookups_are_bit_identical() {
        let mut cache = CircleCache::new();
        let first: Vec<(u32, u32)> = cache
            .outline_ring(12)
            .iter()
            .map(|p| (p.x.to_bits(), p.y.to_bits()))
            .collect();
        let second: Vec<(u32, u32)> = cache
            .outline_ring(12)
            .iter()
            .map(|p| (p.x.to_bits(), p.y.to_bits()))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "at least 4 segments")]
    fn too_few_segments_panics() {
        CircleCache::new().outline_ring(3);
    }
}
