//! Primitive emitters: CPU-side tessellation feeding the overflow-checked
//! append path on [`Renderer`].

use crate::coords::{Vec2, Vec3};
use crate::draw::{clockwise_order, Topology, Vertex, MIN_CIRCLE_SEGMENTS};
use crate::paint::{Color, CornerColors};
use crate::text::TextMeasure;

use super::text::{TextAlign, TextRun};
use super::Renderer;

impl Renderer {
    pub fn add_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.add_line_multicolor(from, to, color, color);
    }

    pub fn add_line_multicolor(
        &mut self,
        from: Vec2,
        to: Vec2,
        from_color: Color,
        to_color: Color,
    ) {
        let vertices = [Vertex::new(from, from_color), Vertex::new(to, to_color)];
        self.push_primitive(&vertices, Topology::LineList);
    }

    /// Connected line through `points`, in order. Fewer than two points
    /// draw nothing.
    pub fn add_polyline(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 2 {
            return;
        }
        let vertices: Vec<Vertex> = points.iter().map(|&p| Vertex::new(p, color)).collect();
        self.push_primitive(&vertices, Topology::LineStrip);
    }

    pub fn add_rect_filled(&mut self, top_left: Vec2, size: Vec2, color: Color) {
        self.add_rect_filled_multicolor(top_left, size, CornerColors::uniform(color));
    }

    pub fn add_rect_filled_multicolor(
        &mut self,
        top_left: Vec2,
        size: Vec2,
        corners: CornerColors,
    ) {
        let vertices = rect_strip(top_left, size, corners);
        self.push_primitive(&vertices, Topology::TriangleStrip);
    }

    /// Triangle outline as a closed 4-point strip.
    pub fn add_triangle(&mut self, p1: Vec2, p2: Vec2, p3: Vec2, color: Color) {
        let vertices = [
            Vertex::new(p1, color),
            Vertex::new(p2, color),
            Vertex::new(p3, color),
            Vertex::new(p1, color),
        ];
        self.push_primitive(&vertices, Topology::LineStrip);
    }

    pub fn add_triangle_filled(&mut self, p1: Vec2, p2: Vec2, p3: Vec2, color: Color) {
        self.add_triangle_filled_multicolor(p1, p2, p3, color, color, color);
    }

    /// Filled triangle with per-point colors.
    ///
    /// Points are reordered clockwise before emission and the colors stay
    /// slot-bound: `c1` paints whichever point sorts first, not the point
    /// the caller passed it with.
    pub fn add_triangle_filled_multicolor(
        &mut self,
        p1: Vec2,
        p2: Vec2,
        p3: Vec2,
        c1: Color,
        c2: Color,
        c3: Color,
    ) {
        let [a, b, c] = clockwise_order(p1, p2, p3);
        let vertices = [Vertex::new(a, c1), Vertex::new(b, c2), Vertex::new(c, c3)];
        self.push_primitive(&vertices, Topology::TriangleList);
    }

    /// Circle outline from the cached unit ring scaled by `radius`.
    pub fn add_circle(&mut self, center: Vec2, radius: f32, color: Color, segments: usize) {
        self.assert_segments(segments);
        let vertices: Vec<Vertex> = self
            .circles
            .outline_ring(segments)
            .iter()
            .map(|&p| Vertex::new(p * radius + center, color))
            .collect();
        self.push_primitive(&vertices, Topology::LineStrip);
    }

    /// Filled circle as a triangle strip zigzagging across the disc.
    pub fn add_circle_filled(&mut self, center: Vec2, radius: f32, color: Color, segments: usize) {
        self.assert_segments(segments);
        let vertices: Vec<Vertex> = self
            .circles
            .filled_ring(segments)
            .iter()
            .map(|&p| Vertex::new(p * radius + center, color))
            .collect();
        self.push_primitive(&vertices, Topology::TriangleStrip);
    }

    /// Rectangular border built from four filled side rects.
    pub fn add_frame(&mut self, top_left: Vec2, size: Vec2, thickness: f32, color: Color) {
        for (origin, extent) in frame_sides(top_left, size, thickness) {
            self.add_rect_filled(origin, extent, color);
        }
    }

    /// A frame with an outline on both its outer and inner edge.
    pub fn add_outlined_frame(
        &mut self,
        top_left: Vec2,
        size: Vec2,
        thickness: f32,
        outline_thickness: f32,
        color: Color,
        outline_color: Color,
    ) {
        let ol = Vec2::splat(outline_thickness);
        self.add_frame(top_left - ol, size + ol * 2.0, outline_thickness, outline_color);
        self.add_frame(top_left, size, thickness, color);
        let th = Vec2::splat(thickness);
        self.add_frame(top_left + th, size - th * 2.0, outline_thickness, outline_color);
    }

    /// Rectangle outline as one closed polyline.
    pub fn add_wireframe(&mut self, top_left: Vec2, size: Vec2, color: Color) {
        self.add_polyline(&wireframe_points(top_left, size), color);
    }

    /// Rectangle outline with a second rectangle offset by `(-z, +z)` and
    /// the connecting edges, all as a single polyline.
    pub fn add_wireframe_3d(&mut self, top_left: Vec2, size: Vec3, color: Color) {
        self.add_polyline(&wireframe_3d_points(top_left, size), color);
    }

    /// Records a text run for this submission; drawn above all primitives.
    /// Text never wraps. Alignment shifts the origin by the measured width.
    pub fn add_text(&mut self, position: Vec2, text: &str, px: f32, color: Color, align: TextAlign) {
        let Some(font) = self.default_font() else {
            if !self.warned_no_font {
                log::warn!("add_text called with no font loaded; text will not render");
                self.warned_no_font = true;
            }
            return;
        };

        let origin = match align {
            TextAlign::Left => position,
            TextAlign::Center => {
                let width = self.measure_text(text, px).x;
                Vec2::new(position.x - width / 2.0, position.y)
            }
            TextAlign::Right => {
                let width = self.measure_text(text, px).x;
                Vec2::new(position.x - width, position.y)
            }
        };

        self.text_runs.push(TextRun {
            font,
            origin,
            text: text.to_owned(),
            px,
            color,
        });
    }

    fn assert_segments(&self, segments: usize) {
        assert!(
            segments >= MIN_CIRCLE_SEGMENTS && segments < self.list.capacity(),
            "circle segment count {segments} outside {MIN_CIRCLE_SEGMENTS}..{}",
            self.list.capacity()
        );
    }
}

/// TL, TR, BL, BR corner order for a two-triangle strip.
pub(super) fn rect_strip(top_left: Vec2, size: Vec2, corners: CornerColors) -> [Vertex; 4] {
    [
        Vertex::new(top_left, corners.top_left),
        Vertex::new(top_left + Vec2::new(size.x, 0.0), corners.top_right),
        Vertex::new(top_left + Vec2::new(0.0, size.y), corners.bottom_left),
        Vertex::new(top_left + size, corners.bottom_right),
    ]
}

/// `(origin, size)` of the four side rects of a frame, derived from the
/// outer rectangle: top and bottom span the full width, left and right the
/// full height.
pub(super) fn frame_sides(top_left: Vec2, size: Vec2, thickness: f32) -> [(Vec2, Vec2); 4] {
    [
        (top_left, Vec2::new(size.x, thickness)),
        (
            top_left + Vec2::new(0.0, size.y - thickness),
            Vec2::new(size.x, thickness),
        ),
        (top_left, Vec2::new(thickness, size.y)),
        (
            top_left + Vec2::new(size.x - thickness, 0.0),
            Vec2::new(thickness, size.y),
        ),
    ]
}

pub(super) fn wireframe_points(top_left: Vec2, size: Vec2) -> [Vec2; 5] {
    let tr = top_left + Vec2::new(size.x, 0.0);
    let br = top_left + size;
    let bl = top_left + Vec2::new(0.0, size.y);
    [top_left, tr, br, bl, top_left]
}

/// Point order traces the front face, jumps to the back face along the
/// bottom-left edge, crosses the back top edge, and returns along the
/// top-right and top-left edges so every edge is visited.
pub(super) fn wireframe_3d_points(top_left: Vec2, size: Vec3) -> [Vec2; 11] {
    let offset = Vec2::new(-size.z, size.z);
    let tl = top_left;
    let tr = tl + Vec2::new(size.x, 0.0);
    let bl = tl + Vec2::new(0.0, size.y);
    let br = tl + Vec2::new(size.x, size.y);
    [
        bl,
        tl,
        tr,
        br,
        bl,
        bl + offset,
        tl + offset,
        tr + offset,
        tr,
        tl,
        tl + offset,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::opaque(1.0, 0.0, 0.0)
    }

    #[test]
    fn rect_strip_corner_order() {
        let v = rect_strip(
            Vec2::new(10.0, 20.0),
            Vec2::new(30.0, 40.0),
            CornerColors::uniform(red()),
        );
        assert_eq!(v[0].pos, [10.0, 20.0, 0.0]);
        assert_eq!(v[1].pos, [40.0, 20.0, 0.0]);
        assert_eq!(v[2].pos, [10.0, 60.0, 0.0]);
        assert_eq!(v[3].pos, [40.0, 60.0, 0.0]);
    }

    #[test]
    fn frame_sides_cover_the_border() {
        let sides = frame_sides(Vec2::zero(), Vec2::new(100.0, 50.0), 2.0);
        assert_eq!(sides[0], (Vec2::zero(), Vec2::new(100.0, 2.0)));
        assert_eq!(sides[1], (Vec2::new(0.0, 48.0), Vec2::new(100.0, 2.0)));
        assert_eq!(sides[2], (Vec2::zero(), Vec2::new(2.0, 50.0)));
        assert_eq!(sides[3], (Vec2::new(98.0, 0.0), Vec2::new(2.0, 50.0)));
    }

    #[test]
    fn wireframe_closes_on_start() {
        let points = wireframe_points(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], points[4]);
    }

    #[test]
    fn wireframe_3d_offsets_back_face() {
        let points = wireframe_3d_points(Vec2::zero(), Vec3::new(10.0, 10.0, 2.0));
        assert_eq!(points.len(), 11);
        // Back-face points sit at (-z, +z) from their front counterparts.
        assert_eq!(points[5], points[4] + Vec2::new(-2.0, 2.0));
        assert_eq!(points[6], points[1] + Vec2::new(-2.0, 2.0));
        assert_eq!(points[10], points[9] + Vec2::new(-2.0, 2.0));
        // The trace revisits the top edge on the way back.
        assert_eq!(points[8], points[2]);
        assert_eq!(points[9], points[1]);
    }
}
