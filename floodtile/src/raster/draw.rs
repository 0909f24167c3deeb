//! Pixel drawing primitives
//!
//! All primitives write raw RGBA values into the buffer; there is no
//! alpha compositing. Later writes replace earlier ones, which is what
//! gives painter's-algorithm layering and lets interior rings punch fully
//! transparent holes through a fill.
//!
//! Coordinates arrive in pixel space and may extend far outside the
//! buffer; segments are clipped to a small margin around it before
//! stepping so off-tile geometry costs nothing.

use image::{Rgba, RgbaImage};

use crate::geometry::Coord;

/// How far outside the buffer segments keep their exact pixel walk.
const CLIP_MARGIN: f64 = 8.0;

/// Fills the interior of a single ring using even-odd scanline coverage.
///
/// A pixel is inside when its center lies between an odd pair of ring
/// crossings on its scanline. Rings with and without a repeated closing
/// vertex are both accepted. Rings with fewer than three vertices have no
/// interior and are skipped.
pub fn fill_ring(img: &mut RgbaImage, ring: &[Coord], color: Rgba<u8>) {
    if ring.len() < 3 {
        return;
    }

    let width = i64::from(img.width());
    let height = i64::from(img.height());

    let ring_min_y = ring.iter().map(|c| c.y).fold(f64::INFINITY, f64::min);
    let ring_max_y = ring.iter().map(|c| c.y).fold(f64::NEG_INFINITY, f64::max);
    let first_row = (ring_min_y.floor() as i64).max(0);
    let last_row = (ring_max_y.ceil() as i64).min(height - 1);

    let mut crossings: Vec<f64> = Vec::new();
    for row in first_row..=last_row {
        let scan_y = row as f64 + 0.5;

        crossings.clear();
        for i in 0..ring.len() {
            let a = ring[i];
            let b = ring[(i + 1) % ring.len()];
            // Half-open span test: horizontal edges contribute nothing and
            // a vertex is counted for exactly one of its two edges.
            if (a.y <= scan_y) != (b.y <= scan_y) {
                let t = (scan_y - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks_exact(2) {
            let start = ((pair[0] - 0.5).ceil() as i64).max(0);
            let end = ((pair[1] - 0.5).floor() as i64).min(width - 1);
            for col in start..=end {
                img.put_pixel(col as u32, row as u32, color);
            }
        }
    }
}

/// Strokes a closed ring outline, including the edge back to the first
/// vertex when the ring does not repeat it.
pub fn stroke_ring(img: &mut RgbaImage, ring: &[Coord], color: Rgba<u8>) {
    if ring.len() < 2 {
        return;
    }
    for pair in ring.windows(2) {
        draw_segment(img, pair[0], pair[1], color, 1);
    }
    draw_segment(img, ring[ring.len() - 1], ring[0], color, 1);
}

/// Strokes an open polyline at the given pixel width.
///
/// Polylines with fewer than two vertices are skipped.
pub fn stroke_polyline(img: &mut RgbaImage, points: &[Coord], width: u32, color: Rgba<u8>) {
    if points.len() < 2 {
        return;
    }
    for pair in points.windows(2) {
        draw_segment(img, pair[0], pair[1], color, width);
    }
}

/// Draws a filled circle with a one-pixel outline ring.
pub fn fill_circle(
    img: &mut RgbaImage,
    center: Coord,
    radius: u32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
) {
    let cx = center.x.round() as i64;
    let cy = center.y.round() as i64;
    let r = i64::from(radius);
    let r2 = r * r;
    let inner2 = (r - 1) * (r - 1);

    for dy in -r..=r {
        for dx in -r..=r {
            let d2 = dx * dx + dy * dy;
            if d2 <= r2 {
                let color = if d2 > inner2 { outline } else { fill };
                put_pixel_checked(img, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Bresenham segment walk, thickened perpendicular to its major axis.
fn draw_segment(img: &mut RgbaImage, a: Coord, b: Coord, color: Rgba<u8>, width: u32) {
    let Some((a, b)) = clip_segment(a, b, f64::from(img.width()), f64::from(img.height()))
    else {
        return;
    };

    let mut x = a.x.round() as i64;
    let mut y = a.y.round() as i64;
    let x_end = b.x.round() as i64;
    let y_end = b.y.round() as i64;

    let dx = (x_end - x).abs();
    let dy = -(y_end - y).abs();
    let step_x = if x < x_end { 1 } else { -1 };
    let step_y = if y < y_end { 1 } else { -1 };
    let steep = -dy > dx;
    let mut err = dx + dy;

    loop {
        stamp(img, x, y, color, width, steep);
        if x == x_end && y == y_end {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += step_x;
        }
        if e2 <= dx {
            err += dx;
            y += step_y;
        }
    }
}

/// Writes a width-px run perpendicular to the segment's major axis.
#[inline]
fn stamp(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>, width: u32, steep: bool) {
    put_pixel_checked(img, x, y, color);
    for k in 1..i64::from(width) {
        if steep {
            put_pixel_checked(img, x + k, y, color);
        } else {
            put_pixel_checked(img, x, y + k, color);
        }
    }
}

#[inline]
fn put_pixel_checked(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && x < i64::from(img.width()) && y < i64::from(img.height()) {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Liang-Barsky clip of segment `a..b` against the buffer plus margin.
///
/// Keeps pixel walks bounded when geometry spans far beyond the tile at
/// high zoom; returns `None` when the segment misses the buffer entirely.
fn clip_segment(a: Coord, b: Coord, width: f64, height: f64) -> Option<(Coord, Coord)> {
    let x_min = -CLIP_MARGIN;
    let y_min = -CLIP_MARGIN;
    let x_max = width + CLIP_MARGIN;
    let y_max = height + CLIP_MARGIN;

    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-dx, a.x - x_min),
        (dx, x_max - a.x),
        (-dy, a.y - y_min),
        (dy, y_max - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                if r > t0 {
                    t0 = r;
                }
            } else {
                if r < t0 {
                    return None;
                }
                if r < t1 {
                    t1 = r;
                }
            }
        }
    }

    Some((
        Coord::new(a.x + t0 * dx, a.y + t0 * dy),
        Coord::new(a.x + t1 * dx, a.y + t1 * dy),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn canvas(size: u32) -> RgbaImage {
        RgbaImage::new(size, size)
    }

    fn square(min: f64, max: f64) -> Vec<Coord> {
        vec![
            Coord::new(min, min),
            Coord::new(max, min),
            Coord::new(max, max),
            Coord::new(min, max),
        ]
    }

    #[test]
    fn test_fill_ring_covers_interior_only() {
        let mut img = canvas(12);
        fill_ring(&mut img, &square(2.0, 8.0), RED);

        assert_eq!(*img.get_pixel(5, 5), RED);
        assert_eq!(*img.get_pixel(2, 2), RED);
        assert_eq!(*img.get_pixel(7, 7), RED);
        // Centers past the ring edge stay untouched
        assert_eq!(*img.get_pixel(8, 8), CLEAR);
        assert_eq!(*img.get_pixel(1, 5), CLEAR);
        assert_eq!(*img.get_pixel(5, 1), CLEAR);
    }

    #[test]
    fn test_fill_ring_accepts_explicitly_closed_ring() {
        let mut open = canvas(12);
        let mut closed = canvas(12);

        let mut ring = square(2.0, 8.0);
        fill_ring(&mut open, &ring, RED);
        ring.push(ring[0]);
        fill_ring(&mut closed, &ring, RED);

        assert_eq!(open.as_raw(), closed.as_raw());
    }

    #[test]
    fn test_fill_ring_triangle_excludes_far_corner() {
        let mut img = canvas(12);
        let triangle = vec![
            Coord::new(0.0, 0.0),
            Coord::new(10.0, 0.0),
            Coord::new(0.0, 10.0),
        ];
        fill_ring(&mut img, &triangle, RED);

        assert_eq!(*img.get_pixel(2, 2), RED);
        assert_eq!(*img.get_pixel(8, 8), CLEAR);
    }

    #[test]
    fn test_fill_ring_degenerate_is_noop() {
        let mut img = canvas(8);
        fill_ring(
            &mut img,
            &[Coord::new(1.0, 1.0), Coord::new(6.0, 6.0)],
            RED,
        );
        assert!(img.pixels().all(|p| *p == CLEAR));
    }

    #[test]
    fn test_fill_ring_transparent_punches_existing_fill() {
        let mut img = canvas(12);
        fill_ring(&mut img, &square(1.0, 11.0), RED);
        fill_ring(&mut img, &square(4.0, 8.0), CLEAR);

        assert_eq!(*img.get_pixel(2, 2), RED);
        assert_eq!(*img.get_pixel(6, 6), CLEAR);
    }

    #[test]
    fn test_stroke_ring_draws_closing_edge() {
        let mut img = canvas(12);
        stroke_ring(&mut img, &square(2.0, 8.0), BLACK);

        assert_eq!(*img.get_pixel(2, 2), BLACK);
        assert_eq!(*img.get_pixel(8, 2), BLACK);
        assert_eq!(*img.get_pixel(8, 8), BLACK);
        // Left edge comes from the implicit closing segment
        assert_eq!(*img.get_pixel(2, 5), BLACK);
        assert_eq!(*img.get_pixel(5, 5), CLEAR);
    }

    #[test]
    fn test_stroke_polyline_horizontal_thickens_downward() {
        let mut img = canvas(12);
        stroke_polyline(
            &mut img,
            &[Coord::new(1.0, 5.0), Coord::new(9.0, 5.0)],
            2,
            RED,
        );

        assert_eq!(*img.get_pixel(4, 5), RED);
        assert_eq!(*img.get_pixel(4, 6), RED);
        assert_eq!(*img.get_pixel(4, 4), CLEAR);
        assert_eq!(*img.get_pixel(4, 7), CLEAR);
    }

    #[test]
    fn test_stroke_polyline_vertical_thickens_sideways() {
        let mut img = canvas(12);
        stroke_polyline(
            &mut img,
            &[Coord::new(5.0, 1.0), Coord::new(5.0, 9.0)],
            2,
            RED,
        );

        assert_eq!(*img.get_pixel(5, 4), RED);
        assert_eq!(*img.get_pixel(6, 4), RED);
        assert_eq!(*img.get_pixel(4, 4), CLEAR);
    }

    #[test]
    fn test_stroke_polyline_single_point_is_noop() {
        let mut img = canvas(8);
        stroke_polyline(&mut img, &[Coord::new(4.0, 4.0)], 2, RED);
        assert!(img.pixels().all(|p| *p == CLEAR));
    }

    #[test]
    fn test_fill_circle_center_fill_and_rim() {
        let mut img = canvas(12);
        fill_circle(&mut img, Coord::new(5.0, 5.0), 3, RED, BLACK);

        assert_eq!(*img.get_pixel(5, 5), RED);
        assert_eq!(*img.get_pixel(6, 5), RED);
        // Rim at distance 3 is outline, distance 4 untouched
        assert_eq!(*img.get_pixel(5, 2), BLACK);
        assert_eq!(*img.get_pixel(8, 5), BLACK);
        assert_eq!(*img.get_pixel(9, 5), CLEAR);
    }

    #[test]
    fn test_drawing_far_outside_buffer_is_silent() {
        let mut img = canvas(8);
        stroke_polyline(
            &mut img,
            &[Coord::new(-500.0, -500.0), Coord::new(-400.0, -450.0)],
            2,
            RED,
        );
        fill_circle(&mut img, Coord::new(-20.0, -20.0), 3, RED, BLACK);
        fill_ring(&mut img, &square(-50.0, -40.0), RED);

        assert!(img.pixels().all(|p| *p == CLEAR));
    }

    #[test]
    fn test_segment_crossing_buffer_draws_inside_portion() {
        let mut img = canvas(8);
        stroke_polyline(
            &mut img,
            &[Coord::new(-100.0, 4.0), Coord::new(100.0, 4.0)],
            1,
            RED,
        );

        for x in 0..8 {
            assert_eq!(*img.get_pixel(x, 4), RED);
        }
    }
}
