//! Rasterizer property tests: circle symmetry, line connectivity,
//! triangle fill bounds. These inspect the pixel buffer directly
//! rather than going through resolve, so they are seed-independent.

use std::collections::HashSet;

use runegrid::{Circle, Line, Material, PixelBuffer, Polygon, Triangle, Vec2, Viewport};

/// Center of buffer cell (bx, by) in world space, under the default
/// viewport and a 40x40 buffer. Cell-corner coordinates can round down
/// a cell through float error in the transform; cell centers never do.
fn world(bx: i64, by: i64) -> Vec2 {
    Vec2::new(bx as f64 - 19.5, by as f64 - 19.5)
}

fn cells_with(buffer: &PixelBuffer, glyph: char) -> HashSet<(i64, i64)> {
    let mut set = HashSet::new();
    for y in 0..buffer.height() as i64 {
        for x in 0..buffer.width() as i64 {
            if buffer.cell(x, y).unwrap().iter().any(|m| m.glyph == glyph) {
                set.insert((x, y));
            }
        }
    }
    set
}

fn assert_connected(cells: &HashSet<(i64, i64)>, start: (i64, i64), end: (i64, i64)) {
    assert!(cells.contains(&start), "start {start:?} not painted");
    assert!(cells.contains(&end), "end {end:?} not painted");

    // Flood fill over the 8-neighborhood must reach every painted cell.
    let mut seen = HashSet::from([start]);
    let mut frontier = vec![start];
    while let Some((x, y)) = frontier.pop() {
        for dx in -1..=1 {
            for dy in -1..=1 {
                let next = (x + dx, y + dy);
                if cells.contains(&next) && seen.insert(next) {
                    frontier.push(next);
                }
            }
        }
    }
    assert_eq!(
        seen.len(),
        cells.len(),
        "painted path has disconnected cells"
    );
}

#[test]
fn test_line_connectivity_all_slope_classes() {
    let vp = Viewport::default();
    let cases = [
        ((2, 2), (12, 2)),   // dy = 0
        ((5, 3), (5, 14)),   // dx = 0
        ((1, 1), (11, 11)),  // |dx| = |dy|
        ((1, 1), (14, 5)),   // shallow
        ((1, 1), (5, 14)),   // steep
        ((14, 5), (1, 1)),   // reversed shallow
        ((3, 12), (10, 2)),  // negative slope
    ];
    for (a, b) in cases {
        let mut pb = PixelBuffer::new(40, 40).unwrap();
        let line = Line::new(world(a.0, a.1), world(b.0, b.1), Material::new('x', 1)).unwrap();
        line.rasterize(&vp, &mut pb);
        let cells = cells_with(&pb, 'x');
        assert_connected(&cells, a, b);
    }
}

#[test]
fn test_diagonal_line_paints_exact_diagonal() {
    let vp = Viewport::default();
    let mut pb = PixelBuffer::new(40, 40).unwrap();
    Line::new(world(1, 1), world(11, 11), Material::new('x', 1))
        .unwrap()
        .rasterize(&vp, &mut pb);
    let cells = cells_with(&pb, 'x');
    let expected: HashSet<(i64, i64)> = (1..=11).map(|i| (i, i)).collect();
    assert_eq!(cells, expected);
}

#[test]
fn test_circle_outline_symmetry() {
    let vp = Viewport::default();
    for radius in [2.0, 5.0, 10.0] {
        let mut pb = PixelBuffer::new(40, 40).unwrap();
        Circle::new(Vec2::ZERO, radius, Material::new('x', 1), None)
            .unwrap()
            .rasterize(&vp, &mut pb);
        let cells = cells_with(&pb, 'x');
        assert!(!cells.is_empty());
        for &(x, y) in &cells {
            // Center is buffer (20, 20); the outline must be invariant
            // under reflection across both axes through it.
            assert!(cells.contains(&(40 - x, y)), "x-mirror missing for ({x},{y})");
            assert!(cells.contains(&(x, 40 - y)), "y-mirror missing for ({x},{y})");
        }
    }
}

#[test]
fn test_triangle_fill_matches_lattice_count() {
    let vp = Viewport::default();
    let mut pb = PixelBuffer::new(40, 40).unwrap();
    // Right isoceles triangle with legs of length 10 in buffer space:
    // vertices at buffer cells (0,0), (10,0), (0,10).
    let t = Triangle::new(
        world(0, 0),
        world(10, 0),
        world(0, 10),
        Material::new('x', 2),
        Some(Material::new('.', 1)),
    )
    .unwrap();
    t.rasterize(&vp, &mut pb);

    let fill = cells_with(&pb, '.');
    // The discrete area is 50; the inclusive boundary adds up to 16
    // more cells (some boundary cells round out of the barycentric
    // test, which is fine, they still carry the outline material).
    let area = 50i64;
    let count = fill.len() as i64;
    assert!(
        (count - area).abs() <= 16,
        "fill count {count} too far from discrete area {area}"
    );
    assert!(count > area, "boundary cells should push the count above the area");
    for &(x, y) in &fill {
        assert!(x >= 0 && y >= 0 && x + y <= 10, "fill outside hull at ({x},{y})");
    }
}

#[test]
fn test_triangle_fill_never_escapes_convex_hull() {
    let vp = Viewport::default();
    let mut pb = PixelBuffer::new(40, 40).unwrap();
    let (a, b, c) = ((3, 7), (17, 4), (9, 16));
    Triangle::new(
        world(a.0, a.1),
        world(b.0, b.1),
        world(c.0, c.1),
        Material::new('x', 2),
        Some(Material::new('.', 1)),
    )
    .unwrap()
    .rasterize(&vp, &mut pb);

    // Half-plane test against each edge, with a one-cell tolerance for
    // the inclusive boundary.
    let verts = [a, b, c];
    for &(x, y) in &cells_with(&pb, '.') {
        for i in 0..3 {
            let (x1, y1) = verts[i];
            let (x2, y2) = verts[(i + 1) % 3];
            let (x3, y3) = verts[(i + 2) % 3];
            let side = (x2 - x1) * (y - y1) - (y2 - y1) * (x - x1);
            let ref_side = (x2 - x1) * (y3 - y1) - (y2 - y1) * (x3 - x1);
            assert!(
                side as f64 * ref_side as f64 >= 0.0,
                "fill cell ({x},{y}) strictly outside edge {i}"
            );
        }
    }
}

#[test]
fn test_polygon_fan_fill_convex_pentagon() {
    let vp = Viewport::default();
    let mut pb = PixelBuffer::new(40, 40).unwrap();
    let points: Vec<Vec2> = (0..5)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / 5.0;
            Vec2::new(10.0 * angle.cos(), 10.0 * angle.sin())
        })
        .collect();
    let pentagon = Polygon::new(points, Material::new('x', 2), Some(Material::new('.', 1))).unwrap();
    pentagon.rasterize(&vp, &mut pb);

    let fill = cells_with(&pb, '.');
    // Center of the pentagon is solidly filled.
    assert!(fill.contains(&(20, 20)));
    // Fill stays within the circumscribed disc (radius 10 world units,
    // one cell of slack for rasterization).
    for &(x, y) in &fill {
        let (dx, dy) = (x - 20, y - 20);
        assert!(dx * dx + dy * dy <= 12 * 12, "fill outside pentagon at ({x},{y})");
    }
}

#[test]
fn test_partially_offscreen_circle_paints_visible_half() {
    let vp = Viewport::default();
    let mut pb = PixelBuffer::new(40, 40).unwrap();
    // Centered on the left edge of the window.
    Circle::new(Vec2::new(-20.0, 0.0), 6.0, Material::new('x', 1), None)
        .unwrap()
        .rasterize(&vp, &mut pb);
    let cells = cells_with(&pb, 'x');
    assert!(!cells.is_empty());
    assert!(cells.contains(&(6, 20)), "rightmost visible point missing");
    assert!(cells.iter().all(|&(x, _)| x >= 0));
}
