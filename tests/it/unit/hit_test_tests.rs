//! Unit tests for border/interior hit testing.

use griddraw::{BorderEdge, BoundaryValidator, CursorStyle, GridOptions, GridRectangle};

use crate::helpers::{DrawCommand, RecordingSurface};

fn rect(x: f32, y: f32, w: f32, h: f32) -> GridRectangle {
    GridRectangle {
        start_x: x,
        start_y: y,
        width: w,
        height: h,
        ..GridRectangle::default()
    }
}

fn validator() -> BoundaryValidator {
    BoundaryValidator::new(GridOptions::default())
}

#[test]
fn point_strictly_inside_is_inside() {
    let v = validator();
    let r = rect(10.0, 10.0, 100.0, 70.0);

    assert!(v.is_point_inside_rectangle(60.0, 45.0, &r));
    assert!(v.is_point_inside_rectangle(10.0, 10.0, &r));
    assert!(v.is_point_inside_rectangle(110.0, 80.0, &r));
    assert!(!v.is_point_inside_rectangle(111.0, 45.0, &r));
    assert!(!v.is_point_inside_rectangle(60.0, 9.0, &r));
}

#[test]
fn negative_extents_are_normalized_before_inside_test() {
    let v = validator();
    // Dragged toward the top-left: anchor at bottom-right.
    let r = rect(110.0, 80.0, -100.0, -70.0);

    assert!(v.is_point_inside_rectangle(60.0, 45.0, &r));
    assert!(!v.is_point_inside_rectangle(5.0, 45.0, &r));
}

#[test]
fn inside_any_region_checks_all_rectangles() {
    let v = validator();
    let rects = vec![rect(0.0, 0.0, 50.0, 50.0), rect(200.0, 200.0, 50.0, 50.0)];

    assert!(v.is_point_inside_any_region(25.0, 25.0, &rects));
    assert!(v.is_point_inside_any_region(225.0, 225.0, &rects));
    assert!(!v.is_point_inside_any_region(100.0, 100.0, &rects));
}

#[test]
fn border_hit_within_tolerance() {
    let v = validator();
    let r = rect(10.0, 10.0, 100.0, 70.0);

    assert_eq!(v.border_hit(10.0, 45.0, &r), Some(BorderEdge::Left));
    assert_eq!(v.border_hit(24.0, 45.0, &r), Some(BorderEdge::Left));
    assert_eq!(v.border_hit(110.0, 45.0, &r), Some(BorderEdge::Right));
    assert_eq!(v.border_hit(60.0, 10.0, &r), Some(BorderEdge::Top));
    assert_eq!(v.border_hit(60.0, 80.0, &r), Some(BorderEdge::Bottom));

    // Interior, outside every tolerance band.
    assert_eq!(v.border_hit(60.0, 45.0, &r), None);
    // Beyond tolerance outside the rectangle.
    assert_eq!(v.border_hit(130.0, 45.0, &r), None);
}

#[test]
fn border_band_is_bounded_by_rectangle_extent() {
    let v = validator();
    let r = rect(10.0, 10.0, 100.0, 70.0);

    // On the infinite line through the left edge, but far past the
    // rectangle's vertical extent plus tolerance.
    assert_eq!(v.border_hit(10.0, 150.0, &r), None);
    // The band extends outward by exactly the tolerance.
    assert_eq!(v.border_hit(-5.0, 45.0, &r), Some(BorderEdge::Left));
    assert_eq!(v.border_hit(-5.1, 45.0, &r), None);
}

#[test]
fn border_detection_is_symmetric_for_negative_drags() {
    let v = validator();
    let forward = rect(10.0, 10.0, 100.0, 70.0);
    let backward = rect(110.0, 80.0, -100.0, -70.0);

    for (x, y) in [(10.0, 45.0), (110.0, 45.0), (60.0, 10.0), (60.0, 80.0)] {
        assert_eq!(v.border_hit(x, y, &forward), v.border_hit(x, y, &backward));
    }
}

#[test]
fn corner_resolution_is_deterministic() {
    let v = validator();
    let r = rect(10.0, 10.0, 100.0, 70.0);

    // Near the top-left corner both Top and Left bands match; Top wins.
    assert_eq!(v.border_hit(12.0, 12.0, &r), Some(BorderEdge::Top));
    // Near the bottom-right corner Right wins over Bottom.
    assert_eq!(v.border_hit(108.0, 78.0, &r), Some(BorderEdge::Right));
}

#[test]
fn first_rectangle_in_collection_order_wins() {
    let v = validator();
    // Overlapping borders: both rectangles share the x = 100 band.
    let rects = vec![rect(0.0, 0.0, 100.0, 100.0), rect(100.0, 0.0, 100.0, 100.0)];

    let (idx, edge) = v
        .find_rectangle_with_point_on_border(100.0, 50.0, &rects)
        .expect("point is on a shared border");
    assert_eq!(idx, 0);
    assert_eq!(edge, BorderEdge::Right);
}

#[test]
fn cursor_style_follows_hovered_edge() {
    let v = validator();
    let rects = vec![rect(10.0, 10.0, 100.0, 70.0)];
    let mut surface = RecordingSurface::new();

    v.update_cursor_style(&mut surface, 10.0, 45.0, &rects, CursorStyle::Default);
    assert_eq!(surface.cursor, CursorStyle::EwResize);

    v.update_cursor_style(&mut surface, 60.0, 10.0, &rects, CursorStyle::Default);
    assert_eq!(surface.cursor, CursorStyle::NsResize);

    v.update_cursor_style(&mut surface, 60.0, 45.0, &rects, CursorStyle::Default);
    assert_eq!(surface.cursor, CursorStyle::Default);

    v.update_cursor_style(&mut surface, 60.0, 45.0, &rects, CursorStyle::Pointer);
    assert_eq!(surface.cursor, CursorStyle::Pointer);
}

#[test]
fn border_hover_draws_handle_circle_offset_from_border() {
    let v = validator();
    let r = rect(10.0, 10.0, 100.0, 70.0);
    let mut surface = RecordingSurface::new();

    // Hovering the left edge: handle is shifted outward by the default
    // circle_line_shift_size of 10.
    v.check_border_hover_and_redraw(&mut surface, &r, 12.0, 45.0);
    assert_eq!(
        surface.commands,
        vec![DrawCommand::FillCircle {
            cx: 0.0,
            cy: 45.0,
            radius: 3.0,
            colour: "red".to_string(),
        }]
    );
}

#[test]
fn no_hover_draws_nothing() {
    let v = validator();
    let r = rect(10.0, 10.0, 100.0, 70.0);
    let mut surface = RecordingSurface::new();

    v.check_border_hover_and_redraw(&mut surface, &r, 60.0, 45.0);
    assert!(surface.commands.is_empty());
}

#[test]
fn geometry_is_total_over_out_of_canvas_input() {
    let v = validator();
    let r = rect(10.0, 10.0, 100.0, 70.0);

    // Way off-canvas coordinates are valid inputs and simply miss.
    assert_eq!(v.border_hit(-1e6, -1e6, &r), None);
    assert!(!v.is_point_inside_rectangle(f32::MAX, f32::MIN, &r));
}
