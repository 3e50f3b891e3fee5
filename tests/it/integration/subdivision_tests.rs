//! Border-click subdivision workflows through the public API.

use griddraw::{CursorStyle, PointerEvent};

use crate::helpers::{DrawCommand, TestGridBuilder};

#[test]
fn left_edge_click_appends_horizontal_offset() {
    let mut grid = TestGridBuilder::new()
        .with_rectangle((10.0, 10.0), (110.0, 80.0))
        .build();

    // (10, 45) is on the left edge, within the default tolerance of 15.
    grid.manager.mouse_down(&mut grid.surface, PointerEvent::new(10.0, 45.0));
    grid.manager.mouse_up(&mut grid.surface, PointerEvent::new(10.0, 45.0));

    let rects = grid.handle.rectangles();
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].horizontal_points_selected, vec![35.0]);
    assert!(rects[0].vertical_points_selected.is_empty());
    // Geometry untouched.
    assert_eq!(rects[0].start_x, 10.0);
    assert_eq!(rects[0].start_y, 10.0);
    assert_eq!(rects[0].width, 100.0);
    assert_eq!(rects[0].height, 70.0);
}

#[test]
fn top_edge_click_appends_vertical_offset() {
    let mut grid = TestGridBuilder::new()
        .with_rectangle((10.0, 10.0), (110.0, 80.0))
        .build();

    grid.manager.mouse_down(&mut grid.surface, PointerEvent::new(70.0, 10.0));

    let rects = grid.handle.rectangles();
    assert_eq!(rects[0].vertical_points_selected, vec![60.0]);
    assert!(rects[0].horizontal_points_selected.is_empty());
}

#[test]
fn border_click_does_not_start_a_drag() {
    let mut grid = TestGridBuilder::new()
        .with_rectangle((10.0, 10.0), (110.0, 80.0))
        .build();

    grid.manager.mouse_down(&mut grid.surface, PointerEvent::new(10.0, 45.0));
    assert!(grid.manager.state().is_idle());

    // A move and release after the border click must not create a box.
    grid.manager.mouse_move(&mut grid.surface, PointerEvent::new(300.0, 300.0));
    grid.manager.mouse_up(&mut grid.surface, PointerEvent::new(300.0, 300.0));
    assert_eq!(grid.handle.rectangle_count(), 1);
}

#[test]
fn each_border_click_appends_exactly_one_offset() {
    let mut grid = TestGridBuilder::new()
        .with_rectangle((10.0, 10.0), (110.0, 80.0))
        .build();

    for y in [30.0, 45.0, 65.0] {
        grid.manager.mouse_down(&mut grid.surface, PointerEvent::new(10.0, y));
        grid.manager.mouse_up(&mut grid.surface, PointerEvent::new(10.0, y));
    }

    let rects = grid.handle.rectangles();
    assert_eq!(rects[0].horizontal_points_selected, vec![20.0, 35.0, 55.0]);
}

#[test]
fn earlier_created_rectangle_wins_on_overlapping_borders() {
    let mut grid = TestGridBuilder::new()
        .with_rectangle((10.0, 10.0), (110.0, 80.0))
        .with_rectangle((130.0, 10.0), (230.0, 80.0))
        .build();

    // (120, 45) is within tolerance of both the first rectangle's right
    // edge and the second's left edge.
    grid.manager.mouse_down(&mut grid.surface, PointerEvent::new(120.0, 45.0));

    let rects = grid.handle.rectangles();
    assert_eq!(rects[0].horizontal_points_selected, vec![35.0]);
    assert!(rects[1].horizontal_points_selected.is_empty());
}

#[test]
fn subdivision_lines_survive_redraw() {
    let mut grid = TestGridBuilder::new()
        .with_rectangle((10.0, 10.0), (110.0, 80.0))
        .build();

    grid.manager.mouse_down(&mut grid.surface, PointerEvent::new(10.0, 45.0));
    grid.surface.reset_recording();

    grid.manager.mouse_move(&mut grid.surface, PointerEvent::new(400.0, 400.0));

    // The committed rectangle redraws with its full-width subdivision line.
    assert!(grid.surface.stroke_lines().iter().any(|cmd| matches!(
        cmd,
        DrawCommand::StrokeLine { x1, y1, x2, y2, .. }
            if *x1 == 10.0 && *y1 == 45.0 && *x2 == 110.0 && *y2 == 45.0
    )));
}

#[test]
fn hovering_a_border_shows_resize_cursor_and_handle() {
    let mut grid = TestGridBuilder::new()
        .with_rectangle((10.0, 10.0), (110.0, 80.0))
        .build();

    grid.manager.mouse_move(&mut grid.surface, PointerEvent::new(110.0, 45.0));

    assert_eq!(grid.surface.cursor, CursorStyle::EwResize);
    assert!(grid.surface.fill_circles().iter().any(|cmd| matches!(
        cmd,
        DrawCommand::FillCircle { cx, cy, .. } if *cx == 120.0 && *cy == 45.0
    )));

    // Moving away reverts to the fallback cursor and drops the handle.
    grid.surface.reset_recording();
    grid.manager.mouse_move(&mut grid.surface, PointerEvent::new(400.0, 400.0));
    assert_eq!(grid.surface.cursor, CursorStyle::Default);
    assert!(grid.surface.fill_circles().is_empty());
}
