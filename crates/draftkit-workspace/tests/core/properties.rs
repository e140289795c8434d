use draftkit_core::constants::{MAX_GRID_LINES, MAX_ZOOM, MIN_ZOOM};
use draftkit_core::{Point, Rect};
use draftkit_workspace::{
    get_step, grid_lines, handle_scale_change, mouse_screen_to_real, next_scale, world_to_screen,
    ZoomDirection,
};
use proptest::prelude::*;

fn close(a: Point, b: Point) -> bool {
    let tolerance = 1e-6 * (1.0 + a.x.abs().max(a.y.abs()));
    (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance
}

fn points() -> impl Strategy<Value = Point> {
    (-1.0e4..1.0e4f64, -1.0e4..1.0e4f64).prop_map(|(x, y)| Point::new(x, y))
}

fn scales() -> impl Strategy<Value = f64> {
    MIN_ZOOM..=MAX_ZOOM
}

proptest! {
    #[test]
    fn prop_screen_round_trip(position in points(), scale in scales(), p in points()) {
        let screen = world_to_screen(position, scale, p);
        prop_assert!(close(mouse_screen_to_real(position, screen, scale), p));
    }

    #[test]
    fn prop_zoom_keeps_anchor(
        position in points(),
        scale in scales(),
        anchor in (0.0..2000.0f64, 0.0..2000.0f64),
        new_scale in scales(),
    ) {
        let anchor = Point::new(anchor.0, anchor.1);
        let moved = handle_scale_change(position, scale, anchor, new_scale);
        prop_assert!(close(
            mouse_screen_to_real(moved, anchor, new_scale),
            mouse_screen_to_real(position, anchor, scale),
        ));
    }

    #[test]
    fn prop_grid_is_bounded(
        position in points(),
        scale in scales(),
        width in 1.0..5000.0f64,
        height in 1.0..5000.0f64,
    ) {
        let grid = grid_lines(position, scale, Rect::new(width, height), MAX_GRID_LINES);
        prop_assert!(grid.vertical.len() <= MAX_GRID_LINES);
        prop_assert!(grid.horizontal.len() <= MAX_GRID_LINES);
        prop_assert!((width / scale / grid.step).floor() <= MAX_GRID_LINES as f64);
    }

    #[test]
    fn prop_step_is_power_of_ten(width in 1.0..5000.0f64, scale in scales()) {
        let step = get_step(width, scale, MAX_GRID_LINES);
        prop_assert!(step >= 10.0);
        let exponent = step.log10();
        prop_assert!((exponent - exponent.round()).abs() < 1e-9);
    }

    #[test]
    fn prop_next_scale_stays_in_range(scale in scales(), zoom_in in any::<bool>()) {
        let direction = if zoom_in { ZoomDirection::In } else { ZoomDirection::Out };
        let next = next_scale(scale, direction);
        prop_assert!((MIN_ZOOM..=MAX_ZOOM).contains(&next));
        prop_assert_eq!((next * 100.0).round() / 100.0, next);
    }
}
