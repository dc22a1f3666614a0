// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for `starfield_view`.
//!
//! These hammer the camera with arbitrary gesture‑sized and pathological inputs
//! and check that zoom stays in range and culling matches the plain predicate.

use kurbo::{Point, Rect, Size, Vec2};
use proptest::prelude::*;
use starfield_view::{Camera, ViewCuller, filter};

fn zoom_factor() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(-1.0),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(f64::NAN),
        Just(f64::MAX),
        Just(f64::MIN_POSITIVE),
        -1e6_f64..1e6,
        0.5_f64..2.0,
    ]
}

proptest! {
    #[test]
    fn zoom_stays_within_limits(factors in prop::collection::vec(zoom_factor(), 0..64)) {
        let mut camera = Camera::new();
        for f in factors {
            camera.zoom_by(f);
            prop_assert!(camera.zoom() >= camera.min_zoom());
            prop_assert!(camera.zoom() <= camera.max_zoom());
            prop_assert!(camera.zoom().is_finite());
        }
    }

    #[test]
    fn pan_is_zoom_invariant_in_screen_space(
        dx in -500.0_f64..500.0,
        dy in -500.0_f64..500.0,
        zoom in 0.1_f64..10.0,
    ) {
        let view = Size::new(800.0, 600.0);
        let mut camera = Camera::new();
        camera.set_zoom(zoom);
        let probe = Point::new(12.0, 34.0);
        let before = camera.world_to_screen(probe, view);
        camera.pan(Vec2::new(dx, dy) / camera.zoom());
        let after = camera.world_to_screen(probe, view);
        prop_assert!((before.x - after.x - dx).abs() < 1e-6);
        prop_assert!((before.y - after.y - dy).abs() < 1e-6);
    }

    #[test]
    fn culled_set_is_exactly_the_points_inside(
        points in prop::collection::vec((-3000.0_f64..3000.0, -3000.0_f64..3000.0), 0..200),
        cx in -1000.0_f64..1000.0,
        cy in -1000.0_f64..1000.0,
        zoom in 0.1_f64..10.0,
    ) {
        let points: Vec<Point> = points.into_iter().map(Point::from).collect();
        let mut camera = Camera::new();
        camera.set_center(Point::new(cx, cy));
        camera.set_zoom(zoom);
        let mut culler = ViewCuller::new(250.0);
        culler.update(&camera, Size::new(640.0, 480.0));
        let rect: Rect = culler.rect();

        let visible = filter(&points, rect);
        let expected = points
            .iter()
            .filter(|p| p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1)
            .count();
        prop_assert_eq!(visible.len(), expected);
        for p in visible {
            prop_assert!(rect.x0 <= p.x && p.x <= rect.x1);
            prop_assert!(rect.y0 <= p.y && p.y <= rect.y1);
        }
    }
}
