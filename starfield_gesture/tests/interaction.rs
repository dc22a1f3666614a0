// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `starfield_gesture` interaction handler.
//!
//! These drive the handler with touch‑like event sequences the way a host
//! would, applying the returned camera commands to a tiny stand‑in camera.

use kurbo::Point;
use starfield_gesture::{
    CameraCommand, CameraSnapshot, GestureConfig, GestureEvent, GesturePhase, InteractionHandler,
};

#[derive(Debug)]
struct TestCamera {
    center: Point,
    zoom: f64,
}

impl TestCamera {
    fn snapshot(&self) -> CameraSnapshot {
        CameraSnapshot {
            center: self.center,
            zoom: self.zoom,
        }
    }

    fn apply(&mut self, cmd: Option<CameraCommand>) {
        match cmd {
            Some(CameraCommand::SetCenter(c)) => self.center = c,
            Some(CameraCommand::SetZoom(z)) => self.zoom = z.clamp(0.1, 10.0),
            Some(CameraCommand::ZoomBy(f)) => self.zoom = (self.zoom * f).clamp(0.1, 10.0),
            None => {}
        }
    }
}

fn touch_start(h: &mut InteractionHandler<usize>, cam: &TestCamera, at: Point, over: Option<usize>, now: u64) {
    h.handle(GestureEvent::PanStart { position: at }, now, cam.snapshot());
    if let Some(target) = over {
        h.handle(GestureEvent::PressStart { position: at, target }, now, cam.snapshot());
    }
}

#[test]
fn held_touch_fires_detail_exactly_once() {
    let cam = TestCamera { center: Point::ORIGIN, zoom: 1.0 };
    let mut h = InteractionHandler::default();
    touch_start(&mut h, &cam, Point::new(50.0, 50.0), Some(3), 10_000);

    let mut fired = Vec::new();
    for now in (10_000..=12_000).step_by(16) {
        if let Some(t) = h.tick(now) {
            fired.push((now, t));
        }
    }
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].1, 3);
    assert!(fired[0].0 >= 10_800);
}

#[test]
fn touch_move_at_500ms_prevents_detail() {
    let mut cam = TestCamera { center: Point::ORIGIN, zoom: 1.0 };
    let mut h = InteractionHandler::default();
    touch_start(&mut h, &cam, Point::new(50.0, 50.0), Some(3), 0);

    assert_eq!(h.tick(499), None);
    let cmd = h.handle(GestureEvent::PanMove { position: Point::new(52.0, 50.0) }, 500, cam.snapshot());
    cam.apply(cmd);

    for now in (500..=2_000).step_by(16) {
        assert_eq!(h.tick(now), None);
    }
    assert_eq!(cam.center, Point::new(-2.0, 0.0));
}

#[test]
fn touch_end_before_hold_prevents_detail() {
    let cam = TestCamera { center: Point::ORIGIN, zoom: 1.0 };
    let mut h = InteractionHandler::default();
    touch_start(&mut h, &cam, Point::ORIGIN, Some(9), 0);
    h.handle(GestureEvent::PressEnd, 300, cam.snapshot());
    h.handle(GestureEvent::PanEnd, 300, cam.snapshot());
    assert_eq!(h.tick(1_000), None);
    assert_eq!(h.phase(), GesturePhase::Idle);
}

#[test]
fn drag_then_pinch_then_release() {
    let mut cam = TestCamera { center: Point::new(10.0, 10.0), zoom: 1.0 };
    let mut h = InteractionHandler::default();

    touch_start(&mut h, &cam, Point::new(100.0, 100.0), None, 0);
    let cmd = h.handle(GestureEvent::PanMove { position: Point::new(90.0, 80.0) }, 16, cam.snapshot());
    cam.apply(cmd);
    assert_eq!(cam.center, Point::new(20.0, 30.0));

    h.handle(
        GestureEvent::PinchStart { first: Point::new(0.0, 0.0), second: Point::new(0.0, 40.0) },
        32,
        cam.snapshot(),
    );
    let cmd = h.handle(
        GestureEvent::PinchMove { first: Point::new(0.0, 0.0), second: Point::new(0.0, 1_000.0) },
        48,
        cam.snapshot(),
    );
    cam.apply(cmd);
    assert_eq!(cam.zoom, 10.0, "pinch zoom is clamped by the camera");

    h.handle(GestureEvent::PanEnd, 64, cam.snapshot());
    assert_eq!(h.phase(), GesturePhase::Idle);
}

#[test]
fn custom_hold_and_wheel_factors() {
    let config = GestureConfig {
        long_press_ms: 100,
        wheel_zoom_in: 2.0,
        wheel_zoom_out: 0.5,
    };
    let mut cam = TestCamera { center: Point::ORIGIN, zoom: 1.0 };
    let mut h = InteractionHandler::new(config);

    cam.apply(h.handle(GestureEvent::Wheel { delta_y: -1.0 }, 0, cam.snapshot()));
    cam.apply(h.handle(GestureEvent::Wheel { delta_y: -1.0 }, 0, cam.snapshot()));
    cam.apply(h.handle(GestureEvent::Wheel { delta_y: 1.0 }, 0, cam.snapshot()));
    assert_eq!(cam.zoom, 2.0);

    h.handle(GestureEvent::PressStart { position: Point::ORIGIN, target: 1 }, 0, cam.snapshot());
    assert_eq!(h.long_press_deadline(), Some(100));
    assert_eq!(h.tick(100), Some(1));
}
