// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// Default lower zoom bound.
pub const DEFAULT_MIN_ZOOM: f64 = 0.1;
/// Default upper zoom bound.
pub const DEFAULT_MAX_ZOOM: f64 = 10.0;

/// Camera over an unbounded world‑space plane.
///
/// The camera is a world‑space `center` plus a uniform `zoom` factor (screen
/// pixels per world unit). The center of the view always shows `center`, and
/// zooming is anchored there: there is no cursor‑anchored zoom.
///
/// Every mutator keeps the camera valid. Zoom never leaves
/// `[min_zoom, max_zoom]` and the center never becomes non‑finite, whatever
/// the input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    center: Point,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            zoom: 1.0,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl Camera {
    /// Creates a camera at the origin with zoom `1.0` and the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a camera with explicit zoom limits.
    ///
    /// See [`Camera::set_zoom_limits`] for how degenerate limits are handled.
    #[must_use]
    pub fn with_zoom_limits(min_zoom: f64, max_zoom: f64) -> Self {
        let mut camera = Self::default();
        camera.set_zoom_limits(min_zoom, max_zoom);
        camera
    }

    /// World‑space point shown at the center of the view.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Lower zoom bound.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Upper zoom bound.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Sets the zoom range and re‑clamps the current zoom into it.
    ///
    /// The pair is normalized so that `min <= max`. Limits that are not
    /// finite and strictly positive are rejected and leave the camera as is.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let valid = |z: f64| z.is_finite() && z > 0.0;
        if !valid(min_zoom) || !valid(max_zoom) {
            return;
        }
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// Sets the zoom factor.
    ///
    /// - Finite positive values are clamped into the zoom range.
    /// - `+inf` stores the maximum zoom.
    /// - Zero, negative values and `-inf` store the minimum zoom.
    /// - `NaN` is ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if let Some(zoom) = self.sanitize_zoom(zoom) {
            self.zoom = zoom;
        }
    }

    /// Multiplies the zoom by `factor`, anchored at the view center.
    ///
    /// The product goes through the same rules as [`Camera::set_zoom`], so
    /// extreme factors pin to a limit rather than corrupting the camera.
    pub fn zoom_by(&mut self, factor: f64) {
        if factor.is_nan() {
            return;
        }
        self.set_zoom(self.zoom * factor);
    }

    /// Translates the center by a world‑space delta.
    ///
    /// Callers translating screen drags should divide by [`Camera::zoom`]
    /// first so pan speed does not depend on zoom. Non‑finite deltas are
    /// ignored.
    pub fn pan(&mut self, delta: Vec2) {
        let next = self.center + delta;
        if next.is_finite() {
            self.center = next;
        }
    }

    /// Moves the center to `center`. Non‑finite points are ignored.
    pub fn set_center(&mut self, center: Point) {
        if center.is_finite() {
            self.center = center;
        }
    }

    /// World‑space rectangle covered by a view of `view_size` pixels, grown by
    /// `buffer` world units on every side.
    #[must_use]
    pub fn visible_rect(&self, view_size: Size, buffer: f64) -> Rect {
        let half_w = (view_size.width / self.zoom / 2.0).max(0.0);
        let half_h = (view_size.height / self.zoom / 2.0).max(0.0);
        let buffer = buffer.max(0.0);
        Rect::new(
            self.center.x - half_w - buffer,
            self.center.y - half_h - buffer,
            self.center.x + half_w + buffer,
            self.center.y + half_h + buffer,
        )
    }

    /// Projects a world‑space point into screen space for a view of `view_size`.
    #[must_use]
    pub fn world_to_screen(&self, world: Point, view_size: Size) -> Point {
        let half = Vec2::new(view_size.width / 2.0, view_size.height / 2.0);
        ((world - self.center) * self.zoom + half).to_point()
    }

    /// Inverse of [`Camera::world_to_screen`].
    #[must_use]
    pub fn screen_to_world(&self, screen: Point, view_size: Size) -> Point {
        let half = Vec2::new(view_size.width / 2.0, view_size.height / 2.0);
        self.center + (screen.to_vec2() - half) / self.zoom
    }

    /// World units covered by one screen pixel.
    #[must_use]
    pub fn world_units_per_pixel(&self) -> f64 {
        1.0 / self.zoom
    }

    /// Snapshot of the camera for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self, view_size: Size) -> CameraDebugInfo {
        CameraDebugInfo {
            center: self.center,
            zoom: self.zoom,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            view_size,
            visible_world_rect: self.visible_rect(view_size, 0.0),
        }
    }

    fn sanitize_zoom(&self, zoom: f64) -> Option<f64> {
        if zoom.is_nan() {
            return None;
        }
        if zoom <= 0.0 {
            return Some(self.min_zoom);
        }
        Some(zoom.clamp(self.min_zoom, self.max_zoom))
    }
}

/// Debug snapshot of a [`Camera`].
#[derive(Clone, Copy, Debug)]
pub struct CameraDebugInfo {
    /// World‑space center.
    pub center: Point,
    /// Current zoom factor.
    pub zoom: f64,
    /// Lower zoom bound.
    pub min_zoom: f64,
    /// Upper zoom bound.
    pub max_zoom: f64,
    /// View size the snapshot was taken for.
    pub view_size: Size,
    /// Unbuffered world rectangle visible through the view.
    pub visible_world_rect: Rect,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::Camera;

    #[test]
    fn world_screen_roundtrip() {
        let mut cam = Camera::new();
        cam.set_center(Point::new(120.0, -40.0));
        cam.set_zoom(2.5);
        let size = Size::new(800.0, 600.0);

        let world = Point::new(10.0, -5.0);
        let back = cam.screen_to_world(cam.world_to_screen(world, size), size);
        assert!((back.x - world.x).abs() < 1e-9);
        assert!((back.y - world.y).abs() < 1e-9);
    }

    #[test]
    fn center_projects_to_view_center() {
        let mut cam = Camera::new();
        cam.set_center(Point::new(500.0, 500.0));
        cam.set_zoom(3.0);
        let size = Size::new(800.0, 600.0);
        assert_eq!(cam.world_to_screen(cam.center(), size), Point::new(400.0, 300.0));
    }

    #[test]
    fn zoom_by_keeps_center_fixed() {
        let mut cam = Camera::new();
        cam.set_center(Point::new(7.0, 9.0));
        cam.zoom_by(1.1);
        cam.zoom_by(0.9);
        assert_eq!(cam.center(), Point::new(7.0, 9.0));
    }

    #[test]
    fn degenerate_zoom_inputs_are_clamped_or_ignored() {
        let mut cam = Camera::new();

        cam.set_zoom(0.0);
        assert_eq!(cam.zoom(), cam.min_zoom());

        cam.set_zoom(-3.0);
        assert_eq!(cam.zoom(), cam.min_zoom());

        cam.set_zoom(f64::INFINITY);
        assert_eq!(cam.zoom(), cam.max_zoom());

        cam.set_zoom(f64::NEG_INFINITY);
        assert_eq!(cam.zoom(), cam.min_zoom());

        cam.set_zoom(2.0);
        cam.set_zoom(f64::NAN);
        assert_eq!(cam.zoom(), 2.0);

        cam.zoom_by(f64::NAN);
        assert_eq!(cam.zoom(), 2.0);
    }

    #[test]
    fn non_finite_pan_is_ignored() {
        let mut cam = Camera::new();
        cam.pan(Vec2::new(f64::INFINITY, 0.0));
        cam.pan(Vec2::new(0.0, f64::NAN));
        assert_eq!(cam.center(), Point::ORIGIN);

        cam.pan(Vec2::new(3.0, -4.0));
        assert_eq!(cam.center(), Point::new(3.0, -4.0));
    }

    #[test]
    fn zoom_limits_normalize_and_reclamp() {
        let mut cam = Camera::new();
        cam.set_zoom(8.0);
        cam.set_zoom_limits(4.0, 0.5);
        assert_eq!(cam.min_zoom(), 0.5);
        assert_eq!(cam.max_zoom(), 4.0);
        assert_eq!(cam.zoom(), 4.0);

        cam.set_zoom_limits(0.0, 2.0);
        assert_eq!(cam.min_zoom(), 0.5, "non-positive limits are rejected");
    }

    #[test]
    fn visible_rect_scales_with_zoom_and_buffer() {
        let mut cam = Camera::new();
        cam.set_zoom(2.0);
        let rect = cam.visible_rect(Size::new(800.0, 600.0), 100.0);
        assert_eq!(rect.x0, -300.0);
        assert_eq!(rect.x1, 300.0);
        assert_eq!(rect.y0, -250.0);
        assert_eq!(rect.y1, 250.0);

        let info = cam.debug_info(Size::new(800.0, 600.0));
        assert_eq!(info.visible_world_rect.width(), 400.0);
    }
}
