// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction handler: turn tagged gesture events into camera commands.
//!
//! The handler is an explicit state machine over [`GesturePhase`]:
//!
//! - `Idle → Dragging` on [`GestureEvent::PanStart`], back to `Idle` on
//!   [`GestureEvent::PanEnd`].
//! - `Idle | Dragging → Pinching` on [`GestureEvent::PinchStart`], back to `Idle`
//!   on [`GestureEvent::PinchEnd`] or [`GestureEvent::PanEnd`].
//! - [`GestureEvent::Wheel`] zooms without a transition.
//!
//! In parallel, [`GestureEvent::PressStart`] arms a long‑press. Any move or end
//! event cancels it; [`InteractionHandler::tick`] reports it once it expires.
//!
//! The handler never owns the camera. Each event is evaluated against a
//! [`CameraSnapshot`] and may produce one [`CameraCommand`] for the caller to apply.
//!
//! ```
//! use kurbo::Point;
//! use starfield_gesture::{CameraCommand, CameraSnapshot, GestureEvent, InteractionHandler};
//!
//! let mut handler = InteractionHandler::<u32>::default();
//! let camera = CameraSnapshot { center: Point::ORIGIN, zoom: 1.0 };
//!
//! handler.handle(GestureEvent::PanStart { position: Point::new(10.0, 10.0) }, 0, camera);
//! let cmd = handler.handle(GestureEvent::PanMove { position: Point::new(30.0, 10.0) }, 16, camera);
//! assert_eq!(cmd, Some(CameraCommand::SetCenter(Point::new(-20.0, 0.0))));
//!
//! // Unmatched ends are harmless.
//! handler.handle(GestureEvent::PanEnd, 32, camera);
//! assert_eq!(handler.handle(GestureEvent::PanEnd, 40, camera), None);
//! ```

use kurbo::Point;

use crate::drag::DragState;
use crate::long_press::{DEFAULT_LONG_PRESS_MS, LongPress};
use crate::pinch::PinchState;

/// Pointer and touch input, already classified by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent<T> {
    /// A single pointer went down (mouse down or one‑finger touch start).
    PanStart {
        /// Screen position of the pointer.
        position: Point,
    },
    /// The single pointer moved.
    PanMove {
        /// Screen position of the pointer.
        position: Point,
    },
    /// The last pointer was released or left the surface.
    PanEnd,
    /// A second finger touched down.
    PinchStart {
        /// Screen position of the first contact.
        first: Point,
        /// Screen position of the second contact.
        second: Point,
    },
    /// Either pinch contact moved.
    PinchMove {
        /// Screen position of the first contact.
        first: Point,
        /// Screen position of the second contact.
        second: Point,
    },
    /// The pinch ended.
    PinchEnd,
    /// Mouse wheel; positive `delta_y` scrolls down and zooms out.
    Wheel {
        /// Vertical wheel delta as reported by the platform.
        delta_y: f64,
    },
    /// A press began over an activatable target.
    PressStart {
        /// Screen position of the press.
        position: Point,
        /// What the press is over.
        target: T,
    },
    /// The press was released.
    PressEnd,
}

/// Camera state the handler reads when interpreting an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSnapshot {
    /// World‑space camera center.
    pub center: Point,
    /// Current zoom factor.
    pub zoom: f64,
}

/// Camera change requested by the handler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraCommand {
    /// Move the camera center to a world‑space point.
    SetCenter(Point),
    /// Replace the zoom factor (the camera clamps it).
    SetZoom(f64),
    /// Multiply the zoom factor (the camera clamps it).
    ZoomBy(f64),
}

/// Coarse state of the handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer gesture in progress.
    #[default]
    Idle,
    /// A single pointer is dragging the camera.
    Dragging,
    /// Two contacts are zooming the camera.
    Pinching,
}

/// Tunables for [`InteractionHandler`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureConfig {
    /// Hold time before a press activates its target, in milliseconds.
    pub long_press_ms: u64,
    /// Zoom factor applied for a wheel scroll up.
    pub wheel_zoom_in: f64,
    /// Zoom factor applied for a wheel scroll down.
    pub wheel_zoom_out: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_press_ms: DEFAULT_LONG_PRESS_MS,
            wheel_zoom_in: 1.1,
            wheel_zoom_out: 0.9,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum State {
    Idle,
    Dragging(DragState),
    Pinching(PinchState),
}

/// Gesture state machine driving a camera.
#[derive(Clone, Debug)]
pub struct InteractionHandler<T> {
    config: GestureConfig,
    state: State,
    long_press: LongPress<T>,
}

impl<T> Default for InteractionHandler<T> {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl<T> InteractionHandler<T> {
    /// Creates an idle handler.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: State::Idle,
            long_press: LongPress::new(config.long_press_ms),
        }
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.state {
            State::Idle => GesturePhase::Idle,
            State::Dragging(_) => GesturePhase::Dragging,
            State::Pinching(_) => GesturePhase::Pinching,
        }
    }

    /// Target of the armed long‑press, for highlighting.
    #[must_use]
    pub fn pressed_target(&self) -> Option<&T> {
        self.long_press.armed()
    }

    /// When the armed long‑press will fire.
    #[must_use]
    pub fn long_press_deadline(&self) -> Option<u64> {
        self.long_press.deadline()
    }

    /// Feeds one event. Returns the camera change it implies, if any.
    pub fn handle(
        &mut self,
        event: GestureEvent<T>,
        now: u64,
        camera: CameraSnapshot,
    ) -> Option<CameraCommand> {
        match event {
            GestureEvent::PanStart { position } => {
                if matches!(self.state, State::Pinching(_)) {
                    return None;
                }
                let mut drag = DragState::default();
                drag.start(position, camera.center);
                self.state = State::Dragging(drag);
                None
            }
            GestureEvent::PanMove { position } => {
                self.long_press.cancel();
                match self.state {
                    State::Dragging(drag) => drag
                        .target_center(position, camera.zoom)
                        .map(CameraCommand::SetCenter),
                    _ => None,
                }
            }
            GestureEvent::PanEnd => {
                self.long_press.cancel();
                self.state = State::Idle;
                None
            }
            GestureEvent::PinchStart { first, second } => {
                let mut pinch = PinchState::default();
                if pinch.start(first, second, camera.zoom) {
                    self.long_press.cancel();
                    self.state = State::Pinching(pinch);
                }
                None
            }
            GestureEvent::PinchMove { first, second } => {
                self.long_press.cancel();
                match self.state {
                    State::Pinching(pinch) => pinch
                        .target_zoom(first, second)
                        .map(CameraCommand::SetZoom),
                    _ => None,
                }
            }
            GestureEvent::PinchEnd => {
                self.long_press.cancel();
                if matches!(self.state, State::Pinching(_)) {
                    self.state = State::Idle;
                }
                None
            }
            GestureEvent::Wheel { delta_y } => {
                if delta_y > 0.0 {
                    Some(CameraCommand::ZoomBy(self.config.wheel_zoom_out))
                } else if delta_y < 0.0 {
                    Some(CameraCommand::ZoomBy(self.config.wheel_zoom_in))
                } else {
                    None
                }
            }
            GestureEvent::PressStart { target, .. } => {
                self.long_press.arm(target, now);
                None
            }
            GestureEvent::PressEnd => {
                self.long_press.cancel();
                None
            }
        }
    }

    /// Advances timers. Returns the long‑press target if it fired.
    pub fn tick(&mut self, now: u64) -> Option<T> {
        self.long_press.tick(now)
    }

    /// Drops any gesture in progress and disarms the long‑press.
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.long_press.cancel();
    }
}
