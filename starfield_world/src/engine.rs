// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine facade: one object a host drives with input, time and a view size.

use core::fmt;

use hashbrown::HashSet;
use kurbo::{Point, Rect, Size};
use rand::Rng;
use starfield_gesture::{CameraCommand, CameraSnapshot, GestureEvent, InteractionHandler};
use starfield_view::{Camera, ViewCuller};

use crate::backdrop::{Backdrop, DEFAULT_BACKDROP_POINTS};
use crate::config::WorldConfig;
use crate::error::ConfigError;
use crate::expansion::{ExpansionInput, ExpansionReport, ExpansionScheduler};
use crate::minimap::{Minimap, MinimapConfig, minimap};
use crate::pattern::PatternLibrary;
use crate::seed::seed_rings;
use crate::source::{ContentSource, MediaRef};
use crate::star::{Star, StarId};
use crate::world::{Retention, World};

/// Callback invoked with the media index of an activated star.
pub type ActivateFn = Box<dyn FnMut(MediaRef)>;

/// One star ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStar {
    /// Star identity.
    pub id: StarId,
    /// Media to show.
    pub media: MediaRef,
    /// Screen‑space center of the thumbnail.
    pub screen: Point,
    /// Stacking hint; the list is sorted by it, ascending.
    pub z: f64,
    /// Cosmetic scale factor.
    pub size: f64,
    /// Cosmetic brightness.
    pub brightness: f64,
    /// The star is under an armed long‑press.
    pub highlighted: bool,
}

/// One constellation line between two visible stars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderEdge {
    /// Star the edge starts at.
    pub from: StarId,
    /// Star the edge ends at.
    pub to: StarId,
    /// Screen position of `from`.
    pub from_screen: Point,
    /// Screen position of `to`.
    pub to_screen: Point,
}

/// Everything the host needs to draw one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderFrame {
    /// Current zoom.
    pub zoom: f64,
    /// Buffered world rect the stars were culled against.
    pub visible: Rect,
    /// Visible stars, back to front.
    pub stars: Vec<RenderStar>,
    /// Edges whose endpoints are both visible.
    pub edges: Vec<RenderEdge>,
}

/// What happened during one [`Engine::tick`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Media activated by a long‑press that expired this tick.
    pub activated: Option<MediaRef>,
    /// Expansion pass that ran this tick.
    pub expansion: Option<ExpansionReport>,
    /// Stars evicted after the pass.
    pub evicted: usize,
}

#[derive(Clone, Debug)]
struct VisibleCache {
    rect: Rect,
    revision: u64,
    slots: Vec<usize>,
}

/// Procedural constellation canvas.
///
/// The engine owns the camera, the world, the gesture handler and the
/// expansion scheduler. The host feeds it gestures and view size changes,
/// calls [`Engine::tick`] from its event loop, and draws [`Engine::frame`].
/// Time is always passed in as milliseconds on any monotonic clock.
pub struct Engine<S, R> {
    config: WorldConfig,
    source: S,
    rng: R,
    library: PatternLibrary,
    world: World,
    camera: Camera,
    culler: ViewCuller,
    view_size: Size,
    gestures: InteractionHandler<StarId>,
    scheduler: ExpansionScheduler,
    backdrop: Backdrop,
    seeded: bool,
    visible_cache: Option<VisibleCache>,
    on_activate: Option<ActivateFn>,
}

impl<S, R> fmt::Debug for Engine<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("camera", &self.camera)
            .field("view_size", &self.view_size)
            .field("stars", &self.world.len())
            .field("phase", &self.gestures.phase())
            .field("seeded", &self.seeded)
            .finish_non_exhaustive()
    }
}

impl<S: ContentSource, R: Rng> Engine<S, R> {
    /// Creates an engine with the built‑in pattern catalog.
    ///
    /// The world is seeded immediately when `source` has items.
    pub fn new(config: WorldConfig, source: S, rng: R) -> Result<Self, ConfigError> {
        Self::with_library(config, PatternLibrary::builtin(), source, rng)
    }

    /// Creates an engine with a custom pattern catalog.
    pub fn with_library(
        config: WorldConfig,
        library: PatternLibrary,
        source: S,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let backdrop = Backdrop::generate(&mut rng, DEFAULT_BACKDROP_POINTS);
        let mut engine = Self {
            config,
            source,
            rng,
            library,
            world: World::new(config.index_cell_size),
            camera: Camera::with_zoom_limits(config.min_zoom, config.max_zoom),
            culler: ViewCuller::new(config.cull_buffer),
            view_size: Size::ZERO,
            gestures: InteractionHandler::new(config.gestures),
            scheduler: ExpansionScheduler::new(config.expansion),
            backdrop,
            seeded: false,
            visible_cache: None,
            on_activate: None,
        };
        engine.culler.update(&engine.camera, engine.view_size);
        engine.seed_if_needed();
        Ok(engine)
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Content the stars are bound to.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The expansion scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &ExpansionScheduler {
        &self.scheduler
    }

    /// The gesture handler.
    #[must_use]
    pub fn gestures(&self) -> &InteractionHandler<StarId> {
        &self.gestures
    }

    /// Background dots generated at construction.
    #[must_use]
    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    /// Current view size in pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Buffered world rect currently considered visible.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        self.culler.rect()
    }

    /// Earliest time at which [`Engine::tick`] has something to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.scheduler.next_deadline(), self.gestures.long_press_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Installs the activation callback, replacing any previous one.
    pub fn set_on_activate(&mut self, callback: impl FnMut(MediaRef) + 'static) {
        self.on_activate = Some(Box::new(callback));
    }

    /// Resizes the view.
    pub fn set_view_size(&mut self, size: Size, now: u64) {
        if !(size.width.is_finite() && size.height.is_finite()) {
            return;
        }
        self.view_size = Size::new(size.width.max(0.0), size.height.max(0.0));
        self.refresh_view(now);
    }

    /// Feeds one gesture and applies the camera change it implies.
    pub fn handle_gesture(&mut self, event: GestureEvent<StarId>, now: u64) {
        let snapshot = CameraSnapshot {
            center: self.camera.center(),
            zoom: self.camera.zoom(),
        };
        let Some(command) = self.gestures.handle(event, now, snapshot) else {
            return;
        };
        match command {
            CameraCommand::SetCenter(center) => self.camera.set_center(center),
            CameraCommand::SetZoom(zoom) => self.camera.set_zoom(zoom),
            CameraCommand::ZoomBy(factor) => self.camera.zoom_by(factor),
        }
        self.refresh_view(now);
    }

    /// Moves the camera center directly, as a programmatic pan.
    pub fn set_camera_center(&mut self, center: Point, now: u64) {
        self.camera.set_center(center);
        self.refresh_view(now);
    }

    /// Sets the zoom directly; the camera clamps it.
    pub fn set_zoom(&mut self, zoom: f64, now: u64) {
        self.camera.set_zoom(zoom);
        self.refresh_view(now);
    }

    /// Advances every timer to `now`.
    pub fn tick(&mut self, now: u64) -> TickReport {
        let mut report = TickReport::default();

        if let Some(id) = self.gestures.tick(now) {
            report.activated = self.activate(id);
        }

        let input = ExpansionInput {
            visible: self.culler.rect(),
            center: self.camera.center(),
            library: &self.library,
            params: &self.config.cluster,
            source: &self.source,
        };
        report.expansion = self
            .scheduler
            .tick(now, &input, &mut self.world, &mut self.rng);

        let expanded = report.expansion.as_ref().is_some_and(|e| !e.is_empty());
        if let (true, Retention::EvictBeyond { distance }) = (expanded, self.config.retention) {
            report.evicted = self.world.evict_beyond(self.camera.center(), distance);
            if report.evicted > 0 {
                tracing::debug!(evicted = report.evicted, distance, "evicted far clusters");
            }
        }
        report
    }

    /// Visible stars in append order.
    pub fn visible_stars(&mut self) -> Vec<&Star> {
        let stars = self.world.stars();
        let slots = Self::cached_slots(&mut self.visible_cache, &self.world, self.culler.rect());
        slots.iter().map(|&i| &stars[i]).collect()
    }

    /// Builds the draw list for the current state.
    pub fn frame(&mut self) -> RenderFrame {
        let visible = self.culler.rect();
        let slots = Self::cached_slots(&mut self.visible_cache, &self.world, visible);
        let stars = self.world.stars();
        let pressed = self.gestures.pressed_target().copied();

        let mut render: Vec<RenderStar> = slots
            .iter()
            .map(|&i| {
                let s = &stars[i];
                RenderStar {
                    id: s.id,
                    media: s.media,
                    screen: self.camera.world_to_screen(s.position, self.view_size),
                    z: s.z,
                    size: s.size,
                    brightness: s.brightness,
                    highlighted: pressed == Some(s.id),
                }
            })
            .collect();

        let shown: HashSet<StarId> = render.iter().map(|s| s.id).collect();
        let mut edges = Vec::new();
        for &i in slots {
            let s = &stars[i];
            for &to in &s.connections {
                if !shown.contains(&to) {
                    continue;
                }
                if let Some(target) = self.world.get(to) {
                    edges.push(RenderEdge {
                        from: s.id,
                        to,
                        from_screen: self.camera.world_to_screen(s.position, self.view_size),
                        to_screen: self.camera.world_to_screen(target.position, self.view_size),
                    });
                }
            }
        }

        render.sort_by(|a, b| a.z.total_cmp(&b.z));
        RenderFrame {
            zoom: self.camera.zoom(),
            visible,
            stars: render,
            edges,
        }
    }

    /// Topmost visible star whose thumbnail covers `screen`.
    pub fn pick(&mut self, screen: Point) -> Option<StarId> {
        let thumb = self.config.thumbnail_size();
        let zoom = self.camera.zoom();
        let slots = Self::cached_slots(&mut self.visible_cache, &self.world, self.culler.rect());
        let stars = self.world.stars();
        slots
            .iter()
            .map(|&i| &stars[i])
            .filter(|s| {
                let center = self.camera.world_to_screen(s.position, self.view_size);
                let half_w = thumb.width * s.size * zoom / 2.0;
                let half_h = thumb.height * s.size * zoom / 2.0;
                (screen.x - center.x).abs() <= half_w && (screen.y - center.y).abs() <= half_h
            })
            .max_by(|a, b| a.z.total_cmp(&b.z))
            .map(|s| s.id)
    }

    /// Activates whatever is under `screen`, as a click or tap would.
    pub fn click(&mut self, screen: Point) -> Option<MediaRef> {
        let id = self.pick(screen)?;
        self.activate(id)
    }

    /// Builds the overview map.
    #[must_use]
    pub fn minimap(&self, config: MinimapConfig) -> Minimap {
        minimap(&self.world, &self.camera, self.view_size, config)
    }

    /// Swaps the content source and starts a fresh world bound to it.
    ///
    /// Returns the previous source.
    pub fn replace_source(&mut self, source: S, now: u64) -> S {
        let previous = core::mem::replace(&mut self.source, source);
        self.world.clear();
        self.scheduler.reset();
        self.gestures.reset();
        self.visible_cache = None;
        self.seeded = false;
        self.seed_if_needed();
        self.scheduler.notify_view_changed(now);
        previous
    }

    fn seed_if_needed(&mut self) {
        if self.seeded || !self.world.is_empty() || self.source.is_empty() {
            return;
        }
        match seed_rings(
            &mut self.world,
            &self.library,
            &self.config.cluster,
            &self.config.rings,
            &self.source,
            &mut self.rng,
        ) {
            Ok(_) => self.seeded = true,
            Err(err) => tracing::warn!(%err, "initial seeding failed"),
        }
    }

    fn refresh_view(&mut self, now: u64) {
        if self.culler.update(&self.camera, self.view_size) {
            self.scheduler.notify_view_changed(now);
        }
    }

    fn activate(&mut self, id: StarId) -> Option<MediaRef> {
        let Some(media) = self.world.get(id).map(|s| s.media) else {
            tracing::trace!(?id, "activation for a star that no longer exists");
            return None;
        };
        if let Some(callback) = self.on_activate.as_mut() {
            callback(media);
        }
        Some(media)
    }

    fn cached_slots<'c>(
        cache: &'c mut Option<VisibleCache>,
        world: &World,
        rect: Rect,
    ) -> &'c [usize] {
        let fresh = cache
            .as_ref()
            .is_some_and(|c| c.rect == rect && c.revision == world.revision());
        if !fresh {
            *cache = Some(VisibleCache {
                rect,
                revision: world.revision(),
                slots: world.visible_slots(rect),
            });
        }
        match cache {
            Some(c) => &c.slots,
            None => &[],
        }
    }
}
