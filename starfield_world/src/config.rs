// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use starfield_gesture::GestureConfig;
use starfield_view::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};

use crate::cluster::{ClusterParams, Span};
use crate::error::ConfigError;
use crate::expansion::ExpansionConfig;
use crate::seed::SeedRings;
use crate::world::Retention;

/// Every tunable of an [`Engine`](crate::Engine).
///
/// The defaults reproduce the reference behavior: zoom in `[0.1, 10]`, a
/// 1000‑unit culling buffer, 96 × 56 px thumbnails and an append‑only world.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Smallest allowed zoom.
    pub min_zoom: f64,
    /// Largest allowed zoom.
    pub max_zoom: f64,
    /// World units added around the viewport on each side before culling.
    pub cull_buffer: f64,
    /// Cell edge of the world's spatial index, in world units.
    pub index_cell_size: f64,
    /// Random ranges for new clusters.
    pub cluster: ClusterParams,
    /// Initial layout.
    pub rings: SeedRings,
    /// Expansion timing and placement.
    pub expansion: ExpansionConfig,
    /// Gesture tunables.
    pub gestures: GestureConfig,
    /// Unscaled thumbnail width in pixels, used for hit testing.
    pub thumbnail_width: f64,
    /// Unscaled thumbnail height in pixels, used for hit testing.
    pub thumbnail_height: f64,
    /// What to do with far away content.
    pub retention: Retention,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            cull_buffer: 1000.0,
            index_cell_size: starfield_index::DEFAULT_CELL_SIZE,
            cluster: ClusterParams::default(),
            rings: SeedRings::default(),
            expansion: ExpansionConfig::default(),
            gestures: GestureConfig::default(),
            thumbnail_width: 96.0,
            thumbnail_height: 56.0,
            retention: Retention::KeepAll,
        }
    }
}

impl WorldConfig {
    /// Unscaled thumbnail size.
    #[must_use]
    pub fn thumbnail_size(&self) -> Size {
        Size::new(self.thumbnail_width, self.thumbnail_height)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_zoom.is_finite()
            && self.max_zoom.is_finite()
            && self.min_zoom > 0.0
            && self.min_zoom <= self.max_zoom)
        {
            return Err(ConfigError::ZoomLimits {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }

        non_negative("cull_buffer", self.cull_buffer)?;
        positive("index_cell_size", self.index_cell_size)?;
        positive("thumbnail_width", self.thumbnail_width)?;
        positive("thumbnail_height", self.thumbnail_height)?;

        let c = &self.cluster;
        range("cluster.scale", c.scale)?;
        range("cluster.rotation", c.rotation)?;
        range("cluster.z", c.z)?;
        range("cluster.size", c.size)?;
        range("cluster.brightness", c.brightness)?;

        positive("rings.ring_step", self.rings.ring_step)?;
        non_negative("rings.max_radius", self.rings.max_radius)?;
        positive("rings.spacing", self.rings.spacing)?;
        non_negative("rings.jitter", self.rings.jitter)?;

        let e = &self.expansion;
        non_negative("expansion.margin", e.margin)?;
        non_negative("expansion.offset", e.offset)?;
        non_negative("expansion.jitter", e.jitter)?;
        if e.clusters_per_direction == 0 {
            return Err(ConfigError::NoClustersPerDirection);
        }

        let g = &self.gestures;
        positive("gestures.wheel_zoom_in", g.wheel_zoom_in)?;
        positive("gestures.wheel_zoom_out", g.wheel_zoom_out)?;

        if let Retention::EvictBeyond { distance } = self.retention {
            positive("retention.distance", distance)?;
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn range(field: &'static str, span: Span) -> Result<(), ConfigError> {
    if span.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::EmptyRange {
            field,
            lo: span.lo,
            hi: span.hi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::WorldConfig;
    use crate::cluster::Span;
    use crate::error::ConfigError;
    use crate::world::Retention;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(WorldConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_zoom_limits() {
        for (min, max) in [(0.0, 1.0), (2.0, 1.0), (f64::NAN, 1.0), (0.1, f64::INFINITY)] {
            let config = WorldConfig {
                min_zoom: min,
                max_zoom: max,
                ..WorldConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::ZoomLimits { .. })),
                "({min}, {max})"
            );
        }
    }

    #[test]
    fn rejects_inverted_ranges_and_zero_clusters() {
        let mut config = WorldConfig::default();
        config.cluster.scale = Span::new(4.0, 2.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyRange {
                field: "cluster.scale",
                ..
            })
        ));

        let mut config = WorldConfig::default();
        config.expansion.clusters_per_direction = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoClustersPerDirection));

        let mut config = WorldConfig::default();
        config.rings.ring_step = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "rings.ring_step",
                ..
            })
        ));
    }

    #[test]
    fn eviction_distance_must_be_positive() {
        let config = WorldConfig {
            retention: Retention::EvictBeyond { distance: -5.0 },
            ..WorldConfig::default()
        };
        assert!(config.validate().is_err());
        let config = WorldConfig {
            retention: Retention::EvictBeyond { distance: 8000.0 },
            ..WorldConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
