// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named constellation shapes used to stamp clusters.
//!
//! A template is a handful of offsets in local shape units (y pointing down)
//! plus edges between offset indices. The built‑in catalog mirrors a few
//! well‑known constellations.

use kurbo::Vec2;
use rand::Rng;

use crate::error::PatternError;

/// A named cluster shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatternTemplate {
    /// Display name.
    pub name: &'static str,
    /// Local offsets of each slot.
    pub offsets: &'static [Vec2],
    /// Edges between slot indices.
    pub edges: &'static [(usize, usize)],
}

impl PatternTemplate {
    fn validate(&self) -> Result<(), PatternError> {
        if self.offsets.is_empty() {
            return Err(PatternError::EmptyTemplate {
                template: self.name,
            });
        }
        for &(a, b) in self.edges {
            if a >= self.offsets.len() || b >= self.offsets.len() {
                return Err(PatternError::EdgeOutOfRange {
                    template: self.name,
                    edge: (a, b),
                    offsets: self.offsets.len(),
                });
            }
            if a == b {
                return Err(PatternError::SelfEdge {
                    template: self.name,
                    offset: a,
                });
            }
        }
        Ok(())
    }
}

const fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

/// Orion: shoulders, waist, belt and feet.
pub const ORION: PatternTemplate = PatternTemplate {
    name: "orion",
    offsets: &[
        v(-100.0, -150.0),
        v(100.0, -150.0),
        v(-50.0, -50.0),
        v(50.0, -50.0),
        v(-80.0, 50.0),
        v(0.0, 50.0),
        v(80.0, 50.0),
        v(-50.0, 150.0),
        v(50.0, 150.0),
    ],
    edges: &[(0, 2), (1, 3), (2, 4), (3, 6), (4, 5), (5, 6), (4, 7), (6, 8)],
};

/// The Big Dipper: bowl then handle.
pub const URSA_MAJOR: PatternTemplate = PatternTemplate {
    name: "ursa_major",
    offsets: &[
        v(-150.0, -100.0),
        v(-50.0, -120.0),
        v(50.0, -100.0),
        v(150.0, -50.0),
        v(150.0, 50.0),
        v(100.0, 100.0),
        v(50.0, 120.0),
    ],
    edges: &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (0, 3)],
};

/// Cassiopeia's W.
pub const CASSIOPEIA: PatternTemplate = PatternTemplate {
    name: "cassiopeia",
    offsets: &[
        v(-150.0, 0.0),
        v(-75.0, -50.0),
        v(0.0, 0.0),
        v(75.0, -50.0),
        v(150.0, 0.0),
    ],
    edges: &[(0, 1), (1, 2), (2, 3), (3, 4)],
};

/// Cygnus: head, neck, wings and tail.
pub const CYGNUS: PatternTemplate = PatternTemplate {
    name: "cygnus",
    offsets: &[
        v(0.0, -150.0),
        v(0.0, -50.0),
        v(-100.0, 0.0),
        v(0.0, 0.0),
        v(100.0, 0.0),
        v(0.0, 100.0),
    ],
    edges: &[(0, 1), (1, 3), (2, 3), (3, 4), (3, 5)],
};

/// Scorpius: head, body, tail.
pub const SCORPIUS: PatternTemplate = PatternTemplate {
    name: "scorpius",
    offsets: &[
        v(-100.0, -150.0),
        v(-50.0, -100.0),
        v(0.0, -50.0),
        v(50.0, 0.0),
        v(100.0, 50.0),
        v(120.0, 100.0),
        v(100.0, 150.0),
        v(50.0, 180.0),
        v(0.0, 200.0),
        v(-50.0, 180.0),
    ],
    edges: &[
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 8),
        (8, 9),
    ],
};

/// The built‑in catalog.
pub const BUILTIN_PATTERNS: &[PatternTemplate] = &[ORION, URSA_MAJOR, CASSIOPEIA, CYGNUS, SCORPIUS];

/// Immutable catalog of templates; selection is uniform.
#[derive(Clone, Debug)]
pub struct PatternLibrary {
    templates: Vec<PatternTemplate>,
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PatternLibrary {
    /// The built‑in constellation catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            templates: BUILTIN_PATTERNS.to_vec(),
        }
    }

    /// A custom catalog, validated up front.
    pub fn new(templates: impl Into<Vec<PatternTemplate>>) -> Result<Self, PatternError> {
        let templates = templates.into();
        if templates.is_empty() {
            return Err(PatternError::EmptyLibrary);
        }
        for t in &templates {
            t.validate()?;
        }
        Ok(Self { templates })
    }

    /// All templates.
    #[must_use]
    pub fn templates(&self) -> &[PatternTemplate] {
        &self.templates
    }

    /// Template with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PatternTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Largest slot count of any template.
    #[must_use]
    pub fn max_slots(&self) -> usize {
        self.templates
            .iter()
            .map(|t| t.offsets.len())
            .max()
            .unwrap_or(0)
    }

    /// Picks a template uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &PatternTemplate {
        &self.templates[rng.random_range(0..self.templates.len())]
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{BUILTIN_PATTERNS, PatternLibrary, PatternTemplate};
    use crate::error::PatternError;

    #[test]
    fn builtin_catalog_is_valid() {
        let lib = PatternLibrary::new(BUILTIN_PATTERNS).unwrap();
        assert_eq!(lib.templates().len(), 5);
        assert_eq!(lib.max_slots(), 10);
        assert_eq!(lib.get("orion").map(|t| t.offsets.len()), Some(9));
        assert_eq!(lib.get("orion").map(|t| t.edges.len()), Some(8));
    }

    #[test]
    fn rejects_bad_catalogs() {
        assert_eq!(
            PatternLibrary::new(Vec::<PatternTemplate>::new()).unwrap_err(),
            PatternError::EmptyLibrary
        );

        const BROKEN: PatternTemplate = PatternTemplate {
            name: "broken",
            offsets: &[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)],
            edges: &[(0, 2)],
        };
        assert_eq!(
            PatternLibrary::new([BROKEN]).unwrap_err(),
            PatternError::EdgeOutOfRange {
                template: "broken",
                edge: (0, 2),
                offsets: 2
            }
        );

        const LOOP: PatternTemplate = PatternTemplate {
            name: "loop",
            offsets: &[Vec2::new(0.0, 0.0)],
            edges: &[(0, 0)],
        };
        assert!(matches!(
            PatternLibrary::new([LOOP]),
            Err(PatternError::SelfEdge { offset: 0, .. })
        ));
    }

    #[test]
    fn choose_visits_every_template() {
        let lib = PatternLibrary::builtin();
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let t = lib.choose(&mut rng);
            let i = BUILTIN_PATTERNS.iter().position(|b| b.name == t.name).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
