// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Why a cluster could not be generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The content source has no items to bind stars to.
    #[error("content source is empty")]
    EmptySource,
}

/// Why a pattern catalog was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The catalog has no templates to choose from.
    #[error("pattern library has no templates")]
    EmptyLibrary,
    /// A template has no offsets.
    #[error("pattern `{template}` has no offsets")]
    EmptyTemplate {
        /// Template name.
        template: &'static str,
    },
    /// An edge references an offset the template does not have.
    #[error("pattern `{template}` edge {edge:?} is out of range for {offsets} offsets")]
    EdgeOutOfRange {
        /// Template name.
        template: &'static str,
        /// Offending edge.
        edge: (usize, usize),
        /// Number of offsets in the template.
        offsets: usize,
    },
    /// An edge connects an offset to itself.
    #[error("pattern `{template}` has a self edge on offset {offset}")]
    SelfEdge {
        /// Template name.
        template: &'static str,
        /// Offset index.
        offset: usize,
    },
}

/// Why a [`WorldConfig`](crate::WorldConfig) was rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Zoom limits are not finite and strictly positive, or are inverted.
    #[error("invalid zoom limits [{min}, {max}]")]
    ZoomLimits {
        /// Lower limit.
        min: f64,
        /// Upper limit.
        max: f64,
    },
    /// A value that must be finite and strictly positive is not.
    #[error("`{field}` must be finite and positive, got {value}")]
    NotPositive {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A value that must be finite and non‑negative is not.
    #[error("`{field}` must be finite and non-negative, got {value}")]
    Negative {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A sampling range is empty, inverted or not finite.
    #[error("`{field}` range [{lo}, {hi}) is empty or not finite")]
    EmptyRange {
        /// Field name.
        field: &'static str,
        /// Lower bound.
        lo: f64,
        /// Upper bound.
        hi: f64,
    },
    /// An expansion pass would generate nothing.
    #[error("expansion must generate at least one cluster per direction")]
    NoClustersPerDirection,
}
