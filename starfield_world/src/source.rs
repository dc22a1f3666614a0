// Copyright 2025 the Starfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The content boundary: the media items stars are bound to.

/// Index of a media item in a [`ContentSource`].
pub type MediaRef = usize;

/// One archive entry a star can display.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaItem {
    /// Stable identifier of the item.
    pub id: String,
    /// Thumbnail reference (usually a URL).
    pub thumbnail: String,
    /// Human‑readable title.
    pub title: String,
}

impl MediaItem {
    /// Creates an item.
    pub fn new(id: impl Into<String>, thumbnail: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            thumbnail: thumbnail.into(),
            title: title.into(),
        }
    }
}

/// Read‑only, cyclically indexed list of media items.
///
/// The engine never mutates a source; it only needs its length and random
/// access. Indices handed out by the engine are always `< len()`.
pub trait ContentSource {
    /// Number of items.
    fn len(&self) -> usize;

    /// Item at `index`, if in range.
    fn item(&self, index: MediaRef) -> Option<&MediaItem>;

    /// Returns `true` when there is nothing to show.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ContentSource for [MediaItem] {
    fn len(&self) -> usize {
        <[MediaItem]>::len(self)
    }

    fn item(&self, index: MediaRef) -> Option<&MediaItem> {
        self.get(index)
    }
}

impl ContentSource for Vec<MediaItem> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn item(&self, index: MediaRef) -> Option<&MediaItem> {
        self.get(index)
    }
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn item(&self, index: MediaRef) -> Option<&MediaItem> {
        (**self).item(index)
    }
}
