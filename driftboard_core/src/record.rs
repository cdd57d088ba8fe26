// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ingestion schema: validated item records and media descriptors.
//!
//! The source data for a gallery is a flat list of loosely structured rows.
//! Everything ad hoc about those rows is resolved here, once, at the
//! ingestion boundary: missing fields become explicit `Option`s and tag
//! strings are normalized through [`normalize_tag`] before they are stored.
//! Downstream crates never re-check raw fields.

/// Opaque stable identifier of a portfolio item.
///
/// Ids come from the source data and are unique within one item list. They
/// are used to correlate icons with precomputed shape coordinates and to
/// report pick results back to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IconId(pub u64);

/// Kind of media a portfolio item carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaKind {
    /// A still image.
    Image,
    /// A video; the thumbnail (if any) stands in for it on the board.
    Video,
}

/// Media descriptor for one portfolio item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Media {
    /// What the display path points at.
    pub kind: MediaKind,
    /// Path of the full-resolution asset.
    pub path: String,
    /// Optional reduced-size preview used for board tiles.
    pub thumbnail: Option<String>,
}

impl Media {
    /// Creates an image descriptor with no thumbnail.
    #[must_use]
    pub fn image(path: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            path: path.into(),
            thumbnail: None,
        }
    }

    /// Creates a video descriptor with no thumbnail.
    #[must_use]
    pub fn video(path: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            path: path.into(),
            thumbnail: None,
        }
    }

    /// Attaches a thumbnail path.
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Returns the path a board tile should display.
    ///
    /// The thumbnail is preferred when present; videos in particular are
    /// represented by their thumbnail on the board.
    #[must_use]
    pub fn display_source(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or(&self.path)
    }
}

/// One validated portfolio item.
///
/// A record may lack media entirely; such items stay in the store but never
/// get a visual handle. Tags are normalized and deduplicated on insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRecord {
    /// Stable identifier from the source data.
    pub id: IconId,
    /// Optional display title.
    pub title: Option<String>,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Media descriptor, if the row carried one.
    pub media: Option<Media>,
    /// Normalized tags. Use [`ItemRecord::push_raw_tag`] to populate.
    pub tags: Vec<String>,
}

impl ItemRecord {
    /// Creates an empty record for the given id.
    #[must_use]
    pub fn new(id: IconId) -> Self {
        Self {
            id,
            title: None,
            description: None,
            media: None,
            tags: Vec::new(),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the media descriptor.
    #[must_use]
    pub fn with_media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    /// Normalizes `raw` and appends it to the tag list, ignoring values that
    /// fail normalization or are already present.
    pub fn push_raw_tag(&mut self, raw: &str) {
        if let Some(tag) = normalize_tag(raw)
            && !self.tags.contains(&tag)
        {
            self.tags.push(tag);
        }
    }

    /// Normalizes and appends several raw tag candidates.
    #[must_use]
    pub fn with_raw_tags<'a>(mut self, raw: impl IntoIterator<Item = &'a str>) -> Self {
        for candidate in raw {
            self.push_raw_tag(candidate);
        }
        self
    }

    /// Returns `true` if this record carries the given (already normalized) tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Normalizes one raw tag candidate from the source data.
///
/// Returns `None` for values that are not usable as tags: whitespace-only
/// strings, strings shorter than 2 or at least 100 characters after
/// trimming, and URL-ish values (`http`/`www.` prefixes). Source rows mix
/// tags with links and free-form descriptions in the same columns, so this
/// filter runs once at ingestion.
#[must_use]
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < 2 || trimmed.chars().count() >= 100 {
        return None;
    }
    if trimmed.starts_with("http") || trimmed.starts_with("www.") {
        return None;
    }
    Some(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_tag_accepts_plain_labels() {
        assert_eq!(normalize_tag("ceramics"), Some("ceramics".to_owned()));
        assert_eq!(normalize_tag("  3d print  "), Some("3d print".to_owned()));
    }

    #[test]
    fn normalize_tag_rejects_short_and_long_values() {
        assert_eq!(normalize_tag(""), None);
        assert_eq!(normalize_tag(" c "), None);
        let long = "x".repeat(100);
        assert_eq!(normalize_tag(&long), None);
        // 99 characters is still acceptable.
        let just_under = "x".repeat(99);
        assert!(normalize_tag(&just_under).is_some());
    }

    #[test]
    fn normalize_tag_rejects_urls() {
        assert_eq!(normalize_tag("http://example.com"), None);
        assert_eq!(normalize_tag("https://example.com"), None);
        assert_eq!(normalize_tag("www.example.com"), None);
    }

    #[test]
    fn push_raw_tag_deduplicates() {
        let mut record = ItemRecord::new(IconId(1));
        record.push_raw_tag("ceramics");
        record.push_raw_tag(" ceramics ");
        record.push_raw_tag("glass");
        assert_eq!(record.tags, vec!["ceramics".to_owned(), "glass".to_owned()]);
    }

    #[test]
    fn display_source_prefers_thumbnail() {
        let plain = Media::image("full.png");
        assert_eq!(plain.display_source(), "full.png");

        let with_thumb = Media::video("clip.mp4").with_thumbnail("thumb.png");
        assert_eq!(with_thumb.display_source(), "thumb.png");
    }

    #[test]
    fn has_tag_matches_normalized_tags_only() {
        let record = ItemRecord::new(IconId(3)).with_raw_tags(["sculpture", "http://x.test"]);
        assert!(record.has_tag("sculpture"));
        assert!(!record.has_tag("http://x.test"));
    }
}
