// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-icon spatial and animation state.

use bitflags::bitflags;
use kurbo::{Point, Vec2};

use crate::record::{IconId, ItemRecord};

/// Depth an icon starts at before any layout has run.
pub const DEFAULT_DEPTH: f64 = 0.5;

/// Z-index cache seed matching the default depth.
const DEFAULT_Z_INDEX: i32 = 500;

bitflags! {
    /// Presentation bookkeeping flags for one icon.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct IconFlags: u8 {
        /// The icon is inside the culled viewport and should be drawn.
        const VISIBLE = 1;
        /// A live visual handle exists for the icon (possibly hidden).
        const HAS_HANDLE = 1 << 1;
    }
}

/// One renderable tile on the board.
///
/// The icon owns its [`ItemRecord`] plus all mutable spatial state the layout
/// and animation passes steer: the current position, the target the animator
/// approaches, a free-float velocity, and a normalized depth in `[0, 1]`
/// (`0` = nearest) that drives visual scale and stacking order.
///
/// Depth fields are kept private so the `[0, 1]` invariant cannot be broken;
/// the setters clamp.
#[derive(Clone, Debug)]
pub struct Icon {
    record: ItemRecord,
    /// Current board-space position, mutated every animation tick.
    pub position: Point,
    /// Position the animator steers toward; set by layout passes.
    pub target: Point,
    /// Velocity used only for free-floating (non-targeted) motion.
    pub velocity: Vec2,
    depth: f64,
    target_depth: f64,
    flags: IconFlags,
    last_z_index: i32,
}

impl Icon {
    /// Creates an icon at the origin with default depth and no handle.
    #[must_use]
    pub fn new(record: ItemRecord) -> Self {
        Self {
            record,
            position: Point::ZERO,
            target: Point::ZERO,
            velocity: Vec2::ZERO,
            depth: DEFAULT_DEPTH,
            target_depth: DEFAULT_DEPTH,
            flags: IconFlags::empty(),
            last_z_index: DEFAULT_Z_INDEX,
        }
    }

    /// Returns the underlying item record.
    #[must_use]
    pub fn record(&self) -> &ItemRecord {
        &self.record
    }

    /// Returns the stable item id.
    #[must_use]
    pub fn id(&self) -> IconId {
        self.record.id
    }

    /// Returns `true` if the item has media and can get a visual handle.
    #[must_use]
    pub fn can_render(&self) -> bool {
        self.record.media.is_some()
    }

    /// Returns `true` if this icon's record carries the given normalized tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.record.has_tag(tag)
    }

    /// Current depth in `[0, 1]`, `0` being nearest to the viewer.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Sets the current depth, clamped into `[0, 1]`.
    pub fn set_depth(&mut self, depth: f64) {
        self.depth = depth.clamp(0.0, 1.0);
    }

    /// Depth the animator steers toward.
    #[must_use]
    pub fn target_depth(&self) -> f64 {
        self.target_depth
    }

    /// Sets the target depth, clamped into `[0, 1]`.
    pub fn set_target_depth(&mut self, depth: f64) {
        self.target_depth = depth.clamp(0.0, 1.0);
    }

    /// Returns `true` while the icon is inside the culled viewport.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.contains(IconFlags::VISIBLE)
    }

    /// Records whether the icon is inside the culled viewport.
    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(IconFlags::VISIBLE, visible);
    }

    /// Returns `true` while a live visual handle exists for the icon.
    #[must_use]
    pub fn has_handle(&self) -> bool {
        self.flags.contains(IconFlags::HAS_HANDLE)
    }

    /// Records whether a live visual handle exists.
    pub fn set_handle(&mut self, present: bool) {
        self.flags.set(IconFlags::HAS_HANDLE, present);
    }

    /// Z-index last pushed to the presentation layer.
    ///
    /// Stacking order is only re-applied when the derived z-index moves far
    /// enough from this cached value, so tiny depth changes don't thrash the
    /// host's layer sorting.
    #[must_use]
    pub fn last_z_index(&self) -> i32 {
        self.last_z_index
    }

    /// Updates the cached z-index after the presentation layer applied it.
    pub fn set_last_z_index(&mut self, z_index: i32) {
        self.last_z_index = z_index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{IconId, Media};

    fn icon(id: u64) -> Icon {
        Icon::new(ItemRecord::new(IconId(id)))
    }

    #[test]
    fn new_icon_starts_at_default_depth_without_flags() {
        let icon = icon(1);
        assert_eq!(icon.depth(), DEFAULT_DEPTH);
        assert_eq!(icon.target_depth(), DEFAULT_DEPTH);
        assert!(!icon.is_visible());
        assert!(!icon.has_handle());
        assert_eq!(icon.last_z_index(), 500);
    }

    #[test]
    fn depth_setters_clamp_to_unit_range() {
        let mut icon = icon(1);
        icon.set_depth(-0.2);
        assert_eq!(icon.depth(), 0.0);
        icon.set_depth(1.7);
        assert_eq!(icon.depth(), 1.0);
        icon.set_target_depth(2.0);
        assert_eq!(icon.target_depth(), 1.0);
        icon.set_target_depth(0.3);
        assert_eq!(icon.target_depth(), 0.3);
    }

    #[test]
    fn can_render_requires_media() {
        let without = icon(1);
        assert!(!without.can_render());

        let with = Icon::new(ItemRecord::new(IconId(2)).with_media(Media::image("a.png")));
        assert!(with.can_render());
    }

    #[test]
    fn visibility_and_handle_flags_toggle_independently() {
        let mut icon = icon(1);
        icon.set_handle(true);
        icon.set_visible(true);
        assert!(icon.is_visible());
        assert!(icon.has_handle());

        icon.set_visible(false);
        assert!(!icon.is_visible());
        assert!(icon.has_handle());
    }
}
