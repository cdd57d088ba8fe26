// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Active layout mode of the board.
///
/// Exactly one mode is active at a time. Switching modes regenerates every
/// icon's target; targets from the previous mode are never reused.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Icons scatter across the board and free-float with their velocities.
    #[default]
    Random,
    /// Icons matching the tag cluster around its anchor; the rest are pushed
    /// away. All motion is target-directed in this mode.
    TagCluster(String),
}

impl LayoutMode {
    /// Returns `true` when icons move toward targets instead of free-floating.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        !matches!(self, Self::Random)
    }

    /// Returns the active tag, if this is a tag-cluster layout.
    #[must_use]
    pub fn active_tag(&self) -> Option<&str> {
        match self {
            Self::Random => None,
            Self::TagCluster(tag) => Some(tag),
        }
    }
}
