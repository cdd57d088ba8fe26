// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame update records handed to the presentation sink.

use driftboard_core::FrameVisual;
use kurbo::Point;

/// One icon's visual state for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUpdate {
    /// Dense store index of the icon.
    pub index: usize,
    /// New board-space position.
    pub position: Point,
    /// Depth-derived render scale.
    pub scale: f64,
    /// Edge length after scaling.
    pub size: f64,
    /// New stacking order, present only when it moved past the hysteresis
    /// threshold since the last emitted value.
    pub z_index: Option<i32>,
}

impl FrameUpdate {
    /// The sink-facing view of this update, without the store index.
    #[must_use]
    pub fn visual(&self) -> FrameVisual {
        FrameVisual {
            position: self.position,
            scale: self.scale,
            size: self.size,
            z_index: self.z_index,
        }
    }
}

/// All visual updates produced by one animation tick.
///
/// Reads (integration) and writes (sink application) are separated: a tick
/// first advances every icon, then emits this batch, which the host applies
/// in one pass.
#[derive(Clone, Debug, Default)]
pub struct FrameBatch {
    /// Updates for visible icons, in store-index order.
    pub updates: Vec<FrameUpdate>,
}

impl FrameBatch {
    /// Returns `true` when the tick produced no visible updates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}
