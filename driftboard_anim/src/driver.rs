// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The animation tick: integration, snapping, and derived visual values.

use driftboard_core::IconStore;
use hashbrown::{HashMap, HashSet};
use kurbo::Point;

use crate::batch::{FrameBatch, FrameUpdate};

/// Minimum interval between animation ticks (roughly 60 Hz).
pub const TICK_INTERVAL_MS: f64 = 16.0;

/// Fraction of the remaining distance covered per tick in directed motion.
pub const APPROACH_RATE: f64 = 0.15;

/// Free-floating icons bounce off walls at this distance from the origin.
pub const FLOAT_BOUND: f64 = 1500.0;

/// Axis distance below which a directed icon snaps onto its target.
const POSITION_SNAP: f64 = 0.5;

/// Depth distance below which depth snaps onto its target.
const DEPTH_SNAP: f64 = 0.01;

/// A z-index is re-emitted only after moving more than this from the cache.
const Z_INDEX_THRESHOLD: i32 = 10;

/// Scale, size, and stacking order derived from one depth value.
#[derive(Clone, Copy)]
struct Derived {
    scale: f64,
    size: f64,
    z_index: i32,
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "depth is clamped to [0, 1], so the z-index fits in i32"
)]
fn derive(depth: f64, icon_size: f64) -> Derived {
    let scale = 0.6 + (1.0 - depth) * 0.6;
    Derived {
        scale,
        size: icon_size * scale,
        z_index: ((1.0 - depth) * 1000.0).floor() as i32,
    }
}

/// Advances the visible icons and emits their visual updates.
///
/// Each driver carries its own tick gate as an explicit field. Time comes
/// from the caller in milliseconds; ticks closer together than
/// [`TICK_INTERVAL_MS`] are dropped, so a host running its frame callback at
/// 120 Hz still integrates at the fixed cadence.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    interval_ms: f64,
    last_tick_ms: f64,
}

impl AnimationDriver {
    /// Creates a driver with the default ~60 Hz gate.
    #[must_use]
    pub fn new() -> Self {
        Self::with_interval(TICK_INTERVAL_MS)
    }

    /// Creates a driver with an explicit tick interval.
    #[must_use]
    pub fn with_interval(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_tick_ms: f64::NEG_INFINITY,
        }
    }

    /// Runs one animation step, unless one ran within the tick interval.
    ///
    /// Only icons in `visible` integrate; off-screen icons stay frozen until
    /// they scroll back into the viewport. In `directed` mode icons
    /// exponentially approach their targets and snap when close, with depth
    /// steering toward its target under its own snap; in free-float mode
    /// icons drift on their velocities inside the ±[`FLOAT_BOUND`] walls and
    /// depth is left alone.
    ///
    /// Depth-derived values are cached per distinct depth within the batch,
    /// and a z-index is included only when it moved more than the hysteresis
    /// threshold past the icon's cached value (which this call then updates).
    pub fn tick(
        &mut self,
        store: &mut IconStore,
        visible: &HashSet<usize>,
        directed: bool,
        speed: f64,
        icon_size: f64,
        now_ms: f64,
    ) -> Option<FrameBatch> {
        if now_ms - self.last_tick_ms < self.interval_ms {
            return None;
        }
        self.last_tick_ms = now_ms;

        let mut derived_cache: HashMap<u64, Derived> = HashMap::new();
        let mut batch = FrameBatch::default();

        for (index, icon) in store.iter_mut().enumerate() {
            if !visible.contains(&index) {
                continue;
            }

            if directed {
                let to_target = icon.target - icon.position;
                if to_target.x.abs() < POSITION_SNAP && to_target.y.abs() < POSITION_SNAP {
                    icon.position = icon.target;
                } else {
                    icon.position += to_target * APPROACH_RATE * speed;
                }

                let depth_delta = icon.target_depth() - icon.depth();
                if depth_delta.abs() < DEPTH_SNAP {
                    icon.set_depth(icon.target_depth());
                } else {
                    icon.set_depth(icon.depth() + depth_delta * APPROACH_RATE * speed);
                }
            } else {
                icon.position += icon.velocity * speed;
                if icon.position.x.abs() > FLOAT_BOUND {
                    icon.velocity.x = -icon.velocity.x;
                }
                if icon.position.y.abs() > FLOAT_BOUND {
                    icon.velocity.y = -icon.velocity.y;
                }
            }

            let derived = *derived_cache
                .entry(icon.depth().to_bits())
                .or_insert_with(|| derive(icon.depth(), icon_size));
            let z_index = if (derived.z_index - icon.last_z_index()).abs() > Z_INDEX_THRESHOLD {
                icon.set_last_z_index(derived.z_index);
                Some(derived.z_index)
            } else {
                None
            };
            batch.updates.push(FrameUpdate {
                index,
                position: Point::new(icon.position.x, icon.position.y),
                scale: derived.scale,
                size: derived.size,
                z_index,
            });
        }

        Some(batch)
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}
