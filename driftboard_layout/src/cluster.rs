// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor layout: ring-pack matching icons, push the rest away.

use core::f64::consts::TAU;

use driftboard_core::{IconId, IconStore};
use hashbrown::HashSet;
use kurbo::{Point, Vec2};
use rand::Rng;

use crate::relax::{MAX_RELAX_PASSES, relax_overlaps};

/// Minimum distance between icon centers after overlap resolution.
pub const MIN_ICON_DISTANCE: f64 = 150.0;

/// Angular slots available on each concentric ring.
pub const RING_CAPACITY: usize = 16;

/// Distance non-matching icons are pushed away from the anchor.
pub const PUSH_DISTANCE: f64 = 1400.0;

/// Target depth of icons matching the selected tag (nearer to the viewer).
pub const MATCH_DEPTH: f64 = 0.3;

/// Target depth of non-matching icons (farther from the viewer).
pub const NON_MATCH_DEPTH: f64 = 0.7;

/// Icon edge length the default cluster geometry is tuned for.
const DEFAULT_ICON_SIZE: f64 = 120.0;

/// Geometry parameters for [`cluster_around_anchor`].
///
/// All distances are in board (world) units. Hosts rendering under a zoom
/// factor pass the parameters through [`ClusterParams::under_zoom`] before
/// calling, so the cluster has constant apparent size on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusterParams {
    /// Radius of the innermost ring.
    pub base_radius: f64,
    /// Radius increment between consecutive rings.
    pub ring_spacing: f64,
    /// Distance non-matching icons are pushed to.
    pub push_distance: f64,
    /// Minimum separation enforced by the relaxation pass.
    pub min_distance: f64,
    /// Iteration cap for the relaxation pass.
    pub max_passes: usize,
}

impl ClusterParams {
    /// Parameters tuned for the given icon edge length.
    #[must_use]
    pub fn for_icon_size(icon_size: f64) -> Self {
        Self {
            base_radius: (icon_size * 1.8).max(MIN_ICON_DISTANCE * 0.9),
            ring_spacing: MIN_ICON_DISTANCE * 0.8,
            push_distance: PUSH_DISTANCE,
            min_distance: MIN_ICON_DISTANCE,
            max_passes: MAX_RELAX_PASSES,
        }
    }

    /// The same geometry with the view distances divided by a zoom scale.
    ///
    /// Ring radii and the push distance shrink as the board zooms in, so the
    /// cluster occupies the same screen area at any zoom. The relaxation
    /// separation stays in world units.
    #[must_use]
    pub fn under_zoom(self, scale: f64) -> Self {
        Self {
            base_radius: self.base_radius / scale,
            ring_spacing: self.ring_spacing / scale,
            push_distance: self.push_distance / scale,
            ..self
        }
    }
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self::for_icon_size(DEFAULT_ICON_SIZE)
    }
}

/// Summary of one anchor layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClusterOutcome {
    /// Icons placed on rings around the anchor.
    pub matched: usize,
    /// Icons pushed out to the push distance.
    pub pushed: usize,
}

/// Lays out icons matching `tag` on concentric rings around `anchor` and
/// pushes the rest away.
///
/// Matching icons (duplicate item ids collapse to their first occurrence;
/// later duplicates are left untouched) are placed on rings: with `k` icons
/// and `k <= `[`RING_CAPACITY`] all sit on one ring of `params.base_radius`
/// at angles `2π·i/k`; beyond that, icon `i` goes to ring `i / 16` at slot
/// `i % 16`, with radius `base_radius + ring · ring_spacing`. Matching icons
/// snap to their slot (position and target both set) so the cluster appears
/// immediately, and their depth steers toward [`MATCH_DEPTH`].
///
/// Non-matching icons keep their positions but get a target at a random
/// angle and fixed `params.push_distance` from the anchor, steering toward
/// [`NON_MATCH_DEPTH`].
///
/// Both groups run [`relax_overlaps`] independently before the results are
/// applied. Velocities are zeroed; motion in this mode is fully directed.
///
/// Returns `None` (a complete no-op) when nothing matches the tag.
pub fn cluster_around_anchor(
    store: &mut IconStore,
    anchor: Point,
    tag: &str,
    params: ClusterParams,
    rng: &mut impl Rng,
) -> Option<ClusterOutcome> {
    let mut seen: HashSet<IconId> = HashSet::new();
    let mut matching: Vec<usize> = Vec::new();
    let mut non_matching: Vec<usize> = Vec::new();

    for (index, icon) in store.iter().enumerate() {
        if icon.has_tag(tag) {
            // A duplicated item id keeps only its first icon in the ring.
            if seen.insert(icon.id()) {
                matching.push(index);
            }
        } else {
            non_matching.push(index);
        }
    }

    if matching.is_empty() {
        return None;
    }

    let mut ring_points: Vec<Point> = Vec::with_capacity(matching.len());
    let k = matching.len();
    if k <= RING_CAPACITY {
        let angle_step = TAU / k as f64;
        for i in 0..k {
            let angle = i as f64 * angle_step;
            ring_points.push(anchor + Vec2::new(angle.cos(), angle.sin()) * params.base_radius);
        }
    } else {
        let slot_step = TAU / RING_CAPACITY as f64;
        for i in 0..k {
            let ring = (i / RING_CAPACITY) as f64;
            let radius = params.base_radius + ring * params.ring_spacing;
            let angle = (i % RING_CAPACITY) as f64 * slot_step;
            ring_points.push(anchor + Vec2::new(angle.cos(), angle.sin()) * radius);
        }
    }
    relax_overlaps(&mut ring_points, params.min_distance, params.max_passes);

    for (&index, &point) in matching.iter().zip(ring_points.iter()) {
        if let Some(icon) = store.get_mut(index) {
            icon.position = point;
            icon.target = point;
            icon.set_target_depth(MATCH_DEPTH);
            icon.velocity = Vec2::ZERO;
        }
    }

    let mut push_points: Vec<Point> = Vec::with_capacity(non_matching.len());
    for _ in &non_matching {
        let angle = rng.random::<f64>() * TAU;
        push_points.push(anchor + Vec2::new(angle.cos(), angle.sin()) * params.push_distance);
    }
    relax_overlaps(&mut push_points, params.min_distance, params.max_passes);

    for (&index, &point) in non_matching.iter().zip(push_points.iter()) {
        if let Some(icon) = store.get_mut(index) {
            icon.target = point;
            icon.set_target_depth(NON_MATCH_DEPTH);
            icon.velocity = Vec2::ZERO;
        }
    }

    Some(ClusterOutcome {
        matched: matching.len(),
        pushed: non_matching.len(),
    })
}
