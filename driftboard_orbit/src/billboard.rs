// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building billboard positions from precomputed shape coordinate sets.

use driftboard_core::{IconId, IconStore};
use rand::Rng;

use crate::vec3::Vec3;

/// Base axis scale applied to shape coordinates.
const BASE_SCALE: f64 = 250.0;

/// X/Y scale for the star shape, which is authored at half size.
const STAR_SCALE: f64 = 500.0;

/// One entry of a precomputed shape coordinate set.
///
/// Sets are authored offline and fetched by the host as static data; `index`
/// is the id of the item the coordinate belongs to. `z` is optional because
/// flat shapes omit it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ShapeCoord3 {
    /// Authored x coordinate.
    pub x: f64,
    /// Authored y coordinate (flipped into orbit space during building).
    pub y: f64,
    /// Authored z coordinate, if the shape has depth.
    #[cfg_attr(feature = "serde", serde(default))]
    pub z: Option<f64>,
    /// Id of the item this coordinate places.
    pub index: u64,
}

/// A camera-facing textured quad in orbit space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Billboard {
    /// Center position in orbit space.
    pub world: Vec3,
    /// Edge length of the quad.
    pub size: f64,
    /// Item shown on the quad.
    pub icon: IconId,
}

/// Builds billboards for `shape` from its coordinate set.
///
/// Coordinates are centered on the midpoint of their bounding box and
/// y-flipped into the orbit convention (positive world y renders below the
/// viewport center). Axis scales
/// depend on the shape: `sphere` normalizes every axis to the largest range
/// so sets authored with mismatched axis units still come out round, `star`
/// doubles x/y, everything else uses the base scale.
///
/// Each coordinate places the icon whose id equals its `index`; coordinates
/// naming unknown ids are skipped. For dense shapes (`sphere`, `star`,
/// `text`) with more coordinates than icons, a random subset of coordinates
/// is paired with a random permutation of the icons instead, so sparse
/// collections still fill the shape evenly.
#[must_use]
pub fn build_billboards(
    store: &IconStore,
    shape: &str,
    coords: &[ShapeCoord3],
    icon_size: f64,
    rng: &mut impl Rng,
) -> Vec<Billboard> {
    if coords.is_empty() || store.is_empty() {
        return Vec::new();
    }

    let mut min = Vec3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
    let mut max = Vec3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    let mut has_z = false;
    for coord in coords {
        min.x = min.x.min(coord.x);
        max.x = max.x.max(coord.x);
        min.y = min.y.min(coord.y);
        max.y = max.y.max(coord.y);
        if let Some(z) = coord.z {
            has_z = true;
            min.z = min.z.min(z);
            max.z = max.z.max(z);
        }
    }
    if !has_z {
        min.z = 0.0;
        max.z = 0.0;
    }
    let center = (min + max) * 0.5;
    let range = max - min;
    let max_range = range.x.max(range.y).max(range.z);

    let scale = match shape {
        "sphere" if max_range > 0.0 => Vec3::new(
            max_range / nonzero(range.x) * BASE_SCALE,
            max_range / nonzero(range.y) * BASE_SCALE,
            max_range / nonzero(range.z) * BASE_SCALE,
        ),
        "star" => Vec3::new(STAR_SCALE, STAR_SCALE, BASE_SCALE),
        _ => Vec3::new(BASE_SCALE, BASE_SCALE, BASE_SCALE),
    };

    let place = |coord: &ShapeCoord3, icon: IconId| Billboard {
        world: Vec3::new(
            (coord.x - center.x) * scale.x,
            -(coord.y - center.y) * scale.y,
            coord.z.map_or(0.0, |z| (z - center.z) * scale.z),
        ),
        size: icon_size,
        icon,
    };

    let dense = matches!(shape, "sphere" | "star" | "text");
    if dense && store.len() < coords.len() {
        let mut coord_order: Vec<usize> = (0..coords.len()).collect();
        shuffle(&mut coord_order, rng);
        let mut icon_order: Vec<usize> = (0..store.len()).collect();
        shuffle(&mut icon_order, rng);

        coord_order
            .iter()
            .take(store.len())
            .zip(&icon_order)
            .filter_map(|(&ci, &ii)| store.get(ii).map(|icon| place(&coords[ci], icon.id())))
            .collect()
    } else {
        coords
            .iter()
            .filter(|coord| store.index_of(IconId(coord.index)).is_some())
            .map(|coord| place(coord, IconId(coord.index)))
            .collect()
    }
}

fn nonzero(range: f64) -> f64 {
    if range == 0.0 { 1.0 } else { range }
}

fn shuffle(order: &mut [usize], rng: &mut impl Rng) {
    for i in (1..order.len()).rev() {
        order.swap(i, rng.random_range(0..=i));
    }
}
