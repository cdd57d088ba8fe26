// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precomputed shape coordinate sets.
//!
//! Some layouts are authored offline: a tool exports per-item coordinates
//! for a named shape and the host ships them as static JSON. Entries
//! correlate to items by id; icons the set does not mention fall back to a
//! random scatter so the board never has stranded, targetless icons.

use driftboard_core::{IconId, IconStore};
use hashbrown::HashSet;
use kurbo::{Point, Vec2};
use rand::Rng;

/// One authored coordinate for a portfolio item.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeCoord {
    /// Authored x coordinate (arbitrary source units).
    pub x: f64,
    /// Authored y coordinate (arbitrary source units).
    pub y: f64,
    /// Optional authored depth coordinate.
    pub z: Option<f64>,
    /// Item id this coordinate belongs to.
    pub index: u64,
}

/// Applies an authored coordinate set as the icons' targets.
///
/// Coordinates are normalized around their own centroid, scaled by
/// `spacing`, and translated to `center`. When the set carries z values they
/// are mapped into the `[0, 1]` depth range; otherwise depth targets stay at
/// the middle. Icons the set does not mention are scattered uniformly inside
/// `±fallback_extent` with a random depth. An empty set is a no-op.
pub fn apply_shape_coords(
    store: &mut IconStore,
    coords: &[ShapeCoord],
    center: Point,
    spacing: f64,
    fallback_extent: f64,
    rng: &mut impl Rng,
) {
    if coords.is_empty() {
        return;
    }

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    let mut min_z = f64::INFINITY;
    let mut max_z = f64::NEG_INFINITY;
    let mut has_z = false;
    for coord in coords {
        min_x = min_x.min(coord.x);
        max_x = max_x.max(coord.x);
        min_y = min_y.min(coord.y);
        max_y = max_y.max(coord.y);
        if let Some(z) = coord.z {
            has_z = true;
            min_z = min_z.min(z);
            max_z = max_z.max(z);
        }
    }
    let depth_range = if has_z { max_z - min_z } else { 0.0 };
    let mid = Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);

    let mut placed: HashSet<usize> = HashSet::new();
    for coord in coords {
        let Some(index) = store.index_of(IconId(coord.index)) else {
            continue;
        };
        let Some(icon) = store.get_mut(index) else {
            continue;
        };
        placed.insert(index);

        icon.target = center + Vec2::new((coord.x - mid.x) * spacing, (coord.y - mid.y) * spacing);
        match coord.z {
            Some(z) if depth_range > 0.0 => icon.set_target_depth((z - min_z) / depth_range),
            Some(_) => icon.set_target_depth(0.5),
            None => icon.set_target_depth(0.5),
        }
        icon.velocity = Vec2::ZERO;
    }

    for (index, icon) in store.iter_mut().enumerate() {
        if placed.contains(&index) {
            continue;
        }
        icon.target = Point::new(
            (rng.random::<f64>() - 0.5) * fallback_extent * 2.0,
            (rng.random::<f64>() - 0.5) * fallback_extent * 2.0,
        );
        icon.set_target_depth(rng.random::<f64>());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftboard_core::ItemRecord;
    use kurbo::Size;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn store(ids: &[u64]) -> IconStore {
        let mut rng = SmallRng::seed_from_u64(11);
        IconStore::from_records(
            ids.iter().map(|&id| ItemRecord::new(IconId(id))),
            Size::new(800.0, 600.0),
            &mut rng,
        )
    }

    #[test]
    fn coords_are_centered_and_scaled() {
        let mut store = store(&[1, 2]);
        let coords = [
            ShapeCoord { x: 0.0, y: 0.0, z: None, index: 1 },
            ShapeCoord { x: 10.0, y: 10.0, z: None, index: 2 },
        ];
        let mut rng = SmallRng::seed_from_u64(0);
        apply_shape_coords(&mut store, &coords, Point::ZERO, 2.0, 1000.0, &mut rng);

        // Centroid is (5, 5); each point is ±5 source units, scaled by 2.
        assert_eq!(store.get(0).unwrap().target, Point::new(-10.0, -10.0));
        assert_eq!(store.get(1).unwrap().target, Point::new(10.0, 10.0));
    }

    #[test]
    fn z_values_normalize_into_depth_range() {
        let mut store = store(&[1, 2, 3]);
        let coords = [
            ShapeCoord { x: 0.0, y: 0.0, z: Some(-4.0), index: 1 },
            ShapeCoord { x: 1.0, y: 0.0, z: Some(0.0), index: 2 },
            ShapeCoord { x: 2.0, y: 0.0, z: Some(4.0), index: 3 },
        ];
        let mut rng = SmallRng::seed_from_u64(0);
        apply_shape_coords(&mut store, &coords, Point::ZERO, 1.0, 1000.0, &mut rng);

        assert_eq!(store.get(0).unwrap().target_depth(), 0.0);
        assert_eq!(store.get(1).unwrap().target_depth(), 0.5);
        assert_eq!(store.get(2).unwrap().target_depth(), 1.0);
    }

    #[test]
    fn unmentioned_icons_fall_back_to_scatter() {
        let mut store = store(&[1, 2]);
        let coords = [ShapeCoord { x: 3.0, y: 3.0, z: None, index: 1 }];
        let mut rng = SmallRng::seed_from_u64(0);
        apply_shape_coords(&mut store, &coords, Point::ZERO, 1.0, 500.0, &mut rng);

        let fallback = store.get(1).unwrap();
        assert!(fallback.target.x.abs() <= 500.0);
        assert!(fallback.target.y.abs() <= 500.0);
    }

    #[test]
    fn unknown_ids_and_empty_sets_are_tolerated() {
        let mut store = store(&[1]);
        let before = store.get(0).unwrap().target;

        let mut rng = SmallRng::seed_from_u64(0);
        apply_shape_coords(&mut store, &[], Point::ZERO, 1.0, 500.0, &mut rng);
        assert_eq!(store.get(0).unwrap().target, before);

        // A set mentioning only unknown ids scatters the rest.
        let coords = [ShapeCoord { x: 0.0, y: 0.0, z: None, index: 99 }];
        apply_shape_coords(&mut store, &coords, Point::ZERO, 1.0, 500.0, &mut rng);
        assert!(store.get(0).unwrap().target.x.abs() <= 500.0);
    }
}
