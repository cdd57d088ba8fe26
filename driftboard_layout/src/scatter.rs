// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random scatter layout.

use driftboard_core::IconStore;
use kurbo::{Point, Vec2};
use rand::Rng;

/// Velocity amplitude assigned for free-float motion after a scatter.
pub const FLOAT_DRIFT: f64 = 0.25;

/// Assigns every icon a random target inside `[-2 * bounds, 2 * bounds]`
/// per axis, a uniform target depth in `[0, 1]`, and a fresh free-float
/// velocity.
///
/// Re-invoking produces a new draw; the distribution is the same but the
/// values are not. Callers typically pass the larger viewport extent as
/// `bounds` so the board comfortably exceeds the screen.
pub fn scatter_random(store: &mut IconStore, bounds: f64, rng: &mut impl Rng) {
    for icon in store.iter_mut() {
        icon.target = Point::new(
            (rng.random::<f64>() - 0.5) * bounds * 4.0,
            (rng.random::<f64>() - 0.5) * bounds * 4.0,
        );
        icon.set_target_depth(rng.random::<f64>());
        icon.velocity = Vec2::new(
            (rng.random::<f64>() - 0.5) * FLOAT_DRIFT,
            (rng.random::<f64>() - 0.5) * FLOAT_DRIFT,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftboard_core::{IconId, ItemRecord};
    use kurbo::Size;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn targets_and_depths_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(3);
        let records = (0..100).map(|i| ItemRecord::new(IconId(i)));
        let mut store = IconStore::from_records(records, Size::new(800.0, 600.0), &mut rng);

        scatter_random(&mut store, 1000.0, &mut rng);

        for icon in store.iter() {
            assert!(icon.target.x >= -2000.0 && icon.target.x <= 2000.0);
            assert!(icon.target.y >= -2000.0 && icon.target.y <= 2000.0);
            assert!(icon.target_depth() >= 0.0 && icon.target_depth() <= 1.0);
            assert!(icon.velocity.x.abs() <= FLOAT_DRIFT / 2.0 + 1e-12);
            assert!(icon.velocity.y.abs() <= FLOAT_DRIFT / 2.0 + 1e-12);
        }
    }

    #[test]
    fn rescatter_overwrites_previous_targets() {
        let mut rng = SmallRng::seed_from_u64(4);
        let records = (0..20).map(|i| ItemRecord::new(IconId(i)));
        let mut store = IconStore::from_records(records, Size::new(800.0, 600.0), &mut rng);

        scatter_random(&mut store, 1000.0, &mut rng);
        let first: Vec<_> = store.iter().map(|icon| icon.target).collect();
        scatter_random(&mut store, 1000.0, &mut rng);
        let second: Vec<_> = store.iter().map(|icon| icon.target).collect();

        assert_ne!(first, second);
    }
}
