// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driftboard Anim: the fixed-cadence motion integrator.
//!
//! [`AnimationDriver::tick`] advances the visible icons each ~16 ms:
//! directed icons exponentially approach their layout targets (snapping when
//! close enough that further interpolation is invisible) while their depth
//! glides toward its target; free-floating icons drift on their velocities
//! and bounce off the board walls. Off-screen icons stay frozen until the
//! viewport reaches them again.
//!
//! A tick's output is a [`FrameBatch`]: one [`FrameUpdate`] per visible icon
//! with the depth-derived scale, size, and (when it changed enough) z-index.
//! Derivation is cached per distinct depth within a batch, and z-index writes
//! carry hysteresis so near-constant depths don't re-sort the host's layers
//! every frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use driftboard_anim::AnimationDriver;
//! use driftboard_core::{IconId, IconStore, ItemRecord, Media};
//! use hashbrown::HashSet;
//! use kurbo::{Point, Size};
//!
//! # fn rng() -> impl rand::Rng {
//! #     <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(7)
//! # }
//! let records = [ItemRecord::new(IconId(0)).with_media(Media::image("a.png"))];
//! let mut store = IconStore::from_records(records, Size::new(800.0, 600.0), &mut rng());
//! store.get_mut(0).unwrap().position = Point::ZERO;
//! store.get_mut(0).unwrap().target = Point::new(100.0, 0.0);
//!
//! let visible: HashSet<usize> = [0].into_iter().collect();
//! let mut driver = AnimationDriver::new();
//! let batch = driver.tick(&mut store, &visible, true, 1.0, 120.0, 0.0).unwrap();
//! assert_eq!(batch.updates[0].position, Point::new(15.0, 0.0));
//! ```

mod batch;
mod driver;

pub use batch::{FrameBatch, FrameUpdate};
pub use driver::{APPROACH_RATE, AnimationDriver, FLOAT_BOUND, TICK_INTERVAL_MS};
