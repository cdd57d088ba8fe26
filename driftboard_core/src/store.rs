// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The collection that owns every icon.

use kurbo::{Point, Size};
use rand::Rng;

use crate::icon::Icon;
use crate::record::{IconId, ItemRecord};

/// Velocity amplitude icons start with before any layout pass runs.
const INITIAL_DRIFT: f64 = 0.3;

/// Owns the list of renderable items and their spatial state.
///
/// The store is created once from the ingested records and its collection
/// identity never changes afterwards: layout and animation passes mutate
/// icon fields in place but never add, remove, or reorder entries. Icons are
/// addressed by their dense index; [`IconId`]s are only needed at the edges
/// (shape coordinate sets, pick results).
#[derive(Clone, Debug)]
pub struct IconStore {
    icons: Vec<Icon>,
}

impl IconStore {
    /// Builds a store from validated records.
    ///
    /// Each icon starts at a uniformly random position inside twice the
    /// viewport extents (`±extents` per axis around the origin) with a small
    /// random drift velocity, so the board has motion before the first
    /// layout pass. Records without media are kept; they just never render.
    #[must_use]
    pub fn from_records(
        records: impl IntoIterator<Item = ItemRecord>,
        extents: Size,
        rng: &mut impl Rng,
    ) -> Self {
        let icons = records
            .into_iter()
            .map(|record| {
                let mut icon = Icon::new(record);
                icon.position = Point::new(
                    rng.random::<f64>() * extents.width * 2.0 - extents.width,
                    rng.random::<f64>() * extents.height * 2.0 - extents.height,
                );
                icon.velocity = kurbo::Vec2::new(
                    (rng.random::<f64>() - 0.5) * INITIAL_DRIFT,
                    (rng.random::<f64>() - 0.5) * INITIAL_DRIFT,
                );
                icon
            })
            .collect();
        Self { icons }
    }

    /// Number of icons in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns `true` if the store holds no icons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Returns the icon at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Icon> {
        self.icons.get(index)
    }

    /// Returns the icon at `index` mutably, if any.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Icon> {
        self.icons.get_mut(index)
    }

    /// Returns the dense index of the icon with the given id, if present.
    #[must_use]
    pub fn index_of(&self, id: IconId) -> Option<usize> {
        self.icons.iter().position(|icon| icon.id() == id)
    }

    /// Iterates over all icons.
    pub fn iter(&self) -> impl Iterator<Item = &Icon> {
        self.icons.iter()
    }

    /// Iterates over all icons mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Icon> {
        self.icons.iter_mut()
    }

    /// Collects the sorted set of distinct tags across all records.
    ///
    /// Tags were already normalized at ingestion, so this is pure
    /// aggregation; the host uses it to build its floating tag labels.
    #[must_use]
    pub fn unique_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for icon in &self.icons {
            for tag in &icon.record().tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags.sort();
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Media;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn store_with(records: Vec<ItemRecord>) -> IconStore {
        let mut rng = SmallRng::seed_from_u64(42);
        IconStore::from_records(records, Size::new(800.0, 600.0), &mut rng)
    }

    #[test]
    fn from_records_scatters_within_double_extents() {
        let records = (0..50)
            .map(|i| ItemRecord::new(IconId(i)).with_media(Media::image("x.png")))
            .collect();
        let store = store_with(records);

        for icon in store.iter() {
            assert!(icon.position.x >= -800.0 && icon.position.x <= 800.0);
            assert!(icon.position.y >= -600.0 && icon.position.y <= 600.0);
            assert!(icon.velocity.x.abs() <= 0.15 + 1e-12);
            assert!(icon.velocity.y.abs() <= 0.15 + 1e-12);
        }
    }

    #[test]
    fn index_of_finds_records_by_id() {
        let store = store_with(vec![
            ItemRecord::new(IconId(10)),
            ItemRecord::new(IconId(20)),
        ]);
        assert_eq!(store.index_of(IconId(20)), Some(1));
        assert_eq!(store.index_of(IconId(30)), None);
    }

    #[test]
    fn unique_tags_sorts_and_deduplicates_across_records() {
        let store = store_with(vec![
            ItemRecord::new(IconId(1)).with_raw_tags(["glass", "ceramics"]),
            ItemRecord::new(IconId(2)).with_raw_tags(["ceramics", "wood"]),
        ]);
        assert_eq!(
            store.unique_tags(),
            vec!["ceramics".to_owned(), "glass".to_owned(), "wood".to_owned()]
        );
    }

    #[test]
    fn malformed_records_are_kept_but_unrenderable() {
        let store = store_with(vec![ItemRecord::new(IconId(1))]);
        assert_eq!(store.len(), 1);
        assert!(!store.get(0).unwrap().can_render());
    }
}
