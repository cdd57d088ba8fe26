// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The load-state cache and the deferred queue.

use std::collections::VecDeque;

use hashbrown::HashMap;

/// Why a load failed, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// The resource could not be fetched.
    Unavailable,
    /// The resource was fetched but could not be decoded.
    Malformed,
}

/// What [`MediaLoader::request`] did with the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestOutcome {
    /// New request; the host should start the actual load now.
    Started,
    /// An earlier request for the same path has not completed yet.
    InFlight,
    /// The resource is already loaded.
    Cached,
    /// An earlier load of this path failed; it will not be retried.
    Failed,
}

/// Load state of one path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaState {
    /// Never requested (or forgotten).
    Unrequested,
    /// Requested, not yet completed.
    InFlight,
    /// Loaded and cached.
    Ready,
    /// Failed; the host shows a placeholder.
    Failed(LoadError),
}

#[derive(Debug)]
enum Slot<T> {
    InFlight,
    Ready(T),
    Failed(LoadError),
}

/// Deduplicating load tracker, keyed by resource path.
///
/// The loader performs no IO. [`MediaLoader::request`] answers whether the
/// host should actually start a load, and [`MediaLoader::complete`] posts the
/// result back; `T` is whatever handle the host's decoder produces. Every
/// path loads at most once: repeat requests collapse onto the in-flight or
/// cached entry, and failures stick (a placeholder, not a retry storm) until
/// an explicit [`MediaLoader::forget`].
///
/// Completions for paths that are no longer in flight are accepted and
/// cached anyway; a stale load that already happened is wasted work only if
/// thrown away.
#[derive(Debug)]
pub struct MediaLoader<T> {
    slots: HashMap<String, Slot<T>>,
    deferred: VecDeque<String>,
}

impl<T> MediaLoader<T> {
    /// Creates an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            deferred: VecDeque::new(),
        }
    }

    /// Registers interest in a path.
    ///
    /// Returns [`RequestOutcome::Started`] exactly once per path (until a
    /// `forget`); only then does the host issue the real load.
    pub fn request(&mut self, path: &str) -> RequestOutcome {
        match self.slots.get(path) {
            Some(Slot::InFlight) => RequestOutcome::InFlight,
            Some(Slot::Ready(_)) => RequestOutcome::Cached,
            Some(Slot::Failed(_)) => RequestOutcome::Failed,
            None => {
                self.slots.insert(path.to_owned(), Slot::InFlight);
                RequestOutcome::Started
            }
        }
    }

    /// Posts a load result back. Stale completions are accepted.
    pub fn complete(&mut self, path: &str, result: Result<T, LoadError>) {
        let slot = match result {
            Ok(value) => Slot::Ready(value),
            Err(error) => Slot::Failed(error),
        };
        self.slots.insert(path.to_owned(), slot);
    }

    /// The cached resource for a path, if loaded.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&T> {
        match self.slots.get(path) {
            Some(Slot::Ready(value)) => Some(value),
            _ => None,
        }
    }

    /// Load state of a path.
    #[must_use]
    pub fn state(&self, path: &str) -> MediaState {
        match self.slots.get(path) {
            None => MediaState::Unrequested,
            Some(Slot::InFlight) => MediaState::InFlight,
            Some(Slot::Ready(_)) => MediaState::Ready,
            Some(Slot::Failed(error)) => MediaState::Failed(*error),
        }
    }

    /// Drops everything known about a path, allowing a fresh request.
    pub fn forget(&mut self, path: &str) {
        self.slots.remove(path);
    }

    /// Queues a path for lazy loading.
    ///
    /// Paths already queued, in flight, or resolved are not queued again.
    pub fn defer(&mut self, path: &str) {
        if self.slots.contains_key(path) || self.deferred.iter().any(|p| p == path) {
            return;
        }
        self.deferred.push_back(path.to_owned());
    }

    /// Pops the next deferred path that still needs loading.
    ///
    /// The returned path is marked in flight, exactly as if
    /// [`MediaLoader::request`] had answered `Started`.
    pub fn next_deferred(&mut self) -> Option<String> {
        while let Some(path) = self.deferred.pop_front() {
            if self.request(&path) == RequestOutcome::Started {
                return Some(path);
            }
        }
        None
    }

    /// Number of deferred paths still queued.
    #[must_use]
    pub fn deferred_len(&self) -> usize {
        self.deferred.len()
    }
}

impl<T> Default for MediaLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}
