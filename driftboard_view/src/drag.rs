// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture bookkeeping for board panning.

use kurbo::{Point, Vec2};

/// Tracks an in-progress pointer drag and yields per-move pan deltas.
///
/// 1) Call [`DragState::start`] on pointer down.
/// 2) On each move, [`DragState::update`] returns the delta since the last
///    position, which callers feed into the board transform's pan.
/// 3) [`DragState::end`] resets on pointer up.
///
/// While a drag is active the viewport culler bypasses its throttle, so
/// [`DragState::is_active`] doubles as that signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
}

impl DragState {
    /// Begins a drag at the given view position.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a pointer move, returning the delta since the previous
    /// position. Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Total offset from the drag's start position.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| pos - start)
    }

    /// Ends the drag and clears all state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_state_yields_nothing() {
        let mut drag = DragState::default();
        assert!(!drag.is_active());
        assert_eq!(drag.update(Point::new(5.0, 5.0)), None);
        assert_eq!(drag.total_offset(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn moves_accumulate_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(Point::ZERO);
        assert!(drag.is_active());

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(
            drag.total_offset(Point::new(8.0, 7.0)),
            Some(Vec2::new(8.0, 7.0))
        );
    }

    #[test]
    fn end_resets_and_restart_reanchors() {
        let mut drag = DragState::default();
        drag.start(Point::ZERO);
        drag.update(Point::new(10.0, 10.0));
        drag.end();
        assert!(!drag.is_active());

        drag.start(Point::new(50.0, 50.0));
        assert_eq!(
            drag.total_offset(Point::new(55.0, 52.0)),
            Some(Vec2::new(5.0, 2.0))
        );
    }
}
