// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The session state machine.

use driftboard_anim::AnimationDriver;
use driftboard_core::{Icon, IconId, IconStore, PresentationSink};
use driftboard_layout::{ClusterParams, LayoutMode, cluster_around_anchor, scatter_random};
use driftboard_media::{MediaLoader, RequestOutcome};
use driftboard_orbit::{
    Billboard, OrbitController, ShapeCoord3, ZOOM_IN_STEP, ZOOM_OUT_STEP, build_billboards,
    pick_nearest,
};
use driftboard_view::{BoardTransform, DragState, ViewportCuller};
use hashbrown::HashMap;
use kurbo::{Point, Size};
use rand::Rng;

/// Wheel-up zoom factor on the flat board.
const BOARD_ZOOM_IN: f64 = 1.1;

/// Wheel-down zoom factor on the flat board.
const BOARD_ZOOM_OUT: f64 = 0.9;

/// The one long-lived object a host drives.
///
/// A session owns the icon store and every engine component around it: the
/// board camera, the layout mode, the culler, the animation driver, the
/// orbit view, and the media load tracker. It is created once at startup and
/// lives for the page; all methods are synchronous and single-threaded, so a
/// layout pass always completes before the next tick reads targets.
///
/// The session performs no IO and owns no clock: hosts pass `now_ms`
/// timestamps in, receive lists of media paths to fetch back, and supply a
/// [`PresentationSink`] for handle lifecycle and frame transforms. `T` is
/// the host's decoded media handle type.
pub struct Session<T> {
    store: IconStore,
    transform: BoardTransform,
    layout: LayoutMode,
    culler: ViewportCuller,
    driver: AnimationDriver,
    drag: DragState,
    orbit: OrbitController,
    billboards: Vec<Billboard>,
    media: MediaLoader<T>,
    anchors: HashMap<String, Point>,
    viewport: Size,
    icon_size: f64,
    speed: f64,
}

impl<T> Session<T> {
    /// Creates a session over an already-ingested store.
    #[must_use]
    pub fn new(store: IconStore, viewport: Size, icon_size: f64) -> Self {
        Self {
            store,
            transform: BoardTransform::new(),
            layout: LayoutMode::Random,
            culler: ViewportCuller::new(),
            driver: AnimationDriver::new(),
            drag: DragState::default(),
            orbit: OrbitController::new(),
            billboards: Vec::new(),
            media: MediaLoader::new(),
            anchors: HashMap::new(),
            viewport,
            icon_size,
            speed: 1.0,
        }
    }

    /// The icon store.
    #[must_use]
    pub fn store(&self) -> &IconStore {
        &self.store
    }

    /// The board camera.
    #[must_use]
    pub fn transform(&self) -> &BoardTransform {
        &self.transform
    }

    /// The active layout mode.
    #[must_use]
    pub fn layout(&self) -> &LayoutMode {
        &self.layout
    }

    /// The media load tracker.
    #[must_use]
    pub fn media(&self) -> &MediaLoader<T> {
        &self.media
    }

    /// The media load tracker, mutably; hosts post completions here.
    pub fn media_mut(&mut self) -> &mut MediaLoader<T> {
        &mut self.media
    }

    /// The orbit controller.
    #[must_use]
    pub fn orbit(&self) -> &OrbitController {
        &self.orbit
    }

    /// Billboards of the active orbit shape; empty outside orbit mode.
    #[must_use]
    pub fn billboards(&self) -> &[Billboard] {
        &self.billboards
    }

    /// Returns `true` while a pointer drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Updates the viewport after a host resize and forces a fresh cull.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.culler.force();
    }

    /// Sets the global animation speed multiplier.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Registers (or moves) the view-space anchor of a tag label.
    ///
    /// The host owns the floating labels; it reports each label's current
    /// center here so tag selection can cluster around it.
    pub fn register_tag_anchor(&mut self, tag: impl Into<String>, view_pos: Point) {
        self.anchors.insert(tag.into(), view_pos);
    }

    /// Selects or toggles the active tag.
    ///
    /// Re-selecting the active tag clears the filter: the layout returns to
    /// random scatter and the board camera resets. Selecting a new tag
    /// clusters matching icons around the tag's anchor (converted into world
    /// space through the current camera, with the cluster distances divided
    /// by the zoom so the rings keep a constant apparent size) and pushes
    /// the rest away. Tags with no registered anchor or no matching icons
    /// leave everything unchanged.
    pub fn select_tag(&mut self, tag: &str, rng: &mut impl Rng) {
        if self.layout.active_tag() == Some(tag) {
            self.layout = LayoutMode::Random;
            let bounds = self.scatter_bounds();
            scatter_random(&mut self.store, bounds, rng);
            self.transform.reset();
            self.culler.force();
            return;
        }
        let Some(&anchor_view) = self.anchors.get(tag) else {
            return;
        };
        let anchor_world = self.transform.view_to_world(anchor_view);
        let params =
            ClusterParams::for_icon_size(self.icon_size).under_zoom(self.transform.scale());
        if cluster_around_anchor(&mut self.store, anchor_world, tag, params, rng).is_some() {
            self.layout = LayoutMode::TagCluster(tag.to_owned());
            self.culler.force();
        }
    }

    /// Begins a pointer drag.
    pub fn pointer_down(&mut self, pos: Point) {
        self.drag.start(pos);
    }

    /// Feeds a pointer move into the active camera.
    ///
    /// Outside orbit mode the board pans; inside it the drag rotates the
    /// orbit camera. Moves without a preceding [`Session::pointer_down`] are
    /// ignored.
    pub fn pointer_move(&mut self, pos: Point) {
        let Some(delta) = self.drag.update(pos) else {
            return;
        };
        if self.orbit.is_enabled() {
            self.orbit.camera_mut().rotate_by(delta);
        } else {
            self.transform.pan_by(delta);
        }
    }

    /// Ends the pointer drag.
    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    /// Applies a wheel event at the given view position.
    ///
    /// `delta_y > 0` zooms out in both modes: the flat board shrinks about
    /// the cursor, the orbit camera retreats.
    pub fn wheel(&mut self, pos: Point, delta_y: f64) {
        if self.orbit.is_enabled() {
            let step = if delta_y > 0.0 { ZOOM_OUT_STEP } else { ZOOM_IN_STEP };
            self.orbit.camera_mut().zoom_by(step);
        } else {
            let factor = if delta_y > 0.0 { BOARD_ZOOM_OUT } else { BOARD_ZOOM_IN };
            self.transform.zoom_about(pos, factor);
        }
    }

    /// Advances the session one frame.
    ///
    /// Runs the (throttled) visibility pass, creating/showing/hiding handles
    /// through the sink and reaping handles hidden too long; then the
    /// (gated) animation step, applying frame transforms. Returns the media
    /// paths whose loads the host must start now — newly visible eager
    /// icons, plus at most one drained deferred entry per tick.
    ///
    /// While orbit mode is active the flat board is parked and ticks do
    /// nothing; the host renders billboards from [`Session::billboards`]
    /// instead.
    pub fn tick(&mut self, now_ms: f64, sink: &mut dyn PresentationSink) -> Vec<String> {
        let mut loads = Vec::new();
        if self.orbit.is_enabled() {
            return loads;
        }

        let dragging = self.drag.is_active();
        let pass = self.culler.compute_visible(
            &mut self.store,
            &self.transform,
            self.viewport,
            self.icon_size,
            now_ms,
            dragging,
        );
        if let Some(pass) = pass {
            for &index in &pass.shown {
                let needs_create = match self.store.get_mut(index) {
                    Some(icon) if icon.can_render() => {
                        let fresh = !icon.has_handle();
                        icon.set_handle(true);
                        fresh
                    }
                    _ => continue,
                };
                if let Some(icon) = self.store.get(index) {
                    if needs_create {
                        sink.create(index, icon);
                    }
                    sink.show(index);
                }
            }
            for &index in &pass.hidden {
                if self.store.get(index).is_some_and(Icon::has_handle) {
                    sink.hide(index);
                }
            }
            for &index in &pass.eager_load {
                if let Some(path) = self.media_path(index)
                    && self.media.request(&path) == RequestOutcome::Started
                {
                    loads.push(path);
                }
            }
            for &index in &pass.deferred_load {
                if let Some(path) = self.media_path(index) {
                    self.media.defer(&path);
                }
            }
        }
        for index in self.culler.reap_hidden(&mut self.store, now_ms) {
            sink.destroy(index);
        }

        let batch = self.driver.tick(
            &mut self.store,
            self.culler.visible(),
            self.layout.is_directed(),
            self.speed,
            self.icon_size,
            now_ms,
        );
        if let Some(batch) = batch {
            for update in &batch.updates {
                if self.store.get(update.index).is_some_and(Icon::has_handle) {
                    sink.apply(update.index, &update.visual());
                }
            }
        }

        if let Some(path) = self.media.next_deferred() {
            loads.push(path);
        }
        loads
    }

    /// Switches into the orbit view for `shape`.
    ///
    /// Builds the billboards from the shape's coordinate set, hides every
    /// live 2D handle, and resets the orbit camera to the shape's starting
    /// distance. Returns the media paths to fetch for billboard textures
    /// that are not cached yet. A coordinate set that places nothing leaves
    /// the session in board mode.
    pub fn enter_orbit(
        &mut self,
        shape: &str,
        coords: &[ShapeCoord3],
        now_ms: f64,
        rng: &mut impl Rng,
        sink: &mut dyn PresentationSink,
    ) -> Vec<String> {
        let billboards = build_billboards(&self.store, shape, coords, self.icon_size, rng);
        if billboards.is_empty() {
            return Vec::new();
        }
        self.billboards = billboards;
        self.orbit.enter(shape, now_ms);
        self.drag.end();

        for (index, icon) in self.store.iter().enumerate() {
            if icon.has_handle() {
                sink.hide(index);
            }
        }

        let mut loads = Vec::new();
        for billboard in &self.billboards {
            if let Some(index) = self.store.index_of(billboard.icon)
                && let Some(path) = self.media_path(index)
                && self.media.request(&path) == RequestOutcome::Started
            {
                loads.push(path);
            }
        }
        loads
    }

    /// Leaves the orbit view, restoring the visible 2D handles.
    pub fn exit_orbit(&mut self, sink: &mut dyn PresentationSink) {
        if !self.orbit.is_enabled() {
            return;
        }
        self.orbit.exit();
        self.billboards.clear();
        for (index, icon) in self.store.iter().enumerate() {
            if icon.has_handle() && icon.is_visible() {
                sink.show(index);
            }
        }
        self.culler.force();
    }

    /// Resolves an orbit-mode click to the item it landed on.
    ///
    /// Clicks inside the post-entry suppression window, duplicate clicks,
    /// and clicks outside every billboard's pick radius all return `None`.
    pub fn orbit_click(&mut self, pos: Point, now_ms: f64) -> Option<IconId> {
        if !self.orbit.accept_click(pos, now_ms) {
            return None;
        }
        pick_nearest(pos, &self.billboards, self.orbit.camera(), self.viewport)
    }

    fn scatter_bounds(&self) -> f64 {
        self.viewport.width.max(self.viewport.height)
    }

    fn media_path(&self, index: usize) -> Option<String> {
        self.store
            .get(index)?
            .record()
            .media
            .as_ref()
            .map(|media| media.display_source().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftboard_core::{FrameVisual, Icon, ItemRecord, Media};
    use driftboard_media::MediaState;
    use kurbo::Vec2;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const VIEWPORT: Size = Size::new(800.0, 600.0);
    const ICON_SIZE: f64 = 120.0;

    #[derive(Debug, PartialEq)]
    enum Event {
        Create(usize),
        Show(usize),
        Hide(usize),
        Destroy(usize),
        Apply(usize),
    }

    #[derive(Default)]
    struct RecordingSink {
        events: Vec<Event>,
    }

    impl PresentationSink for RecordingSink {
        fn create(&mut self, index: usize, _icon: &Icon) {
            self.events.push(Event::Create(index));
        }

        fn show(&mut self, index: usize) {
            self.events.push(Event::Show(index));
        }

        fn hide(&mut self, index: usize) {
            self.events.push(Event::Hide(index));
        }

        fn destroy(&mut self, index: usize) {
            self.events.push(Event::Destroy(index));
        }

        fn apply(&mut self, index: usize, _visual: &FrameVisual) {
            self.events.push(Event::Apply(index));
        }
    }

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(21)
    }

    fn session(count: u64) -> Session<u32> {
        let records = (0..count).map(|i| {
            ItemRecord::new(IconId(i))
                .with_media(Media::image(format!("img/{i}.jpg")))
                .with_raw_tags(if i % 2 == 0 { ["ceramics"] } else { ["glass"] })
        });
        let mut store = IconStore::from_records(records, VIEWPORT, &mut rng());
        // Park everything on-screen so visibility is deterministic.
        for (i, icon) in store.iter_mut().enumerate() {
            icon.position = Point::new(50.0 + i as f64 * 10.0, 50.0);
            icon.target = icon.position;
            icon.velocity = Vec2::ZERO;
        }
        Session::new(store, VIEWPORT, ICON_SIZE)
    }

    #[test]
    fn first_tick_creates_shows_and_requests_loads() {
        let mut session = session(3);
        let mut sink = RecordingSink::default();

        let loads = session.tick(0.0, &mut sink);
        assert_eq!(loads.len(), 3);
        assert!(loads.contains(&"img/0.jpg".to_owned()));

        for i in 0..3 {
            assert!(sink.events.contains(&Event::Create(i)));
            assert!(sink.events.contains(&Event::Show(i)));
            assert!(sink.events.contains(&Event::Apply(i)));
        }
        // Loads are tracked as in flight; a second tick requests nothing new.
        assert_eq!(session.media().state("img/0.jpg"), MediaState::InFlight);
        let loads = session.tick(200.0, &mut sink);
        assert!(loads.is_empty());
    }

    #[test]
    fn icons_scrolled_away_are_hidden_then_reaped() {
        let mut session = session(1);
        let mut sink = RecordingSink::default();
        session.tick(0.0, &mut sink);

        // Pan the board far away and let the next cull run.
        session.pointer_down(Point::new(0.0, 0.0));
        session.pointer_move(Point::new(100_000.0, 0.0));
        session.pointer_up();
        sink.events.clear();

        session.tick(200.0, &mut sink);
        assert!(sink.events.contains(&Event::Hide(0)));
        assert!(!sink.events.contains(&Event::Destroy(0)));

        session.tick(11_000.0, &mut sink);
        assert!(sink.events.contains(&Event::Destroy(0)));
    }

    #[test]
    fn selecting_a_tag_clusters_and_reselecting_scatters() {
        let mut session = session(10);
        let mut rng = rng();
        session.register_tag_anchor("ceramics", Point::new(400.0, 300.0));

        session.select_tag("ceramics", &mut rng);
        assert_eq!(session.layout().active_tag(), Some("ceramics"));

        // Matching icons snapped onto the ring around the anchor.
        let anchor = Point::new(400.0, 300.0);
        for icon in session.store().iter().filter(|i| i.has_tag("ceramics")) {
            let distance = (icon.position - anchor).hypot();
            assert!(distance > 100.0 && distance < 600.0, "distance {distance}");
            assert_eq!(icon.target_depth(), 0.3);
        }

        // Zoom so the toggle-off reset is observable.
        session.wheel(Point::new(400.0, 300.0), -1.0);
        session.select_tag("ceramics", &mut rng);
        assert_eq!(session.layout().active_tag(), None);
        assert_eq!(session.transform().scale(), 1.0);
        assert_eq!(session.transform().pan(), Vec2::ZERO);

        // Toggle-off rescattered everything inside the board region.
        for icon in session.store().iter() {
            assert!(icon.target.x.abs() <= 1600.0);
            assert!(icon.target.y.abs() <= 1600.0);
        }
    }

    #[test]
    fn cluster_rings_shrink_with_zoom_to_keep_apparent_size() {
        let mut session = session(10);
        let mut rng = rng();
        let center = Point::new(400.0, 300.0);
        session.wheel(center, -1.0);
        session.wheel(center, -1.0);
        let scale = session.transform().scale();
        assert!((scale - 1.21).abs() < 1e-9);

        session.register_tag_anchor("ceramics", center);
        session.select_tag("ceramics", &mut rng);

        // World-space ring radius is the base radius divided by the zoom, so
        // on screen the ring spans the same pixels as at scale 1.
        let anchor_world = session.transform().view_to_world(center);
        let expected = ClusterParams::for_icon_size(ICON_SIZE).base_radius / scale;
        for icon in session.store().iter().filter(|i| i.has_tag("ceramics")) {
            let d = (icon.position - anchor_world).hypot();
            assert!((d - expected).abs() < 1e-6, "radius {d}, expected {expected}");
        }
    }

    #[test]
    fn unanchored_or_unmatched_tags_change_nothing() {
        let mut session = session(4);
        let mut rng = rng();

        session.select_tag("ceramics", &mut rng); // no anchor registered
        assert_eq!(session.layout().active_tag(), None);

        session.register_tag_anchor("pottery", Point::new(100.0, 100.0));
        session.select_tag("pottery", &mut rng); // anchor but no matches
        assert_eq!(session.layout().active_tag(), None);
    }

    #[test]
    fn wheel_zooms_the_active_camera() {
        let mut session = session(2);
        session.wheel(Point::new(400.0, 300.0), -1.0);
        assert!((session.transform().scale() - 1.1).abs() < 1e-9);

        let coords = [
            ShapeCoord3 { x: -1.0, y: 0.0, z: None, index: 0 },
            ShapeCoord3 { x: 1.0, y: 0.0, z: None, index: 1 },
        ];
        let mut sink = RecordingSink::default();
        session.enter_orbit("sphere", &coords, 0.0, &mut rng(), &mut sink);

        let before = session.orbit().camera().distance();
        session.wheel(Point::new(400.0, 300.0), 1.0);
        assert!((session.orbit().camera().distance() - before * 1.1).abs() < 1e-9);
        // The board camera did not move.
        assert!((session.transform().scale() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn orbit_mode_hides_handles_and_exit_restores_them() {
        let mut session = session(2);
        let mut sink = RecordingSink::default();
        session.tick(0.0, &mut sink);
        sink.events.clear();

        let coords = [
            ShapeCoord3 { x: -1.0, y: 0.0, z: None, index: 0 },
            ShapeCoord3 { x: 1.0, y: 0.0, z: None, index: 1 },
        ];
        let loads = session.enter_orbit("ring", &coords, 1000.0, &mut rng(), &mut sink);
        assert!(session.orbit().is_enabled());
        assert_eq!(session.billboards().len(), 2);
        // Textures were already requested by the first tick.
        assert!(loads.is_empty());
        assert!(sink.events.contains(&Event::Hide(0)));
        assert!(sink.events.contains(&Event::Hide(1)));

        // Ticks are parked while orbiting.
        sink.events.clear();
        assert!(session.tick(2000.0, &mut sink).is_empty());
        assert!(sink.events.is_empty());

        session.exit_orbit(&mut sink);
        assert!(!session.orbit().is_enabled());
        assert!(session.billboards().is_empty());
        assert!(sink.events.contains(&Event::Show(0)));
        assert!(sink.events.contains(&Event::Show(1)));
    }

    #[test]
    fn orbit_drag_rotates_instead_of_panning() {
        let mut session = session(2);
        let coords = [
            ShapeCoord3 { x: -1.0, y: 0.0, z: None, index: 0 },
            ShapeCoord3 { x: 1.0, y: 0.0, z: None, index: 1 },
        ];
        let mut sink = RecordingSink::default();
        session.enter_orbit("sphere", &coords, 0.0, &mut rng(), &mut sink);

        session.pointer_down(Point::new(100.0, 100.0));
        session.pointer_move(Point::new(150.0, 100.0));
        session.pointer_up();

        assert!((session.orbit().camera().yaw() - 0.5).abs() < 1e-9);
        assert_eq!(session.transform().pan(), Vec2::ZERO);
    }

    #[test]
    fn orbit_clicks_pick_after_the_suppression_window() {
        let mut session = session(2);
        let coords = [
            ShapeCoord3 { x: -1.0, y: 0.0, z: None, index: 0 },
            ShapeCoord3 { x: 1.0, y: 0.0, z: None, index: 1 },
        ];
        let mut sink = RecordingSink::default();
        session.enter_orbit("ring", &coords, 0.0, &mut rng(), &mut sink);

        let center = Point::new(400.0, 300.0);
        assert_eq!(session.orbit_click(center, 500.0), None);
        assert!(session.orbit_click(center, 2000.0).is_some());
    }

    #[test]
    fn empty_coordinate_sets_keep_the_board_mode() {
        let mut session = session(2);
        let mut sink = RecordingSink::default();
        let loads = session.enter_orbit("sphere", &[], 0.0, &mut rng(), &mut sink);
        assert!(loads.is_empty());
        assert!(!session.orbit().is_enabled());
    }
}
