use geo::{BoundingRect, Centroid, MultiPolygon, Polygon};

use crate::config::sim::{CLAIM_SCORE, RIVAL_ROTATION_DEG, START_LAT, START_LON};
use crate::domain::{GeoPoint, RivalZone, RunPath};
use crate::geometry::{ClaimResolution, ResolveError, resolve_claim, ring_from_path};
use crate::render::{Layer, MapView, Marker, PathStyle, RegionStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunStatus {
    Idle,
    Running,
}

/// How a stopped run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The ring closed and the rival zone was split.
    Claimed {
        resolution: ClaimResolution,
        territory: Polygon<f64>,
    },
    /// Too few distinct points to enclose any area.
    TooShort { points: usize },
    /// The geometry operation failed; the raw ring was kept as the
    /// territory.
    Fallback {
        territory: Polygon<f64>,
        error: ResolveError,
    },
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub start: GeoPoint,
    pub rival_rotation_deg: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start: GeoPoint::new(START_LAT, START_LON),
            rival_rotation_deg: RIVAL_ROTATION_DEG,
        }
    }
}

/// The run state machine (Idle ⇄ Running).
///
/// Owns the traced path and the rival zone, and drives a `MapView` with
/// rendering primitives. Position ticks arrive from outside; starting,
/// ticking and stopping all mutate state synchronously on the caller's
/// thread.
pub struct RunSession<V: MapView> {
    view: V,
    rival: RivalZone,
    path: RunPath,
    start: GeoPoint,
    status: RunStatus,
}

impl<V: MapView> RunSession<V> {
    pub fn new(config: SessionConfig, view: V) -> Self {
        let rival = RivalZone::new(config.start, config.rival_rotation_deg);
        let mut session = Self {
            view,
            rival,
            path: RunPath::new(),
            start: config.start,
            status: RunStatus::Idle,
        };
        session.draw_rival_zone();
        session
            .view
            .place_marker(Marker::CurrentPosition, session.start, None);
        session
    }

    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    pub fn rival(&self) -> &RivalZone {
        &self.rival
    }

    pub fn path(&self) -> &RunPath {
        &self.path
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Begin a run. No-op while one is already active.
    ///
    /// Clears everything the previous run drew, restores the intact rival
    /// zone, and seeds the path with the start position.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.status = RunStatus::Running;

        self.view.clear_layer(Layer::Territory);
        self.view.clear_layer(Layer::Captured);
        self.view.clear_layer(Layer::RemainingRival);
        self.view.clear_layer(Layer::Path);
        self.view.remove_marker(Marker::UserScore);

        self.rival.reset();
        self.draw_rival_zone();

        self.path.reset(self.start);
        self.view.draw_path(self.path.points(), &PathStyle::run());
        self.view
            .place_marker(Marker::CurrentPosition, self.start, None);
    }

    /// Accept a simulated position tick. Ignored while idle.
    pub fn record_position(&mut self, position: GeoPoint) {
        if !self.is_running() {
            return;
        }
        self.path.push(position);
        self.view.draw_path(self.path.points(), &PathStyle::run());
        self.view.pan_to(position);
        self.view
            .place_marker(Marker::CurrentPosition, position, None);
    }

    /// End the run and resolve the territory. Returns `None` while idle.
    pub fn stop(&mut self) -> Option<RunOutcome> {
        if !self.is_running() {
            return None;
        }
        self.status = RunStatus::Idle;

        self.view.clear_layer(Layer::Path);
        let outcome = self.finish();

        // The position marker goes home after every stop
        self.view
            .place_marker(Marker::CurrentPosition, self.start, None);

        Some(outcome)
    }

    fn finish(&mut self) -> RunOutcome {
        let ring = match ring_from_path(self.path.points()) {
            Ok(ring) => ring,
            Err(_) => {
                self.view
                    .show_message("The run was too short to claim a territory.");
                return RunOutcome::TooShort {
                    points: self.path.len(),
                };
            }
        };

        match resolve_claim(self.rival.polygon(), &ring) {
            Ok(resolution) => {
                self.view.clear_layer(Layer::RivalZone);
                if !resolution.remaining.0.is_empty() {
                    self.view.draw_region(
                        Layer::RemainingRival,
                        &resolution.remaining,
                        &RegionStyle::rival(),
                    );
                }
                if resolution.has_captured() {
                    self.view.draw_region(
                        Layer::Captured,
                        &resolution.captured,
                        &RegionStyle::captured(),
                    );
                }
                self.draw_territory(&ring);

                if let Some(centroid) = ring.centroid() {
                    self.view.place_marker(
                        Marker::UserScore,
                        centroid.into(),
                        Some(&CLAIM_SCORE.to_string()),
                    );
                }

                self.rival.cede(resolution.remaining.clone());
                if let Some(centroid) = self.rival.centroid() {
                    self.view.place_marker(
                        Marker::RivalScore,
                        centroid,
                        Some(&self.rival.score().to_string()),
                    );
                }

                RunOutcome::Claimed {
                    resolution,
                    territory: ring,
                }
            }
            Err(error) => {
                self.view
                    .show_message("Territory calculation failed; keeping the traced outline.");
                self.draw_territory(&ring);
                RunOutcome::Fallback {
                    territory: ring,
                    error,
                }
            }
        }
    }

    fn draw_rival_zone(&mut self) {
        self.view.draw_region(
            Layer::RivalZone,
            self.rival.remaining(),
            &RegionStyle::rival(),
        );
        if let Some(centroid) = self.rival.centroid() {
            self.view.place_marker(
                Marker::RivalScore,
                centroid,
                Some(&self.rival.score().to_string()),
            );
        }
    }

    fn draw_territory(&mut self, ring: &Polygon<f64>) {
        self.view.draw_region(
            Layer::Territory,
            &MultiPolygon(vec![ring.clone()]),
            &RegionStyle::territory(),
        );
        if let Some(bounds) = ring.bounding_rect() {
            self.view.fit_bounds(bounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sim::{RIVAL_SCORE, RIVAL_SCORE_CEDED, ROUTE_ROTATION_DEG};
    use crate::render::{RecordingView, RenderOp};
    use crate::sim::LoopRoute;

    fn session() -> RunSession<RecordingView> {
        RunSession::new(SessionConfig::default(), RecordingView::new())
    }

    fn run_full_loop(session: &mut RunSession<RecordingView>) -> RunOutcome {
        session.start();
        let start = SessionConfig::default().start;
        for position in LoopRoute::new(start, ROUTE_ROTATION_DEG) {
            session.record_position(position);
        }
        session.stop().unwrap()
    }

    #[test]
    fn test_full_loop_claims_territory() {
        let mut session = session();
        let outcome = run_full_loop(&mut session);

        match outcome {
            RunOutcome::Claimed { resolution, .. } => {
                assert!(resolution.has_captured());
                assert!(resolution.captured_area_m2 > 0.0);
                assert!(!resolution.is_full_capture());
            }
            other => panic!("expected Claimed, got {:?}", other),
        }

        assert!(session.rival().is_ceded());
        assert_eq!(session.rival().score(), RIVAL_SCORE_CEDED);
        assert!(session.view().messages().is_empty());

        // Rival layer replaced by the remainder, territory drawn on top
        assert!(session.view().region_on(Layer::RivalZone).is_none());
        assert!(session.view().region_on(Layer::RemainingRival).is_some());
        assert!(session.view().region_on(Layer::Captured).is_some());
        assert!(session.view().region_on(Layer::Territory).is_some());

        // Score markers: ceded rival score, claim score at the territory
        let (_, label) = session.view().marker(Marker::RivalScore).unwrap();
        assert_eq!(label, Some("1250"));
        let (_, label) = session.view().marker(Marker::UserScore).unwrap();
        assert_eq!(label, Some("9"));

        // Position marker is back at the start
        let (at, _) = session.view().marker(Marker::CurrentPosition).unwrap();
        assert_eq!(at, SessionConfig::default().start);
    }

    #[test]
    fn test_short_run_shows_message() {
        let mut session = session();
        session.start();
        session.record_position(GeoPoint::new(37.5046, 127.0489));
        let outcome = session.stop().unwrap();

        assert!(matches!(outcome, RunOutcome::TooShort { points: 2 }));
        assert_eq!(session.view().messages().len(), 1);
        assert!(session.view().messages()[0].contains("too short"));

        // Nothing was claimed: rival intact, no territory drawn
        assert!(!session.rival().is_ceded());
        assert_eq!(session.rival().score(), RIVAL_SCORE);
        assert!(session.view().region_on(Layer::Territory).is_none());
        assert!(session.view().region_on(Layer::RivalZone).is_some());
    }

    #[test]
    fn test_degenerate_run_falls_back_to_outline() {
        let config = SessionConfig {
            start: GeoPoint::new(0.0, 0.0),
            ..SessionConfig::default()
        };
        let mut session = RunSession::new(config, RecordingView::new());

        session.start();
        // Three distinct but collinear points: the ring closes but
        // encloses nothing
        session.record_position(GeoPoint::new(0.0, 0.0001));
        session.record_position(GeoPoint::new(0.0, 0.0002));
        let outcome = session.stop().unwrap();

        assert!(matches!(outcome, RunOutcome::Fallback { .. }));
        assert_eq!(session.view().messages().len(), 1);
        assert!(session.view().messages()[0].contains("failed"));

        // The raw outline was kept as the territory; no cede happened
        assert!(session.view().region_on(Layer::Territory).is_some());
        assert!(!session.rival().is_ceded());
    }

    #[test]
    fn test_ticks_ignored_while_idle() {
        let mut session = session();
        let ops_before = session.view().ops().len();
        session.record_position(GeoPoint::new(37.5046, 127.0489));

        assert!(session.path().is_empty());
        assert_eq!(session.view().ops().len(), ops_before);
    }

    #[test]
    fn test_start_is_idempotent_while_running() {
        let mut session = session();
        session.start();
        let ops_before = session.view().ops().len();
        let path_before = session.path().len();

        session.start();
        assert_eq!(session.view().ops().len(), ops_before);
        assert_eq!(session.path().len(), path_before);
    }

    #[test]
    fn test_stop_while_idle_is_none() {
        let mut session = session();
        assert!(session.stop().is_none());
    }

    #[test]
    fn test_tick_extends_path_and_pans() {
        let mut session = session();
        session.start();
        let p = GeoPoint::new(37.5046, 127.0490);
        session.record_position(p);

        assert_eq!(session.path().len(), 2);
        assert_eq!(session.path().last(), Some(p));
        assert!(session.view().ops().contains(&RenderOp::PanTo(p)));
        let (at, _) = session.view().marker(Marker::CurrentPosition).unwrap();
        assert_eq!(at, p);
    }

    #[test]
    fn test_restart_restores_rival_zone() {
        let mut session = session();
        run_full_loop(&mut session);
        assert!(session.rival().is_ceded());

        session.start();
        assert!(!session.rival().is_ceded());
        assert_eq!(session.rival().score(), RIVAL_SCORE);
        assert_eq!(session.path().len(), 1);
        assert!(session.view().region_on(Layer::RivalZone).is_some());
        assert!(session.view().region_on(Layer::Territory).is_none());
        assert!(session.view().marker(Marker::UserScore).is_none());
    }
}
