//! The playback controller: owner of the current view.
//!
//! Each tick the controller decides how `here` is produced. User input sets
//! it directly, location commands jump or fade it, and playback evaluates
//! the path spline at the advancing head. Recording appends `here` to the
//! path after everything else has run.

use std::path::Path;

use super::command::{Target, ViewCommand};
use super::host::Host;
use super::navigator::{Navigator, Teleport};
use super::zoom::Zoom;
use crate::error::VistaError;
use crate::location::LocationQueue;
use crate::options::Options;
use crate::path::document::TourDocument;
use crate::path::mov;
use crate::path::PathContainer;
use crate::state::{StateRecord, ViewState};

/// Everything the renderer reads from the controller for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame<'a> {
    /// The view to draw.
    pub state: &'a ViewState,
    /// Field-of-view multiplier (`state.zoom * 2^exponent`).
    pub zoom_factor: f64,
    /// Cross-fade weight between foreground and background pairs.
    pub fade: f64,
    /// Scene scale from the active navigator.
    pub scale: f64,
}

/// A navigator plan being flown toward `target`.
///
/// The plan is kept apart from the authored path so its pacing never leaks
/// into recorded or edited states.
#[derive(Debug, Clone)]
struct Flight {
    plan: PathContainer,
    target: ViewState,
    step: Option<usize>,
}

/// Coordinates recording, scrubbing and frame-locked playback of a single
/// path, and owns the authoritative current view.
///
/// Playback and recording never run together: starting one stops the other.
pub struct PlaybackController<H: Host> {
    host: H,
    options: Options,
    here: ViewState,
    path: PathContainer,
    locations: LocationQueue,
    navigator: Box<dyn Navigator>,
    flight: Option<Flight>,
    zoom: Zoom,
    recording: bool,
}

impl<H: Host> PlaybackController<H> {
    /// Controller driving `host`, configured by `options`.
    #[must_use]
    pub fn new(mut host: H, options: Options) -> Self {
        host.configure_cache(&options.cache);
        let locations = LocationQueue::new(options.locations.slots);
        Self {
            host,
            options,
            here: ViewState::default(),
            path: PathContainer::new(),
            locations,
            navigator: Box::new(Teleport),
            flight: None,
            zoom: Zoom::default(),
            recording: false,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// The current view.
    #[must_use]
    pub fn here(&self) -> &ViewState {
        &self.here
    }

    /// Replace the current view (direct user manipulation).
    pub fn set_here(&mut self, state: ViewState) {
        self.here = state;
    }

    /// The path being authored, recorded or played.
    #[must_use]
    pub fn path(&self) -> &PathContainer {
        &self.path
    }

    /// Mutable access to the path, e.g. for loading a path document.
    pub fn path_mut(&mut self) -> &mut PathContainer {
        &mut self.path
    }

    /// Location slots.
    #[must_use]
    pub fn locations(&self) -> &LocationQueue {
        &self.locations
    }

    /// Options the controller was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Zoom integrator state.
    #[must_use]
    pub fn zoom(&self) -> &Zoom {
        &self.zoom
    }

    /// Swap the navigation strategy.
    pub fn set_navigator(&mut self, navigator: Box<dyn Navigator>) {
        log::debug!("Navigator set to {}", navigator.name());
        self.navigator = navigator;
    }

    /// Whether `here` is appended to the path every tick.
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Whether the path head is moving.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.path.is_moving()
    }

    /// Whether a planned move is under way.
    #[must_use]
    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    /// Number of location slots.
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.locations.slot_count()
    }

    /// Name of the front state of location `slot`.
    #[must_use]
    pub fn location_name(&self, slot: usize) -> Option<&str> {
        self.locations.name(slot)
    }

    /// Navigation speed at `here`, from the navigator.
    #[must_use]
    pub fn navigation_speed(&self) -> f64 {
        self.navigator.speed(&self.here)
    }

    /// Scene scale at `here`, from the navigator.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.navigator.scale(&self.here)
    }

    /// Zoom multiplier for the renderer.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.here.zoom() * self.zoom.factor()
    }

    /// What the renderer draws this frame.
    #[must_use]
    pub fn frame(&self) -> RenderFrame<'_> {
        RenderFrame {
            state: &self.here,
            zoom_factor: self.zoom_factor(),
            fade: self.here.fade(),
            scale: self.scale(),
        }
    }

    // ── Per-frame update ────────────────────────────────────────────────

    /// Advance by one frame of `dt` seconds.
    ///
    /// Zoom integrates over `dt`. Playback advances a fixed number of knots
    /// per tick regardless of `dt`, so every tick of a movie moves the same
    /// parametric distance. Recording appends the resulting `here`.
    pub fn tick(&mut self, dt: f64) {
        self.zoom.tick(dt, &self.options.zoom);
        self.fly();

        if self.path.is_moving() {
            self.path.advance(self.options.playback.step, &mut self.host);
            self.here = self.path.now();
            if !self.path.is_moving() {
                log::info!(
                    "Playback finished at step {:.3}/{}",
                    self.path.head(),
                    self.path.len().saturating_sub(1)
                );
            }
        }

        if self.recording {
            self.path.push(self.here.clone());
        }
    }

    // ── Recording and playback ──────────────────────────────────────────

    /// Start or stop playing the path from its first state.
    pub fn play(&mut self, movie: bool) {
        if self.path.is_moving() {
            self.stop();
            return;
        }
        if self.path.is_empty() {
            log::debug!("Ignoring play: path is empty");
            return;
        }
        if self.recording {
            log::warn!("Recording stopped to start playback");
            self.end_recording();
        }

        self.flight = None;
        self.path.home();
        self.path.fast_forward(movie, &mut self.host);
        self.here = self.path.now();
        log::info!(
            "Playback started ({} steps{})",
            self.path.len(),
            if movie { ", movie" } else { "" }
        );
    }

    /// Start or stop recording `here` into the path.
    pub fn record(&mut self, on: bool) {
        if !on {
            self.end_recording();
            return;
        }
        if self.recording {
            return;
        }
        if self.path.is_moving() {
            log::warn!("Playback stopped to start recording");
            self.stop();
        }
        self.path.clear();
        self.recording = true;
        log::info!("Recording started");
    }

    fn end_recording(&mut self) {
        if self.recording {
            self.recording = false;
            log::info!("Recording stopped ({} samples)", self.path.len());
        }
    }

    /// Run the head forward (toggle).
    pub fn fast_forward(&mut self, movie: bool) {
        self.end_recording();
        self.path.fast_forward(movie, &mut self.host);
    }

    /// Run the head backward (toggle).
    pub fn rewind(&mut self, movie: bool) {
        self.end_recording();
        self.path.rewind(movie, &mut self.host);
    }

    /// Stop the head, abandon any planned move and leave movie mode.
    pub fn stop(&mut self) {
        self.flight = None;
        if self.path.is_moving() {
            log::info!("Playback stopped at step {:.3}", self.path.head());
        }
        self.path.stop(&mut self.host);
    }

    // ── Navigation ──────────────────────────────────────────────────────

    /// Move to `target` the way the navigator plans it.
    ///
    /// A navigator plan is flown over the following ticks and lands on
    /// `target` exactly. The path is left alone. Without a plan this is
    /// [`jump_to`](Self::jump_to).
    pub fn move_to(&mut self, target: Target) {
        let Some((there, step)) = self.resolve(&target, true) else {
            log::debug!("Ignoring move to {target:?}");
            return;
        };
        let Some(plan) = self.navigator.plan_move(&self.here, &there) else {
            self.show(there, step);
            return;
        };

        self.stop();
        let mut plan = PathContainer::from_steps(plan);
        plan.fast_forward(false, &mut self.host);
        if !plan.is_moving() {
            self.show(there, step);
            return;
        }
        log::debug!(
            "{} move over {} knots",
            self.navigator.name(),
            plan.len()
        );
        self.here = plan.now().with_speed(there.speed());
        self.flight = Some(Flight {
            plan,
            target: there,
            step,
        });
    }

    /// Advance a planned move by one tick, landing when the plan ends.
    fn fly(&mut self) {
        let Some(flight) = self.flight.as_mut() else {
            return;
        };
        flight.plan.advance(self.options.playback.step, &mut self.host);
        if flight.plan.is_moving() {
            self.here = flight.plan.now().with_speed(flight.target.speed());
            return;
        }
        if let Some(flight) = self.flight.take() {
            self.show(flight.target, flight.step);
        }
    }

    /// Teleport to `target`, discarding any playback in progress.
    pub fn jump_to(&mut self, target: Target) {
        match self.resolve(&target, true) {
            Some((there, step)) => self.show(there, step),
            None => log::debug!("Ignoring jump to {target:?}"),
        }
    }

    /// Take the scenes of `target` without moving the camera.
    pub fn fade_to(&mut self, target: Target) {
        match self.resolve(&target, false) {
            Some((there, _)) => {
                self.here = self.navigator.fade(&self.here, &there);
            }
            None => log::debug!("Ignoring fade to {target:?}"),
        }
    }

    fn show(&mut self, there: ViewState, step: Option<usize>) {
        self.flight = None;
        if self.path.is_moving() {
            self.stop();
        }
        if let Some(i) = step {
            self.path.set_cursor(i);
            self.path.jump();
        }
        self.here = there;
    }

    /// State addressed by `target`, plus its path index for path targets.
    /// Location targets rotate their slot when `rotate` is set.
    fn resolve(
        &mut self,
        target: &Target,
        rotate: bool,
    ) -> Option<(ViewState, Option<usize>)> {
        let slot = match target {
            Target::Location(slot) => *slot,
            Target::Named(name) => self.locations.find_by_name(name)?,
            Target::Step(i) => {
                return self.path.get(*i).map(|s| (s.clone(), Some(*i)));
            }
            Target::Relative(offset) => {
                let len = self.path.len() as isize;
                if len == 0 {
                    return None;
                }
                let i = (self.path.cursor() as isize + *offset).rem_euclid(len)
                    as usize;
                return self.path.get(i).map(|s| (s.clone(), Some(i)));
            }
        };
        let state = if rotate {
            self.locations.visit(slot)
        } else {
            self.locations.peek(slot).cloned()
        };
        state.map(|s| (s, None))
    }

    // ── Commands ────────────────────────────────────────────────────────

    /// Dispatch one command.
    pub fn execute(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::MoveTo(target) => self.move_to(target),
            ViewCommand::JumpTo(target) => self.jump_to(target),
            ViewCommand::FadeTo(target) => self.fade_to(target),

            ViewCommand::ToggleRecord => self.record(!self.recording),
            ViewCommand::TogglePlay { movie } => self.play(movie),
            ViewCommand::FastForward { movie } => self.fast_forward(movie),
            ViewCommand::Rewind { movie } => self.rewind(movie),
            ViewCommand::Stop => self.stop(),

            ViewCommand::NextStep => self.path.next(),
            ViewCommand::PrevStep => self.path.prev(),
            ViewCommand::HomeStep => self.path.home(),
            ViewCommand::JumpToStep => {
                if !self.path.is_empty() {
                    self.flight = None;
                    self.path.jump();
                    self.here = self.path.now();
                }
            }
            ViewCommand::InsertStep => self.path.insert(self.here.clone()),
            ViewCommand::AppendStep => self.path.append(self.here.clone()),
            ViewCommand::ReplaceStep => self.path.replace(self.here.clone()),
            ViewCommand::DeleteStep => self.path.delete(),
            ViewCommand::Faster => self.path.faster(),
            ViewCommand::Slower => self.path.slower(),
            ViewCommand::IncTension => self.path.inc_tension(),
            ViewCommand::DecTension => self.path.dec_tension(),
            ViewCommand::IncBias => self.path.inc_bias(),
            ViewCommand::DecBias => self.path.dec_bias(),
            ViewCommand::IncContinuity => self.path.inc_continuity(),
            ViewCommand::DecContinuity => self.path.dec_continuity(),

            ViewCommand::Zoom { delta } => {
                self.zoom.zoom_by(delta, &self.options.zoom);
            }
            ViewCommand::ZoomRate { rate } => self.zoom.set_rate(rate),
            ViewCommand::ZoomHome => self.zoom.home(),

            ViewCommand::FlushCache => self.flush_cache(),
            ViewCommand::ReportLocation => self.report_location(),
            ViewCommand::ReportState => self.report_state(),
        }
    }

    /// Ask the host to drop cached content.
    pub fn flush_cache(&mut self) {
        self.host.flush_cache();
    }

    fn report_location(&self) {
        let (lat, lon) = self.here.lat_lon();
        log::info!("{lat:.12}\t{lon:.12}\t{:.1}", self.here.distance());
    }

    fn report_state(&self) {
        match toml::to_string(&StateRecord::from(&self.here)) {
            Ok(text) => log::info!("[[step]]\n{}", text.trim_end()),
            Err(e) => log::warn!("Could not encode the current view: {e}"),
        }
    }

    // ── Tours and scenes ────────────────────────────────────────────────

    /// Drop every stored state and reset `here`.
    ///
    /// Call before the host destroys the scenes those states reference.
    pub fn release_scenes(&mut self) {
        self.end_recording();
        self.stop();
        self.locations.clear();
        self.path.clear();
        self.here = ViewState::default();
        log::debug!("Released all view states");
    }

    /// Load a tour document from `path`.
    pub fn load_tour(&mut self, path: &Path) -> Result<(), VistaError> {
        let content = std::fs::read_to_string(path).map_err(VistaError::Io)?;
        self.load_tour_str(&content)?;
        log::info!("Loaded tour {}", path.display());
        Ok(())
    }

    /// Replace all locations with the states of a tour document.
    ///
    /// States without a slot go to slot 0; negative or out-of-range slots
    /// are ignored. The first state that shows anything becomes `here`.
    /// Nothing changes if the document does not parse.
    pub fn load_tour_str(&mut self, text: &str) -> Result<(), VistaError> {
        let tour = TourDocument::parse(text)?;
        self.release_scenes();

        for record in &tour.states {
            let state = record.to_state();
            match usize::try_from(record.i.unwrap_or(0)) {
                Ok(slot) => self.locations.populate(slot, state.clone()),
                Err(_) => log::debug!("Ignoring state with slot {:?}", record.i),
            }
            if !self.here.renderable() {
                self.here = state;
            }
        }
        log::info!("Tour has {} states", tour.states.len());
        Ok(())
    }

    /// Write every location state as a tour document, slot by slot.
    pub fn save_tour(&self, path: &Path) -> Result<(), VistaError> {
        let tour = TourDocument {
            states: self
                .locations
                .iter()
                .map(|(slot, state)| StateRecord::for_location(state, slot))
                .collect(),
        };
        let content = tour.write()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VistaError::Io)?;
        }
        std::fs::write(path, content).map_err(VistaError::Io)?;
        log::info!(
            "Saved tour {} ({} states)",
            path.display(),
            tour.states.len()
        );
        Ok(())
    }

    // ── Motion capture ──────────────────────────────────────────────────

    /// Replace the path with the samples in a motion-capture file. The
    /// samples show the scenes of `here`.
    pub fn load_mov(&mut self, path: &Path) -> Result<(), VistaError> {
        let content = std::fs::read_to_string(path).map_err(VistaError::Io)?;
        let states = mov::import_mov(&content, self.here.scenes())?;
        self.end_recording();
        self.stop();
        log::info!("Imported {} ({} samples)", path.display(), states.len());
        self.path.reset(states);
        self.path.home();
        Ok(())
    }

    /// Write the path as a motion-capture file.
    pub fn save_mov(&self, path: &Path) -> Result<(), VistaError> {
        std::fs::write(path, mov::export_mov(self.path.steps()))
            .map_err(VistaError::Io)?;
        log::info!("Exported {} ({} samples)", path.display(), self.path.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::path::Direction;
    use crate::playback::{Glide, LogHost};
    use crate::state::SceneSet;

    fn controller() -> PlaybackController<LogHost> {
        PlaybackController::new(LogHost::default(), Options::default())
    }

    fn knot(distance: f64) -> ViewState {
        ViewState::new().with_distance(distance)
    }

    const TOUR: &str = r#"
[[state]]
i = 1
name = "olympus"
r = 2.0

[[state]]
i = 1
name = "tharsis"
r = 3.0
f0 = "mars"

[[state]]
name = "home"
r = 4.0
f0 = "earth"

[[state]]
i = -1
name = "nowhere"

[[state]]
i = 40
name = "far"
"#;

    #[test]
    fn new_hands_cache_options_to_host() {
        let ctl = controller();
        assert_eq!(ctl.host().cache, Some(Options::default().cache));
        assert_eq!(ctl.location_count(), 12);
    }

    #[test]
    fn play_runs_to_the_end_and_stops() {
        let mut ctl = controller();
        for r in [1.0, 2.0, 3.0, 4.0] {
            ctl.path_mut().push(knot(r));
        }

        ctl.play(true);
        assert!(ctl.is_playing());
        assert!(ctl.host().movie);
        assert!(ctl.host().synchronous);
        assert_eq!(ctl.here(), &ctl.path().steps()[0]);

        let mut ticks = 0;
        while ctl.is_playing() {
            ctl.tick(1.0 / 60.0);
            assert!(ctl.path().head() <= 3.0);
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(ticks, 3);
        assert_eq!(ctl.here(), &ctl.path().steps()[3]);
        assert!(!ctl.host().movie);
        assert!(!ctl.host().synchronous);

        ctl.tick(1.0 / 60.0);
        assert!(!ctl.is_playing());
        assert_eq!(ctl.path().head(), 3.0);
    }

    #[test]
    fn play_on_empty_path_is_ignored() {
        let mut ctl = controller();
        ctl.play(true);
        assert!(!ctl.is_playing());
        assert!(!ctl.host().movie);
    }

    #[test]
    fn play_toggles_off() {
        let mut ctl = controller();
        ctl.path_mut().push(knot(1.0));
        ctl.path_mut().push(knot(2.0));
        ctl.play(false);
        ctl.play(false);
        assert!(!ctl.is_playing());
    }

    #[test]
    fn recording_replays_at_knot_times() {
        let mut ctl = controller();
        let samples: Vec<ViewState> = (0..5)
            .map(|i| {
                knot(f64::from(i) + 1.0)
                    .with_position(DVec3::new(f64::from(i), 1.0, 1.0))
            })
            .collect();

        ctl.record(true);
        for sample in &samples {
            ctl.set_here(sample.clone());
            ctl.tick(0.016);
        }
        ctl.record(false);
        assert_eq!(ctl.path().steps(), samples.as_slice());

        ctl.play(false);
        let mut replayed = vec![ctl.here().clone()];
        while ctl.is_playing() {
            ctl.tick(0.016);
            replayed.push(ctl.here().clone());
        }
        assert_eq!(replayed, samples);
    }

    #[test]
    fn recording_and_playing_exclude_each_other() {
        let mut ctl = controller();
        ctl.path_mut().push(knot(1.0));
        ctl.path_mut().push(knot(2.0));

        ctl.play(false);
        ctl.record(true);
        assert!(ctl.is_recording());
        assert!(!ctl.is_playing());
        assert!(ctl.path().is_empty());

        ctl.tick(0.1);
        ctl.tick(0.1);
        ctl.play(false);
        assert!(!ctl.is_recording());
        assert!(ctl.is_playing());
        assert_eq!(ctl.path().len(), 2);
    }

    #[test]
    fn tour_loading_fills_slots_and_picks_here() {
        let mut ctl = controller();
        ctl.load_tour_str(TOUR).unwrap();

        assert_eq!(ctl.locations().len(1), 2);
        assert_eq!(ctl.location_name(1), Some("olympus"));
        assert_eq!(ctl.location_name(0), Some("home"));
        assert_eq!(ctl.here().name(), Some("tharsis"));
        assert!(ctl.locations().find_by_name("nowhere").is_none());
        assert!(ctl.locations().find_by_name("far").is_none());
    }

    #[test]
    fn failed_tour_leaves_everything_in_place() {
        let mut ctl = controller();
        ctl.load_tour_str(TOUR).unwrap();
        let before = ctl.here().clone();
        assert!(ctl.load_tour_str("[[state]]\nr = [1]\n").is_err());
        assert_eq!(ctl.here(), &before);
        assert_eq!(ctl.locations().len(1), 2);
    }

    #[test]
    fn saved_tours_load_back_into_the_same_slots() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("tours").join("mars.toml");

        let mut ctl = controller();
        ctl.load_tour_str(TOUR).unwrap();
        ctl.save_tour(&file).unwrap();

        let mut other = controller();
        other.load_tour(&file).unwrap();
        assert_eq!(other.locations(), ctl.locations());
        assert_eq!(other.here().name(), Some("home"));
    }

    #[test]
    fn jump_rotates_and_fade_does_not() {
        let mut ctl = controller();
        ctl.load_tour_str(TOUR).unwrap();

        ctl.fade_to(Target::Location(0));
        assert_eq!(ctl.here().name(), Some("tharsis"));
        assert_eq!(ctl.here().scenes(), &SceneSet::foreground("earth"));
        assert_eq!(ctl.here().distance(), 3.0);

        ctl.jump_to(Target::Location(1));
        assert_eq!(ctl.here().name(), Some("olympus"));
        ctl.jump_to(Target::Location(1));
        assert_eq!(ctl.here().name(), Some("tharsis"));
        ctl.jump_to(Target::Location(1));
        assert_eq!(ctl.here().name(), Some("olympus"));

        ctl.jump_to(Target::Named("home".into()));
        assert_eq!(ctl.here().distance(), 4.0);

        ctl.jump_to(Target::Location(7));
        ctl.jump_to(Target::Named("venus".into()));
        assert_eq!(ctl.here().distance(), 4.0);
    }

    #[test]
    fn jump_to_path_steps_anchors_the_cursor() {
        let mut ctl = controller();
        for r in [1.0, 2.0, 3.0] {
            ctl.path_mut().push(knot(r));
        }
        ctl.jump_to(Target::Step(2));
        assert_eq!(ctl.here().distance(), 3.0);
        assert_eq!(ctl.path().cursor(), 2);
        assert_eq!(ctl.path().head(), 2.0);

        ctl.jump_to(Target::Relative(1));
        assert_eq!(ctl.here().distance(), 1.0);
        assert_eq!(ctl.path().cursor(), 0);

        ctl.jump_to(Target::Relative(-1));
        assert_eq!(ctl.path().cursor(), 2);

        ctl.jump_to(Target::Step(9));
        assert_eq!(ctl.path().cursor(), 2);
    }

    #[test]
    fn jump_stops_playback() {
        let mut ctl = controller();
        for r in [1.0, 2.0, 3.0] {
            ctl.path_mut().push(knot(r));
        }
        ctl.play(true);
        ctl.jump_to(Target::Step(1));
        assert!(!ctl.is_playing());
        assert!(!ctl.host().movie);
    }

    fn glide_controller(
        ticks: u32,
        speed: f64,
    ) -> PlaybackController<LogHost> {
        let mut ctl = controller();
        ctl.set_navigator(Box::new(Glide::new(ticks)));
        let tour = format!(
            "[[state]]\ni = 0\nname = \"moon\"\nr = 5.0\ns = {speed:?}\n\
             f0 = \"moon\"\n"
        );
        ctl.load_tour_str(&tour).unwrap();
        ctl.set_here(knot(1.0));
        ctl
    }

    fn fly_until_landed(ctl: &mut PlaybackController<LogHost>) -> usize {
        let mut ticks = 0;
        while ctl.is_flying() && ticks < 1000 {
            ctl.tick(0.016);
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn glide_flies_to_the_target_and_lands_exactly() {
        let mut ctl = glide_controller(4, 2.0);
        ctl.move_to(Target::Location(0));
        assert!(ctl.is_flying());
        assert!(!ctl.is_playing());
        assert!(!ctl.host().movie);
        assert!(ctl.path().is_empty());
        assert_eq!(ctl.here().distance(), 1.0);

        ctl.tick(0.016);
        assert!(ctl.here().distance() > 1.0);
        assert_eq!(ctl.here().speed(), 2.0);

        assert_eq!(fly_until_landed(&mut ctl) + 1, 4);
        assert_eq!(ctl.here().distance(), 5.0);
        assert_eq!(ctl.here().speed(), 2.0);
        assert_eq!(ctl.here().name(), Some("moon"));
        assert_eq!(ctl.here().scenes(), &SceneSet::foreground("moon"));
    }

    #[test]
    fn recording_after_a_glide_keeps_its_pacing() {
        let mut ctl = glide_controller(64, 1.0);
        ctl.move_to(Target::Location(0));
        assert_eq!(fly_until_landed(&mut ctl), 64);
        assert_eq!(ctl.here().speed(), 1.0);

        ctl.record(true);
        for _ in 0..3 {
            ctl.tick(0.016);
        }
        ctl.record(false);
        assert_eq!(ctl.path().len(), 3);
        assert!(ctl.path().iter().all(|s| s.speed() == 1.0));

        ctl.play(false);
        let mut ticks = 0;
        while ctl.is_playing() && ticks < 100 {
            ctl.tick(0.016);
            ticks += 1;
        }
        assert_eq!(ticks, 2);
    }

    #[test]
    fn glide_to_a_step_keeps_the_path() {
        let mut ctl = controller();
        for r in [1.0, 2.0, 3.0, 4.0, 5.0] {
            ctl.path_mut().push(knot(r));
        }
        let authored = ctl.path().steps().to_vec();
        ctl.set_navigator(Box::new(Glide::new(4)));
        ctl.set_here(knot(10.0));

        ctl.move_to(Target::Step(3));
        assert!(ctl.is_flying());
        assert_eq!(ctl.path().steps(), authored.as_slice());

        let _ = fly_until_landed(&mut ctl);
        assert_eq!(ctl.path().steps(), authored.as_slice());
        assert_eq!(ctl.here(), &authored[3]);
        assert_eq!(ctl.path().cursor(), 3);
        assert_eq!(ctl.path().head(), 3.0);
    }

    #[test]
    fn jumping_abandons_a_glide() {
        let mut ctl = glide_controller(8, 1.0);
        ctl.path_mut().push(knot(7.0));
        ctl.move_to(Target::Location(0));
        ctl.tick(0.016);
        ctl.jump_to(Target::Step(0));
        assert!(!ctl.is_flying());
        ctl.tick(0.016);
        assert_eq!(ctl.here().distance(), 7.0);
    }

    #[test]
    fn execute_edits_the_path_with_here() {
        let mut ctl = controller();
        ctl.set_here(knot(1.0));
        ctl.execute(ViewCommand::AppendStep);
        ctl.set_here(knot(2.0));
        ctl.execute(ViewCommand::AppendStep);
        ctl.set_here(knot(1.5));
        ctl.execute(ViewCommand::InsertStep);
        let distances: Vec<f64> =
            ctl.path().iter().map(ViewState::distance).collect();
        assert_eq!(distances, [1.0, 1.5, 2.0]);

        ctl.execute(ViewCommand::Faster);
        ctl.execute(ViewCommand::NextStep);
        ctl.execute(ViewCommand::JumpToStep);
        assert_eq!(ctl.here().distance(), 2.0);

        ctl.execute(ViewCommand::DeleteStep);
        assert_eq!(ctl.path().len(), 2);
        assert_eq!(ctl.path().cursor(), 1);
        assert!((ctl.path().steps()[1].speed() - 1.1).abs() < 1e-12);
    }

    #[test]
    fn execute_drives_the_head() {
        let mut ctl = controller();
        for r in [1.0, 2.0, 3.0] {
            ctl.path_mut().push(knot(r));
        }
        ctl.execute(ViewCommand::FastForward { movie: false });
        assert_eq!(ctl.path().direction(), Direction::Forward);
        ctl.tick(0.016);
        assert_eq!(ctl.here().distance(), 2.0);
        ctl.execute(ViewCommand::Rewind { movie: true });
        assert_eq!(ctl.path().direction(), Direction::Backward);
        assert!(ctl.host().movie);
        ctl.execute(ViewCommand::Stop);
        assert!(!ctl.is_playing());
        assert!(!ctl.host().movie);
    }

    #[test]
    fn zoom_integrates_before_playback() {
        let mut ctl = controller();
        ctl.set_here(knot(1.0).with_zoom(3.0));
        ctl.execute(ViewCommand::ZoomRate { rate: 1.0 });
        ctl.tick(0.5);
        assert!((ctl.zoom().exponent() - 0.5).abs() < 1e-12);
        ctl.execute(ViewCommand::Zoom { delta: 0.5 });
        assert!((ctl.zoom_factor() - 6.0).abs() < 1e-12);

        let frame = ctl.frame();
        assert_eq!(frame.state.zoom(), 3.0);
        assert!((frame.zoom_factor - 6.0).abs() < 1e-12);
        assert_eq!(frame.scale, 1.0);

        ctl.execute(ViewCommand::ZoomHome);
        ctl.tick(1.0);
        assert_eq!(ctl.zoom().exponent(), 0.0);
    }

    #[test]
    fn flush_and_reports_reach_the_host() {
        let mut ctl = controller();
        ctl.execute(ViewCommand::FlushCache);
        ctl.execute(ViewCommand::ReportLocation);
        ctl.execute(ViewCommand::ReportState);
        assert_eq!(ctl.host().flushes, 1);
    }

    #[test]
    fn release_scenes_clears_every_state() {
        let mut ctl = controller();
        ctl.load_tour_str(TOUR).unwrap();
        ctl.path_mut().push(knot(1.0));
        ctl.record(true);
        ctl.release_scenes();
        assert!(ctl.locations().is_empty());
        assert!(ctl.path().is_empty());
        assert!(!ctl.is_recording());
        assert_eq!(ctl.here(), &ViewState::default());
    }

    #[test]
    fn mov_files_round_trip_through_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("flight.mov");

        let mut ctl = controller();
        ctl.set_here(ViewState::new().with_scenes(SceneSet::foreground("io")));
        ctl.path_mut().push(knot(2.0).with_position(DVec3::X));
        ctl.path_mut().push(knot(3.0).with_position(DVec3::Y));
        ctl.save_mov(&file).unwrap();

        let mut other = controller();
        other.set_here(ViewState::new().with_scenes(SceneSet::foreground("io")));
        other.load_mov(&file).unwrap();
        assert_eq!(other.path().len(), 2);
        let first = &other.path().steps()[0];
        assert!((first.distance() - 2.0).abs() < 1e-12);
        assert_eq!(first.scenes(), &SceneSet::foreground("io"));

        std::fs::write(&file, "1 2 3 oops 0 0\n").unwrap();
        assert!(matches!(
            other.load_mov(&file),
            Err(VistaError::MovParse { line: 1, .. })
        ));
        assert_eq!(other.path().len(), 2);
    }
}
