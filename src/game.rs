//! The host-facing simulation handle
//!
//! A UI layer owns one [`Simulation`], forwards player input to the action
//! methods, and drives it from its frame callback. All calls share one
//! execution context; the handle never spawns threads or registers
//! callbacks of its own, so dropping it (or simply not driving it) is the
//! whole teardown story.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::{AudioSink, NullAudio, Sound};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::spawn::build_scenery;
use crate::sim::state::{GamePhase, SimState, StatsSnapshot};
use crate::sim::tick::tick;
use crate::tuning::Tuning;

/// UI-layer observer for per-tick stats and the end-of-run signal
///
/// Calls arrive synchronously from inside the tick; implementations must
/// not block and must not panic.
pub trait EventSink {
    /// Published once per running tick, after all state mutation
    fn on_stats(&mut self, stats: StatsSnapshot);
    /// Published exactly once per crash, with the score at impact
    fn on_game_over(&mut self, score: u32);
}

/// Default observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEvents;

impl EventSink for NullEvents {
    fn on_stats(&mut self, _stats: StatsSnapshot) {}
    fn on_game_over(&mut self, _score: u32) {}
}

/// The running game: state, seeded RNG, balance table, and injected
/// capability objects
pub struct Simulation {
    state: SimState,
    rng: Pcg32,
    tuning: Tuning,
    audio: Box<dyn AudioSink>,
    events: Box<dyn EventSink>,
    accumulator: f32,
}

impl Simulation {
    /// Create an idle simulation with default balance and no-op sinks
    ///
    /// The scenery strip is laid down immediately so a menu screen has a
    /// world to draw; nothing moves until [`Simulation::start`].
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create an idle simulation with a custom balance table
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = SimState::new(seed, &tuning);
        let mut rng = Pcg32::seed_from_u64(seed);
        build_scenery(&mut state, &mut rng);
        Self {
            state,
            rng,
            tuning,
            audio: Box::new(NullAudio),
            events: Box::new(NullEvents),
            accumulator: 0.0,
        }
    }

    /// Inject the audio backend
    pub fn set_audio_sink(&mut self, audio: Box<dyn AudioSink>) {
        self.audio = audio;
    }

    /// Inject the stats/game-over observer
    pub fn set_event_sink(&mut self, events: Box<dyn EventSink>) {
        self.events = events;
    }

    // === Action surface ===

    /// Begin a run; no-op while one is already running
    pub fn start(&mut self) {
        if self.state.phase == GamePhase::Running {
            return;
        }
        self.restart();
    }

    /// Abandon the current state and begin a fresh run
    pub fn reset(&mut self) {
        self.restart();
    }

    /// Move one lane left; no-op at the edge or after a crash
    pub fn move_left(&mut self) {
        if self.state.is_game_over() {
            return;
        }
        self.state.runner.shift_lane(-1);
    }

    /// Move one lane right; no-op at the edge or after a crash
    pub fn move_right(&mut self) {
        if self.state.is_game_over() {
            return;
        }
        self.state.runner.shift_lane(1);
    }

    /// Begin a jump; no-op while airborne or after a crash
    pub fn jump(&mut self) {
        if self.state.is_game_over() {
            return;
        }
        if self.state.runner.begin_jump(&self.tuning) {
            self.audio.play(Sound::Jump);
        }
    }

    // === Frame driving ===

    /// Advance by exactly one fixed timestep
    pub fn step(&mut self) {
        tick(
            &mut self.state,
            &mut self.rng,
            &self.tuning,
            self.audio.as_mut(),
            self.events.as_mut(),
        );
    }

    /// Advance by a variable host frame time
    ///
    /// Accumulates `dt` and runs fixed steps, capped at `MAX_SUBSTEPS` per
    /// call so a long hitch cannot snowball into a catch-up spiral.
    pub fn advance(&mut self, dt: f32) {
        self.accumulator += dt.min(0.1);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    // === Render adapter surface ===

    /// Full simulation state, valid until the next action or step call
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Stats for the most recently completed tick
    pub fn stats(&self) -> StatsSnapshot {
        self.state.stats()
    }

    /// The balance table this simulation runs with
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    fn restart(&mut self) {
        self.state.reset_run(&self.tuning);
        build_scenery(&mut self.state, &mut self.rng);
        log::info!("run started (seed {})", self.state.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct SharedEvents {
        stats: Vec<StatsSnapshot>,
        game_overs: Vec<u32>,
    }

    struct EventProbe(Rc<RefCell<SharedEvents>>);

    impl EventSink for EventProbe {
        fn on_stats(&mut self, stats: StatsSnapshot) {
            self.0.borrow_mut().stats.push(stats);
        }
        fn on_game_over(&mut self, score: u32) {
            self.0.borrow_mut().game_overs.push(score);
        }
    }

    struct SoundProbe(Rc<RefCell<Vec<Sound>>>);

    impl AudioSink for SoundProbe {
        fn play(&mut self, sound: Sound) {
            self.0.borrow_mut().push(sound);
        }
    }

    fn quiet_sim(seed: u64) -> Simulation {
        Simulation::with_tuning(
            seed,
            Tuning {
                obstacle_rate: 0.0,
                coin_rate: 0.0,
                ..Tuning::default()
            },
        )
    }

    #[test]
    fn test_new_simulation_is_idle_with_scenery() {
        let sim = Simulation::new(11);
        assert_eq!(sim.state().phase, GamePhase::Idle);
        assert!(!sim.state().scenery.is_empty());
        assert!(sim.state().obstacles.is_empty());
    }

    #[test]
    fn test_start_is_noop_while_running() {
        let mut sim = quiet_sim(1);
        sim.start();
        for _ in 0..50 {
            sim.step();
        }
        let distance = sim.stats().distance;
        sim.start();
        assert_eq!(sim.stats().distance, distance);
        assert_eq!(sim.state().phase, GamePhase::Running);
    }

    #[test]
    fn test_reset_restores_base_state() {
        let mut sim = quiet_sim(1);
        sim.start();
        sim.move_right();
        for _ in 0..200 {
            sim.step();
        }
        assert!(sim.stats().distance > 0.0);

        sim.reset();
        let state = sim.state();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.runner.lane, 0);
        assert_eq!(state.speed, Tuning::default().base_speed);
        assert_eq!(state.distance, 0.0);
        assert_eq!(state.score, 0);
        assert!(!state.runner.jumping);
        assert!(state.obstacles.is_empty());
        assert!(state.coins.is_empty());
    }

    #[test]
    fn test_movement_ignored_after_game_over() {
        let mut sim = quiet_sim(1);
        sim.start();
        sim.state.phase = GamePhase::GameOver;

        sim.move_left();
        sim.jump();
        assert_eq!(sim.state().runner.lane, 0);
        assert!(!sim.state().runner.jumping);

        // start() from the terminal state begins a fresh run
        sim.start();
        assert_eq!(sim.state().phase, GamePhase::Running);
        assert_eq!(sim.stats().distance, 0.0);
    }

    #[test]
    fn test_jump_plays_sound_once_per_arc() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let mut sim = quiet_sim(1);
        sim.set_audio_sink(Box::new(SoundProbe(played.clone())));
        sim.start();

        sim.jump();
        sim.jump(); // airborne: ignored
        assert_eq!(*played.borrow(), vec![Sound::Jump]);
    }

    #[test]
    fn test_advance_runs_fixed_steps() {
        let mut sim = quiet_sim(1);
        sim.start();

        // Two frames at exactly 60 Hz -> two ticks
        sim.advance(SIM_DT);
        sim.advance(SIM_DT);
        assert_eq!(sim.state().time_ticks, 2);

        // A huge hitch is clamped to the substep cap
        sim.advance(10.0);
        assert_eq!(sim.state().time_ticks, 2 + u64::from(MAX_SUBSTEPS));
    }

    #[test]
    fn test_stats_stream_reaches_observer() {
        let shared = Rc::new(RefCell::new(SharedEvents::default()));
        let mut sim = quiet_sim(1);
        sim.set_event_sink(Box::new(EventProbe(shared.clone())));
        sim.start();

        for _ in 0..5 {
            sim.step();
        }
        let events = shared.borrow();
        assert_eq!(events.stats.len(), 5);
        assert!(events.game_overs.is_empty());
        assert_eq!(events.stats[4].distance, sim.stats().distance);
    }

    #[test]
    fn test_full_run_to_crash_and_back() {
        let shared = Rc::new(RefCell::new(SharedEvents::default()));
        let mut sim = quiet_sim(2);
        sim.set_event_sink(Box::new(EventProbe(shared.clone())));
        sim.start();

        // Drop an obstacle right on the runner
        crate::sim::spawn::spawn_obstacle(&mut sim.state, 0);
        sim.state.obstacles[0].pos.z = 0.0;
        sim.step();

        assert!(sim.state().is_game_over());
        assert_eq!(shared.borrow().game_overs.len(), 1);

        let stats_before = shared.borrow().stats.len();
        for _ in 0..100 {
            sim.step();
        }
        assert_eq!(shared.borrow().stats.len(), stats_before);

        sim.reset();
        sim.step();
        assert!(sim.state().is_running());
        assert_eq!(shared.borrow().stats.len(), stats_before + 1);
    }
}
