//! Tick loop
//!
//! Each iteration: measure elapsed time, sample tilt, run one physics tick,
//! hand the frame sink a snapshot, then sleep until the next tick boundary.
//! The loop exits once its run flag is cleared, from any thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;

use super::clock::FrameClock;
use super::tilt::TiltHandle;
use crate::consts::TICK_RATE_HZ;
use crate::render::{FrameSink, RenderSnapshot};
use crate::sim::{Autopilot, MazeState, TickInput, TickOutcome, tick};

/// Supplies the tilt vector for each tick
pub trait TiltSource {
    fn tilt(&mut self, state: &MazeState) -> Vec2;
}

impl TiltSource for TiltHandle {
    fn tilt(&mut self, _state: &MazeState) -> Vec2 {
        self.get()
    }
}

impl TiltSource for Autopilot {
    fn tilt(&mut self, state: &MazeState) -> Vec2 {
        self.steer(state)
    }
}

/// Shared running flag; clearing it ends `Runner::run` after the current tick
#[derive(Debug, Clone, Default)]
pub struct RunFlag(Arc<AtomicBool>);

impl RunFlag {
    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn set(&self, running: bool) {
        self.0.store(running, Ordering::Release);
    }

    pub fn stop(&self) {
        self.set(false);
    }
}

/// Owns the session and drives it at a fixed cadence
#[derive(Debug)]
pub struct Runner {
    state: MazeState,
    clock: FrameClock,
    flag: RunFlag,
    interval: Duration,
    max_ticks: Option<u64>,
}

impl Runner {
    pub fn new(state: MazeState, tick_rate_hz: f32) -> Self {
        let interval = Duration::try_from_secs_f32(1.0 / tick_rate_hz)
            .ok()
            .filter(|interval| !interval.is_zero())
            .unwrap_or_else(|| {
                log::warn!("Invalid tick rate {}, using {}", tick_rate_hz, TICK_RATE_HZ);
                Duration::from_secs_f32(1.0 / TICK_RATE_HZ)
            });
        Self {
            state,
            clock: FrameClock::new(),
            flag: RunFlag::default(),
            interval,
            max_ticks: None,
        }
    }

    /// Stop on its own after this many ticks per `run` call
    pub fn with_max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn state(&self) -> &MazeState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MazeState {
        &mut self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Handle for stopping the loop from elsewhere
    pub fn flag(&self) -> RunFlag {
        self.flag.clone()
    }

    pub fn is_running(&self) -> bool {
        self.flag.is_running()
    }

    /// Begin or resume ticking. The first tick after this sees zero elapsed time.
    pub fn start(&mut self) {
        if self.flag.is_running() {
            return;
        }
        self.clock.reset();
        self.flag.set(true);
        log::info!("Tick loop started ({:?} per tick)", self.interval);
    }

    /// Halt ticking; session state is left as is
    pub fn stop(&self) {
        if self.flag.is_running() {
            log::info!("Tick loop stopped");
        }
        self.flag.stop();
    }

    /// New viewport size (resets the ball)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }

    /// Run exactly one tick as of `now`
    pub fn step_at(
        &mut self,
        now: Instant,
        tilt: &mut impl TiltSource,
        sink: &mut impl FrameSink,
    ) -> TickOutcome {
        let dt = self.clock.tick(now);
        let input = TickInput {
            tilt: tilt.tilt(&self.state),
        };
        let outcome = tick(&mut self.state, &input, dt);
        sink.present(&RenderSnapshot::capture(&self.state));
        outcome
    }

    /// Tick until stopped. Returns the number of ticks run.
    pub fn run(&mut self, tilt: &mut impl TiltSource, sink: &mut impl FrameSink) -> u64 {
        let mut ran = 0;
        while self.flag.is_running() {
            if self.max_ticks.is_some_and(|max| ran >= max) {
                log::debug!("Tick limit {} reached", ran);
                self.stop();
                break;
            }

            let frame_start = Instant::now();
            self.step_at(frame_start, tilt, sink);
            ran += 1;

            let remaining = (frame_start + self.interval).saturating_duration_since(Instant::now());
            if !remaining.is_zero() {
                thread::sleep(remaining);
            }
        }
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts frames, optionally stopping the loop after `stop_after`
    struct CountingSink {
        frames: u64,
        stop_after: Option<(u64, RunFlag)>,
        saw_goal: bool,
    }

    impl CountingSink {
        fn new() -> Self {
            Self {
                frames: 0,
                stop_after: None,
                saw_goal: false,
            }
        }
    }

    impl FrameSink for CountingSink {
        fn present(&mut self, snapshot: &RenderSnapshot<'_>) {
            self.frames += 1;
            self.saw_goal |= snapshot.reached_goal;
            if let Some((n, flag)) = &self.stop_after {
                if self.frames >= *n {
                    flag.stop();
                }
            }
        }
    }

    fn runner(rows: usize, cols: usize) -> Runner {
        let mut runner = Runner::new(MazeState::new(rows, cols, 31), 1000.0);
        runner.resize(400.0, 400.0);
        runner
    }

    #[test]
    fn test_not_started_runs_nothing() {
        let mut runner = runner(4, 4);
        let mut sink = CountingSink::new();
        assert_eq!(runner.run(&mut TiltHandle::new(), &mut sink), 0);
        assert_eq!(sink.frames, 0);
    }

    #[test]
    fn test_max_ticks() {
        let mut runner = runner(4, 4).with_max_ticks(Some(3));
        let mut sink = CountingSink::new();
        runner.start();
        assert_eq!(runner.run(&mut TiltHandle::new(), &mut sink), 3);
        assert_eq!(sink.frames, 3);
        assert!(!runner.is_running());
    }

    #[test]
    fn test_stop_from_sink() {
        let mut runner = runner(4, 4);
        let mut sink = CountingSink::new();
        sink.stop_after = Some((5, runner.flag()));
        runner.start();
        assert_eq!(runner.run(&mut TiltHandle::new(), &mut sink), 5);
    }

    #[test]
    fn test_resume_has_no_time_skip() {
        let mut runner = runner(4, 4);
        let mut sink = CountingSink::new();
        let tilt = TiltHandle::new();
        tilt.set(1.0, 0.0);

        runner.start();
        let t0 = Instant::now();
        runner.step_at(t0, &mut tilt.clone(), &mut sink);
        // First tick after start: zero elapsed time, so tilt adds nothing
        assert_eq!(runner.state().ball.vel, Vec2::ZERO);

        runner.stop();
        runner.start();
        runner.step_at(t0 + Duration::from_secs(30), &mut tilt.clone(), &mut sink);
        assert_eq!(runner.state().ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_stop_leaves_state_alone() {
        let mut runner = runner(4, 4);
        runner.state_mut().ball.vel = Vec2::new(0.01, 0.0);
        let before = runner.state().ball;
        runner.start();
        runner.stop();
        assert_eq!(runner.state().ball, before);
    }

    #[test]
    fn test_single_cell_goal_on_first_frame() {
        let mut runner = runner(1, 1);
        let mut sink = CountingSink::new();
        let outcome = runner.step_at(Instant::now(), &mut TiltHandle::new(), &mut sink);
        assert!(outcome.reached_goal);
        assert!(sink.saw_goal);
    }

    #[test]
    fn test_invalid_tick_rate_falls_back() {
        let fallback = Duration::from_secs_f32(1.0 / TICK_RATE_HZ);
        for rate in [0.0, -5.0, f32::NAN, f32::INFINITY, 1e-30] {
            let runner = Runner::new(MazeState::new(2, 2, 0), rate);
            assert_eq!(runner.interval(), fallback, "rate {}", rate);
        }
    }

    #[test]
    fn test_zero_max_ticks_runs_nothing() {
        let mut runner = runner(4, 4).with_max_ticks(Some(0));
        let mut sink = CountingSink::new();
        runner.start();
        assert_eq!(runner.run(&mut TiltHandle::new(), &mut sink), 0);
        assert_eq!(sink.frames, 0);
        assert!(!runner.is_running());
    }
}
