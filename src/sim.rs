use std::{
    sync::mpsc::{self, RecvTimeoutError},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use crate::Generation;

pub use evolver::{rule, step, Boundary, Evolver};
mod evolver;

/// A generation together with the tick that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub tick: u64,
    pub generation: Generation,
}

#[derive(Debug)]
pub struct State {
    tick: u64,
    generation: Generation,
    evolver: Evolver,
}

impl State {
    pub fn new(generation: Generation, evolver: Evolver) -> Self {
        Self {
            tick: 0,
            generation,
            evolver,
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    /// Replaces the held generation with its successor.
    pub fn advance(&mut self) {
        self.generation = self.evolver.step(&self.generation);
        self.tick += 1;
    }

    pub fn snapshot(&self) -> Frame {
        Frame {
            tick: self.tick,
            generation: self.generation.clone(),
        }
    }
}

pub enum SimCmd {
    Snapshot(mpsc::Sender<Frame>),
    Accelerate,
    Decelerate,
    Stop,
}

#[derive(Debug, Clone)]
pub struct SimHandle {
    sender: mpsc::Sender<SimCmd>,
}

impl SimHandle {
    /// Returns `None` once the simulation has stopped.
    pub fn snapshot(&self) -> Option<Frame> {
        let (sender, receiver) = mpsc::channel();
        self.sender.send(SimCmd::Snapshot(sender)).ok()?;
        receiver.recv().ok()
    }

    pub fn accelerate(&self) {
        let _ = self.sender.send(SimCmd::Accelerate);
    }

    pub fn decelerate(&self) {
        let _ = self.sender.send(SimCmd::Decelerate);
    }

    pub fn stop(&self) {
        let _ = self.sender.send(SimCmd::Stop);
    }
}

/// The simulation thread. Owns the current generation and steps it on every tick.
#[derive(Debug)]
pub struct Sim {
    thread: JoinHandle<()>,
    sender: mpsc::Sender<SimCmd>,
}

impl Sim {
    pub fn spawn(initial: Generation, evolver: Evolver, interval: Duration) -> Self {
        let state = State::new(initial, evolver);
        let interval = clamp_interval(interval);

        let (sender, receiver) = mpsc::channel();
        let thread = thread::spawn(move || sim_loop(receiver, state, interval));

        Self { thread, sender }
    }

    pub fn handle(&self) -> SimHandle {
        let sender = self.sender.clone();
        SimHandle { sender }
    }

    pub fn join(self) -> thread::Result<()> {
        let Self { thread, sender } = self;
        drop(sender);
        thread.join()
    }
}

pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(25);
pub const MAX_TICK_INTERVAL: Duration = Duration::from_secs(5);

fn clamp_interval(interval: Duration) -> Duration {
    interval.clamp(MIN_TICK_INTERVAL, MAX_TICK_INTERVAL)
}

fn sim_loop(receiver: mpsc::Receiver<SimCmd>, state: State, interval: Duration) {
    let mut current_state = state;
    let mut interval = interval;
    let mut last_update = Instant::now();
    let mut next_update = last_update + interval;

    loop {
        let timeout = next_update.saturating_duration_since(Instant::now());
        match receiver.recv_timeout(timeout) {
            Ok(SimCmd::Snapshot(sender)) => {
                let _ = sender.send(current_state.snapshot());
            }
            Ok(SimCmd::Accelerate) => {
                interval = clamp_interval(interval / 2);
                next_update = last_update + interval;
            }
            Ok(SimCmd::Decelerate) => {
                interval = clamp_interval(interval * 2);
                next_update = last_update + interval;
            }
            Ok(SimCmd::Stop) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                current_state.advance();
                last_update = Instant::now();
                next_update = last_update + interval;
            }
        }
    }
}
