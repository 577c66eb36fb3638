use std::{
    io,
    sync::mpsc::{self, Receiver, RecvTimeoutError, Sender},
    thread::{self, JoinHandle},
    time::Duration,
};

use gol::Simulator;
use log::debug;

/// Renders and steps a simulation on a background thread until stopped.
pub struct Ticker {
    simulator: Simulator,
    tick: Duration,
    limit: Option<usize>,
}

pub struct Running {
    stop: Sender<()>,
    handle: JoinHandle<io::Result<Simulator>>,
}

impl Ticker {
    pub fn new(simulator: Simulator, tick: Duration) -> Self {
        Self {
            simulator,
            tick,
            limit: None,
        }
    }

    /// Finish on its own once this generation has been rendered.
    pub fn limit(self, limit: Option<usize>) -> Self {
        Self { limit, ..self }
    }

    pub fn spawn<F>(self, render: F) -> Running
    where
        F: FnMut(&Simulator) -> io::Result<()> + Send + 'static,
    {
        let (stop, stopped) = mpsc::channel();
        let handle = thread::spawn(move || self.run(render, stopped));
        Running { stop, handle }
    }
}

impl Ticker {
    fn run<F>(mut self, mut render: F, stopped: Receiver<()>) -> io::Result<Simulator>
    where
        F: FnMut(&Simulator) -> io::Result<()>,
    {
        loop {
            render(&self.simulator)?;
            if self.limit.is_some_and(|n| self.simulator.generation() >= n) {
                break;
            }
            self.simulator.step();
            match stopped.recv_timeout(self.tick) {
                Err(RecvTimeoutError::Timeout) => (),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        debug!("ticker stopped at generation {}", self.simulator.generation());
        Ok(self.simulator)
    }
}

impl Running {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Asks the ticker to stop and hands back the simulation.
    pub fn stop(self) -> io::Result<Simulator> {
        // Fails only if the ticker already finished, which is fine.
        let _ = self.stop.send(());
        self.handle
            .join()
            .map_err(|_| io::Error::other("ticker thread panicked"))?
    }
}
