use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use eyre::Result;
use gol::{Pattern, Simulator};
use log::info;

use crate::{screen::RawMode, ticker::Ticker};

mod menu;
mod screen;
mod ticker;

#[derive(Parser, Debug)]
#[command(name = "game-of-life", version, about = "Conway's Game of Life in the terminal")]
struct Cli {
    /// Milliseconds between generations.
    #[arg(short, long, default_value_t = 1000)]
    tick: u64,

    /// Start straight away with a common pattern (blinker, toad, beacon, pulsar).
    #[arg(short, long, conflicts_with = "seed")]
    pattern: Option<Pattern>,

    /// Start straight away with live cells given as `x,y|x,y|...`.
    #[arg(short, long)]
    seed: Option<String>,

    /// Stop after this many generations.
    #[arg(short, long)]
    generations: Option<usize>,
}

impl Cli {
    fn simulator(&self) -> Result<Option<Simulator>, gol::Error> {
        match (self.pattern, &self.seed) {
            (Some(pattern), _) => Ok(Some(pattern.into())),
            (None, Some(seed)) => seed.parse().map(Some),
            (None, None) => Ok(None),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let simulator = match cli.simulator()? {
        Some(simulator) => simulator,
        None => {
            let Some(simulator) = menu::choose_seed()? else {
                return Ok(());
            };
            if !menu::confirm_start()? {
                return Ok(());
            }
            simulator
        }
    };
    info!(
        "starting {}x{} simulation, {} ms per tick",
        simulator.width(),
        simulator.height(),
        cli.tick
    );

    let running = Ticker::new(simulator, Duration::from_millis(cli.tick))
        .limit(cli.generations)
        .spawn(screen::draw);
    let raw = RawMode::enable()?;
    while !running.is_finished() {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    break;
                }
            }
        }
    }
    drop(raw);

    let simulator = running.stop()?;
    info!(
        "stopped after {} generations with {} live cells",
        simulator.generation(),
        simulator.population()
    );
    Ok(())
}
