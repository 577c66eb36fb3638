use std::io;

use crossterm::event::KeyCode;
use eyre::Result;
use gol::{Pattern, Simulator};
use log::warn;

use crate::screen::{clear, read_key};

/// Walks the user through picking a seed. `None` means they chose to exit.
pub fn choose_seed() -> Result<Option<Simulator>> {
    clear()?;
    println!("**********************  Welcome to Conway's Game of Life  **********");
    println!("**********************  Instructions  ******************************");
    println!("********************************************************************");
    println!("Press C for common patterns");
    println!("Press M for manual entry of initial seed");
    println!("Press any other key to exit");
    match read_key()? {
        KeyCode::Char('c' | 'C') => choose_pattern(),
        KeyCode::Char('m' | 'M') => enter_seed(),
        _ => Ok(None),
    }
}

/// Asks whether to start ticking.
pub fn confirm_start() -> Result<bool> {
    println!("Press S to start, any other key to exit now or later");
    Ok(matches!(read_key()?, KeyCode::Char('s' | 'S')))
}

fn choose_pattern() -> Result<Option<Simulator>> {
    clear()?;
    println!("**********************  Choose from following patterns *************");
    for (i, pattern) in Pattern::ALL.iter().enumerate() {
        println!("Press {i} for {pattern}");
    }
    println!("Press any other key to exit");
    let KeyCode::Char(c) = read_key()? else {
        return Ok(None);
    };
    let Some(i) = c.to_digit(10) else {
        return Ok(None);
    };
    match Pattern::from_index(i as usize) {
        Ok(pattern) => Ok(Some(pattern.into())),
        Err(e) => {
            warn!("{e}");
            Ok(None)
        }
    }
}

fn enter_seed() -> Result<Option<Simulator>> {
    clear()?;
    println!("Enter manual feed as 1,1|2,3|4,5");
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let sim = line.trim_end_matches(['\r', '\n']).parse::<Simulator>()?;
    Ok(Some(sim))
}
