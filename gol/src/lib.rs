mod error;
mod grid;
mod pattern;
mod render;
mod seed;
mod simulator;


pub use crate::{
    error::{CoordError, Error},
    grid::Grid,
    pattern::Pattern,
    simulator::Simulator,
};
