use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The seed has no cells, or its cells don't form a rectangle.
    #[error("invalid seed: {0}")]
    InvalidSeed(&'static str),

    /// A `x,y` descriptor in a seed string couldn't be parsed.
    #[error("malformed seed at {token:?}")]
    MalformedSeed {
        token: String,
        #[source]
        source: CoordError,
    },

    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}

#[derive(Debug, Error)]
pub enum CoordError {
    #[error("expected 2 coordinates, found {0}")]
    Arity(usize),

    #[error(transparent)]
    Int(#[from] ParseIntError),
}
