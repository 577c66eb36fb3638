//! Coordinate-list seeds: `x,y` pairs separated by `|`, e.g. `1,1|2,2|3,3`.

use itertools::Itertools;

use crate::{CoordError, Error, Grid};

/// Empty rows/columns kept beyond the farthest live cell on each axis.
const PADDING: usize = 1;

pub fn parse(s: &str) -> Result<Grid, Error> {
    if s.is_empty() {
        return Err(Error::InvalidSeed("seed string is empty"));
    }
    let cells: Vec<(usize, usize)> = s.split('|').map(parse_cell).collect::<Result<_, _>>()?;
    let (width, height) = bounds(&cells).ok_or(Error::InvalidSeed("seed is too large"))?;
    let mut grid = Grid::try_new(width, height)?;
    for p in cells {
        grid.set(p, true);
    }
    Ok(grid)
}

fn parse_cell(token: &str) -> Result<(usize, usize), Error> {
    let malformed = |source: CoordError| Error::MalformedSeed {
        token: token.to_owned(),
        source,
    };
    let Some((x, y)) = token.split(',').collect_tuple() else {
        return Err(malformed(CoordError::Arity(token.split(',').count())));
    };
    let x = x.parse().map_err(|e| malformed(CoordError::Int(e)))?;
    let y = y.parse().map_err(|e| malformed(CoordError::Int(e)))?;
    Ok((x, y))
}

fn bounds(cells: &[(usize, usize)]) -> Option<(usize, usize)> {
    let extent = |max: Option<usize>| max?.checked_add(PADDING + 1);
    let width = extent(cells.iter().map(|&(x, _)| x).max())?;
    let height = extent(cells.iter().map(|&(_, y)| y).max())?;
    Some((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord_error(s: &str) -> CoordError {
        match parse(s) {
            Err(Error::MalformedSeed { source, .. }) => source,
            other => panic!("expected a malformed seed, got {other:?}"),
        }
    }

    #[test]
    fn test_padding() {
        let grid = parse("0,0").unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 2));
        let grid = parse("4,1|0,6").unwrap();
        assert_eq!((grid.width(), grid.height()), (6, 8));
    }

    #[test]
    fn test_duplicates() {
        let grid = parse("2,2|2,2").unwrap();
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_arity() {
        assert!(matches!(coord_error("1,2,3"), CoordError::Arity(3)));
        assert!(matches!(coord_error("1,1|7"), CoordError::Arity(1)));
    }

    #[test]
    fn test_not_integers() {
        assert!(matches!(coord_error("1,1|"), CoordError::Arity(1)));
        assert!(matches!(coord_error("1,"), CoordError::Int(_)));
        assert!(matches!(coord_error("-1,2"), CoordError::Int(_)));
        assert!(matches!(coord_error(" 1,2"), CoordError::Int(_)));
        assert!(matches!(coord_error("1,2 "), CoordError::Int(_)));
    }

    #[test]
    fn test_too_large() {
        let s = format!("{},0", usize::MAX);
        assert!(matches!(parse(&s), Err(Error::InvalidSeed(_))));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_area_beyond_allocation() {
        // The area fits in a usize but no Vec can hold that many cells.
        let s = "4000000000,4000000000";
        assert!(matches!(parse(s), Err(Error::InvalidSeed(_))));
        assert!(matches!(s.parse::<crate::Simulator>(), Err(Error::InvalidSeed(_))));
    }

    #[test]
    fn test_reports_token() {
        let Err(Error::MalformedSeed { token, .. }) = parse("1,1|x,2|3,3") else {
            panic!();
        };
        assert_eq!(token, "x,2");
    }
}
