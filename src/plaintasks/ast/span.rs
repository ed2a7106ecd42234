//! Position and location tracking for source code locations
//!
//! This module defines the data structures for representing positions
//! and locations in source code. Columns are byte offsets within the line.

use super::error::PositionLookupError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Represents a position in source code (line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Parses the `line:column` form produced by `Display`.
impl FromStr for Position {
    type Err = PositionLookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionLookupError::InvalidPositionFormat(s.to_string());
        let (line, column) = s.split_once(':').ok_or_else(invalid)?;
        let line = line.trim().parse().map_err(|_| invalid())?;
        let column = column.trim().parse().map_err(|_| invalid())?;
        Ok(Position::new(line, column))
    }
}

/// Represents a location in source code (start and end positions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Check if a position is contained within this location
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos <= self.end
    }

    /// Check if another location overlaps with this location
    pub fn overlaps(&self, other: Location) -> bool {
        self.contains(other.start)
            || self.contains(other.end)
            || other.contains(self.start)
            || other.contains(self.end)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_contains() {
        let location = Location::new(Position::new(1, 5), Position::new(2, 10));

        assert!(location.contains(Position::new(1, 5)));
        assert!(location.contains(Position::new(2, 10)));
        assert!(location.contains(Position::new(1, 8)));
        assert!(location.contains(Position::new(2, 0)));

        assert!(!location.contains(Position::new(1, 4)));
        assert!(!location.contains(Position::new(2, 11)));
        assert!(!location.contains(Position::new(0, 0)));
    }

    #[test]
    fn test_location_overlaps() {
        let first = Location::new(Position::new(0, 0), Position::new(1, 5));
        let second = Location::new(Position::new(1, 0), Position::new(2, 5));
        let third = Location::new(Position::new(3, 0), Position::new(4, 5));

        assert!(first.overlaps(second));
        assert!(second.overlaps(first));
        assert!(!first.overlaps(third));
        assert!(!third.overlaps(first));
    }

    #[test]
    fn test_position_round_trips_through_display() {
        let position = Position::new(3, 14);
        assert_eq!(position.to_string(), "3:14");
        assert_eq!("3:14".parse::<Position>().unwrap(), position);
        assert_eq!(" 3 : 14 ".parse::<Position>().unwrap(), position);
    }

    #[test]
    fn test_invalid_position_format() {
        for input in ["", "3", "a:b", "3:", ":4", "-1:2"] {
            assert!(
                matches!(
                    input.parse::<Position>(),
                    Err(PositionLookupError::InvalidPositionFormat(_))
                ),
                "expected {:?} to be rejected",
                input
            );
        }
    }
}
