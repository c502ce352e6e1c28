//! Cell occupants and the two sides of the game

use std::ops::Neg;

use serde::{Deserialize, Serialize};

/// The occupant of a cell, doubling as a signed evaluation unit.
///
/// `Computer` counts as `+1` and `Human` as `-1`, so the search maximises for
/// the computer and minimises for the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    Human,
    Computer,
}

impl Mark {
    /// Signed value of the mark: Computer +1, Human -1, Empty 0
    pub fn value(self) -> i32 {
        match self {
            Mark::Computer => 1,
            Mark::Human => -1,
            Mark::Empty => 0,
        }
    }

    /// Get the opposing side. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Human => Mark::Computer,
            Mark::Computer => Mark::Human,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Whether this mark belongs to one of the two players
    pub fn is_player(self) -> bool {
        self != Mark::Empty
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Human => 'H',
            Mark::Computer => 'C',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            '.' | '_' | '-' => Some(Mark::Empty),
            'H' | 'h' => Some(Mark::Human),
            'C' | 'c' => Some(Mark::Computer),
            _ => None,
        }
    }
}

impl Neg for Mark {
    type Output = Mark;

    fn neg(self) -> Mark {
        self.opponent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(Mark::Computer.value(), 1);
        assert_eq!(Mark::Human.value(), -1);
        assert_eq!(Mark::Empty.value(), 0);
    }

    #[test]
    fn test_negation_swaps_players() {
        assert_eq!(-Mark::Computer, Mark::Human);
        assert_eq!(-Mark::Human, Mark::Computer);
        assert_eq!(-(-Mark::Human), Mark::Human);
        assert_eq!(Mark::Computer.opponent().value(), -Mark::Computer.value());
    }

    #[test]
    fn test_char_roundtrip() {
        for mark in [Mark::Empty, Mark::Human, Mark::Computer] {
            assert_eq!(Mark::from_char(mark.to_char()), Some(mark));
        }
        assert_eq!(Mark::from_char('x'), None);
    }
}
