use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::types::{Coord, Coord2};

/// Marker shown for a mine (reveal-all mode only).
pub const MINE_MARKER: char = 'X';
/// Marker shown for a closed, flagged cell.
pub const FLAG_MARKER: char = 'F';
/// Marker shown for a closed, unflagged cell.
pub const CLOSED_MARKER: char = '.';
/// Marker shown for a cell with zero adjacent mines.
pub const BLANK_MARKER: char = ' ';

/// One grid position: mine/open/flag state plus adjacency data.
///
/// The neighbor list and adjacent-mine count are filled in once by the board
/// right after mine placement and never change afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) row: Coord,
    pub(crate) col: Coord,
    pub(crate) is_mine: bool,
    pub(crate) is_open: bool,
    pub(crate) is_flagged: bool,
    pub(crate) adjacent_mines: u8,
    pub(crate) neighbors: SmallVec<[Coord2; 8]>,
}

impl Cell {
    pub(crate) fn new(row: Coord, col: Coord) -> Self {
        Self {
            row,
            col,
            is_mine: false,
            is_open: false,
            is_flagged: false,
            adjacent_mines: 0,
            neighbors: SmallVec::new(),
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    /// In-bounds adjacent coordinates, fixed at board construction.
    pub fn neighbors(&self) -> &[Coord2] {
        &self.neighbors
    }

    /// Marker under normal display rules: open cells show their adjacent
    /// count, closed cells show the flag or closed marker. Flag state stops
    /// mattering once a cell is open.
    pub(crate) fn display(&self) -> char {
        if self.is_open {
            count_marker(self.adjacent_mines)
        } else if self.is_flagged {
            FLAG_MARKER
        } else {
            CLOSED_MARKER
        }
    }

    /// Marker under reveal-all rules: true contents, open/flag state ignored.
    pub(crate) fn display_revealed(&self) -> char {
        if self.is_mine {
            MINE_MARKER
        } else {
            count_marker(self.adjacent_mines)
        }
    }
}

/// Digit for a nonzero count, blank for zero. Counts never exceed 8.
fn count_marker(count: u8) -> char {
    if count == 0 {
        BLANK_MARKER
    } else {
        char::from_digit(count.into(), 10).unwrap()
    }
}
