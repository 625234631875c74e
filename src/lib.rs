//! Minesweeper game-state engine: a mine grid with cascade reveal, flags,
//! win/loss reporting, and text rendering.
//!
//! Frontends own the windowing, input routing and dialogs; they drive a
//! [`Board`] through its synchronous API and render its string output. On
//! [`Board::open`] returning `Ok(false)` the game is lost; a front end
//! typically switches on [`Board::set_reveal_all`], renders the final board
//! and discards it. [`Board::is_done`] returning true after a successful
//! open signals the win.

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Board dimensions plus the requested mine count.
///
/// `mines` is a target, not a guarantee: random placement samples positions
/// independently, so duplicates can collapse and leave fewer distinct mines
/// on the board. The count is deliberately not clamped against the cell
/// total either; keeping it in range is the caller's responsibility.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub height: Coord,
    pub width: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(height: Coord, width: Coord, mines: CellCount) -> Self {
        Self {
            height,
            width,
            mines,
        }
    }

    /// Config with both dimensions clamped to at least 1.
    pub fn new(height: Coord, width: Coord, mines: CellCount) -> Self {
        Self::new_unchecked(height.max(1), width.max(1), mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.height, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_dimensions_but_not_mines() {
        let config = BoardConfig::new(0, 0, 99);

        assert_eq!(config.height, 1);
        assert_eq!(config.width, 1);
        assert_eq!(config.mines, 99);
    }

    #[test]
    fn total_cells_is_the_product_of_the_dimensions() {
        assert_eq!(BoardConfig::new(9, 9, 10).total_cells(), 81);
    }
}
