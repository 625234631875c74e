use std::collections::VecDeque;
use std::fmt::{self, Write as _};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::BoardConfig;
use crate::cell::Cell;
use crate::error::{GameError, Result};
use crate::generator::{MinePlacer, RandomMinePlacer};
use crate::types::{CellCount, Coord, Coord2, NeighborIterExt, ToNdIndex};

/// A minesweeper board: the cell grid plus a reveal-all display flag.
///
/// The mine layout, neighbor lists and adjacent counts are fixed at
/// construction; afterwards only per-cell open/flag bits and the display
/// mode change. The board is the sole owner of its cells, and cells refer
/// to each other by coordinates only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    height: Coord,
    width: Coord,
    cells: Array2<Cell>,
    reveal_all: bool,
}

impl Board {
    /// Board with entropy-seeded random mine placement.
    pub fn new(config: BoardConfig) -> Self {
        Self::with_placer(config, RandomMinePlacer::from_entropy())
    }

    /// Board whose mines come from an explicit placement strategy.
    pub fn with_placer(config: BoardConfig, placer: impl MinePlacer) -> Self {
        Self::from_mine_mask(placer.place(config))
    }

    /// Board with mines at exactly the given coordinates, for deterministic
    /// layouts and replays.
    pub fn with_mines(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let (height, width) = size;
        let mut mines: Array2<bool> = Array2::default([height as usize, width as usize]);

        for &(row, col) in mine_coords {
            if row >= height || col >= width {
                return Err(GameError::OutOfBounds);
            }
            mines[(row as usize, col as usize)] = true;
        }

        Ok(Self::from_mine_mask(mines))
    }

    fn from_mine_mask(mines: Array2<bool>) -> Self {
        let (height, width) = mines.dim();
        let mut cells = Array2::from_shape_fn((height, width), |(row, col)| {
            let mut cell = Cell::new(row as Coord, col as Coord);
            cell.is_mine = mines[(row, col)];
            cell
        });

        // One pass wiring up neighbor lists and adjacent counts; both stay
        // fixed for the lifetime of the board.
        for row in 0..height {
            for col in 0..width {
                let cell = &mut cells[(row, col)];
                cell.neighbors = mines
                    .iter_neighbors((row as Coord, col as Coord))
                    .collect();
                cell.adjacent_mines = cell
                    .neighbors
                    .iter()
                    .filter(|&&pos| mines[pos.to_nd_index()])
                    .count()
                    .try_into()
                    .unwrap();
            }
        }

        Self {
            height: height as Coord,
            width: width as Coord,
            cells,
            reveal_all: false,
        }
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    /// Dimensions plus the distinct mine count actually on the board.
    pub fn config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.height, self.width, self.mine_count())
    }

    /// Distinct mines on the board. May be less than the count requested at
    /// construction when random samples collapsed.
    pub fn mine_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_mine)
            .count()
            .try_into()
            .unwrap()
    }

    pub fn cell(&self, row: Coord, col: Coord) -> Result<&Cell> {
        let coords = self.validate_coords((row, col))?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.height && coords.1 < self.width {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Opens a cell.
    ///
    /// Returns `Ok(false)` when the target is a mine (nothing changes), and
    /// `Ok(true)` when the cell is open afterwards; opening an already-open
    /// cell is a no-op. Opening a zero-adjacency cell cascades through its
    /// whole zero region plus the numbered boundary. The cascade never
    /// crosses into a mine, and it does open flagged closed cells.
    pub fn open(&mut self, row: Coord, col: Coord) -> Result<bool> {
        let coords = self.validate_coords((row, col))?;

        if self.cells[coords.to_nd_index()].is_mine {
            log::debug!("Open {:?} hit a mine", coords);
            return Ok(false);
        }
        if self.cells[coords.to_nd_index()].is_open {
            return Ok(true);
        }

        // Iterative flood fill. The open flag doubles as the visited guard
        // and is re-checked at every pop, so repeats in the worklist are
        // harmless and the loop is bounded by the grid size.
        let mut to_visit = VecDeque::from([coords]);
        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = &mut self.cells[visit_coords.to_nd_index()];
            if cell.is_mine || cell.is_open {
                continue;
            }

            cell.is_open = true;
            let adjacent_mines = cell.adjacent_mines;
            log::trace!(
                "Opened {:?}, adjacent mines: {}",
                visit_coords,
                adjacent_mines
            );

            // expansion stops at any numbered cell
            if adjacent_mines == 0 {
                let cell = &self.cells[visit_coords.to_nd_index()];
                to_visit.extend(cell.neighbors.iter().copied().filter(|&pos| {
                    let neighbor = &self.cells[pos.to_nd_index()];
                    !neighbor.is_mine && !neighbor.is_open
                }));
            }
        }

        Ok(true)
    }

    /// Flips the flag on a cell. Flagging an open cell is allowed; the flag
    /// simply stops showing once the cell is open.
    pub fn toggle_flag(&mut self, row: Coord, col: Coord) -> Result<()> {
        let coords = self.validate_coords((row, col))?;
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.is_flagged = !cell.is_flagged;
        Ok(())
    }

    /// Whether every non-mine cell is open. Mine cells' open and flag state
    /// never affect the result.
    pub fn is_done(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_mine || cell.is_open)
    }

    pub fn reveal_all(&self) -> bool {
        self.reveal_all
    }

    /// Toggles the reveal-all display mode for subsequent renders. Cell
    /// state is untouched.
    pub fn set_reveal_all(&mut self, reveal_all: bool) {
        self.reveal_all = reveal_all;
    }

    /// Marker for one cell under the current display mode.
    pub fn cell_display(&self, row: Coord, col: Coord) -> Result<char> {
        let coords = self.validate_coords((row, col))?;
        let cell = &self.cells[coords.to_nd_index()];
        Ok(if self.reveal_all {
            cell.display_revealed()
        } else {
            cell.display()
        })
    }

    /// The whole board as text, one line per row.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                f.write_char(if self.reveal_all {
                    cell.display_revealed()
                } else {
                    cell.display()
                })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
