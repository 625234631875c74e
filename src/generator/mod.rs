use ndarray::Array2;

use crate::BoardConfig;

pub use random::*;

mod random;

/// Strategy for choosing which cells hold mines.
pub trait MinePlacer {
    /// Produces the mine mask for `config`, `true` marking a mined cell.
    fn place(self, config: BoardConfig) -> Array2<bool>;
}
