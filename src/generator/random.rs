use super::*;
use crate::types::CellCount;

/// Placement that samples the requested number of mines as independent
/// uniform positions.
///
/// Samples are drawn without checking prior occupancy, so a sample may land
/// on an already-mined cell and collapse into it. The board can therefore
/// end up with fewer distinct mines than requested; the shortfall is logged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomMinePlacer {
    seed: u64,
}

impl RandomMinePlacer {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Placer with a seed drawn from the OS.
    pub fn from_entropy() -> Self {
        use rand::prelude::*;
        Self {
            seed: rand::rng().random(),
        }
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place(self, config: BoardConfig) -> Array2<bool> {
        use rand::prelude::*;

        let mut mines: Array2<bool> =
            Array2::default([config.height as usize, config.width as usize]);
        let mut rng = SmallRng::seed_from_u64(self.seed);

        for _ in 0..config.mines {
            let row = rng.random_range(0..config.height);
            let col = rng.random_range(0..config.width);
            mines[(row as usize, col as usize)] = true;
        }

        // double check mine count
        let placed = mines.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        if placed < config.mines {
            log::warn!(
                "Duplicate samples collapsed, placed {} distinct mines of {} requested",
                placed,
                config.mines
            );
        }

        mines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_placement() {
        let config = BoardConfig::new(8, 8, 10);

        let a = RandomMinePlacer::new(42).place(config);
        let b = RandomMinePlacer::new(42).place(config);

        assert_eq!(a, b);
    }

    #[test]
    fn distinct_mine_count_never_exceeds_requested() {
        for seed in 0..20 {
            let config = BoardConfig::new(4, 4, 10);
            let mines = RandomMinePlacer::new(seed).place(config);
            let placed = mines.iter().filter(|&&is_mine| is_mine).count();
            assert!(placed <= 10);
        }
    }

    #[test]
    fn oversaturated_request_stays_within_the_grid() {
        let config = BoardConfig::new(2, 2, 100);
        let mines = RandomMinePlacer::new(7).place(config);

        assert_eq!(mines.dim(), (2, 2));
        assert!(mines.iter().filter(|&&is_mine| is_mine).count() <= 4);
    }

    #[test]
    fn zero_mines_leaves_the_mask_empty() {
        let config = BoardConfig::new(3, 3, 0);
        let mines = RandomMinePlacer::new(0).place(config);

        assert!(mines.iter().all(|&is_mine| !is_mine));
    }
}
