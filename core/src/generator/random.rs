use alloc::vec::Vec;

use super::*;

/// Purely random placement that keeps a safety bubble around the first uncovered cell free of mines.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleGenerator {
    seed: u64,
    start: Coord2,
}

impl BubbleGenerator {
    pub fn new(seed: u64, start: Coord2) -> Self {
        Self { seed, start }
    }
}

impl MinefieldGenerator for BubbleGenerator {
    fn generate(self, config: GameConfig) -> Result<MinePlacementRecord> {
        use rand::prelude::*;

        config.validate()?;
        let (rows, cols) = config.size;
        if self.start.0 >= rows || self.start.1 >= cols {
            return Err(GameError::InvalidCoords);
        }

        let bubble = SafetyBubble::for_config(config);
        if bubble == SafetyBubble::StartOnly {
            log::debug!("Not enough room for a safe block, only the start cell is kept free");
        }
        let radius = bubble.radius();

        let mut free: Vec<Coord2> = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|&pos| chebyshev(pos, self.start) > radius)
            .collect();

        let mut record = MinePlacementRecord::default();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        while record.len() < usize::from(config.mines) {
            if free.is_empty() {
                log::warn!(
                    "Ran out of free cells, placed {} of {} mines",
                    record.len(),
                    config.mines
                );
                break;
            }
            let pick = rng.random_range(0..free.len());
            record.push(free.swap_remove(pick));
        }

        log::debug!("Placed {} mines around start {:?}", record.len(), self.start);
        Ok(record)
    }
}
