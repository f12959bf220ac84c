use std::collections::HashMap;

use rand::Rng;
use thiserror::Error;

use crate::utils::letters::TILE_DISTRIBUTION;

/// Target rack size for each player
pub const RACK_SIZE: usize = 7;

#[derive(Debug, Error)]
pub enum BagError {
    #[error("not enough tiles in bag: requested {requested}, only {remaining} remaining")]
    NotEnoughTiles { requested: usize, remaining: usize },
}

/// The shared pool of undrawn letter tiles.
///
/// Seeded once from the standard distribution and only mutated by draws
/// and returns for the rest of the game.
#[derive(Debug, Clone)]
pub struct TileBag {
    counts: HashMap<char, u32>,
    remaining: usize,
}

impl TileBag {
    /// Create a bag with the standard 98-tile distribution
    pub fn standard() -> Self {
        let counts = TILE_DISTRIBUTION.clone();
        let remaining = counts.values().sum::<u32>() as usize;
        Self { counts, remaining }
    }

    /// Number of undrawn tiles left in the bag
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Draw `count` tiles at random.
    ///
    /// Selection is weighted by remaining frequency: a uniform index into
    /// the remaining multiset is walked across the per-letter counts, so a
    /// letter with 9 tiles left is nine times as likely as one with 1.
    pub fn draw(&mut self, count: usize) -> Result<Vec<char>, BagError> {
        if count > self.remaining {
            return Err(BagError::NotEnoughTiles {
                requested: count,
                remaining: self.remaining,
            });
        }

        let mut rng = rand::rng();
        let mut tiles = Vec::with_capacity(count);

        for _ in 0..count {
            let mut idx = rng.random_range(0..self.remaining);
            for letter in 'A'..='Z' {
                let Some(slot) = self.counts.get_mut(&letter) else {
                    continue;
                };
                let freq = *slot as usize;
                if idx < freq {
                    *slot -= 1;
                    self.remaining -= 1;
                    tiles.push(letter);
                    break;
                }
                idx -= freq;
            }
        }

        Ok(tiles)
    }

    /// Return tiles to the bag (used when a skip discards the rack)
    pub fn return_tiles(&mut self, tiles: &[char]) {
        for &tile in tiles {
            *self.counts.entry(tile.to_ascii_uppercase()).or_insert(0) += 1;
            self.remaining += 1;
        }
    }

    /// Top a rack back up to `RACK_SIZE`, clamped to the remaining supply.
    /// Never errors: when the bag runs dry the rack simply stays short.
    pub fn replenish(&mut self, rack: &mut Vec<char>) {
        let needed = RACK_SIZE.saturating_sub(rack.len()).min(self.remaining);
        if needed > 0 {
            // needed <= remaining, so the draw cannot fail
            if let Ok(tiles) = self.draw(needed) {
                rack.extend(tiles);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn count_of(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_bag_size() {
        let bag = TileBag::standard();
        assert_eq!(bag.remaining(), 98);
    }

    #[test]
    fn test_draw_decrements_remaining_exactly() {
        let mut bag = TileBag::standard();
        let before = bag.remaining();
        let tiles = bag.draw(7).unwrap();
        assert_eq!(tiles.len(), 7);
        assert_eq!(bag.remaining(), before - 7);
        // remaining tracks the sum of per-letter counts
        let sum: u32 = ('A'..='Z').map(|l| bag.count_of(l)).sum();
        assert_eq!(sum as usize, bag.remaining());
    }

    #[test]
    fn test_draw_never_yields_exhausted_letter() {
        // Drain the entire bag and tally what came out; every letter must
        // match the seeded distribution exactly, so no letter was drawn
        // past a zero count.
        let mut bag = TileBag::standard();
        let tiles = bag.draw(98).unwrap();
        assert_eq!(bag.remaining(), 0);

        let mut drawn: HashMap<char, u32> = HashMap::new();
        for tile in tiles {
            *drawn.entry(tile).or_insert(0) += 1;
        }
        for (letter, freq) in TILE_DISTRIBUTION.iter() {
            assert_eq!(drawn.get(letter), Some(freq), "letter {letter}");
        }
    }

    #[test]
    fn test_overdraw_fails() {
        let mut bag = TileBag::standard();
        let err = bag.draw(99).unwrap_err();
        assert!(matches!(
            err,
            BagError::NotEnoughTiles {
                requested: 99,
                remaining: 98
            }
        ));
        // a failed draw must not disturb the bag
        assert_eq!(bag.remaining(), 98);
    }

    #[test]
    fn test_return_tiles_restores_counts() {
        let mut bag = TileBag::standard();
        let tiles = bag.draw(7).unwrap();
        bag.return_tiles(&tiles);
        assert_eq!(bag.remaining(), 98);
        for (letter, freq) in TILE_DISTRIBUTION.iter() {
            assert_eq!(bag.count_of(*letter), *freq);
        }
    }

    #[test]
    fn test_replenish_tops_up_to_rack_size() {
        let mut bag = TileBag::standard();
        let mut rack = vec!['A', 'B'];
        bag.replenish(&mut rack);
        assert_eq!(rack.len(), RACK_SIZE);
        assert_eq!(bag.remaining(), 98 - 5);
    }

    #[test]
    fn test_replenish_clamps_to_supply() {
        let mut bag = TileBag::standard();
        let _ = bag.draw(95).unwrap();
        let mut rack = vec![];
        bag.replenish(&mut rack);
        assert_eq!(rack.len(), 3);
        assert_eq!(bag.remaining(), 0);

        // a second replenish against an empty bag is a no-op
        bag.replenish(&mut rack);
        assert_eq!(rack.len(), 3);
    }

    #[test]
    fn test_replenish_never_exceeds_rack_size() {
        let mut bag = TileBag::standard();
        let mut rack = vec!['A'; RACK_SIZE];
        bag.replenish(&mut rack);
        assert_eq!(rack.len(), RACK_SIZE);
        assert_eq!(bag.remaining(), 98);
    }
}
