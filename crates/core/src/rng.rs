//! RNG module - injectable tile sources
//!
//! Every random draw the engine makes goes through [`TileSource`], so games
//! and tests can swap the source:
//!
//! - [`SimpleRng`]: seeded LCG, uniform over the kinds in play
//! - [`ScriptedTiles`]: replays a fixed sequence, for exact cascade tests

use crate::types::TileType;

/// Source of freshly generated tiles.
pub trait TileSource {
    /// Draw one tile from `kinds` (never empty).
    fn next_tile(&mut self, kinds: &[TileType]) -> TileType;
}

impl<T: TileSource + ?Sized> TileSource for &mut T {
    fn next_tile(&mut self, kinds: &[TileType]) -> TileType {
        (**self).next_tile(kinds)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Multiply-shift keeps the high bits; the low bits of an LCG cycle
        // with a short period.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current generator state (feed back into [`SimpleRng::new`] to resume).
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TileSource for SimpleRng {
    fn next_tile(&mut self, kinds: &[TileType]) -> TileType {
        let index = self.next_range(kinds.len() as u32) as usize;
        kinds[index]
    }
}

/// Replays a fixed list of tiles, cycling when it runs out.
///
/// Tiles outside the `kinds` slice passed by the engine are returned as-is;
/// the script is trusted.
#[derive(Debug, Clone)]
pub struct ScriptedTiles {
    script: Vec<TileType>,
    cursor: usize,
}

impl ScriptedTiles {
    pub fn new(script: impl Into<Vec<TileType>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of tiles handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl TileSource for ScriptedTiles {
    fn next_tile(&mut self, kinds: &[TileType]) -> TileType {
        if self.script.is_empty() {
            return kinds[0];
        }
        let tile = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        tile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_range_stays_below_max() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(5) < 5);
        }
    }

    #[test]
    fn test_next_range_handles_wide_ranges() {
        let mut rng = SimpleRng::new(7);
        for max in [1, 65_538, 1 << 20, u32::MAX] {
            for _ in 0..100 {
                assert!(rng.next_range(max) < max);
            }
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_tile_draws_cover_every_kind() {
        let mut rng = SimpleRng::new(99);
        let kinds = &TileType::ALL[..4];
        let mut seen = [0u32; 4];
        for _ in 0..4000 {
            let tile = rng.next_tile(kinds);
            seen[tile.index() as usize] += 1;
        }
        // Roughly uniform: each kind within 20% of the expected 1000.
        for count in seen {
            assert!((800..=1200).contains(&count), "skewed draw: {:?}", seen);
        }
    }

    #[test]
    fn test_scripted_tiles_cycle() {
        let mut src = ScriptedTiles::new(vec![TileType::Blue, TileType::Red]);
        let kinds = &TileType::ALL[..3];
        assert_eq!(src.next_tile(kinds), TileType::Blue);
        assert_eq!(src.next_tile(kinds), TileType::Red);
        assert_eq!(src.next_tile(kinds), TileType::Blue);
        assert_eq!(src.drawn(), 3);
    }

    #[test]
    fn test_empty_script_falls_back_to_first_kind() {
        let mut src = ScriptedTiles::new(Vec::new());
        assert_eq!(src.next_tile(&TileType::ALL[2..5]), TileType::Yellow);
    }
}
