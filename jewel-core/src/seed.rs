//! Seed enumeration for a jewel's seed range.

use crate::error::JewelError;
use crate::jewel::SeedRange;

/// Factor between the reduced units of a scaled range and real seeds.
pub const SEED_SCALE: u32 = 20;

/// Every real seed in `range`, ascending, each exactly once.
///
/// Plain ranges yield `min..=max`. Scaled ranges walk the raw counter over
/// `min..=max` and yield `raw * SEED_SCALE`.
pub fn seeds(range: SeedRange) -> impl Iterator<Item = u32> + Clone {
    let factor = if range.is_scaled() { SEED_SCALE } else { 1 };
    (range.min()..=range.max()).map(move |raw| raw * factor)
}

/// Parse a decimal seed as given on the command line.
///
/// # Errors
///
/// Returns [`JewelError::InvalidArgument`] unless `token` is a `u32`.
pub fn parse_seed(token: &str) -> Result<u32, JewelError> {
    token
        .trim()
        .parse::<u32>()
        .map_err(|_| JewelError::invalid("seed", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_seed_accepts_u32_only() {
        assert_eq!(parse_seed("53740").unwrap(), 53_740);
        assert!(parse_seed("-1").unwrap_err().is_invalid_argument());
        assert!(parse_seed("4294967296").is_err());
        assert!(parse_seed("seed").is_err());
    }

    #[test]
    fn plain_range_yields_every_integer() {
        let range = SeedRange::new(5, 9, false).unwrap();
        assert_eq!(seeds(range).collect::<Vec<_>>(), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn scaled_range_yields_multiples_of_scale() {
        let range = SeedRange::new(5, 7, true).unwrap();
        assert_eq!(seeds(range).collect::<Vec<_>>(), vec![100, 120, 140]);
    }

    #[test]
    fn single_value_range() {
        let range = SeedRange::new(42, 42, false).unwrap();
        assert_eq!(seeds(range).collect::<Vec<_>>(), vec![42]);
    }

    #[test]
    fn enumeration_is_restartable() {
        let range = SeedRange::new(1, 4, true).unwrap();
        let first: Vec<u32> = seeds(range).collect();
        let second: Vec<u32> = seeds(range).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn count_matches_range_len() {
        for jewel in crate::JewelType::ALL {
            let range = jewel.seed_range();
            assert_eq!(seeds(range).count() as u64, range.len(), "{jewel}");
            assert!(seeds(range).all(|seed| range.contains(seed)));
        }
    }
}
