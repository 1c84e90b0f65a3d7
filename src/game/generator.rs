//! Hidden sequence generation

use crate::core::{GameConfig, Sequence};
use rand::Rng;

/// Draw a hidden sequence with every position uniform over the configured range
///
/// The random source is passed in explicitly, so seeded generators give
/// reproducible games.
///
/// # Examples
/// ```
/// use mastermind::core::GameConfig;
/// use mastermind::game::generate;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let config = GameConfig::default();
/// let hidden = generate(&config, &mut StdRng::seed_from_u64(7));
/// assert_eq!(hidden.len(), config.length());
/// assert!(hidden.values().iter().all(|&v| config.contains(v)));
/// ```
pub fn generate<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Sequence {
    let values: Vec<u8> = (0..config.length())
        .map(|_| rng.random_range(config.min()..config.max()))
        .collect();

    Sequence::new(values).unwrap_or_else(|_| unreachable!("config lengths are 4 or 5"))
}
