use rand::rngs::StdRng;
use rand::SeedableRng;

/// Runtime options for a mounted background.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackgroundConfig {
    /// Fixed seed for wave spawning; `None` draws from host entropy.
    pub seed: Option<u64>,
    /// Resolve theme colors once instead of every frame.
    pub cache_theme: bool,
}

impl BackgroundConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
